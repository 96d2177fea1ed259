//! Aggregation engine and report rollups.
//!
//! All summation in the system lives here; report assemblers are pure
//! presentation over these results.

pub mod rollup;
pub mod totals;

pub use rollup::{category_rollup, member_rollup, CategoryTotals, MemberTotals, RollupFilter};
pub use totals::{compute_totals, PeriodTotals};
