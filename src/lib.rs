#![doc(test(attr(deny(warnings))))]

//! Treasury Core implements the reference-period aggregation engine of a
//! church treasury ledger: previous-period carry-over, per-category totals
//! and the consolidated balance every report and the live partial-balance
//! widget share.

pub mod core;
pub mod errors;
pub mod ledger;
pub mod money;
pub mod period;
pub mod report;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Treasury Core tracing initialized.");
    });
}
