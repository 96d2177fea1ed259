//! Reference periods and the ordering that partitions ledger history.
//!
//! A reference period is the (month, year) a financial record is attributed
//! to, independent of when it was entered. Every aggregation rule in the
//! crate reduces to the strict ordering defined here.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TreasuryError;
use uuid::Uuid;

/// The (month, year) a financial record applies to.
///
/// Ordered by year first, then month. `(0, 0)` is the synthetic baseline the
/// aggregation engine substitutes for a missing initial balance; it sorts
/// before every real period, so regular construction rejects it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ReferencePeriod {
    pub month: u32,
    pub year: i32,
}

impl ReferencePeriod {
    /// Builds a validated period. The month must be in 1-12.
    pub fn new(month: u32, year: i32) -> Result<Self, TreasuryError> {
        if !(1..=12).contains(&month) {
            return Err(TreasuryError::PeriodOutOfRange {
                collection: "period",
                id: Uuid::nil(),
                month,
            });
        }
        Ok(Self { month, year })
    }

    /// The period "now" falls in, used by the live partial-balance widget.
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    /// Baseline standing in for a missing initial balance; precedes every
    /// real period.
    pub(crate) fn baseline() -> Self {
        Self { month: 0, year: 0 }
    }

    pub fn is_strictly_before(&self, other: &ReferencePeriod) -> bool {
        self < other
    }
}

impl Ord for ReferencePeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for ReferencePeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for ReferencePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// Where a record falls relative to the target period.
///
/// Future records are excluded from every total; they guard against stray
/// forward-dated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodClass {
    Previous,
    Current,
    Future,
}

/// Classifies `period` against `target`: strictly before is `Previous`,
/// equal is `Current`, anything else is `Future`.
pub fn classify(period: &ReferencePeriod, target: &ReferencePeriod) -> PeriodClass {
    match period.cmp(target) {
        std::cmp::Ordering::Less => PeriodClass::Previous,
        std::cmp::Ordering::Equal => PeriodClass::Current,
        std::cmp::Ordering::Greater => PeriodClass::Future,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(month: u32, year: i32) -> ReferencePeriod {
        ReferencePeriod::new(month, year).expect("valid period")
    }

    #[test]
    fn orders_by_year_then_month() {
        assert!(period(12, 2022) < period(1, 2023));
        assert!(period(1, 2023) < period(2, 2023));
        assert!(period(2, 2023) == period(2, 2023));
        assert!(period(3, 2023) > period(2, 2023));
    }

    #[test]
    fn strictly_before_matches_ordering() {
        assert!(period(12, 2022).is_strictly_before(&period(1, 2023)));
        assert!(!period(2, 2023).is_strictly_before(&period(2, 2023)));
        assert!(!period(3, 2023).is_strictly_before(&period(2, 2023)));
    }

    #[test]
    fn classifies_against_target() {
        let target = period(2, 2023);
        assert_eq!(classify(&period(1, 2023), &target), PeriodClass::Previous);
        assert_eq!(classify(&period(12, 2022), &target), PeriodClass::Previous);
        assert_eq!(classify(&period(2, 2023), &target), PeriodClass::Current);
        assert_eq!(classify(&period(3, 2023), &target), PeriodClass::Future);
        assert_eq!(classify(&period(1, 2024), &target), PeriodClass::Future);
    }

    #[test]
    fn baseline_precedes_every_real_period() {
        assert!(ReferencePeriod::baseline() < period(1, 1900));
    }

    #[test]
    fn rejects_out_of_range_months() {
        assert!(ReferencePeriod::new(0, 2023).is_err());
        assert!(ReferencePeriod::new(13, 2023).is_err());
        assert!(ReferencePeriod::new(1, 2023).is_ok());
        assert!(ReferencePeriod::new(12, 2023).is_ok());
    }
}
