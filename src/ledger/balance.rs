use serde::{Deserialize, Serialize};

use crate::period::ReferencePeriod;

/// The treasury balance as of the start of `period`.
///
/// At most one exists system-wide (the storage layer upserts it under a
/// fixed key), so every interface passes `Option<InitialBalance>`; absence
/// means a zero balance with a baseline period before all history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitialBalance {
    pub amount_cents: i64,
    pub period: ReferencePeriod,
}

impl InitialBalance {
    pub fn new(amount_cents: i64, period: ReferencePeriod) -> Self {
        Self {
            amount_cents,
            period,
        }
    }
}
