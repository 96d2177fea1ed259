use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::period::ReferencePeriod;

/// A bank withdrawal recorded for one reference period.
///
/// Withdrawals are cash movements, not income or expenses: reports disclose
/// their total separately and the balance formula leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub period: ReferencePeriod,
    pub created_at: DateTime<Utc>,
}

impl Withdrawal {
    pub fn new(
        description: impl Into<String>,
        amount_cents: i64,
        period: ReferencePeriod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount_cents,
            period,
            created_at: Utc::now(),
        }
    }
}
