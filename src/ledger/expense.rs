use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::period::ReferencePeriod;

/// Categorises expenses for the output report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseCategory {
    pub id: Uuid,
    pub name: String,
}

impl ExpenseCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A categorised outgoing payment for one reference period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub category_id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub period: ReferencePeriod,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        category_id: Uuid,
        description: impl Into<String>,
        amount_cents: i64,
        period: ReferencePeriod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            description: description.into(),
            amount_cents,
            period,
            created_at: Utc::now(),
        }
    }
}
