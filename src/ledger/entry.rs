use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::period::ReferencePeriod;

/// A member's tithe for one reference period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tithe {
    pub id: Uuid,
    pub member_id: Uuid,
    pub amount_cents: i64,
    pub period: ReferencePeriod,
    pub created_at: DateTime<Utc>,
}

impl Tithe {
    pub fn new(member_id: Uuid, amount_cents: i64, period: ReferencePeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            amount_cents,
            period,
            created_at: Utc::now(),
        }
    }
}

/// An offering for one reference period.
///
/// A special offer is attributed to a member; a loose offer
/// (the gazofilacio box) carries no member reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub member_id: Option<Uuid>,
    pub amount_cents: i64,
    pub period: ReferencePeriod,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    pub fn special(member_id: Uuid, amount_cents: i64, period: ReferencePeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id: Some(member_id),
            amount_cents,
            period,
            created_at: Utc::now(),
        }
    }

    pub fn loose(amount_cents: i64, period: ReferencePeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id: None,
            amount_cents,
            period,
            created_at: Utc::now(),
        }
    }

    pub fn is_special(&self) -> bool {
        self.member_id.is_some()
    }
}

/// An income entry that is neither a tithe nor an offering, for example a
/// campaign or a donation in kind converted to cash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherEntry {
    pub id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub period: ReferencePeriod,
    pub created_at: DateTime<Utc>,
}

impl OtherEntry {
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
