//! Per-member and per-category rollups for the entries and output reports.
//!
//! Same summation rules as the engine: integer cents per entity, one decimal
//! conversion at the end. Grouping is the only difference.

use std::collections::HashMap;

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

use crate::errors::TreasuryError;
use crate::ledger::{Expense, ExpenseCategory, Member, Offer, Tithe};
use crate::money::to_decimal;
use crate::period::{classify, PeriodClass, ReferencePeriod};
use crate::report::totals::check_period;

/// Whether entities with all-zero totals appear in a rollup. Keeping them is
/// the default; hiding them is a report-display option, not a ledger rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollupFilter {
    #[default]
    All,
    NonZeroOnly,
}

/// One member's tithe and special-offer totals for the target period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberTotals {
    pub member_id: Uuid,
    pub member_name: String,
    pub total_tithes: f64,
    pub total_offers: f64,
}

/// One expense category's total for the target period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub category_id: Uuid,
    pub category_name: String,
    pub total_expenses: f64,
}

/// Sums each member's tithes and special offers within `target`.
///
/// Loose offers carry no member and never appear here. Output is sorted by
/// member name (locale-aware, diacritic-insensitive), ties by id.
pub fn member_rollup(
    target: ReferencePeriod,
    members: &[Member],
    tithes: &[Tithe],
    offers: &[Offer],
    filter: RollupFilter,
) -> Result<Vec<MemberTotals>, TreasuryError> {
    let mut sums: HashMap<Uuid, (i64, i64)> = HashMap::new();

    for tithe in tithes {
        check_period("tithes", tithe.id, &tithe.period)?;
        if classify(&tithe.period, &target) != PeriodClass::Current {
            continue;
        }
        let slot = sums.entry(tithe.member_id).or_default();
        slot.0 = slot.0.checked_add(tithe.amount_cents).ok_or_else(|| {
            TreasuryError::InvalidAmount {
                collection: "tithes",
                id: tithe.id,
                reason: "cents sum overflowed".into(),
            }
        })?;
    }

    for offer in offers {
        check_period("offers", offer.id, &offer.period)?;
        if classify(&offer.period, &target) != PeriodClass::Current {
            continue;
        }
        let Some(member_id) = offer.member_id else {
            continue;
        };
        let slot = sums.entry(member_id).or_default();
        slot.1 = slot.1.checked_add(offer.amount_cents).ok_or_else(|| {
            TreasuryError::InvalidAmount {
                collection: "offers",
                id: offer.id,
                reason: "cents sum overflowed".into(),
            }
        })?;
    }

    let mut rows: Vec<MemberTotals> = members
        .iter()
        .filter_map(|member| {
            let (tithe_cents, offer_cents) = sums.get(&member.id).copied().unwrap_or((0, 0));
            if filter == RollupFilter::NonZeroOnly && tithe_cents == 0 && offer_cents == 0 {
                return None;
            }
            Some(MemberTotals {
                member_id: member.id,
                member_name: member.name.clone(),
                total_tithes: to_decimal(tithe_cents),
                total_offers: to_decimal(offer_cents),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        collation_key(&a.member_name)
            .cmp(&collation_key(&b.member_name))
            .then(a.member_id.cmp(&b.member_id))
    });
    Ok(rows)
}

/// Sums each category's expenses within `target`. Same ordering and filter
/// rules as the member rollup.
pub fn category_rollup(
    target: ReferencePeriod,
    categories: &[ExpenseCategory],
    expenses: &[Expense],
    filter: RollupFilter,
) -> Result<Vec<CategoryTotals>, TreasuryError> {
    let mut sums: HashMap<Uuid, i64> = HashMap::new();

    for expense in expenses {
        check_period("expenses", expense.id, &expense.period)?;
        if classify(&expense.period, &target) != PeriodClass::Current {
            continue;
        }
        let slot = sums.entry(expense.category_id).or_default();
        *slot = slot.checked_add(expense.amount_cents).ok_or_else(|| {
            TreasuryError::InvalidAmount {
                collection: "expenses",
                id: expense.id,
                reason: "cents sum overflowed".into(),
            }
        })?;
    }

    let mut rows: Vec<CategoryTotals> = categories
        .iter()
        .filter_map(|category| {
            let cents = sums.get(&category.id).copied().unwrap_or(0);
            if filter == RollupFilter::NonZeroOnly && cents == 0 {
                return None;
            }
            Some(CategoryTotals {
                category_id: category.id,
                category_name: category.name.clone(),
                total_expenses: to_decimal(cents),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        collation_key(&a.category_name)
            .cmp(&collation_key(&b.category_name))
            .then(a.category_id.cmp(&b.category_id))
    });
    Ok(rows)
}

/// Diacritic-insensitive, case-insensitive sort key so names like "Ângela"
/// and "Angela" collate together.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}
