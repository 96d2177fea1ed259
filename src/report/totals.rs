//! The reference-period aggregation engine.
//!
//! Every report view and the live partial-balance widget consume the single
//! [`PeriodTotals`] computed here; no report re-sums ledger collections on
//! its own. The engine is a pure function of the snapshot it is handed: all
//! arithmetic happens on integer cents with overflow checks, and each summed
//! value is converted to decimal exactly once at the return boundary.

use serde::Serialize;
use uuid::Uuid;

use crate::errors::TreasuryError;
use crate::ledger::{Expense, InitialBalance, Offer, OtherEntry, Tithe, Withdrawal};
use crate::money::to_decimal;
use crate::period::{classify, PeriodClass, ReferencePeriod};

/// Consolidated totals for one target period. Derived on every request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub period: ReferencePeriod,
    /// Balance carried over from all periods strictly before the target.
    pub previous_balance: f64,
    pub total_tithes: f64,
    pub total_special_offers: f64,
    pub total_loose_offers: f64,
    pub total_other_entries: f64,
    /// Withdrawals are disclosed, not part of `total_entries` and not
    /// subtracted from `total_balance`.
    pub total_withdrawals: f64,
    /// Income of the target period: tithes + both offer kinds + other
    /// entries.
    pub total_entries: f64,
    pub total_expenses: f64,
    /// `previous_balance + total_entries - total_expenses`.
    pub total_balance: f64,
}

/// Computes the consolidated totals for `target` from one consistent
/// snapshot of the ledger collections.
///
/// If `target` is before or equal to the initial balance's own period, the
/// previous balance is zero: the initial balance has not taken effect yet
/// and history before it is not counted. A missing initial balance behaves
/// as zero cents at a baseline period before everything, so all history
/// counts.
///
/// Fails with [`TreasuryError::InvalidAmount`] naming the offending record
/// if any cents sum overflows, and with [`TreasuryError::PeriodOutOfRange`]
/// if a record slipped past ingestion with an invalid month. No partial
/// totals are ever returned.
#[allow(clippy::too_many_arguments)]
pub fn compute_totals(
    target: ReferencePeriod,
    initial_balance: Option<&InitialBalance>,
    tithes: &[Tithe],
    offers: &[Offer],
    other_entries: &[OtherEntry],
    expenses: &[Expense],
    withdrawals: &[Withdrawal],
) -> Result<PeriodTotals, TreasuryError> {
    tracing::debug!(
        %target,
        tithes = tithes.len(),
        offers = offers.len(),
        other_entries = other_entries.len(),
        expenses = expenses.len(),
        withdrawals = withdrawals.len(),
        "computing period totals"
    );

    let baseline = initial_balance
        .map(|balance| balance.period)
        .unwrap_or_else(ReferencePeriod::baseline);
    // The one cross-cutting special case, checked before any partitioning:
    // until the initial balance takes effect there is no carry-over at all.
    let carry_over_active = baseline.is_strictly_before(&target);

    let mut previous = Sums::default();
    let mut current = Sums::default();

    for tithe in tithes {
        check_period("tithes", tithe.id, &tithe.period)?;
        match classify(&tithe.period, &target) {
            PeriodClass::Previous => previous.add_tithe("tithes", tithe.id, tithe.amount_cents)?,
            PeriodClass::Current => current.add_tithe("tithes", tithe.id, tithe.amount_cents)?,
            PeriodClass::Future => {}
        }
    }

    for offer in offers {
        check_period("offers", offer.id, &offer.period)?;
        match classify(&offer.period, &target) {
            PeriodClass::Previous => {
                previous.add_offer("offers", offer.id, offer.amount_cents, offer.is_special())?
            }
            PeriodClass::Current => {
                current.add_offer("offers", offer.id, offer.amount_cents, offer.is_special())?
            }
            PeriodClass::Future => {}
        }
    }

    for entry in other_entries {
        check_period("other_entries", entry.id, &entry.period)?;
        match classify(&entry.period, &target) {
            PeriodClass::Previous => {
                previous.add_other("other_entries", entry.id, entry.amount_cents)?
            }
            PeriodClass::Current => {
                current.add_other("other_entries", entry.id, entry.amount_cents)?
            }
            PeriodClass::Future => {}
        }
    }

    for expense in expenses {
        check_period("expenses", expense.id, &expense.period)?;
        match classify(&expense.period, &target) {
            PeriodClass::Previous => {
                previous.add_expense("expenses", expense.id, expense.amount_cents)?
            }
            PeriodClass::Current => {
                current.add_expense("expenses", expense.id, expense.amount_cents)?
            }
            PeriodClass::Future => {}
        }
    }

    for withdrawal in withdrawals {
        check_period("withdrawals", withdrawal.id, &withdrawal.period)?;
        match classify(&withdrawal.period, &target) {
            PeriodClass::Previous => {
                previous.add_withdrawal("withdrawals", withdrawal.id, withdrawal.amount_cents)?
            }
            PeriodClass::Current => {
                current.add_withdrawal("withdrawals", withdrawal.id, withdrawal.amount_cents)?
            }
            PeriodClass::Future => {}
        }
    }

    let previous_balance_cents = if carry_over_active {
        let initial_cents = initial_balance.map(|balance| balance.amount_cents).unwrap_or(0);
        // Previous withdrawals enter positively: they are cash movements
        // already recorded in the ledger history, matching the stored
        // running balance.
        let credited = checked_sum(
            &[
                initial_cents,
                previous.tithes,
                previous.special_offers,
                previous.loose_offers,
                previous.other_entries,
                previous.withdrawals,
            ],
            "initial_balance",
            Uuid::nil(),
        )?;
        credited
            .checked_sub(previous.expenses)
            .ok_or_else(|| overflow("initial_balance", Uuid::nil()))?
    } else {
        0
    };

    let total_entries_cents = checked_sum(
        &[
            current.tithes,
            current.special_offers,
            current.loose_offers,
            current.other_entries,
        ],
        "offers",
        Uuid::nil(),
    )?;
    let total_balance_cents = previous_balance_cents
        .checked_add(total_entries_cents)
        .and_then(|cents| cents.checked_sub(current.expenses))
        .ok_or_else(|| overflow("expenses", Uuid::nil()))?;

    Ok(PeriodTotals {
        period: target,
        previous_balance: to_decimal(previous_balance_cents),
        total_tithes: to_decimal(current.tithes),
        total_special_offers: to_decimal(current.special_offers),
        total_loose_offers: to_decimal(current.loose_offers),
        total_other_entries: to_decimal(current.other_entries),
        total_withdrawals: to_decimal(current.withdrawals),
        total_entries: to_decimal(total_entries_cents),
        total_expenses: to_decimal(current.expenses),
        total_balance: to_decimal(total_balance_cents),
    })
}

/// Integer-cents accumulators for one side of the partition.
#[derive(Debug, Default)]
struct Sums {
    tithes: i64,
    special_offers: i64,
    loose_offers: i64,
    other_entries: i64,
    expenses: i64,
    withdrawals: i64,
}

impl Sums {
    fn add_tithe(&mut self, collection: &'static str, id: Uuid, cents: i64) -> SumResult {
        self.tithes = add(self.tithes, cents, collection, id)?;
        Ok(())
    }

    fn add_offer(
        &mut self,
        collection: &'static str,
        id: Uuid,
        cents: i64,
        special: bool,
    ) -> SumResult {
        if special {
            self.special_offers = add(self.special_offers, cents, collection, id)?;
        } else {
            self.loose_offers = add(self.loose_offers, cents, collection, id)?;
        }
        Ok(())
    }

    fn add_other(&mut self, collection: &'static str, id: Uuid, cents: i64) -> SumResult {
        self.other_entries = add(self.other_entries, cents, collection, id)?;
        Ok(())
    }

    fn add_expense(&mut self, collection: &'static str, id: Uuid, cents: i64) -> SumResult {
        self.expenses = add(self.expenses, cents, collection, id)?;
        Ok(())
    }

    fn add_withdrawal(&mut self, collection: &'static str, id: Uuid, cents: i64) -> SumResult {
        self.withdrawals = add(self.withdrawals, cents, collection, id)?;
        Ok(())
    }
}

type SumResult = Result<(), TreasuryError>;

fn add(total: i64, cents: i64, collection: &'static str, id: Uuid) -> Result<i64, TreasuryError> {
    total.checked_add(cents).ok_or_else(|| overflow(collection, id))
}

fn checked_sum(
    values: &[i64],
    collection: &'static str,
    id: Uuid,
) -> Result<i64, TreasuryError> {
    values.iter().try_fold(0i64, |acc, value| {
        acc.checked_add(*value).ok_or_else(|| overflow(collection, id))
    })
}

fn overflow(collection: &'static str, id: Uuid) -> TreasuryError {
    TreasuryError::InvalidAmount {
        collection,
        id,
        reason: "cents sum overflowed".into(),
    }
}

pub(crate) fn check_period(
    collection: &'static str,
    id: Uuid,
    period: &ReferencePeriod,
) -> Result<(), TreasuryError> {
    if !(1..=12).contains(&period.month) {
        return Err(TreasuryError::PeriodOutOfRange {
            collection,
            id,
            month: period.month,
        });
    }
    Ok(())
}
