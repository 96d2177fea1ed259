use serde::{Deserialize, Serialize};

use crate::ledger::{
    Expense, ExpenseCategory, InitialBalance, Member, Offer, OtherEntry, Tithe, Withdrawal,
};

use super::{LedgerSnapshot, Result};

/// An owned, in-memory snapshot of the ledger collections.
///
/// The desktop shell materializes one of these per report request from its
/// storage reads; tests build them directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySnapshot {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub tithes: Vec<Tithe>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub other_entries: Vec<OtherEntry>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub expense_categories: Vec<ExpenseCategory>,
    #[serde(default)]
    pub withdrawals: Vec<Withdrawal>,
    #[serde(default)]
    pub initial_balance: Option<InitialBalance>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_balance(mut self, balance: InitialBalance) -> Self {
        self.initial_balance = Some(balance);
        self
    }
}

impl LedgerSnapshot for MemorySnapshot {
    fn members(&self) -> Result<Vec<Member>> {
        Ok(self.members.clone())
    }

    fn tithes(&self) -> Result<Vec<Tithe>> {
        Ok(self.tithes.clone())
    }

    fn offers(&self) -> Result<Vec<Offer>> {
        Ok(self.offers.clone())
    }

    fn other_entries(&self) -> Result<Vec<OtherEntry>> {
        Ok(self.other_entries.clone())
    }

    fn expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }

    fn expense_categories(&self) -> Result<Vec<ExpenseCategory>> {
        Ok(self.expense_categories.clone())
    }

    fn withdrawals(&self) -> Result<Vec<Withdrawal>> {
        Ok(self.withdrawals.clone())
    }

    fn initial_balance(&self) -> Result<Option<InitialBalance>> {
        Ok(self.initial_balance)
    }
}
