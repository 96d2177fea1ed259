pub mod json;
pub mod memory;

use crate::errors::TreasuryError;
use crate::ledger::{
    Expense, ExpenseCategory, InitialBalance, Member, Offer, OtherEntry, Tithe, Withdrawal,
};

pub type Result<T> = std::result::Result<T, TreasuryError>;

/// A consistent point-in-time view of every collection one totals
/// computation needs.
///
/// The engine is a pure function of a snapshot; whatever consistency the
/// storage engine can offer (a read transaction, a versioned query) is the
/// implementor's responsibility. One snapshot serves one computation.
pub trait LedgerSnapshot {
    fn members(&self) -> Result<Vec<Member>>;
    fn tithes(&self) -> Result<Vec<Tithe>>;
    fn offers(&self) -> Result<Vec<Offer>>;
    fn other_entries(&self) -> Result<Vec<OtherEntry>>;
    fn expenses(&self) -> Result<Vec<Expense>>;
    fn expense_categories(&self) -> Result<Vec<ExpenseCategory>>;
    fn withdrawals(&self) -> Result<Vec<Withdrawal>>;
    /// The singleton opening balance; absence is valid and means zero.
    fn initial_balance(&self) -> Result<Option<InitialBalance>>;
}

pub use json::load_snapshot_from_path;
pub use memory::MemorySnapshot;
