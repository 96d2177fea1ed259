//! Treasury domain models, persistence-friendly and immutable once computed.

pub mod balance;
pub mod entry;
pub mod expense;
pub mod member;
pub mod withdrawal;

pub use balance::InitialBalance;
pub use entry::{Offer, OtherEntry, Tithe};
pub use expense::{Expense, ExpenseCategory};
pub use member::Member;
pub use withdrawal::Withdrawal;
