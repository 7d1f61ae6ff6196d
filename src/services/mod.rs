//! Service layer
//!
//! Business logic on top of the storage layer: validation, persistence
//! on mutation, and the operations the CLI commands call into.

pub mod category;
pub mod import;
pub mod transaction;

pub use category::CategoryService;
pub use import::{ImportResult, ImportService};
pub use transaction::{NewTransaction, TransactionService};
