//! Inventory domain module.
//!
//! Tracks perishable products as batches (quantity + optional expiration
//! date) grouped by title. Everything here is deterministic in-memory logic;
//! the only reading of the wall clock is [`expiring`], which delegates to the
//! date-explicit [`expiring_as_of`].

pub mod batch;
pub mod note;
pub mod query;
pub mod store;

pub use batch::Batch;
pub use note::{Note, add_by_note};
pub use query::{expiring, expiring_as_of, find, total_quantity};
pub use store::{Inventory, add};

pub use pantry_core::{ExpirationDate, InventoryError, InventoryResult, Quantity};
