//! `pantry-core` — domain building blocks for the pantry inventory.
//!
//! This crate contains **pure domain** primitives (no IO, no clock access).

pub mod error;
pub mod expiration;
pub mod quantity;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use expiration::{ExpirationDate, NO_EXPIRATION_MARKER};
pub use quantity::{MAX_SCALE, Quantity};
pub use value_object::ValueObject;
