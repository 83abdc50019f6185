use serde::Serialize;

use pantry_core::{ExpirationDate, Quantity, ValueObject};

/// One received lot of a product.
///
/// Immutable once recorded: the inventory only ever appends batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    quantity: Quantity,
    expiration_date: Option<ExpirationDate>,
}

impl Batch {
    pub fn new(quantity: Quantity, expiration_date: Option<ExpirationDate>) -> Self {
        Self {
            quantity,
            expiration_date,
        }
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    /// `None` means the batch does not expire.
    pub fn expiration_date(&self) -> Option<ExpirationDate> {
        self.expiration_date
    }

    /// Expires strictly before `cutoff`. Non-expiring batches never do.
    pub fn expires_before(&self, cutoff: chrono::NaiveDate) -> bool {
        self.expiration_date.is_some_and(|date| date.is_before(cutoff))
    }
}

impl ValueObject for Batch {}
