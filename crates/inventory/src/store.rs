use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use pantry_core::{ExpirationDate, InventoryResult, Quantity};

use crate::batch::Batch;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Product {
    title: String,
    batches: Vec<Batch>,
}

/// Product title → batches, in the order titles were first added.
///
/// Titles are exact, case-sensitive keys. A title is never removed and its
/// batches are only ever appended, so iteration is reproducible for a given
/// sequence of additions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// Batches recorded under `title`, oldest first.
    pub fn batches(&self, title: &str) -> Option<&[Batch]> {
        self.index
            .get(title)
            .map(|&i| self.products[i].batches.as_slice())
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.title.as_str())
    }

    /// `(title, batches)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Batch])> {
        self.products
            .iter()
            .map(|p| (p.title.as_str(), p.batches.as_slice()))
    }

    fn push(&mut self, title: &str, batch: Batch) {
        match self.index.get(title) {
            Some(&i) => self.products[i].batches.push(batch),
            None => {
                self.index.insert(title.to_owned(), self.products.len());
                self.products.push(Product {
                    title: title.to_owned(),
                    batches: vec![batch],
                });
            }
        }
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.products.len()))?;
        for product in &self.products {
            map.serialize_entry(&product.title, &product.batches)?;
        }
        map.end()
    }
}

/// Record a batch of `quantity` under `title`.
///
/// `expiration_date` is `YYYY-MM-DD` text; `None` (or empty text) records a
/// batch that never expires. The inventory is untouched when the date is
/// malformed.
pub fn add(
    inventory: &mut Inventory,
    title: &str,
    quantity: Quantity,
    expiration_date: Option<&str>,
) -> InventoryResult<()> {
    let expiration_date = ExpirationDate::parse_optional(expiration_date)?;
    record(inventory, title, Batch::new(quantity, expiration_date));
    Ok(())
}

/// Append an already-validated batch. Single mutation path of the inventory.
pub(crate) fn record(inventory: &mut Inventory, title: &str, batch: Batch) {
    tracing::debug!(
        title,
        quantity = %batch.quantity(),
        expiration_date = ?batch.expiration_date().map(|d| d.to_string()),
        "batch recorded"
    );
    inventory.push(title, batch);
}
