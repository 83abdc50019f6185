//! The sample walkthrough: build two inventories, then run every query.
//!
//! Inventories are built here on demand and owned by the caller.

use chrono::NaiveDate;
use serde::Serialize;

use pantry_core::{InventoryResult, Quantity};
use pantry_inventory::{Inventory, add, add_by_note, expiring_as_of, find, total_quantity};

pub const EGGS: &str = "Яйца Фабрики №1";

pub const NOTES: [&str; 3] = [
    "Сыр 0.3 2023-07-25",
    "Сок 1 None",
    "Яйца Фабрики №1 4 2023-07-15",
];

/// Inventory filled through the direct `add` path.
pub fn storage() -> InventoryResult<Inventory> {
    let mut storage = Inventory::new();
    add(&mut storage, EGGS, "4".parse()?, Some("2023-07-15"))?;
    Ok(storage)
}

/// Inventory filled from free-text notes.
pub fn goods() -> InventoryResult<Inventory> {
    let mut goods = Inventory::new();
    for note in NOTES {
        add_by_note(&mut goods, note)?;
    }
    Ok(goods)
}

/// Results of the walkthrough queries over [`goods`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub found: Vec<(String, Vec<String>)>,
    pub totals: Vec<(String, Quantity)>,
    pub today: NaiveDate,
    pub advance_days: i64,
    pub expiring: Vec<String>,
}

pub fn report(goods: &Inventory, today: NaiveDate, advance_days: i64) -> Report {
    let found = ["Сыр", "Яйца"]
        .into_iter()
        .map(|needle| (needle.to_owned(), owned(find(goods, needle))))
        .collect();
    let totals = ["Сок", "Яйца"]
        .into_iter()
        .map(|needle| (needle.to_owned(), total_quantity(goods, needle)))
        .collect();

    Report {
        found,
        totals,
        today,
        advance_days,
        expiring: owned(expiring_as_of(goods, today, advance_days)),
    }
}

fn owned(titles: Vec<&str>) -> Vec<String> {
    titles.into_iter().map(str::to_owned).collect()
}
