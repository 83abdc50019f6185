//! Read-only queries over an [`Inventory`].

use chrono::{Local, NaiveDate, TimeDelta};

use pantry_core::Quantity;

use crate::store::Inventory;

/// Titles containing `needle` as a substring, ignoring letter case.
///
/// Titles come back in inventory key order. An empty needle matches every
/// title.
pub fn find<'a>(inventory: &'a Inventory, needle: &str) -> Vec<&'a str> {
    let needle = needle.to_lowercase();
    inventory
        .titles()
        .filter(|title| title.to_lowercase().contains(&needle))
        .collect()
}

/// Exact sum of every batch quantity under every title matched by [`find`].
pub fn total_quantity(inventory: &Inventory, needle: &str) -> Quantity {
    find(inventory, needle)
        .into_iter()
        .filter_map(|title| inventory.batches(title))
        .flatten()
        .map(|batch| batch.quantity())
        .sum()
}

/// Titles with a batch that expires before `today + advance_days`, where
/// today is the local calendar date.
pub fn expiring(inventory: &Inventory, advance_days: i64) -> Vec<&str> {
    expiring_as_of(inventory, Local::now().date_naive(), advance_days)
}

/// Titles with at least one batch expiring strictly before
/// `today + advance_days`. Each title is listed once, in key order.
///
/// `advance_days` may be negative. A window too large for the calendar
/// saturates at the earliest/latest representable date.
pub fn expiring_as_of(inventory: &Inventory, today: NaiveDate, advance_days: i64) -> Vec<&str> {
    let cutoff = cutoff_date(today, advance_days);
    inventory
        .iter()
        .filter(|(_, batches)| batches.iter().any(|batch| batch.expires_before(cutoff)))
        .map(|(title, _)| title)
        .collect()
}

fn cutoff_date(today: NaiveDate, advance_days: i64) -> NaiveDate {
    TimeDelta::try_days(advance_days)
        .and_then(|delta| today.checked_add_signed(delta))
        .unwrap_or(if advance_days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}
