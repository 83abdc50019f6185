//! Expiration dates and the `none` marker.

use core::fmt;
use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::{InventoryError, InventoryResult};
use crate::value_object::ValueObject;

/// Token that stands for "does not expire" wherever a date is expected.
/// Matched without regard to letter case.
pub const NO_EXPIRATION_MARKER: &str = "none";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar day after which a batch is spoiled. No time-of-day component.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpirationDate(NaiveDate);

impl ExpirationDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse strict `YYYY-MM-DD` text (zero-padded month and day, year 0001
    /// or later).
    pub fn parse(text: &str) -> InventoryResult<Self> {
        if !has_date_shape(text) {
            return Err(InventoryError::date_format(text));
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
            .map(Self)
            .ok_or_else(|| InventoryError::date_format(text))
    }

    /// Parse an optional date; absent or empty text means no expiration.
    pub fn parse_optional(text: Option<&str>) -> InventoryResult<Option<Self>> {
        match text {
            None | Some("") => Ok(None),
            Some(text) => Self::parse(text).map(Some),
        }
    }

    /// Whether `token` is the literal `none` marker (any letter case).
    pub fn is_no_expiration_marker(token: &str) -> bool {
        token.eq_ignore_ascii_case(NO_EXPIRATION_MARKER)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Strictly earlier than `cutoff`; a batch expiring on the cutoff day
    /// itself does not count.
    pub fn is_before(&self, cutoff: NaiveDate) -> bool {
        self.0 < cutoff
    }
}

impl ValueObject for ExpirationDate {}

fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ExpirationDate {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for ExpirationDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Serialize for ExpirationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
