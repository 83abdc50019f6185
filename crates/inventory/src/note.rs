//! Free-text note entry: `"<title> <quantity> [<date>|none]"`.
//!
//! There is no delimiter between title and quantity, so the note is read
//! from the end. If the last token is a `YYYY-MM-DD` date or the `none`
//! marker (any case) it is the expiration token and the quantity sits just
//! before it; otherwise the last token is the quantity. Whatever precedes the
//! quantity, rejoined with single spaces, is the title. Tokens are separated
//! by runs of Unicode whitespace or the ASCII information separators
//! U+001C..=U+001F.
//!
//! Known limitation: a title ending in a word that looks like a date or is
//! literally `none` cannot be told apart from an expiration token, e.g.
//! `"Bread none"` reads `Bread` as the quantity and fails.

use pantry_core::{ExpirationDate, InventoryError, InventoryResult, Quantity};

use crate::batch::Batch;
use crate::store::{Inventory, record};

/// A fully validated note, ready to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub quantity: Quantity,
    pub expiration_date: Option<ExpirationDate>,
}

impl Note {
    /// Classify and validate `text` without touching any inventory.
    pub fn parse(text: &str) -> InventoryResult<Self> {
        let tokens: Vec<&str> = text
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .collect();
        let [head @ .., second_last, last] = tokens.as_slice() else {
            return Err(InventoryError::malformed_note(text));
        };

        let expiration_token = classify_expiration_token(last);
        let has_expiration_token = expiration_token.is_some();
        let (title_tokens, quantity_token, expiration_date) = match expiration_token {
            Some(expiration_date) => (head, *second_last, expiration_date),
            None => (&tokens[..tokens.len() - 1], *last, None),
        };

        let quantity: Quantity = quantity_token.parse()?;
        let title = title_tokens.join(" ");

        tracing::trace!(
            title = %title,
            quantity = %quantity,
            has_expiration_token,
            "note classified"
        );

        Ok(Self {
            title,
            quantity,
            expiration_date,
        })
    }

    pub fn into_batch(self) -> (String, Batch) {
        (self.title, Batch::new(self.quantity, self.expiration_date))
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// `Some(date)` when `token` is an expiration token, with `Some(None)` for
/// the `none` marker; `None` when `token` is not an expiration token at all.
fn classify_expiration_token(token: &str) -> Option<Option<ExpirationDate>> {
    if ExpirationDate::is_no_expiration_marker(token) {
        return Some(None);
    }
    ExpirationDate::parse(token).ok().map(Some)
}

/// Parse `note` and record the resulting batch.
///
/// The note is validated completely first, so the inventory is unchanged
/// whenever an error is returned.
pub fn add_by_note(inventory: &mut Inventory, note: &str) -> InventoryResult<()> {
    let (title, batch) = Note::parse(note)?.into_batch();
    record(inventory, &title, batch);
    Ok(())
}
