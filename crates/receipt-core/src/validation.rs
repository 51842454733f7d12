//! # Validation Module
//!
//! Turns a raw JSON submission into a [`Receipt`], or reports the first rule
//! it breaks.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Validation                                 │
//! │                                                                         │
//! │  raw JSON ──► empty? ──────────────────────────► CoreError::EmptyBody   │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  1. retailer      [\w\s\-&]+        ─┐                                 │
//! │  2. purchaseDate  \d{4}-\d{2}-\d{2}  │                                 │
//! │  3. purchaseTime  \d{2}:\d{2}        │  first failure wins             │
//! │  4. total         \d+\.\d{2}         ├──────────► ValidationError       │
//! │  5. items         non-empty array    │                                 │
//! │  6. each item     description, price ┘                                 │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │              Receipt                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Character Classes
//! The accepted sets are fixed and ASCII-oriented: a word character is
//! `[A-Za-z0-9_]` and a digit is `[0-9]`. Whitespace is the ECMAScript `\s`
//! set (see [`is_pattern_whitespace`]), which differs from
//! [`char::is_whitespace`] on U+0085 and U+FEFF.

use serde_json::Value;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Item, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Entry Point
// =============================================================================

/// Validates a submitted receipt.
///
/// ## Errors
/// - [`CoreError::EmptyBody`] when the input carries no fields at all
/// - [`CoreError::Validation`] for the first violated field rule
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_receipt;
/// use receipt_core::{CoreError, ValidationError};
/// use serde_json::json;
///
/// assert_eq!(validate_receipt(&json!({})), Err(CoreError::EmptyBody));
///
/// let bad = json!({ "retailer": "Invalid Retailer!" });
/// assert_eq!(
///     validate_receipt(&bad),
///     Err(CoreError::Validation(ValidationError::InvalidRetailer))
/// );
/// ```
pub fn validate_receipt(input: &Value) -> CoreResult<Receipt> {
    if field_count(input) == 0 {
        return Err(CoreError::EmptyBody);
    }

    let retailer = checked_string(input, "retailer", is_valid_retailer)
        .ok_or(ValidationError::InvalidRetailer)?;
    let purchase_date = checked_string(input, "purchaseDate", is_valid_purchase_date)
        .ok_or(ValidationError::InvalidPurchaseDate)?;
    let purchase_time = checked_string(input, "purchaseTime", is_valid_purchase_time)
        .ok_or(ValidationError::InvalidPurchaseTime)?;
    let total =
        checked_string(input, "total", is_valid_amount).ok_or(ValidationError::InvalidTotal)?;

    let raw_items = input
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(ValidationError::EmptyItems)?;

    let items = raw_items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

/// Validates a single item; `index` is its position in `items`.
pub fn validate_item(index: usize, item: &Value) -> ValidationResult<Item> {
    let short_description = checked_string(item, "shortDescription", is_valid_short_description)
        .ok_or(ValidationError::InvalidShortDescription { index })?;
    let price = checked_string(item, "price", is_valid_amount)
        .ok_or(ValidationError::InvalidPrice { index })?;

    Ok(Item {
        short_description,
        price,
    })
}

/// Number of top-level fields in the submission.
///
/// A body is "empty" when this is zero: `null`, `{}`, `[]`, and the scalar
/// values that carry no fields.
fn field_count(input: &Value) -> usize {
    match input {
        Value::Object(map) => map.len(),
        Value::Array(values) => values.len(),
        Value::String(s) => s.len(),
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
    }
}

/// Returns `field` as an owned string if it is a string passing `check`.
fn checked_string(input: &Value, field: &str, check: fn(&str) -> bool) -> Option<String> {
    input
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| check(value))
        .map(str::to_string)
}

// =============================================================================
// Field Rules
// =============================================================================

/// `^[\w\s\-&]+$`
pub fn is_valid_retailer(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| is_word_char(c) || is_pattern_whitespace(c) || c == '-' || c == '&')
}

/// `^[\w\s\-]+$`
pub fn is_valid_short_description(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| is_word_char(c) || is_pattern_whitespace(c) || c == '-')
}

/// `^\d{4}-\d{2}-\d{2}$`
///
/// Shape only: `2022-02-30` and `2022-13-45` both pass.
pub fn is_valid_purchase_date(value: &str) -> bool {
    matches_shape(value, "####-##-##")
}

/// `^\d{2}:\d{2}$`
///
/// Shape only: `99:99` passes.
pub fn is_valid_purchase_time(value: &str) -> bool {
    matches_shape(value, "##:##")
}

/// `^\d+\.\d{2}$`: unsigned, exactly two decimals, no exponent.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::is_valid_amount;
///
/// assert!(is_valid_amount("18.74"));
/// assert!(is_valid_amount("0.00"));
/// assert!(!is_valid_amount("18.7"));
/// assert!(!is_valid_amount("-1.00"));
/// assert!(!is_valid_amount(".50"));
/// ```
pub fn is_valid_amount(value: &str) -> bool {
    match value.split_once('.') {
        Some((whole, fraction)) => {
            !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.len() == 2
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Matches `value` against `shape`, where `#` stands for one ASCII digit and
/// every other byte must match literally.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'#' => v.is_ascii_digit(),
            literal => v == literal,
        })
}

// =============================================================================
// Character Classes
// =============================================================================

/// `\w`: `[A-Za-z0-9_]`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `\s` in ECMAScript: WhiteSpace plus LineTerminator.
///
/// Also the set stripped by `String.prototype.trim`, which the description
/// rule relies on.
pub fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
