//! Turns the six raw field strings into a [`Record`].
//!
//! Every rule runs on every call, so a form with three bad fields gets three errors back in
//! one pass. Values are trimmed before they are checked. The returned record has an empty
//! `created_at`; stamping it is the store's job.
//!
//! | field    | rule                                                    |
//! |----------|---------------------------------------------------------|
//! | id       | blank: generated; otherwise unique when asked to be     |
//! | name     | non-empty                                               |
//! | category | non-empty                                               |
//! | quantity | whole number >= 0                                       |
//! | price    | number >= 0, `,` accepted as the decimal separator      |
//! | location | anything                                                |

use crate::error::{FieldError, FieldErrors};
use crate::model::{Column, RawFields, Record};

pub const MSG_ID_NOT_UNIQUE: &str = "id must be unique";
pub const MSG_NAME_EMPTY: &str = "name must not be empty";
pub const MSG_CATEGORY_EMPTY: &str = "category must not be empty";
pub const MSG_QUANTITY: &str = "quantity must be a whole number >= 0";
pub const MSG_PRICE: &str = "price must be a number >= 0";

/// Validates `raw` against the ids already in use.
///
/// With `require_unique_id`, a supplied id that appears in `existing_ids` is rejected. A
/// blank id is always replaced by [`next_id`], which never collides.
///
/// # Examples
/// ```
/// use stockz::model::RawFields;
/// use stockz::validate::validate;
///
/// let raw = RawFields {
///     name: "Bolt".into(),
///     category: "Hardware".into(),
///     quantity: "10".into(),
///     price: "0,5".into(),
///     ..RawFields::default()
/// };
/// let record = validate(&raw, &["1"], true).unwrap();
/// assert_eq!(record.id, "2");
/// assert_eq!(record.price, 0.5);
///
/// let errors = validate(&RawFields::default(), &[], true).unwrap_err();
/// assert_eq!(errors.len(), 4);
/// ```
pub fn validate(
    raw: &RawFields,
    existing_ids: &[&str],
    require_unique_id: bool,
) -> Result<Record, FieldErrors> {
    let mut errors = FieldErrors::new();

    let id = raw.id.trim();
    let id = if id.is_empty() {
        next_id(existing_ids)
    } else {
        if require_unique_id && existing_ids.contains(&id) {
            errors.push(FieldError::duplicate(Column::Id, MSG_ID_NOT_UNIQUE));
        }
        id.to_string()
    };

    let name = raw.name.trim().to_string();
    if name.is_empty() {
        errors.push(FieldError::invalid(Column::Name, MSG_NAME_EMPTY));
    }

    let category = raw.category.trim().to_string();
    if category.is_empty() {
        errors.push(FieldError::invalid(Column::Category, MSG_CATEGORY_EMPTY));
    }

    let quantity = parse_quantity(&raw.quantity).unwrap_or_else(|| {
        errors.push(FieldError::invalid(Column::Quantity, MSG_QUANTITY));
        0
    });

    let price = parse_price(&raw.price).unwrap_or_else(|| {
        errors.push(FieldError::invalid(Column::Price, MSG_PRICE));
        0.0
    });

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Record {
        id,
        name,
        category,
        quantity,
        price,
        location: raw.location.trim().to_string(),
        created_at: String::new(),
    })
}

/// Proposes an id for a record that was given none.
///
/// Starts at `existing_ids.len() + 1` and counts upward until the number is free, so ids
/// `{"1", "2", "4"}` yield `"5"`.
pub fn next_id(existing_ids: &[&str]) -> String {
    let mut candidate = existing_ids.len() + 1;
    loop {
        let id = candidate.to_string();
        if !existing_ids.contains(&id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}

fn parse_quantity(raw: &str) -> Option<u64> {
    let value: i64 = raw.trim().parse().ok()?;
    u64::try_from(value).ok()
}

fn parse_price(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    // -0.0 passes the sign check; store it as 0.0
    Some(if value == 0.0 { 0.0 } else { value })
}
