use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FieldError, FieldErrors, Result, StockzError};
use crate::model::{Column, RawFields};
use crate::store::RecordStore;
use crate::validate::{validate, MSG_ID_NOT_UNIQUE};
use tracing::debug;

/// A partial edit: `None` keeps the record's current value.
#[derive(Debug, Clone, Default)]
pub struct RecordEdit {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
}

impl RecordEdit {
    /// Overlays the edit on `base`.
    pub fn apply(self, base: RawFields) -> RawFields {
        RawFields {
            id: self.id.unwrap_or(base.id),
            name: self.name.unwrap_or(base.name),
            category: self.category.unwrap_or(base.category),
            quantity: self.quantity.unwrap_or(base.quantity),
            price: self.price.unwrap_or(base.price),
            location: self.location.unwrap_or(base.location),
        }
    }
}

/// Replaces every field of `target_id` with `raw`, keeping its `created_at` and position.
///
/// A new id may not collide with any other record; keeping the current id is always
/// allowed. On any failure the store is left as it was.
pub fn run<S: RecordStore>(store: &mut S, target_id: &str, raw: &RawFields) -> Result<CmdResult> {
    let previous = store
        .get_record(target_id)
        .cloned()
        .ok_or_else(|| StockzError::NotFound(target_id.to_string()))?;

    let ids = store.ids();
    let new_id = raw.id.trim();
    let clash = !new_id.is_empty() && new_id != target_id && ids.contains(&new_id);

    let validated = validate(raw, &ids, false);
    if clash {
        let mut errors = FieldErrors::from(FieldError::duplicate(Column::Id, MSG_ID_NOT_UNIQUE));
        if let Err(rest) = validated {
            errors.append(rest);
        }
        return Err(errors.into());
    }
    let mut record = validated?;
    record.created_at = previous.created_at;

    store.replace_record(target_id, record.clone())?;
    debug!(target = target_id, id = %record.id, "record updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        record.id, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}

/// Applies a partial edit on top of the current values of `target_id`.
pub fn edit<S: RecordStore>(store: &mut S, target_id: &str, edit: RecordEdit) -> Result<CmdResult> {
    let current = store
        .get_record(target_id)
        .map(RawFields::from_record)
        .ok_or_else(|| StockzError::NotFound(target_id.to_string()))?;
    run(store, target_id, &edit.apply(current))
}
