use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{timestamp_now, RawFields};
use crate::store::RecordStore;
use crate::validate::validate;
use tracing::debug;

pub fn run<S: RecordStore>(store: &mut S, raw: &RawFields) -> Result<CmdResult> {
    let mut record = validate(raw, &store.ids(), true)?;
    record.created_at = timestamp_now();
    store.insert_record(record.clone())?;
    debug!(id = %record.id, "record added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added ({}): {}",
        record.id, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}
