use crate::commands::CmdResult;
use crate::error::{Result, StockzError};
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, target_id: &str) -> Result<CmdResult> {
    let record = store
        .get_record(target_id.trim())
        .cloned()
        .ok_or_else(|| StockzError::NotFound(target_id.to_string()))?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}
