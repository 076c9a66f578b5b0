use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use tracing::debug;

pub fn run<S: RecordStore>(store: &mut S, target_id: &str) -> Result<CmdResult> {
    let record = store.remove_record(target_id)?;
    debug!(id = %record.id, "record deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record deleted ({}): {}",
        record.id, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockzError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_only_the_target() {
        let mut store = StoreFixture::new().with_records(3).store;
        let result = run(&mut store, "2").unwrap();
        assert_eq!(result.affected_records[0].id, "2");
        assert_eq!(store.ids(), vec!["1", "3"]);
    }

    #[test]
    fn missing_target_is_reported_without_change() {
        let mut store = StoreFixture::new().with_records(2).store;
        let before = store.records().to_vec();
        assert!(matches!(run(&mut store, "7"), Err(StockzError::NotFound(_))));
        assert_eq!(store.records(), before.as_slice());
    }
}
