use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use std::path::Path;
use tracing::warn;

/// Replaces the store's contents with the records in `path`.
///
/// Nothing changes unless the whole file decodes and passes the store's integrity checks.
pub fn run<S: RecordStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    if let Err(e) = codec::load_file(path).and_then(|records| store.replace_all(records)) {
        warn!(path = %path.display(), error = %e, "load rejected");
        return Err(e);
    }

    let records = store.records().to_vec();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Loaded {} records from {}",
        records.len(),
        path.display()
    )));
    Ok(result.with_affected_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockzError;
    use crate::store::memory::fixtures::StoreFixture;
    use std::fs;

    const HEADER: &str = "id,name,category,quantity,price,location,created_at\n";

    #[test]
    fn replaces_store_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            format!("{}7,Hinge,Hardware,4,3.2,B2,2023-12-31 23:59:59\n", HEADER),
        )
        .unwrap();

        let mut store = StoreFixture::new().with_records(2).store;
        run(&mut store, &path).unwrap();
        assert_eq!(store.ids(), vec!["7"]);
        assert_eq!(
            store.get_record("7").unwrap().created_at,
            "2023-12-31 23:59:59"
        );
    }

    #[test]
    fn bad_row_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            format!("{}1,Hinge,Hardware,4,3.2,,t\n2,Latch,Hardware,abc,1,,t\n", HEADER),
        )
        .unwrap();

        let mut store = StoreFixture::new().with_records(2).store;
        let before = store.records().to_vec();
        assert!(matches!(
            run(&mut store, &path),
            Err(StockzError::Parse { line: 3, .. })
        ));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn duplicate_ids_in_file_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, format!("{}1,A,x,1,1,,t\n1,B,x,1,1,,t\n", HEADER)).unwrap();

        let mut store = StoreFixture::new().with_records(1).store;
        assert!(matches!(
            run(&mut store, &path),
            Err(StockzError::Integrity(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = StoreFixture::new().store;
        assert!(matches!(
            run(&mut store, &dir.path().join("nope.csv")),
            Err(StockzError::Io(_))
        ));
    }
}
