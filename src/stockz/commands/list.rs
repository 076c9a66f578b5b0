use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::filter;
use crate::sort::SortEngine;
use crate::store::RecordStore;
use tracing::warn;

/// Builds a view: records matching `query`, then sorted by each key in turn.
///
/// Sort keys go through `sorter`, so repeating a key flips its direction. A key that
/// cannot be sorted on is reported as a warning and skipped; the view is still returned.
pub fn run<S: RecordStore, K: AsRef<str>>(
    store: &S,
    sorter: &mut SortEngine,
    query: &str,
    sort_keys: &[K],
) -> Result<CmdResult> {
    let mut view = filter(store.records(), query);
    let mut result = CmdResult::default();

    if !query.trim().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Found {} of {} records",
            view.len(),
            store.len()
        )));
    }

    for key in sort_keys {
        let key = key.as_ref();
        match sorter.sort_by_key(&mut view, key) {
            Ok(direction) => result.add_message(CmdMessage::info(format!(
                "Sorted by '{}' ({})",
                key.trim(),
                direction
            ))),
            Err(e) => {
                warn!(key, error = %e, "sort failed");
                result.add_message(CmdMessage::warning(format!("Could not sort: {}", e)));
            }
        }
    }

    Ok(result.with_listed_records(view))
}
