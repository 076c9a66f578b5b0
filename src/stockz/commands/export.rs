use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use std::path::Path;

/// Writes every record in store order to `path`, regardless of any current view.
pub fn run<S: RecordStore>(store: &S, path: &Path) -> Result<CmdResult> {
    codec::save_file(path, store.records())?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} records to {}",
        store.len(),
        name
    )));
    Ok(result)
}
