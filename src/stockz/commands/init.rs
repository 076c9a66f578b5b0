use crate::codec;
use crate::commands::{CmdMessage, CmdResult, StockzPaths};
use crate::config::StockzConfig;
use crate::error::Result;
use std::fs;

/// Creates the stockz home and an empty data file. An existing data file is left alone.
pub fn run(paths: &StockzPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.home)?;
    let config = StockzConfig::load(&paths.home)?;
    let data_path = config.data_path(&paths.home);

    let mut result = CmdResult::default();
    if data_path.exists() {
        result.add_message(CmdMessage::info(format!(
            "Data file already exists: {}",
            data_path.display()
        )));
    } else {
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent)?;
        }
        codec::save_file(&data_path, &[])?;
        result.add_message(CmdMessage::success(format!(
            "Initialized {}",
            data_path.display()
        )));
    }
    Ok(result)
}
