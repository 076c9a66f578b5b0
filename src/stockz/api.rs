//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every stockz operation, whatever the UI.
//!
//! On top of dispatching, it holds the two pieces of state that outlive a single call:
//!
//! - the [`SortEngine`], so that activating the same column twice flips its direction
//!   for as long as this API instance lives;
//! - a dirty flag, set by every successful mutation and cleared by a save, so a client
//!   knows whether the store differs from its file.
//!
//! Failed operations never set the dirty flag: a failed command leaves the store as it was.
//!
//! ## Generic Over RecordStore
//!
//! `StockzApi<S: RecordStore>` does not know how records are held. Clients only see
//! `CmdResult`s and plain records, never the store itself.

use crate::commands;
use crate::error::{Result, StockzError};
use crate::model::{RawFields, Record};
use crate::sort::SortEngine;
use crate::store::RecordStore;
use std::path::Path;
use tracing::debug;

pub struct StockzApi<S: RecordStore> {
    store: S,
    sorter: SortEngine,
    paths: commands::StockzPaths,
    dirty: bool,
}

impl<S: RecordStore> StockzApi<S> {
    pub fn new(store: S, paths: commands::StockzPaths) -> Self {
        Self {
            store,
            sorter: SortEngine::new(),
            paths,
            dirty: false,
        }
    }

    pub fn add_record(&mut self, raw: &RawFields) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.store, raw)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn update_record(
        &mut self,
        target_id: &str,
        raw: &RawFields,
    ) -> Result<commands::CmdResult> {
        let target_id = parse_target(target_id)?;
        let result = commands::update::run(&mut self.store, target_id, raw)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn edit_record(
        &mut self,
        target_id: &str,
        edit: commands::update::RecordEdit,
    ) -> Result<commands::CmdResult> {
        let target_id = parse_target(target_id)?;
        let result = commands::update::edit(&mut self.store, target_id, edit)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn delete_record(&mut self, target_id: &str) -> Result<commands::CmdResult> {
        let target_id = parse_target(target_id)?;
        let result = commands::delete::run(&mut self.store, target_id)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn get_record(&self, target_id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, parse_target(target_id)?)
    }

    /// The current view: matching `query`, sorted by each key in turn.
    pub fn list_records<K: AsRef<str>>(
        &mut self,
        query: &str,
        sort_keys: &[K],
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &mut self.sorter, query, sort_keys)
    }

    /// Loads `path` as the store's contents. A missing file is an empty store.
    pub fn open(&mut self, path: &Path) -> Result<commands::CmdResult> {
        if !path.exists() {
            debug!(path = %path.display(), "no data file yet, starting empty");
            self.store.replace_all(Vec::new())?;
            self.dirty = false;
            return Ok(commands::CmdResult::default());
        }
        let result = commands::import::run(&mut self.store, path)?;
        self.dirty = false;
        Ok(result)
    }

    /// Replaces the store's contents with `path`. The store then differs from its own file.
    pub fn import_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        let result = commands::import::run(&mut self.store, path)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn save_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        let result = commands::export::run(&self.store, path)?;
        self.dirty = false;
        Ok(result)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Trims a target id given by a client; a blank target can never match.
fn parse_target(input: &str) -> Result<&str> {
    let id = input.trim();
    if id.is_empty() {
        return Err(StockzError::NotFound("(empty id)".to_string()));
    }
    Ok(id)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::update::RecordEdit;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StockzPaths};
