use crate::config::StockzConfig;
use crate::model::Record;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod get;
pub mod import;
pub mod init;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub struct StockzPaths {
    /// Directory holding `config.json` and, by default, the data file.
    pub home: PathBuf,
}

impl StockzPaths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed by the command.
    pub affected_records: Vec<Record>,
    /// The view: records to show, in display order.
    pub listed_records: Vec<Record>,
    pub config: Option<StockzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: StockzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The listed records flattened into display rows.
    pub fn rows(&self, price_decimals: usize) -> Vec<[String; 7]> {
        self.listed_records
            .iter()
            .map(|r| r.to_row(price_decimals))
            .collect()
    }
}
