use crate::model::Column;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Invalid,
    /// The id collides with another record.
    Duplicate,
}

/// A single rejected field, with a message meant for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Column,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn invalid(field: Column, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Invalid,
            message: message.into(),
        }
    }

    pub fn duplicate(field: Column, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Duplicate,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Every field error found in one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn append(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Fields that should be highlighted.
    pub fn fields(&self) -> Vec<Column> {
        self.0.iter().map(|e| e.field).collect()
    }

    pub fn has_duplicate_id(&self) -> bool {
        self.0
            .iter()
            .any(|e| e.field == Column::Id && e.kind == FieldErrorKind::Duplicate)
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum StockzError {
    #[error("Invalid record: {0}")]
    Validation(FieldErrors),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Sort failed: {0}")]
    Sort(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<FieldErrors> for StockzError {
    fn from(errors: FieldErrors) -> Self {
        StockzError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, StockzError>;
