use crate::error::StockzError;
use chrono::Local;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Timestamp layout used for `created_at`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One inventory entry.
///
/// A `Record` in a store has always passed validation: `id`, `name` and `category` are
/// non-empty, `price` is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub price: f64,
    pub location: String,
    pub created_at: String,
}

impl Record {
    /// Flattens the record into display strings, in column order.
    pub fn to_row(&self, price_decimals: usize) -> [String; 7] {
        [
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            self.quantity.to_string(),
            format!("{:.*}", price_decimals, self.price),
            self.location.clone(),
            self.created_at.clone(),
        ]
    }
}

/// Current local time in [`DATE_FORMAT`].
pub fn timestamp_now() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// The six editable fields exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub location: String,
}

impl RawFields {
    /// Pre-fills the editable fields from an existing record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            quantity: record.quantity.to_string(),
            price: record.price.to_string(),
            location: record.location.clone(),
        }
    }
}

/// Column keys, in the persisted header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Id,
    Name,
    Category,
    Quantity,
    Price,
    Location,
    CreatedAt,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Id,
        Column::Name,
        Column::Category,
        Column::Quantity,
        Column::Price,
        Column::Location,
        Column::CreatedAt,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Category => "category",
            Column::Quantity => "quantity",
            Column::Price => "price",
            Column::Location => "location",
            Column::CreatedAt => "created_at",
        }
    }

    /// Numeric columns sort by value rather than by text.
    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Quantity | Column::Price)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = StockzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Column::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| StockzError::Sort(format!("unknown column '{}'", s.trim())))
    }
}
