//! The persisted CSV format.
//!
//! ```text
//! id,name,category,quantity,price,location,created_at
//! 1,Bolt,Hardware,10,0.5,A1,2024-05-01 09:00:00
//! ```
//!
//! The header is fixed and checked before any row is read. Decoding is all-or-nothing: the
//! first bad row fails the whole input with its line number and nothing is returned.
//! `quantity` is written as an integer literal, `price` as a plain decimal literal and
//! `created_at` verbatim. Fields holding commas, quotes or line breaks are quoted, so any
//! record set survives a round trip.

use crate::error::{Result, StockzError};
use crate::model::Record;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const HEADER: [&str; 7] = [
    "id",
    "name",
    "category",
    "quantity",
    "price",
    "location",
    "created_at",
];

/// Rows must carry at least `id` through `price`; the last two columns may be cut off.
const MIN_FIELDS: usize = 5;

pub fn decode(text: &str) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = reader.records();

    let header = match rows.next() {
        Some(row) => row.map_err(read_error)?,
        None => {
            return Err(StockzError::Parse {
                line: 1,
                reason: "missing header".to_string(),
            })
        }
    };
    // the reader skips blank lines, so a header found further down is still a mismatch
    let cells: Vec<&str> = header.iter().map(str::trim).collect();
    if line_of(&header) != 1 || cells != HEADER {
        return Err(StockzError::Parse {
            line: 1,
            reason: format!("expected header '{}'", HEADER.join(",")),
        });
    }

    let mut records = Vec::new();
    for row in rows {
        let row = row.map_err(read_error)?;
        records.push(decode_row(&row)?);
    }
    debug!(rows = records.len(), "decoded records");
    Ok(records)
}

fn decode_row(row: &StringRecord) -> Result<Record> {
    let line = line_of(row);
    let fail = |reason: String| StockzError::Parse { line, reason };

    if row.len() < MIN_FIELDS || row.len() > HEADER.len() {
        return Err(fail(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            row.len()
        )));
    }
    let field = |i: usize| row.get(i).unwrap_or_default().to_string();

    let quantity_raw = field(3);
    let quantity: i64 = quantity_raw
        .trim()
        .parse()
        .map_err(|_| fail(format!("quantity '{}' is not an integer", quantity_raw)))?;
    let quantity = u64::try_from(quantity)
        .map_err(|_| fail(format!("quantity {} is negative", quantity)))?;

    let price_raw = field(4);
    let price: f64 = price_raw
        .trim()
        .parse()
        .map_err(|_| fail(format!("price '{}' is not a number", price_raw)))?;

    Ok(Record {
        id: field(0),
        name: field(1),
        category: field(2),
        quantity,
        price,
        location: field(5),
        created_at: field(6),
    })
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map(|p| p.line()).unwrap_or(0)
}

fn read_error(err: csv::Error) -> StockzError {
    StockzError::Parse {
        line: err.position().map(|p| p.line()).unwrap_or(0),
        reason: err.to_string(),
    }
}

pub fn encode(records: &[Record]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for record in records {
        let quantity = record.quantity.to_string();
        let price = record.price.to_string();
        writer.write_record([
            record.id.as_str(),
            record.name.as_str(),
            record.category.as_str(),
            quantity.as_str(),
            price.as_str(),
            record.location.as_str(),
            record.created_at.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| StockzError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| StockzError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Reads and decodes `path`. The file is closed before this returns.
pub fn load_file(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path)?;
    let records = decode(&text)?;
    info!(path = %path.display(), rows = records.len(), "loaded records");
    Ok(records)
}

/// Encodes `records` into `path`.
///
/// Writes a sibling temporary file and renames it over `path`, so a failed save leaves any
/// previous file intact.
pub fn save_file(path: &Path, records: &[Record]) -> Result<()> {
    let text = encode(records)?;
    let tmp = tmp_path(path);
    if let Err(e) = fs::write(&tmp, text).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(StockzError::Io(e));
    }
    info!(path = %path.display(), rows = records.len(), "saved records");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
