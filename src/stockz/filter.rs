use crate::model::Record;

/// Returns the records whose name or category contains `query`, ignoring case.
///
/// The query is trimmed first; an empty query keeps every record. Order is preserved.
pub fn filter(records: &[Record], query: &str) -> Vec<Record> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| matches(record, &query))
        .cloned()
        .collect()
}

/// `query` must already be lower-cased.
fn matches(record: &Record, query: &str) -> bool {
    record.name.to_lowercase().contains(query) || record.category.to_lowercase().contains(query)
}
