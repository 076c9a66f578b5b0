//! Column sorting for views.
//!
//! A [`SortEngine`] remembers, per column, which way the next sort on that column goes.
//! The first sort on a column ascends and every later sort on the same column flips it.
//! Columns do not share this state: sorting by `name` says nothing about `price`.

use crate::error::Result;
use crate::model::{Column, Record};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

#[derive(Debug, Default)]
pub struct SortEngine {
    descending_next: HashMap<Column, bool>,
}

impl SortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction the next sort on `column` will use.
    pub fn next_direction(&self, column: Column) -> Direction {
        if self.descending_next.get(&column).copied().unwrap_or(false) {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    /// Reorders `view` by `column` and flips that column's direction.
    ///
    /// The sort is stable, so records that compare equal keep their relative order in
    /// either direction.
    pub fn sort(&mut self, view: &mut [Record], column: Column) -> Direction {
        let direction = self.next_direction(column);
        view.sort_by(|a, b| {
            let ord = compare(a, b, column);
            match direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });
        self.descending_next
            .insert(column, direction == Direction::Ascending);
        debug!(%column, %direction, rows = view.len(), "sorted view");
        direction
    }

    /// Like [`SortEngine::sort`], with the column given as its key.
    ///
    /// An unknown key fails without touching the view or any direction state.
    pub fn sort_by_key(&mut self, view: &mut [Record], key: &str) -> Result<Direction> {
        let column: Column = key.parse()?;
        Ok(self.sort(view, column))
    }
}

fn compare(a: &Record, b: &Record, column: Column) -> Ordering {
    match column {
        Column::Id => a.id.cmp(&b.id),
        Column::Name => a.name.cmp(&b.name),
        Column::Category => a.category.cmp(&b.category),
        Column::Quantity => a.quantity.cmp(&b.quantity),
        Column::Price => a.price.total_cmp(&b.price),
        Column::Location => a.location.cmp(&b.location),
        Column::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockzError;

    fn record(id: &str, name: &str, quantity: u64, price: f64) -> Record {
        Record {
            id: id.into(),
            name: name.into(),
            category: "Hardware".into(),
            quantity,
            price,
            location: String::new(),
            created_at: String::new(),
        }
    }

    fn view() -> Vec<Record> {
        vec![
            record("1", "Washer", 100, 0.05),
            record("2", "Bolt", 9, 12.0),
            record("3", "Nut", 10, 2.5),
        ]
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn toggles_direction_per_column() {
        let mut engine = SortEngine::new();
        let mut records = view();

        assert_eq!(engine.sort(&mut records, Column::Price), Direction::Ascending);
        assert_eq!(ids(&records), vec!["1", "3", "2"]);

        assert_eq!(engine.sort(&mut records, Column::Price), Direction::Descending);
        assert_eq!(ids(&records), vec!["2", "3", "1"]);

        // name has its own state and starts ascending
        assert_eq!(engine.sort(&mut records, Column::Name), Direction::Ascending);
        assert_eq!(ids(&records), vec!["2", "3", "1"]);

        assert_eq!(engine.next_direction(Column::Price), Direction::Ascending);
        assert_eq!(engine.next_direction(Column::Name), Direction::Descending);
    }

    #[test]
    fn quantity_compares_numerically() {
        let mut engine = SortEngine::new();
        let mut records = view();
        engine.sort(&mut records, Column::Quantity);
        // as text "100" < "9" would put Washer first
        assert_eq!(ids(&records), vec!["2", "3", "1"]);
    }

    #[test]
    fn text_columns_compare_as_strings() {
        let mut engine = SortEngine::new();
        let mut records = vec![record("10", "a", 0, 0.0), record("9", "b", 0, 0.0)];
        engine.sort(&mut records, Column::Id);
        assert_eq!(ids(&records), vec!["10", "9"]);
    }

    #[test]
    fn equal_keys_keep_their_order_in_both_directions() {
        let mut engine = SortEngine::new();
        let mut records = vec![
            record("1", "x", 5, 1.0),
            record("2", "x", 5, 1.0),
            record("3", "x", 1, 1.0),
        ];
        engine.sort(&mut records, Column::Quantity);
        assert_eq!(ids(&records), vec!["3", "1", "2"]);
        engine.sort(&mut records, Column::Quantity);
        assert_eq!(ids(&records), vec!["1", "2", "3"]);
    }

    #[test]
    fn unknown_key_is_reported_and_changes_nothing() {
        let mut engine = SortEngine::new();
        let mut records = view();
        let err = engine.sort_by_key(&mut records, "weight").unwrap_err();
        assert!(matches!(err, StockzError::Sort(_)));
        assert_eq!(records, view());

        assert_eq!(
            engine.sort_by_key(&mut records, "price").unwrap(),
            Direction::Ascending
        );
    }
}
