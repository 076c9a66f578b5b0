use colored::Colorize;
use stockz::api::{CmdMessage, MessageLevel};
use stockz::codec::HEADER;
use stockz::error::StockzError;
use stockz::model::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 32;
const GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Errors go to stderr; validation failures list every rejected field.
pub fn print_error(error: &StockzError) {
    match error {
        StockzError::Validation(errors) => {
            eprintln!("{}", "Error: record rejected".red());
            for field_error in errors {
                let field = format!("{:<10}", field_error.field.key());
                eprintln!("  {} {}", field.bold(), field_error.message);
            }
        }
        other => eprintln!("{} {}", "Error:".red(), other),
    }
}

pub(super) fn print_records(records: &[Record], price_decimals: usize) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    let rows: Vec<[String; 7]> = records
        .iter()
        .map(|r| r.to_row(price_decimals))
        .map(|row| row.map(|cell| truncate_to_width(&cell, MAX_CELL_WIDTH)))
        .collect();
    let widths = column_widths(&rows);

    let header: Vec<String> = HEADER
        .iter()
        .enumerate()
        .map(|(i, name)| pad_cell(name, widths[i], is_numeric(i)))
        .collect();
    println!("{}", header.join(GAP).bold());

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad_cell(cell, widths[i], is_numeric(i)))
            .collect();
        println!("{}", cells.join(GAP));
    }
}

pub(super) fn print_record_detail(record: &Record, price_decimals: usize) {
    let row = record.to_row(price_decimals);
    for (name, value) in HEADER.iter().zip(row.iter()) {
        let label = format!("{:<12}", format!("{}:", name));
        println!("{}{}", label.dimmed(), value);
    }
}

fn column_widths(rows: &[[String; 7]]) -> [usize; 7] {
    let mut widths = HEADER.map(|h| h.width());
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}

fn is_numeric(column: usize) -> bool {
    column == 3 || column == 4
}

fn pad_cell(cell: &str, width: usize, right_align: bool) -> String {
    let padding = " ".repeat(width.saturating_sub(cell.width()));
    if right_align {
        format!("{}{}", padding, cell)
    } else {
        format!("{}{}", cell, padding)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_only_long_cells() {
        assert_eq!(truncate_to_width("Bolt", 8), "Bolt");
        assert_eq!(truncate_to_width("Hex bolt M6", 8), "Hex bol…");
        assert_eq!(truncate_to_width("Hex bolt M6", 8).width(), 8);
    }

    #[test]
    fn pads_numbers_to_the_right() {
        assert_eq!(pad_cell("5", 3, true), "  5");
        assert_eq!(pad_cell("ab", 3, false), "ab ");
    }

    #[test]
    fn widths_cover_header_and_cells() {
        let rows = vec![[
            "1".to_string(),
            "Long product name".to_string(),
            "x".to_string(),
            "12345".to_string(),
            "0.50".to_string(),
            String::new(),
            String::new(),
        ]];
        let widths = column_widths(&rows);
        assert_eq!(widths[0], 2);
        assert_eq!(widths[1], 17);
        assert_eq!(widths[3], 8);
        assert_eq!(widths[6], 10);
    }
}
