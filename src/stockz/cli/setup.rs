use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockz", bin_name = "stockz", version)]
#[command(about = "Keep a small inventory in a CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this data file instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The editable fields. Omitted fields are blank on add and unchanged on update.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Record id (generated when blank on add)
    #[arg(long)]
    pub id: Option<String>,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub category: Option<String>,

    /// Whole number, 0 or more
    #[arg(short, long, allow_negative_numbers = true)]
    pub quantity: Option<String>,

    /// Number, 0 or more; `,` works as decimal separator
    #[arg(short, long, allow_negative_numbers = true)]
    pub price: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a record
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of a record
    #[command(alias = "u")]
    Update {
        /// Id of the record to change
        target: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete {
        /// Id of the record to delete
        target: String,
    },

    /// Show one record
    #[command(alias = "v")]
    Show {
        /// Id of the record
        target: String,
    },

    /// List records
    #[command(alias = "ls")]
    List {
        /// Only records whose name or category contains this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort by a column; repeat a column to flip its direction
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<String>,
    },

    /// Replace all records with the contents of a CSV file
    Import {
        /// CSV file with the stockz header
        path: PathBuf,
    },

    /// Write all records to a CSV file
    Export {
        /// Destination file
        path: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, price-decimals)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and an empty data file
    Init,
}
