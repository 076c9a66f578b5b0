//! # CLI Layer
//!
//! This module is **one possible presentation adapter** for stockz. It is the only place
//! that knows about the terminal, the environment and exit codes.
//!
//! Every invocation follows the same cycle:
//!
//! 1. Parse arguments and resolve the stockz home and the data file
//! 2. Open the data file into an in-memory store (missing file: empty store)
//! 3. Dispatch one API call and print its messages and rows
//! 4. Save the data file if, and only if, the API reports the store as dirty
//!
//! A failing command returns before step 4, so the data file never sees a failed change.
//! `config` and `init` do not touch the data file at all.

use super::print::{print_messages, print_record_detail, print_records};
use super::setup::{Cli, Commands, FieldArgs};
use clap::Parser;
use directories::ProjectDirs;
use stockz::api::{ConfigAction, RecordEdit, StockzApi, StockzPaths};
use stockz::config::StockzConfig;
use stockz::error::{Result, StockzError};
use stockz::model::{RawFields, Record};
use stockz::store::memory::InMemoryStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "STOCKZ_HOME";

struct AppContext {
    api: StockzApi<InMemoryStore>,
    data_path: PathBuf,
    price_decimals: usize,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = StockzPaths::new(stockz_home()?);

    // These two work on the home directory, not on the records
    match &cli.command {
        Some(Commands::Config { key, value }) => {
            return handle_config(&paths, key.clone(), value.clone())
        }
        Some(Commands::Init) => {
            let api = StockzApi::new(InMemoryStore::new(), paths);
            print_messages(&api.init()?.messages);
            return Ok(());
        }
        _ => {}
    }

    let mut ctx = init_context(&cli, paths)?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields)?,
        Some(Commands::Update { target, fields }) => handle_update(&mut ctx, &target, fields)?,
        Some(Commands::Delete { target }) => handle_delete(&mut ctx, &target)?,
        Some(Commands::Show { target }) => handle_show(&ctx, &target)?,
        Some(Commands::List { search, sort }) => handle_list(&mut ctx, &search, &sort)?,
        Some(Commands::Import { path }) => handle_import(&mut ctx, &path)?,
        Some(Commands::Export { path }) => handle_export(&mut ctx, &path)?,
        Some(Commands::Config { .. }) | Some(Commands::Init) => {}
        None => handle_list(&mut ctx, "", &[])?,
    }

    persist(&mut ctx)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "stockz=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn stockz_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "stockz", "stockz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            StockzError::Config(format!(
                "could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli, paths: StockzPaths) -> Result<AppContext> {
    let config = StockzConfig::load(&paths.home)?;
    let data_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_path(&paths.home));

    let mut api = StockzApi::new(InMemoryStore::new(), paths);
    api.open(&data_path)?;

    Ok(AppContext {
        api,
        data_path,
        price_decimals: config.price_decimals,
        json: cli.json,
    })
}

fn persist(ctx: &mut AppContext) -> Result<()> {
    if !ctx.api.is_dirty() {
        return Ok(());
    }
    if let Some(parent) = ctx.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let result = ctx.api.save_file(&ctx.data_path)?;
    if !ctx.json {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: FieldArgs) -> Result<()> {
    let raw = RawFields {
        id: fields.id.unwrap_or_default(),
        name: fields.name.unwrap_or_default(),
        category: fields.category.unwrap_or_default(),
        quantity: fields.quantity.unwrap_or_default(),
        price: fields.price.unwrap_or_default(),
        location: fields.location.unwrap_or_default(),
    };
    let result = ctx.api.add_record(&raw)?;
    report_affected(ctx, &result.affected_records, &result.messages)
}

fn handle_update(ctx: &mut AppContext, target: &str, fields: FieldArgs) -> Result<()> {
    let edit = RecordEdit {
        id: fields.id,
        name: fields.name,
        category: fields.category,
        quantity: fields.quantity,
        price: fields.price,
        location: fields.location,
    };
    let result = ctx.api.edit_record(target, edit)?;
    report_affected(ctx, &result.affected_records, &result.messages)
}

fn handle_delete(ctx: &mut AppContext, target: &str) -> Result<()> {
    let result = ctx.api.delete_record(target)?;
    report_affected(ctx, &result.affected_records, &result.messages)
}

fn handle_show(ctx: &AppContext, target: &str) -> Result<()> {
    let result = ctx.api.get_record(target)?;
    if ctx.json {
        return print_json(&result.listed_records);
    }
    for record in &result.listed_records {
        print_record_detail(record, ctx.price_decimals);
    }
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: &str, sort: &[String]) -> Result<()> {
    let result = ctx.api.list_records(search, sort)?;
    if ctx.json {
        return print_json(&result.listed_records);
    }
    print_records(&result.listed_records, ctx.price_decimals);
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &Path) -> Result<()> {
    let result = ctx.api.import_file(path)?;
    if !ctx.json {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_export(ctx: &mut AppContext, path: &Path) -> Result<()> {
    let result = ctx.api.save_file(path)?;
    if !ctx.json {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_config(paths: &StockzPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let api = StockzApi::new(InMemoryStore::new(), paths.clone());
    let result = api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in stockz::config::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn report_affected(
    ctx: &AppContext,
    records: &[Record],
    messages: &[stockz::api::CmdMessage],
) -> Result<()> {
    if ctx.json {
        return print_json(records);
    }
    print_messages(messages);
    Ok(())
}

fn print_json(records: &[Record]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}
