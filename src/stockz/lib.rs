//! # Stockz Architecture
//!
//! Stockz is an **inventory record store** with a command-line client on top. The store,
//! its validation rules, the filtered/sorted views and the CSV persistence all live in the
//! library; the binary is only a presentation adapter that feeds raw strings in and renders
//! rows out.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats rows, handles terminal I/O     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the sort engine and the dirty flag                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / update / delete rules, views, load and save        │
//! │  - Built from validate, filter, sort and codec              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - InMemoryStore: insertion ordered, invariant checked      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - No two records in a store share an `id`.
//! - Every stored record passed validation; the store never holds a half-valid record.
//! - `created_at` is stamped once on insertion and survives every update, including an
//!   update that changes the record's `id`.
//! - Every mutation either fully succeeds or leaves the store exactly as it was. The same
//!   holds for loading a file: one bad row rejects the whole file.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns plain Rust values. File access is limited
//! to [`codec::load_file`] and [`codec::save_file`], each of which opens and releases the
//! file within a single call.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: `Record`, `RawFields`, `Column`
//! - [`validate`]: Raw field validation and id generation
//! - [`filter`]: Name/category search
//! - [`sort`]: Per-column toggling sort
//! - [`codec`]: The fixed-header CSV format
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod sort;
pub mod store;
pub mod validate;
