//! Core library for customer listing extraction.
//!
//! This crate provides:
//! - Line-by-line extraction of name, phone, financial capacity and request
//! - Base and extended (`request | street | note`) record schemas
//! - Ranking by financial capacity and case-insensitive search
//! - Raw input text persistence behind an injectable store

pub mod error;
pub mod listing;
pub mod models;
pub mod store;

pub use error::{KhachError, Result, StoreError};
pub use listing::{Diagnostic, ListingParser, ParseOutcome, RecordSet, RuleListingParser};
pub use models::config::KhachConfig;
pub use models::record::{NumberedRecord, RankedRecord, Record, RecordExtension, Schema, SortKey};
pub use store::{FileStore, MemoryStore, TextStore};
