//! I/O module
//!
//! Handles ledger persistence and statement output.
//!
//! # Components
//!
//! - `json_format` - Ledger document layout (serde structures, conversion, encoding)
//! - `file_backend` - JSON file backend with atomic replace on save
//! - `memory_backend` - In-memory backend for tests and embedding
//! - `csv_format` - CSV statement export

pub mod csv_format;
pub mod file_backend;
pub mod json_format;
pub mod memory_backend;

pub use csv_format::write_statement_csv;
pub use file_backend::JsonFileBackend;
pub use json_format::{decode_document, encode_document, LedgerDocument};
pub use memory_backend::MemoryBackend;
