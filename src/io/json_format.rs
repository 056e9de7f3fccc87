//! JSON format handling for the ledger document
//!
//! This module centralizes the persisted document layout:
//!
//! ```text
//! { "saldo": <number>,
//!   "transacoes": [ { "id", "tipo", "valor", "descricao", "data" }, ... ] }
//! ```
//!
//! It provides the serde structures mirroring that layout, conversion to and
//! from the domain types, and encoding with the same 4-space indentation the
//! document has always been written with. All functions are pure (no I/O).

use crate::types::{Transaction, TransactionId, TransactionKind, WalletState};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Timestamp layout of the `data` field (local time, minute precision)
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Root of the persisted ledger document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(rename = "saldo", with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(rename = "transacoes")]
    pub transactions: Vec<DocumentTransaction>,
}

/// One transaction as it appears in the persisted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTransaction {
    pub id: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data")]
    pub timestamp: String,
}

impl From<&Transaction> for DocumentTransaction {
    fn from(tx: &Transaction) -> Self {
        DocumentTransaction {
            id: tx.id.to_string(),
            kind: tx.kind.label().to_string(),
            amount: tx.amount,
            description: tx.description.clone(),
            timestamp: format_timestamp(&tx.timestamp),
        }
    }
}

impl From<&WalletState> for LedgerDocument {
    fn from(state: &WalletState) -> Self {
        LedgerDocument {
            balance: state.balance,
            transactions: state.transactions.iter().map(Into::into).collect(),
        }
    }
}

/// Format a timestamp the way the `data` field stores it
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `data` field value
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| format!("Invalid timestamp '{}': {}", value, e))
}

/// Convert a LedgerDocument to a WalletState
///
/// This function:
/// - Parses every `data` field into a timestamp
/// - Maps `tipo` labels to transaction kinds (unknown labels are kept)
/// - Rejects documents that reuse a transaction id
///
/// # Returns
///
/// Result containing either:
/// - Ok(WalletState) - Successfully converted document
/// - Err(String) - Error message describing why the document is malformed
pub fn convert_document(document: LedgerDocument) -> Result<WalletState, String> {
    let mut seen = HashSet::with_capacity(document.transactions.len());
    let mut transactions = Vec::with_capacity(document.transactions.len());

    for (index, entry) in document.transactions.into_iter().enumerate() {
        if entry.id.trim().is_empty() {
            return Err(format!("Transaction at position {} has an empty id", index));
        }
        if !seen.insert(entry.id.clone()) {
            return Err(format!("Duplicate transaction id '{}'", entry.id));
        }

        let timestamp = parse_timestamp(&entry.timestamp)
            .map_err(|e| format!("Transaction '{}': {}", entry.id, e))?;

        transactions.push(Transaction {
            id: TransactionId::new(entry.id),
            kind: TransactionKind::from_label(&entry.kind),
            amount: entry.amount,
            description: entry.description,
            timestamp,
        });
    }

    Ok(WalletState {
        balance: document.balance,
        transactions,
    })
}

/// Decode raw document bytes into a WalletState
pub fn decode_document(bytes: &[u8]) -> Result<WalletState, String> {
    let document: LedgerDocument =
        serde_json::from_slice(bytes).map_err(|e| format!("Malformed ledger document: {}", e))?;
    convert_document(document)
}

/// Encode a WalletState as a pretty-printed document (4-space indent)
pub fn encode_document(state: &WalletState) -> Result<Vec<u8>, String> {
    let document = LedgerDocument::from(state);
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|e| format!("Failed to encode ledger document: {}", e))?;
    Ok(buffer)
}
