//! CSV format handling for statement export
//!
//! Writes the wallet history as CSV with columns: id, kind, amount,
//! description, date. Rows keep the chronological order of the ledger.

use crate::io::json_format::format_timestamp;
use crate::types::{LedgerError, Transaction};
use std::io::Write;

/// Write transactions to CSV format
///
/// Amounts are written with two decimal places and dates in the same
/// `DD/MM/YYYY HH:MM` layout as the ledger document.
///
/// # Arguments
///
/// * `transactions` - Transactions in chronological order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(LedgerError)` if a write error occurred
pub fn write_statement_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["id", "kind", "amount", "description", "date"])?;

    for tx in transactions {
        writer.write_record(&[
            tx.id.to_string(),
            tx.kind.label().to_string(),
            format!("{:.2}", tx.amount),
            tx.description.clone(),
            format_timestamp(&tx.timestamp),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TransactionId, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn tx(id: &str, kind: TransactionKind, amount: Decimal, description: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            kind,
            amount,
            description: description.to_string(),
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 5)
                .and_then(|d| d.and_hms_opt(9, 7, 0))
                .unwrap(),
        }
    }

    #[test]
    fn test_write_statement_csv_empty() {
        let mut output = Vec::new();
        write_statement_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,kind,amount,description,date\n"
        );
    }

    #[test]
    fn test_write_statement_csv_rows_in_order() {
        let transactions = vec![
            tx("1", TransactionKind::LoanCredit, Decimal::from(1000), "Crédito contratado"),
            tx("2", TransactionKind::TopUp, Decimal::new(-2000, 2), "Vivo - 5511999999999"),
        ];

        let mut output = Vec::new();
        write_statement_csv(&transactions, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,kind,amount,description,date\n\
             1,Empréstimo,1000.00,Crédito contratado,05/03/2024 09:07\n\
             2,Recarga,-20.00,Vivo - 5511999999999,05/03/2024 09:07\n"
        );
    }

    #[test]
    fn test_write_statement_csv_quotes_commas() {
        let transactions = vec![tx(
            "1",
            TransactionKind::BillPayment,
            Decimal::new(-1050, 2),
            "Boleto 123, parcela 2",
        )];

        let mut output = Vec::new();
        write_statement_csv(&transactions, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"Boleto 123, parcela 2\""));
    }
}
