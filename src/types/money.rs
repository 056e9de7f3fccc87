//! Money amounts
//!
//! The ledger document stores amounts as JSON numbers, which are read back
//! through `f64`. Only values with at most two decimal places and fifteen
//! significant digits survive that trip unchanged, so every amount and
//! balance the ledger commits must stay inside that domain.

use super::error::LedgerError;
use rust_decimal::Decimal;

/// Decimal places kept for amounts (cents)
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Largest magnitude an amount or balance may reach: 9,999,999,999,999.99
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2);

/// Check that `amount` can be written to the ledger document and read back
/// without change
///
/// # Errors
///
/// `InvalidAmount` if the amount has sub-cent digits or its magnitude exceeds
/// [`MAX_AMOUNT`].
pub fn ensure_persistable(amount: Decimal) -> Result<(), LedgerError> {
    if amount.round_dp(AMOUNT_DECIMAL_PLACES) != amount {
        return Err(LedgerError::invalid_amount(
            amount,
            "more than two decimal places",
        ));
    }
    if amount.abs() > MAX_AMOUNT {
        return Err(LedgerError::invalid_amount(
            amount,
            &format!("magnitude above {}", format_brl(MAX_AMOUNT)),
        ));
    }
    Ok(())
}

/// Format an amount as `R$ 1,234.56` (`R$ -20.00` for debits)
pub fn format_brl(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("R$ {}{}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_max_amount_value() {
        assert_eq!(MAX_AMOUNT, Decimal::from_str("9999999999999.99").unwrap());
    }

    #[rstest]
    #[case::cents("40.50")]
    #[case::trailing_zeros("1.0000")]
    #[case::negative("-125.5")]
    #[case::max("9999999999999.99")]
    #[case::min("-9999999999999.99")]
    fn test_persistable_amounts(#[case] amount: &str) {
        assert!(ensure_persistable(Decimal::from_str(amount).unwrap()).is_ok());
    }

    #[rstest]
    #[case::sub_cent("1.0000000000000000001")]
    #[case::three_places("0.005")]
    #[case::too_large("12345678901234567.89")]
    #[case::just_above_max("10000000000000")]
    #[case::too_small("-10000000000000")]
    fn test_unpersistable_amounts(#[case] amount: &str) {
        assert!(matches!(
            ensure_persistable(Decimal::from_str(amount).unwrap()).unwrap_err(),
            LedgerError::InvalidAmount { .. }
        ));
    }

    #[rstest]
    #[case(Decimal::ZERO, "R$ 0.00")]
    #[case(Decimal::new(6000, 2), "R$ 60.00")]
    #[case(Decimal::new(123456789, 2), "R$ 1,234,567.89")]
    #[case(Decimal::new(-2000, 2), "R$ -20.00")]
    #[case(Decimal::new(100000, 2), "R$ 1,000.00")]
    #[case(Decimal::new(999, 0), "R$ 999.00")]
    fn test_format_brl(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_brl(amount), expected);
    }
}
