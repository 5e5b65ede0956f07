use crate::LedgerError;

/// Reject amounts below zero
pub fn validate_amount(amount: i128) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::NegativeAmount);
    }
    Ok(())
}

/// Add `amount` to a balance, allowance or supply without wrapping
pub fn credit(current: i128, amount: i128) -> Result<i128, LedgerError> {
    current
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow)
}

/// Subtract `amount`, failing with `shortfall` instead of going below zero.
///
/// `shortfall` lets the caller report which precondition failed
/// (`InsufficientBalance` for balances, `InsufficientAllowance` for
/// allowances).
pub fn debit(current: i128, amount: i128, shortfall: LedgerError) -> Result<i128, LedgerError> {
    if current < amount {
        return Err(shortfall);
    }
    current
        .checked_sub(amount)
        .ok_or(LedgerError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    // === validate_amount tests ===

    #[test]
    fn test_validate_amount_zero() {
        assert_eq!(validate_amount(0), Ok(()));
    }

    #[test]
    fn test_validate_amount_max() {
        assert_eq!(validate_amount(i128::MAX), Ok(()));
    }

    #[test]
    fn test_validate_amount_negative() {
        assert_eq!(validate_amount(-1), Err(LedgerError::NegativeAmount));
        assert_eq!(validate_amount(i128::MIN), Err(LedgerError::NegativeAmount));
    }

    // === credit tests ===

    #[test]
    fn test_credit() {
        assert_eq!(credit(100, 50), Ok(150));
        assert_eq!(credit(0, 0), Ok(0));
    }

    #[test]
    fn test_credit_up_to_max() {
        assert_eq!(credit(i128::MAX - 1, 1), Ok(i128::MAX));
    }

    #[test]
    fn test_credit_overflow() {
        assert_eq!(credit(i128::MAX, 1), Err(LedgerError::ArithmeticOverflow));
        assert_eq!(
            credit(i128::MAX / 2 + 1, i128::MAX / 2 + 1),
            Err(LedgerError::ArithmeticOverflow)
        );
    }

    // === debit tests ===

    #[test]
    fn test_debit() {
        assert_eq!(debit(100, 40, LedgerError::InsufficientBalance), Ok(60));
    }

    #[test]
    fn test_debit_to_zero() {
        assert_eq!(debit(888, 888, LedgerError::InsufficientBalance), Ok(0));
    }

    #[test]
    fn test_debit_reports_chosen_shortfall() {
        assert_eq!(
            debit(555, 888, LedgerError::InsufficientAllowance),
            Err(LedgerError::InsufficientAllowance)
        );
        assert_eq!(
            debit(0, 8888, LedgerError::InsufficientBalance),
            Err(LedgerError::InsufficientBalance)
        );
    }

    #[test]
    fn test_debit_never_goes_negative() {
        assert_eq!(
            debit(0, 1, LedgerError::InsufficientBalance),
            Err(LedgerError::InsufficientBalance)
        );
    }
}
