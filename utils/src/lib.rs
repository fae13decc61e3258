//! Shared utilities for the rugradar workspace.

use alloy::primitives::{U256, U512};

/// Computes `floor(a * b / denominator)` without intermediate overflow.
///
/// Returns `None` when `denominator` is zero or the quotient does not fit in a `U256`.
pub fn mul_div_floor(a: U256, b: U256, denominator: U256) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = U512::from(a) * U512::from(b) / U512::from(denominator);
    if quotient > U512::from(U256::MAX) {
        return None;
    }
    Some(quotient.to::<U256>())
}

/// Returns `true` when `a * b >= c * d`, compared in 512-bit arithmetic.
pub fn mul_ge(a: U256, b: U256, c: U256, d: U256) -> bool {
    U512::from(a) * U512::from(b) >= U512::from(c) * U512::from(d)
}

/// Renders a raw token amount with `decimals` fractional digits, trailing zeros trimmed.
pub fn format_amount(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let (integer, frac) = value.div_rem(divisor);
    if frac.is_zero() {
        return integer.to_string();
    }
    let frac = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    format!("{}.{}", integer, frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_floor_rounds_down() {
        let q = mul_div_floor(U256::from(600), U256::from(100), U256::from(1000));
        assert_eq!(q, Some(U256::from(60)));

        let q = mul_div_floor(U256::from(1), U256::from(100), U256::from(3));
        assert_eq!(q, Some(U256::from(33)));
    }

    #[test]
    fn mul_div_floor_survives_wide_products() {
        let q = mul_div_floor(U256::MAX, U256::from(100), U256::MAX);
        assert_eq!(q, Some(U256::from(100)));
    }

    #[test]
    fn mul_div_floor_rejects_zero_denominator_and_overflow() {
        assert_eq!(mul_div_floor(U256::from(1), U256::from(1), U256::ZERO), None);
        assert_eq!(mul_div_floor(U256::MAX, U256::from(2), U256::from(1)), None);
    }

    #[test]
    fn mul_ge_compares_exactly() {
        assert!(mul_ge(U256::from(500), U256::from(100), U256::from(50), U256::from(1000)));
        assert!(!mul_ge(U256::from(499), U256::from(100), U256::from(50), U256::from(1000)));
        assert!(mul_ge(U256::MAX, U256::MAX, U256::MAX, U256::MAX));
    }

    #[test]
    fn format_amount_trims_fraction() {
        let one_and_half = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(format_amount(one_and_half, 18), "1.5");
        assert_eq!(format_amount(U256::from(2_000_000u64), 6), "2");
        assert_eq!(format_amount(U256::from(1u64), 18), "0.000000000000000001");
        assert_eq!(format_amount(U256::from(42u64), 0), "42");
    }
}
