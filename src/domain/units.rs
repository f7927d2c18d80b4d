//! Decimal token amount parsing and formatting

use alloy::primitives::U256;

use crate::error::Error;

/// Parse a human decimal amount into base units.
///
/// Validation happens here, before any network call: empty, signed,
/// non-numeric, or over-precise inputs all fail with
/// [`Error::InvalidAmount`].
pub fn parse_amount(input: &str, decimals: u8) -> Result<U256, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidAmount(input.into()));
    }
    if trimmed.starts_with('-') || trimmed.starts_with('+') {
        return Err(Error::InvalidAmount(input.into()));
    }

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (trimmed, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(Error::InvalidAmount(input.into()));
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(Error::InvalidAmount(input.into()));
    }
    if frac_part.len() > decimals as usize {
        return Err(Error::InvalidAmount(input.into()));
    }

    let scale = U256::from(10u64).pow(U256::from(decimals as u64));
    let int_units = parse_digits(int_part)?
        .checked_mul(scale)
        .ok_or_else(|| Error::InvalidAmount(input.into()))?;

    let frac_scale = U256::from(10u64).pow(U256::from((decimals as usize - frac_part.len()) as u64));
    let frac_units = parse_digits(frac_part)?
        .checked_mul(frac_scale)
        .ok_or_else(|| Error::InvalidAmount(input.into()))?;

    int_units
        .checked_add(frac_units)
        .ok_or_else(|| Error::InvalidAmount(input.into()))
}

/// Parse a native-token amount (18 decimals) into wei
pub fn parse_ether(input: &str) -> Result<U256, Error> {
    parse_amount(input, 18)
}

/// Format base units as a decimal string, trailing zeros trimmed
pub fn format_amount(value: U256, decimals: u8) -> String {
    let scale = U256::from(10u64).pow(U256::from(decimals as u64));
    let int_part = value / scale;
    let frac_part = value % scale;

    if frac_part.is_zero() {
        return int_part.to_string();
    }

    let frac_str = format!("{:0>width$}", frac_part, width = decimals as usize);
    format!("{}.{}", int_part, frac_str.trim_end_matches('0'))
}

fn parse_digits(digits: &str) -> Result<U256, Error> {
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| Error::InvalidAmount(digits.into()))
}
