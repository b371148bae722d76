//! Currency and timestamp conversions.

use alloy::primitives::{utils, U256};
use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    error::{AppError, Result},
    ethereum::constants::ETHER_DECIMALS,
};

/// Trim alloy's fixed-width fraction down to ethers-style output.
///
/// Trailing zeros go, but at least one fractional digit stays, so one ether
/// renders as `"1.0"` and zero as `"0.0"`.
fn trim_fraction(formatted: String) -> String {
    match formatted.split_once('.') {
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            let fraction = if fraction.is_empty() { "0" } else { fraction };
            format!("{}.{}", integer, fraction)
        }
        None => format!("{}.0", formatted),
    }
}

/// Format a base-unit value as a decimal string with `decimals` places.
pub fn format_units(value: U256, decimals: u8) -> Result<String> {
    utils::format_units(value, decimals).map(trim_fraction).map_err(|e| {
        AppError::InvalidAmount(format!("Cannot format with {} decimals: {}", decimals, e))
    })
}

/// Parse a human-readable amount string to base units.
///
/// Stricter than alloy's parser: signs, exponents, hex and excess fractional
/// digits are rejected instead of being accepted or truncated.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256> {
    let amount = amount.trim();

    if amount.is_empty() {
        return Err(AppError::InvalidAmount("Amount cannot be empty".to_string()));
    }

    if amount.starts_with('-') {
        return Err(AppError::InvalidAmount(format!("Amount cannot be negative: {}", amount)));
    }

    let (integer, fraction) = amount.split_once('.').unwrap_or((amount, ""));

    if integer.is_empty() && fraction.is_empty() {
        return Err(AppError::InvalidAmount(format!("Invalid amount format: {}", amount)));
    }

    if !integer.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidAmount(format!("Invalid amount format: {}", amount)));
    }

    if fraction.len() > decimals as usize {
        return Err(AppError::InvalidAmount(format!(
            "Too many decimal places in {} (max {})",
            amount, decimals
        )));
    }

    utils::parse_units(amount, decimals)
        .map(|parsed| parsed.get_absolute())
        .map_err(|_| AppError::InvalidAmount(format!("Amount out of range: {}", amount)))
}

/// Format wei as an ether decimal string.
pub fn format_ether(wei: U256) -> String {
    trim_fraction(utils::format_ether(wei))
}

/// Parse an ether decimal string into wei.
pub fn parse_ether(amount: &str) -> Result<U256> {
    parse_units(amount, ETHER_DECIMALS)
}

/// Convert a deadline to epoch milliseconds.
pub fn deadline_millis(deadline: DateTime<Utc>) -> Result<U256> {
    let millis = deadline.timestamp_millis();
    u64::try_from(millis).map(U256::from).map_err(|_| {
        AppError::InvalidDeadline(format!("{} is before the Unix epoch", deadline.to_rfc3339()))
    })
}

/// Parse a deadline given as an RFC 3339 timestamp or a `YYYY-MM-DD` date.
///
/// Bare dates resolve to midnight UTC.
pub fn parse_deadline(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| {
            AppError::InvalidDeadline(format!(
                "Expected an RFC 3339 timestamp or YYYY-MM-DD date, got '{}'",
                input
            ))
        })
}

/// Narrow an on-chain integer to u64.
pub fn u256_to_u64(value: U256, field: &str) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| AppError::NumericOverflow(format!("{} {} exceeds u64 range", field, value)))
}
