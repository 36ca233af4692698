use crate::utils::error::{QuoteError, Result};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::invalid_input(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(QuoteError::invalid_input(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written so that NaN falls outside every range.
    if !(value >= min && value <= max) {
        return Err(QuoteError::invalid_input(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Checks that `value` sits on the grid `base + k * step`. A zero step
/// accepts everything.
pub fn validate_step(field_name: &str, value: Decimal, base: Decimal, step: Decimal) -> Result<()> {
    if step <= Decimal::ZERO {
        return Ok(());
    }
    if !((value - base) % step).is_zero() {
        return Err(QuoteError::invalid_input(
            field_name,
            value,
            format!("Value must be a multiple of {} starting at {}", step, base),
        ));
    }
    Ok(())
}
