//! Pure quote arithmetic over a [`Catalog`].
//!
//! Every function here is deterministic and side-effect free. They can be
//! called on their own or composed through [`calculate_quote`].

use crate::core::catalog::Catalog;
use crate::domain::model::{LineItem, ProjectDuration, QuoteRequest, QuoteResult};
use crate::utils::error::{QuoteError, Result};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

pub const WORKING_DAYS_PER_WEEK: f64 = 5.0;

/// Sum of effort hours over the selection. Fails on the first name the
/// catalog does not know.
pub fn total_hours(catalog: &Catalog, selected: &BTreeSet<String>) -> Result<u64> {
    selected.iter().try_fold(0u64, |acc, name| -> Result<u64> {
        let module = catalog.get(name).map_err(|_| QuoteError::UnknownModule {
            name: name.clone(),
        })?;
        Ok(acc + u64::from(module.effort_hours))
    })
}

pub fn project_duration(total_hours: u64, hours_per_day: u32) -> Result<ProjectDuration> {
    if hours_per_day == 0 {
        return Err(QuoteError::invalid_input(
            "hours_per_day",
            hours_per_day,
            "Hours per day must be greater than zero",
        ));
    }
    let days = total_hours as f64 / f64::from(hours_per_day);
    Ok(ProjectDuration {
        days,
        weeks: days / WORKING_DAYS_PER_WEEK,
    })
}

pub fn total_cost(total_hours: u64, hourly_rate: Decimal) -> Result<Decimal> {
    check_rate(hourly_rate)?;
    multiply_rate(Decimal::from(total_hours), hourly_rate)
}

/// Cost of a single module at `hourly_rate`.
pub fn line_cost(effort_hours: u32, hourly_rate: Decimal) -> Result<Decimal> {
    check_rate(hourly_rate)?;
    multiply_rate(Decimal::from(effort_hours), hourly_rate)
}

/// Adds the whole part of `days` to `start_date`. The fractional day is
/// dropped, not rounded up.
pub fn end_date(start_date: NaiveDate, days: f64) -> Result<NaiveDate> {
    if !days.is_finite() || days < 0.0 {
        return Err(QuoteError::invalid_input(
            "days",
            days,
            "Duration must be a finite, non-negative number of days",
        ));
    }
    let whole_days = days.trunc() as u64;
    start_date
        .checked_add_days(Days::new(whole_days))
        .ok_or_else(|| {
            QuoteError::invalid_input("days", days, "End date falls outside the supported calendar")
        })
}

/// One line per selected module, in catalog order regardless of the order
/// the names were selected in.
pub fn build_line_items(
    catalog: &Catalog,
    selected: &BTreeSet<String>,
    hourly_rate: Decimal,
) -> Result<Vec<LineItem>> {
    check_rate(hourly_rate)?;
    if let Some(unknown) = selected.iter().find(|name| !catalog.contains(name)) {
        return Err(QuoteError::UnknownModule {
            name: unknown.clone(),
        });
    }

    catalog
        .list_modules()
        .iter()
        .filter(|module| selected.contains(&module.name))
        .map(|module| -> Result<LineItem> {
            Ok(LineItem {
                module: module.name.clone(),
                hours: module.effort_hours,
                complexity: module.complexity,
                cost: line_cost(module.effort_hours, hourly_rate)?,
            })
        })
        .collect()
}

/// Builds the full quote. Nothing is returned unless every step succeeds.
pub fn calculate_quote(catalog: &Catalog, request: &QuoteRequest) -> Result<QuoteResult> {
    let total_hours = total_hours(catalog, &request.selected_modules)?;
    let duration = project_duration(total_hours, request.hours_per_day)?;
    let total_cost = total_cost(total_hours, request.hourly_rate)?;
    let end_date = end_date(request.start_date, duration.days)?;
    let line_items = build_line_items(catalog, &request.selected_modules, request.hourly_rate)?;

    Ok(QuoteResult {
        start_date: request.start_date,
        total_hours,
        total_days: duration.days,
        total_weeks: duration.weeks,
        total_cost,
        end_date,
        line_items,
    })
}

fn check_rate(hourly_rate: Decimal) -> Result<()> {
    if hourly_rate < Decimal::ZERO {
        return Err(QuoteError::invalid_input(
            "hourly_rate",
            hourly_rate,
            "Hourly rate cannot be negative",
        ));
    }
    Ok(())
}

// Hours are integral, so the product keeps the rate's scale and is exact.
fn multiply_rate(hours: Decimal, hourly_rate: Decimal) -> Result<Decimal> {
    hours.checked_mul(hourly_rate).ok_or_else(|| {
        QuoteError::invalid_input("hourly_rate", hourly_rate, "Cost exceeds the representable range")
    })
}
