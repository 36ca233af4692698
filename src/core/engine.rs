use crate::core::calculator::calculate_quote;
use crate::core::catalog::Catalog;
use crate::core::formatter::CurrencyFormat;
use crate::core::report::render_catalog;
use crate::core::ConfigProvider;
use crate::domain::model::{QuoteRequest, QuoteResult};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_range, validate_step, Validate};
use rust_decimal::Decimal;

/// Bounds the request is checked against before any arithmetic runs.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLimits {
    pub min_hourly_rate: Decimal,
    pub max_hourly_rate: Decimal,
    /// Rates must sit on `min_hourly_rate + k * step` when set.
    pub hourly_rate_step: Option<Decimal>,
    pub min_hours_per_day: u32,
    pub max_hours_per_day: u32,
}

impl Default for QuoteLimits {
    fn default() -> Self {
        Self {
            min_hourly_rate: Decimal::from(5000),
            max_hourly_rate: Decimal::from(50000),
            hourly_rate_step: Some(Decimal::from(1000)),
            min_hours_per_day: 4,
            max_hours_per_day: 12,
        }
    }
}

impl QuoteLimits {
    pub fn check(&self, request: &QuoteRequest) -> Result<()> {
        self.check_hourly_rate(request.hourly_rate)?;
        validate_range(
            "hours_per_day",
            request.hours_per_day,
            self.min_hours_per_day,
            self.max_hours_per_day,
        )
    }

    pub fn check_hourly_rate(&self, hourly_rate: Decimal) -> Result<()> {
        validate_range(
            "hourly_rate",
            hourly_rate,
            self.min_hourly_rate,
            self.max_hourly_rate,
        )?;
        if let Some(step) = self.hourly_rate_step {
            validate_step("hourly_rate", hourly_rate, self.min_hourly_rate, step)?;
        }
        Ok(())
    }
}

impl Validate for QuoteLimits {
    fn validate(&self) -> Result<()> {
        if self.min_hourly_rate < Decimal::ZERO {
            return Err(QuoteError::invalid_input(
                "quote.min_hourly_rate",
                self.min_hourly_rate,
                "Minimum hourly rate cannot be negative",
            ));
        }
        if self.min_hourly_rate > self.max_hourly_rate {
            return Err(QuoteError::invalid_input(
                "quote.max_hourly_rate",
                self.max_hourly_rate,
                format!("Must not be below min_hourly_rate ({})", self.min_hourly_rate),
            ));
        }
        if let Some(step) = self.hourly_rate_step {
            if step < Decimal::ZERO {
                return Err(QuoteError::invalid_input(
                    "quote.hourly_rate_step",
                    step,
                    "Step cannot be negative",
                ));
            }
        }
        if self.min_hours_per_day == 0 {
            return Err(QuoteError::invalid_input(
                "quote.min_hours_per_day",
                self.min_hours_per_day,
                "A working day needs at least one hour",
            ));
        }
        if self.min_hours_per_day > self.max_hours_per_day {
            return Err(QuoteError::invalid_input(
                "quote.max_hours_per_day",
                self.max_hours_per_day,
                format!("Must not be below min_hours_per_day ({})", self.min_hours_per_day),
            ));
        }
        Ok(())
    }
}

pub struct QuoteEngine {
    catalog: Catalog,
    limits: QuoteLimits,
}

impl QuoteEngine {
    pub fn new(catalog: Catalog, limits: QuoteLimits) -> Self {
        Self { catalog, limits }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let limits = config.limits();
        limits.validate()?;
        Ok(Self::new(config.catalog()?, limits))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn limits(&self) -> &QuoteLimits {
        &self.limits
    }

    /// Checks the request against the configured bounds, then computes the
    /// quote from scratch.
    pub fn quote(&self, request: &QuoteRequest) -> Result<QuoteResult> {
        tracing::debug!(
            "Quote request: {} module(s), rate {}, {} h/day, start {}",
            request.selected_modules.len(),
            request.hourly_rate,
            request.hours_per_day,
            request.start_date
        );

        if let Err(e) = self.limits.check(request) {
            tracing::warn!("Rejected quote request: {}", e);
            return Err(e);
        }

        let result = calculate_quote(&self.catalog, request)?;
        tracing::info!(
            "Quoted {} module(s): {} h, {:.1} days, cost {}",
            result.module_count(),
            result.total_hours,
            result.total_days,
            result.total_cost
        );
        Ok(result)
    }

    /// The module picker priced at `hourly_rate`, once the rate passes the
    /// same bounds a quote would.
    pub fn catalog_view(&self, hourly_rate: Decimal, format: &CurrencyFormat) -> Result<String> {
        self.limits.check_hourly_rate(hourly_rate)?;
        render_catalog(&self.catalog, hourly_rate, format)
    }
}
