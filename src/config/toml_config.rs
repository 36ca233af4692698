use crate::core::catalog::Catalog;
use crate::core::engine::QuoteLimits;
use crate::core::formatter::CurrencyFormat;
use crate::core::ConfigProvider;
use crate::domain::model::Module;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_range, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("environment variable pattern is valid")
});

/// File configuration. Every section is optional; missing values fall back
/// to the built-in catalog and the default bounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub quote: QuoteSection,
    #[serde(default)]
    pub currency: CurrencyFormat,
    pub modules: Option<Vec<Module>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSection {
    pub default_hourly_rate: Decimal,
    pub min_hourly_rate: Decimal,
    pub max_hourly_rate: Decimal,
    /// Zero disables the step check.
    pub hourly_rate_step: Decimal,
    pub default_hours_per_day: u32,
    pub min_hours_per_day: u32,
    pub max_hours_per_day: u32,
}

impl Default for QuoteSection {
    fn default() -> Self {
        let limits = QuoteLimits::default();
        Self {
            default_hourly_rate: Decimal::from(15000),
            min_hourly_rate: limits.min_hourly_rate,
            max_hourly_rate: limits.max_hourly_rate,
            hourly_rate_step: limits.hourly_rate_step.unwrap_or(Decimal::ZERO),
            default_hours_per_day: 8,
            min_hours_per_day: limits.min_hours_per_day,
            max_hours_per_day: limits.max_hours_per_day,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn default_hourly_rate(&self) -> Decimal {
        self.quote.default_hourly_rate
    }

    pub fn default_hours_per_day(&self) -> u32 {
        self.quote.default_hours_per_day
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog(&self) -> Result<Catalog> {
        match &self.modules {
            Some(modules) => Catalog::new(modules.clone()),
            None => Ok(Catalog::builtin().clone()),
        }
    }

    fn limits(&self) -> QuoteLimits {
        QuoteLimits {
            min_hourly_rate: self.quote.min_hourly_rate,
            max_hourly_rate: self.quote.max_hourly_rate,
            hourly_rate_step: (!self.quote.hourly_rate_step.is_zero())
                .then_some(self.quote.hourly_rate_step),
            min_hours_per_day: self.quote.min_hours_per_day,
            max_hours_per_day: self.quote.max_hours_per_day,
        }
    }

    fn currency_format(&self) -> CurrencyFormat {
        self.currency.clone()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let limits = self.limits();
        limits.validate()?;

        validate_range(
            "quote.default_hourly_rate",
            self.quote.default_hourly_rate,
            limits.min_hourly_rate,
            limits.max_hourly_rate,
        )?;
        validate_range(
            "quote.default_hours_per_day",
            self.quote.default_hours_per_day,
            limits.min_hours_per_day,
            limits.max_hours_per_day,
        )?;

        if self.currency.decimals > 6 {
            return Err(QuoteError::invalid_input(
                "currency.decimals",
                self.currency.decimals,
                "At most 6 decimal places are supported",
            ));
        }

        self.catalog().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Complexity;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_hourly_rate(), Decimal::from(15000));
        assert_eq!(config.default_hours_per_day(), 8);
        assert_eq!(config.limits(), QuoteLimits::default());
        assert_eq!(config.currency_format(), CurrencyFormat::default());
        assert_eq!(config.catalog().unwrap().len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[quote]
default_hourly_rate = 20000
min_hourly_rate = 10000
max_hourly_rate = 30000
hourly_rate_step = 0
min_hours_per_day = 6

[currency]
symbol = "CLP "
decimals = 2

[[modules]]
name = "Auth"
effort_hours = 40
complexity = "medium"
description = "Login"

[[modules]]
name = "DB"
effort_hours = 60
complexity = "high"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_hourly_rate(), Decimal::from(20000));
        assert_eq!(config.limits().hourly_rate_step, None);
        assert_eq!(config.limits().min_hours_per_day, 6);
        assert_eq!(config.limits().max_hours_per_day, 12);
        assert_eq!(config.currency_format().thousands_separator, ".");
        assert_eq!(
            config.currency_format().format(Decimal::new(12345, 1)),
            "CLP 1.234,50"
        );

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("DB").unwrap().complexity, Complexity::High);
        assert_eq!(catalog.get("DB").unwrap().description, "");
    }

    #[test]
    fn test_fractional_rates_parse_exactly() {
        let config = TomlConfig::from_toml_str(
            r#"
[quote]
default_hourly_rate = 12.25
min_hourly_rate = 10.5
max_hourly_rate = "99.99"
hourly_rate_step = 0.25
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.default_hourly_rate(), Decimal::new(1225, 2));
        let limits = config.limits();
        assert_eq!(limits.min_hourly_rate, Decimal::new(105, 1));
        assert_eq!(limits.max_hourly_rate, Decimal::new(9999, 2));
        assert_eq!(limits.hourly_rate_step, Some(Decimal::new(25, 2)));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QUOTE_CALC_TEST_RATE", "25000");

        let toml_content = r#"
[quote]
default_hourly_rate = ${QUOTE_CALC_TEST_RATE}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_hourly_rate(), Decimal::from(25000));

        std::env::remove_var("QUOTE_CALC_TEST_RATE");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[quote]
default_hourly_rate = 60000
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[[modules]]
name = "Auth"
effort_hours = 0
complexity = "low"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        let result = TomlConfig::from_toml_str("[quote\nmin_hourly_rate = ");
        assert!(matches!(result, Err(QuoteError::ConfigError { .. })));

        let result = TomlConfig::from_toml_str(
            r#"
[[modules]]
name = "Auth"
effort_hours = 10
complexity = "extreme"
"#,
        );
        assert!(matches!(result, Err(QuoteError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[quote]
max_hours_per_day = 10
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.limits().max_hours_per_day, 10);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/nonexistent/quote-calc.toml");
        assert!(matches!(result, Err(QuoteError::IoError(_))));
    }
}
