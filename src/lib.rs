pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use self::core::{
    calculator::calculate_quote,
    catalog::Catalog,
    engine::{QuoteEngine, QuoteLimits},
    formatter::{format_currency, CurrencyFormat},
};
pub use domain::model::{Complexity, LineItem, Module, ProjectDuration, QuoteRequest, QuoteResult};
pub use utils::error::{QuoteError, Result};
