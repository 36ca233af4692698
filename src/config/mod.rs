pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::config::toml_config::TomlConfig;
    use crate::domain::model::QuoteRequest;
    use chrono::NaiveDate;
    use clap::Parser;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "quote-calc")]
    #[command(about = "Quote a software project from a catalog of predefined modules")]
    pub struct CliConfig {
        /// Module to include; repeat the flag or separate names with commas
        #[arg(short, long = "module", value_delimiter = ',')]
        pub modules: Vec<String>,

        /// Developer cost per hour (defaults to the configured rate)
        #[arg(long, allow_negative_numbers = true)]
        pub hourly_rate: Option<Decimal>,

        /// Working hours per day (defaults to the configured value)
        #[arg(long)]
        pub hours_per_day: Option<u32>,

        /// Project start date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        pub start_date: Option<NaiveDate>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Print the module catalog and exit
        #[arg(long)]
        pub list: bool,

        /// Print the quote as JSON
        #[arg(long)]
        pub json: bool,

        /// Emit log lines as JSON
        #[arg(long)]
        pub json_logs: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn hourly_rate_or(&self, file: &TomlConfig) -> Decimal {
            self.hourly_rate.unwrap_or_else(|| file.default_hourly_rate())
        }

        /// Command-line values win over the file, the file over built-in defaults.
        pub fn to_request(&self, file: &TomlConfig, today: NaiveDate) -> QuoteRequest {
            QuoteRequest::new(
                self.modules.iter().map(|m| m.trim().to_string()),
                self.hourly_rate_or(file),
                self.hours_per_day
                    .unwrap_or_else(|| file.default_hours_per_day()),
                self.start_date.unwrap_or(today),
            )
        }
    }

}
