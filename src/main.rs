use clap::Parser;
use quote_calc::core::report::render_quote;
use quote_calc::core::ConfigProvider;
use quote_calc::utils::{logger, validation::Validate};
use quote_calc::{CliConfig, QuoteEngine, Result, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!(
                "Quote failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(config: &CliConfig) -> Result<String> {
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    file_config.validate()?;

    let engine = QuoteEngine::from_config(&file_config)?;
    let currency = file_config.currency_format();

    if config.list {
        return engine.catalog_view(config.hourly_rate_or(&file_config), &currency);
    }

    let today = chrono::Local::now().date_naive();
    let request = config.to_request(&file_config, today);
    let result = engine.quote(&request)?;

    if config.json {
        let mut json = serde_json::to_string_pretty(&result)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render_quote(&result, &currency))
    }
}
