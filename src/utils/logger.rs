use std::io::{self, Stderr};
use tracing_subscriber::fmt::{self, format::DefaultFields, format::Format};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "quote_calc=debug,info"
    } else {
        "quote_calc=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

// Logs go to stderr so stdout stays clean for the rendered quote or JSON.
fn stderr_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> Stderr> {
    fmt::layer()
        .with_writer(io::stderr as fn() -> Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer().compact())
        .init();
}

/// JSON log lines, for running the calculator behind another process.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer().json())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false), "quote_calc=info");
        assert_eq!(default_directives(true), "quote_calc=debug,info");
    }

    #[test]
    fn test_both_formats_share_one_layer_setup() {
        use tracing_subscriber::Registry;

        let compact = Registry::default()
            .with(EnvFilter::new(default_directives(false)))
            .with(stderr_layer().compact());
        let json = Registry::default()
            .with(EnvFilter::new(default_directives(true)))
            .with(stderr_layer().json());

        tracing::subscriber::with_default(compact, || tracing::info!("compact"));
        tracing::subscriber::with_default(json, || tracing::debug!("json"));
    }
}
