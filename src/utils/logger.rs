use crate::utils::error::{EtlError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output shape of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line events for terminals.
    #[default]
    Compact,
    /// One JSON object per event, fields flattened, for log shippers.
    Json,
}

/// Directive used when `RUST_LOG` is unset.
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "book_etl=debug,info"
    } else {
        "book_etl=info"
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logger(format: LogFormat, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let installed = match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json().flatten_event(true))
            .try_init(),
    };

    installed.map_err(|e| EtlError::ConfigError {
        message: format!("Failed to install logger: {}", e),
    })
}
