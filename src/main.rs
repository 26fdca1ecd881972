use book_etl::core::ConfigProvider;
use book_etl::utils::error::ErrorSeverity;
use book_etl::utils::logger::{self, LogFormat};
use book_etl::utils::validation::Validate;
use book_etl::{
    CancellationToken, CliConfig, CsvBookWriter, EtlEngine, JsonBookReader, NormalizingProcessor,
    RuleFactory, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose)?;

    tracing::info!("Starting book-etl");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => TomlConfig::default(),
    };
    config.apply_cli(&cli);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, cancelling");
            ctrl_c_token.cancel();
        }
    });

    let reader = JsonBookReader::new(config.input_path())?;
    let writer = CsvBookWriter::new(config.output_path())?;

    let mut engine = EtlEngine::new(reader, writer);
    if config.normalize() {
        engine = engine.with_processor(Box::new(NormalizingProcessor));
    }
    let engine = engine.with_processor(Box::new(RuleFactory::default_engine(&config)));

    match engine.run(&cancel).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Processed {} books: {} valid, {} written",
                summary.read,
                summary.valid,
                summary.written
            );
            println!("✅ Books processed successfully!");
            println!("📁 Output written to: {}", summary.destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Book processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
