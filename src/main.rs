use clap::Parser;
use phone_compare::config::OutputFormat;
use phone_compare::utils::error::{CompareError, ErrorSeverity};
use phone_compare::utils::{logger, validation::Validate};
use phone_compare::{CliConfig, ComparisonEngine};

fn exit_code(e: &CompareError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &CompareError) -> ! {
    tracing::error!(
        "❌ Comparison failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.source.json_logs {
        logger::init_json_logger(cli.source.verbose);
    } else {
        logger::init_cli_logger(cli.source.verbose);
    }

    tracing::info!("Starting phone-compare");

    let config = match cli.source.load() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let source = match config.build_source() {
        Ok(source) => source,
        Err(e) => fail(&e),
    };
    let engine = ComparisonEngine::new(source, config);
    let selection = cli.selection();
    tracing::debug!("Selection: {:?}", selection);

    match engine.compare(&selection).await {
        Ok(page) => match cli.format {
            OutputFormat::Text => print!("{}", page),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
        },
        Err(e) => fail(&e),
    }

    Ok(())
}
