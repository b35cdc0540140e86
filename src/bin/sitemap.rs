use anyhow::Context;
use clap::Parser;
use phone_compare::config::cli::SourceArgs;
use phone_compare::core::sitemap::render_xml;
use phone_compare::core::Storage;
use phone_compare::utils::{logger, validation::Validate};
use phone_compare::{ComparisonEngine, LocalStorage};

#[derive(Parser)]
#[command(name = "sitemap")]
#[command(about = "Write sitemap.xml with every phone comparison pair")]
struct Args {
    #[command(flatten)]
    source: SourceArgs,

    /// Output directory (overrides config file)
    #[arg(short, long)]
    output: Option<String>,

    /// Print the sitemap instead of writing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.source.json_logs {
        logger::init_json_logger(args.source.verbose);
    } else {
        logger::init_cli_logger(args.source.verbose);
    }

    let config = args.source.load()?;
    config.validate().context("invalid configuration")?;

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.sitemap_output_path().to_string());

    let engine = ComparisonEngine::new(config.build_source()?, config);
    let entries = engine
        .sitemap()
        .await
        .context("failed to build sitemap")?;
    let xml = render_xml(&entries);

    if args.dry_run {
        print!("{}", xml);
        return Ok(());
    }

    let storage = LocalStorage::new(output_dir.clone());
    storage
        .write_file("sitemap.xml", xml.as_bytes())
        .await
        .with_context(|| format!("failed to write sitemap.xml to {}", output_dir))?;

    tracing::info!("✅ Wrote {} URLs to {}/sitemap.xml", entries.len(), output_dir);
    println!("✅ Wrote {} URLs to {}/sitemap.xml", entries.len(), output_dir);
    Ok(())
}
