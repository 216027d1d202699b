use clap::Parser;
use treatment_navigator::core::{ConfigProvider, Pipeline};
use treatment_navigator::utils::error::ErrorSeverity;
use treatment_navigator::utils::{logger, validation::Validate};
use treatment_navigator::{BatchConfig, BatchPipeline, LocalStorage, NavigatorEngine};

#[derive(Parser)]
#[command(name = "batch-plan")]
#[command(about = "Evaluate a CSV file of cases against the treatment table")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "navigator.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override include_side_effects from config
    #[arg(long)]
    side_effects: Option<bool>,

    /// Only load the configuration and count cases
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match BatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Some(include) = args.side_effects {
        config.set_include_side_effects(include);
        tracing::info!("🔧 Side effects overridden to: {}", include);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = BatchPipeline::new(storage, config);

    if args.dry_run {
        let cases = pipeline.extract().await?;
        println!("🔍 Dry run: {} case(s) would be evaluated", cases.len());
        return Ok(());
    }

    let engine = NavigatorEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Batch evaluation completed");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch evaluation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &BatchConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Batch: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        println!("  Description: {}", description);
    }
    println!("  Input: {}", config.input_path());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    println!("  Side effects: {}", config.include_side_effects());
    println!("  Stop on invalid: {}", config.stop_on_invalid());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
