use clap::Parser;
use treatment_navigator::utils::error::{ErrorSeverity, NavigatorError};
use treatment_navigator::utils::logger;
use treatment_navigator::{compute_treatment, CliConfig, TreatmentPlan};

fn exit_code(e: &NavigatorError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 輸入錯誤
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run(config: &CliConfig) -> Result<TreatmentPlan, NavigatorError> {
    let raw = config.to_form().into_raw()?;
    Ok(compute_treatment(&raw, config.side_effects)?)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(plan) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("{}", plan);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Could not build a treatment plan: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
