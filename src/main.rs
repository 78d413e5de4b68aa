use brafit::adapters::console::ConsoleInput;
use brafit::adapters::guide::MEASUREMENT_GUIDE;
use brafit::adapters::render::{JsonRenderer, TextRenderer};
use brafit::domain::ports::Renderer;
use brafit::utils::error::ErrorSeverity;
use brafit::utils::{logger, validation::Validate};
use brafit::{CliConfig, FitEngine, FitProfile, OutputFormat};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting brafit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.profile.clone() {
        match FitProfile::from_file(&path) {
            Ok(profile) => {
                tracing::debug!("Loaded profile from {}", path);
                config = config.merged_with(&profile);
            }
            Err(e) => {
                tracing::error!("❌ Failed to load profile {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    if config.guide {
        println!("{}", MEASUREMENT_GUIDE);
        return Ok(());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let renderer: Box<dyn Renderer> = match config.format() {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    };

    let mut engine = FitEngine::new(config, ConsoleInput::new(), renderer);

    match engine.run() {
        Ok(output) => {
            tracing::info!("✅ Size calculation completed");
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Size calculation failed: {} (Category: {:?}, Severity: {:?})",
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
