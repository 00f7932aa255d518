use anyhow::Context;
use clap::Parser;
use syntax_primer::utils::{logger, validation::Validate};
use syntax_primer::{CliConfig, LocalStorage, TourEngine, TourSettings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting syntax-primer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match TourSettings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if cli.monitor {
        tracing::info!("🔍 Resource monitoring enabled");
    }

    let storage = LocalStorage::new(cli.scratch_dir.clone());
    let engine = TourEngine::from_config(&settings, storage, cli.monitor);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    engine
        .run(&mut out)
        .context("tour aborted before completing")?;

    tracing::info!("✅ Tour completed");
    Ok(())
}
