use clap::Parser;
use pose_screen::core::ConfigProvider;
use pose_screen::utils::{features, logger, validation::Validate};
use pose_screen::{CliConfig, FileConfig, PredictionClient, ScreeningEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting pose-screen CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let completed = match &cli.config {
        Some(path) => {
            let config = FileConfig::from_file(path)?;
            run(config, &cli).await
        }
        None => run(cli.clone(), &cli).await,
    };

    match completed {
        Ok(true) => {
            tracing::info!("✅ Screening completed");
            Ok(())
        }
        Ok(false) => {
            // The prediction failure was already logged by the client.
            eprintln!("❌ No prediction received from the endpoint");
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("❌ Screening failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn run<C: ConfigProvider + Validate>(
    config: C,
    cli: &CliConfig,
) -> pose_screen::Result<bool> {
    config.validate()?;

    // A --features-file flag beats the config file's input section.
    let features_path = cli
        .features_file
        .as_deref()
        .or_else(|| config.features_file())
        .ok_or_else(|| pose_screen::ScreenError::ConfigError {
            message: "No feature vector given; pass --features-file or set input.features_file"
                .to_string(),
        })?;

    let pose_features = features::read_feature_csv(features_path)?;
    tracing::info!(
        "Loaded {} pose features from {}",
        pose_features.len(),
        features_path.display()
    );

    let client = PredictionClient::new(config);
    let engine = ScreeningEngine::new(client);
    engine.run(&pose_features).await
}
