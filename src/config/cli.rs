use crate::core::ConfigProvider;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://models-2-ctfm.onrender.com";

#[derive(Debug, Clone, Parser)]
#[command(name = "pose-screen")]
#[command(about = "Send pose features to a clinical screening prediction endpoint")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, help = "CSV file holding the pose feature vector")]
    pub features_file: Option<PathBuf>,

    #[arg(long, help = "Per-request timeout; transport default when unset")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn features_file(&self) -> Option<&Path> {
        self.features_file.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_url("api_url", &self.api_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
