pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FileConfig;

pub use core::{client::PredictionClient, engine::ScreeningEngine};
pub use utils::error::{Result, ScreenError};
