pub mod client;
pub mod engine;

pub use crate::domain::model::{HealthStatus, PredictRequest, PredictResponse, SymptomOutcome};
pub use crate::domain::ports::{ConfigProvider, Screening};
pub use crate::utils::error::Result;
