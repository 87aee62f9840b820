use crate::domain::model::HealthStatus;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn features_file(&self) -> Option<&Path>;
}

#[async_trait]
pub trait Screening: Send + Sync {
    /// Sends one feature vector and returns the opaque `predictions` value.
    /// Failures are logged and swallowed; the caller only sees None.
    async fn predict(&self, pose_features: &[f64]) -> Option<serde_json::Value>;

    async fn health(&self) -> Result<HealthStatus>;
}
