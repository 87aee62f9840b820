use crate::core::{ConfigProvider, HealthStatus, Result, Screening};
use crate::domain::model::{PredictRequest, PredictResponse};
use crate::utils::error::ScreenError;
use reqwest::Client;

pub struct PredictionClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> PredictionClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url().trim_end_matches('/'), path)
    }

    /// Typed variant of `predict`: sends one feature vector and surfaces the
    /// failure mode instead of swallowing it.
    pub async fn try_predict(&self, pose_features: &[f64]) -> Result<serde_json::Value> {
        let url = self.endpoint("predict");
        tracing::debug!("Sending {} features to {}", pose_features.len(), url);

        let mut request = self.client.post(&url).json(&PredictRequest { pose_features });

        if let Some(timeout) = self.config.request_timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Prediction response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScreenError::EndpointError {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: PredictResponse = response.json().await?;
        decoded.predictions.ok_or(ScreenError::MissingPredictions)
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Screening for PredictionClient<C> {
    async fn predict(&self, pose_features: &[f64]) -> Option<serde_json::Value> {
        match self.try_predict(pose_features).await {
            Ok(predictions) => Some(predictions),
            Err(e) => {
                tracing::error!("Prediction request failed: {}", e);
                None
            }
        }
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("health");

        let mut request = self.client.get(&url);
        if let Some(timeout) = self.config.request_timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScreenError::EndpointError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::path::Path;
    use std::time::Duration;

    struct MockConfig {
        api_base_url: String,
    }

    impl MockConfig {
        fn new(api_base_url: String) -> Self {
            Self { api_base_url }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_base_url(&self) -> &str {
            &self.api_base_url
        }

        fn request_timeout(&self) -> Option<Duration> {
            None
        }

        fn features_file(&self) -> Option<&Path> {
            None
        }
    }

    fn client_for(server: &MockServer) -> PredictionClient<MockConfig> {
        PredictionClient::new(MockConfig::new(server.base_url()))
    }

    #[tokio::test]
    async fn test_predict_returns_predictions_field() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/predict")
                .header("Content-Type", "application/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": "success",
                    "predictions": [0.1, 0.9],
                    "model_accuracy": "86.7%"
                }));
        });

        let client = client_for(&server);
        let result = client.predict(&[0.5, 1.5]).await;

        api_mock.assert();
        assert_eq!(result, Some(serde_json::json!([0.1, 0.9])));
    }

    #[tokio::test]
    async fn test_request_body_forwards_features_unchanged() {
        let server = MockServer::start();
        let features = vec![0.25, -3.5, 0.0, 12.125];

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/predict").json_body(serde_json::json!({
                "pose_features": [0.25, -3.5, 0.0, 12.125]
            }));
            then.status(200)
                .json_body(serde_json::json!({"predictions": {}}));
        });

        let client = client_for(&server);
        let result = client.predict(&features).await;

        api_mock.assert();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_predict_swallows_server_error() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/predict");
            then.status(500)
                .json_body(serde_json::json!({"error": "model failure"}));
        });

        let client = client_for(&server);
        let result = client.predict(&[0.1]).await;

        api_mock.assert();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_predict_swallows_non_json_body() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/predict");
            then.status(200).body("<html>definitely not json</html>");
        });

        let client = client_for(&server);
        let result = client.predict(&[0.1]).await;

        api_mock.assert();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_predict_swallows_connection_failure() {
        // Unroutable port; nothing is listening.
        let client = PredictionClient::new(MockConfig::new("http://127.0.0.1:9".to_string()));
        let result = client.predict(&[0.1, 0.2]).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_predict_swallows_missing_predictions_field() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/predict");
            then.status(200)
                .json_body(serde_json::json!({"status": "success"}));
        });

        let client = client_for(&server);
        let result = client.predict(&[0.1]).await;

        api_mock.assert();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_try_predict_distinguishes_failure_modes() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/predict");
            then.status(503).body("overloaded");
        });

        let client = client_for(&server);
        match client.try_predict(&[0.1]).await {
            Err(ScreenError::EndpointError { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("expected EndpointError, got {:?}", other.map(|_| ())),
        }

        let dead = PredictionClient::new(MockConfig::new("http://127.0.0.1:9".to_string()));
        assert!(matches!(
            dead.try_predict(&[0.1]).await,
            Err(ScreenError::ApiError(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_predictions_are_independent() {
        let server = MockServer::start();

        let mock_a = server.mock(|when, then| {
            when.method(POST)
                .path("/predict")
                .json_body(serde_json::json!({"pose_features": [1.0]}));
            then.status(200)
                .json_body(serde_json::json!({"predictions": "a"}));
        });

        let mock_b = server.mock(|when, then| {
            when.method(POST)
                .path("/predict")
                .json_body(serde_json::json!({"pose_features": [2.0]}));
            then.status(200)
                .json_body(serde_json::json!({"predictions": "b"}));
        });

        let client = client_for(&server);
        let (result_a, result_b) = tokio::join!(client.predict(&[1.0]), client.predict(&[2.0]));

        mock_a.assert();
        mock_b.assert();
        assert_eq!(result_a, Some(serde_json::json!("a")));
        assert_eq!(result_b, Some(serde_json::json!("b")));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_normalized() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/predict");
            then.status(200)
                .json_body(serde_json::json!({"predictions": []}));
        });

        let client = PredictionClient::new(MockConfig::new(format!("{}/", server.base_url())));
        let result = client.predict(&[0.1]).await;

        api_mock.assert();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200).json_body(serde_json::json!({
                "status": "healthy",
                "model": "Clinical GAT 86.7%"
            }));
        });

        let client = client_for(&server);
        let health = client.health().await.unwrap();

        api_mock.assert();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.model.as_deref(), Some("Clinical GAT 86.7%"));
    }

    #[tokio::test]
    async fn test_health_check_propagates_server_error() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(500);
        });

        let client = client_for(&server);
        assert!(matches!(
            client.health().await,
            Err(ScreenError::EndpointError { status: 500, .. })
        ));
    }
}
