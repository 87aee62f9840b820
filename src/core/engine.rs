use crate::core::Screening;
use crate::domain::model::as_screening_report;
use crate::utils::error::Result;

pub struct ScreeningEngine<S: Screening> {
    service: S,
}

impl<S: Screening> ScreeningEngine<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Health-checks the endpoint, sends one feature vector, and renders the
    /// result. Returns whether a prediction came back.
    pub async fn run(&self, pose_features: &[f64]) -> Result<bool> {
        println!("Checking endpoint health...");
        let health = self.service.health().await?;
        println!(
            "Endpoint is {} ({})",
            health.status,
            health.model.as_deref().unwrap_or("unknown model")
        );

        println!("Sending {} pose features...", pose_features.len());
        let Some(predictions) = self.service.predict(pose_features).await else {
            return Ok(false);
        };

        match as_screening_report(&predictions) {
            Some(report) => {
                println!("Clinical Screening Results:");
                for (symptom, outcome) in &report {
                    println!(
                        "{}: {} ({:.1}%)",
                        symptom,
                        outcome.prediction,
                        outcome.confidence * 100.0
                    );
                }
            }
            // Server returned some other shape; show it raw.
            None => println!("Predictions: {}", predictions),
        }

        Ok(true)
    }
}
