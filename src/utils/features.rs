use crate::utils::error::{Result, ScreenError};
use std::path::Path;

/// Reads a pose feature vector from a CSV file. All fields across all rows
/// are flattened in order; the vector is forwarded to the endpoint as-is,
/// without length or range checks.
pub fn read_feature_csv(path: &Path) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut features = Vec::new();
    for record in reader.records() {
        let record = record?;
        for (i, field) in record.iter().enumerate() {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let value: f64 = field.parse().map_err(|_| ScreenError::ConfigError {
                message: format!(
                    "Non-numeric value '{}' in {} (field {})",
                    field,
                    path.display(),
                    i + 1
                ),
            })?;
            features.push(value);
        }
    }

    if features.is_empty() {
        return Err(ScreenError::ConfigError {
            message: format!("No feature values found in {}", path.display()),
        });
    }

    Ok(features)
}
