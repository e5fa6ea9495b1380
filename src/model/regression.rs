use crate::{Error, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// On-disk representation of the trained artifact.
#[derive(Debug, Serialize, Deserialize)]
struct Artifact {
    coefficients: Vec<f64>,
    intercept: f64,
}

/// A pre-fit linear regression model mapping a feature vector to a single
/// continuous output. Loaded once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct RegressionModel {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl RegressionModel {
    /// Loads a serialized artifact from disk. A missing or corrupt file is
    /// fatal to the caller; no default model is substituted.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading regression artifact from: {}", path.display());

        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::model(format!("cannot read artifact {}: {}", path.display(), e)))?;
        let artifact: Artifact = serde_json::from_str(&raw)
            .map_err(|e| Error::model(format!("corrupt artifact {}: {}", path.display(), e)))?;

        Self::from_parts(artifact.coefficients, artifact.intercept)
    }

    pub fn from_parts(coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::model("artifact has no coefficients"));
        }
        Ok(Self {
            coefficients: Array1::from(coefficients),
            intercept,
        })
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Runs inference over a feature matrix, one row per sample. Pure and
    /// deterministic: identical input against an unchanged model yields
    /// identical output.
    pub fn predict(&self, features: &Array2<f64>) -> Result<Array1<f64>> {
        if features.ncols() != self.n_features() {
            return Err(Error::model(format!(
                "feature width {} does not match model width {}",
                features.ncols(),
                self.n_features()
            )));
        }
        Ok(features.dot(&self.coefficients) + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_artifact(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_predict_known_coefficients() {
        let file = write_artifact(r#"{"coefficients": [0.2], "intercept": 1000.0}"#);
        let model = RegressionModel::load(file.path()).unwrap();

        assert_eq!(model.n_features(), 1);

        let outputs = model.predict(&arr2(&[[1_000_000.0]])).unwrap();
        assert!((outputs[0] - 201_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model = RegressionModel::from_parts(vec![0.2], 1000.0).unwrap();
        let features = arr2(&[[123_456.78]]);

        let first = model.predict(&features).unwrap();
        let second = model.predict(&features).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_predict_multi_feature() {
        let model = RegressionModel::from_parts(vec![1.0, 2.0], 10.0).unwrap();
        let outputs = model.predict(&arr2(&[[3.0, 4.0]])).unwrap();
        assert_eq!(outputs[0], 21.0);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = RegressionModel::load("/nonexistent/r_and_d_model.json");
        assert!(matches!(result, Err(Error::Model(_))));
    }

    #[test]
    fn test_load_corrupt_artifact_fails() {
        let file = write_artifact("not json at all");
        let result = RegressionModel::load(file.path());
        assert!(matches!(result, Err(Error::Model(_))));
    }

    #[test]
    fn test_empty_coefficients_rejected() {
        let result = RegressionModel::from_parts(vec![], 0.0);
        assert!(matches!(result, Err(Error::Model(_))));
    }

    #[test]
    fn test_feature_width_mismatch_is_error_not_panic() {
        let model = RegressionModel::from_parts(vec![0.2], 1000.0).unwrap();
        let result = model.predict(&arr2(&[[1.0, 2.0]]));
        assert!(matches!(result, Err(Error::Model(_))));
    }
}
