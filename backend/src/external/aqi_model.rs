//! AQI model artifact I/O
//!
//! The artifact is a small JSON document (see `shared::AqiModel`). The
//! server loads it once at startup; the trainer writes it.

use std::fs;
use std::path::Path;

use shared::{AqiModel, MODEL_FEATURES};

use crate::error::{AppError, AppResult};

/// Load and sanity-check the model artifact.
pub fn load_model<P: AsRef<Path>>(path: P) -> AppResult<AqiModel> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::Model(format!("Cannot read model artifact {}: {}", path.display(), e))
    })?;
    let model: AqiModel = serde_json::from_str(&contents)
        .map_err(|e| AppError::Model(format!("Malformed model artifact: {}", e)))?;

    if model.features != MODEL_FEATURES {
        return Err(AppError::Model(format!(
            "Model was trained with features {:?}, expected {:?}",
            model.features, MODEL_FEATURES
        )));
    }
    if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
        return Err(AppError::Model(
            "Model artifact contains non-finite coefficients".to_string(),
        ));
    }

    tracing::debug!(?model.trained_at, "Loaded AQI model artifact");
    Ok(model)
}

/// Write the model artifact as pretty-printed JSON.
pub fn save_model<P: AsRef<Path>>(path: P, model: &AqiModel) -> AppResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(model)
        .map_err(|e| AppError::Model(format!("Cannot serialize model: {}", e)))?;
    fs::write(path, json).map_err(|e| {
        AppError::Model(format!("Cannot write model artifact {}: {}", path.display(), e))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join("enviro-model-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("model.json");

        let model = AqiModel::new(3.5, [1.0, -0.5, 2.0, 0.75]);
        save_model(&path, &model).unwrap();
        let loaded = load_model(&path).unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_missing_artifact_is_model_error() {
        let err = load_model("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, AppError::Model(_)));
    }

    #[test]
    fn test_wrong_feature_set_rejected() {
        let dir = std::env::temp_dir().join("enviro-model-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad_features.json");

        let mut model = AqiModel::new(0.0, [1.0, 1.0, 1.0, 1.0]);
        model.features = vec!["temperature".to_string()];
        std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();

        let err = load_model(&path).unwrap_err();
        assert!(matches!(err, AppError::Model(_)));
    }
}
