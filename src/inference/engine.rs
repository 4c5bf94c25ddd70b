//! Inference engine — wraps the fitted classifier and both label encoders.
//!
//! The engine is constructed once at startup. If any of the three model
//! artifacts fails to load, the engine runs in permanent unavailable mode
//! for the process lifetime: every prediction yields the unavailable-model
//! message instead of a disease label. Encoding and classifier failures are
//! converted into `InferenceOutcome::Failed` here so nothing below this
//! boundary can crash a request.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::encoder::LabelEncoder;
use super::features::build_feature_vector;
use super::tree::{ClassifierError, DecisionTree};
use super::vocabulary::SymptomVocabulary;

pub const GENDER_ENCODER_FILE: &str = "le_gender.json";
pub const DISEASE_ENCODER_FILE: &str = "le_disease.json";
pub const CLASSIFIER_FILE: &str = "disease_model.json";

/// Disease-field text recorded when no classifier is loaded.
pub const MODEL_MISSING_LABEL: &str = "Prediction unavailable (model missing)";

/// Outcome of one inference attempt. Never silently defaults to a label.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutcome {
    /// Classifier produced a class code that decoded to a disease name.
    Success(String),
    /// No classifier loaded at startup; the vector was never consulted.
    Unavailable(String),
    /// Encoding, the classifier call, or class-code decoding failed.
    Failed(String),
}

impl InferenceOutcome {
    /// Text recorded in the prediction record's disease field.
    pub fn label(&self) -> &str {
        match self {
            InferenceOutcome::Success(disease) => disease,
            InferenceOutcome::Unavailable(reason) => reason,
            InferenceOutcome::Failed(reason) => reason,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, InferenceOutcome::Success(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("classifier failed validation: {0}")]
    Invalid(#[from] ClassifierError),
}

/// The three artifacts exported together at training time.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub genders: LabelEncoder,
    pub diseases: LabelEncoder,
    pub classifier: DecisionTree,
}

impl ModelBundle {
    /// Load all three artifacts from `dir`. All-or-nothing: a missing or
    /// malformed file fails the whole bundle.
    pub fn load(dir: &Path) -> Result<Self, ModelLoadError> {
        let genders: LabelEncoder = read_json(&dir.join(GENDER_ENCODER_FILE))?;
        let diseases: LabelEncoder = read_json(&dir.join(DISEASE_ENCODER_FILE))?;
        let classifier: DecisionTree = read_json(&dir.join(CLASSIFIER_FILE))?;
        classifier.validate()?;
        Ok(Self {
            genders,
            diseases,
            classifier,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelLoadError> {
    let file = File::open(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ModelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Stateless prediction pipeline over read-only model state.
#[derive(Debug)]
pub struct InferenceEngine {
    vocabulary: SymptomVocabulary,
    bundle: Option<ModelBundle>,
}

impl InferenceEngine {
    pub fn new(vocabulary: SymptomVocabulary, bundle: Option<ModelBundle>) -> Self {
        Self { vocabulary, bundle }
    }

    /// Load the model bundle from `dir`, degrading to unavailable mode on
    /// any failure. Mirrors startup behavior: the server still comes up and
    /// records every request, it just cannot name a disease.
    pub fn load(vocabulary: SymptomVocabulary, dir: &Path) -> Self {
        match ModelBundle::load(dir) {
            Ok(bundle) => {
                tracing::info!(
                    dir = %dir.display(),
                    diseases = bundle.diseases.len(),
                    nodes = bundle.classifier.node_count(),
                    "ML model and encoders loaded"
                );
                Self::new(vocabulary, Some(bundle))
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "ML model not found, predictions will degrade");
                Self::new(vocabulary, None)
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.bundle.is_some()
    }

    pub fn vocabulary(&self) -> &SymptomVocabulary {
        &self.vocabulary
    }

    /// Run the full pipeline for one request: availability check, feature
    /// encoding, then classifier inference. Availability is checked first —
    /// with no model there is nothing to encode for.
    pub fn predict(&self, age: f64, gender: &str, symptoms: &[String]) -> InferenceOutcome {
        let Some(bundle) = &self.bundle else {
            return InferenceOutcome::Unavailable(MODEL_MISSING_LABEL.to_string());
        };
        let vector =
            match build_feature_vector(age, gender, symptoms, &self.vocabulary, &bundle.genders) {
                Ok(v) => v,
                Err(e) => return InferenceOutcome::Failed(format!("Prediction failed: {e}")),
            };
        self.infer(&vector)
    }

    /// Classify an already-built feature vector.
    pub fn infer(&self, vector: &[f64]) -> InferenceOutcome {
        let Some(bundle) = &self.bundle else {
            return InferenceOutcome::Unavailable(MODEL_MISSING_LABEL.to_string());
        };
        let code = match bundle.classifier.predict(vector) {
            Ok(code) => code,
            Err(e) => return InferenceOutcome::Failed(format!("Prediction failed: {e}")),
        };
        match bundle.diseases.decode(code) {
            Some(disease) => InferenceOutcome::Success(disease.to_string()),
            None => InferenceOutcome::Failed(format!(
                "Prediction failed: classifier produced unknown class code {code}"
            )),
        }
    }
}
