//! Prediction core: feature encoding + classifier inference.
//!
//! Everything here is pure computation over read-only model state loaded
//! once at startup. Persistence and HTTP concerns live elsewhere.

pub mod encoder;
pub mod engine;
pub mod features;
pub mod tree;
pub mod vocabulary;

pub use encoder::LabelEncoder;
pub use engine::{InferenceEngine, InferenceOutcome, ModelBundle, ModelLoadError};
pub use features::{build_feature_vector, canonicalize_gender, EncodingError};
pub use tree::{ClassifierError, DecisionTree};
pub use vocabulary::SymptomVocabulary;
