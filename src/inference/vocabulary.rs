//! Symptom vocabulary — the fixed feature schema of the trained classifier.
//!
//! The order of entries defines feature-vector positions 2..N+1 and must
//! match the column order used at training time. Entries are normalized
//! (trimmed, lowercased) once at construction so membership tests against
//! client input are a plain equality check.

/// Symptom columns of the deployed model, in training order.
pub const DEFAULT_SYMPTOMS: [&str; 9] = [
    "fever",
    "cough",
    "headache",
    "fatigue",
    "chest_pain",
    "nausea",
    "shortness_of_breath",
    "dizziness",
    "sore_throat",
];

/// Ordered, normalized list of known symptom identifiers.
#[derive(Debug, Clone)]
pub struct SymptomVocabulary {
    entries: Vec<String>,
}

impl SymptomVocabulary {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Normalized entries in training order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymptomVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SYMPTOMS)
    }
}
