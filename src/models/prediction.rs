use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One inference attempt, as persisted and as returned by the history query.
///
/// `gender` and `symptoms` are kept exactly as submitted; normalization only
/// happens inside the feature builder. `disease` holds either the predicted
/// label or the soft-failure message. Append-only: records are never updated
/// or deleted by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub age: f64,
    pub gender: String,
    pub symptoms: Vec<String>,
    pub disease: String,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(
        age: f64,
        gender: String,
        symptoms: Vec<String>,
        disease: String,
        user_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            age,
            gender,
            symptoms,
            disease,
            user_id,
            created_at: Utc::now(),
        }
    }
}
