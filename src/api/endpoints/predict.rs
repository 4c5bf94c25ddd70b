//! Prediction endpoints — the pipeline orchestration.
//!
//! `POST /api/predict` walks Validating → Encoding → Inferring → Persisting.
//! Validation failures reject the request with 400 and persist nothing.
//! Encoding and inference failures are soft: the explanatory message goes
//! into the record's disease field and the response still reports success.
//! Only a persistence failure is a hard 500 with nothing recorded. That
//! asymmetry keeps the history log complete even when inference could not
//! run, and it is part of the API contract.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::db::repository::{insert_prediction, predictions_for_user};
use crate::models::PredictionRecord;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub disease: String,
}

fn invalid_input() -> ApiError {
    ApiError::BadRequest("Missing or invalid input fields".into())
}

/// `POST /api/predict` — run one inference attempt and record it.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    // Validating: a body that fails to deserialize (wrong types, symptoms
    // not a sequence, malformed JSON) is the same client error as a
    // missing field.
    let Json(req) = payload.map_err(|_| invalid_input())?;
    let (Some(age), Some(gender), Some(symptoms)) = (req.age, req.gender, req.symptoms) else {
        return Err(invalid_input());
    };
    // Only a truly empty gender is a validation failure; a whitespace-only
    // value is present, flows to encoding, and soft-fails there.
    if gender.is_empty() {
        return Err(invalid_input());
    }

    // Encoding + Inferring: soft failures land in the disease field.
    let outcome = state.engine().predict(age, &gender, &symptoms);
    if !outcome.is_success() {
        tracing::debug!(reason = outcome.label(), "prediction degraded");
    }

    // Persisting: the only hard failure past validation.
    let record = PredictionRecord::new(
        age,
        gender,
        symptoms,
        outcome.label().to_string(),
        req.user_id,
    );
    {
        let conn = state.lock_db()?;
        insert_prediction(&conn, &record)?;
    }

    Ok(Json(PredictResponse {
        success: true,
        disease: record.disease,
    }))
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

/// `GET /api/predict?userId=…` — chronological history for one user.
///
/// An absent `userId` yields an empty list by convention, never an error.
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<PredictionRecord>>, ApiError> {
    let Some(user_id) = query.user_id else {
        return Ok(Json(Vec::new()));
    };
    let records = {
        let conn = state.lock_db()?;
        predictions_for_user(&conn, &user_id)?
    };
    Ok(Json(records))
}
