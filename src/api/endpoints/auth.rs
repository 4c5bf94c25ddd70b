//! Signup and login endpoints.
//!
//! Passwords are stored salted and hashed, never plaintext. On success both
//! endpoints hand back an opaque bearer token for the frontend; the
//! prediction endpoints do not validate it — they trust the `userId`
//! reference attached to each request.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::generate_token;
use crate::crypto::{hash_password, verify_password};
use crate::db::repository::{find_user_by_email, insert_user};
use crate::models::{User, UserPublic};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: UserPublic,
    pub token: String,
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

/// `POST /api/signup` — create an account.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (Some(name), Some(email), Some(password)) = (
        required(req.name),
        required(req.email),
        required(req.password),
    ) else {
        return Err(ApiError::BadRequest("All fields are required".into()));
    };

    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
        password_hash: hash_password(&password),
        created_at: Utc::now(),
    };

    {
        let conn = state.lock_db()?;
        if find_user_by_email(&conn, &user.email)?.is_some() {
            return Err(ApiError::Conflict("User already exists".into()));
        }
        if let Err(e) = insert_user(&conn, &user) {
            return Err(if e.is_unique_violation() {
                ApiError::Conflict("User already exists".into())
            } else {
                e.into()
            });
        }
    }

    tracing::info!(user_id = %user.id, "user signed up");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "Signup successful".into(),
            user: UserPublic::from(&user),
            token: generate_token(),
        }),
    ))
}

/// `POST /api/login` — verify credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (Some(email), Some(password)) = (required(req.email), required(req.password)) else {
        return Err(ApiError::BadRequest("Email and password required".into()));
    };

    let user = {
        let conn = state.lock_db()?;
        find_user_by_email(&conn, &email)?
    };

    let Some(user) = user.filter(|u| verify_password(&password, &u.password_hash)) else {
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    };

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".into(),
        user: UserPublic::from(&user),
        token: generate_token(),
    }))
}
