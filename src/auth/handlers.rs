use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, MessageResponse, RegisterRequest},
        password,
        repo::User,
    },
    error::{ApiError, StoreError},
    state::AppState,
};

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "register body rejected");
        ApiError::BadRequest("Invalid request")
    })?;

    let hash = password::hash_password(&payload.password)
        .map_err(|e| ApiError::internal("Failed to hash password", e))?;

    if let Err(e) = User::create(&state.db, &payload.username, &hash).await {
        // Every insert failure maps to the same conflict answer; the log
        // keeps the real kind.
        match &e {
            StoreError::UniqueViolation => {
                warn!(username = %payload.username, "username already taken")
            }
            other => error!(error = %other, username = %payload.username, "user insert failed"),
        }
        return Err(ApiError::UserExists);
    }

    info!(username = %payload.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "login body rejected");
        ApiError::BadRequest("Invalid request")
    })?;

    // An unknown username and a wrong password answer identically so
    // usernames cannot be enumerated.
    let user = match User::find_by_username(&state.db, &payload.username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(username = %payload.username, "login unknown username");
            return Err(ApiError::InvalidCredentials);
        }
        Err(e) => return Err(ApiError::internal("Database error", e)),
    };

    let ok = password::verify_password(&payload.password, &user.password_hash)
        .map_err(|e| ApiError::internal("Failed to verify password", e))?;

    if !ok {
        warn!(username = %payload.username, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    info!(username = %payload.username, "user logged in");
    Ok(Json(MessageResponse {
        message: "Login successful".into(),
    }))
}
