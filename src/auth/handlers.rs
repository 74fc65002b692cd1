use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};

use crate::auth::{
    dto::{LoginRequest, LoginResponse, SignupRequest, StatusMessage, UserSummary},
    errors::AuthError,
    password::{hash_password, verify_password},
    repo_types::NewUser,
    services::is_valid_email,
};
use crate::state::AppState;

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<StatusMessage>, AuthError> {
    let username = payload.username.trim();
    let role = payload.role.trim();
    let email = payload.email.trim().to_lowercase();

    if username.is_empty() || email.is_empty() || payload.password.trim().is_empty() || role.is_empty()
    {
        warn!("signup with missing fields");
        return Err(AuthError::Validation("All fields are required."));
    }

    if !is_valid_email(&email) {
        warn!(email = %email, "signup with invalid email");
        return Err(AuthError::Validation("Invalid email address."));
    }

    // Friendlier conflict message for the common case; the unique constraint
    // on users.email is what guarantees uniqueness under concurrent signups.
    if state.store.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(AuthError::DuplicateEmail);
    }

    let password_hash = hash_password(&payload.password)?;

    let user = state
        .store
        .insert(&NewUser {
            username: username.to_string(),
            email,
            password_hash,
            role: role.to_string(),
        })
        .await?;

    info!(user_id = %user.user_id, email = %user.email, "user signed up");
    Ok(Json(StatusMessage::success("Signup successful!")))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let email = payload.email.trim().to_lowercase();

    if email.is_empty() || payload.password.trim().is_empty() {
        warn!("login with missing fields");
        return Err(AuthError::Validation("Email and password are required."));
    }

    let user = match state.store.find_by_email(&email).await? {
        Some(user) => user,
        None => {
            // Deliberately distinct from the wrong-password message.
            warn!(email = %email, "login unknown email");
            return Err(AuthError::UserNotFound);
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.user_id, "login invalid password");
        return Err(AuthError::InvalidCredentials);
    }

    info!(user_id = %user.user_id, "user logged in");
    Ok(Json(LoginResponse {
        status: "success",
        message: "Login successful!",
        user: UserSummary {
            user_id: user.user_id,
            username: user.username,
            role: user.role,
        },
    }))
}

/// Fallback for non-POST methods on the auth routes.
pub async fn invalid_method() -> (StatusCode, Json<StatusMessage>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(StatusMessage::error("Invalid request method.")),
    )
}
