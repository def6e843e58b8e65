//! Authentication route handlers.
//!
//! One shared password gates the whole admin; a successful login marks the
//! session and every other route checks that mark via `RequireAdminAuth`.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::auth::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::verify_admin_password;
use crate::state::AppState;

/// Login request body.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Log in with the shared admin password.
#[instrument(skip(state, session, req))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> Result<StatusCode> {
    verify_admin_password(&state.config().admin_password_hash, &req.password).await?;

    let admin = CurrentAdmin {
        logged_in_at: Utc::now(),
    };
    set_current_admin(&session, &admin).await?;
    tracing::info!("Admin logged in");

    Ok(StatusCode::NO_CONTENT)
}

/// Log out the current session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_admin(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}
