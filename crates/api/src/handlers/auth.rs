//! Handlers for the `/auth` resource (user login, admin login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use kdmip_core::credentials::{CredentialGate, GateState};
use kdmip_events::{event_types, PortalEvent};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct UserLoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /auth/admin/login`.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub subject: String,
    pub role: &'static str,
    /// Outcome of this request's own submission.
    pub gate: GateState,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// User gate. Blank fields are 400; a mismatched pair is 401 with the
/// guidance message.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<UserLoginRequest>,
) -> AppResult<Json<DataResponse<SessionResponse>>> {
    open_session(&state, &state.gates.user, &input.email, &input.password).await
}

/// POST /api/v1/auth/admin/login
pub async fn admin_login(
    State(state): State<AppState>,
    Json(input): Json<AdminLoginRequest>,
) -> AppResult<Json<DataResponse<SessionResponse>>> {
    open_session(&state, &state.gates.admin, &input.username, &input.password).await
}

/// POST /api/v1/auth/logout
///
/// Tokens are stateless and simply expire. The client drops its token and
/// returns its modal to idle; nothing server-side is shared between sessions.
pub async fn logout(auth: AuthUser) -> StatusCode {
    tracing::info!(subject = %auth.subject, role = %auth.role, "User logged out");
    StatusCode::NO_CONTENT
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn open_session(
    state: &AppState,
    gate: &CredentialGate,
    identity: &str,
    secret: &str,
) -> AppResult<Json<DataResponse<SessionResponse>>> {
    let outcome = gate.submit(identity, secret).await?;
    let gate_state = outcome.state.clone();
    let grant = match outcome.into_grant() {
        Ok(grant) => grant,
        Err(e) => {
            tracing::warn!(gate = ?gate.kind(), "Login rejected");
            state.event_bus.publish(
                PortalEvent::new(event_types::LOGIN_FAILED)
                    .with_payload(serde_json::json!({ "gate": gate.kind() })),
            );
            return Err(e.into());
        }
    };

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(&grant.subject, grant.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    state.event_bus.publish(
        PortalEvent::new(event_types::LOGIN_SUCCEEDED)
            .with_actor(grant.subject.clone())
            .with_payload(serde_json::json!({ "gate": gate.kind(), "role": grant.role })),
    );
    tracing::info!(subject = %grant.subject, role = grant.role, "Login succeeded");

    Ok(Json(DataResponse {
        data: SessionResponse {
            access_token,
            token_type: "Bearer",
            expires_in: jwt.access_token_expiry_mins * 60,
            subject: grant.subject,
            role: grant.role,
            gate: gate_state,
        },
    }))
}
