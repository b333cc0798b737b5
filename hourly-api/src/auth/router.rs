use axum::{
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    adapters::inbound::http::{IdentityResponse, MessageResponse},
    app_state::AppState,
    routes::ApiError,
};

use super::{backend::Credentials, AuthSession, AuthUser};

/// Routes reachable without a session (`/login`) plus the session-bound
/// `/logout` and `/me`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

#[instrument(name = "POST /login", skip(auth_session))]
async fn login(
    mut auth_session: AuthSession,
    Json(creds): Json<Credentials>,
) -> Result<Json<IdentityResponse>, ApiError> {
    let identity = match auth_session.authenticate(creds).await {
        Ok(Some(identity)) => identity,
        Ok(None) => return Err(ApiError::unauthorized("Invalid credentials")),
        Err(e) => {
            tracing::error!("Authentication failed: {}", e);
            return Err(ApiError::internal("authentication failed"));
        }
    };

    if let Err(e) = auth_session.login(&identity).await {
        tracing::error!("Failed to log in {}: {}", identity.key(), e);
        return Err(ApiError::internal("failed to start session"));
    }

    tracing::info!(role = %identity.role, id = identity.id, "logged in");
    Ok(Json(identity.into()))
}

#[instrument(name = "POST /logout", skip(auth_session))]
async fn logout(mut auth_session: AuthSession) -> Result<Json<MessageResponse>, ApiError> {
    match auth_session.logout().await {
        Ok(_) => Ok(Json(MessageResponse::new("Logged out"))),
        Err(e) => {
            tracing::error!("Failed to log out: {}", e);
            Err(ApiError::internal("failed to end session"))
        }
    }
}

#[instrument(name = "GET /me")]
async fn me(user: AuthUser) -> Json<IdentityResponse> {
    Json(user.into_identity().into())
}
