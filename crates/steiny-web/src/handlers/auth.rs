use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use steiny_core::SubscriptionGate;
use tracing::info;

use crate::config::Settings;
use crate::security::cookie::{auth_cookie, logout};
use crate::utils::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
}

pub async fn subscription_auth(
    State(gate): State<Arc<SubscriptionGate>>,
    State(settings): State<Arc<Settings>>,
    jar: CookieJar,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!("Rejected auth body: {}", e);
        ApiError::BadRequest("Invalid request".to_string())
    })?;

    let flag = gate.authenticate(&request.password)?;
    info!("Subscription login succeeded");

    Ok((
        jar.add(auth_cookie(flag, settings.site.production)),
        Json(AuthResponse { success: true }),
    ))
}

pub async fn subscription_logout(jar: CookieJar) -> (CookieJar, Json<AuthResponse>) {
    info!("Subscription logout");
    (logout(jar), Json(AuthResponse { success: true }))
}
