use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use steiny_core::gate::{check_gate, GateDecision};
use tracing::debug;

use crate::security::cookie::flag_present;

/// Redirects protected paths to the login page unless the auth cookie is present
pub async fn subscription_gate(request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let decision = check_gate(request.uri().path(), flag_present(&jar));

    match decision {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Redirect(location) => {
            debug!("Gate redirecting {} to {}", request.uri().path(), location);
            Redirect::to(location).into_response()
        }
    }
}
