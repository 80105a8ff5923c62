//! Shared-secret gate in front of the subscription pages.
//!
//! This is a single plaintext comparison against one configured secret.
//! The result is carried as a boolean cookie. There are no sessions,
//! counters or revocation.

use tracing::{debug, warn};

use crate::error::GateError;

pub const AUTH_COOKIE_NAME: &str = "subscription-auth";
pub const AUTH_COOKIE_VALUE: &str = "authenticated";
pub const AUTH_TTL_HOURS: i64 = 24;

pub const PROTECTED_PREFIX: &str = "/subscription";
pub const LOGIN_PATH: &str = "/subscription-login";

/// Proof of a successful password check, to be stored client-side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthFlag;

impl AuthFlag {
    pub fn cookie_value(&self) -> &'static str {
        AUTH_COOKIE_VALUE
    }

    /// Whether a cookie value read back from a request carries the flag
    pub fn is_present(cookie_value: Option<&str>) -> bool {
        cookie_value == Some(AUTH_COOKIE_VALUE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

#[derive(Debug, Clone)]
pub struct SubscriptionGate {
    secret: Option<String>,
}

impl SubscriptionGate {
    /// An empty secret counts as unset.
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    pub fn authenticate(&self, password: &str) -> Result<AuthFlag, GateError> {
        let secret = self.secret.as_deref().ok_or_else(|| {
            warn!("Subscription password is not configured");
            GateError::NotConfigured
        })?;

        if password == secret {
            debug!("Subscription password accepted");
            Ok(AuthFlag)
        } else {
            debug!("Subscription password rejected");
            Err(GateError::InvalidPassword)
        }
    }
}

/// `/subscription` and anything below it. `/subscription-login` is not.
pub fn is_protected(path: &str) -> bool {
    match path.strip_prefix(PROTECTED_PREFIX) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn check_gate(path: &str, flag_present: bool) -> GateDecision {
    if is_protected(path) && !flag_present {
        GateDecision::Redirect(LOGIN_PATH)
    } else {
        GateDecision::Allow
    }
}
