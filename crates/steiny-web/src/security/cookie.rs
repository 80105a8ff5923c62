use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use steiny_core::gate::{AuthFlag, AUTH_COOKIE_NAME, AUTH_TTL_HOURS};

/// Cookie carrying the flag. `secure` is set in production mode.
pub fn auth_cookie(flag: AuthFlag, secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, flag.cookie_value()))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::hours(AUTH_TTL_HOURS))
        .secure(secure)
        .build()
}

/// Expired cookie with the same name and path as the auth cookie
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((AUTH_COOKIE_NAME, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .build();
    cookie.make_removal();
    cookie
}

/// Clears the flag whether or not the request carried it
pub fn logout(jar: CookieJar) -> CookieJar {
    jar.add(removal_cookie())
}

pub fn flag_present(jar: &CookieJar) -> bool {
    AuthFlag::is_present(jar.get(AUTH_COOKIE_NAME).map(|c| c.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};

    #[test]
    fn test_auth_cookie_attributes() {
        let rendered = auth_cookie(AuthFlag, false).to_string();
        assert!(rendered.starts_with("subscription-auth=authenticated"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Strict"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Max-Age=86400"));
        assert!(!rendered.contains("Secure"));

        assert!(auth_cookie(AuthFlag, true).to_string().contains("Secure"));
    }

    #[test]
    fn test_removal_cookie_expires() {
        let rendered = removal_cookie().to_string();
        assert!(rendered.starts_with("subscription-auth="));
        assert!(rendered.contains("Max-Age=0"));
        assert!(rendered.contains("Path=/"));
    }

    #[test]
    fn test_flag_present_reads_jar() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("other=1; subscription-auth=authenticated"),
        );
        assert!(flag_present(&CookieJar::from_headers(&headers)));

        let mut forged = HeaderMap::new();
        forged.insert(header::COOKIE, HeaderValue::from_static("subscription-auth=yes"));
        assert!(!flag_present(&CookieJar::from_headers(&forged)));

        assert!(!flag_present(&CookieJar::new()));
    }

    #[test]
    fn test_logout_on_empty_jar_still_emits_removal() {
        let jar = logout(CookieJar::new());
        let cookie = jar.get(AUTH_COOKIE_NAME).map(|c| c.value().to_string());
        assert_eq!(cookie.as_deref(), Some(""));
    }
}
