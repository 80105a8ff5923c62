use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers;
use crate::security::subscription_gate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.settings.server.body_limit_mb * 1024 * 1024;
    let timeout = Duration::from_secs(state.settings.server.request_timeout_secs);

    let pages = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/subscription", get(handlers::pages::subscription))
        .route("/subscription-login", get(handlers::pages::subscription_login))
        .route("/upload", get(handlers::pages::upload_page))
        .route("/robots.txt", get(handlers::seo::robots_txt))
        .route("/sitemap.xml", get(handlers::seo::sitemap_xml));

    let api = Router::new()
        .route("/api/subscription-auth", post(handlers::auth::subscription_auth))
        .route("/api/subscription-logout", post(handlers::auth::subscription_logout))
        .route("/api/upload", post(handlers::upload::upload_handler));

    let health = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check));

    Router::new()
        .merge(pages)
        .merge(api)
        .merge(health)
        .fallback(handlers::pages::not_found)
        .layer(middleware::from_fn(subscription_gate))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::test_support::RecordingStore;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, Response},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use steiny_storage::ObjectStore;
    use tower::ServiceExt;

    const BOUNDARY: &str = "steinyboundary";

    fn settings(password: Option<&str>) -> Settings {
        let mut settings = Settings::default();
        settings.gate.password = password.map(str::to_string);
        settings.site.base_url = "https://steiny.example".to_string();
        settings.site.media_base_url = "https://media.example.com".to_string();
        settings
    }

    fn app_with(settings: Settings, store: Option<Arc<dyn ObjectStore>>) -> Router {
        build_router(AppState::new(settings, store).unwrap())
    }

    fn app(password: Option<&str>) -> Router {
        app_with(settings(password), None)
    }

    async fn send(app: Router, request: Request<Body>) -> Response<Body> {
        app.oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn get_with_flag(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, "subscription-auth=authenticated")
            .body(Body::empty())
            .unwrap()
    }

    fn auth_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/subscription-auth")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn set_cookie(response: &Response<Body>) -> Option<String> {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    fn multipart(parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, file_name, data) in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match file_name {
                Some(file_name) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                ),
            }
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_gate_redirects_without_flag() {
        for path in ["/subscription", "/subscription/x"] {
            let response = send(app(Some("burger-time")), get(path)).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", path);
            assert_eq!(
                response.headers().get(header::LOCATION).unwrap(),
                "/subscription-login"
            );
        }
    }

    #[tokio::test]
    async fn test_gate_allows_with_flag() {
        let response = send(app(Some("burger-time")), get_with_flag("/subscription")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("$29/month billed annually"));
        assert!(body.contains("Online payment is not available"));

        // Passes the gate, then falls through to the 404 page
        let response = send(app(Some("burger-time")), get_with_flag("/subscription/x")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_page_is_not_gated() {
        let response = send(app(Some("burger-time")), get("/subscription-login")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("/api/subscription-auth"));
    }

    #[tokio::test]
    async fn test_subscription_page_embeds_buy_button() {
        let mut settings = settings(Some("burger-time"));
        settings.payment.buy_button_id = Some("buy_btn_123".to_string());
        settings.payment.publishable_key = Some("pk_live_abc".to_string());

        let response = send(app_with(settings, None), get_with_flag("/subscription")).await;
        let body = body_text(response).await;
        assert!(body.contains(r#"buy-button-id="buy_btn_123""#));
        assert!(body.contains(r#"publishable-key="pk_live_abc""#));
    }

    #[tokio::test]
    async fn test_auth_success_sets_cookie() {
        let response = send(app(Some("burger-time")), auth_request(r#"{"password":"burger-time"}"#)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = set_cookie(&response).unwrap();
        assert!(cookie.starts_with("subscription-auth=authenticated"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=86400"));

        assert_eq!(body_json(response).await["success"], true);
    }

    #[tokio::test]
    async fn test_auth_secure_cookie_in_production() {
        let mut settings = settings(Some("burger-time"));
        settings.site.production = true;
        let response = send(app_with(settings, None), auth_request(r#"{"password":"burger-time"}"#)).await;
        assert!(set_cookie(&response).unwrap().contains("Secure"));
    }

    #[tokio::test]
    async fn test_auth_wrong_password() {
        for body in [r#"{"password":"nope"}"#, r#"{"password":""}"#, "{}"] {
            let response = send(app(Some("burger-time")), auth_request(body)).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", body);
            assert!(set_cookie(&response).is_none());

            let json = body_json(response).await;
            assert_eq!(json["success"], false);
            assert_eq!(json["error"], "Invalid password");
        }
    }

    #[tokio::test]
    async fn test_auth_without_secret() {
        let response = send(app(None), auth_request(r#"{"password":"anything"}"#)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(set_cookie(&response).is_none());
        assert_eq!(body_json(response).await["error"], "Server configuration error");
    }

    #[tokio::test]
    async fn test_auth_invalid_body() {
        let response = send(app(Some("burger-time")), auth_request("not json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid request");
    }

    #[tokio::test]
    async fn test_logout_clears_flag() {
        for request in [
            Request::builder()
                .method("POST")
                .uri("/api/subscription-logout")
                .header(header::COOKIE, "subscription-auth=authenticated")
                .body(Body::empty())
                .unwrap(),
            Request::builder()
                .method("POST")
                .uri("/api/subscription-logout")
                .body(Body::empty())
                .unwrap(),
        ] {
            let response = send(app(Some("burger-time")), request).await;
            assert_eq!(response.status(), StatusCode::OK);
            let cookie = set_cookie(&response).unwrap();
            assert!(cookie.starts_with("subscription-auth=;"));
            assert!(cookie.contains("Max-Age=0"));
            assert_eq!(body_json(response).await["success"], true);
        }

        let response = send(app(Some("burger-time")), get("/subscription/x")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_upload_success() {
        let store = Arc::new(RecordingStore::default());
        let app = app_with(settings(None), Some(store.clone()));

        let response = send(
            app,
            multipart(&[
                ("file", Some("IMG_1.png"), b"\x89PNG-data"),
                ("category", None, b"sides"),
                ("fileName", None, b"fries"),
            ]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["key"], "steiny/sides/fries.png");
        assert_eq!(json["url"], "https://media.example.com/steiny/sides/fries.png");

        let puts = store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert_eq!(&puts[0].1[..], b"\x89PNG-data");
        assert_eq!(puts[0].2, "image/png");
    }

    #[tokio::test]
    async fn test_upload_empty_file_never_stores() {
        let store = Arc::new(RecordingStore::default());
        let app = app_with(settings(None), Some(store.clone()));

        let response = send(
            app,
            multipart(&[
                ("file", Some("empty.png"), b""),
                ("category", None, b"sides"),
                ("fileName", None, b"fries"),
            ]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "No file provided");
        assert_eq!(store.put_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_missing_fields() {
        let store = Arc::new(RecordingStore::default());
        let app = app_with(settings(None), Some(store.clone()));

        let response = send(app, multipart(&[("file", Some("a.png"), b"data")])).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Category and fileName are required"
        );
        assert_eq!(store.put_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_relative_path_never_stores() {
        let store = Arc::new(RecordingStore::default());

        for (category, file_name) in [
            (&b"sides/../../other-bucket"[..], &b"x"[..]),
            (&b"sides"[..], &b".."[..]),
        ] {
            let app = app_with(settings(None), Some(store.clone()));
            let response = send(
                app,
                multipart(&[
                    ("file", Some("a.png"), b"data"),
                    ("category", None, category),
                    ("fileName", None, file_name),
                ]),
            )
            .await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await["error"],
                "Category and fileName must not contain relative path segments"
            );
        }
        assert_eq!(store.put_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_over_body_limit() {
        let store = Arc::new(RecordingStore::default());
        let mut settings = settings(None);
        settings.server.body_limit_mb = 1;
        let app = app_with(settings, Some(store.clone()));

        let big = vec![0u8; 2 * 1024 * 1024];
        let response = send(
            app,
            multipart(&[
                ("category", None, b"sides"),
                ("fileName", None, b"fries"),
                ("file", Some("big.png"), big.as_slice()),
            ]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await["error"], "File too large");
        assert_eq!(store.put_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_without_storage_config() {
        let response = send(
            app(None),
            multipart(&[
                ("file", Some("a.png"), b"data"),
                ("category", None, b"sides"),
                ("fileName", None, b"fries"),
            ]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Server configuration error");
    }

    #[tokio::test]
    async fn test_upload_storage_failure() {
        let store: Arc<dyn ObjectStore> = Arc::new(RecordingStore::failing());
        let response = send(
            app_with(settings(None), Some(store)),
            multipart(&[
                ("file", Some("a.png"), b"data"),
                ("category", None, b"sides"),
                ("fileName", None, b"fries"),
            ]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Failed to upload file");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_multipart() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = send(app(None), request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid request");
    }

    #[tokio::test]
    async fn test_robots() {
        let response = send(app(None), get("/robots.txt")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("User-agent: *"));
        assert!(body.contains("Disallow: /api/"));
        assert!(body.contains("Disallow: /upload"));
        assert!(body.contains("Sitemap: https://steiny.example/sitemap.xml"));
    }

    #[tokio::test]
    async fn test_sitemap() {
        let response = send(app(None), get("/sitemap.xml")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<loc>https://steiny.example/</loc>"));
    }

    #[tokio::test]
    async fn test_home_defaults_to_first_tab() {
        let response = send(app(None), get("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Cheese Burger"));
        assert!(body.contains("https://media.example.com/steiny/images/burgers/cheese-burger.png"));
        assert!(!body.contains("Vanilla Milkshake"));

        let hero = body.find(r#"id="hero""#).unwrap();
        let about = body.find(r#"id="about""#).unwrap();
        let menu = body.find(r#"id="menu""#).unwrap();
        let location = body.find(r#"id="location""#).unwrap();
        let contact = body.find(r#"id="contact""#).unwrap();
        assert!(hero < about && about < menu && menu < location && location < contact);
    }

    #[tokio::test]
    async fn test_home_selected_tab() {
        let body = body_text(send(app(None), get("/?tab=shakes")).await).await;
        assert!(body.contains("Vanilla Milkshake"));
        assert!(body.contains("Oreo Milkshake"));
        assert!(!body.contains("Double Cheese Burger"));
    }

    #[tokio::test]
    async fn test_home_unknown_tab_renders_empty_panel() {
        let response = send(app(None), get("/?tab=desserts")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(!body.contains(r#"<article class="menu-item">"#));
        assert!(body.contains("/?tab=burgers#menu"));
    }

    #[tokio::test]
    async fn test_home_mobile_menu() {
        let body = body_text(send(app(None), get("/?menu=open")).await).await;
        assert!(body.contains(r#"aria-expanded="true""#));

        let body = body_text(send(app(None), get("/")).await).await;
        assert!(body.contains(r#"aria-expanded="false""#));
    }

    #[tokio::test]
    async fn test_suspended_site() {
        let mut settings = settings(None);
        settings.site.suspended = true;
        let response = send(app_with(settings, None), get("/")).await;
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
        assert!(body_text(response).await.contains("Service Temporarily Suspended"));
    }

    #[tokio::test]
    async fn test_upload_page_lists_slots() {
        let body = body_text(send(app(None), get("/upload")).await).await;
        assert!(body.contains(r#"data-category="images/burgers""#));
        assert!(body.contains(r#"data-file-name="cheese-burger""#));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let response = send(app(None), get("/nope")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_and_readiness() {
        let response = send(app(None), get("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");

        let response = send(app(None), get("/health/ready")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let store: Arc<dyn ObjectStore> = Arc::new(RecordingStore::default());
        let response = send(app_with(settings(None), Some(store)), get("/health/ready")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
