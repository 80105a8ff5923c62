use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use serde::Serialize;

use crate::config::Settings;
use crate::utils::error::ApiError;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub fn robots_body(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\nDisallow: /upload\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

pub async fn robots_txt(State(settings): State<Arc<Settings>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_body(&settings.site.base_url),
    )
}

#[derive(Serialize)]
#[serde(rename = "urlset")]
struct UrlSet {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    url: Vec<UrlEntry>,
}

#[derive(Serialize)]
struct UrlEntry {
    loc: String,
    changefreq: &'static str,
    priority: &'static str,
}

pub fn sitemap_body(base_url: &str) -> Result<String, ApiError> {
    let set = UrlSet {
        xmlns: SITEMAP_NS,
        url: vec![UrlEntry {
            loc: format!("{}/", base_url.trim_end_matches('/')),
            changefreq: "weekly",
            priority: "1.0",
        }],
    };
    let xml = quick_xml::se::to_string(&set)
        .map_err(|e| ApiError::Internal(format!("Failed to encode sitemap: {}", e)))?;
    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", xml))
}

pub async fn sitemap_xml(
    State(settings): State<Arc<Settings>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = sitemap_body(&settings.site.base_url)?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], body))
}
