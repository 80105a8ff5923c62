use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use steiny_core::{
    media::{MediaSlot, MEDIA_SLOTS},
    page::HomePage,
    Catalog, SiteInfo, ViewState,
};
use tracing::debug;

use crate::config::Settings;
use crate::services::PageRenderer;
use crate::utils::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub tab: Option<String>,
    /// `open` renders the mobile navigation expanded
    pub menu: Option<String>,
}

impl HomeQuery {
    fn view_state(&self) -> ViewState {
        let mut view = ViewState::default();
        if let Some(tab) = &self.tab {
            view.select_tab(tab.as_str());
        }
        if self.menu.as_deref() == Some("open") {
            view.toggle_menu();
        }
        view
    }
}

pub async fn home(
    State(settings): State<Arc<Settings>>,
    State(renderer): State<Arc<PageRenderer>>,
    Query(query): Query<HomeQuery>,
) -> Result<Response, ApiError> {
    let site = SiteInfo::steiny();

    if settings.site.suspended {
        debug!("Serving suspension notice");
        let page = renderer.render(
            "suspended",
            &json!({ "title": "Service Temporarily Suspended", "site_name": site.name }),
        )?;
        return Ok((StatusCode::PAYMENT_REQUIRED, page).into_response());
    }

    let page = HomePage::compose(
        Catalog::standard(),
        site,
        &query.view_state(),
        &settings.site.media_base_url,
    );
    Ok(renderer.render("home", &page)?.into_response())
}

pub async fn subscription_login(
    State(renderer): State<Arc<PageRenderer>>,
) -> Result<Html<String>, ApiError> {
    renderer.render(
        "subscription_login",
        &json!({ "title": "Subscription Login" }),
    )
}

#[derive(Serialize)]
struct BuyButton<'a> {
    buy_button_id: &'a str,
    publishable_key: &'a str,
}

#[derive(Serialize)]
struct SubscriptionPage<'a> {
    title: &'static str,
    site_name: &'static str,
    price: &'static str,
    payment: Option<BuyButton<'a>>,
}

pub async fn subscription(
    State(settings): State<Arc<Settings>>,
    State(renderer): State<Arc<PageRenderer>>,
) -> Result<Html<String>, ApiError> {
    let site = SiteInfo::steiny();
    let payment = &settings.payment;

    let button = match (payment.buy_button_id.as_deref(), payment.publishable_key.as_deref()) {
        (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => Some(BuyButton {
            buy_button_id: id,
            publishable_key: key,
        }),
        _ => None,
    };

    renderer.render(
        "subscription",
        &SubscriptionPage {
            title: "Subscription",
            site_name: site.name,
            price: site.subscription_price,
            payment: button,
        },
    )
}

#[derive(Serialize)]
struct UploadPage {
    title: &'static str,
    slots: &'static [MediaSlot],
}

pub async fn upload_page(
    State(renderer): State<Arc<PageRenderer>>,
) -> Result<Html<String>, ApiError> {
    renderer.render(
        "upload",
        &UploadPage {
            title: "Media Upload",
            slots: MEDIA_SLOTS,
        },
    )
}

pub async fn not_found(State(renderer): State<Arc<PageRenderer>>) -> Response {
    match renderer.render(
        "not_found",
        &json!({ "title": "Page Not Found", "site_name": SiteInfo::steiny().name }),
    ) {
        Ok(page) => (StatusCode::NOT_FOUND, page).into_response(),
        Err(e) => e.into_response(),
    }
}
