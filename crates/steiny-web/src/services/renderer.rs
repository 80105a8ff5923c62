use axum::response::Html;
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;

use crate::utils::error::ApiError;

const PARTIALS: &[(&str, &str)] = &[
    ("head", include_str!("../../templates/head.hbs")),
    ("foot", include_str!("../../templates/foot.hbs")),
];

const PAGES: &[(&str, &str)] = &[
    ("home", include_str!("../../templates/home.hbs")),
    ("suspended", include_str!("../../templates/suspended.hbs")),
    ("subscription_login", include_str!("../../templates/subscription_login.hbs")),
    ("subscription", include_str!("../../templates/subscription.hbs")),
    ("upload", include_str!("../../templates/upload.hbs")),
    ("not_found", include_str!("../../templates/not_found.hbs")),
];

/// Handlebars registry with every page compiled in
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in PAGES {
            registry.register_template_string(name, *source)?;
        }
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, page: &str, data: &T) -> Result<Html<String>, ApiError> {
        self.registry
            .render(page, data)
            .map(Html)
            .map_err(|e| ApiError::Internal(format!("Failed to render {}: {}", page, e)))
    }
}
