use axum::{body::Body, extract::State, http::Request, middleware::Next, response::{IntoResponse, Redirect, Response}};
use std::sync::Arc;
use tracing::debug;
use crate::service::settings_service::SettingsService;

pub const MAINTENANCE_PATH: &str = "/maintenance";

const EXEMPT_PREFIXES: [&str; 6] = ["/admin", "/api", "/_next", "/static", "/assets", "/images"];

fn has_prefix_segment(path: &str, prefix: &str) -> bool {
    path == prefix || path.starts_with(&format!("{}/", prefix))
}

/// Paths that keep working while the site is in maintenance
pub fn is_exempt(path: &str) -> bool {
    if has_prefix_segment(path, MAINTENANCE_PATH) || path == "/favicon.ico" || path == "/health" {
        return true;
    }
    if EXEMPT_PREFIXES.iter().any(|prefix| has_prefix_segment(path, prefix)) {
        return true;
    }
    // Files such as /robots.txt or /logo.png
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

pub async fn maintenance_redirect(
    State(settings): State<Arc<dyn SettingsService>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if !is_exempt(path) && settings.maintenance_enabled().await {
        debug!("Maintenance mode on, redirecting {}", path);
        return Redirect::temporary(MAINTENANCE_PATH).into_response();
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_pages_are_not_exempt() {
        for path in ["/", "/projects", "/projects/solar-farm", "/administrator", "/apis"] {
            assert!(!is_exempt(path), "{} should redirect", path);
        }
    }

    #[test]
    fn test_admin_api_assets_are_exempt() {
        for path in [
            "/admin",
            "/admin/products",
            "/api/projects",
            "/_next/static/chunk.js",
            "/static/app.css",
            "/assets/font",
            "/images/hero",
            "/favicon.ico",
            "/robots.txt",
            "/maintenance",
        ] {
            assert!(is_exempt(path), "{} should pass through", path);
        }
    }
}
