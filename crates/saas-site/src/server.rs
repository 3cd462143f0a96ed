//! HTTP router for the SSR server

use axum::Router;
use leptos::LeptosOptions;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::fileserv::file_and_error_handler;

/// Leptos routes for the app; everything else goes to the static file
/// fallback.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::path::Path;
    use tower::ServiceExt;

    fn site_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("pkg")).unwrap();
        std::fs::write(dir.path().join("pkg/saas-site.css"), "body{margin:0}").unwrap();
        std::fs::write(dir.path().join("favicon.svg"), "<svg/>").unwrap();
        dir
    }

    fn options(root: &Path) -> LeptosOptions {
        LeptosOptions::builder()
            .output_name("saas-site")
            .site_root(root.to_string_lossy().into_owned())
            .build()
    }

    async fn get(root: &Path, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = router(options(root))
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_landing_page_renders() {
        let root = site_root();
        let (status, content_type, body) = get(root.path(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("Everything You Need"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let root = site_root();
        let (status, _, body) = get(root.path(), "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_pkg_bundle_is_served_from_site_root() {
        let root = site_root();
        let (status, content_type, body) = get(root.path(), "/pkg/saas-site.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/css"));
        assert_eq!(body, "body{margin:0}");
    }

    #[tokio::test]
    async fn test_favicon_is_served_from_site_root() {
        let root = site_root();
        let (status, _, body) = get(root.path(), "/favicon.svg").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<svg/>");
    }
}
