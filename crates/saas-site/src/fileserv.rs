//! Static file fallback
//!
//! Paths not claimed by a Leptos route are looked up under the site root
//! (`/pkg` bundle, favicon, copied assets). Misses render the app, whose
//! router fallback marks the response 404.

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::IntoResponse,
};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::App;

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response<Body> {
    let response = get_static_file(uri, &options.site_root).await;

    if response.status() == StatusCode::OK {
        response
    } else {
        let handler = leptos_axum::render_app_to_stream(options.clone(), App);
        handler(req).await.into_response()
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Response<Body> {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = uri;

    // ServeDir reports I/O failures as responses; its error type is Infallible.
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(never) => match never {},
    }
}
