//! HTTP endpoint serving the telemetry of one scrape per request.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::exporter::Exporter;
use crate::exposition;

#[derive(Clone)]
struct AppState {
    exporter: Arc<Exporter>,
    telemetry_path: Arc<str>,
}

/// Builds the router exposing `telemetry_path` and a landing page at `/`.
pub fn router(exporter: Arc<Exporter>, telemetry_path: &str) -> Router {
    let state = AppState {
        exporter,
        telemetry_path: Arc::from(telemetry_path),
    };

    Router::new()
        .route("/", get(landing_page))
        .route(telemetry_path, get(telemetry))
        .with_state(state)
}

async fn telemetry(State(state): State<AppState>) -> Response {
    let observations = state.exporter.collect().await;

    match exposition::render(state.exporter.descs(), &observations) {
        Ok(body) => {
            tracing::debug!("Rendered {} samples", observations.len());
            ([(header::CONTENT_TYPE, exposition::CONTENT_TYPE)], body).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to render metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn landing_page(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>\
         <head><title>Nature Remo Exporter</title></head>\
         <body><h1>Nature Remo Exporter</h1>\
         <p><a href=\"{}\">Metrics</a></p></body>\
         </html>",
        state.telemetry_path
    ))
}
