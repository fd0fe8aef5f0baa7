use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue},
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::info;

use crate::app::App;

type SharedApp = Arc<App>;

const NEW_WINDOW_ICON_SVG: &str = include_str!("../assets/img/icon-new-window.svg");
const PREFERS_COLOR_SCHEME: HeaderName = HeaderName::from_static("sec-ch-prefers-color-scheme");
const ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");

#[derive(Debug, Deserialize)]
struct SearchForm {
    #[serde(default)]
    word: String,
}

#[derive(Debug, Deserialize)]
struct FontForm {
    font: String,
}

pub async fn serve(app: SharedApp, addr: SocketAddr) -> std::io::Result<()> {
    let router = build_router(app);
    info!(%addr, "Binding HTTP listener");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

pub fn build_router(app: SharedApp) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/search", post(search))
        .route("/theme", post(toggle_theme))
        .route("/font", post(set_font))
        .route("/assets/img/icon-new-window.svg", get(new_window_icon))
        .route("/healthz", get(health))
        .with_state(app)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Reads the `Sec-CH-Prefers-Color-Scheme` client hint, if the browser sent one.
fn prefers_dark(headers: &HeaderMap) -> Option<bool> {
    let value = headers.get(PREFERS_COLOR_SCHEME)?.to_str().ok()?;
    match value.trim().trim_matches('"') {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

fn page_response(app: &App) -> impl IntoResponse {
    (
        [
            (ACCEPT_CH, HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme")),
            (header::VARY, HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme")),
        ],
        Html(app.page()),
    )
}

async fn home(State(app): State<SharedApp>, headers: HeaderMap) -> impl IntoResponse {
    app.load_page(prefers_dark(&headers));
    page_response(&app)
}

async fn search(
    State(app): State<SharedApp>,
    headers: HeaderMap,
    Form(form): Form<SearchForm>,
) -> impl IntoResponse {
    app.init_theme(prefers_dark(&headers));
    let outcome = app.submit(&form.word).await;
    info!(word = %form.word, ?outcome, "search handled");
    page_response(&app)
}

async fn toggle_theme(State(app): State<SharedApp>, headers: HeaderMap) -> impl IntoResponse {
    app.init_theme(prefers_dark(&headers));
    app.toggle_theme();
    page_response(&app)
}

async fn set_font(
    State(app): State<SharedApp>,
    headers: HeaderMap,
    Form(form): Form<FontForm>,
) -> impl IntoResponse {
    app.init_theme(prefers_dark(&headers));
    app.set_font(form.font);
    page_response(&app)
}

async fn new_window_icon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], NEW_WINDOW_ICON_SVG)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "word-lookup" }))
}
