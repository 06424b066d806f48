use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feed::{QuakeFeed, USGS_ALL_WEEK_URL};
use overlay::{legend_value, overlay_value, style_quakes, MapConfig, GEOJSON_CONTENT_TYPE};
use symbology::legend_rows;

/// Upper bound on the upstream feed body; the all-week feed runs to a few MB.
const MAX_FEED_BYTES: usize = 8 * 1024 * 1024;

#[derive(Clone)]
struct AppState {
    config: Arc<MapConfig>,
    feed_url: String,
    http: reqwest::Client,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let feed_url = env::var("QUAKE_FEED_URL").unwrap_or_else(|_| USGS_ALL_WEEK_URL.to_string());
    let addr: SocketAddr = env::var("QUAKE_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:9200".to_string())
        .parse()
        .expect("invalid QUAKE_ADDR");

    let state = AppState {
        config: Arc::new(MapConfig::default()),
        feed_url,
        http: reqwest::Client::new(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    let app = Router::new()
        .route("/", get(index_html))
        .route("/app.js", get(app_js))
        .route("/style.css", get(style_css))
        .route("/healthz", get(healthz))
        .route("/api/config", get(get_config))
        .route("/api/legend", get(get_legend))
        .route("/api/earthquakes", get(get_earthquakes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    info!("quake server listening on http://{addr}");
    info!("feed url: {}", state.feed_url);
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

async fn get_config(State(state): State<AppState>) -> Json<MapConfig> {
    Json(state.config.as_ref().clone())
}

// Rows are derived fresh per request; nothing here is cached.
async fn get_legend() -> Json<Value> {
    Json(legend_value(&legend_rows()))
}

async fn get_earthquakes(
    State(state): State<AppState>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let text = fetch_feed_text(&state).await?;
    let feed = QuakeFeed::from_geojson_str(&text)
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, format!("Feed parse failed: {e}")))?;

    if let Some(meta) = &feed.metadata {
        info!("feed \"{}\": {} events", meta.title, meta.count);
    }

    let body = overlay_value(&style_quakes(&feed.quakes)).to_string();
    Ok(ok_with_content_type(Body::from(body), GEOJSON_CONTENT_TYPE))
}

async fn index_html() -> Response {
    ok_with_content_type(
        Body::from(include_str!("../assets/index.html")),
        "text/html; charset=utf-8",
    )
}

async fn app_js() -> Response {
    ok_with_content_type(
        Body::from(include_str!("../assets/app.js")),
        "text/javascript; charset=utf-8",
    )
}

async fn style_css() -> Response {
    ok_with_content_type(
        Body::from(include_str!("../assets/style.css")),
        "text/css; charset=utf-8",
    )
}

async fn fetch_feed_text(state: &AppState) -> Result<String, (StatusCode, Json<Value>)> {
    let resp = state
        .http
        .get(&state.feed_url)
        .send()
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, format!("Feed fetch failed: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(api_error(
            StatusCode::BAD_GATEWAY,
            format!("Upstream HTTP {}", status.as_u16()),
        ));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, format!("Feed read failed: {e}")))?;

    if bytes.len() > MAX_FEED_BYTES {
        return Err(api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Feed payload too large (max {MAX_FEED_BYTES} bytes)"),
        ));
    }

    String::from_utf8(bytes.to_vec()).map_err(|_| {
        api_error(
            StatusCode::BAD_GATEWAY,
            "Upstream response was not valid UTF-8",
        )
    })
}

fn api_error(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message.into() })))
}

fn ok_with_content_type(body: Body, content_type: &'static str) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        http::header::CONTENT_TYPE,
        HeaderValue::from_static(content_type),
    );
    (StatusCode::OK, headers, body).into_response()
}
