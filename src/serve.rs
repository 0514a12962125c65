//! Purpose: Provide the HTTP/JSON directory server for curio.
//! Exports: `ServeConfig`, `serve`.
//! Role: Axum-based server implementing the directory REST contract.
//! Invariants: Mutations require a bearer token issued by `/user/login`.
//! Invariants: GET by id answers 200 with a literal `null` body for unknown
//! ids; mutations answer 404 envelopes. The asymmetry is part of the contract.
//! Invariants: Loopback-only unless explicitly allowed.

use axum::extract::{DefaultBodyLimit, Path as AxumPath, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::future::IntoFuture;
use std::net::{IpAddr, SocketAddr};
use tokio::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::api::{Error, ErrorKind, LocalDirectory};

#[derive(Clone, Debug)]
pub struct ServeConfig {
    pub bind: SocketAddr,
    pub allow_non_loopback: bool,
    pub max_body_bytes: u64,
    pub cors_origins: Vec<String>,
}

#[derive(Clone)]
struct AppState {
    directory: LocalDirectory,
}

pub async fn serve(config: ServeConfig) -> Result<(), Error> {
    validate_config(&config)?;

    init_tracing();

    let max_body_bytes: usize = config
        .max_body_bytes
        .try_into()
        .map_err(|_| Error::new(ErrorKind::Usage).with_message("--max-body-bytes is too large"))?;

    let state = AppState {
        directory: LocalDirectory::seeded()?,
    };

    let mut app = Router::new()
        .route("/healthz", get(healthz))
        .route("/user/login", axum::routing::post(login))
        .route("/category", get(list_categories).post(create_category))
        .route(
            "/category/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/recipe", get(list_recipes).post(create_recipe))
        .route(
            "/recipe/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/destination", get(list_destinations).post(create_destination))
        .route(
            "/destination/:id",
            get(get_destination)
                .put(update_destination)
                .delete(delete_destination),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if !config.cors_origins.is_empty() {
        app = app.layer(cors_layer(&config.cors_origins)?);
    }

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to bind server")
                .with_source(err)
        })?;
    tracing::info!(bind = %config.bind, "directory server listening");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            result.map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message("server failed")
                    .with_source(err)
            })?;
        }
        _ = shutdown_signal() => {
            let _ = shutdown_tx.send(());
            match tokio::time::timeout(Duration::from_secs(10), &mut server).await {
                Ok(result) => result.map_err(|err| {
                    Error::new(ErrorKind::Io)
                        .with_message("server failed")
                        .with_source(err)
                })?,
                Err(_) => {
                    return Err(Error::new(ErrorKind::Io).with_message("server shutdown timed out"));
                }
            }
        }
    };
    Ok(())
}

fn is_loopback(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(addr) => addr.is_loopback(),
        IpAddr::V6(addr) => addr.is_loopback(),
    }
}

fn validate_config(config: &ServeConfig) -> Result<(), Error> {
    if !is_loopback(config.bind.ip()) && !config.allow_non_loopback {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("non-loopback bind requires explicit opt-in")
            .with_hint("Re-run with --allow-non-loopback or use a loopback address."));
    }

    if config.max_body_bytes == 0 {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("--max-body-bytes must be greater than zero")
            .with_hint("Use a positive value like 1048576."));
    }

    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, Error> {
    let mut allowed = Vec::with_capacity(origins.len());
    for origin in origins {
        let value = HeaderValue::from_str(origin).map_err(|_| {
            Error::new(ErrorKind::Usage)
                .with_message(format!("invalid CORS origin: {origin}"))
        })?;
        allowed.push(value);
    }
    Ok(CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        let mut signal = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("install SIGTERM handler");
        signal.recv().await;
    };
    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    #[cfg(not(unix))]
    ctrl_c.await;
}

fn authorize(headers: &HeaderMap, state: &AppState) -> Result<(), Error> {
    let Some(value) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Err(Error::new(ErrorKind::Permission).with_message("missing bearer token"));
    };
    let value = value.to_str().unwrap_or_default();
    let token = value.strip_prefix("Bearer ").unwrap_or_default();
    if token.is_empty() || !state.directory.is_session(token) {
        return Err(Error::new(ErrorKind::Permission).with_message("invalid bearer token"));
    }
    Ok(())
}

async fn healthz() -> Response {
    Json(json!({ "ok": true })).into_response()
}

async fn login(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    let email = payload.get("email").and_then(Value::as_str).unwrap_or_default();
    let password = payload
        .get("password")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return error_response(
            Error::new(ErrorKind::Invalid).with_message("Invalid Login Data!"),
        );
    }
    match state.directory.login(email, password) {
        Ok(token) => Json(json!({ "email": email, "accessToken": token })).into_response(),
        Err(err) => error_response(err),
    }
}

// Collection GETs return the raw entity array; by-id GETs return the entity
// or a literal `null` body.

async fn list_categories(State(state): State<AppState>) -> Response {
    Json(Value::Array(state.directory.categories())).into_response()
}

async fn get_category(State(state): State<AppState>, AxumPath(id): AxumPath<String>) -> Response {
    entity_or_null(state.directory.category(&id))
}

async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(err) = authorize(&headers, &state) {
        return error_response(err);
    }
    match state.directory.create_category(&payload) {
        Ok(created) => Json(created).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(err) = authorize(&headers, &state) {
        return error_response(err);
    }
    match state.directory.update_category(&id, &payload) {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
) -> Response {
    if let Err(err) = authorize(&headers, &state) {
        return error_response(err);
    }
    match state.directory.delete_category(&id) {
        Ok(deleted) => Json(deleted).into_response(),
        Err(err) => error_response(err),
    }
}

async fn list_recipes(State(state): State<AppState>) -> Response {
    Json(Value::Array(state.directory.recipes())).into_response()
}

async fn get_recipe(State(state): State<AppState>, AxumPath(id): AxumPath<String>) -> Response {
    entity_or_null(state.directory.recipe(&id))
}

async fn create_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(err) = authorize(&headers, &state) {
        return error_response(err);
    }
    match state.directory.create_recipe(&payload) {
        Ok(created) => Json(created).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(err) = authorize(&headers, &state) {
        return error_response(err);
    }
    match state.directory.update_recipe(&id, &payload) {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
) -> Response {
    if let Err(err) = authorize(&headers, &state) {
        return error_response(err);
    }
    match state.directory.delete_recipe(&id) {
        Ok(deleted) => Json(deleted).into_response(),
        Err(err) => error_response(err),
    }
}

async fn list_destinations(State(state): State<AppState>) -> Response {
    Json(Value::Array(state.directory.destinations())).into_response()
}

async fn get_destination(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Response {
    entity_or_null(state.directory.destination(&id))
}

async fn create_destination(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(err) = authorize(&headers, &state) {
        return error_response(err);
    }
    match state.directory.create_destination(&payload) {
        Ok(created) => Json(created).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_destination(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(err) = authorize(&headers, &state) {
        return error_response(err);
    }
    match state.directory.update_destination(&id, &payload) {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_destination(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(id): AxumPath<String>,
) -> Response {
    if let Err(err) = authorize(&headers, &state) {
        return error_response(err);
    }
    match state.directory.delete_destination(&id) {
        Ok(deleted) => Json(deleted).into_response(),
        Err(err) => error_response(err),
    }
}

fn entity_or_null(entity: Option<Value>) -> Response {
    match entity {
        Some(entity) => Json(entity).into_response(),
        None => Json(Value::Null).into_response(),
    }
}

fn error_response(err: Error) -> Response {
    let status = match err.kind() {
        ErrorKind::Usage | ErrorKind::Invalid => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Permission => StatusCode::UNAUTHORIZED,
        ErrorKind::Io | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = json!({ "error": err.message().unwrap_or("error") });
    (status, Json(body)).into_response()
}
