use crate::api::api_error::APIError;
use crate::api::bearer::Authenticated;
use crate::api::model::{
    valid_hostname, valid_ipv4, AddHostRequest, AddHostResult, DeleteHostRequest,
    DeleteHostResult, ListHostsResult, LoginRequest, LoginResult,
};
use crate::api::server::AppState;
use crate::auth::UserList;
use crate::error::Error;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

const LIST_FAILED: &str = "Failed to list hosts";
const ADD_FAILED: &str = "Failed to add host";
const RELOAD_FAILED: &str = "Host added, but failed to reload dns";
const DELETE_FAILED: &str = "Failed to remove host";

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/ping", get(ping))
        .route("/list", get(list_hosts))
        .route("/add", post(add_host))
        .route("/del", post(delete_host))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn ping() -> impl IntoResponse {
    Json(json!({"message":"Pong!"}))
}

async fn login(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<LoginRequest>, APIError>,
) -> Result<Json<LoginResult>, APIError> {
    let users = UserList::try_from_file(&state.config.users_path).await?;
    if !users.check(&payload.username, &payload.password) {
        tracing::debug!("rejected login for \"{}\"", payload.username);
        return Err(Error::InvalidCredentials.into());
    }

    let token = state.tokens.issue(&payload.username)?;
    tracing::info!("issued token for \"{}\"", payload.username);
    Ok(Json(LoginResult { token }))
}

async fn list_hosts(
    State(state): State<AppState>,
    _: Authenticated,
) -> Result<Json<ListHostsResult>, APIError> {
    let hosts = state
        .host_store
        .read()
        .await
        .list()
        .await
        .map_err(Error::failed(LIST_FAILED))?;
    Ok(Json(ListHostsResult {
        success: true,
        hosts,
    }))
}

async fn add_host(
    State(state): State<AppState>,
    Authenticated(claims): Authenticated,
    WithRejection(Json(payload), _): WithRejection<Json<AddHostRequest>, APIError>,
) -> Result<Json<AddHostResult>, APIError> {
    let record = payload.record()?;
    if !valid_hostname(&record.host) {
        tracing::debug!("rejected add of {:?}: invalid host name", record.host);
        return Err(Error::InvalidHost(record.host).into());
    }
    if !valid_ipv4(&record.ip) {
        tracing::debug!("rejected add of \"{}\": invalid ip {:?}", record.host, record.ip);
        return Err(Error::InvalidIp(record.ip).into());
    }

    {
        let mut store = state.host_store.write().await;
        if store
            .exists(&record.host)
            .await
            .map_err(Error::failed(ADD_FAILED))?
        {
            tracing::debug!("rejected add of \"{}\": already exists", record.host);
            return Err(Error::HostExists(record.host).into());
        }
        store
            .append(&record)
            .await
            .map_err(Error::failed(ADD_FAILED))?;
    }
    tracing::info!(
        "{} added \"{}\" -> {}",
        claims.username,
        record.host,
        record.ip
    );

    if let Err(err) = state.reloader.reload().await {
        tracing::warn!("added \"{}\", but reload failed: {err}", record.host);
        return Err(Error::failed(RELOAD_FAILED)(err).into());
    }

    Ok(Json(AddHostResult {
        success: true,
        message: "Host added",
        host: record.host,
        ip: record.ip,
    }))
}

async fn delete_host(
    State(state): State<AppState>,
    Authenticated(claims): Authenticated,
    WithRejection(Json(payload), _): WithRejection<Json<DeleteHostRequest>, APIError>,
) -> Result<Json<DeleteHostResult>, APIError> {
    let host = payload.host()?;

    {
        let mut store = state.host_store.write().await;
        if !store
            .exists(&host)
            .await
            .map_err(Error::failed(DELETE_FAILED))?
        {
            tracing::debug!("rejected delete of \"{host}\": does not exist");
            return Err(Error::HostNotFound(host).into());
        }
        store
            .delete(&host)
            .await
            .map_err(Error::failed(DELETE_FAILED))?;
    }
    tracing::info!("{} deleted \"{host}\"", claims.username);

    Ok(Json(DeleteHostResult {
        success: true,
        message: "Deleted host",
        host,
    }))
}
