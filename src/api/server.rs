use crate::api::routes;
use crate::auth::SharedTokenSigner;
use crate::config::SharedConfig;
use crate::host_store::DynHostStore;
use crate::reload::DynReloader;
use std::future::Future;

/// Everything a request handler needs, built once at startup and shared by reference.
#[derive(Clone)]
pub struct AppState {
    pub config: SharedConfig,
    pub host_store: DynHostStore,
    pub reloader: DynReloader,
    pub tokens: SharedTokenSigner,
}

/// Bind the API listener and return a future serving requests until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if [`Config::api_bind_addr`][crate::config::Config::api_bind_addr] can't
/// be bound.
pub fn new(
    state: AppState,
    shutdown: impl Future<Output = ()>,
) -> hyper::Result<impl Future<Output = hyper::Result<()>>> {
    let server = axum::Server::try_bind(&state.config.api_bind_addr)?
        .serve(routes::new(state).into_make_service())
        .with_graceful_shutdown(shutdown);
    Ok(server)
}
