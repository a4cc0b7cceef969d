use crate::api::routes;
use crate::config::SharedConfig;
use crate::store::DynRecordStore;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub record_store: DynRecordStore,
}

/// Serve the HTTP API on [`Config::api_bind_addr`][crate::config::Config::api_bind_addr]
/// until `shutdown` completes. In-flight requests are allowed to finish.
pub fn new(
    config: SharedConfig,
    record_store: DynRecordStore,
    shutdown: impl Future<Output = ()>,
) -> impl Future<Output = hyper::Result<()>> {
    axum::Server::bind(&config.api_bind_addr)
        .serve(routes::new(AppState { config, record_store }).into_make_service())
        .with_graceful_shutdown(shutdown)
}
