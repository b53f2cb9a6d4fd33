mod healthcheck;
mod nextdate;

use salvo::Router;

pub use cadence_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, NEXTDATE_ROUTE_COMPONENT, NEXTDATE_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router.
///
/// Handlers expect an `EngineHandler` hoop ahead of this router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(nextdate::routes())
}
