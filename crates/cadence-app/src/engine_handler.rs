use salvo::async_trait;

use crate::error::AppResult;
use cadence_core::error::CoreError;
use cadence_service::engine::SharedEngine;

pub struct EngineHandler {
    pub engine: SharedEngine,
}

#[async_trait]
impl salvo::Handler for EngineHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(SharedEngine::clone(&self.engine));
    }
}

/// ## Summary
/// Retrieves the recurrence engine from the depot.
///
/// ## Errors
/// Returns an error if the engine is not found in the depot.
pub fn get_engine_from_depot(depot: &salvo::Depot) -> AppResult<SharedEngine> {
    depot
        .obtain::<SharedEngine>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Recurrence engine not found in depot").into())
}
