use chrono::Local;
use salvo::http::StatusCode;
use salvo::prelude::Text;
use salvo::{Depot, Request, Response, Router, handler};

use cadence_core::constants::{NEXTDATE_ROUTE_COMPONENT, TODAY_SENTINEL};
use cadence_core::error::CoreError;
use cadence_rule::CalendarDate;
use cadence_service::engine::RecurrenceEngine;

use crate::engine_handler::get_engine_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Computes the next occurrence for `date` and `repeat` after `now`.
///
/// Query parameters:
/// - `now`: `YYYYMMDD`; missing, empty or `today` means the server's local date
/// - `date`: the stored base date, `YYYYMMDD`
/// - `repeat`: the repeat rule expression
///
/// Responds `200` with the plain-text date, or `400` with the error message.
#[handler]
async fn next_date(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let now = req.query::<String>("now").unwrap_or_default();
    let date = req.query::<String>("date").unwrap_or_default();
    let repeat = req.query::<String>("repeat").unwrap_or_default();

    tracing::debug!(now = %now, date = %date, repeat = %repeat, "Processing nextdate request");

    let engine = match get_engine_from_depot(depot) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get recurrence engine");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Text::Plain("Internal server error"));
            return;
        }
    };

    let result = resolve_now(&now).and_then(|now| {
        RecurrenceEngine::next_date(engine.as_ref(), now, &date, &repeat).map_err(AppError::from)
    });

    match result {
        Ok(next) => res.render(Text::Plain(next)),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected nextdate request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Text::Plain(e.to_string()));
        }
    }
}

/// ## Summary
/// Resolves the `now` query parameter to a date.
///
/// ## Errors
/// Returns `AppError::InvalidNow` if the value is neither empty, `today`, nor
/// a valid `YYYYMMDD` date.
fn resolve_now(raw: &str) -> AppResult<CalendarDate> {
    match raw.trim() {
        "" | TODAY_SENTINEL => CalendarDate::from_naive(Local::now().date_naive()).ok_or_else(
            || CoreError::InvariantViolation("Local date outside the supported range").into(),
        ),
        raw => CalendarDate::parse(raw).map_err(AppError::InvalidNow),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(NEXTDATE_ROUTE_COMPONENT).get(next_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_now_parses_explicit_date() {
        let now = resolve_now("20240126").unwrap();
        assert_eq!(now.to_string(), "20240126");
    }

    #[test]
    fn resolve_now_defaults_to_today() {
        let today = Local::now().date_naive();
        for raw in ["", "today", " today "] {
            let now = resolve_now(raw).unwrap();
            // Tolerate a midnight rollover between the two clock reads
            assert!(now.as_naive() >= today, "{raw:?}");
        }
    }

    #[test]
    fn resolve_now_rejects_garbage() {
        assert!(matches!(
            resolve_now("2024-01-26"),
            Err(AppError::InvalidNow(_))
        ));
    }
}
