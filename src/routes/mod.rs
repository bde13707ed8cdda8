pub mod booking;
pub mod catalog;
pub mod health;
pub mod planning;
pub mod session;
pub mod wizard;

use actix_web::HttpResponse;

use crate::models::error::PlannerError;

/// One place that decides which status a planner failure maps to. The body
/// always carries the error text so the selection surface can show the
/// reason and let the traveler try again.
pub fn planner_error_response(err: &PlannerError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });

    match err {
        PlannerError::SlotConflict { .. }
        | PlannerError::CannotRemoveOnlyDay
        | PlannerError::InvalidStateTransition { .. } => HttpResponse::Conflict().json(body),
        PlannerError::SlotOutOfRange { .. }
        | PlannerError::InvalidPriceInput(_)
        | PlannerError::DayOutOfRange { .. } => HttpResponse::BadRequest().json(body),
        PlannerError::UnknownService(_) => HttpResponse::NotFound().json(body),
    }
}

pub fn session_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Session not found" }))
}
