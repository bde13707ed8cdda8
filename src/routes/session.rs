use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::itinerary::default_start_date;
use crate::models::session::PlannerSession;
use crate::models::slots::TimeSlotCatalog;
use crate::services::scheduling_service::SchedulingEngine;
use crate::services::session_service::SessionStore;
use crate::services::summary_service::SummaryService;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub start_date: Option<NaiveDate>,
}

/// What every session endpoint responds with: the wizard state, the
/// itinerary, and the always-recomputed trip total.
pub fn session_payload(session: &PlannerSession) -> serde_json::Value {
    serde_json::json!({
        "id": session.id,
        "wizard": session.wizard,
        "itinerary": session.itinerary,
        "trip_total": SchedulingEngine::trip_total(&session.itinerary),
        "created_at": session.created_at,
        "updated_at": session.updated_at,
    })
}

/*
    POST /api/sessions
*/
pub async fn create_session(
    store: web::Data<SessionStore>,
    input: Option<web::Json<CreateSessionRequest>>,
) -> impl Responder {
    let start_date = input
        .and_then(|body| body.into_inner().start_date)
        .unwrap_or_else(default_start_date);

    let session = store.create(start_date);
    println!("Created planning session {}", session.id);

    HttpResponse::Created().json(session_payload(&session))
}

/*
    GET /api/sessions/{id}
*/
pub async fn get_session(path: web::Path<Uuid>, store: web::Data<SessionStore>) -> impl Responder {
    match store.get(path.into_inner()) {
        Some(session) => HttpResponse::Ok().json(session_payload(&session)),
        None => super::session_not_found(),
    }
}

/*
    GET /api/sessions/{id}/summary
*/
pub async fn get_summary(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
    slots: web::Data<TimeSlotCatalog>,
) -> impl Responder {
    let Some(session) = store.get(path.into_inner()) else {
        return super::session_not_found();
    };

    match SummaryService::project(&session.itinerary, &slots) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => super::planner_error_response(&err),
    }
}
