use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::service::OptionSelection;
use crate::models::slots::TimeSlotCatalog;
use crate::routes::session::session_payload;
use crate::services::catalog_service::InMemoryServiceCatalog;
use crate::services::scheduling_service::SchedulingEngine;
use crate::services::session_service::SessionStore;
use crate::services::wizard_service::WizardController;

fn updated_session(store: &SessionStore, id: Uuid) -> HttpResponse {
    match store.get(id) {
        Some(session) => HttpResponse::Ok().json(session_payload(&session)),
        None => super::session_not_found(),
    }
}

/*
    POST /api/sessions/{id}/days
*/
pub async fn add_day(path: web::Path<Uuid>, store: web::Data<SessionStore>) -> impl Responder {
    let id = path.into_inner();

    match store.with_session(id, WizardController::add_day) {
        None => super::session_not_found(),
        Some(Err(err)) => super::planner_error_response(&err),
        Some(Ok(())) => updated_session(&store, id),
    }
}

/*
    DELETE /api/sessions/{id}/days/last
*/
pub async fn remove_last_day(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let id = path.into_inner();

    match store.with_session(id, WizardController::remove_last_day) {
        None => super::session_not_found(),
        Some(Err(err)) => super::planner_error_response(&err),
        Some(Ok(())) => updated_session(&store, id),
    }
}

/*
    POST /api/sessions/{id}/days/{day}/select
*/
pub async fn select_day(
    path: web::Path<(Uuid, usize)>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let (id, day) = path.into_inner();

    match store.with_session(id, |session| WizardController::select_day(session, day)) {
        None => super::session_not_found(),
        Some(Err(err)) => super::planner_error_response(&err),
        Some(Ok(())) => updated_session(&store, id),
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectSlotRequest {
    pub day: usize,
    pub slot: usize,
}

/*
    POST /api/sessions/{id}/placement/slot
*/
pub async fn select_slot(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
    slots: web::Data<TimeSlotCatalog>,
    input: web::Json<SelectSlotRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let body = input.into_inner();

    match store.with_session(id, |session| {
        WizardController::select_slot(session, &slots, body.day, body.slot)
    }) {
        None => super::session_not_found(),
        Some(Err(err)) => super::planner_error_response(&err),
        Some(Ok(())) => updated_session(&store, id),
    }
}

#[derive(Debug, Deserialize)]
pub struct ChooseServiceRequest {
    pub service_id: String,
}

/*
    POST /api/sessions/{id}/placement/service
*/
pub async fn choose_service(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
    catalog: web::Data<InMemoryServiceCatalog>,
    input: web::Json<ChooseServiceRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let body = input.into_inner();

    match store.with_session(id, |session| {
        WizardController::choose_service(session, catalog.get_ref(), &body.service_id)
    }) {
        None => super::session_not_found(),
        Some(Err(err)) => super::planner_error_response(&err),
        Some(Ok(())) => updated_session(&store, id),
    }
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub selections: Vec<OptionSelection>,
}

/*
    POST /api/sessions/{id}/placement/confirm
*/
pub async fn confirm_placement(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
    slots: web::Data<TimeSlotCatalog>,
    catalog: web::Data<InMemoryServiceCatalog>,
    input: web::Json<ConfirmRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let selections = input.into_inner().selections;

    match store.with_session(id, |session| {
        WizardController::confirm(session, &slots, catalog.get_ref(), selections)
    }) {
        None => super::session_not_found(),
        Some(Err(err)) => super::planner_error_response(&err),
        Some(Ok(allocation)) => HttpResponse::Ok().json(serde_json::json!({
            "allocation": allocation,
        })),
    }
}

/*
    POST /api/sessions/{id}/placement/cancel
*/
pub async fn cancel_placement(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let id = path.into_inner();

    match store.with_session(id, WizardController::cancel) {
        None => super::session_not_found(),
        Some(Err(err)) => super::planner_error_response(&err),
        Some(Ok(())) => updated_session(&store, id),
    }
}

/*
    DELETE /api/sessions/{id}/days/{day}/allocations/{allocation_id}

    Removing an allocation that is already gone succeeds; deallocation is
    idempotent.
*/
pub async fn remove_allocation(
    path: web::Path<(Uuid, usize, Uuid)>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let (id, day, allocation_id) = path.into_inner();

    match store.with_session(id, |session| {
        SchedulingEngine::deallocate(&mut session.itinerary, day, allocation_id)
    }) {
        None => super::session_not_found(),
        Some(Err(err)) => super::planner_error_response(&err),
        Some(Ok(())) => updated_session(&store, id),
    }
}
