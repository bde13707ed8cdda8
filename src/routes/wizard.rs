use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::error::PlannerError;
use crate::models::itinerary::TravelerProfile;
use crate::models::session::PlannerSession;
use crate::routes::session::session_payload;
use crate::services::catalog_service::{InMemoryServiceCatalog, ServiceCatalog};
use crate::services::recommendation_service::{
    ProfileRecommendationService, RecommendationProvider,
};
use crate::services::session_service::SessionStore;
use crate::services::wizard_service::WizardController;

fn respond(
    store: &SessionStore,
    id: Uuid,
    f: impl FnOnce(&mut PlannerSession) -> Result<(), PlannerError>,
) -> HttpResponse {
    match store.with_session(id, f) {
        None => super::session_not_found(),
        Some(Err(err)) => super::planner_error_response(&err),
        Some(Ok(())) => match store.get(id) {
            Some(session) => HttpResponse::Ok().json(session_payload(&session)),
            None => super::session_not_found(),
        },
    }
}

/*
    POST /api/sessions/{id}/wizard/advance
*/
pub async fn advance(path: web::Path<Uuid>, store: web::Data<SessionStore>) -> impl Responder {
    respond(&store, path.into_inner(), |session| {
        WizardController::advance(session).map(|_| ())
    })
}

/*
    POST /api/sessions/{id}/wizard/back
*/
pub async fn back(path: web::Path<Uuid>, store: web::Data<SessionStore>) -> impl Responder {
    respond(&store, path.into_inner(), |session| {
        WizardController::back(session).map(|_| ())
    })
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub profile: TravelerProfile,
}

/*
    POST /api/sessions/{id}/wizard/profile
*/
pub async fn choose_profile(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
    input: web::Json<ProfileRequest>,
) -> impl Responder {
    let profile = input.into_inner().profile;

    respond(&store, path.into_inner(), |session| {
        WizardController::choose_profile(session, profile).map(|_| ())
    })
}

/*
    POST /api/sessions/{id}/wizard/summary
*/
pub async fn go_to_summary(path: web::Path<Uuid>, store: web::Data<SessionStore>) -> impl Responder {
    respond(&store, path.into_inner(), |session| {
        WizardController::go_to_summary(session).map(|_| ())
    })
}

/*
    POST /api/sessions/{id}/wizard/edit
*/
pub async fn edit(path: web::Path<Uuid>, store: web::Data<SessionStore>) -> impl Responder {
    respond(&store, path.into_inner(), |session| {
        WizardController::edit(session).map(|_| ())
    })
}

/*
    GET /api/sessions/{id}/recommendations

    Only meaningful once a profile is chosen; the provider output is an
    ordered subset of the catalog and is returned as-is.
*/
pub async fn get_recommendations(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
    catalog: web::Data<InMemoryServiceCatalog>,
) -> impl Responder {
    let Some(session) = store.get(path.into_inner()) else {
        return super::session_not_found();
    };

    let Some(profile) = session.itinerary.profile else {
        return HttpResponse::Conflict()
            .json(serde_json::json!({ "error": "No traveler profile chosen yet" }));
    };

    let provider = ProfileRecommendationService;
    HttpResponse::Ok().json(provider.recommend(profile, catalog.entries()))
}
