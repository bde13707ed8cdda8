use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use mongodb::Client;
use uuid::Uuid;

use crate::models::bookings::BookingSnapshot;
use crate::services::booking_service::{BookingGateway, MongoBookingGateway};
use crate::services::scheduling_service::SchedulingEngine;
use crate::services::session_service::SessionStore;

/*
    POST /api/sessions/{id}/checkout

    Hands the finished itinerary snapshot to the booking gateway. The
    planning core has no retry logic; a gateway failure is surfaced
    verbatim and the session stays alive so the traveler can try again.
*/
pub async fn checkout(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let Some(session) = store.get(path.into_inner()) else {
        return super::session_not_found();
    };

    let snapshot = BookingSnapshot {
        session_id: session.id,
        profile: session.itinerary.profile,
        days: session.itinerary.days.clone(),
        trip_total: SchedulingEngine::trip_total(&session.itinerary),
        submitted_at: Utc::now(),
    };

    let gateway = MongoBookingGateway::new(data.into_inner().as_ref().clone());

    match gateway.save_booking(&snapshot).await {
        Ok(booking_id) => {
            store.remove(session.id);
            HttpResponse::Ok().json(serde_json::json!({
                "booking_id": booking_id,
                "trip_total": snapshot.trip_total,
            }))
        }
        Err(err) => {
            eprintln!("Failed to save booking: {:?}", err);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": format!("{:?}", err) }))
        }
    }
}
