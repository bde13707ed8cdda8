use actix_web::{web, App, HttpResponse, Responder};

use tripforge_api::models::slots::TimeSlotCatalog;
use tripforge_api::routes;
use tripforge_api::services::catalog_service::InMemoryServiceCatalog;
use tripforge_api::services::session_service::SessionStore;

/// Wires the real planning routes against in-memory state. The checkout
/// route is the only one stubbed out, so tests need no MongoDB. No CORS
/// wrap here: it would change the response body type and the middleware
/// adds nothing to in-process requests.
pub struct TestApp {
    pub sessions: web::Data<SessionStore>,
    pub slots: web::Data<TimeSlotCatalog>,
    pub catalog: web::Data<InMemoryServiceCatalog>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            sessions: web::Data::new(SessionStore::new()),
            slots: web::Data::new(TimeSlotCatalog::standard_day()),
            catalog: web::Data::new(InMemoryServiceCatalog::seeded()),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.sessions.clone())
            .app_data(self.slots.clone())
            .app_data(self.catalog.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/services")
                            .route("", web::get().to(routes::catalog::get_services))
                            .route("/{id}", web::get().to(routes::catalog::get_service_by_id)),
                    )
                    .service(
                        web::scope("/sessions")
                            .route("", web::post().to(routes::session::create_session))
                            .route("/{id}", web::get().to(routes::session::get_session))
                            .route("/{id}/summary", web::get().to(routes::session::get_summary))
                            .route(
                                "/{id}/recommendations",
                                web::get().to(routes::wizard::get_recommendations),
                            )
                            .route("/{id}/wizard/advance", web::post().to(routes::wizard::advance))
                            .route("/{id}/wizard/back", web::post().to(routes::wizard::back))
                            .route(
                                "/{id}/wizard/profile",
                                web::post().to(routes::wizard::choose_profile),
                            )
                            .route(
                                "/{id}/wizard/summary",
                                web::post().to(routes::wizard::go_to_summary),
                            )
                            .route("/{id}/wizard/edit", web::post().to(routes::wizard::edit))
                            .route("/{id}/days", web::post().to(routes::planning::add_day))
                            .route(
                                "/{id}/days/last",
                                web::delete().to(routes::planning::remove_last_day),
                            )
                            .route(
                                "/{id}/days/{day}/select",
                                web::post().to(routes::planning::select_day),
                            )
                            .route(
                                "/{id}/days/{day}/allocations/{allocation_id}",
                                web::delete().to(routes::planning::remove_allocation),
                            )
                            .route(
                                "/{id}/placement/slot",
                                web::post().to(routes::planning::select_slot),
                            )
                            .route(
                                "/{id}/placement/service",
                                web::post().to(routes::planning::choose_service),
                            )
                            .route(
                                "/{id}/placement/confirm",
                                web::post().to(routes::planning::confirm_placement),
                            )
                            .route(
                                "/{id}/placement/cancel",
                                web::post().to(routes::planning::cancel_placement),
                            )
                            .route("/{id}/checkout", web::post().to(mock_checkout)),
                    ),
            )
    }
}

// The real checkout needs a MongoDB connection; tests stub it.
async fn mock_checkout() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "booking_id": "test_booking_123" }))
}
