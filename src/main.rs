use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripforge_api::db;
use tripforge_api::models::slots::TimeSlotCatalog;
use tripforge_api::routes;
use tripforge_api::services::catalog_service::InMemoryServiceCatalog;
use tripforge_api::services::session_service::SessionStore;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    let sessions = web::Data::new(SessionStore::new());
    let slots = web::Data::new(TimeSlotCatalog::standard_day());
    let catalog = web::Data::new(InMemoryServiceCatalog::seeded());

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/health", web::get().to(routes::health::health_check))
            .app_data(web::Data::new(client.clone()))
            .app_data(sessions.clone())
            .app_data(slots.clone())
            .app_data(catalog.clone())
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
                            .route("/{id}/checkout", web::post().to(routes::booking::checkout)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
