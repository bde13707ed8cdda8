use actix_web::{web, HttpResponse, Responder};

use crate::services::catalog_service::{InMemoryServiceCatalog, ServiceCatalog};

/*
    /api/services
*/
pub async fn get_services(
    catalog: web::Data<InMemoryServiceCatalog>,
    query: web::Query<ServiceQuery>,
) -> impl Responder {
    match &query.package_type {
        Some(package_type) => HttpResponse::Ok().json(catalog.by_package_type(package_type)),
        None => HttpResponse::Ok().json(catalog.entries()),
    }
}

/*
    /api/services/{id}
*/
pub async fn get_service_by_id(
    path: web::Path<String>,
    catalog: web::Data<InMemoryServiceCatalog>,
) -> impl Responder {
    let id = path.into_inner();

    match catalog.by_id(&id) {
        Some(entry) => HttpResponse::Ok().json(entry),
        None => HttpResponse::NotFound()
            .json(serde_json::json!({ "error": format!("unknown service '{}'", id) })),
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ServiceQuery {
    pub package_type: Option<String>,
}
