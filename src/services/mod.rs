pub mod booking_service;
pub mod catalog_service;
pub mod pricing_service;
pub mod recommendation_service;
pub mod scheduling_service;
pub mod session_service;
pub mod summary_service;
pub mod wizard_service;
