pub mod bookings;
pub mod error;
pub mod itinerary;
pub mod service;
pub mod session;
pub mod slots;
pub mod summary;
pub mod wizard;
