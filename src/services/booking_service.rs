use std::future::Future;
use std::sync::Arc;

use mongodb::Client;

use crate::models::bookings::BookingSnapshot;

#[derive(Debug)]
pub enum BookingError {
    StorageFailure(String),
}

/// Hands a finished itinerary snapshot off for persistence at session end.
/// The planning core does no retries and surfaces failures verbatim.
pub trait BookingGateway {
    fn save_booking(
        &self,
        snapshot: &BookingSnapshot,
    ) -> impl Future<Output = Result<String, BookingError>> + Send;
}

pub struct MongoBookingGateway {
    client: Arc<Client>,
}

impl MongoBookingGateway {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

impl BookingGateway for MongoBookingGateway {
    async fn save_booking(&self, snapshot: &BookingSnapshot) -> Result<String, BookingError> {
        let collection: mongodb::Collection<BookingSnapshot> =
            self.client.database("TripForge").collection("Bookings");

        match collection.insert_one(snapshot).await {
            Ok(result) => Ok(result
                .inserted_id
                .as_object_id()
                .map(|id| id.to_hex())
                .unwrap_or_else(|| snapshot.session_id.to_string())),
            Err(err) => {
                eprintln!("Failed to insert booking: {:?}", err);
                Err(BookingError::StorageFailure(err.to_string()))
            }
        }
    }
}
