use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::itinerary::{DayPlan, TravelerProfile};

/// Snapshot of a finished itinerary handed to the booking gateway at
/// session end. The planning core produces it and never reads it back.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingSnapshot {
    pub session_id: Uuid,
    pub profile: Option<TravelerProfile>,
    pub days: Vec<DayPlan>,
    pub trip_total: f64,
    pub submitted_at: DateTime<Utc>,
}
