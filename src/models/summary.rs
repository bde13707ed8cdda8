use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only view of the whole trip, built on demand from the itinerary.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItinerarySummary {
    pub total_days: usize,
    pub total_services: usize,
    pub trip_total: f64,
    pub days: Vec<DaySummary>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DaySummary {
    pub day_number: u32,
    pub date: NaiveDate,
    pub day_total: f64,
    /// Sorted by start slot ascending, not by insertion order.
    pub services: Vec<SummaryLine>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SummaryLine {
    pub allocation_id: Uuid,
    pub service_name: String,
    pub slot_label: String,
    pub start_slot: usize,
    pub duration_slots: usize,
    pub price: f64,
}
