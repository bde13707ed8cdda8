use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::service::OptionSelection;

/// Trip purpose chosen once per itinerary, used only to query
/// recommendations.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelerProfile {
    Family,
    Couple,
    Friends,
    Relax,
}

/// A service placed into a day, occupying `start_slot..start_slot +
/// duration_slots`. Created only through the scheduling engine, which is what
/// keeps day plans conflict-free.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceAllocation {
    pub id: Uuid,
    pub service_id: String,
    pub service_name: String,
    pub start_slot: usize,
    pub duration_slots: usize,
    pub price: f64,
    pub selected_options: Vec<OptionSelection>,
}

impl ServiceAllocation {
    pub fn end_slot(&self) -> usize {
        self.start_slot + self.duration_slots
    }

    /// Two slot ranges overlap iff `a < b+db && b < a+da`.
    pub fn overlaps(&self, start: usize, duration: usize) -> bool {
        self.start_slot < start + duration && start < self.end_slot()
    }
}

/// One day of the trip. Allocations are stored in insertion order; display
/// ordering by start slot is the summary projection's concern.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DayPlan {
    pub day_number: u32,
    pub date: NaiveDate,
    pub allocations: Vec<ServiceAllocation>,
}

impl DayPlan {
    pub fn new(day_number: u32, date: NaiveDate) -> Self {
        Self {
            day_number,
            date,
            allocations: Vec::new(),
        }
    }
}

/// The full ordered set of day plans for one trip. Days stay contiguous:
/// they are appended at the end and removed only from the end.
///
/// Totals are never cached; they are recomputed from the allocations on
/// every read.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub profile: Option<TravelerProfile>,
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    /// A fresh itinerary always starts with a single empty day.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            profile: None,
            days: vec![DayPlan::new(1, start_date)],
        }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// The day plan that would follow the current last one, dated one day
    /// later and numbered one higher.
    pub fn next_day(&self) -> DayPlan {
        match self.days.last() {
            Some(last) => DayPlan::new(last.day_number + 1, last.date + Duration::days(1)),
            None => DayPlan::new(1, default_start_date()),
        }
    }
}

pub fn default_start_date() -> NaiveDate {
    // fallback when no start date is supplied at session creation
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid constant date")
}
