use serde::{Deserialize, Serialize};

use crate::models::error::PlannerError;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TimeSlot {
    pub index: usize,
    pub label: String,
}

/// The fixed set of named slots every day shares.
///
/// Built once at startup and read-only afterwards; day plans only ever store
/// slot indices and resolve labels through this catalog.
#[derive(Debug, Clone)]
pub struct TimeSlotCatalog {
    slots: Vec<TimeSlot>,
}

impl TimeSlotCatalog {
    pub fn new(labels: Vec<String>) -> Self {
        let slots = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| TimeSlot { index, label })
            .collect();

        Self { slots }
    }

    /// Nine hourly slots, 9:00 AM through 5:00 PM.
    pub fn standard_day() -> Self {
        let labels = [
            "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM",
            "4:00 PM", "5:00 PM",
        ];

        Self::new(labels.iter().map(|l| l.to_string()).collect())
    }

    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn label_of(&self, index: usize) -> Result<&str, PlannerError> {
        self.slots
            .get(index)
            .map(|slot| slot.label.as_str())
            .ok_or(PlannerError::SlotOutOfRange {
                start: index,
                end: index + 1,
                slot_count: self.slots.len(),
            })
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.label == label)
    }
}
