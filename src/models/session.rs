use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::itinerary::Itinerary;
use crate::models::wizard::WizardState;

/// One traveler's planning session: the itinerary it owns plus the wizard
/// state driving it. Sessions never share itineraries.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlannerSession {
    pub id: Uuid,
    pub itinerary: Itinerary,
    pub wizard: WizardState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlannerSession {
    pub fn new(start_date: NaiveDate) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            itinerary: Itinerary::new(start_date),
            wizard: WizardState::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
