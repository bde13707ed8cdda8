use serde::{Deserialize, Serialize};

/// Top-level planning steps, 1 through 5.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    PurposeSelection,
    Recommendations,
    DayPlanning,
    Summary,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Welcome => 1,
            WizardStep::PurposeSelection => 2,
            WizardStep::Recommendations => 3,
            WizardStep::DayPlanning => 4,
            WizardStep::Summary => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::Welcome => "welcome",
            WizardStep::PurposeSelection => "purpose_selection",
            WizardStep::Recommendations => "recommendations",
            WizardStep::DayPlanning => "day_planning",
            WizardStep::Summary => "summary",
        }
    }
}

/// The "place a service" sub-flow, active only during day planning.
///
/// A successful confirm never lingers in a terminal state; it commits the
/// allocation and drops straight back to `Idle`, so a service is either fully
/// placed or not placed at all.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlacementState {
    Idle,
    SlotChosen {
        day: usize,
        slot: usize,
    },
    ServiceChosen {
        day: usize,
        slot: usize,
        service_id: String,
    },
}

impl PlacementState {
    pub fn name(&self) -> &'static str {
        match self {
            PlacementState::Idle => "idle",
            PlacementState::SlotChosen { .. } => "slot_chosen",
            PlacementState::ServiceChosen { .. } => "service_chosen",
        }
    }
}

/// Everything the wizard tracks besides the itinerary itself: the current
/// step, which day the planner grid is showing, and the placement sub-flow.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub active_day: usize,
    pub placement: PlacementState,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            active_day: 0,
            placement: PlacementState::Idle,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
