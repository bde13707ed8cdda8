use thiserror::Error;

/// Failures the planning core can report back to the user.
///
/// Every variant is recoverable by user action (pick another slot, keep the
/// day, fix the option input); none of them should ever tear down a session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    #[error("slot range {start}..{end} does not fit a {slot_count}-slot day")]
    SlotOutOfRange {
        start: usize,
        end: usize,
        slot_count: usize,
    },

    #[error("slot range {start}..{end} on day {day} is already taken")]
    SlotConflict {
        day: u32,
        start: usize,
        end: usize,
    },

    #[error("an itinerary must keep at least one day")]
    CannotRemoveOnlyDay,

    #[error("invalid price input: {0}")]
    InvalidPriceInput(String),

    #[error("'{action}' is not allowed from the {from} state")]
    InvalidStateTransition { from: String, action: String },

    #[error("day index {index} is out of range for a {day_count}-day itinerary")]
    DayOutOfRange { index: usize, day_count: usize },

    #[error("unknown service '{0}'")]
    UnknownService(String),
}

impl PlannerError {
    pub fn invalid_transition(from: impl Into<String>, action: impl Into<String>) -> Self {
        PlannerError::InvalidStateTransition {
            from: from.into(),
            action: action.into(),
        }
    }
}
