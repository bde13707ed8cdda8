use crate::models::error::PlannerError;
use crate::models::itinerary::{ServiceAllocation, TravelerProfile};
use crate::models::service::OptionSelection;
use crate::models::session::PlannerSession;
use crate::models::slots::TimeSlotCatalog;
use crate::models::wizard::{PlacementState, WizardStep};
use crate::services::catalog_service::ServiceCatalog;
use crate::services::scheduling_service::SchedulingEngine;

/// Drives the five-step planning wizard and the nested "place a service"
/// sub-flow.
///
/// Rejected transitions return an error and leave the session exactly as it
/// was; only legal transitions mutate anything. Leaving the day-planning
/// step discards the placement sub-flow's selection state but never touches
/// allocations.
pub struct WizardController;

impl WizardController {
    // ---- step navigation -------------------------------------------------

    pub fn advance(session: &mut PlannerSession) -> Result<WizardStep, PlannerError> {
        let next = match session.wizard.step {
            WizardStep::Welcome => WizardStep::PurposeSelection,
            WizardStep::PurposeSelection => {
                if session.itinerary.profile.is_none() {
                    return Err(PlannerError::invalid_transition(
                        "purpose_selection without a chosen profile",
                        "advance",
                    ));
                }
                WizardStep::Recommendations
            }
            WizardStep::Recommendations => WizardStep::DayPlanning,
            WizardStep::DayPlanning => return Self::go_to_summary(session),
            WizardStep::Summary => {
                return Err(PlannerError::invalid_transition("summary", "advance"))
            }
        };

        session.wizard.step = next;
        Ok(next)
    }

    pub fn back(session: &mut PlannerSession) -> Result<WizardStep, PlannerError> {
        let previous = match session.wizard.step {
            WizardStep::Welcome => {
                return Err(PlannerError::invalid_transition("welcome", "back"))
            }
            WizardStep::PurposeSelection => WizardStep::Welcome,
            // going back to purpose selection is allowed and may overwrite
            // the profile on the way forward again
            WizardStep::Recommendations => WizardStep::PurposeSelection,
            WizardStep::DayPlanning => {
                session.wizard.placement = PlacementState::Idle;
                WizardStep::Recommendations
            }
            WizardStep::Summary => WizardStep::DayPlanning,
        };

        session.wizard.step = previous;
        Ok(previous)
    }

    /// Record the trip purpose and move on to recommendations.
    pub fn choose_profile(
        session: &mut PlannerSession,
        profile: TravelerProfile,
    ) -> Result<WizardStep, PlannerError> {
        if session.wizard.step != WizardStep::PurposeSelection {
            return Err(PlannerError::invalid_transition(
                session.wizard.step.name(),
                "choose_profile",
            ));
        }

        session.itinerary.profile = Some(profile);
        session.wizard.step = WizardStep::Recommendations;

        Ok(session.wizard.step)
    }

    /// Jump to the summary. Legal from day planning regardless of how many
    /// allocations exist.
    pub fn go_to_summary(session: &mut PlannerSession) -> Result<WizardStep, PlannerError> {
        if session.wizard.step != WizardStep::DayPlanning {
            return Err(PlannerError::invalid_transition(
                session.wizard.step.name(),
                "go_to_summary",
            ));
        }

        session.wizard.placement = PlacementState::Idle;
        session.wizard.step = WizardStep::Summary;

        Ok(session.wizard.step)
    }

    /// Return from the summary to day planning with everything intact.
    pub fn edit(session: &mut PlannerSession) -> Result<WizardStep, PlannerError> {
        if session.wizard.step != WizardStep::Summary {
            return Err(PlannerError::invalid_transition(
                session.wizard.step.name(),
                "edit",
            ));
        }

        session.wizard.step = WizardStep::DayPlanning;
        Ok(session.wizard.step)
    }

    // ---- day management --------------------------------------------------

    pub fn add_day(session: &mut PlannerSession) -> Result<(), PlannerError> {
        Self::require_day_planning(session, "add_day")?;
        SchedulingEngine::add_day(&mut session.itinerary);

        Ok(())
    }

    /// Remove the trailing day. If the active-day pointer or an in-progress
    /// placement referenced the removed day, the pointer moves to the new
    /// last day and the placement resets.
    pub fn remove_last_day(session: &mut PlannerSession) -> Result<(), PlannerError> {
        Self::require_day_planning(session, "remove_last_day")?;
        SchedulingEngine::remove_last_day(&mut session.itinerary)?;

        let last = session.itinerary.day_count() - 1;
        if session.wizard.active_day > last {
            session.wizard.active_day = last;
        }
        if Self::placement_day(&session.wizard.placement)
            .map(|day| day > last)
            .unwrap_or(false)
        {
            session.wizard.placement = PlacementState::Idle;
        }

        Ok(())
    }

    pub fn select_day(session: &mut PlannerSession, day: usize) -> Result<(), PlannerError> {
        Self::require_day_planning(session, "select_day")?;

        if day >= session.itinerary.day_count() {
            return Err(PlannerError::DayOutOfRange {
                index: day,
                day_count: session.itinerary.day_count(),
            });
        }

        session.wizard.active_day = day;
        Ok(())
    }

    // ---- "place a service" sub-flow --------------------------------------

    /// Start placing a service at a slot. Only legal from an idle sub-flow,
    /// and only on a slot that is currently free.
    pub fn select_slot(
        session: &mut PlannerSession,
        slots: &TimeSlotCatalog,
        day: usize,
        slot: usize,
    ) -> Result<(), PlannerError> {
        Self::require_day_planning(session, "select_slot")?;

        if session.wizard.placement != PlacementState::Idle {
            return Err(PlannerError::invalid_transition(
                session.wizard.placement.name(),
                "select_slot",
            ));
        }

        if slot >= slots.count() {
            return Err(PlannerError::SlotOutOfRange {
                start: slot,
                end: slot + 1,
                slot_count: slots.count(),
            });
        }

        // minimum footprint is one slot; the real duration is checked again
        // at confirm time with the chosen service
        if !SchedulingEngine::is_slot_range_free(&session.itinerary, day, slot, 1)? {
            let day_number = session.itinerary.days[day].day_number;
            return Err(PlannerError::SlotConflict {
                day: day_number,
                start: slot,
                end: slot + 1,
            });
        }

        session.wizard.active_day = day;
        session.wizard.placement = PlacementState::SlotChosen { day, slot };

        Ok(())
    }

    /// Record which service the traveler picked for the chosen slot.
    pub fn choose_service(
        session: &mut PlannerSession,
        catalog: &dyn ServiceCatalog,
        service_id: &str,
    ) -> Result<(), PlannerError> {
        let PlacementState::SlotChosen { day, slot } = session.wizard.placement else {
            return Err(PlannerError::invalid_transition(
                session.wizard.placement.name(),
                "choose_service",
            ));
        };

        if catalog.by_id(service_id).is_none() {
            return Err(PlannerError::UnknownService(service_id.to_string()));
        }

        session.wizard.placement = PlacementState::ServiceChosen {
            day,
            slot,
            service_id: service_id.to_string(),
        };

        Ok(())
    }

    /// Price and commit the configured service. On success the sub-flow
    /// drops back to idle; on a slot failure it stays in `ServiceChosen` so
    /// the traveler can pick a different slot or cancel.
    pub fn confirm(
        session: &mut PlannerSession,
        slots: &TimeSlotCatalog,
        catalog: &dyn ServiceCatalog,
        selections: Vec<OptionSelection>,
    ) -> Result<ServiceAllocation, PlannerError> {
        let PlacementState::ServiceChosen {
            day,
            slot,
            ref service_id,
        } = session.wizard.placement
        else {
            return Err(PlannerError::invalid_transition(
                session.wizard.placement.name(),
                "confirm",
            ));
        };

        let service = catalog
            .by_id(service_id)
            .ok_or_else(|| PlannerError::UnknownService(service_id.clone()))?
            .clone();

        let allocation = SchedulingEngine::allocate(
            &mut session.itinerary,
            slots,
            day,
            &service,
            slot,
            selections,
        )?;

        session.wizard.placement = PlacementState::Idle;
        Ok(allocation)
    }

    /// Abandon the sub-flow from any non-idle state, touching nothing else.
    pub fn cancel(session: &mut PlannerSession) -> Result<(), PlannerError> {
        if session.wizard.placement == PlacementState::Idle {
            return Err(PlannerError::invalid_transition("idle", "cancel"));
        }

        session.wizard.placement = PlacementState::Idle;
        Ok(())
    }

    // ---- helpers ---------------------------------------------------------

    fn require_day_planning(session: &PlannerSession, action: &str) -> Result<(), PlannerError> {
        if session.wizard.step != WizardStep::DayPlanning {
            return Err(PlannerError::invalid_transition(
                session.wizard.step.name(),
                action,
            ));
        }

        Ok(())
    }

    fn placement_day(placement: &PlacementState) -> Option<usize> {
        match placement {
            PlacementState::Idle => None,
            PlacementState::SlotChosen { day, .. } => Some(*day),
            PlacementState::ServiceChosen { day, .. } => Some(*day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog_service::InMemoryServiceCatalog;
    use chrono::NaiveDate;

    fn session_at_day_planning() -> PlannerSession {
        let mut session = PlannerSession::new(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());

        WizardController::advance(&mut session).unwrap();
        WizardController::choose_profile(&mut session, TravelerProfile::Couple).unwrap();
        WizardController::advance(&mut session).unwrap();
        assert_eq!(session.wizard.step, WizardStep::DayPlanning);

        session
    }

    #[test]
    fn test_full_forward_walk_through_the_wizard() {
        let mut session = PlannerSession::new(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        assert_eq!(session.wizard.step.number(), 1);

        WizardController::advance(&mut session).unwrap();
        assert_eq!(session.wizard.step.number(), 2);

        WizardController::choose_profile(&mut session, TravelerProfile::Couple).unwrap();
        assert_eq!(session.wizard.step.number(), 3);

        WizardController::advance(&mut session).unwrap();
        assert_eq!(session.wizard.step.number(), 4);

        // summary is reachable with zero allocations
        WizardController::go_to_summary(&mut session).unwrap();
        assert_eq!(session.wizard.step.number(), 5);

        WizardController::edit(&mut session).unwrap();
        assert_eq!(session.wizard.step.number(), 4);
    }

    #[test]
    fn test_advance_without_profile_is_rejected() {
        let mut session = PlannerSession::new(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        WizardController::advance(&mut session).unwrap();

        let err = WizardController::advance(&mut session).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidStateTransition { .. }));
        assert_eq!(session.wizard.step, WizardStep::PurposeSelection);
    }

    #[test]
    fn test_going_back_allows_overwriting_the_profile() {
        let mut session = session_at_day_planning();

        WizardController::back(&mut session).unwrap();
        WizardController::back(&mut session).unwrap();
        assert_eq!(session.wizard.step, WizardStep::PurposeSelection);

        WizardController::choose_profile(&mut session, TravelerProfile::Family).unwrap();
        assert_eq!(session.itinerary.profile, Some(TravelerProfile::Family));
    }

    #[test]
    fn test_edit_keeps_allocations_intact() {
        let slots = TimeSlotCatalog::standard_day();
        let catalog = InMemoryServiceCatalog::seeded();
        let mut session = session_at_day_planning();

        WizardController::select_slot(&mut session, &slots, 0, 2).unwrap();
        WizardController::choose_service(&mut session, &catalog, "hot-springs-pass").unwrap();
        WizardController::confirm(
            &mut session,
            &slots,
            &catalog,
            vec![OptionSelection::choice("towel_service", "included")],
        )
        .unwrap();

        WizardController::go_to_summary(&mut session).unwrap();
        WizardController::edit(&mut session).unwrap();

        assert_eq!(session.itinerary.days[0].allocations.len(), 1);
    }

    #[test]
    fn test_placement_happy_path_commits_exactly_one_allocation() {
        let slots = TimeSlotCatalog::standard_day();
        let catalog = InMemoryServiceCatalog::seeded();
        let mut session = session_at_day_planning();

        WizardController::select_slot(&mut session, &slots, 0, 0).unwrap();
        assert_eq!(session.wizard.placement.name(), "slot_chosen");

        WizardController::choose_service(&mut session, &catalog, "sunset-dinner-cruise").unwrap();
        assert_eq!(session.wizard.placement.name(), "service_chosen");

        let allocation = WizardController::confirm(
            &mut session,
            &slots,
            &catalog,
            vec![
                OptionSelection::choice("meal_type", "dinner"),
                OptionSelection::quantity("guest_count", 6),
            ],
        )
        .unwrap();

        assert_eq!(allocation.price, 150.0);
        assert_eq!(session.wizard.placement, PlacementState::Idle);
        assert_eq!(session.itinerary.days[0].allocations.len(), 1);
    }

    #[test]
    fn test_cancel_discards_selection_without_side_effects() {
        let slots = TimeSlotCatalog::standard_day();
        let mut session = session_at_day_planning();

        WizardController::select_slot(&mut session, &slots, 0, 3).unwrap();
        WizardController::cancel(&mut session).unwrap();

        assert_eq!(session.wizard.placement, PlacementState::Idle);
        assert!(session.itinerary.days[0].allocations.is_empty());
        assert!(
            SchedulingEngine::is_slot_range_free(&session.itinerary, 0, 3, 1).unwrap(),
            "cancelled slot must still be free"
        );
    }

    #[test]
    fn test_cancel_from_idle_is_an_invalid_transition() {
        let mut session = session_at_day_planning();

        let err = WizardController::cancel(&mut session).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidStateTransition { .. }));
    }

    #[test]
    fn test_select_slot_on_an_occupied_slot_is_rejected() {
        let slots = TimeSlotCatalog::standard_day();
        let catalog = InMemoryServiceCatalog::seeded();
        let mut session = session_at_day_planning();

        // jeep tour covers slots 2 and 3
        WizardController::select_slot(&mut session, &slots, 0, 2).unwrap();
        WizardController::choose_service(&mut session, &catalog, "jeep-canyon-tour").unwrap();
        WizardController::confirm(&mut session, &slots, &catalog, vec![]).unwrap();

        let err = WizardController::select_slot(&mut session, &slots, 0, 3).unwrap_err();
        assert!(matches!(err, PlannerError::SlotConflict { .. }));
        assert_eq!(session.wizard.placement, PlacementState::Idle);

        WizardController::select_slot(&mut session, &slots, 0, 4).unwrap();
    }

    #[test]
    fn test_failed_confirm_stays_in_service_chosen() {
        let slots = TimeSlotCatalog::standard_day();
        let catalog = InMemoryServiceCatalog::seeded();
        let mut session = session_at_day_planning();

        // rafting needs 3 slots; starting at 7 runs past the 9-slot day
        WizardController::select_slot(&mut session, &slots, 0, 7).unwrap();
        WizardController::choose_service(&mut session, &catalog, "whitewater-rafting").unwrap();

        let err = WizardController::confirm(&mut session, &slots, &catalog, vec![]).unwrap_err();
        assert!(matches!(err, PlannerError::SlotOutOfRange { .. }));
        assert_eq!(session.wizard.placement.name(), "service_chosen");
        assert!(session.itinerary.days[0].allocations.is_empty());
    }

    #[test]
    fn test_choose_service_rejects_unknown_ids() {
        let slots = TimeSlotCatalog::standard_day();
        let catalog = InMemoryServiceCatalog::seeded();
        let mut session = session_at_day_planning();

        WizardController::select_slot(&mut session, &slots, 0, 0).unwrap();
        let err =
            WizardController::choose_service(&mut session, &catalog, "moon-landing").unwrap_err();

        assert_eq!(err, PlannerError::UnknownService("moon-landing".to_string()));
        assert_eq!(session.wizard.placement.name(), "slot_chosen");
    }

    #[test]
    fn test_day_management_clamps_active_day_and_placement() {
        let slots = TimeSlotCatalog::standard_day();
        let mut session = session_at_day_planning();

        WizardController::add_day(&mut session).unwrap();
        WizardController::select_day(&mut session, 1).unwrap();
        WizardController::select_slot(&mut session, &slots, 1, 0).unwrap();

        WizardController::remove_last_day(&mut session).unwrap();
        assert_eq!(session.wizard.active_day, 0);
        assert_eq!(session.wizard.placement, PlacementState::Idle);
    }

    #[test]
    fn test_day_management_outside_day_planning_is_rejected() {
        let mut session = PlannerSession::new(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());

        let err = WizardController::add_day(&mut session).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidStateTransition { .. }));
        assert_eq!(session.itinerary.day_count(), 1);
    }

    #[test]
    fn test_select_day_out_of_range() {
        let mut session = session_at_day_planning();

        let err = WizardController::select_day(&mut session, 5).unwrap_err();
        assert!(matches!(err, PlannerError::DayOutOfRange { .. }));
        assert_eq!(session.wizard.active_day, 0);
    }
}
