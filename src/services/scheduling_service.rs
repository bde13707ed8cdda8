use uuid::Uuid;

use crate::models::error::PlannerError;
use crate::models::itinerary::{Itinerary, ServiceAllocation};
use crate::models::service::{OptionSelection, ServiceCatalogEntry};
use crate::models::slots::TimeSlotCatalog;
use crate::services::pricing_service::PricingService;

/// Owns the rules for placing services into day plans.
///
/// The itinerary is always passed in explicitly; the engine keeps no state of
/// its own. Every mutating operation either fully applies or leaves the
/// itinerary untouched, and no sequence of calls can leave two allocations on
/// the same day with intersecting slot ranges.
pub struct SchedulingEngine;

impl SchedulingEngine {
    /// Append a new empty day dated one day after the current last day.
    /// The engine imposes no upper bound on day count.
    pub fn add_day(itinerary: &mut Itinerary) {
        let day = itinerary.next_day();
        itinerary.days.push(day);
    }

    /// Drop the last day. Days are only ever removed from the end so dates
    /// stay contiguous.
    pub fn remove_last_day(itinerary: &mut Itinerary) -> Result<(), PlannerError> {
        if itinerary.days.len() <= 1 {
            return Err(PlannerError::CannotRemoveOnlyDay);
        }

        itinerary.days.pop();
        Ok(())
    }

    /// True iff no allocation on `day` overlaps `[start, start + duration)`.
    pub fn is_slot_range_free(
        itinerary: &Itinerary,
        day: usize,
        start: usize,
        duration: usize,
    ) -> Result<bool, PlannerError> {
        let plan = Self::day(itinerary, day)?;

        Ok(plan
            .allocations
            .iter()
            .all(|alloc| !alloc.overlaps(start, duration)))
    }

    /// Price and place a service. Fails with `SlotConflict` when the range is
    /// taken and `SlotOutOfRange` when the service would run past the last
    /// slot of the day; either failure leaves the day plan unchanged.
    pub fn allocate(
        itinerary: &mut Itinerary,
        slots: &TimeSlotCatalog,
        day: usize,
        service: &ServiceCatalogEntry,
        start_slot: usize,
        selections: Vec<OptionSelection>,
    ) -> Result<ServiceAllocation, PlannerError> {
        let price = PricingService::price(service.base_price, &service.option_groups, &selections)?;

        if !Self::is_slot_range_free(itinerary, day, start_slot, service.duration_slots)? {
            let day_number = itinerary.days[day].day_number;
            return Err(PlannerError::SlotConflict {
                day: day_number,
                start: start_slot,
                end: start_slot + service.duration_slots,
            });
        }

        if start_slot + service.duration_slots > slots.count() {
            return Err(PlannerError::SlotOutOfRange {
                start: start_slot,
                end: start_slot + service.duration_slots,
                slot_count: slots.count(),
            });
        }

        let allocation = ServiceAllocation {
            id: Uuid::new_v4(),
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            start_slot,
            duration_slots: service.duration_slots,
            price,
            selected_options: selections,
        };

        // insertion order; display order is sorted later by the summary
        itinerary.days[day].allocations.push(allocation.clone());

        Ok(allocation)
    }

    /// Remove an allocation by id. Removing an id that is not present is a
    /// no-op, not an error.
    pub fn deallocate(
        itinerary: &mut Itinerary,
        day: usize,
        allocation_id: Uuid,
    ) -> Result<(), PlannerError> {
        let plan = Self::day_mut(itinerary, day)?;
        plan.allocations.retain(|alloc| alloc.id != allocation_id);

        Ok(())
    }

    pub fn day_total(itinerary: &Itinerary, day: usize) -> Result<f64, PlannerError> {
        let plan = Self::day(itinerary, day)?;
        let total: f64 = plan.allocations.iter().map(|alloc| alloc.price).sum();

        Ok(PricingService::round_to_cents(total))
    }

    pub fn trip_total(itinerary: &Itinerary) -> f64 {
        let total: f64 = itinerary
            .days
            .iter()
            .flat_map(|day| day.allocations.iter())
            .map(|alloc| alloc.price)
            .sum();

        PricingService::round_to_cents(total)
    }

    fn day(itinerary: &Itinerary, day: usize) -> Result<&crate::models::itinerary::DayPlan, PlannerError> {
        itinerary.days.get(day).ok_or(PlannerError::DayOutOfRange {
            index: day,
            day_count: itinerary.days.len(),
        })
    }

    fn day_mut(
        itinerary: &mut Itinerary,
        day: usize,
    ) -> Result<&mut crate::models::itinerary::DayPlan, PlannerError> {
        let day_count = itinerary.days.len();

        itinerary
            .days
            .get_mut(day)
            .ok_or(PlannerError::DayOutOfRange {
                index: day,
                day_count,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
    }

    fn service(id: &str, base_price: f64, duration_slots: usize) -> ServiceCatalogEntry {
        ServiceCatalogEntry {
            id: id.to_string(),
            name: format!("{} tour", id),
            description: String::new(),
            category: "tour".to_string(),
            package_type: "standard".to_string(),
            base_price,
            duration_slots,
            tags: vec![],
            option_groups: vec![],
        }
    }

    fn assert_no_overlaps(itinerary: &Itinerary) {
        for day in &itinerary.days {
            for (i, a) in day.allocations.iter().enumerate() {
                for b in day.allocations.iter().skip(i + 1) {
                    assert!(
                        !a.overlaps(b.start_slot, b.duration_slots),
                        "allocations {} and {} overlap on day {}",
                        a.service_name,
                        b.service_name,
                        day.day_number
                    );
                }
            }
        }
    }

    #[test]
    fn test_two_slot_service_blocks_inner_slot_but_not_next_free_one() {
        // 9 slots, a 2-slot service at index 2 occupies 2 and 3
        let slots = TimeSlotCatalog::standard_day();
        let mut itinerary = Itinerary::new(start_date());

        SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("jeep", 120.0, 2), 2, vec![])
            .unwrap();

        let conflict =
            SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("spa", 60.0, 1), 3, vec![])
                .unwrap_err();
        assert!(matches!(conflict, PlannerError::SlotConflict { .. }));
        assert_eq!(itinerary.days[0].allocations.len(), 1);

        SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("spa", 60.0, 1), 4, vec![])
            .unwrap();
        assert_eq!(itinerary.days[0].allocations.len(), 2);
        assert_no_overlaps(&itinerary);
    }

    #[test]
    fn test_allocation_past_last_slot_is_rejected_without_truncation() {
        let slots = TimeSlotCatalog::standard_day();
        let mut itinerary = Itinerary::new(start_date());

        let err =
            SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("raft", 90.0, 3), 7, vec![])
                .unwrap_err();

        assert!(matches!(err, PlannerError::SlotOutOfRange { .. }));
        assert!(itinerary.days[0].allocations.is_empty());
    }

    #[test]
    fn test_no_overlap_invariant_survives_allocate_and_deallocate_sequences() {
        let slots = TimeSlotCatalog::standard_day();
        let mut itinerary = Itinerary::new(start_date());

        let first =
            SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("a", 10.0, 2), 0, vec![])
                .unwrap();
        SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("b", 20.0, 2), 4, vec![])
            .unwrap();
        assert_no_overlaps(&itinerary);

        SchedulingEngine::deallocate(&mut itinerary, 0, first.id).unwrap();

        // the freed range is usable again
        SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("c", 30.0, 3), 0, vec![])
            .unwrap();
        assert_no_overlaps(&itinerary);

        // but extending into the still-occupied range is not
        let err =
            SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("d", 40.0, 2), 3, vec![])
                .unwrap_err();
        assert!(matches!(err, PlannerError::SlotConflict { .. }));
        assert_no_overlaps(&itinerary);
    }

    #[test]
    fn test_deallocate_unknown_id_is_a_no_op() {
        let slots = TimeSlotCatalog::standard_day();
        let mut itinerary = Itinerary::new(start_date());

        SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("a", 10.0, 1), 0, vec![])
            .unwrap();

        SchedulingEngine::deallocate(&mut itinerary, 0, Uuid::new_v4()).unwrap();
        assert_eq!(itinerary.days[0].allocations.len(), 1);
    }

    #[test]
    fn test_same_slot_on_different_days_never_conflicts() {
        let slots = TimeSlotCatalog::standard_day();
        let mut itinerary = Itinerary::new(start_date());
        SchedulingEngine::add_day(&mut itinerary);

        SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("a", 10.0, 2), 2, vec![])
            .unwrap();
        SchedulingEngine::allocate(&mut itinerary, &slots, 1, &service("b", 20.0, 2), 2, vec![])
            .unwrap();

        assert_no_overlaps(&itinerary);
    }

    #[test]
    fn test_added_days_stay_contiguous() {
        let mut itinerary = Itinerary::new(start_date());
        SchedulingEngine::add_day(&mut itinerary);
        SchedulingEngine::add_day(&mut itinerary);

        let numbers: Vec<u32> = itinerary.days.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(
            itinerary.days[2].date,
            NaiveDate::from_ymd_opt(2025, 7, 6).unwrap()
        );
    }

    #[test]
    fn test_remove_last_day_guard() {
        let mut itinerary = Itinerary::new(start_date());

        let err = SchedulingEngine::remove_last_day(&mut itinerary).unwrap_err();
        assert_eq!(err, PlannerError::CannotRemoveOnlyDay);
        assert_eq!(itinerary.day_count(), 1);

        SchedulingEngine::add_day(&mut itinerary);
        SchedulingEngine::remove_last_day(&mut itinerary).unwrap();
        assert_eq!(itinerary.day_count(), 1);
    }

    #[test]
    fn test_totals_are_sums_of_their_parts() {
        let slots = TimeSlotCatalog::standard_day();
        let mut itinerary = Itinerary::new(start_date());
        SchedulingEngine::add_day(&mut itinerary);

        // day 1: 150, day 2: 80
        SchedulingEngine::allocate(&mut itinerary, &slots, 0, &service("cruise", 150.0, 2), 0, vec![])
            .unwrap();
        SchedulingEngine::allocate(&mut itinerary, &slots, 1, &service("spa", 80.0, 1), 3, vec![])
            .unwrap();

        assert_eq!(SchedulingEngine::day_total(&itinerary, 0).unwrap(), 150.0);
        assert_eq!(SchedulingEngine::day_total(&itinerary, 1).unwrap(), 80.0);
        assert_eq!(SchedulingEngine::trip_total(&itinerary), 230.0);

        let by_allocation: f64 = itinerary
            .days
            .iter()
            .flat_map(|d| d.allocations.iter())
            .map(|a| a.price)
            .sum();
        assert_eq!(SchedulingEngine::trip_total(&itinerary), by_allocation);
    }

    #[test]
    fn test_unknown_day_is_reported() {
        let itinerary = Itinerary::new(start_date());

        let err = SchedulingEngine::day_total(&itinerary, 3).unwrap_err();
        assert!(matches!(err, PlannerError::DayOutOfRange { .. }));
    }
}
