use crate::models::error::PlannerError;
use crate::models::itinerary::Itinerary;
use crate::models::slots::TimeSlotCatalog;
use crate::models::summary::{DaySummary, ItinerarySummary, SummaryLine};
use crate::services::scheduling_service::SchedulingEngine;

pub struct SummaryService;

impl SummaryService {
    /// Project the itinerary into its review screen: day and service counts,
    /// totals, and a per-day breakdown ordered by start slot (storage order
    /// is insertion order and may differ). Read-only.
    pub fn project(
        itinerary: &Itinerary,
        slots: &TimeSlotCatalog,
    ) -> Result<ItinerarySummary, PlannerError> {
        let mut days = Vec::with_capacity(itinerary.days.len());

        for (index, plan) in itinerary.days.iter().enumerate() {
            let mut services = Vec::with_capacity(plan.allocations.len());

            for alloc in &plan.allocations {
                services.push(SummaryLine {
                    allocation_id: alloc.id,
                    service_name: alloc.service_name.clone(),
                    slot_label: slots.label_of(alloc.start_slot)?.to_string(),
                    start_slot: alloc.start_slot,
                    duration_slots: alloc.duration_slots,
                    price: alloc.price,
                });
            }

            services.sort_by_key(|line| line.start_slot);

            days.push(DaySummary {
                day_number: plan.day_number,
                date: plan.date,
                day_total: SchedulingEngine::day_total(itinerary, index)?,
                services,
            });
        }

        Ok(ItinerarySummary {
            total_days: itinerary.days.len(),
            total_services: itinerary.days.iter().map(|d| d.allocations.len()).sum(),
            trip_total: SchedulingEngine::trip_total(itinerary),
            days,
        })
    }
}
