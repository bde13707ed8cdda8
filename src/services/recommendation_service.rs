use crate::models::itinerary::TravelerProfile;
use crate::models::service::ServiceCatalogEntry;

/// Turns a trip purpose and the service catalog into an ordered shortlist.
/// Pure and deterministic for identical inputs; the wizard trusts the output
/// as an ordered, de-duplicated subset of the catalog.
pub trait RecommendationProvider {
    fn recommend(
        &self,
        profile: TravelerProfile,
        catalog: &[ServiceCatalogEntry],
    ) -> Vec<ServiceCatalogEntry>;
}

/// Tag-weight scorer: each profile carries a fixed set of weighted tags, a
/// service scores the sum of the weights of the tags it matches, zero-score
/// services drop out, and ties keep catalog order.
pub struct ProfileRecommendationService;

impl ProfileRecommendationService {
    fn tag_weights(profile: TravelerProfile) -> &'static [(&'static str, f32)] {
        match profile {
            TravelerProfile::Family => {
                &[("family", 3.0), ("kids", 2.5), ("outdoors", 1.0)]
            }
            TravelerProfile::Couple => {
                &[("couple", 3.0), ("romantic", 2.5), ("dining", 1.5), ("relax", 1.0)]
            }
            TravelerProfile::Friends => {
                &[("friends", 3.0), ("adventure", 2.0), ("outdoors", 1.0)]
            }
            TravelerProfile::Relax => {
                &[("relax", 3.0), ("wellness", 2.5), ("dining", 1.0)]
            }
        }
    }

    fn score(profile: TravelerProfile, entry: &ServiceCatalogEntry) -> f32 {
        Self::tag_weights(profile)
            .iter()
            .filter(|(tag, _)| entry.tags.iter().any(|t| t == tag))
            .map(|(_, weight)| weight)
            .sum()
    }
}

impl RecommendationProvider for ProfileRecommendationService {
    fn recommend(
        &self,
        profile: TravelerProfile,
        catalog: &[ServiceCatalogEntry],
    ) -> Vec<ServiceCatalogEntry> {
        let mut seen = std::collections::HashSet::new();
        let mut scored: Vec<(f32, &ServiceCatalogEntry)> = catalog
            .iter()
            .filter(|entry| seen.insert(entry.id.clone()))
            .map(|entry| (Self::score(profile, entry), entry))
            .filter(|(score, _)| *score > 0.0)
            .collect();

        // stable sort keeps catalog order among equal scores
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        scored.into_iter().map(|(_, entry)| entry.clone()).collect()
    }
}
