use crate::models::service::{
    AdjustmentRule, OptionGroup, PricedValue, ServiceCatalogEntry,
};

/// Read-only lookup into the bookable-service catalog. The planning core
/// only ever reads entries; where the catalog comes from is someone else's
/// problem.
pub trait ServiceCatalog {
    fn by_id(&self, id: &str) -> Option<&ServiceCatalogEntry>;
    fn by_package_type(&self, package_type: &str) -> Vec<&ServiceCatalogEntry>;
    fn category_of(&self, id: &str) -> Option<&str>;
    fn entries(&self) -> &[ServiceCatalogEntry];
}

/// Catalog held in memory, seeded with a demo inventory so the server and
/// tests run without any backing store.
pub struct InMemoryServiceCatalog {
    entries: Vec<ServiceCatalogEntry>,
}

impl InMemoryServiceCatalog {
    pub fn new(entries: Vec<ServiceCatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn seeded() -> Self {
        Self::new(seed_entries())
    }
}

impl ServiceCatalog for InMemoryServiceCatalog {
    fn by_id(&self, id: &str) -> Option<&ServiceCatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn by_package_type(&self, package_type: &str) -> Vec<&ServiceCatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.package_type == package_type)
            .collect()
    }

    fn category_of(&self, id: &str) -> Option<&str> {
        self.by_id(id).map(|entry| entry.category.as_str())
    }

    fn entries(&self) -> &[ServiceCatalogEntry] {
        &self.entries
    }
}

fn seed_entries() -> Vec<ServiceCatalogEntry> {
    vec![
        ServiceCatalogEntry {
            id: "jeep-canyon-tour".to_string(),
            name: "Jeep Canyon Tour".to_string(),
            description: "Guided off-road tour through the red rock canyons.".to_string(),
            category: "adventure".to_string(),
            package_type: "standard".to_string(),
            base_price: 120.0,
            duration_slots: 2,
            tags: vec!["adventure".to_string(), "outdoors".to_string(), "family".to_string()],
            option_groups: vec![OptionGroup {
                key: "guest_count".to_string(),
                label: "Guests".to_string(),
                rule: AdjustmentRule::ThresholdTiered {
                    threshold: 4,
                    per_unit: 25.0,
                },
            }],
        },
        ServiceCatalogEntry {
            id: "sunset-dinner-cruise".to_string(),
            name: "Sunset Dinner Cruise".to_string(),
            description: "Evening cruise with a full-course meal on board.".to_string(),
            category: "dining".to_string(),
            package_type: "premium".to_string(),
            base_price: 100.0,
            duration_slots: 2,
            tags: vec!["romantic".to_string(), "dining".to_string(), "relax".to_string()],
            option_groups: vec![
                OptionGroup {
                    key: "meal_type".to_string(),
                    label: "Meal".to_string(),
                    rule: AdjustmentRule::Additive {
                        amounts: vec![
                            PricedValue {
                                value: "lunch".to_string(),
                                amount: 10.0,
                            },
                            PricedValue {
                                value: "dinner".to_string(),
                                amount: 30.0,
                            },
                        ],
                    },
                },
                OptionGroup {
                    key: "guest_count".to_string(),
                    label: "Guests".to_string(),
                    rule: AdjustmentRule::ThresholdTiered {
                        threshold: 4,
                        per_unit: 10.0,
                    },
                },
            ],
        },
        ServiceCatalogEntry {
            id: "harbor-shuttle".to_string(),
            name: "Harbor Shuttle".to_string(),
            description: "Scheduled shuttle between the resort and the harbor.".to_string(),
            category: "transport".to_string(),
            package_type: "standard".to_string(),
            base_price: 25.0,
            duration_slots: 1,
            tags: vec!["transport".to_string()],
            option_groups: vec![OptionGroup {
                key: "round_trip".to_string(),
                label: "Round trip".to_string(),
                rule: AdjustmentRule::Doubling,
            }],
        },
        ServiceCatalogEntry {
            id: "whitewater-rafting".to_string(),
            name: "Whitewater Rafting".to_string(),
            description: "Half-day rafting run with certified guides.".to_string(),
            category: "adventure".to_string(),
            package_type: "premium".to_string(),
            base_price: 95.0,
            duration_slots: 3,
            tags: vec!["adventure".to_string(), "friends".to_string(), "outdoors".to_string()],
            option_groups: vec![OptionGroup {
                key: "guest_count".to_string(),
                label: "Guests".to_string(),
                rule: AdjustmentRule::ThresholdTiered {
                    threshold: 6,
                    per_unit: 15.0,
                },
            }],
        },
        ServiceCatalogEntry {
            id: "hot-springs-pass".to_string(),
            name: "Hot Springs Day Pass".to_string(),
            description: "All-day access to the thermal pools and spa.".to_string(),
            category: "wellness".to_string(),
            package_type: "standard".to_string(),
            base_price: 45.0,
            duration_slots: 1,
            tags: vec!["relax".to_string(), "wellness".to_string(), "couple".to_string()],
            option_groups: vec![OptionGroup {
                key: "towel_service".to_string(),
                label: "Towel service".to_string(),
                rule: AdjustmentRule::Additive {
                    amounts: vec![
                        PricedValue {
                            value: "included".to_string(),
                            amount: 0.0,
                        },
                        PricedValue {
                            value: "premium".to_string(),
                            amount: 8.0,
                        },
                    ],
                },
            }],
        },
        ServiceCatalogEntry {
            id: "kids-ranch-morning".to_string(),
            name: "Kids Ranch Morning".to_string(),
            description: "Supervised petting ranch and pony rides for children.".to_string(),
            category: "family".to_string(),
            package_type: "standard".to_string(),
            base_price: 35.0,
            duration_slots: 2,
            tags: vec!["family".to_string(), "kids".to_string()],
            option_groups: vec![OptionGroup {
                key: "guest_count".to_string(),
                label: "Children".to_string(),
                rule: AdjustmentRule::ThresholdTiered {
                    threshold: 2,
                    per_unit: 12.0,
                },
            }],
        },
    ]
}
