use serde::{Deserialize, Serialize};

/// How one option group changes the price of a service.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdjustmentRule {
    /// A fixed amount per chosen value, e.g. meal upgrades. Negative amounts
    /// act as discounts.
    Additive { amounts: Vec<PricedValue> },

    /// Doubles the running total when selected (round-trip style options).
    Doubling,

    /// Charges `per_unit` for every unit above the included `threshold`,
    /// e.g. guest counts beyond the base party size.
    ThresholdTiered { threshold: u32, per_unit: f64 },
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PricedValue {
    pub value: String,
    pub amount: f64,
}

/// One configurable option group declared by a service. Declaration order
/// matters: pricing applies groups in the order the catalog lists them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OptionGroup {
    pub key: String,
    pub label: String,
    pub rule: AdjustmentRule,
}

/// A traveler's answer for one option group.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OptionSelection {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl OptionSelection {
    pub fn choice(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: Some(value.to_string()),
            quantity: None,
        }
    }

    pub fn quantity(key: &str, quantity: u32) -> Self {
        Self {
            key: key.to_string(),
            value: None,
            quantity: Some(quantity),
        }
    }

    pub fn flag(key: &str) -> Self {
        Self {
            key: key.to_string(),
            value: None,
            quantity: None,
        }
    }
}

/// A bookable service offered by the catalog.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceCatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub package_type: String,
    pub base_price: f64,
    /// Whole slot units, always >= 1.
    pub duration_slots: usize,
    pub tags: Vec<String>,
    pub option_groups: Vec<OptionGroup>,
}
