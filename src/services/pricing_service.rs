use crate::models::error::PlannerError;
use crate::models::service::{AdjustmentRule, OptionGroup, OptionSelection};

pub struct PricingService;

impl PricingService {
    /// Price a service from its base price and the traveler's option
    /// selections, resolved against the service's declared option groups.
    ///
    /// Groups are applied in catalog-declaration order so the result does not
    /// depend on the order options were clicked. Selections whose key matches
    /// no declared group are ignored. At most one doubling adjustment applies
    /// per calculation; any further doubling selections are no-ops. The total
    /// is rounded to cents once, at the end.
    pub fn price(
        base: f64,
        groups: &[OptionGroup],
        selections: &[OptionSelection],
    ) -> Result<f64, PlannerError> {
        if !base.is_finite() || base < 0.0 {
            return Err(PlannerError::InvalidPriceInput(format!(
                "base price must be a non-negative finite number, got {}",
                base
            )));
        }

        let mut total = base;
        let mut doubled = false;

        for group in groups {
            let Some(selection) = selections.iter().find(|s| s.key == group.key) else {
                continue;
            };

            match &group.rule {
                AdjustmentRule::Additive { amounts } => {
                    let chosen = selection.value.as_deref().ok_or_else(|| {
                        PlannerError::InvalidPriceInput(format!(
                            "option '{}' requires a value",
                            group.key
                        ))
                    })?;

                    let priced = amounts.iter().find(|p| p.value == chosen).ok_or_else(|| {
                        PlannerError::InvalidPriceInput(format!(
                            "'{}' is not a valid value for option '{}'",
                            chosen, group.key
                        ))
                    })?;

                    if !priced.amount.is_finite() {
                        return Err(PlannerError::InvalidPriceInput(format!(
                            "option '{}' has a non-finite amount",
                            group.key
                        )));
                    }

                    total += priced.amount;
                }
                AdjustmentRule::Doubling => {
                    if !doubled {
                        total *= 2.0;
                        doubled = true;
                    }
                }
                AdjustmentRule::ThresholdTiered {
                    threshold,
                    per_unit,
                } => {
                    if !per_unit.is_finite() {
                        return Err(PlannerError::InvalidPriceInput(format!(
                            "option '{}' has a non-finite per-unit amount",
                            group.key
                        )));
                    }

                    let quantity = selection.quantity.unwrap_or(0);
                    if quantity > *threshold {
                        total += (quantity - threshold) as f64 * per_unit;
                    }
                }
            }
        }

        Ok(Self::round_to_cents(total))
    }

    /// Round once, at the end of a computation, never per step.
    pub fn round_to_cents(amount: f64) -> f64 {
        (amount * 100.0).round() / 100.0
    }
}
