//! Input model for the Rent vs Buy Decision Agent
//!
//! This module defines the immutable input snapshot consumed by the decision
//! engine, the per-field numeric bounds, and the silent clamping rules. The
//! input layer corrects out-of-range values rather than signaling errors;
//! the engine downstream never sees an invalid snapshot.

use serde::{Deserialize, Serialize};

/// Minimum downpayment as a fraction of the purchase price (15%)
pub const MIN_DOWNPAYMENT_RATIO: f64 = 0.15;

/// Inclusive numeric bounds for a single input field
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldBounds {
    /// Minimum value (inclusive)
    pub min: f64,
    /// Maximum value (inclusive)
    pub max: f64,
}

impl FieldBounds {
    /// Create bounds over an inclusive range
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check whether a value is within bounds
    pub fn check(&self, value: f64) -> BoundsCheck {
        if value < self.min {
            BoundsCheck::BelowMinimum {
                value,
                min: self.min,
            }
        } else if value > self.max {
            BoundsCheck::AboveMaximum {
                value,
                max: self.max,
            }
        } else {
            BoundsCheck::WithinBounds
        }
    }

    /// Clamp a value into the bounds.
    ///
    /// NaN collapses to the lower bound; infinities clamp like any other
    /// out-of-range value. Never panics, even with degenerate bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    /// Get a description of the bounds
    pub fn describe(&self) -> String {
        format!("[{}, {}]", self.min, self.max)
    }
}

/// Result of a bounds check
#[derive(Debug, Clone)]
pub enum BoundsCheck {
    WithinBounds,
    BelowMinimum { value: f64, min: f64 },
    AboveMaximum { value: f64, max: f64 },
}

/// Declared bounds and slider granularity for one input field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as it appears in input files and API requests
    pub field: String,
    pub bounds: FieldBounds,
    /// Input granularity (slider step for form clients)
    pub step: f64,
    pub default: f64,
    pub description: String,
}

/// The six input parameters for a rent-vs-buy decision
///
/// All monetary values are in the same currency unit; rates are percentages.
/// Construct via [`DecisionInputs::default`] and the setters, or deserialize
/// and call [`DecisionInputs::clamped`] to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionInputs {
    /// Monthly rent paid today
    pub current_rent: f64,
    /// Purchase price of the property
    pub purchase_price: f64,
    /// Cash paid upfront (at least 15% of the price, at most the price)
    pub downpayment: f64,
    /// Annual mortgage interest rate, percent
    pub interest_rate: f64,
    /// Monthly association/maintenance fee
    pub monthly_fee: f64,
    /// Expected cumulative price change over the reference period, percent
    pub price_change: f64,
}

impl Default for DecisionInputs {
    fn default() -> Self {
        Self {
            current_rent: 15_000.0,
            purchase_price: 3_000_000.0,
            downpayment: 450_000.0,
            interest_rate: 3.5,
            monthly_fee: 5_000.0,
            price_change: 0.0,
        }
    }
}

impl DecisionInputs {
    /// Bounds for `current_rent`
    pub const RENT_BOUNDS: FieldBounds = FieldBounds {
        min: 0.0,
        max: 50_000.0,
    };
    /// Bounds for `purchase_price`
    pub const PRICE_BOUNDS: FieldBounds = FieldBounds {
        min: 0.0,
        max: 25_000_000.0,
    };
    /// Bounds for `interest_rate` (percent)
    pub const RATE_BOUNDS: FieldBounds = FieldBounds {
        min: 0.0,
        max: 10.0,
    };
    /// Bounds for `monthly_fee`
    pub const FEE_BOUNDS: FieldBounds = FieldBounds {
        min: 0.0,
        max: 50_000.0,
    };
    /// Bounds for `price_change` (percent)
    pub const PRICE_CHANGE_BOUNDS: FieldBounds = FieldBounds {
        min: -100.0,
        max: 100.0,
    };

    /// Minimum allowed downpayment for the current purchase price
    pub fn min_downpayment(&self) -> f64 {
        self.purchase_price * MIN_DOWNPAYMENT_RATIO
    }

    /// Downpayment bounds for the current purchase price
    pub fn downpayment_bounds(&self) -> FieldBounds {
        FieldBounds::new(self.min_downpayment(), self.purchase_price)
    }

    /// The downpayment the engine actually uses: raised to the 15%
    /// minimum and capped at the full purchase price.
    pub fn effective_downpayment(&self) -> f64 {
        self.downpayment_bounds().clamp(self.downpayment)
    }

    /// Return a copy with every field silently clamped into its bounds.
    ///
    /// The downpayment is clamped last so its bounds reflect the already
    /// clamped purchase price.
    pub fn clamped(&self) -> Self {
        let mut inputs = Self {
            current_rent: Self::RENT_BOUNDS.clamp(self.current_rent),
            purchase_price: Self::PRICE_BOUNDS.clamp(self.purchase_price),
            downpayment: self.downpayment,
            interest_rate: Self::RATE_BOUNDS.clamp(self.interest_rate),
            monthly_fee: Self::FEE_BOUNDS.clamp(self.monthly_fee),
            price_change: Self::PRICE_CHANGE_BOUNDS.clamp(self.price_change),
        };
        inputs.downpayment = inputs.downpayment_bounds().clamp(inputs.downpayment);
        inputs
    }

    /// Change the purchase price and re-clamp the downpayment.
    ///
    /// If the existing downpayment falls below the new 15% minimum it is
    /// raised to the minimum; if it exceeds the new price it is lowered to
    /// the price. In-range downpayments are left untouched.
    pub fn set_purchase_price(&mut self, price: f64) {
        self.purchase_price = Self::PRICE_BOUNDS.clamp(price);
        let min_down = self.min_downpayment();
        if self.downpayment < min_down {
            self.downpayment = min_down;
        } else if self.downpayment > self.purchase_price {
            self.downpayment = self.purchase_price;
        }
    }

    /// Declared field specs (bounds, step, default) for every input
    pub fn field_specs() -> Vec<FieldSpec> {
        let defaults = Self::default();
        vec![
            FieldSpec {
                field: "current_rent".to_string(),
                bounds: Self::RENT_BOUNDS,
                step: 100.0,
                default: defaults.current_rent,
                description: "Monthly rent paid today".to_string(),
            },
            FieldSpec {
                field: "purchase_price".to_string(),
                bounds: Self::PRICE_BOUNDS,
                step: 50_000.0,
                default: defaults.purchase_price,
                description: "Purchase price of the property".to_string(),
            },
            FieldSpec {
                field: "downpayment".to_string(),
                // Bounds depend on the purchase price; published for the defaults
                bounds: defaults.downpayment_bounds(),
                step: 10_000.0,
                default: defaults.downpayment,
                description: "Cash paid upfront (min 15% of price)".to_string(),
            },
            FieldSpec {
                field: "interest_rate".to_string(),
                bounds: Self::RATE_BOUNDS,
                step: 0.1,
                default: defaults.interest_rate,
                description: "Annual mortgage interest rate, percent".to_string(),
            },
            FieldSpec {
                field: "monthly_fee".to_string(),
                bounds: Self::FEE_BOUNDS,
                step: 100.0,
                default: defaults.monthly_fee,
                description: "Monthly association/maintenance fee".to_string(),
            },
            FieldSpec {
                field: "price_change".to_string(),
                bounds: Self::PRICE_CHANGE_BOUNDS,
                step: 0.1,
                default: defaults.price_change,
                description: "Expected cumulative price change, percent".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_check() {
        let bounds = FieldBounds::new(0.0, 100.0);
        assert!(matches!(bounds.check(50.0), BoundsCheck::WithinBounds));
        assert!(matches!(bounds.check(0.0), BoundsCheck::WithinBounds));
        assert!(matches!(bounds.check(100.0), BoundsCheck::WithinBounds));
        assert!(matches!(bounds.check(-1.0), BoundsCheck::BelowMinimum { .. }));
        assert!(matches!(bounds.check(101.0), BoundsCheck::AboveMaximum { .. }));
    }

    #[test]
    fn test_bounds_describe() {
        let bounds = FieldBounds::new(-100.0, 100.0);
        assert_eq!(bounds.describe(), "[-100, 100]");
    }

    #[test]
    fn test_defaults() {
        let inputs = DecisionInputs::default();
        assert_eq!(inputs.current_rent, 15_000.0);
        assert_eq!(inputs.purchase_price, 3_000_000.0);
        assert_eq!(inputs.downpayment, 450_000.0);
        assert_eq!(inputs.interest_rate, 3.5);
        assert_eq!(inputs.monthly_fee, 5_000.0);
        assert_eq!(inputs.price_change, 0.0);
    }

    #[test]
    fn test_effective_downpayment_raised_to_minimum() {
        let inputs = DecisionInputs {
            downpayment: 0.0,
            ..Default::default()
        };
        assert_eq!(inputs.effective_downpayment(), 450_000.0);
    }

    #[test]
    fn test_effective_downpayment_capped_at_price() {
        let inputs = DecisionInputs {
            purchase_price: 1_000_000.0,
            downpayment: 2_000_000.0,
            ..Default::default()
        };
        assert_eq!(inputs.effective_downpayment(), 1_000_000.0);
    }

    #[test]
    fn test_clamped_corrects_out_of_range_fields() {
        let raw = DecisionInputs {
            current_rent: 99_999.0,
            purchase_price: 30_000_000.0,
            downpayment: -5.0,
            interest_rate: 42.0,
            monthly_fee: -1.0,
            price_change: 250.0,
        };
        let inputs = raw.clamped();
        assert_eq!(inputs.current_rent, 50_000.0);
        assert_eq!(inputs.purchase_price, 25_000_000.0);
        assert_eq!(inputs.interest_rate, 10.0);
        assert_eq!(inputs.monthly_fee, 0.0);
        assert_eq!(inputs.price_change, 100.0);
        // Downpayment clamps against the already clamped price
        assert_eq!(inputs.downpayment, 25_000_000.0 * MIN_DOWNPAYMENT_RATIO);
    }

    #[test]
    fn test_clamp_handles_non_finite_values() {
        let bounds = FieldBounds::new(0.0, 100.0);
        assert_eq!(bounds.clamp(f64::NAN), 0.0);
        assert_eq!(bounds.clamp(f64::INFINITY), 100.0);
        assert_eq!(bounds.clamp(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_clamped_corrects_nan_fields() {
        let inputs = DecisionInputs {
            purchase_price: f64::NAN,
            downpayment: f64::NAN,
            current_rent: f64::INFINITY,
            ..Default::default()
        }
        .clamped();
        assert_eq!(inputs.purchase_price, 0.0);
        assert_eq!(inputs.downpayment, 0.0);
        assert_eq!(inputs.current_rent, 50_000.0);
    }

    #[test]
    fn test_clamped_nan_downpayment_falls_to_minimum() {
        let inputs = DecisionInputs {
            downpayment: f64::NAN,
            ..Default::default()
        }
        .clamped();
        assert_eq!(inputs.downpayment, 450_000.0);
    }

    #[test]
    fn test_set_purchase_price_nan_collapses_to_zero() {
        let mut inputs = DecisionInputs::default();
        inputs.set_purchase_price(f64::NAN);
        assert_eq!(inputs.purchase_price, 0.0);
        assert_eq!(inputs.downpayment, 0.0);
    }

    #[test]
    fn test_price_change_raises_downpayment() {
        let mut inputs = DecisionInputs {
            purchase_price: 1_000_000.0,
            downpayment: 150_000.0,
            ..Default::default()
        };
        inputs.set_purchase_price(2_000_000.0);
        assert_eq!(inputs.downpayment, 300_000.0);
    }

    #[test]
    fn test_price_drop_lowers_downpayment() {
        let mut inputs = DecisionInputs {
            purchase_price: 3_000_000.0,
            downpayment: 1_000_000.0,
            ..Default::default()
        };
        inputs.set_purchase_price(500_000.0);
        assert_eq!(inputs.downpayment, 500_000.0);
    }

    #[test]
    fn test_price_change_keeps_in_range_downpayment() {
        let mut inputs = DecisionInputs {
            purchase_price: 3_000_000.0,
            downpayment: 600_000.0,
            ..Default::default()
        };
        inputs.set_purchase_price(2_000_000.0);
        assert_eq!(inputs.downpayment, 600_000.0);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let inputs: DecisionInputs =
            serde_json::from_str(r#"{"current_rent": 12000.0}"#).unwrap();
        assert_eq!(inputs.current_rent, 12_000.0);
        assert_eq!(inputs.purchase_price, 3_000_000.0);
    }

    #[test]
    fn test_field_specs_cover_all_inputs() {
        let specs = DecisionInputs::field_specs();
        assert_eq!(specs.len(), 6);
        assert!(specs.iter().any(|s| s.field == "price_change"));
    }
}
