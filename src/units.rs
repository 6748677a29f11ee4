// 📏 Unit Conversion
// Imperial (feet, stone) → metric (meters, kilograms)

use crate::error::BmiError;

/// Feet per meter used by the conversion (approximate)
pub const FEET_PER_METER: f64 = 3.28;

/// Kilograms per stone used by the conversion (approximate)
pub const KG_PER_STONE: f64 = 6.35;

// ============================================================================
// UNIT SYSTEM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Height in meters, weight in kilograms
    #[default]
    Metric,
    /// Height in feet, weight in stone
    Imperial,
}

impl UnitSystem {
    pub fn from_flag(imperial: bool) -> Self {
        if imperial {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        }
    }
}

/// Converts (feet, stone) into (meters, kilograms). Lossy, no inverse.
pub fn imperial_to_metric(height_ft: f64, weight_st: f64) -> (f64, f64) {
    (height_ft / FEET_PER_METER, weight_st * KG_PER_STONE)
}

// ============================================================================
// MEASUREMENT
// ============================================================================

/// One invocation's height and weight, always held in metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub height_m: f64,
    pub weight_kg: f64,
}

impl Measurement {
    /// Build a metric measurement from raw input, converting imperial first.
    /// Rejects zero, negative and non-finite values.
    pub fn from_input(height: f64, weight: f64, units: UnitSystem) -> Result<Self, BmiError> {
        let (height_m, weight_kg) = match units {
            UnitSystem::Metric => (height, weight),
            UnitSystem::Imperial => imperial_to_metric(height, weight),
        };

        check_positive("height", height_m)?;
        check_positive("weight", weight_kg)?;

        Ok(Measurement { height_m, weight_kg })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), BmiError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BmiError::InvalidMeasurement { field, value })
    }
}
