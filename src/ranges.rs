// 🏷️ BMI Ranges - Classification table as data
// Ordered buckets, first match wins

use crate::error::BmiError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Underweight => "underweight",
            Category::Normal => "normal",
            Category::Overweight => "overweight",
            Category::Obese => "obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RANGE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiRange {
    pub category: Category,

    /// Inclusive lower bound
    pub lower: f64,

    /// Upper bound, None for the open-ended top range
    pub upper: Option<f64>,
}

impl BmiRange {
    /// Bounded ranges include BOTH ends, so a shared boundary matches
    /// two ranges and table order decides.
    pub fn contains(&self, value: f64) -> bool {
        match self.upper {
            None => value >= self.lower,
            Some(upper) => self.lower <= value && value <= upper,
        }
    }
}

/// Ordered lowest first. Boundary values go to the lower range.
pub static BMI_RANGES: [BmiRange; 4] = [
    BmiRange { category: Category::Underweight, lower: 0.0, upper: Some(18.5) },
    BmiRange { category: Category::Normal, lower: 18.5, upper: Some(25.0) },
    BmiRange { category: Category::Overweight, lower: 25.0, upper: Some(30.0) },
    BmiRange { category: Category::Obese, lower: 30.0, upper: None },
];

// ============================================================================
// CLASSIFIER
// ============================================================================

/// First range containing the value, if any
pub fn find_range(value: f64) -> Option<&'static BmiRange> {
    BMI_RANGES.iter().find(|range| range.contains(value))
}

/// Category for a BMI value. Negative and NaN values match nothing.
pub fn classify(value: f64) -> Result<Category, BmiError> {
    find_range(value)
        .map(|range| range.category)
        .ok_or(BmiError::Unclassified(value))
}
