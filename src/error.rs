// ⚠️ Domain Errors
// Failures that must stop the run instead of printing a wrong category

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BmiError {
    /// Height or weight is zero, negative or not a number
    #[error("Invalid {field}: {value} (must be a positive number)")]
    InvalidMeasurement { field: &'static str, value: f64 },

    #[error("BMI is not a finite number: {0}")]
    NonFiniteBmi(f64),

    /// No range matched the value
    #[error("BMI value {0} does not fall into any range")]
    Unclassified(f64),
}
