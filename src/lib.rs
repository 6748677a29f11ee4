// BMI Log - Core Library
// Exposes the calculation, classification and CSV log for the CLI and tests

pub mod error;
pub mod units;
pub mod bmi;
pub mod ranges;
pub mod record;
pub mod cli;

// Re-export commonly used types
pub use error::BmiError;
pub use units::{imperial_to_metric, Measurement, UnitSystem};
pub use bmi::{bmi, compute, format_value, round_to};
pub use ranges::{classify, find_range, BmiRange, Category, BMI_RANGES};
pub use record::{load_records, MeasurementRecord, RecordWriter, Subject};
pub use cli::{run, Args, Outcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
