// 🖥️ CLI - argument model and orchestration
// parse → convert → compute → classify → round → print or append

use crate::bmi::{compute, format_value, round_to};
use crate::ranges::{classify, Category};
use crate::record::{MeasurementRecord, RecordWriter, Subject, DEFAULT_MEASUREMENTS_DIR};
use crate::units::{Measurement, UnitSystem};
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

pub const WRITTEN_MESSAGE: &str = "Data has been written to the measurements folder";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "bmi",
    version,
    about = "Calculates body mass index (BMI)",
    allow_negative_numbers = true
)]
pub struct Args {
    /// The first name of the person being measured.
    #[arg(value_name = "FIRST_NAME")]
    pub first_name: String,

    /// The surname of the person being measured.
    pub surname: String,

    /// Height in meters
    pub height: f64,

    /// Weight in kilograms
    pub weight: f64,

    /// Uses imperial system instead of metric system for weight and height. (height: feet, weight: stone)
    #[arg(long)]
    pub imperial: bool,

    /// Rounds bmi value to given number of decimal places.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=15))]
    pub decimal: u32,

    /// Write to file (defaults to CSV file)
    #[arg(short, long)]
    pub write: bool,

    /// Folder holding one CSV file per person
    #[arg(long, value_name = "DIR", default_value = DEFAULT_MEASUREMENTS_DIR)]
    pub measurements_dir: PathBuf,
}

impl Args {
    pub fn units(&self) -> UnitSystem {
        UnitSystem::from_flag(self.imperial)
    }

    pub fn subject(&self) -> Subject {
        Subject::new(self.first_name.as_str(), self.surname.as_str())
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Printed { value: f64, category: Category },
    Written { value: f64, category: Category, path: PathBuf },
}

impl Outcome {
    pub fn value(&self) -> f64 {
        match self {
            Outcome::Printed { value, .. } | Outcome::Written { value, .. } => *value,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Outcome::Printed { category, .. } | Outcome::Written { category, .. } => *category,
        }
    }
}

pub fn result_sentence(value: f64, category: Category) -> String {
    format!(
        "Your BMI is {} which means you are {}.",
        format_value(value),
        category
    )
}

/// Run one invocation, writing the result line to `out`
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<Outcome> {
    let measurement = Measurement::from_input(args.height, args.weight, args.units())?;
    log::debug!(
        "Measurement ({:?}): {:.4} m, {:.4} kg",
        args.units(),
        measurement.height_m,
        measurement.weight_kg
    );

    let value = compute(&measurement)?;
    let category = classify(value)?;
    let rounded = round_to(value, args.decimal);
    log::debug!("BMI {} → {} (rounded {})", value, category, rounded);

    if args.write {
        let writer = RecordWriter::new(&args.measurements_dir);
        let record = MeasurementRecord::now(category, rounded);
        let path = writer.append(&args.subject(), &record)?;
        writeln!(out, "{}", WRITTEN_MESSAGE)?;
        Ok(Outcome::Written { value: rounded, category, path })
    } else {
        writeln!(out, "{}", result_sentence(rounded, category))?;
        Ok(Outcome::Printed { value: rounded, category })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BmiError;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["bmi", "John", "Smith", "1.8", "80"]);
        assert_eq!(args.first_name, "John");
        assert_eq!(args.surname, "Smith");
        assert_eq!(args.height, 1.8);
        assert_eq!(args.weight, 80.0);
        assert!(!args.imperial);
        assert!(!args.write);
        assert_eq!(args.decimal, 2);
        assert_eq!(args.measurements_dir, PathBuf::from("measurements"));
    }

    #[test]
    fn test_flags() {
        let args = parse(&["bmi", "John", "Smith", "5.9", "12", "--imperial", "--decimal", "0", "-w"]);
        assert!(args.imperial);
        assert!(args.write);
        assert_eq!(args.decimal, 0);
        assert_eq!(args.units(), UnitSystem::Imperial);

        let args = parse(&["bmi", "John", "Smith", "5.9", "12", "--write"]);
        assert!(args.write);
    }

    #[test]
    fn test_argument_errors() {
        assert!(Args::try_parse_from(["bmi", "John", "Smith", "tall", "80"]).is_err());
        assert!(Args::try_parse_from(["bmi", "John", "Smith", "1.8"]).is_err());
        assert!(Args::try_parse_from(["bmi", "John", "Smith", "1.8", "80", "--decimal", "-1"]).is_err());
        assert!(Args::try_parse_from(["bmi", "John", "Smith", "1.8", "80", "--decimal", "two"]).is_err());
    }

    #[test]
    fn test_negative_height_reaches_validation() {
        let args = parse(&["bmi", "John", "Smith", "-1.8", "80"]);
        let mut out = Vec::new();
        let err = run(&args, &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BmiError>(),
            Some(BmiError::InvalidMeasurement { field: "height", .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_height_fails() {
        let args = parse(&["bmi", "John", "Smith", "0", "80"]);
        assert!(run(&args, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_print_mode() {
        let args = parse(&["bmi", "John", "Smith", "1.8", "80"]);
        let mut out = Vec::new();
        let outcome = run(&args, &mut out).unwrap();

        assert_eq!(outcome, Outcome::Printed { value: 24.69, category: Category::Normal });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Your BMI is 24.69 which means you are normal.\n"
        );
    }

    #[test]
    fn test_zero_decimals_keeps_fraction() {
        let args = parse(&["bmi", "John", "Smith", "1.8", "80", "--decimal", "0"]);
        let mut out = Vec::new();
        run(&args, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Your BMI is 25.0 which means you are normal.\n"
        );
    }
}
