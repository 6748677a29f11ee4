// ⚖️ BMI Calculator
// weight(kg) / height(m)², plus rounding and display helpers

use crate::error::BmiError;
use crate::units::Measurement;

/// Raw BMI formula. No checks: zero height yields infinity or NaN.
pub fn bmi(height_m: f64, weight_kg: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// BMI of a validated measurement. Fails if the result is not finite.
pub fn compute(measurement: &Measurement) -> Result<f64, BmiError> {
    let value = bmi(measurement.height_m, measurement.weight_kg);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BmiError::NonFiniteBmi(value))
    }
}

/// Round to `places` decimals, exact halves go to the even digit
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round_ties_even() / factor
}

/// Render like a float literal: `24.69`, `23.0`
pub fn format_value(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula() {
        for (h, w) in [(1.8, 80.0), (1.5, 0.0), (2.1, 130.5), (0.5, 3.2)] {
            assert_eq!(bmi(h, w), w / (h * h));
        }
    }

    #[test]
    fn test_zero_height_is_not_finite() {
        assert!(bmi(0.0, 70.0).is_infinite());
        assert!(bmi(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_compute_rejects_overflow() {
        let m = Measurement { height_m: 1e-200, weight_kg: 1e200 };
        assert!(matches!(compute(&m), Err(BmiError::NonFiniteBmi(_))));
    }

    #[test]
    fn test_compute() {
        let m = Measurement { height_m: 1.8, weight_kg: 80.0 };
        let value = compute(&m).unwrap();
        assert!((value - 24.691358).abs() < 1e-6);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(23.456, 2), 23.46);
        assert_eq!(round_to(23.456, 0), 23.0);
        assert_eq!(round_to(24.691358, 2), 24.69);
        assert_eq!(round_to(24.691358, 3), 24.691);
    }

    #[test]
    fn test_round_to_ties_go_even() {
        assert_eq!(round_to(22.5, 0), 22.0);
        assert_eq!(round_to(24.5, 0), 24.0);
        assert_eq!(round_to(23.5, 0), 24.0);
        assert_eq!(round_to(20.25, 1), 20.2);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(24.69), "24.69");
        assert_eq!(format_value(23.0), "23.0");
        assert_eq!(format_value(30.1), "30.1");
    }
}
