use crate::utils::error::{FitError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Largest accepted circumference in either unit, checked before any
/// unit conversion.
pub const MAX_MEASUREMENT: f64 = 200.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Digits with at most one decimal point. Signs, exponents and nan/inf
// spellings never reach the float parser.
fn measurement_mask() -> &'static Regex {
    static MASK: OnceLock<Regex> = OnceLock::new();
    MASK.get_or_init(|| Regex::new(r"^\d*\.?\d*$").unwrap())
}

pub fn parse_measurement(field_name: &str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !measurement_mask().is_match(trimmed) {
        return Err(FitError::InputError {
            message: format!("Please enter a valid {} measurement", field_name),
        });
    }

    trimmed.parse::<f64>().map_err(|_| FitError::InputError {
        message: format!("Please enter a valid {} measurement", field_name),
    })
}

/// Form-level checks, applied to the values as entered. The calculator
/// re-validates positivity and ordering on its own and never trusts the
/// caller.
pub fn validate_measurements(bust: f64, underbust: f64) -> Result<()> {
    if bust <= 0.0 || underbust <= 0.0 {
        return Err(FitError::ValidationError {
            message: "Measurements must be greater than zero".to_string(),
        });
    }

    if bust < underbust {
        return Err(FitError::ValidationError {
            message: "Bust measurement must be larger than underbust measurement".to_string(),
        });
    }

    if bust > MAX_MEASUREMENT || underbust > MAX_MEASUREMENT {
        return Err(FitError::ValidationError {
            message: "Measurements seem too large. Please check your input".to_string(),
        });
    }

    Ok(())
}
