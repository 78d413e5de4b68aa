use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inches per centimeter, as used by the measurement form.
pub const CM_TO_INCHES: f64 = 0.393701;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Inches,
    Centimeters,
}

impl Unit {
    /// Converts a raw measurement into inches, the unit the calculator
    /// operates in.
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            Unit::Inches => value,
            Unit::Centimeters => value * CM_TO_INCHES,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Centimeters => "cm",
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inches" | "in" => Ok(Unit::Inches),
            "centimeters" | "cm" => Ok(Unit::Centimeters),
            other => Err(format!("Unknown unit: {} (expected inches or cm)", other)),
        }
    }
}

/// One size recommendation. Built fresh on every calculation and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeResult {
    pub band_size: u32,
    pub cup_label: String,
    pub full_size_label: String,
    pub recommended_styles: Vec<String>,
    pub style_image_key: String,
    pub fit_description: String,
}
