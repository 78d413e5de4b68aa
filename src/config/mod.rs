pub mod profile;

use crate::domain::model::Unit;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FitError, Result};
use crate::utils::validation::{validate_measurements, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format: {} (expected text or json)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "brafit")]
#[command(about = "A bra size calculator for the command line")]
pub struct CliConfig {
    /// Bust circumference, measured at the fullest point
    #[arg(long)]
    pub bust: Option<f64>,

    /// Underbust circumference, measured directly under the bust
    #[arg(long)]
    pub underbust: Option<f64>,

    /// Measurement unit for both values (inches or cm)
    #[arg(long)]
    pub unit: Option<Unit>,

    /// Output format (text or json)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML profile with default settings
    #[arg(long)]
    pub profile: Option<String>,

    /// Print the measurement guide and exit
    #[arg(long)]
    pub guide: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Text)
    }

    /// Fills unset options from a profile; explicit flags win.
    pub fn merged_with(mut self, profile: &profile::FitProfile) -> Self {
        if let Some(defaults) = &profile.defaults {
            if self.unit.is_none() {
                self.unit = defaults.unit;
            }
            if self.format.is_none() {
                self.format = defaults.format;
            }
            if !self.verbose {
                self.verbose = defaults.verbose.unwrap_or(false);
            }
        }
        self
    }
}

impl ConfigProvider for CliConfig {
    fn measurements(&self) -> Option<(f64, f64)> {
        match (self.bust, self.underbust) {
            (Some(bust), Some(underbust)) => Some((bust, underbust)),
            _ => None,
        }
    }

    fn unit(&self) -> Unit {
        self.unit.unwrap_or(Unit::Inches)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (self.bust, self.underbust) {
            (Some(bust), Some(underbust)) => validate_measurements(bust, underbust),
            (Some(_), None) | (None, Some(_)) => Err(FitError::ConfigError {
                message: "--bust and --underbust must be provided together".to_string(),
            }),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::profile::{Defaults, FitProfile};

    fn base_config() -> CliConfig {
        CliConfig {
            bust: None,
            underbust: None,
            unit: None,
            format: None,
            profile: None,
            guide: false,
            verbose: false,
        }
    }

    #[test]
    fn test_profile_fills_only_unset_options() {
        let mut cli = base_config();
        cli.unit = Some(Unit::Inches);

        let profile = FitProfile {
            defaults: Some(Defaults {
                unit: Some(Unit::Centimeters),
                format: Some(OutputFormat::Json),
                verbose: Some(true),
            }),
        };

        let merged = cli.merged_with(&profile);
        assert_eq!(merged.unit, Some(Unit::Inches));
        assert_eq!(merged.format, Some(OutputFormat::Json));
        assert!(merged.verbose);
    }

    #[test]
    fn test_defaults_without_profile() {
        let cli = base_config();
        assert_eq!(ConfigProvider::unit(&cli), Unit::Inches);
        assert_eq!(cli.format(), OutputFormat::Text);
    }

    #[test]
    fn test_validate_requires_measurements_together() {
        let mut cli = base_config();
        cli.bust = Some(34.0);
        assert!(matches!(
            cli.validate().unwrap_err(),
            FitError::ConfigError { .. }
        ));
    }

    #[test]
    fn test_validate_applies_form_rules() {
        let mut cli = base_config();
        cli.bust = Some(10.0);
        cli.underbust = Some(20.0);
        assert!(cli.validate().is_err());

        cli.bust = Some(34.0);
        cli.underbust = Some(30.0);
        assert!(cli.validate().is_ok());
    }
}
