use crate::config::OutputFormat;
use crate::domain::model::Unit;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional defaults loaded from a TOML file and merged under the CLI
/// flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitProfile {
    pub defaults: Option<Defaults>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    pub unit: Option<Unit>,
    pub format: Option<OutputFormat>,
    pub verbose: Option<bool>,
}

impl FitProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_profile_from_toml_str() {
        let profile = FitProfile::from_toml_str(
            r#"
[defaults]
unit = "centimeters"
format = "json"
"#,
        )
        .unwrap();

        let defaults = profile.defaults.unwrap();
        assert_eq!(defaults.unit, Some(Unit::Centimeters));
        assert_eq!(defaults.format, Some(OutputFormat::Json));
        assert_eq!(defaults.verbose, None);
    }

    #[test]
    fn test_empty_profile_is_valid() {
        let profile = FitProfile::from_toml_str("").unwrap();
        assert!(profile.defaults.is_none());
    }

    #[test]
    fn test_profile_rejects_unknown_unit() {
        assert!(FitProfile::from_toml_str("[defaults]\nunit = \"meters\"\n").is_err());
    }

    #[test]
    fn test_profile_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[defaults]\nformat = \"json\"\nverbose = true\n")
            .unwrap();

        let profile = FitProfile::from_file(temp_file.path()).unwrap();
        let defaults = profile.defaults.unwrap();
        assert_eq!(defaults.format, Some(OutputFormat::Json));
        assert_eq!(defaults.verbose, Some(true));
    }
}
