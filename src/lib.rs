pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{profile::FitProfile, CliConfig, OutputFormat};
pub use crate::core::{calculator::calculate_size, engine::FitEngine};
pub use crate::domain::model::{SizeResult, Unit, CM_TO_INCHES};
pub use crate::utils::error::{FitError, Result};
