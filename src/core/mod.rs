pub mod calculator;
pub mod engine;

pub use crate::domain::model::{SizeResult, Unit};
pub use crate::domain::ports::{ConfigProvider, InputSource, Renderer};
pub use crate::utils::error::Result;
