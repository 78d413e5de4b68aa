use crate::domain::model::{SizeResult, Unit};
use crate::utils::error::Result;

/// Supplies the run parameters. Implemented by the CLI config; tests
/// implement it directly.
pub trait ConfigProvider {
    /// Both measurements as entered, or `None` when the caller should be
    /// prompted interactively.
    fn measurements(&self) -> Option<(f64, f64)>;

    fn unit(&self) -> Unit;
}

/// Source of interactive measurement input.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Renders a size result for display.
pub trait Renderer {
    fn render(&self, result: &SizeResult) -> Result<String>;
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&self, result: &SizeResult) -> Result<String> {
        (**self).render(result)
    }
}
