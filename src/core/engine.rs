use crate::core::calculator;
use crate::domain::model::Unit;
use crate::domain::ports::{ConfigProvider, InputSource, Renderer};
use crate::utils::error::Result;
use crate::utils::validation::{parse_measurement, validate_measurements};

/// Drives one calculation: collect measurements, pre-validate, normalize
/// to inches, classify, render.
pub struct FitEngine<C: ConfigProvider, I: InputSource, R: Renderer> {
    config: C,
    input: I,
    renderer: R,
}

impl<C: ConfigProvider, I: InputSource, R: Renderer> FitEngine<C, I, R> {
    pub fn new(config: C, input: I, renderer: R) -> Self {
        Self {
            config,
            input,
            renderer,
        }
    }

    pub fn run(&mut self) -> Result<String> {
        let unit = self.config.unit();

        let (bust, underbust) = match self.config.measurements() {
            Some((bust, underbust)) => {
                validate_measurements(bust, underbust)?;
                (bust, underbust)
            }
            None => self.prompt_measurements(unit)?,
        };

        tracing::debug!(
            "Measurements: bust {} underbust {} ({:?})",
            bust,
            underbust,
            unit
        );

        let bust_inches = unit.to_inches(bust);
        let underbust_inches = unit.to_inches(underbust);

        let result = calculator::calculate_size(bust_inches, underbust_inches)?;
        tracing::info!("Calculated size {}", result.full_size_label);

        self.renderer.render(&result)
    }

    // Interactive fallback when measurements were not passed as flags.
    // Invalid entries re-prompt, like the form this replaces; a closed
    // input stream propagates instead of looping.
    fn prompt_measurements(&mut self, unit: Unit) -> Result<(f64, f64)> {
        loop {
            let bust = self.prompt_value("Bust size", "bust", unit)?;
            let underbust = self.prompt_value("Underbust size", "underbust", unit)?;

            match validate_measurements(bust, underbust) {
                Ok(()) => return Ok((bust, underbust)),
                Err(e) => eprintln!("❌ {}", e.user_friendly_message()),
            }
        }
    }

    fn prompt_value(&mut self, label: &str, field_name: &str, unit: Unit) -> Result<f64> {
        loop {
            let line = self
                .input
                .read_line(&format!("{} ({}): ", label, unit.suffix()))?;

            match parse_measurement(field_name, &line) {
                Ok(value) => return Ok(value),
                Err(e) => eprintln!("❌ {}", e.user_friendly_message()),
            }
        }
    }
}
