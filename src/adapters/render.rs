use crate::domain::model::SizeResult;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;

/// Fitting tips shown under every text result.
const FITTING_TIPS: [&str; 5] = [
    "Always try on bras before purchasing",
    "Adjust straps for comfortable support",
    "Ensure the band sits horizontally around your body",
    "The center gore should lie flat against your sternum",
    "Regularly check your bra size as it can change",
];

/// Plain-text rendering of a size result.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, result: &SizeResult) -> Result<String> {
        let mut lines = Vec::new();

        lines.push("Your Bra Size".to_string());
        lines.push(format!("  {}", result.full_size_label));
        // The band label always reads inches; cm input was converted
        // before classification.
        lines.push(format!("  Band Size: {} inches", result.band_size));
        lines.push(format!("  Cup Size: {}", result.cup_label));
        lines.push(String::new());

        lines.push("Recommended Bra Styles".to_string());
        for style in &result.recommended_styles {
            lines.push(format!("  - {}", style));
        }
        lines.push(String::new());

        lines.push("Fitting Tips".to_string());
        for tip in FITTING_TIPS {
            lines.push(format!("  - {}", tip));
        }
        lines.push(String::new());

        lines.push(result.fit_description.clone());

        Ok(lines.join("\n"))
    }
}

/// JSON rendering of the full result, for scripting.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, result: &SizeResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> SizeResult {
        SizeResult {
            band_size: 30,
            cup_label: "C".to_string(),
            full_size_label: "30C".to_string(),
            recommended_styles: vec![
                "Underwire Bras".to_string(),
                "Full Coverage Bras".to_string(),
                "Sports Bras".to_string(),
            ],
            style_image_key: "bra_style_full_coverage".to_string(),
            fit_description: "Best fit: Full coverage with medium support".to_string(),
        }
    }

    #[test]
    fn test_text_renderer_includes_all_sections() {
        let output = TextRenderer.render(&sample_result()).unwrap();
        assert!(output.contains("Your Bra Size"));
        assert!(output.contains("30C"));
        assert!(output.contains("Band Size: 30 inches"));
        assert!(output.contains("Cup Size: C"));
        assert!(output.contains("- Underwire Bras"));
        assert!(output.contains("Fitting Tips"));
        assert!(output.contains("Best fit: Full coverage with medium support"));
    }

    #[test]
    fn test_json_renderer_round_trips() {
        let result = sample_result();
        let output = JsonRenderer.render(&result).unwrap();
        let parsed: SizeResult = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, result);
    }
}
