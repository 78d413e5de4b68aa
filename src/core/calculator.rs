use crate::domain::model::SizeResult;
use crate::utils::error::{FitError, Result};

// Cup tiers by bust/underbust difference in inches. Ordered ascending;
// the first open upper bound that admits the difference wins, so an
// exact integer difference lands in the next tier up.
const CUP_TIERS: [(f64, &str, &str, &str); 10] = [
    (
        1.0,
        "AA",
        "bra_style_wireless",
        "Recommended: Wireless bras for smaller cup sizes",
    ),
    (
        2.0,
        "A",
        "bra_style_light_padding",
        "Perfect for: Light padding and natural shaping",
    ),
    (
        3.0,
        "B",
        "bra_style_tshirt",
        "Ideal for: T-shirt bras and everyday comfort",
    ),
    (
        4.0,
        "C",
        "bra_style_full_coverage",
        "Best fit: Full coverage with medium support",
    ),
    (
        5.0,
        "D",
        "bra_style_underwire",
        "Suggested: Underwire bras for added support",
    ),
    (
        6.0,
        "DD/E",
        "bra_style_full_support",
        "Recommended: Full support with side panels",
    ),
    (
        7.0,
        "DDD/F",
        "bra_style_minimizer",
        "Perfect for: Minimizer styles with maximum support",
    ),
    (
        8.0,
        "G",
        "bra_style_structured",
        "Ideal for: Structured support with wider straps",
    ),
    (
        9.0,
        "H",
        "bra_style_full_figure",
        "Best fit: Full figure styles with reinforced support",
    ),
    (
        10.0,
        "I",
        "bra_style_maximum_support",
        "Suggested: Maximum support with comfort features",
    ),
];

const TOP_TIER: (&str, &str, &str) = (
    "J+",
    "bra_style_specialty",
    "Recommended: Specialty sizes with custom support",
);

// Style recommendations band the difference more coarsely than the cup
// tiers; the two boundary sets are independent.
const SMALL_CUP_STYLES: [&str; 3] = ["Wireless Bras", "T-Shirt Bras", "Bralettes"];
const MID_CUP_STYLES: [&str; 3] = ["Underwire Bras", "Full Coverage Bras", "Sports Bras"];
const FULL_CUP_STYLES: [&str; 3] = ["Full Support Bras", "Minimizer Bras", "Side Support Bras"];

/// Computes a size recommendation from bust and underbust circumference,
/// both in inches.
///
/// Pure and deterministic. Validation failures surface as
/// [`FitError::ValidationError`] before anything is computed.
pub fn calculate_size(bust: f64, underbust: f64) -> Result<SizeResult> {
    if !bust.is_finite() || bust <= 0.0 {
        return Err(FitError::ValidationError {
            message: "Bust measurement must be positive".to_string(),
        });
    }
    if !underbust.is_finite() || underbust <= 0.0 {
        return Err(FitError::ValidationError {
            message: "Underbust measurement must be positive".to_string(),
        });
    }
    if bust < underbust {
        return Err(FitError::ValidationError {
            message: "Bust must be at least as large as underbust".to_string(),
        });
    }

    // Band size is the underbust rounded to the nearest even number,
    // halves rounding up.
    let band_size = ((underbust / 2.0).round() as u32) * 2;

    let difference = bust - underbust;

    let (cup_label, style_image_key, fit_description) = CUP_TIERS
        .iter()
        .find(|(upper, _, _, _)| difference < *upper)
        .map(|(_, cup, image, description)| (*cup, *image, *description))
        .unwrap_or(TOP_TIER);

    let recommended_styles = if difference < 3.0 {
        SMALL_CUP_STYLES
    } else if difference < 5.0 {
        MID_CUP_STYLES
    } else {
        FULL_CUP_STYLES
    };

    Ok(SizeResult {
        band_size,
        cup_label: cup_label.to_string(),
        full_size_label: format!("{}{}", band_size, cup_label),
        recommended_styles: recommended_styles.iter().map(|s| s.to_string()).collect(),
        style_image_key: style_image_key.to_string(),
        fit_description: fit_description.to_string(),
    })
}
