// WHY: Bold/light font derivation from the canvas font shorthand
// Pure function; the painter applies its output per span

use serde::Serialize;

const DEFAULT_WEIGHT: f64 = 400.0;
const MIN_WEIGHT: f64 = 100.0;
const MAX_WEIGHT: f64 = 900.0;

/// Alpha reduction per step of opacity contrast above 1
const OPACITY_STEP: f64 = 0.15;

/// Inputs for `compute_font`
#[derive(Debug, Clone, Copy)]
pub struct FontRequest<'a> {
    /// CSS font shorthand, e.g. `"italic 400 16px serif"`
    pub font: &'a str,
    pub alpha: f64,
    pub opacity_contrast: f64,
    pub weight_contrast: f64,
    pub weight_offset: f64,
}

/// One derived font variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontStyle {
    pub font: String,
    pub alpha: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedFonts {
    pub bold: FontStyle,
    pub light: FontStyle,
}

/// Derive bold and light variants of a canvas font
pub fn compute_font(request: &FontRequest<'_>) -> ComputedFonts {
    let params: Vec<&str> = request.font.split(' ').collect();
    let size_index = params.iter().position(|p| p.contains("px"));

    let base_font = match size_index {
        Some(index) => params[index..].join(" "),
        None => params.last().copied().unwrap_or_default().to_string(),
    };

    let mut base_weight = if request.font.contains("black") {
        900.0
    } else if request.font.contains("bold") {
        700.0
    } else {
        size_index
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| leading_integer(params[index]))
            .filter(|weight| *weight != 0.0)
            .unwrap_or(DEFAULT_WEIGHT)
    };
    base_weight += request.weight_offset * 100.0;

    let mut bold_weight = base_weight + 100.0 * request.weight_contrast;
    let mut light_weight = base_weight;

    if bold_weight > MAX_WEIGHT {
        let excess = bold_weight - MAX_WEIGHT;
        bold_weight -= excess;
        light_weight -= excess;
    }
    if light_weight < MIN_WEIGHT {
        let deficit = MIN_WEIGHT - light_weight;
        light_weight += deficit;
        bold_weight += deficit;
    }

    let mut light_alpha = request.alpha;
    if request.opacity_contrast > 1.0 {
        light_alpha *= 1.0 - (request.opacity_contrast - 1.0) * OPACITY_STEP;
    }

    let style = if request.font.contains("italic") { "italic" } else { "normal" };

    ComputedFonts {
        bold: FontStyle {
            font: format!("{style} {bold_weight} {base_font}"),
            alpha: request.alpha,
            weight: bold_weight,
        },
        light: FontStyle {
            font: format!("{style} {light_weight} {base_font}"),
            alpha: light_alpha,
            weight: light_weight,
        },
    }
}

/// Parse the leading decimal digits of a token, like `parseInt`
fn leading_integer(token: &str) -> Option<f64> {
    let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<u32>().ok().map(f64::from)
}
