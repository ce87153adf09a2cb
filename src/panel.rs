use calc_core::constants::{DX_MAX, DX_MIN, DX_SLIDER_STEP, N_MAX, N_MIN};
use calc_core::Mode;

/// Range attributes of the parameter slider for a mode.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderSpec {
    pub min: String,
    pub max: String,
    pub step: String,
}

pub fn slider_spec(mode: Mode) -> SliderSpec {
    match mode {
        Mode::Derivative => SliderSpec {
            min: DX_MIN.to_string(),
            max: DX_MAX.to_string(),
            step: DX_SLIDER_STEP.to_string(),
        },
        Mode::Integral => SliderSpec {
            min: N_MIN.to_string(),
            max: N_MAX.to_string(),
            step: "1".to_string(),
        },
    }
}

#[inline]
pub fn hint_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Derivative => "As dx → 0, the slope converges to the derivative f'(x) = 2x",
        Mode::Integral => "As the number of rectangles → ∞, the area converges to ∫₀³ x² dx = 9",
    }
}

pub fn explanation_html(mode: Mode) -> String {
    match mode {
        Mode::Derivative => concat!(
            "<h3 style='color:#FFFF00'>What a derivative is</h3>",
            "<p>A derivative measures how fast a function changes at a single instant.</p>",
            "<p>The slope between two points is <span style='color:#FF8C00'>dy/dx</span>. ",
            "Shrinking dx towards zero makes that slope approach the ",
            "<span style='color:#FFFF00'>slope of the tangent</span> at x.</p>",
            "<p>For f(x) = x² the derivative is f'(x) = 2x, so f'(2) = 4.</p>",
        )
        .to_string(),
        Mode::Integral => concat!(
            "<h3 style='color:#83C167'>What an integral is</h3>",
            "<p>A definite integral is the area under a curve.</p>",
            "<p>A <span style='color:#83C167'>Riemann sum</span> cuts the interval into thin ",
            "rectangles and adds up their areas. More rectangles bring the sum closer to ",
            "the true area.</p>",
            "<p>∫₀³ x² dx = [x³/3]₀³ = 27/3 - 0 = 9</p>",
        )
        .to_string(),
    }
}
