//! Palette and the enumerated control-style table.
//!
//! Control appearance is a pure function of `(mode, is_playing)` so the
//! front-end never assembles class names conditionally.

use crate::animation::Mode;
use std::fmt;

/// sRGB colour with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

// Diagram palette
pub const BACKGROUND: Color = Color::rgb(0x1C, 0x1C, 0x1C);
pub const AXES: Color = Color::rgb(0x88, 0x88, 0x88);
pub const GRID: Color = Color::rgb(0x33, 0x33, 0x33);
pub const TEXT: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const FUNCTION: Color = Color::rgb(0x58, 0xC4, 0xDD); // blue
pub const DERIVATIVE: Color = Color::rgb(0xFF, 0xFF, 0x00); // yellow
pub const TANGENT: Color = Color::rgb(0xFF, 0x8C, 0x00); // orange
pub const INTEGRAL: Color = Color::rgb(0x83, 0xC1, 0x67); // green
pub const AREA: Color = Color::rgba(131, 193, 103, 0.4);
pub const TRIANGLE_FILL: Color = Color::rgba(255, 140, 0, 0.2);
pub const DX: Color = Color::rgb(0xFC, 0x62, 0x55); // red

// Control palette
const PANEL_TEXT: Color = Color::rgb(0xFF, 0xFF, 0xFF);
const INACTIVE_BG: Color = Color::rgb(0x37, 0x41, 0x51);
const DERIVATIVE_ACTIVE_BG: Color = Color::rgb(0xEA, 0xB3, 0x08);
const INTEGRAL_ACTIVE_BG: Color = Color::rgb(0x22, 0xC5, 0x5E);
const START_BG: Color = Color::rgb(0x25, 0x63, 0xEB);
const RESET_BG: Color = Color::rgb(0x4B, 0x55, 0x63);
const ACTIVE_TEXT: Color = Color::rgb(0x00, 0x00, 0x00);

/// Every visual state a control can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    DerivativeActive,
    IntegralActive,
    ModeInactive,
    StartReady,
    StartDisabled,
    Reset,
}

impl ButtonStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            ButtonStyle::DerivativeActive => "btn mode active derivative",
            ButtonStyle::IntegralActive => "btn mode active integral",
            ButtonStyle::ModeInactive => "btn mode",
            ButtonStyle::StartReady => "btn start",
            ButtonStyle::StartDisabled => "btn start disabled",
            ButtonStyle::Reset => "btn reset",
        }
    }

    /// Inline fallback for pages that ship no stylesheet.
    pub fn inline_css(self) -> String {
        let (bg, fg, opacity) = match self {
            ButtonStyle::DerivativeActive => (DERIVATIVE_ACTIVE_BG, ACTIVE_TEXT, 1.0),
            ButtonStyle::IntegralActive => (INTEGRAL_ACTIVE_BG, ACTIVE_TEXT, 1.0),
            ButtonStyle::ModeInactive => (INACTIVE_BG, PANEL_TEXT, 1.0),
            ButtonStyle::StartReady => (START_BG, PANEL_TEXT, 1.0),
            ButtonStyle::StartDisabled => (START_BG, PANEL_TEXT, 0.5),
            ButtonStyle::Reset => (RESET_BG, PANEL_TEXT, 1.0),
        };
        format!(
            "background-color:{bg};color:{fg};opacity:{opacity};font-weight:bold;border-radius:8px;padding:8px 24px;border:none"
        )
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, ButtonStyle::StartDisabled)
    }
}

/// Resolved styles for the whole control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlStyles {
    pub derivative_button: ButtonStyle,
    pub integral_button: ButtonStyle,
    pub start_button: ButtonStyle,
    pub reset_button: ButtonStyle,
    pub slider_enabled: bool,
}

impl ControlStyles {
    pub fn for_state(mode: Mode, is_playing: bool) -> Self {
        let (derivative_button, integral_button) = match mode {
            Mode::Derivative => (ButtonStyle::DerivativeActive, ButtonStyle::ModeInactive),
            Mode::Integral => (ButtonStyle::ModeInactive, ButtonStyle::IntegralActive),
        };
        Self {
            derivative_button,
            integral_button,
            start_button: if is_playing {
                ButtonStyle::StartDisabled
            } else {
                ButtonStyle::StartReady
            },
            reset_button: ButtonStyle::Reset,
            slider_enabled: !is_playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_render_as_css() {
        assert_eq!(FUNCTION.to_string(), "#58C4DD");
        assert_eq!(AREA.to_string(), "rgba(131, 193, 103, 0.4)");
    }

    #[test]
    fn playing_disables_start_and_slider_but_not_reset() {
        for mode in [Mode::Derivative, Mode::Integral] {
            let s = ControlStyles::for_state(mode, true);
            assert!(s.start_button.is_disabled());
            assert!(!s.slider_enabled);
            assert!(!s.reset_button.is_disabled());
            let s = ControlStyles::for_state(mode, false);
            assert!(!s.start_button.is_disabled());
            assert!(s.slider_enabled);
        }
    }

    #[test]
    fn exactly_one_mode_button_is_active() {
        let d = ControlStyles::for_state(Mode::Derivative, false);
        assert_eq!(d.derivative_button, ButtonStyle::DerivativeActive);
        assert_eq!(d.integral_button, ButtonStyle::ModeInactive);
        let i = ControlStyles::for_state(Mode::Integral, true);
        assert_eq!(i.derivative_button, ButtonStyle::ModeInactive);
        assert_eq!(i.integral_button, ButtonStyle::IntegralActive);
    }
}
