//! Mapping between mathematical coordinates and viewport pixels.
//!
//! The viewport is a fixed-size drawing area with uniform padding around a
//! graph region. Mathematical `y` grows upwards while pixel `y` grows
//! downwards, so the vertical mapping is inverted. Mapping is affine and
//! total: values outside the domain land outside the graph area and are
//! never clamped.

use crate::constants::*;
use glam::DVec2;

/// Pixel size, padding and mathematical domain of the diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: VIEW_WIDTH,
            height: VIEW_HEIGHT,
            padding: VIEW_PADDING,
            x_min: X_MIN,
            x_max: X_MAX,
            y_min: Y_MIN,
            y_max: Y_MAX,
        }
    }
}

impl ViewportConfig {
    #[inline]
    pub fn graph_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    #[inline]
    pub fn graph_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Horizontal pixel position of mathematical `x`.
    #[inline]
    pub fn scale_x(&self, x: f64) -> f64 {
        self.padding + (x - self.x_min) / (self.x_max - self.x_min) * self.graph_width()
    }

    /// Vertical pixel position of mathematical `y` (inverted axis).
    #[inline]
    pub fn scale_y(&self, y: f64) -> f64 {
        self.height
            - self.padding
            - (y - self.y_min) / (self.y_max - self.y_min) * self.graph_height()
    }

    /// Inverse of [`scale_x`](Self::scale_x).
    #[inline]
    pub fn unscale_x(&self, px: f64) -> f64 {
        self.x_min + (px - self.padding) / self.graph_width() * (self.x_max - self.x_min)
    }

    /// Inverse of [`scale_y`](Self::scale_y).
    #[inline]
    pub fn unscale_y(&self, py: f64) -> f64 {
        self.y_min
            + (self.height - self.padding - py) / self.graph_height() * (self.y_max - self.y_min)
    }

    #[inline]
    pub fn to_pixel(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(self.scale_x(x), self.scale_y(y))
    }

    /// Left, top, right and bottom pixel edges of the graph area.
    pub fn graph_bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.padding,
            self.padding,
            self.width - self.padding,
            self.height - self.padding,
        )
    }
}
