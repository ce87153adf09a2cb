//! Midpoint Riemann sum geometry for the integral mode.

use crate::constants::*;
use crate::function::{definite_integral, f};
use crate::scene::{Anchor, Label, Shape, Stroke};
use crate::style;
use crate::viewport::ViewportConfig;
use glam::DVec2;

/// One subinterval of the sum, in mathematical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiemannRect {
    pub left: f64,
    pub width: f64,
    /// `f` sampled at the subinterval midpoint.
    pub height: f64,
}

impl RiemannRect {
    #[inline]
    pub fn area(&self) -> f64 {
        self.height * self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaReadout {
    pub n: u32,
    pub approx: f64,
    pub exact: f64,
    pub error: f64,
}

/// Midpoint-rule approximation of `∫ₐᵇ f` with `n` equal subintervals.
#[derive(Clone, Debug, PartialEq)]
pub struct RiemannSum {
    pub a: f64,
    pub b: f64,
    pub n: u32,
    pub rect_width: f64,
    pub rects: Vec<RiemannRect>,
    pub approx: f64,
    pub exact: f64,
}

impl RiemannSum {
    pub fn midpoint(a: f64, b: f64, n: u32) -> Self {
        let n = n.max(1);
        let rect_width = (b - a) / n as f64;
        let mut approx = 0.0;
        let rects = (0..n)
            .map(|i| {
                let left = a + i as f64 * rect_width;
                let rect = RiemannRect {
                    left,
                    width: rect_width,
                    height: f(left + rect_width / 2.0),
                };
                approx += rect.area();
                rect
            })
            .collect();
        Self {
            a,
            b,
            n,
            rect_width,
            rects,
            approx,
            exact: definite_integral(a, b),
        }
    }

    pub fn over_default_bounds(n: u32) -> Self {
        Self::midpoint(INTEGRAL_A, INTEGRAL_B, n)
    }

    pub fn error(&self) -> f64 {
        (self.approx - self.exact).abs()
    }

    pub fn readout(&self) -> AreaReadout {
        AreaReadout {
            n: self.n,
            approx: self.approx,
            exact: self.exact,
            error: self.error(),
        }
    }

    pub fn shapes(&self, vp: &ViewportConfig) -> Vec<Shape> {
        let mut out = Vec::with_capacity(self.rects.len() + 4);
        let base = vp.scale_y(0.0);
        for r in &self.rects {
            let x = vp.scale_x(r.left);
            let top = vp.scale_y(r.height);
            out.push(Shape::Rect {
                origin: DVec2::new(x, top),
                size: DVec2::new(vp.scale_x(r.left + r.width) - x, base - top),
                fill: style::AREA,
                stroke: Some(Stroke::solid(style::INTEGRAL, 1.0)),
            });
        }
        for (bound, name) in [(self.a, "a"), (self.b, "b")] {
            let px = vp.scale_x(bound);
            out.push(Shape::line(
                DVec2::new(px, base - BOUND_TICK_HALF_PX),
                DVec2::new(px, base + BOUND_TICK_HALF_PX),
                Stroke::solid(style::INTEGRAL, 3.0),
            ));
            out.push(Shape::Text(
                Label::new(
                    DVec2::new(px, base + BOUND_LABEL_OFFSET_PX),
                    format!("{name} = {bound}"),
                    style::INTEGRAL,
                    Anchor::Middle,
                    16.0,
                )
                .bold(),
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_rectangle_uses_the_midpoint() {
        let sum = RiemannSum::over_default_bounds(1);
        assert_eq!(sum.rects.len(), 1);
        assert!((sum.approx - 6.75).abs() < 1e-12);
        assert!((sum.error() - 2.25).abs() < 1e-12);
    }

    #[test]
    fn three_rectangles_sample_half_integers() {
        let sum = RiemannSum::over_default_bounds(3);
        let mids: Vec<f64> = sum.rects.iter().map(|r| r.left + r.width / 2.0).collect();
        assert_eq!(mids, vec![0.5, 1.5, 2.5]);
        assert!((sum.approx - 8.75).abs() < 1e-12);
        assert!((sum.error() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn rectangles_tile_the_interval() {
        let sum = RiemannSum::over_default_bounds(7);
        let last = sum.rects.last().copied().expect("rects");
        assert!((sum.rects[0].left - 0.0).abs() < 1e-12);
        assert!((last.left + last.width - 3.0).abs() < 1e-9);
    }

    #[test]
    fn bound_labels_use_plain_numbers() {
        let vp = ViewportConfig::default();
        let texts: Vec<String> = RiemannSum::over_default_bounds(2)
            .shapes(&vp)
            .into_iter()
            .filter_map(|s| match s {
                Shape::Text(l) => Some(l.text),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["a = 0".to_string(), "b = 3".to_string()]);
    }
}
