//! Secant-to-tangent geometry for the derivative mode.

use crate::constants::*;
use crate::function::{f, f_prime};
use crate::scene::{Anchor, Label, Shape, Stroke};
use crate::style;
use crate::viewport::ViewportConfig;
use glam::DVec2;
use smallvec::smallvec;

/// Secant through `(x0, f(x0))` and `(x0 + dx, f(x0 + dx))`.
///
/// `dx` is taken as given; range limits are enforced by the controls and the
/// animation driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Secant {
    pub x0: f64,
    pub dx: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub dy: f64,
    pub slope: f64,
    pub tangent_slope: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecantReadout {
    pub x0: f64,
    pub dx: f64,
    pub dy: f64,
    pub slope: f64,
    pub limit: f64,
}

impl Secant {
    pub fn new(x0: f64, dx: f64) -> Self {
        let x1 = x0 + dx;
        let y0 = f(x0);
        let y1 = f(x1);
        let dy = y1 - y0;
        Self {
            x0,
            dx,
            x1,
            y0,
            y1,
            dy,
            slope: dy / dx,
            tangent_slope: f_prime(x0),
        }
    }

    pub fn at_anchor(dx: f64) -> Self {
        Self::new(DERIVATIVE_X0, dx)
    }

    /// Tangent is faint until the secant is visibly close to it.
    pub fn tangent_opacity(&self) -> f64 {
        if self.dx < TANGENT_EMPHASIS_DX {
            1.0
        } else {
            0.3
        }
    }

    pub fn readout(&self) -> SecantReadout {
        SecantReadout {
            x0: self.x0,
            dx: self.dx,
            dy: self.dy,
            slope: self.slope,
            limit: self.tangent_slope,
        }
    }

    pub fn shapes(&self, vp: &ViewportConfig) -> Vec<Shape> {
        let p0 = vp.to_pixel(self.x0, self.y0);
        let p1 = vp.to_pixel(self.x1, self.y1);
        let corner = vp.to_pixel(self.x1, self.y0);
        let mut out = Vec::with_capacity(10);

        // rise/run triangle
        out.push(Shape::Polygon {
            points: smallvec![p0, corner, p1],
            fill: style::TRIANGLE_FILL,
            stroke: Stroke::solid(style::TANGENT, 2.0),
        });

        // run
        let run_y = p0.y + BAR_OFFSET_PX;
        out.push(Shape::line(
            DVec2::new(p0.x, run_y),
            DVec2::new(corner.x, run_y),
            Stroke::solid(style::DX, 3.0),
        ));
        out.push(Shape::Text(
            Label::new(
                DVec2::new((p0.x + corner.x) / 2.0, p0.y + BAR_LABEL_OFFSET_PX),
                format!("dx = {:.2}", self.dx),
                style::DX,
                Anchor::Middle,
                16.0,
            )
            .bold(),
        ));

        // rise
        let rise_x = corner.x + BAR_OFFSET_PX;
        out.push(Shape::line(
            DVec2::new(rise_x, corner.y),
            DVec2::new(rise_x, p1.y),
            Stroke::solid(style::DERIVATIVE, 3.0),
        ));
        out.push(Shape::Text(
            Label::new(
                DVec2::new(corner.x + BAR_LABEL_OFFSET_PX, (corner.y + p1.y) / 2.0),
                format!("dy = {:.2}", self.dy),
                style::DERIVATIVE,
                Anchor::Start,
                16.0,
            )
            .bold(),
        ));

        // secant, extended past both points
        out.push(Shape::line(
            vp.to_pixel(
                self.x0 - SECANT_OVERHANG,
                self.y0 - self.slope * SECANT_OVERHANG,
            ),
            vp.to_pixel(
                self.x1 + SECANT_OVERHANG,
                self.y1 + self.slope * SECANT_OVERHANG,
            ),
            Stroke::dashed(style::TANGENT, 2.0, 8.0, 4.0),
        ));

        // tangent at x0
        let (tx1, tx2) = (self.x0 - TANGENT_HALF_SPAN, self.x0 + TANGENT_HALF_SPAN);
        out.push(Shape::Line {
            from: vp.to_pixel(tx1, self.y0 + self.tangent_slope * (tx1 - self.x0)),
            to: vp.to_pixel(tx2, self.y0 + self.tangent_slope * (tx2 - self.x0)),
            stroke: Stroke::solid(style::DERIVATIVE, 3.0),
            opacity: self.tangent_opacity(),
        });

        out.push(Shape::Circle {
            center: p0,
            radius: MARKER_RADIUS,
            fill: style::FUNCTION,
        });
        out.push(Shape::Circle {
            center: p1,
            radius: MARKER_RADIUS,
            fill: style::TANGENT,
        });
        out
    }
}
