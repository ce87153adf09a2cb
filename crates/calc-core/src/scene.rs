//! Display-agnostic description of one frame of the diagram.
//!
//! [`render`] is a pure function from animation state to a [`Scene`]: pixel
//! geometry plus labels and the numeric readout. Consumers (the SVG writer,
//! the DOM glue, tests) never recompute any of the maths.

use crate::animation::{AnimationState, Mode};
use crate::constants::*;
use crate::derivative::{Secant, SecantReadout};
use crate::function::f;
use crate::integral::{AreaReadout, RiemannSum};
use crate::sampler::CurveSampler;
use crate::style::{self, Color};
use crate::viewport::ViewportConfig;
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Dash and gap lengths in pixels, solid when `None`.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub const fn dashed(color: Color, width: f64, dash: f64, gap: f64) -> Self {
        Self {
            color,
            width,
            dash: Some((dash, gap)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub pos: DVec2,
    pub text: String,
    pub color: Color,
    pub anchor: Anchor,
    pub size: f64,
    pub bold: bool,
}

impl Label {
    pub fn new(pos: DVec2, text: impl Into<String>, color: Color, anchor: Anchor, size: f64) -> Self {
        Self {
            pos,
            text: text.into(),
            color,
            anchor,
            size,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect {
        origin: DVec2,
        size: DVec2,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Line {
        from: DVec2,
        to: DVec2,
        stroke: Stroke,
        opacity: f64,
    },
    Polyline {
        points: Vec<DVec2>,
        stroke: Stroke,
    },
    Polygon {
        points: SmallVec<[DVec2; 4]>,
        fill: Color,
        stroke: Stroke,
    },
    Circle {
        center: DVec2,
        radius: f64,
        fill: Color,
    },
    Text(Label),
}

impl Shape {
    pub fn line(from: DVec2, to: DVec2, stroke: Stroke) -> Self {
        Shape::Line {
            from,
            to,
            stroke,
            opacity: 1.0,
        }
    }
}

/// Numbers shown in the top-right corner for the active mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Readout {
    Derivative(SecantReadout),
    Integral(AreaReadout),
}

/// One formatted line of the readout.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadoutLine {
    pub text: String,
    pub color: Color,
    pub size: f64,
    pub bold: bool,
}

impl Readout {
    pub fn lines(&self) -> SmallVec<[ReadoutLine; 4]> {
        let line = |text: String, color: Color, size: f64, bold: bool| ReadoutLine {
            text,
            color,
            size,
            bold,
        };
        let mut out = SmallVec::new();
        match self {
            Readout::Derivative(r) => {
                out.push(line(
                    format!("slope = dy/dx = {:.3}", r.slope),
                    style::DERIVATIVE,
                    20.0,
                    true,
                ));
                out.push(line(
                    format!("(limit: f'({}) = {})", r.x0, r.limit),
                    style::TEXT,
                    16.0,
                    false,
                ));
            }
            Readout::Integral(r) => {
                out.push(line(
                    format!("rectangles: {}", r.n),
                    style::INTEGRAL,
                    20.0,
                    true,
                ));
                out.push(line(
                    format!("approx. area: {:.3}", r.approx),
                    style::TEXT,
                    18.0,
                    false,
                ));
                out.push(line(
                    format!("(exact integral: {})", r.exact),
                    style::DERIVATIVE,
                    16.0,
                    false,
                ));
                out.push(line(
                    format!("error: {:.3}", r.error),
                    style::TEXT,
                    14.0,
                    false,
                ));
            }
        }
        out
    }
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub shapes: Vec<Shape>,
    pub readout: Readout,
}

/// Build the full diagram for `state` inside `viewport`.
pub fn render(state: &AnimationState, viewport: &ViewportConfig) -> Scene {
    let mut shapes = Vec::with_capacity(64);
    push_grid(&mut shapes, viewport);
    push_axes(&mut shapes, viewport);
    shapes.push(curve(viewport));

    let readout = match state.mode() {
        Mode::Derivative => {
            let secant = Secant::at_anchor(state.dx());
            shapes.extend(secant.shapes(viewport));
            Readout::Derivative(secant.readout())
        }
        Mode::Integral => {
            let sum = RiemannSum::over_default_bounds(state.n());
            shapes.extend(sum.shapes(viewport));
            Readout::Integral(sum.readout())
        }
    };

    shapes.push(Shape::Text(
        Label::new(
            viewport.to_pixel(FUNCTION_LABEL_X, f(FUNCTION_LABEL_X)) - DVec2::new(0.0, 15.0),
            "f(x) = x²",
            style::FUNCTION,
            Anchor::Start,
            20.0,
        )
        .bold(),
    ));
    push_readout(&mut shapes, &readout, viewport);

    Scene {
        width: viewport.width,
        height: viewport.height,
        background: style::BACKGROUND,
        shapes,
        readout,
    }
}

fn push_grid(shapes: &mut Vec<Shape>, vp: &ViewportConfig) {
    let (left, top, right, bottom) = vp.graph_bounds();
    let stroke = Stroke::solid(style::GRID, 1.0);
    let mut x = vp.x_min.ceil();
    while x <= vp.x_max {
        let px = vp.scale_x(x);
        shapes.push(Shape::line(DVec2::new(px, top), DVec2::new(px, bottom), stroke));
        x += 1.0;
    }
    let mut y = vp.y_min.ceil();
    while y <= vp.y_max {
        let py = vp.scale_y(y);
        shapes.push(Shape::line(DVec2::new(left, py), DVec2::new(right, py), stroke));
        y += 1.0;
    }
}

fn push_axes(shapes: &mut Vec<Shape>, vp: &ViewportConfig) {
    let (left, top, right, bottom) = vp.graph_bounds();
    let stroke = Stroke::solid(style::AXES, 2.0);
    let x_axis = vp.scale_y(0.0);
    let y_axis = vp.scale_x(0.0);
    shapes.push(Shape::line(DVec2::new(left, x_axis), DVec2::new(right, x_axis), stroke));
    shapes.push(Shape::line(DVec2::new(y_axis, top), DVec2::new(y_axis, bottom), stroke));

    for x in X_TICK_LABELS {
        shapes.push(Shape::Text(Label::new(
            DVec2::new(vp.scale_x(x as f64), x_axis + 20.0),
            x.to_string(),
            style::TEXT,
            Anchor::Middle,
            14.0,
        )));
    }
    for y in Y_TICK_LABELS {
        shapes.push(Shape::Text(Label::new(
            DVec2::new(y_axis - 15.0, vp.scale_y(y as f64) + 5.0),
            y.to_string(),
            style::TEXT,
            Anchor::End,
            14.0,
        )));
    }
}

fn curve(vp: &ViewportConfig) -> Shape {
    let points = CurveSampler::new(f, vp.x_min, vp.x_max, vp)
        .map(|(x, y)| vp.to_pixel(x, y))
        .collect();
    Shape::Polyline {
        points,
        stroke: Stroke::solid(style::FUNCTION, 3.0),
    }
}

fn push_readout(shapes: &mut Vec<Shape>, readout: &Readout, vp: &ViewportConfig) {
    let x = vp.width - vp.padding - READOUT_INSET_PX;
    for (i, line) in readout.lines().into_iter().enumerate() {
        let y = vp.padding + READOUT_FIRST_LINE_PX + i as f64 * READOUT_LINE_SPACING_PX;
        let mut label = Label::new(DVec2::new(x, y), line.text, line.color, Anchor::End, line.size);
        label.bold = line.bold;
        shapes.push(Shape::Text(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(scene: &Scene, pred: impl Fn(&Shape) -> bool) -> usize {
        scene.shapes.iter().filter(|s| pred(s)).count()
    }

    #[test]
    fn grid_has_one_line_per_integer() {
        let vp = ViewportConfig::default();
        let mut shapes = Vec::new();
        push_grid(&mut shapes, &vp);
        // x: -1..=5 (7 lines), y: -2..=10 (13 lines)
        assert_eq!(shapes.len(), 20);
    }

    #[test]
    fn integral_scene_has_one_filled_rect_per_subinterval() {
        let vp = ViewportConfig::default();
        let mut state = AnimationState::default();
        state.switch_mode(Mode::Integral);
        let scene = render(&state, &vp);
        let rects = count(&scene, |s| matches!(s, Shape::Rect { .. }));
        assert_eq!(rects, N_DEFAULT as usize);
        assert!(matches!(scene.readout, Readout::Integral(r) if r.n == N_DEFAULT));
    }

    #[test]
    fn derivative_scene_has_two_markers_and_a_triangle() {
        let vp = ViewportConfig::default();
        let scene = render(&AnimationState::default(), &vp);
        assert_eq!(count(&scene, |s| matches!(s, Shape::Circle { .. })), 2);
        assert_eq!(count(&scene, |s| matches!(s, Shape::Polygon { .. })), 1);
        assert_eq!(count(&scene, |s| matches!(s, Shape::Rect { .. })), 0);
    }

    #[test]
    fn readout_lines_are_formatted_to_three_decimals() {
        let vp = ViewportConfig::default();
        let scene = render(&AnimationState::default(), &vp);
        let lines = scene.readout.lines();
        // dx = 1.5: slope = 2*2 + 1.5 = 5.5
        assert_eq!(lines[0].text, "slope = dy/dx = 5.500");
        assert_eq!(lines[1].text, "(limit: f'(2) = 4)");
    }
}
