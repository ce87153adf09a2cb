//! SVG serialisation of a [`Scene`].

use crate::scene::{Anchor, Label, Scene, Shape, Stroke};
use std::fmt::{self, Write};

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        )?;
        writeln!(
            f,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, self.background
        )?;
        for shape in &self.shapes {
            write_shape(f, shape)?;
            f.write_char('\n')?;
        }
        f.write_str("</svg>")
    }
}

fn write_shape(f: &mut fmt::Formatter<'_>, shape: &Shape) -> fmt::Result {
    match shape {
        Shape::Rect {
            origin,
            size,
            fill,
            stroke,
        } => {
            write!(
                f,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}""#,
                origin.x, origin.y, size.x, size.y, fill
            )?;
            if let Some(s) = stroke {
                write_stroke(f, s)?;
            }
            f.write_str("/>")
        }
        Shape::Line {
            from,
            to,
            stroke,
            opacity,
        } => {
            write!(
                f,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}""#,
                from.x, from.y, to.x, to.y
            )?;
            write_stroke(f, stroke)?;
            if *opacity < 1.0 {
                write!(f, r#" opacity="{}""#, opacity)?;
            }
            f.write_str("/>")
        }
        Shape::Polyline { points, stroke } => {
            f.write_str(r#"<path d=""#)?;
            for (i, p) in points.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                if i > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{cmd} {:.2} {:.2}", p.x, p.y)?;
            }
            f.write_str(r#"" fill="none""#)?;
            write_stroke(f, stroke)?;
            f.write_str("/>")
        }
        Shape::Polygon {
            points,
            fill,
            stroke,
        } => {
            f.write_str(r#"<polygon points=""#)?;
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{:.2},{:.2}", p.x, p.y)?;
            }
            write!(f, r#"" fill="{}""#, fill)?;
            write_stroke(f, stroke)?;
            f.write_str("/>")
        }
        Shape::Circle {
            center,
            radius,
            fill,
        } => write!(
            f,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            center.x, center.y, radius, fill
        ),
        Shape::Text(label) => write_label(f, label),
    }
}

fn write_stroke(f: &mut fmt::Formatter<'_>, stroke: &Stroke) -> fmt::Result {
    write!(
        f,
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color, stroke.width
    )?;
    if let Some((dash, gap)) = stroke.dash {
        write!(f, r#" stroke-dasharray="{},{}""#, dash, gap)?;
    }
    Ok(())
}

fn write_label(f: &mut fmt::Formatter<'_>, label: &Label) -> fmt::Result {
    let anchor = match label.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    write!(
        f,
        r#"<text x="{:.2}" y="{:.2}" fill="{}" text-anchor="{}" font-size="{}""#,
        label.pos.x, label.pos.y, label.color, anchor, label.size
    )?;
    if label.bold {
        f.write_str(r#" font-weight="bold""#)?;
    }
    f.write_char('>')?;
    write_escaped(f, &label.text)?;
    f.write_str("</text>")
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '&' => f.write_str("&amp;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}
