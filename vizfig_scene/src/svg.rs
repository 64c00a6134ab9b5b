// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization for [`SceneDocument`].

use alloc::format;
use alloc::string::String;

use kurbo::{BezPath, PathEl};
use peniko::Color;
use vizfig_text::FontWeight;

use crate::node::{ClipId, NodeId, Primitive, StrokeStyle, TextAnchor};
use crate::SceneDocument;

impl SceneDocument {
    /// Serializes the document as a standalone SVG string.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width(),
            h = self.height(),
        ));
        out.push('\n');

        if !self.clips().is_empty() {
            out.push_str("<defs>\n");
            for (i, rect) in self.clips().iter().enumerate() {
                out.push_str(&format!(
                    r#"<clipPath id="clip-{i}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                ));
                out.push('\n');
            }
            out.push_str("</defs>\n");
        }

        for id in self.roots() {
            self.write_node(&mut out, *id);
        }

        out.push_str("</svg>\n");
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.primitive {
            Primitive::Background(color) => {
                out.push_str(r#"<rect width="100%" height="100%""#);
                write_paint_attr(out, "fill", Some(*color));
                out.push_str("/>\n");
            }
            Primitive::Line(l) => {
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    l.line.p0.x, l.line.p0.y, l.line.p1.x, l.line.p1.y
                ));
                write_stroke_attrs(out, Some(&l.stroke));
                out.push_str("/>\n");
            }
            Primitive::Rect(r) => {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.rect.x0,
                    r.rect.y0,
                    r.rect.width(),
                    r.rect.height(),
                ));
                if r.corner_radius > 0.0 {
                    out.push_str(&format!(
                        r#" rx="{0}" ry="{0}""#,
                        r.corner_radius
                    ));
                }
                write_paint_attr(out, "fill", r.fill);
                write_stroke_attrs(out, r.stroke.as_ref());
                out.push_str("/>\n");
            }
            Primitive::Circle(c) => {
                out.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    c.circle.center.x, c.circle.center.y, c.circle.radius
                ));
                write_paint_attr(out, "fill", c.fill);
                write_stroke_attrs(out, c.stroke.as_ref());
                out.push_str("/>\n");
            }
            Primitive::Path(p) => {
                out.push_str(&format!(r#"<path d="{}""#, path_data(&p.path)));
                write_paint_attr(out, "fill", p.fill);
                write_stroke_attrs(out, p.stroke.as_ref());
                if p.round_caps {
                    out.push_str(r#" stroke-linecap="round" stroke-linejoin="round""#);
                }
                write_clip_attr(out, p.clip);
                out.push_str("/>\n");
            }
            Primitive::Text(t) => {
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" font-family="{}""#,
                    t.pos.x,
                    t.pos.y,
                    t.style.font_size,
                    escape_xml(t.style.font_family.as_css_family()),
                ));
                if t.style.font_weight != FontWeight::NORMAL {
                    out.push_str(&format!(r#" font-weight="{}""#, t.style.font_weight.0));
                }
                out.push_str(match t.anchor {
                    TextAnchor::Start => r#" text-anchor="start""#,
                    TextAnchor::Middle => r#" text-anchor="middle""#,
                    TextAnchor::End => r#" text-anchor="end""#,
                });
                if t.angle != 0.0 {
                    out.push_str(&format!(
                        r#" transform="rotate({} {} {})""#,
                        t.angle, t.pos.x, t.pos.y
                    ));
                }
                write_paint_attr(out, "fill", Some(t.fill));
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
            Primitive::Group(g) => {
                out.push_str("<g");
                if g.offset.x != 0.0 || g.offset.y != 0.0 {
                    out.push_str(&format!(
                        r#" transform="translate({} {})""#,
                        g.offset.x, g.offset.y
                    ));
                }
                write_clip_attr(out, g.clip);
                out.push_str(">\n");
                for child in node.children() {
                    self.write_node(out, *child);
                }
                out.push_str("</g>\n");
            }
            Primitive::Viewport(v) => {
                out.push_str(&format!(
                    r#"<svg x="{}" y="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
                    v.rect.x0,
                    v.rect.y0,
                    v.rect.width(),
                    v.rect.height(),
                    v.rect.width(),
                    v.rect.height(),
                ));
                out.push('\n');
                for child in node.children() {
                    self.write_node(out, *child);
                }
                out.push_str("</svg>\n");
            }
        }
    }
}

/// SVG path data for `path`. Cubic segments are kept as `C`.
#[must_use]
pub fn path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        if !d.is_empty() {
            d.push(' ');
        }
        match el {
            PathEl::MoveTo(p) => d.push_str(&format!("M{} {}", p.x, p.y)),
            PathEl::LineTo(p) => d.push_str(&format!("L{} {}", p.x, p.y)),
            PathEl::QuadTo(c, p) => d.push_str(&format!("Q{} {} {} {}", c.x, c.y, p.x, p.y)),
            PathEl::CurveTo(c0, c1, p) => d.push_str(&format!(
                "C{} {} {} {} {} {}",
                c0.x, c0.y, c1.x, c1.y, p.x, p.y
            )),
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let paint = format!("rgb({},{},{})", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (paint, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Option<Color>) {
    let Some(color) = color else {
        out.push_str(&format!(r#" {name}="none""#));
        return;
    };
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn write_stroke_attrs(out: &mut String, stroke: Option<&StrokeStyle>) {
    let Some(stroke) = stroke else {
        return;
    };
    write_paint_attr(out, "stroke", Some(stroke.color));
    out.push_str(&format!(r#" stroke-width="{}""#, stroke.width));
    if !stroke.dash.is_solid() {
        out.push_str(&format!(r#" stroke-dasharray="{}""#, stroke.dash));
    }
}

fn write_clip_attr(out: &mut String, clip: Option<ClipId>) {
    if let Some(clip) = clip {
        out.push_str(&format!(r#" clip-path="url(#clip-{})""#, clip.index()));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{BezPath, Point, Rect};
    use peniko::color::palette::css;
    use vizfig_text::TextStyle;

    use super::*;
    use crate::{DashPattern, GroupNode, LineNode, PathNode, RectNode, TextNode};

    #[test]
    fn text_is_escaped_and_rotated() {
        let mut doc = SceneDocument::with_size(10, 10);
        doc.draw_text(
            TextNode::new("a<b & c", (5.0, 5.0), TextStyle::new(11.0))
                .with_anchor(TextAnchor::Middle)
                .with_angle(-90.0),
        );
        let svg = doc.to_svg_string();
        assert!(svg.contains("a&lt;b &amp; c"), "{svg}");
        assert!(svg.contains(r#"transform="rotate(-90 5 5)""#), "{svg}");
        assert!(svg.contains(r#"text-anchor="middle""#), "{svg}");
    }

    #[test]
    fn clipped_path_references_defs() {
        let mut doc = SceneDocument::with_size(100, 100);
        let clip = doc.define_clip_rect(Rect::new(10.0, 10.0, 90.0, 90.0));
        let mut path = BezPath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(50.0, 25.0));
        doc.draw_path(
            PathNode::new(path)
                .with_stroke(
                    StrokeStyle::solid(css::RED, 2.0).with_dash(DashPattern::new([4.0, 2.0])),
                )
                .with_clip(clip)
                .with_round_caps(true),
        );
        let svg = doc.to_svg_string();
        assert!(svg.contains(r#"<clipPath id="clip-0"><rect x="10" y="10" width="80" height="80"/>"#), "{svg}");
        assert!(svg.contains(r#"d="M0 0 L50 25""#), "{svg}");
        assert!(svg.contains(r#"clip-path="url(#clip-0)""#), "{svg}");
        assert!(svg.contains(r#"stroke-dasharray="4,2""#), "{svg}");
        assert!(svg.contains(r#"fill="none""#), "{svg}");
    }

    #[test]
    fn translucent_fill_writes_opacity() {
        let mut doc = SceneDocument::with_size(10, 10);
        doc.draw_rect(
            RectNode::new(Rect::new(0.0, 0.0, 4.0, 4.0))
                .with_fill(css::WHITE.with_alpha(0.5))
                .with_corner_radius(2.0),
        );
        let svg = doc.to_svg_string();
        assert!(svg.contains(r#"fill="rgb(255,255,255)""#), "{svg}");
        assert!(svg.contains("fill-opacity="), "{svg}");
        assert!(svg.contains(r#"rx="2" ry="2""#), "{svg}");
    }

    #[test]
    fn spliced_scene_becomes_nested_svg() {
        let mut child = SceneDocument::with_size(20, 10);
        let group = child.add_group(GroupNode::default());
        child.push(
            group,
            LineNode::new((0.0, 0.0), (20.0, 10.0), StrokeStyle::default()),
        );
        let mut parent = SceneDocument::with_size(40, 10);
        parent.append_scene(&child, Point::new(20.0, 0.0));
        let svg = parent.to_svg_string();
        assert!(svg.contains(r#"<svg x="20" y="0" width="20" height="10""#), "{svg}");
        assert!(svg.contains("<g>\n<line"), "{svg}");
    }
}
