// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene primitives.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Line, Point, Rect, Vec2};
use peniko::Color;
use peniko::color::palette::css;
use vizfig_text::TextStyle;

use crate::DashPattern;

/// Handle to a node in a [`crate::SceneDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The arena index of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a clip rectangle in the document's defs section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClipId(pub(crate) u32);

impl ClipId {
    /// The defs index of this clip path.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A color + width + dash triple for stroked primitives.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// Dash pattern; solid when empty.
    pub dash: DashPattern,
}

impl StrokeStyle {
    /// A solid stroke.
    #[must_use]
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: DashPattern::solid(),
        }
    }

    /// Set the dash pattern.
    #[must_use]
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A straight stroked segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    /// Segment endpoints.
    pub line: Line,
    /// Stroke style.
    pub stroke: StrokeStyle,
}

impl LineNode {
    /// A line from `p0` to `p1`.
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>, stroke: StrokeStyle) -> Self {
        Self {
            line: Line::new(p0, p1),
            stroke,
        }
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    /// Geometry.
    pub rect: Rect,
    /// Fill color; `None` leaves the interior unpainted.
    pub fill: Option<Color>,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
    /// Corner radius applied to both axes.
    pub corner_radius: f64,
}

impl RectNode {
    /// An unfilled, unstroked rectangle.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            fill: None,
            stroke: None,
            corner_radius: 0.0,
        }
    }

    /// Set the fill color.
    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set the outline.
    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Set the corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }
}

/// A circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleNode {
    /// Geometry.
    pub circle: Circle,
    /// Fill color.
    pub fill: Option<Color>,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

impl CircleNode {
    /// A filled circle.
    pub fn filled(center: impl Into<Point>, radius: f64, color: Color) -> Self {
        Self {
            circle: Circle::new(center, radius),
            fill: Some(color),
            stroke: None,
        }
    }
}

/// A Bézier path (moves, lines, quads, closes).
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    /// Geometry.
    pub path: BezPath,
    /// Fill color; `None` leaves the interior unpainted.
    pub fill: Option<Color>,
    /// Optional stroke.
    pub stroke: Option<StrokeStyle>,
    /// Clip region.
    pub clip: Option<ClipId>,
    /// Round line caps and joins.
    pub round_caps: bool,
}

impl PathNode {
    /// An unpainted path. Set a fill and/or stroke before drawing.
    #[must_use]
    pub fn new(path: BezPath) -> Self {
        Self {
            path,
            fill: None,
            stroke: None,
            clip: None,
            round_caps: false,
        }
    }

    /// Set the fill color.
    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set the stroke.
    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Clip the path to a defs clip region.
    #[must_use]
    pub fn with_clip(mut self, clip: ClipId) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Enable round caps.
    #[must_use]
    pub fn with_round_caps(mut self, round_caps: bool) -> Self {
        self.round_caps = round_caps;
        self
    }
}

/// Horizontal text anchoring relative to the text position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start of the text.
    #[default]
    Start,
    /// The position is the horizontal center.
    Middle,
    /// The position is the end of the text.
    End,
}

/// A single line of unshaped text. `pos` is on the alphabetic baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    /// Text content.
    pub text: String,
    /// Anchor position.
    pub pos: Point,
    /// Font size, family, and weight.
    pub style: TextStyle,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Rotation in degrees about `pos`.
    pub angle: f64,
    /// Fill color.
    pub fill: Color,
}

impl TextNode {
    /// Black, start-anchored, unrotated text.
    pub fn new(text: impl Into<String>, pos: impl Into<Point>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            style,
            anchor: TextAnchor::Start,
            angle: 0.0,
            fill: css::BLACK,
        }
    }

    /// Set the anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the rotation angle in degrees.
    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Set the fill color.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }
}

/// A container that optionally clips and translates its children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupNode {
    /// Clip region applied to all children.
    pub clip: Option<ClipId>,
    /// Translation applied to all children.
    pub offset: Vec2,
}

impl GroupNode {
    /// A group that clips its children.
    #[must_use]
    pub fn clipped(clip: ClipId) -> Self {
        Self {
            clip: Some(clip),
            offset: Vec2::ZERO,
        }
    }
}

/// A spliced sub-document occupying `rect` of its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportNode {
    /// Placement and size of the sub-document.
    pub rect: Rect,
}

/// Everything a scene node can be.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A full-size background fill.
    Background(Color),
    /// See [`LineNode`].
    Line(LineNode),
    /// See [`RectNode`].
    Rect(RectNode),
    /// See [`CircleNode`].
    Circle(CircleNode),
    /// See [`PathNode`].
    Path(PathNode),
    /// See [`TextNode`].
    Text(TextNode),
    /// See [`GroupNode`].
    Group(GroupNode),
    /// See [`ViewportNode`].
    Viewport(ViewportNode),
}

impl Primitive {
    /// Returns `true` for node kinds that can hold children.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Group(_) | Self::Viewport(_))
    }

    pub(crate) fn remap_clip(&mut self, map: impl Fn(ClipId) -> ClipId) {
        let clip = match self {
            Self::Path(p) => &mut p.clip,
            Self::Group(g) => &mut g.clip,
            _ => return,
        };
        if let Some(id) = clip {
            *id = map(*id);
        }
    }
}

macro_rules! impl_from_node {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Primitive {
                fn from(node: $node) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    LineNode => Line,
    RectNode => Rect,
    CircleNode => Circle,
    PathNode => Path,
    TextNode => Text,
    GroupNode => Group,
    ViewportNode => Viewport,
);

/// A primitive plus the ids of its children.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// The primitive drawn by this node.
    pub primitive: Primitive,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// Child ids in draw order. Always empty for non-container nodes.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
