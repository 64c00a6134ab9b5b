// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plot frame: border, tick markers, labels, and gridlines.
//!
//! A [`Frame`] knows nothing about data. Callers convert tick values to pixel offsets
//! along each side, add them as markers, and then [`Frame::draw`] the result. Drawing
//! also defines a clip rectangle matching the frame so series can be clipped to it.

use alloc::collections::BTreeSet;
use alloc::string::String;
use core::cmp::Ordering;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use vizfig_scene::{
    ClipId, DashPattern, FontFamily, LineNode, RectNode, SceneDocument, StrokeStyle, TextAnchor,
    TextNode, TextStyle,
};
use vizfig_text::{REFERENCE_POINT_SIZE, em_to_px};

use crate::palette::GUIDE_GRAY;

/// Stroke width of the border, ticks, and gridlines.
pub const FRAME_STROKE_WIDTH: f64 = 0.75;

/// Length of a tick line, in pixels.
pub const MARKER_LENGTH: f64 = 5.0;

/// Default tick label size, in points.
pub const AXIS_FONT_SIZE: f64 = 11.0;

/// Border style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrameType {
    /// A closed rectangle around the plot area.
    #[default]
    Full,
    /// Only the left and bottom axis lines.
    AxesOnly,
}

/// A frame side that carries markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left edge; offsets run down from the top of the frame.
    Left,
    /// Top edge; offsets run right from the left of the frame.
    Top,
    /// Right edge; offsets run down from the top of the frame.
    Right,
    /// Bottom edge; offsets run right from the left of the frame.
    Bottom,
}

/// A labeled tick at a pixel offset along a frame side.
///
/// Markers order by offset, then text. Two markers are equal only if both match.
#[derive(Clone, Debug)]
pub struct Marker {
    /// Pixel offset from the start of the side.
    pub offset: f64,
    /// Label text.
    pub text: String,
}

impl Ord for Marker {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset
            .total_cmp(&other.offset)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Marker {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Marker {}

/// A plot frame of a fixed pixel size, drawn at an origin.
#[derive(Clone, Debug)]
pub struct Frame {
    width: f64,
    height: f64,
    frame_type: FrameType,
    grid: bool,
    font_size: f64,
    bottom_label_angle: f64,
    left: BTreeSet<Marker>,
    top: BTreeSet<Marker>,
    right: BTreeSet<Marker>,
    bottom: BTreeSet<Marker>,
}

impl Frame {
    /// A full frame without markers or grid.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            frame_type: FrameType::Full,
            grid: false,
            font_size: AXIS_FONT_SIZE,
            bottom_label_angle: 0.0,
            left: BTreeSet::new(),
            top: BTreeSet::new(),
            right: BTreeSet::new(),
            bottom: BTreeSet::new(),
        }
    }

    /// Enable or disable dashed gridlines through every marker.
    #[must_use]
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Set the border style.
    #[must_use]
    pub fn with_frame_type(mut self, frame_type: FrameType) -> Self {
        self.frame_type = frame_type;
        self
    }

    /// Set the tick label size in points.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Rotate bottom labels by `angle` degrees. Rotated labels hang from their end.
    #[must_use]
    pub fn with_bottom_label_angle(mut self, angle: f64) -> Self {
        self.bottom_label_angle = angle;
        self
    }

    /// Adds a marker `offset` pixels below the top of the left side.
    pub fn add_left_marker(&mut self, offset: f64, text: impl Into<String>) {
        self.add_marker(Side::Left, offset, text);
    }

    /// Adds a marker `offset` pixels right of the start of the top side.
    pub fn add_top_marker(&mut self, offset: f64, text: impl Into<String>) {
        self.add_marker(Side::Top, offset, text);
    }

    /// Adds a marker `offset` pixels below the top of the right side.
    pub fn add_right_marker(&mut self, offset: f64, text: impl Into<String>) {
        self.add_marker(Side::Right, offset, text);
    }

    /// Adds a marker `offset` pixels right of the start of the bottom side.
    pub fn add_bottom_marker(&mut self, offset: f64, text: impl Into<String>) {
        self.add_marker(Side::Bottom, offset, text);
    }

    /// Adds a marker to `side`. Identical (offset, text) pairs are kept once.
    pub fn add_marker(&mut self, side: Side, offset: f64, text: impl Into<String>) {
        self.side_mut(side).insert(Marker {
            offset,
            text: text.into(),
        });
    }

    /// Markers on `side`, ordered by offset.
    pub fn markers(&self, side: Side) -> impl Iterator<Item = &Marker> {
        self.side(side).iter()
    }

    fn side(&self, side: Side) -> &BTreeSet<Marker> {
        match side {
            Side::Left => &self.left,
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut BTreeSet<Marker> {
        match side {
            Side::Left => &mut self.left,
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
        }
    }

    /// Draws markers, then the border, then defines the frame clip rectangle.
    ///
    /// Returns the clip id callers should apply to data drawn inside the frame.
    pub fn draw(&self, doc: &mut SceneDocument, origin: Point) -> ClipId {
        let rect = Rect::from_origin_size(origin, (self.width, self.height));
        for side in [Side::Left, Side::Top, Side::Right, Side::Bottom] {
            for marker in self.side(side) {
                self.draw_marker(doc, rect, side, marker);
            }
        }

        let border = StrokeStyle::solid(GUIDE_GRAY, FRAME_STROKE_WIDTH);
        match self.frame_type {
            FrameType::Full => {
                doc.draw_rect(RectNode::new(rect).with_stroke(border));
            }
            FrameType::AxesOnly => {
                doc.draw_line(LineNode::new(
                    (rect.x0, rect.y0),
                    (rect.x0, rect.y1),
                    border.clone(),
                ));
                doc.draw_line(LineNode::new((rect.x0, rect.y1), (rect.x1, rect.y1), border));
            }
        }

        doc.define_clip_rect(rect)
    }

    fn draw_marker(&self, doc: &mut SceneDocument, rect: Rect, side: Side, marker: &Marker) {
        let tick_stroke = StrokeStyle::solid(GUIDE_GRAY, FRAME_STROKE_WIDTH);
        let grid_stroke = tick_stroke
            .clone()
            .with_dash(DashPattern::new([FRAME_STROKE_WIDTH, FRAME_STROKE_WIDTH]));
        let em = self.font_size / REFERENCE_POINT_SIZE;
        let style = TextStyle::new(self.font_size).with_family(FontFamily::Monospace);
        let p = marker.offset;

        let (tick, label, grid) = match side {
            Side::Left => {
                let y = rect.y0 + p;
                (
                    ((rect.x0, y), (rect.x0 - MARKER_LENGTH, y)),
                    TextNode::new(
                        marker.text.clone(),
                        (rect.x0 - 2.0 * MARKER_LENGTH, y + em_to_px(em / 4.0)),
                        style,
                    )
                    .with_anchor(TextAnchor::End),
                    ((rect.x0, y), (rect.x1, y)),
                )
            }
            Side::Right => {
                let y = rect.y0 + p;
                (
                    ((rect.x1, y), (rect.x1 + MARKER_LENGTH, y)),
                    TextNode::new(
                        marker.text.clone(),
                        (rect.x1 + 2.0 * MARKER_LENGTH, y + em_to_px(em / 4.0)),
                        style,
                    )
                    .with_anchor(TextAnchor::Start),
                    ((rect.x0, y), (rect.x1, y)),
                )
            }
            Side::Bottom => {
                let x = rect.x0 + p;
                let label = if self.bottom_label_angle == 0.0 {
                    TextNode::new(
                        marker.text.clone(),
                        (x, rect.y1 + MARKER_LENGTH + em_to_px(em)),
                        style,
                    )
                    .with_anchor(TextAnchor::Middle)
                } else {
                    TextNode::new(
                        marker.text.clone(),
                        (x, rect.y1 + 2.0 * MARKER_LENGTH),
                        style,
                    )
                    .with_anchor(TextAnchor::End)
                    .with_angle(self.bottom_label_angle)
                };
                (
                    ((x, rect.y1), (x, rect.y1 + MARKER_LENGTH)),
                    label,
                    ((x, rect.y0), (x, rect.y1)),
                )
            }
            Side::Top => {
                let x = rect.x0 + p;
                (
                    ((x, rect.y0), (x, rect.y0 - MARKER_LENGTH)),
                    TextNode::new(
                        marker.text.clone(),
                        (x, rect.y0 - 2.0 * MARKER_LENGTH),
                        style,
                    )
                    .with_anchor(TextAnchor::Middle),
                    ((x, rect.y0), (x, rect.y1)),
                )
            }
        };

        doc.draw_line(LineNode::new(tick.0, tick.1, tick_stroke));
        doc.draw_text(label.with_fill(css::BLACK));
        if self.grid {
            doc.draw_line(LineNode::new(grid.0, grid.1, grid_stroke));
        }
    }
}
