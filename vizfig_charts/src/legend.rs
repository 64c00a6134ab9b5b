// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating legend boxes.
//!
//! A legend is a translucent rounded box listing one row per series: a swatch in the
//! series style followed by its label. The box is sized from the longest label and
//! placed at one of four corners relative to an anchor point.

use alloc::string::String;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use peniko::color::palette::css;
use smallvec::SmallVec;
use vizfig_scene::{
    CircleNode, DashPattern, LineNode, RectNode, SceneDocument, StrokeStyle, TextAnchor, TextNode,
    TextStyle,
};
use vizfig_text::{REFERENCE_POINT_SIZE, TextMeasurer, em_to_px};

use crate::frame::FRAME_STROKE_WIDTH;
use crate::palette::GUIDE_GRAY;

/// Label size, in points.
pub const LEGEND_FONT_SIZE: f64 = 12.0;

const MARGIN_EM: f64 = 0.5;
const SWATCH_EM: f64 = 1.5;
const BAR_SWATCH_EM: f64 = 0.75;
const SPACING_EM: f64 = 0.5;
const POINT_RADIUS_EM: f64 = 1.0 / 3.0;
const LINE_SWATCH_WIDTH: f64 = 2.0;
const BOX_OPACITY: f32 = 0.9;
const BOX_CORNER_RADIUS: f64 = 4.0;

/// How an entry's series is depicted.
#[derive(Clone, Debug, PartialEq)]
pub enum Swatch {
    /// A short stroked line with the series dash pattern.
    Line(DashPattern),
    /// A filled circle.
    Point,
    /// A filled square.
    Bar,
}

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Label text.
    pub label: String,
    /// Swatch style.
    pub swatch: Swatch,
    /// Swatch color.
    pub color: Color,
}

impl LegendEntry {
    /// A row labeled `label`.
    pub fn new(label: impl Into<String>, swatch: Swatch, color: Color) -> Self {
        Self {
            label: label.into(),
            swatch,
            color,
        }
    }
}

/// Which corner of the box sits next to the anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendAlignment {
    /// The box hangs right and down from the anchor.
    TopLeft,
    /// The box hangs left and down from the anchor.
    #[default]
    TopRight,
    /// The box rises right and up from the anchor.
    BottomLeft,
    /// The box rises left and up from the anchor.
    BottomRight,
}

/// An ordered list of legend rows.
#[derive(Clone, Debug, Default)]
pub struct Legend {
    entries: SmallVec<[LegendEntry; 4]>,
}

impl Legend {
    /// An empty legend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Rows are drawn top to bottom in insertion order.
    pub fn push(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }

    /// Rows in draw order.
    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Box size in pixels: the longest label plus swatch and margins, one em per row.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let style = TextStyle::new(LEGEND_FONT_SIZE);
        let label_em = self
            .entries
            .iter()
            .map(|e| measurer.measure(&e.label, &style).width_em)
            .fold(0.0_f64, f64::max);
        let em = LEGEND_FONT_SIZE / REFERENCE_POINT_SIZE;
        Size::new(
            em_to_px(2.0 * MARGIN_EM + SWATCH_EM + SPACING_EM + label_em),
            em_to_px(self.entries.len() as f64 * em + 2.0 * MARGIN_EM),
        )
    }

    /// Draws the legend next to `anchor`, `margin` pixels away on both axes.
    ///
    /// Returns the box rectangle, or `None` (drawing nothing) if there are no rows.
    pub fn draw(
        &self,
        doc: &mut SceneDocument,
        measurer: &dyn TextMeasurer,
        anchor: Point,
        margin: f64,
        alignment: LegendAlignment,
    ) -> Option<Rect> {
        if self.entries.is_empty() {
            return None;
        }
        let size = self.measure(measurer);
        let x = match alignment {
            LegendAlignment::TopLeft | LegendAlignment::BottomLeft => anchor.x + margin,
            LegendAlignment::TopRight | LegendAlignment::BottomRight => {
                anchor.x - size.width - margin
            }
        };
        let y = match alignment {
            LegendAlignment::TopLeft | LegendAlignment::TopRight => anchor.y + margin,
            LegendAlignment::BottomLeft | LegendAlignment::BottomRight => {
                anchor.y - size.height - margin
            }
        };
        let bounds = Rect::from_origin_size((x, y), size);

        doc.draw_rect(
            RectNode::new(bounds)
                .with_fill(css::WHITE.with_alpha(BOX_OPACITY))
                .with_stroke(StrokeStyle::solid(GUIDE_GRAY, FRAME_STROKE_WIDTH))
                .with_corner_radius(BOX_CORNER_RADIUS),
        );

        let em = LEGEND_FONT_SIZE / REFERENCE_POINT_SIZE;
        let swatch_x0 = x + em_to_px(MARGIN_EM);
        let swatch_center = x + em_to_px(MARGIN_EM + SWATCH_EM / 2.0);
        let label_x = x + em_to_px(MARGIN_EM + SWATCH_EM + SPACING_EM);
        for (i, entry) in self.entries.iter().enumerate() {
            let row_y = y + em_to_px(MARGIN_EM + em / 2.0 + i as f64 * em);
            match &entry.swatch {
                Swatch::Line(dash) => {
                    doc.draw_line(LineNode::new(
                        (swatch_x0, row_y),
                        (swatch_x0 + em_to_px(SWATCH_EM), row_y),
                        StrokeStyle::solid(entry.color, LINE_SWATCH_WIDTH).with_dash(dash.clone()),
                    ));
                }
                Swatch::Point => {
                    doc.draw_circle(CircleNode::filled(
                        (swatch_center, row_y),
                        em_to_px(POINT_RADIUS_EM),
                        entry.color,
                    ));
                }
                Swatch::Bar => {
                    let side = em_to_px(BAR_SWATCH_EM);
                    doc.draw_rect(
                        RectNode::new(Rect::from_center_size((swatch_center, row_y), (side, side)))
                            .with_fill(entry.color),
                    );
                }
            }
            doc.draw_text(
                TextNode::new(
                    entry.label.clone(),
                    (label_x, row_y + em_to_px(em / 4.0)),
                    TextStyle::new(LEGEND_FONT_SIZE),
                )
                .with_anchor(TextAnchor::Start),
            );
        }
        Some(bounds)
    }
}
