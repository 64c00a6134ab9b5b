// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame geometry and the data-to-pixel transform shared by every chart.
//!
//! A figure's frame is its pixel size minus fixed relative margins. Data is mapped
//! into a rectangle inside the frame (the frame itself for line charts, a vertically
//! inset one for bar charts) by a [`PlotTransform`].

use kurbo::{Point, Rect, Vec2};
use vizfig_scene::{FontFamily, TextStyle};
use vizfig_text::TextMeasurer;

use crate::frame::AXIS_FONT_SIZE;
use crate::numeric::Real;
use crate::partition::Interval;

/// Pixels of axis length reserved per tick marker.
pub const PIXELS_PER_MARKER: f64 = 80.0;

/// Widest left tick label the margin is sized for.
const LEFT_LABEL_TEMPLATE: &str = "-000.00";

/// Relative figure margins, as fractions of the figure width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Fraction of the height above the frame.
    pub top: f64,
    /// Fraction of the height below the frame.
    pub bottom: f64,
    /// Fraction of the width left of the frame.
    pub left: f64,
    /// Fraction of the width right of the frame.
    pub right: f64,
}

impl Margins {
    /// Margins used by line and scatter charts.
    pub const LINE: Self = Self {
        top: 0.10,
        bottom: 0.12,
        left: 0.12,
        right: 0.05,
    };

    /// Margins used by bar charts and histograms. The wider left margin fits stacked totals.
    pub const BAR: Self = Self {
        top: 0.10,
        bottom: 0.12,
        left: 0.15,
        right: 0.05,
    };

    /// The frame rectangle of a `width` x `height` figure.
    #[must_use]
    pub fn frame(&self, width: f64, height: f64) -> Rect {
        Rect::new(
            width * self.left,
            height * self.top,
            width * (1.0 - self.right),
            height * (1.0 - self.bottom),
        )
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::LINE
    }
}

/// Maps data coordinates into a pixel rectangle, with y growing upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    data: Rect,
    x: Interval,
    y: Interval,
}

impl PlotTransform {
    /// Maps `x` across the width and `y` up the height of `data`.
    ///
    /// Zero-span ranges are widened (see [`Interval::widened`]) so that a lone value
    /// lands in the middle of the rectangle.
    #[must_use]
    pub fn new(data: Rect, x: Interval, y: Interval) -> Self {
        Self {
            data,
            x: x.widened(),
            y: y.widened(),
        }
    }

    /// The pixel rectangle data is mapped into.
    #[must_use]
    pub fn data_rect(&self) -> Rect {
        self.data
    }

    /// The effective x range (after widening).
    #[must_use]
    pub fn x_range(&self) -> Interval {
        self.x
    }

    /// The effective y range (after widening).
    #[must_use]
    pub fn y_range(&self) -> Interval {
        self.y
    }

    /// Pixels per data unit along each axis.
    #[must_use]
    pub fn zoom(&self) -> Vec2 {
        Vec2::new(
            (self.data.width() / self.x.span()).abs(),
            (self.data.height() / self.y.span()).abs(),
        )
    }

    /// Maps a data x to a pixel x.
    #[must_use]
    pub fn map_x(&self, x: Real) -> f64 {
        self.data.x0 + (x - self.x.min()) * self.zoom().x
    }

    /// Maps a data y to a pixel y.
    #[must_use]
    pub fn map_y(&self, y: Real) -> f64 {
        self.data.y1 - (y - self.y.min()) * self.zoom().y
    }

    /// Maps a data point to a pixel point.
    #[must_use]
    pub fn map(&self, x: Real, y: Real) -> Point {
        Point::new(self.map_x(x), self.map_y(y))
    }
}

/// How many ticks fit along `extent_px` pixels, clamped to `[2, max]`.
#[must_use]
pub fn marker_budget(extent_px: f64, max: usize) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the ratio is clamped right after; negative values saturate to zero"
    )]
    let fit = (extent_px / PIXELS_PER_MARKER) as usize;
    fit.clamp(2, max.max(2))
}

/// Tick label size that fits the left margin and `left_ticks` rows along the frame.
pub(crate) fn tick_font_size(measurer: &dyn TextMeasurer, frame: Rect, left_ticks: usize) -> f64 {
    measurer.constrained_font_size(
        LEFT_LABEL_TEMPLATE,
        &tick_style(),
        3.0 * frame.x0 / 4.0 - 5.0,
        frame.height() / left_ticks.max(1) as f64,
    )
}

/// Monospace tick label style at the default size.
pub(crate) fn tick_style() -> TextStyle {
    TextStyle::new(AXIS_FONT_SIZE).with_family(FontFamily::Monospace)
}

/// The widest of `labels` at the tick label style.
pub(crate) fn widest_label<'a>(
    measurer: &dyn TextMeasurer,
    labels: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let style = tick_style();
    labels.into_iter().max_by(|a, b| {
        let wa = measurer.measure(a, &style).width_em;
        let wb = measurer.measure(b, &style).width_em;
        wa.total_cmp(&wb)
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn line_margins_frame_default_figure() {
        let frame = Margins::LINE.frame(600.0, 450.0);
        assert!((frame.x0 - 72.0).abs() < 1e-9, "{frame:?}");
        assert!((frame.y0 - 45.0).abs() < 1e-9, "{frame:?}");
        assert!((frame.x1 - 570.0).abs() < 1e-9, "{frame:?}");
        assert!((frame.y1 - 396.0).abs() < 1e-9, "{frame:?}");
    }

    #[test]
    fn transform_maps_range_onto_rect() {
        let t = PlotTransform::new(
            Rect::new(10.0, 20.0, 110.0, 220.0),
            Interval::new(0.0, 10.0),
            Interval::new(-1.0, 1.0),
        );
        assert_eq!(t.map(0.0, -1.0), Point::new(10.0, 220.0));
        assert_eq!(t.map(10.0, 1.0), Point::new(110.0, 20.0));
        assert_eq!(t.map(5.0, 0.0), Point::new(60.0, 120.0));
        assert_eq!(t.zoom(), Vec2::new(10.0, 100.0));
    }

    #[test]
    fn degenerate_range_centers_value() {
        let t = PlotTransform::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Interval::new(4.0, 4.0),
            Interval::new(-2.0, -2.0),
        );
        assert_eq!(t.map(4.0, -2.0), Point::new(50.0, 50.0));
    }

    #[test]
    fn tick_font_shrinks_with_crowded_rows() {
        let measurer = vizfig_text::EmTextMeasurer;
        let frame = Margins::LINE.frame(600.0, 450.0);
        let roomy = tick_font_size(&measurer, frame, 4);
        let crowded = tick_font_size(&measurer, frame, 100);
        assert!(roomy <= AXIS_FONT_SIZE);
        assert!(crowded < roomy, "{crowded} vs {roomy}");
    }

    #[test]
    fn widest_label_by_measured_width() {
        let measurer = vizfig_text::EmTextMeasurer;
        assert_eq!(widest_label(&measurer, ["ab", "abcd", "abc"]), Some("abcd"));
        assert_eq!(widest_label(&measurer, []), None);
    }

    #[test]
    fn budget_clamps() {
        assert_eq!(marker_budget(498.0, 10), 6);
        assert_eq!(marker_budget(351.0, 5), 4);
        assert_eq!(marker_budget(20.0, 5), 2);
        assert_eq!(marker_budget(10_000.0, 5), 5);
    }
}
