// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-series visual style.

use peniko::Color;
use peniko::color::palette::css;
use vizfig_scene::DashPattern;

/// How a line/scatter series is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// Points joined by a stroked path.
    #[default]
    Line,
    /// Unconnected filled circles.
    Scatter,
}

/// Color, width, dash, and kind for one line/scatter series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    /// Stroke or point color.
    pub color: Color,
    /// Stroke width for lines, point radius for scatter.
    pub width: f64,
    /// Dash pattern for lines. Ignored for scatter.
    pub dash: DashPattern,
    /// Line or scatter rendering.
    pub kind: SeriesKind,
}

impl SeriesStyle {
    /// A solid 2px line in `color`.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            width: 2.0,
            dash: DashPattern::solid(),
            kind: SeriesKind::Line,
        }
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the stroke width or point radius.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the dash pattern.
    #[must_use]
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Render as scatter points.
    #[must_use]
    pub fn scatter(mut self) -> Self {
        self.kind = SeriesKind::Scatter;
        self
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self::new(css::BLACK)
    }
}
