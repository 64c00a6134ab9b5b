// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line, scatter, bar, histogram, and grid figures for `vizfig_scene`.
//!
//! Every figure follows the same lifecycle:
//! - plot calls append data series (and are rejected with a [`ChartError`] when the
//!   data does not fit the figure, leaving it unchanged);
//! - [`Figure::build`] computes ranges, lays out the frame, ticks, and legend, and
//!   regenerates the figure's [`SceneDocument`];
//! - the scene is then walked directly or serialized with [`Figure::svg_text`].
//!
//! Plot calls accept any primitive number type through [`IntoReal`].
//!
//! Rejections are logged at `warn` level and build summaries at `debug` level
//! through the `log` facade.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod bar_chart;
mod error;
mod figure;
#[cfg(not(feature = "std"))]
mod float;
mod frame;
mod group;
mod histogram;
mod layout;
mod legend;
mod line_chart;
mod numeric;
mod palette;
mod partition;
mod style;

pub use bar_chart::{BarChart, DEFAULT_RELATIVE_WIDTH, StackExtents, stack_extents};
pub use error::ChartError;
pub use figure::{
    AXIS_LABEL_FONT_SIZE, AxisMode, DEFAULT_HEIGHT, DEFAULT_WIDTH, Figure, FigureBase,
    TITLE_FONT_SIZE,
};
pub use frame::{AXIS_FONT_SIZE, FRAME_STROKE_WIDTH, Frame, FrameType, MARKER_LENGTH, Marker, Side};
pub use group::{FigureGrid, MAX_GRID_DIMENSION};
pub use histogram::{
    Histogram, HistogramChart, bin_centers, bin_counts, calculate_histogram, histogram_boundaries,
};
pub use layout::{Margins, PIXELS_PER_MARKER, PlotTransform, marker_budget};
pub use legend::{LEGEND_FONT_SIZE, Legend, LegendAlignment, LegendEntry, Swatch};
pub use line_chart::LineChart;
pub use numeric::{IntoReal, Real, to_reals};
pub use palette::{BRIGHT, ColorCycle, GUIDE_GRAY, LIGHT, MUTED, VIBRANT, rgb, rgb_hex};
pub use partition::{
    Interval, MAX_RANGE_STEPS, MarkerSet, binary_search_interval, generate, make_range, partition,
};
pub use style::{SeriesKind, SeriesStyle};

pub use vizfig_scene::{DashParseError, DashPattern, SceneDocument};
pub use vizfig_text::{EmTextMeasurer, TextMeasurer};
