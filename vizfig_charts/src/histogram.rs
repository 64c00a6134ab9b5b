// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histograms: binning plus a bar chart of the counts.

use alloc::vec;
use alloc::vec::Vec;

use peniko::Color;

use crate::bar_chart::BarChart;
use crate::figure::{Figure, FigureBase};
use crate::numeric::{IntoReal, Real, to_reals};
use crate::partition::{Interval, binary_search_interval};
use crate::ChartError;

/// Bin boundaries, centers, and counts of one data set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Histogram {
    /// `n + 1` ascending boundaries, or one when every value is equal.
    pub boundaries: Vec<Real>,
    /// Midpoint of each bin.
    pub centers: Vec<Real>,
    /// Values falling in each bin.
    pub counts: Vec<usize>,
}

/// `n + 1` evenly spaced boundaries from `min` to `max`.
///
/// Equal bounds give a single boundary, describing one degenerate bin.
#[must_use]
pub fn histogram_boundaries(min: Real, max: Real, n: usize) -> Vec<Real> {
    if min == max || n == 0 {
        return vec![min];
    }
    let width = (max - min) / n as Real;
    (0..=n)
        .map(|i| if i == n { max } else { min + i as Real * width })
        .collect()
}

/// The midpoint of each pair of neighboring boundaries.
#[must_use]
pub fn bin_centers(bounds: &[Real]) -> Vec<Real> {
    match bounds {
        [single] => vec![*single],
        _ => bounds.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect(),
    }
}

/// How many `values` land in each bin. Out-of-range and non-finite values are dropped.
#[must_use]
pub fn bin_counts(values: &[Real], bounds: &[Real]) -> Vec<usize> {
    let bins = bounds.len().saturating_sub(1).max(usize::from(!bounds.is_empty()));
    let mut counts = vec![0; bins];
    for &value in values.iter().filter(|v| v.is_finite()) {
        if let Some(bin) = binary_search_interval(value, bounds) {
            counts[bin] += 1;
        }
    }
    counts
}

/// Bins `values` into `n` equal-width bins spanning their finite range.
pub fn calculate_histogram<T: IntoReal>(values: &[T], n: usize) -> Result<Histogram, ChartError> {
    if n == 0 {
        return Err(ChartError::InvalidBinCount.logged());
    }
    let values = to_reals(values);
    let range =
        Interval::enclosing(values.iter().copied()).ok_or_else(|| ChartError::EmptyData.logged())?;
    let boundaries = histogram_boundaries(range.min(), range.max(), n);
    let centers = bin_centers(&boundaries);
    let counts = bin_counts(&values, &boundaries);
    Ok(Histogram {
        boundaries,
        centers,
        counts,
    })
}

/// A histogram figure: full-width square bars over bin centers.
#[derive(Clone, Debug)]
pub struct HistogramChart {
    bars: BarChart,
    histogram: Option<Histogram>,
}

impl HistogramChart {
    /// An empty 600x450 histogram.
    #[must_use]
    pub fn new() -> Self {
        let mut bars = BarChart::new();
        bars.set_bar_relative_width(1.0);
        bars.set_rounded_edges(false);
        Self {
            bars,
            histogram: None,
        }
    }

    /// Replaces the plotted data with a histogram of `values` in `num_bins` bins.
    ///
    /// `None` picks the next palette color.
    pub fn plot<T: IntoReal>(
        &mut self,
        values: &[T],
        num_bins: usize,
        color: impl Into<Option<Color>>,
    ) -> Result<(), ChartError> {
        let histogram = calculate_histogram(values, num_bins)?;
        self.bars.clear_data();
        self.bars
            .plot(&histogram.centers, &histogram.counts, color)?;
        self.histogram = Some(histogram);
        Ok(())
    }

    /// The bins of the last plot.
    #[must_use]
    pub fn histogram(&self) -> Option<&Histogram> {
        self.histogram.as_ref()
    }

    /// The underlying bar chart.
    #[must_use]
    pub fn bars(&self) -> &BarChart {
        &self.bars
    }

    /// The underlying bar chart, for settings not mirrored here.
    pub fn bars_mut(&mut self) -> &mut BarChart {
        &mut self.bars
    }

    /// Set the x axis label.
    pub fn set_x_label(&mut self, label: &str) {
        self.bars.set_x_label(label);
    }

    /// Set the y axis label.
    pub fn set_y_label(&mut self, label: &str) {
        self.bars.set_y_label(label);
    }

    /// Draw dashed gridlines through every tick.
    pub fn set_grid(&mut self, grid: bool) {
        self.bars.set_grid(grid);
    }

    /// Round the top corners of each bin.
    pub fn set_rounded_edges(&mut self, rounded: bool) {
        self.bars.set_rounded_edges(rounded);
    }

    /// Adds a y tick, drawn when it lies inside the y range.
    pub fn add_y_marker(&mut self, y: impl IntoReal) {
        self.bars.add_y_marker(y);
    }
}

impl Default for HistogramChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure for HistogramChart {
    fn base(&self) -> &FigureBase {
        self.bars.base()
    }

    fn base_mut(&mut self) -> &mut FigureBase {
        self.bars.base_mut()
    }

    fn build(&mut self) {
        self.bars.build();
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}
