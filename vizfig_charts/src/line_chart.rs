// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and scatter figures over numeric or categorical x axes.
//!
//! A [`LineChart`] holds either numeric series (explicit x values) or categorical
//! series (y values against a shared label set). The mode follows the last plot call
//! that supplied x data; switching modes drops the other mode's series.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::color::palette::css;
use vizfig_scene::{CircleNode, ClipId, GroupNode, PathNode, SceneDocument, StrokeStyle};
use vizfig_text::{EmTextMeasurer, TextMeasurer};

use crate::figure::{AxisMode, Figure, FigureBase, draw_axis_labels};
use crate::frame::{Frame, FrameType};
use crate::layout::{
    Margins, PlotTransform, marker_budget, tick_font_size, tick_style, widest_label,
};
use crate::legend::{Legend, LegendAlignment, LegendEntry, Swatch};
use crate::numeric::{IntoReal, Real, to_reals};
use crate::partition::{Interval, MarkerSet, generate, partition};
use crate::style::{SeriesKind, SeriesStyle};
use crate::ChartError;

/// Most y ticks drawn, before custom markers.
const MAX_Y_MARKERS: usize = 5;

/// Most x ticks drawn, before custom markers.
const MAX_X_MARKERS: usize = 10;

/// Distance of the legend from the frame corner, in pixels.
const LEGEND_MARGIN: f64 = 5.0;

/// One plotted series. Categorical series store their label indices as x.
#[derive(Clone, Debug)]
struct Series {
    x: Vec<Real>,
    y: Vec<Real>,
    style: SeriesStyle,
}

/// A line and scatter figure.
#[derive(Clone, Debug)]
pub struct LineChart {
    base: FigureBase,
    mode: AxisMode,
    series: Vec<Series>,
    labels: Vec<String>,
    hold: bool,
    grid: bool,
    frame_type: FrameType,
    x_range: Option<Interval>,
    y_range: Option<Interval>,
    x_markers: MarkerSet,
    y_markers: MarkerSet,
    legend: Vec<String>,
    legend_alignment: LegendAlignment,
    x_label: String,
    y_label: String,
    frame: Rect,
}

impl LineChart {
    /// An empty 600x450 figure with hold on and no grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: FigureBase::new(),
            mode: AxisMode::Numeric,
            series: Vec::new(),
            labels: Vec::new(),
            hold: true,
            grid: false,
            frame_type: FrameType::Full,
            x_range: None,
            y_range: None,
            x_markers: MarkerSet::new(),
            y_markers: MarkerSet::new(),
            legend: Vec::new(),
            legend_alignment: LegendAlignment::TopRight,
            x_label: String::new(),
            y_label: String::new(),
            frame: Rect::ZERO,
        }
    }

    /// Plots `y` against `x` as a line.
    pub fn plot<X: IntoReal, Y: IntoReal>(
        &mut self,
        x: &[X],
        y: &[Y],
        style: SeriesStyle,
    ) -> Result<(), ChartError> {
        if x.len() != y.len() {
            return Err(ChartError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            }
            .logged());
        }
        self.push_numeric(to_reals(x), to_reals(y), style);
        Ok(())
    }

    /// Plots `y` against the current x axis.
    ///
    /// Numeric charts use `x = 1..=n`. Categorical charts plot against the existing
    /// labels, so `y` must have one value per label.
    pub fn plot_y<Y: IntoReal>(&mut self, y: &[Y], style: SeriesStyle) -> Result<(), ChartError> {
        match self.mode {
            AxisMode::Numeric => {
                let x = (1..=y.len()).map(|i| i as Real).collect();
                self.push_numeric(x, to_reals(y), style);
            }
            AxisMode::Categorical => {
                if y.len() != self.labels.len() {
                    return Err(ChartError::LabelCountMismatch {
                        expected: self.labels.len(),
                        actual: y.len(),
                    }
                    .logged());
                }
                if !self.hold {
                    self.series.clear();
                }
                self.push_series(to_reals(y), style);
            }
        }
        Ok(())
    }

    /// Samples `f` at every `x` and plots the result.
    pub fn plot_fn<X: IntoReal>(
        &mut self,
        x: &[X],
        f: impl Fn(Real) -> Real,
        style: SeriesStyle,
    ) -> Result<(), ChartError> {
        let y = generate(x, f);
        self.plot(x, &y, style)
    }

    /// Plots `y` against evenly spaced category `labels`.
    ///
    /// The labels replace the current label set. Existing categorical series are
    /// dropped if the label count changes.
    pub fn plot_categorical<S: AsRef<str>, Y: IntoReal>(
        &mut self,
        labels: &[S],
        y: &[Y],
        style: SeriesStyle,
    ) -> Result<(), ChartError> {
        if labels.len() != y.len() {
            return Err(ChartError::LengthMismatch {
                x: labels.len(),
                y: y.len(),
            }
            .logged());
        }
        if self.mode != AxisMode::Categorical || !self.hold || self.labels.len() != labels.len()
        {
            self.series.clear();
        }
        self.mode = AxisMode::Categorical;
        self.labels = labels.iter().map(|l| String::from(l.as_ref())).collect();
        self.push_series(to_reals(y), style);
        Ok(())
    }

    /// Like [`plot`](Self::plot), drawing unconnected points.
    pub fn scatter<X: IntoReal, Y: IntoReal>(
        &mut self,
        x: &[X],
        y: &[Y],
        style: SeriesStyle,
    ) -> Result<(), ChartError> {
        self.plot(x, y, style.scatter())
    }

    /// Like [`plot_y`](Self::plot_y), drawing unconnected points.
    pub fn scatter_y<Y: IntoReal>(&mut self, y: &[Y], style: SeriesStyle) -> Result<(), ChartError> {
        self.plot_y(y, style.scatter())
    }

    /// Like [`plot_fn`](Self::plot_fn), drawing unconnected points.
    pub fn scatter_fn<X: IntoReal>(
        &mut self,
        x: &[X],
        f: impl Fn(Real) -> Real,
        style: SeriesStyle,
    ) -> Result<(), ChartError> {
        self.plot_fn(x, f, style.scatter())
    }

    /// Like [`plot_categorical`](Self::plot_categorical), drawing unconnected points.
    pub fn scatter_categorical<S: AsRef<str>, Y: IntoReal>(
        &mut self,
        labels: &[S],
        y: &[Y],
        style: SeriesStyle,
    ) -> Result<(), ChartError> {
        self.plot_categorical(labels, y, style.scatter())
    }

    fn push_numeric(&mut self, x: Vec<Real>, y: Vec<Real>, style: SeriesStyle) {
        if self.mode == AxisMode::Categorical {
            self.mode = AxisMode::Numeric;
            self.labels.clear();
            self.series.clear();
        }
        if !self.hold {
            self.series.clear();
        }
        self.series.push(Series { x, y, style });
    }

    fn push_series(&mut self, y: Vec<Real>, style: SeriesStyle) {
        let x = (0..y.len()).map(|i| i as Real).collect();
        self.series.push(Series { x, y, style });
    }

    /// When on (the default), new series are added to existing ones.
    pub fn set_hold(&mut self, hold: bool) {
        self.hold = hold;
    }

    /// Whether new series are added to existing ones.
    #[must_use]
    pub fn hold(&self) -> bool {
        self.hold
    }

    /// Draw dashed gridlines through every tick.
    pub fn set_grid(&mut self, grid: bool) {
        self.grid = grid;
    }

    /// Set the frame border style.
    pub fn set_frame_type(&mut self, frame_type: FrameType) {
        self.frame_type = frame_type;
    }

    /// Fix the x range instead of fitting it to the data. Bounds may be given in any order.
    pub fn set_x_range(&mut self, a: Real, b: Real) {
        self.x_range = Some(Interval::new(a, b));
    }

    /// Fix the y range instead of fitting it to the data. Bounds may be given in any order.
    pub fn set_y_range(&mut self, a: Real, b: Real) {
        self.y_range = Some(Interval::new(a, b));
    }

    /// The user x range, if set.
    #[must_use]
    pub fn x_range(&self) -> Option<Interval> {
        self.x_range
    }

    /// The user y range, if set.
    #[must_use]
    pub fn y_range(&self) -> Option<Interval> {
        self.y_range
    }

    /// Fit the x range to the data again.
    pub fn clear_x_range(&mut self) {
        self.x_range = None;
    }

    /// Fit the y range to the data again.
    pub fn clear_y_range(&mut self) {
        self.y_range = None;
    }

    /// Adds a tick at `x`, drawn when it lies inside the x range.
    pub fn add_x_marker(&mut self, x: impl IntoReal) {
        self.x_markers.insert(x.into_real());
    }

    /// Adds a tick at `y`, drawn when it lies inside the y range.
    pub fn add_y_marker(&mut self, y: impl IntoReal) {
        self.y_markers.insert(y.into_real());
    }

    /// Removes every custom tick.
    pub fn clear_markers(&mut self) {
        self.x_markers.clear();
        self.y_markers.clear();
    }

    /// Labels the series in plot order. Extra labels or series go unlisted.
    pub fn set_legend<S: AsRef<str>>(&mut self, labels: &[S]) {
        self.legend = labels.iter().map(|l| String::from(l.as_ref())).collect();
    }

    /// Hides the legend.
    pub fn clear_legend(&mut self) {
        self.legend.clear();
    }

    /// Which frame corner the legend hangs from.
    pub fn set_legend_alignment(&mut self, alignment: LegendAlignment) {
        self.legend_alignment = alignment;
    }

    /// Set the x axis label.
    pub fn set_x_label(&mut self, label: &str) {
        label.clone_into(&mut self.x_label);
    }

    /// Set the y axis label.
    pub fn set_y_label(&mut self, label: &str) {
        label.clone_into(&mut self.y_label);
    }

    /// The x axis label.
    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// The y axis label.
    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Drops every series and the category labels.
    pub fn clear_data(&mut self) {
        self.series.clear();
        self.labels.clear();
        self.mode = AxisMode::Numeric;
    }

    /// Number of plotted series.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// The current x axis mode.
    #[must_use]
    pub fn mode(&self) -> AxisMode {
        self.mode
    }

    /// The category labels; empty in numeric mode.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The frame rectangle of the last build.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    fn data_ranges(&self) -> (Interval, Interval) {
        let fallback = Interval::new(0.0, 1.0);
        let x = self.x_range.unwrap_or_else(|| {
            Interval::enclosing(self.series.iter().flat_map(|s| s.x.iter().copied()))
                .unwrap_or(fallback)
        });
        let y = self.y_range.unwrap_or_else(|| {
            Interval::enclosing(self.series.iter().flat_map(|s| s.y.iter().copied()))
                .unwrap_or(fallback)
        });
        (x, y)
    }

    /// Builds the frame with every tick, sized to fit its labels.
    fn axis_frame(&self, transform: &PlotTransform, height: f64) -> Frame {
        let measurer = EmTextMeasurer;
        let frame = self.frame;
        let (x_range, y_range) = (transform.x_range(), transform.y_range());

        let mut y_ticks: MarkerSet =
            partition(y_range, marker_budget(frame.height(), MAX_Y_MARKERS)).into_iter().collect();
        y_ticks.extend(self.y_markers.iter());
        let y_ticks: Vec<Real> = y_ticks.within(y_range).collect();

        let x_ticks: Vec<(Real, String)> = match self.mode {
            AxisMode::Numeric => {
                let mut ticks: MarkerSet =
                    partition(x_range, marker_budget(frame.width(), MAX_X_MARKERS))
                        .into_iter()
                        .collect();
                ticks.extend(self.x_markers.iter());
                ticks.within(x_range).map(|v| (v, format!("{v:.2}"))).collect()
            }
            AxisMode::Categorical => {
                let step = self
                    .labels
                    .len()
                    .div_ceil(marker_budget(frame.width(), MAX_X_MARKERS))
                    .max(1);
                self.labels
                    .iter()
                    .enumerate()
                    .step_by(step)
                    .map(|(i, label)| (i as Real, label.clone()))
                    .filter(|(i, _)| x_range.contains(*i))
                    .collect()
            }
        };

        let mut font_size = tick_font_size(&measurer, frame, y_ticks.len());
        if let Some(widest) = widest_label(&measurer, x_ticks.iter().map(|(_, t)| t.as_str())) {
            font_size = font_size.min(measurer.constrained_font_size(
                widest,
                &tick_style(),
                frame.width() / x_ticks.len() as f64,
                (height - frame.y1) / 2.0,
            ));
        }

        let mut axes = Frame::new(frame.width(), frame.height())
            .with_grid(self.grid)
            .with_frame_type(self.frame_type)
            .with_font_size(font_size);
        for v in y_ticks {
            axes.add_left_marker(transform.map_y(v) - frame.y0, format!("{v:.2}"));
        }
        for (v, text) in x_ticks {
            axes.add_bottom_marker(transform.map_x(v) - frame.x0, text);
        }
        axes
    }

    fn legend(&self) -> Legend {
        let mut legend = Legend::new();
        for (label, series) in self.legend.iter().zip(&self.series) {
            let swatch = match series.style.kind {
                SeriesKind::Line => Swatch::Line(series.style.dash.clone()),
                SeriesKind::Scatter => Swatch::Point,
            };
            legend.push(LegendEntry::new(label.clone(), swatch, series.style.color));
        }
        legend
    }
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws a series as one clipped path, breaking it at points that cannot be drawn.
fn draw_line_series(doc: &mut SceneDocument, transform: &PlotTransform, clip: ClipId, series: &Series) {
    let mut path = BezPath::new();
    let mut connected = false;
    for (&x, &y) in series.x.iter().zip(&series.y) {
        if !(x.is_finite() && y.is_finite()) {
            connected = false;
            continue;
        }
        let p = transform.map(x, y);
        if connected {
            path.line_to(p);
        } else {
            path.move_to(p);
        }
        connected = true;
    }
    if path.elements().is_empty() {
        return;
    }
    let stroke = StrokeStyle::solid(series.style.color, series.style.width)
        .with_dash(series.style.dash.clone());
    doc.draw_path(
        PathNode::new(path)
            .with_stroke(stroke)
            .with_clip(clip)
            .with_round_caps(true),
    );
}

/// Draws a series as filled circles inside a clipped group.
fn draw_scatter_series(
    doc: &mut SceneDocument,
    transform: &PlotTransform,
    clip: ClipId,
    series: &Series,
) {
    let group = doc.add_group(GroupNode::clipped(clip));
    let points = series
        .x
        .iter()
        .zip(&series.y)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| transform.map(x, y));
    for p in points {
        doc.push(
            group,
            CircleNode::filled(p, series.style.width, series.style.color),
        );
    }
}

impl Figure for LineChart {
    fn base(&self) -> &FigureBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FigureBase {
        &mut self.base
    }

    fn build(&mut self) {
        let margins = Margins::LINE;
        let (width, height) = (f64::from(self.base.width()), f64::from(self.base.height()));
        self.frame = margins.frame(width, height);
        let (x_range, y_range) = self.data_ranges();
        let transform = PlotTransform::new(self.frame, x_range, y_range);
        let axes = self.axis_frame(&transform, height);
        let legend = self.legend();

        self.base.begin_scene().draw_background(css::WHITE);
        self.base.draw_title(&EmTextMeasurer, margins.top);
        let doc = self.base.scene_mut();
        let clip = axes.draw(doc, self.frame.origin());
        for series in &self.series {
            match series.style.kind {
                SeriesKind::Line => draw_line_series(doc, &transform, clip, series),
                SeriesKind::Scatter => draw_scatter_series(doc, &transform, clip, series),
            }
        }
        draw_axis_labels(doc, self.frame, &self.x_label, &self.y_label);
        legend.draw(
            doc,
            &EmTextMeasurer,
            Point::new(self.frame.x1, self.frame.y0),
            LEGEND_MARGIN,
            self.legend_alignment,
        );

        log::debug!(
            "built line chart: {} {} series, x {:?}, y {:?}, {} nodes",
            self.series.len(),
            self.mode,
            transform.x_range(),
            transform.y_range(),
            doc.len()
        );
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use kurbo::PathEl;
    use vizfig_scene::{Primitive, TextNode};

    use super::*;

    fn paths(chart: &LineChart) -> Vec<&PathNode> {
        chart
            .scene()
            .walk()
            .filter_map(|(_, _, n)| match &n.primitive {
                Primitive::Path(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn assert_near(a: Point, b: Point) {
        assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
    }

    fn texts(chart: &LineChart) -> Vec<&TextNode> {
        chart
            .scene()
            .walk()
            .filter_map(|(_, _, n)| match &n.primitive {
                Primitive::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn mismatched_lengths_are_rejected_without_change() {
        let mut chart = LineChart::new();
        let err = chart.plot(&[1, 2, 3], &[1.0, 2.0], SeriesStyle::default());
        assert!(matches!(err, Err(ChartError::LengthMismatch { x: 3, y: 2 })), "{err:?}");
        assert_eq!(chart.series_count(), 0);

        let err = chart.plot_categorical(&["a"], &[1, 2], SeriesStyle::default());
        assert!(matches!(err, Err(ChartError::LengthMismatch { x: 1, y: 2 })), "{err:?}");
        assert_eq!(chart.mode(), AxisMode::Numeric, "rejected call must not switch modes");
    }

    #[test]
    fn modes_are_exclusive() {
        let mut chart = LineChart::new();
        chart.plot(&[1, 2], &[3, 4], SeriesStyle::default()).unwrap();
        chart.plot_categorical(&["a", "b", "c"], &[1, 2, 3], SeriesStyle::default()).unwrap();
        assert_eq!(chart.mode(), AxisMode::Categorical);
        assert_eq!(chart.series_count(), 1, "numeric series are dropped");

        let err = chart.plot_y(&[1, 2], SeriesStyle::default());
        assert!(
            matches!(err, Err(ChartError::LabelCountMismatch { expected: 3, actual: 2 })),
            "{err:?}"
        );
        chart.plot_y(&[4, 5, 6], SeriesStyle::default()).unwrap();
        assert_eq!(chart.series_count(), 2);

        chart.plot_categorical(&["x", "y"], &[1, 2], SeriesStyle::default()).unwrap();
        assert_eq!(chart.series_count(), 1, "a new label count drops old series");

        chart.plot_y(&[1.0_f32, 2.0], SeriesStyle::default()).unwrap();
        chart.scatter(&[0_u8], &[0_u8], SeriesStyle::default()).unwrap();
        assert_eq!(chart.mode(), AxisMode::Numeric);
        assert_eq!(chart.series_count(), 1);
        assert!(chart.labels().is_empty());
    }

    #[test]
    fn hold_off_replaces_series() {
        let mut chart = LineChart::new();
        chart.set_hold(false);
        chart.plot_y(&[1, 2], SeriesStyle::default()).unwrap();
        chart.plot_fn(&[1, 2, 3], |x| x * x, SeriesStyle::default()).unwrap();
        assert_eq!(chart.series_count(), 1);
    }

    #[test]
    fn user_ranges_are_sorted() {
        let mut chart = LineChart::new();
        chart.set_x_range(5.0, 1.0);
        assert_eq!(chart.x_range(), Some(Interval::new(1.0, 5.0)));
        assert_eq!(chart.x_range().map(Interval::min), Some(1.0));
        chart.clear_x_range();
        assert_eq!(chart.x_range(), None);
    }

    #[test]
    fn default_figure_draws_one_path_inside_the_frame() {
        let mut chart = LineChart::new();
        chart.plot_y(&[1, 2, 3], SeriesStyle::default()).unwrap();
        chart.build();
        let frame = chart.frame();
        assert_near(frame.origin(), Point::new(72.0, 45.0));
        assert_near(Point::new(frame.x1, frame.y1), Point::new(570.0, 396.0));

        let paths = paths(&chart);
        assert_eq!(paths.len(), 1);
        let path = &paths[0];
        assert!(path.clip.is_some() && path.round_caps);
        let elements = path.path.elements();
        assert_eq!(elements.len(), 3);
        assert!(matches!(elements[0], PathEl::MoveTo(_)));
        assert!(elements[1..].iter().all(|el| matches!(el, PathEl::LineTo(_))));
        let inside = chart.frame().inflate(1e-9, 1e-9);
        for el in elements {
            let (PathEl::MoveTo(p) | PathEl::LineTo(p)) = el else {
                panic!("unexpected element {el:?}");
            };
            assert!(inside.contains(*p), "{p:?} outside {inside:?}");
        }
        let (PathEl::MoveTo(first), PathEl::LineTo(last)) = (elements[0], elements[2]) else {
            panic!("unexpected elements {elements:?}");
        };
        assert_near(first, Point::new(frame.x0, frame.y1));
        assert_near(last, Point::new(frame.x1, frame.y0));
    }

    #[test]
    fn non_finite_values_break_the_line() {
        let mut chart = LineChart::new();
        chart
            .plot(&[1, 2, 3, 4], &[1.0, f64::INFINITY, 3.0, 4.0], SeriesStyle::default())
            .unwrap();
        chart.build();
        let elements = paths(&chart)[0].path.elements().to_vec();
        assert_eq!(elements.len(), 3);
        assert!(matches!(elements[0], PathEl::MoveTo(_)));
        assert!(matches!(elements[1], PathEl::MoveTo(_)), "restart after the gap");
        assert!(matches!(elements[2], PathEl::LineTo(_)));
    }

    #[test]
    fn single_category_sits_at_frame_center() {
        let mut chart = LineChart::new();
        chart.plot_categorical(&["only"], &[2.0], SeriesStyle::default()).unwrap();
        chart.build();
        let center = chart.frame().center();
        let label = texts(&chart).into_iter().find(|t| t.text == "only").unwrap();
        assert!((label.pos.x - center.x).abs() < 1e-9, "{:?}", label.pos);
        let elements = paths(&chart)[0].path.elements().to_vec();
        let [PathEl::MoveTo(p)] = elements[..] else {
            panic!("expected a lone move, got {elements:?}");
        };
        assert_near(p, center);
    }

    #[test]
    fn scatter_draws_clipped_circles() {
        let mut chart = LineChart::new();
        chart
            .scatter(&[1.0, 2.0, f64::NAN], &[1.0, 2.0, 3.0], SeriesStyle::default().with_width(3.0))
            .unwrap();
        chart.build();
        let doc = chart.scene();
        let group = doc
            .walk()
            .find_map(|(_, id, n)| match &n.primitive {
                Primitive::Group(g) => Some((id, g.clip)),
                _ => None,
            })
            .unwrap();
        assert!(group.1.is_some());
        let circles = doc.children(group.0);
        assert_eq!(circles.len(), 2, "the NaN point is skipped");
        assert!(paths(&chart).is_empty());
    }

    #[test]
    fn legend_lists_the_shorter_of_labels_and_series() {
        let mut chart = LineChart::new();
        chart.plot_y(&[1, 2], SeriesStyle::default()).unwrap();
        chart.scatter_y(&[2, 1], SeriesStyle::default()).unwrap();
        chart.set_legend(&["line", "points", "unused"]);
        chart.build();
        let labels: Vec<&str> = texts(&chart).into_iter().map(|t| t.text.as_str()).collect();
        assert!(labels.contains(&"line") && labels.contains(&"points"));
        assert!(!labels.contains(&"unused"));
    }

    #[test]
    fn custom_markers_outside_the_range_are_dropped() {
        let mut chart = LineChart::new();
        chart.plot(&[0, 10], &[0, 10], SeriesStyle::default()).unwrap();
        chart.add_x_marker(2.5);
        chart.add_x_marker(50);
        chart.build();
        let labels: Vec<&str> = texts(&chart).into_iter().map(|t| t.text.as_str()).collect();
        assert!(labels.contains(&"2.50"));
        assert!(!labels.contains(&"50.00"));
    }

    #[test]
    fn clear_restores_defaults() {
        let mut chart = LineChart::new();
        chart.set_title("t");
        chart.set_size(100, 100);
        chart.set_y_range(0.0, 1.0);
        chart.plot_y(&[1], SeriesStyle::default()).unwrap();
        chart.clear();
        assert_eq!(chart.title(), "");
        assert_eq!((chart.width(), chart.height()), (600, 450));
        assert_eq!(chart.y_range(), None);
        assert_eq!(chart.series_count(), 0);
    }
}
