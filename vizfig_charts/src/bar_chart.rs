// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar figures.
//!
//! A [`BarChart`] has a fixed number of slots along x. Every plot call adds one
//! segment: a value per slot, stacked on the segments before it. Positive and
//! negative values stack separately, both starting from the slot's baseline.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use vizfig_scene::{PathNode, StrokeStyle, TextStyle};
use vizfig_text::{EmTextMeasurer, TextMeasurer};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::figure::{AxisMode, Figure, FigureBase, draw_axis_labels};
use crate::frame::Frame;
use crate::layout::{
    Margins, PIXELS_PER_MARKER, PlotTransform, marker_budget, tick_font_size, tick_style,
    widest_label,
};
use crate::legend::{Legend, LegendAlignment, LegendEntry, Swatch};
use crate::numeric::{IntoReal, Real, to_reals};
use crate::palette::{BRIGHT, ColorCycle};
use crate::partition::{Interval, MarkerSet, partition};
use crate::ChartError;

/// Most y ticks drawn, before custom markers.
const MAX_Y_MARKERS: usize = 5;

/// Fraction of the frame height left empty above and below the bars.
const VERTICAL_INSET: f64 = 0.05;

/// Fraction of the frame width left empty left and right of the bars.
const HORIZONTAL_INSET: f64 = 0.05;

/// Largest corner radius of a rounded bar, in pixels.
const MAX_CORNER_RADIUS: f64 = 5.0;

/// Angle of bottom labels too wide for their slot, in degrees.
const CROWDED_LABEL_ANGLE: f64 = -45.0;

/// Distance of the legend from the frame corner, in pixels.
const LEGEND_MARGIN: f64 = 5.0;

/// Default fraction of a slot a bar occupies.
pub const DEFAULT_RELATIVE_WIDTH: f64 = 0.65;

/// Per-slot stack tops above and below the baselines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackExtents {
    /// Baseline plus every positive value, per slot.
    pub positive: Vec<Real>,
    /// Baseline plus every negative value, per slot.
    pub negative: Vec<Real>,
}

impl StackExtents {
    /// The interval from the lowest negative stack to the highest positive one.
    pub fn range(&self) -> Option<Interval> {
        Interval::enclosing(self.positive.iter().chain(&self.negative).copied())
    }
}

/// Stacks `segments` slot by slot on `baselines`.
///
/// Each segment must have one value per baseline; extra values are ignored.
/// Non-finite values are skipped.
pub fn stack_extents<'a>(
    segments: impl IntoIterator<Item = &'a [Real]>,
    baselines: &[Real],
) -> StackExtents {
    let mut extents = StackExtents {
        positive: baselines.to_vec(),
        negative: baselines.to_vec(),
    };
    for segment in segments {
        for (slot, &value) in segment.iter().enumerate().take(baselines.len()) {
            if !value.is_finite() {
                continue;
            }
            if value > 0.0 {
                extents.positive[slot] += value;
            } else {
                extents.negative[slot] += value;
            }
        }
    }
    extents
}

#[derive(Clone, Debug)]
enum XData {
    Unset,
    Numeric(Vec<Real>),
    Categorical(Vec<String>),
}

impl XData {
    fn len(&self) -> usize {
        match self {
            Self::Unset => 0,
            Self::Numeric(x) => x.len(),
            Self::Categorical(labels) => labels.len(),
        }
    }

    fn mode(&self) -> Option<AxisMode> {
        match self {
            Self::Unset => None,
            Self::Numeric(_) => Some(AxisMode::Numeric),
            Self::Categorical(_) => Some(AxisMode::Categorical),
        }
    }

    fn label(&self, slot: usize) -> String {
        match self {
            Self::Unset => String::new(),
            Self::Numeric(x) => format!("{:.2}", x[slot]),
            Self::Categorical(labels) => labels[slot].clone(),
        }
    }
}

#[derive(Clone, Debug)]
enum Baseline {
    Global(Real),
    PerSlot(Vec<Real>),
}

#[derive(Clone, Debug)]
struct Segment {
    values: Vec<Real>,
    color: Color,
}

/// A stacked bar figure.
#[derive(Clone, Debug)]
pub struct BarChart {
    base: FigureBase,
    x: XData,
    segments: Vec<Segment>,
    baseline: Baseline,
    colors: ColorCycle,
    relative_width: f64,
    rounded_edges: bool,
    round_y_markers: bool,
    y_markers: MarkerSet,
    legend: Vec<String>,
    grid: bool,
    x_label: String,
    y_label: String,
    frame: Rect,
}

impl BarChart {
    /// An empty 600x450 figure with rounded bars on a zero baseline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: FigureBase::new(),
            x: XData::Unset,
            segments: Vec::new(),
            baseline: Baseline::Global(0.0),
            colors: ColorCycle::new(&BRIGHT),
            relative_width: DEFAULT_RELATIVE_WIDTH,
            rounded_edges: true,
            round_y_markers: false,
            y_markers: MarkerSet::new(),
            legend: Vec::new(),
            grid: false,
            x_label: String::new(),
            y_label: String::new(),
            frame: Rect::ZERO,
        }
    }

    /// Adds a segment with one value of `y` per slot at positions `x`.
    ///
    /// `None` picks the next palette color.
    pub fn plot<X: IntoReal, Y: IntoReal>(
        &mut self,
        x: &[X],
        y: &[Y],
        color: impl Into<Option<Color>>,
    ) -> Result<(), ChartError> {
        if x.len() != y.len() {
            return Err(ChartError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            }
            .logged());
        }
        self.check_segment(AxisMode::Numeric, y.len())?;
        self.x = XData::Numeric(to_reals(x));
        self.push_segment(to_reals(y), color.into());
        Ok(())
    }

    /// Adds a segment with one value of `y` per category label.
    pub fn plot_categorical<S: AsRef<str>, Y: IntoReal>(
        &mut self,
        labels: &[S],
        y: &[Y],
        color: impl Into<Option<Color>>,
    ) -> Result<(), ChartError> {
        if labels.len() != y.len() {
            return Err(ChartError::LengthMismatch {
                x: labels.len(),
                y: y.len(),
            }
            .logged());
        }
        self.check_segment(AxisMode::Categorical, y.len())?;
        self.x = XData::Categorical(labels.iter().map(|l| String::from(l.as_ref())).collect());
        self.push_segment(to_reals(y), color.into());
        Ok(())
    }

    /// Adds a segment on the existing slots, or on numeric slots `1..=n` if there are none.
    pub fn plot_y<Y: IntoReal>(
        &mut self,
        y: &[Y],
        color: impl Into<Option<Color>>,
    ) -> Result<(), ChartError> {
        if matches!(self.x, XData::Unset) {
            self.x = XData::Numeric((1..=y.len()).map(|i| i as Real).collect());
        } else if y.len() != self.x.len() {
            return Err(ChartError::SegmentCountMismatch {
                expected: self.x.len(),
                actual: y.len(),
            }
            .logged());
        }
        self.push_segment(to_reals(y), color.into());
        Ok(())
    }

    fn check_segment(&self, mode: AxisMode, len: usize) -> Result<(), ChartError> {
        if self.segments.is_empty() {
            return Ok(());
        }
        if let Some(current) = self.x.mode().filter(|current| *current != mode) {
            return Err(ChartError::ModeConflict {
                current,
                requested: mode,
            }
            .logged());
        }
        if len != self.x.len() {
            return Err(ChartError::SegmentCountMismatch {
                expected: self.x.len(),
                actual: len,
            }
            .logged());
        }
        Ok(())
    }

    fn push_segment(&mut self, values: Vec<Real>, color: Option<Color>) {
        let color = color.unwrap_or_else(|| self.colors.next_color());
        self.segments.push(Segment { values, color });
    }

    /// Replaces the numeric slot positions. Existing segments fix the slot count and mode.
    pub fn set_x_data<X: IntoReal>(&mut self, x: &[X]) -> Result<(), ChartError> {
        self.check_segment(AxisMode::Numeric, x.len())?;
        self.x = XData::Numeric(to_reals(x));
        Ok(())
    }

    /// Replaces the slot labels. Existing segments fix the slot count and mode.
    pub fn set_x_data_categorical<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<(), ChartError> {
        self.check_segment(AxisMode::Categorical, labels.len())?;
        self.x = XData::Categorical(labels.iter().map(|l| String::from(l.as_ref())).collect());
        Ok(())
    }

    /// Stack every slot on `baseline`.
    pub fn set_baseline(&mut self, baseline: Real) {
        self.baseline = Baseline::Global(baseline);
    }

    /// Stack each slot on its own baseline. Missing slots use zero.
    pub fn set_baselines(&mut self, baselines: Vec<Real>) {
        self.baseline = Baseline::PerSlot(baselines);
    }

    /// Baselines resolved to one per slot.
    #[must_use]
    pub fn baselines(&self) -> Vec<Real> {
        let slots = self.slot_count();
        match &self.baseline {
            Baseline::Global(v) => vec![*v; slots],
            Baseline::PerSlot(values) => {
                if values.len() != slots {
                    log::debug!(
                        "{} baselines for {slots} slots; padding with zero or truncating",
                        values.len()
                    );
                }
                let mut values = values.clone();
                values.resize(slots, 0.0);
                values
            }
        }
    }

    /// Fraction of a slot each bar fills, clamped to `[0, 1]`.
    pub fn set_bar_relative_width(&mut self, width: f64) {
        self.relative_width = width.clamp(0.0, 1.0);
    }

    /// Fraction of a slot each bar fills.
    #[must_use]
    pub fn bar_relative_width(&self) -> f64 {
        self.relative_width
    }

    /// Round the outer corners of each stack.
    pub fn set_rounded_edges(&mut self, rounded: bool) {
        self.rounded_edges = rounded;
    }

    /// Whether stack corners are rounded.
    #[must_use]
    pub fn rounded_edges(&self) -> bool {
        self.rounded_edges
    }

    /// Label y ticks as whole numbers.
    pub fn set_round_y_markers(&mut self, round: bool) {
        self.round_y_markers = round;
    }

    /// Adds a y tick, drawn when it lies inside the y range.
    pub fn add_y_marker(&mut self, y: impl IntoReal) {
        self.y_markers.insert(y.into_real());
    }

    /// Labels the segments in plot order.
    pub fn set_legend<S: AsRef<str>>(&mut self, labels: &[S]) {
        self.legend = labels.iter().map(|l| String::from(l.as_ref())).collect();
    }

    /// Hides the legend.
    pub fn clear_legend(&mut self) {
        self.legend.clear();
    }

    /// Draw dashed gridlines through every tick.
    pub fn set_grid(&mut self, grid: bool) {
        self.grid = grid;
    }

    /// Set the x axis label.
    pub fn set_x_label(&mut self, label: &str) {
        label.clone_into(&mut self.x_label);
    }

    /// Set the y axis label.
    pub fn set_y_label(&mut self, label: &str) {
        label.clone_into(&mut self.y_label);
    }

    /// Drops every segment and the slot positions, and restarts the palette.
    pub fn clear_data(&mut self) {
        self.segments.clear();
        self.x = XData::Unset;
        self.colors.reset();
    }

    /// Number of stacked segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of bar slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.x.len()
    }

    /// The slot mode, once x data exists.
    #[must_use]
    pub fn mode(&self) -> Option<AxisMode> {
        self.x.mode()
    }

    /// The frame rectangle of the last build.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    fn extents(&self) -> StackExtents {
        stack_extents(
            self.segments.iter().map(|s| s.values.as_slice()),
            &self.baselines(),
        )
    }

    fn axis_frame(&self, transform: &PlotTransform, space: f64, height: f64) -> Frame {
        let measurer = EmTextMeasurer;
        let frame = self.frame;
        let y_range = transform.y_range();

        let mut y_ticks: MarkerSet =
            partition(y_range, marker_budget(frame.height(), MAX_Y_MARKERS)).into_iter().collect();
        y_ticks.extend(self.y_markers.iter());
        let y_ticks: Vec<Real> = y_ticks.within(y_range).collect();

        let slots = self.slot_count();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "the ratio is finite and at least one"
        )]
        let step = (slots as f64 / (frame.width() / PIXELS_PER_MARKER))
            .ceil()
            .max(1.0) as usize;
        let x_ticks: Vec<(f64, String)> = (0..slots)
            .step_by(step)
            .map(|slot| (slot_center(frame, space, slot), self.x.label(slot)))
            .collect();

        let mut font_size = tick_font_size(&measurer, frame, y_ticks.len());
        let widest = widest_label(&measurer, x_ticks.iter().map(|(_, t)| t.as_str()));
        let mut angle = 0.0;
        if let Some(widest) = widest {
            let slot_px = space * step as f64;
            font_size = font_size.min(measurer.constrained_font_size(
                widest,
                &tick_style(),
                f64::INFINITY,
                (height - frame.y1) / 2.0,
            ));
            let style = TextStyle {
                font_size,
                ..tick_style()
            };
            let label_px = measurer.measure(widest, &style).width_px();
            if label_px > slot_px {
                angle = CROWDED_LABEL_ANGLE;
            }
        }

        let mut axes = Frame::new(frame.width(), frame.height())
            .with_grid(self.grid)
            .with_font_size(font_size)
            .with_bottom_label_angle(angle);
        for v in y_ticks {
            let text = if self.round_y_markers {
                format!("{v:.0}")
            } else {
                format!("{v:.2}")
            };
            axes.add_left_marker(transform.map_y(v) - frame.y0, text);
        }
        for (x, text) in x_ticks {
            axes.add_bottom_marker(x - frame.x0, text);
        }
        axes
    }

    fn legend(&self) -> Legend {
        let mut legend = Legend::new();
        for (label, segment) in self.legend.iter().zip(&self.segments) {
            legend.push(LegendEntry::new(label.clone(), Swatch::Bar, segment.color));
        }
        legend
    }

    /// One path per non-zero finite value, in segment order.
    fn bar_nodes(&self, transform: &PlotTransform, space: f64) -> Vec<PathNode> {
        let baselines = self.baselines();
        let width = space * self.relative_width;
        let last_of_sign = |slot: usize, positive: bool| {
            self.segments.iter().rposition(|s| {
                s.values.get(slot).is_some_and(|v| {
                    v.is_finite() && if positive { *v > 0.0 } else { *v < 0.0 }
                })
            })
        };
        let mut nodes = Vec::new();
        let mut positive = baselines.clone();
        let mut negative = baselines;
        for (index, segment) in self.segments.iter().enumerate() {
            for (slot, &value) in segment.values.iter().enumerate().take(positive.len()) {
                if value == 0.0 || !value.is_finite() {
                    continue;
                }
                let up = value > 0.0;
                let acc = if up {
                    &mut positive[slot]
                } else {
                    &mut negative[slot]
                };
                let start = *acc;
                *acc += value;
                let center = slot_center(self.frame, space, slot);
                let bar = Rect::new(
                    center - width / 2.0,
                    transform.map_y(start),
                    center + width / 2.0,
                    transform.map_y(*acc),
                );
                let rounded = self.rounded_edges && last_of_sign(slot, up) == Some(index);
                let path = if rounded {
                    rounded_bar(bar, up)
                } else {
                    square_bar(bar)
                };
                nodes.push(
                    PathNode::new(path)
                        .with_fill(segment.color)
                        .with_stroke(StrokeStyle::solid(segment.color, 1.0)),
                );
            }
        }
        nodes
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel x of the center of `slot`, given the slot spacing.
fn slot_center(frame: Rect, space: f64, slot: usize) -> f64 {
    frame.x0 + frame.width() * HORIZONTAL_INSET + space / 2.0 + slot as f64 * space
}

/// A bar from `y0` (the stack start) to `y1` (its end), as a closed path.
fn square_bar(bar: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((bar.x0, bar.y0));
    path.line_to((bar.x0, bar.y1));
    path.line_to((bar.x1, bar.y1));
    path.line_to((bar.x1, bar.y0));
    path.close_path();
    path
}

/// Like [`square_bar`], with the two corners at the stack end rounded.
fn rounded_bar(bar: Rect, up: bool) -> BezPath {
    let r = MAX_CORNER_RADIUS
        .min(bar.width().abs() / 2.0)
        .min((bar.y1 - bar.y0).abs());
    let d = if up { r } else { -r };
    let (l, rr, s, e) = (bar.x0, bar.x1, bar.y0, bar.y1);
    let mut path = BezPath::new();
    path.move_to((l, s));
    path.line_to((l, e + d));
    path.quad_to((l, e), (l + r, e));
    path.line_to((rr - r, e));
    path.quad_to((rr, e), (rr, e + d));
    path.line_to((rr, s));
    path.close_path();
    path
}

impl Figure for BarChart {
    fn base(&self) -> &FigureBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FigureBase {
        &mut self.base
    }

    fn build(&mut self) {
        let margins = Margins::BAR;
        let (width, height) = (f64::from(self.base.width()), f64::from(self.base.height()));
        self.frame = margins.frame(width, height);
        let frame = self.frame;
        let y_range = self.extents().range().unwrap_or(Interval::new(0.0, 1.0));
        let inset = frame.height() * VERTICAL_INSET;
        let data = Rect::new(frame.x0, frame.y0 + inset, frame.x1, frame.y1 - inset);
        let slots = self.slot_count().max(1);
        let transform = PlotTransform::new(data, Interval::new(0.0, slots as Real), y_range);
        let space = frame.width() * (1.0 - 2.0 * HORIZONTAL_INSET) / slots as f64;
        let axes = self.axis_frame(&transform, space, height);
        let legend = self.legend();
        let bars = self.bar_nodes(&transform, space);
        let (segment_count, slot_count) = (self.segments.len(), self.slot_count());

        self.base.begin_scene().draw_background(css::WHITE);
        self.base.draw_title(&EmTextMeasurer, margins.top);
        let doc = self.base.scene_mut();
        draw_axis_labels(doc, frame, &self.x_label, &self.y_label);
        axes.draw(doc, frame.origin());
        for bar in bars {
            doc.draw_path(bar);
        }
        legend.draw(
            doc,
            &EmTextMeasurer,
            Point::new(frame.x1, frame.y0),
            LEGEND_MARGIN,
            LegendAlignment::TopRight,
        );

        log::debug!(
            "built bar chart: {segment_count} segments over {slot_count} slots, y {:?}, {} nodes",
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

    use kurbo::{PathEl, Point, Shape};
    use vizfig_scene::{Primitive, TextNode};

    use super::*;

    fn bars(chart: &BarChart) -> Vec<&PathNode> {
        chart
            .scene()
            .walk()
            .filter_map(|(_, _, n)| match &n.primitive {
                Primitive::Path(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn texts(chart: &BarChart) -> Vec<&TextNode> {
        chart
            .scene()
            .walk()
            .filter_map(|(_, _, n)| match &n.primitive {
                Primitive::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    fn has_quads(path: &PathNode) -> bool {
        path.path
            .elements()
            .iter()
            .any(|el| matches!(el, PathEl::QuadTo(..)))
    }

    #[test]
    fn stacks_split_by_sign() {
        let a = [2.0, 3.0];
        let b = [3.0, 2.0];
        let c = [-1.0, 0.0];
        let extents = stack_extents([&a[..], &b[..], &c[..]], &[0.0, 0.0]);
        assert_eq!(extents.positive, [5.0, 5.0]);
        assert_eq!(extents.negative, [-1.0, 0.0]);
        assert_eq!(extents.range(), Some(Interval::new(-1.0, 5.0)));

        let raised = stack_extents([&a[..]], &[10.0, -10.0]);
        assert_eq!(raised.positive, [12.0, -7.0]);
        assert_eq!(raised.negative, [10.0, -10.0]);
    }

    #[test]
    fn segments_must_match_the_slot_count() {
        let mut chart = BarChart::new();
        chart.plot_y(&[1, 2, 3], None).unwrap();
        assert_eq!(chart.slot_count(), 3);
        let err = chart.plot_y(&[1, 2], None);
        assert!(
            matches!(err, Err(ChartError::SegmentCountMismatch { expected: 3, actual: 2 })),
            "{err:?}"
        );
        let err = chart.plot(&[1, 2], &[1, 2], css::RED);
        assert!(matches!(err, Err(ChartError::SegmentCountMismatch { .. })), "{err:?}");
        assert!(matches!(
            chart.set_x_data(&[1.0]),
            Err(ChartError::SegmentCountMismatch { .. })
        ));
        assert_eq!(chart.segment_count(), 1);
    }

    #[test]
    fn first_plot_fixes_the_mode() {
        let mut chart = BarChart::new();
        assert_eq!(chart.mode(), None);
        chart.plot_categorical(&["a", "b"], &[1, 2], None).unwrap();
        let err = chart.plot(&[1, 2], &[1, 2], None);
        assert!(
            matches!(
                err,
                Err(ChartError::ModeConflict {
                    current: AxisMode::Categorical,
                    requested: AxisMode::Numeric
                })
            ),
            "{err:?}"
        );
        chart.set_x_data_categorical(&["c", "d"]).unwrap();
        assert_eq!(chart.mode(), Some(AxisMode::Categorical));
        assert_eq!(chart.segment_count(), 1);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut chart = BarChart::new();
        let err = chart.plot(&[1, 2, 3], &[1, 2], None);
        assert!(matches!(err, Err(ChartError::LengthMismatch { x: 3, y: 2 })), "{err:?}");
        assert_eq!(chart.mode(), None);
    }

    #[test]
    fn relative_width_is_clamped() {
        let mut chart = BarChart::new();
        chart.set_bar_relative_width(1.5);
        assert_eq!(chart.bar_relative_width(), 1.0);
        chart.set_bar_relative_width(-0.5);
        assert_eq!(chart.bar_relative_width(), 0.0);
    }

    #[test]
    fn baselines_resolve_to_slot_count() {
        let mut chart = BarChart::new();
        chart.plot_y(&[1, 2, 3], None).unwrap();
        chart.set_baseline(2.0);
        assert_eq!(chart.baselines(), [2.0, 2.0, 2.0]);
        chart.set_baselines(std::vec![1.0]);
        assert_eq!(chart.baselines(), [1.0, 0.0, 0.0]);
        chart.set_baselines(std::vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(chart.baselines(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn bars_draw_in_insertion_order_and_round_only_the_top() {
        let mut chart = BarChart::new();
        chart.plot_y(&[2, 3], css::RED).unwrap();
        chart.plot_y(&[3, 0], css::BLUE).unwrap();
        chart.build();
        let bars = bars(&chart);
        assert_eq!(bars.len(), 3, "zero values draw nothing");
        assert_eq!(bars[0].fill, Some(css::RED));
        assert_eq!(bars[1].fill, Some(css::RED));
        assert_eq!(bars[2].fill, Some(css::BLUE));
        assert!(!has_quads(bars[0]), "slot 0 continues with blue");
        assert!(has_quads(bars[1]), "slot 1 ends with red");
        assert!(has_quads(bars[2]));
    }

    /// The move-to point and every `(control, end)` pair of a bar outline.
    fn outline(bar: &PathNode) -> (Point, Vec<(Point, Point)>) {
        let mut start = Point::ZERO;
        let mut quads = Vec::new();
        for el in bar.path.elements() {
            match *el {
                PathEl::MoveTo(p) => start = p,
                PathEl::QuadTo(c, p) => quads.push((c, p)),
                _ => {}
            }
        }
        (start, quads)
    }

    #[test]
    fn infinite_segments_do_not_steal_the_rounded_end() {
        let mut chart = BarChart::new();
        chart.plot_y(&[2.0, -2.0], css::RED).unwrap();
        chart.plot_y(&[f64::INFINITY, f64::NEG_INFINITY], css::BLUE).unwrap();
        chart.build();
        let bars = bars(&chart);
        assert_eq!(bars.len(), 2, "non-finite values draw nothing");
        assert!(bars.iter().all(|b| has_quads(b)));
    }

    #[test]
    fn corner_radius_stays_inside_the_bar() {
        let mut chart = BarChart::new();
        chart.plot_y(&[-10.0, 0.01, 10.0], None).unwrap();
        chart.build();
        let bars = bars(&chart);
        assert_eq!(bars.len(), 3);
        for bar in &bars {
            let (start, quads) = outline(bar);
            assert_eq!(quads.len(), 2);
            // The second control point is the far corner of the bar.
            let rect = Rect::from_points(start, quads[1].0).inflate(1e-9, 1e-9);
            for (c, p) in &quads {
                assert!(rect.contains(*c) && rect.contains(*p), "{c:?} {p:?} outside {rect:?}");
            }
            assert!(quads[0].1.x <= rect.center().x, "radius wider than half the bar");
        }

        let (start, quads) = outline(bars[0]);
        let bottom = quads[1].0.y;
        assert!(bottom > start.y, "negative bars grow down");
        assert!(quads[1].1.y < bottom, "negative corners curve up from the bottom edge");

        let (start, quads) = outline(bars[2]);
        let top = quads[1].0.y;
        assert!(top < start.y, "positive bars grow up");
        assert!(quads[1].1.y > top, "positive corners curve down from the top edge");
    }

    #[test]
    fn stacks_start_at_their_slot_baseline() {
        let mut chart = BarChart::new();
        chart.set_rounded_edges(false);
        chart.plot_y(&[2.0, 3.0], None).unwrap();
        chart.set_baselines(std::vec![1.0, 0.0]);
        chart.build();
        let frame = chart.frame();
        let inset = frame.height() * VERTICAL_INSET;
        let (data_top, data_bottom) = (frame.y0 + inset, frame.y1 - inset);
        // The y range is [0, 3]: both stacks top out at 3.
        let one = data_bottom - (data_bottom - data_top) / 3.0;
        let bars = bars(&chart);
        assert_eq!(bars.len(), 2);
        let starts: Vec<f64> = bars.iter().map(|b| outline(b).0.y).collect();
        assert!((starts[0] - one).abs() < 1e-9, "{} vs {one}", starts[0]);
        assert!((starts[1] - data_bottom).abs() < 1e-9, "{} vs {data_bottom}", starts[1]);
        for bar in &bars {
            let top = bar.path.bounding_box().y0;
            assert!((top - data_top).abs() < 1e-9, "{top} vs {data_top}");
        }
    }

    #[test]
    fn stacked_tops_meet_at_the_range_max() {
        let mut chart = BarChart::new();
        chart.set_rounded_edges(false);
        chart.plot_y(&[2, 3], None).unwrap();
        chart.plot_y(&[3, 2], None).unwrap();
        chart.build();
        let tops: Vec<f64> = bars(&chart)
            .iter()
            .skip(2)
            .map(|b| b.path.bounding_box().y0)
            .collect();
        let frame = chart.frame();
        let data_top = frame.y0 + frame.height() * VERTICAL_INSET;
        for top in tops {
            assert!((top - data_top).abs() < 1e-9, "{top} vs {data_top}");
        }
    }

    #[test]
    fn palette_colors_follow_plot_order() {
        let mut chart = BarChart::new();
        chart.plot_y(&[1], None).unwrap();
        chart.plot_y(&[1], None).unwrap();
        chart.set_legend(&["first", "second"]);
        chart.build();
        let bars = bars(&chart);
        assert_eq!(bars[0].fill, Some(BRIGHT[0]));
        assert_eq!(bars[1].fill, Some(BRIGHT[1]));
        let labels: Vec<&str> = texts(&chart).into_iter().map(|t| t.text.as_str()).collect();
        assert!(labels.contains(&"first") && labels.contains(&"second"));
    }

    #[test]
    fn axis_labels_are_replaced() {
        let mut chart = BarChart::new();
        chart.plot_y(&[1, 2], None).unwrap();
        chart.set_x_label("first");
        chart.set_x_label("region");
        chart.set_y_label("sales");
        chart.build();
        let labels: Vec<&str> = texts(&chart).into_iter().map(|t| t.text.as_str()).collect();
        assert!(labels.contains(&"region") && labels.contains(&"sales"), "{labels:?}");
        assert!(!labels.contains(&"first"));
    }

    #[test]
    fn round_y_markers_drop_decimals() {
        let mut chart = BarChart::new();
        chart.set_round_y_markers(true);
        chart.plot_y(&[0, 4], None).unwrap();
        chart.build();
        let labels: Vec<&str> = texts(&chart).into_iter().map(|t| t.text.as_str()).collect();
        assert!(labels.contains(&"4"), "{labels:?}");
        assert!(!labels.contains(&"4.00"));
    }

    #[test]
    fn crowded_category_labels_are_rotated() {
        let mut chart = BarChart::new();
        let labels: Vec<String> = (0..6).map(|i| std::format!("a long category {i}")).collect();
        chart.plot_categorical(&labels, &[1, 2, 3, 4, 5, 6], None).unwrap();
        chart.build();
        let label = texts(&chart)
            .into_iter()
            .find(|t| t.text == "a long category 0")
            .unwrap();
        assert_eq!(label.angle, CROWDED_LABEL_ANGLE);
    }
}
