// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intervals, tick partitioning, and sorted-boundary search.
//!
//! Ticks are raw evenly spaced fractions of the interval: no "nice number" rounding
//! is applied.

use alloc::vec;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::numeric::{IntoReal, Real};

/// Tolerance used when testing whether a tick lies inside a range.
const RANGE_EPSILON: Real = 1.0e-9;

/// Most steps [`make_range`] will take.
pub const MAX_RANGE_STEPS: usize = 1 << 20;

/// A closed `[min, max]` interval. `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    min: Real,
    max: Real,
}

impl Interval {
    /// The interval spanning `a` and `b`, in either order.
    #[must_use]
    pub fn new(a: Real, b: Real) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    /// The smallest interval containing every finite value, or `None` if there are none.
    pub fn enclosing(values: impl IntoIterator<Item = Real>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| {
                Some(match acc {
                    None => Self { min: v, max: v },
                    Some(i) => Self {
                        min: i.min.min(v),
                        max: i.max.max(v),
                    },
                })
            })
    }

    /// Lower bound.
    #[must_use]
    pub fn min(self) -> Real {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(self) -> Real {
        self.max
    }

    /// `max - min`.
    #[must_use]
    pub fn span(self) -> Real {
        self.max - self.min
    }

    /// Returns `true` when `value` lies within the interval (with a small tolerance).
    #[must_use]
    pub fn contains(self, value: Real) -> bool {
        value >= self.min - RANGE_EPSILON && value <= self.max + RANGE_EPSILON
    }

    /// The smallest interval containing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Widens a zero-span interval to `[v - 1, v + 1]` so it can be mapped to pixels.
    #[must_use]
    pub fn widened(self) -> Self {
        if self.span() > 0.0 {
            self
        } else {
            Self {
                min: self.min - 1.0,
                max: self.max + 1.0,
            }
        }
    }
}

/// Splits `interval` into `count` evenly spaced ticks, first and last on the bounds.
///
/// A zero-width interval yields `[min]`; a step too small to represent yields
/// `[min, max]`. A budget of zero yields nothing and a budget of one yields `[min]`.
#[must_use]
pub fn partition(interval: Interval, count: usize) -> Vec<Real> {
    let (min, max) = (interval.min, interval.max);
    if count == 0 {
        return Vec::new();
    }
    if count == 1 || min == max {
        return vec![min];
    }
    let step = (max - min) / (count - 1) as Real;
    let scale = min.abs().max(max.abs()).max(1.0);
    if step < 1.0e-12 * scale {
        return vec![min, max];
    }
    (0..count)
        .map(|i| {
            if i + 1 == count {
                max
            } else {
                min + i as Real * step
            }
        })
        .collect()
}

/// `start, start + step, ...` up to but excluding `end`, followed by `end` itself.
///
/// Returns nothing if `step` is zero, not finite, points away from `end`, or would
/// take more than [`MAX_RANGE_STEPS`] steps.
#[must_use]
pub fn make_range(start: Real, end: Real, step: Real) -> Vec<Real> {
    if step == 0.0 || !step.is_finite() || !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    let steps = (end - start) / step;
    if steps < 0.0 {
        return Vec::new();
    }
    if steps > MAX_RANGE_STEPS as Real {
        log::debug!("range {start}..{end} by {step} exceeds {MAX_RANGE_STEPS} steps");
        return Vec::new();
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "steps is finite, non-negative, bounded, and floored"
    )]
    let whole = steps.floor() as usize;
    let mut out: Vec<Real> = (0..=whole)
        .map(|i| start + i as Real * step)
        .filter(|v| (end - v) / step > RANGE_EPSILON)
        .collect();
    out.push(end);
    out
}

/// Samples `f` at every `x`.
pub fn generate<T: IntoReal>(xs: &[T], f: impl Fn(Real) -> Real) -> Vec<Real> {
    xs.iter().map(|x| f(x.into_real())).collect()
}

/// Finds the interval `[bounds[i], bounds[i + 1]]` containing `value`.
///
/// `bounds` must be sorted ascending. Interior boundaries belong to the interval
/// above them; the last boundary belongs to the last interval. A single boundary
/// forms one degenerate interval that only contains itself. Values outside
/// `[first, last]` (and NaN) are not found.
#[must_use]
pub fn binary_search_interval(value: Real, bounds: &[Real]) -> Option<usize> {
    let (&first, &last) = (bounds.first()?, bounds.last()?);
    if value.is_nan() || value < first || value > last {
        return None;
    }
    if bounds.len() == 1 {
        return Some(0);
    }
    let above = bounds.partition_point(|b| *b <= value);
    Some((above - 1).min(bounds.len() - 2))
}

/// A sorted set of unique tick positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerSet(Vec<Real>);

impl MarkerSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a position. Duplicates and NaN are ignored.
    pub fn insert(&mut self, value: Real) {
        if value.is_nan() {
            return;
        }
        if let Err(at) = self.0.binary_search_by(|probe| probe.total_cmp(&value)) {
            self.0.insert(at, value);
        }
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes every position.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Real> + '_ {
        self.0.iter().copied()
    }

    /// Positions that lie inside `range`, ascending.
    pub fn within(&self, range: Interval) -> impl Iterator<Item = Real> + '_ {
        self.iter().filter(move |v| range.contains(*v))
    }
}

impl Extend<Real> for MarkerSet {
    fn extend<I: IntoIterator<Item = Real>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl FromIterator<Real> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
