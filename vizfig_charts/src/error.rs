// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by figure operations.
//!
//! Every rejecting operation checks its inputs before touching figure state, so an
//! `Err` always means nothing changed.

use thiserror::Error;

use crate::figure::AxisMode;

/// Reasons a figure operation was rejected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// The x and y sequences differ in length.
    #[error("x has {x} values but y has {y}")]
    LengthMismatch {
        /// Length of the x (or label) sequence.
        x: usize,
        /// Length of the y sequence.
        y: usize,
    },
    /// A y sequence does not match the current category label count.
    #[error("expected {expected} values to match the category labels, got {actual}")]
    LabelCountMismatch {
        /// Current label count.
        expected: usize,
        /// Length of the rejected sequence.
        actual: usize,
    },
    /// A bar segment does not match the slot count fixed by the first segment.
    #[error("expected {expected} values per bar segment, got {actual}")]
    SegmentCountMismatch {
        /// Slot count of the chart.
        expected: usize,
        /// Length of the rejected sequence.
        actual: usize,
    },
    /// The x-axis mode is already fixed to a different mode.
    #[error("x axis is {current}, cannot add {requested} data")]
    ModeConflict {
        /// The established mode.
        current: AxisMode,
        /// The mode of the rejected call.
        requested: AxisMode,
    },
    /// A histogram was requested with zero bins.
    #[error("a histogram needs at least one bin")]
    InvalidBinCount,
    /// The input held no finite values.
    #[error("no finite values to plot")]
    EmptyData,
    /// A subplot cell lies outside the grid.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
    },
    /// Writing the serialized figure failed.
    #[cfg(feature = "std")]
    #[error("failed to write figure")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// Logs the rejection at `warn` level and hands the error back.
    pub(crate) fn logged(self) -> Self {
        log::warn!("rejected: {self}");
        self
    }
}
