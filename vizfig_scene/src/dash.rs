// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke dash patterns.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use smallvec::SmallVec;
use thiserror::Error;

/// Alternating draw/gap lengths for a stroke. An empty pattern is a solid line.
///
/// Parses from and prints as the comma-separated `"draw,gap,..."` form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashPattern(SmallVec<[f64; 4]>);

impl DashPattern {
    /// A solid line.
    #[must_use]
    pub fn solid() -> Self {
        Self(SmallVec::new())
    }

    /// A pattern from explicit draw/gap lengths.
    pub fn new(lengths: impl IntoIterator<Item = f64>) -> Self {
        Self(lengths.into_iter().collect())
    }

    /// Returns `true` for a solid line.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.0.is_empty()
    }

    /// The draw/gap lengths.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Error returned when parsing a [`DashPattern`] fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DashParseError {
    /// A segment was not a finite, non-negative number.
    #[error("invalid dash length `{segment}`")]
    InvalidLength {
        /// The offending segment, trimmed.
        segment: String,
    },
}

impl FromStr for DashPattern {
    type Err = DashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::solid());
        }
        let mut lengths = SmallVec::new();
        for segment in s.split(',') {
            let segment = segment.trim();
            match segment.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => lengths.push(v),
                _ => {
                    return Err(DashParseError::InvalidLength {
                        segment: segment.to_string(),
                    });
                }
            }
        }
        Ok(Self(lengths))
    }
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn empty_string_is_solid() {
        let dash: DashPattern = "  ".parse().unwrap();
        assert!(dash.is_solid(), "blank input should be solid");
    }

    #[test]
    fn parses_draw_gap_pairs() {
        let dash: DashPattern = "5, 2.5,1".parse().unwrap();
        assert_eq!(dash.as_slice(), &[5.0, 2.5, 1.0]);
        assert_eq!(dash.to_string(), "5,2.5,1");
    }

    #[test]
    fn rejects_garbage_and_negative_lengths() {
        assert_eq!(
            "4,x".parse::<DashPattern>(),
            Err(DashParseError::InvalidLength {
                segment: "x".to_string()
            })
        );
        assert!("-1".parse::<DashPattern>().is_err(), "negative length");
        assert!("1,,2".parse::<DashPattern>().is_err(), "empty segment");
    }
}
