// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Approximate text metrics for figure layout.
//!
//! `VizFig` never shapes text. Layout only needs a rough bounding box for tick
//! labels, titles, and legend entries, so this crate provides:
//! - a tiny [`TextMeasurer`] interface that layout code depends on, and
//! - [`EmTextMeasurer`], a per-family average glyph width table expressed in em.
//!
//! Extents are reported in em, where one em is [`EM_PX`] pixels and the reference
//! point size is [`REFERENCE_POINT_SIZE`]. Sizes are approximations; they are not
//! meant to match any particular rendering engine.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// Pixels per em.
pub const EM_PX: f64 = 16.0;

/// The point size that corresponds to a one-em line height.
pub const REFERENCE_POINT_SIZE: f64 = 12.0;

/// Average glyph advance for proportional families, in em at the reference size.
const PROPORTIONAL_WIDTH_EM: f64 = 0.48;

/// Average glyph advance for monospace families, in em at the reference size.
const MONOSPACE_WIDTH_EM: f64 = 0.46;

/// Converts an em length into pixels.
#[must_use]
pub fn em_to_px(em: f64) -> f64 {
    em * EM_PX
}

/// A minimal text measurement interface used by frames, legends, and titles.
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, style: &TextStyle) -> TextExtent;

    /// Returns a font size no larger than `style.font_size` whose measured box fits
    /// within `max_width` by `max_height` pixels.
    ///
    /// Width and height are scaled by the same factor; the smaller of the two fits wins.
    fn constrained_font_size(
        &self,
        text: &str,
        style: &TextStyle,
        max_width: f64,
        max_height: f64,
    ) -> f64 {
        if text.is_empty() {
            return style.font_size;
        }
        let extent = self.measure(text, style);
        let mut scale = 1.0_f64;
        let width = extent.width_px();
        if width > 0.0 {
            scale = scale.min(max_width / width);
        }
        let height = extent.height_px();
        if height > 0.0 {
            scale = scale.min(max_height / height);
        }
        style.font_size * scale.max(0.0)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a sans-serif, normal weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Set the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Set the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(REFERENCE_POINT_SIZE)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    #[default]
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }

    /// Average glyph advance in em at [`REFERENCE_POINT_SIZE`].
    #[must_use]
    pub fn char_width_em(&self) -> f64 {
        match self {
            Self::Monospace => MONOSPACE_WIDTH_EM,
            Self::Serif | Self::SansSerif | Self::Named(_) => PROPORTIONAL_WIDTH_EM,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// The estimated box of a single line of text, in em.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Advance width in em.
    pub width_em: f64,
    /// Line height in em.
    pub height_em: f64,
}

impl TextExtent {
    /// Width in pixels.
    #[must_use]
    pub fn width_px(&self) -> f64 {
        em_to_px(self.width_em)
    }

    /// Height in pixels.
    #[must_use]
    pub fn height_px(&self) -> f64 {
        em_to_px(self.height_em)
    }
}

/// Estimates the box of `text` set in `family` at `font_size` points.
#[must_use]
pub fn text_size(text: &str, family: &FontFamily, font_size: f64) -> TextExtent {
    let scale = font_size / REFERENCE_POINT_SIZE;
    let chars = text.chars().count() as f64;
    TextExtent {
        width_em: chars * family.char_width_em() * scale,
        height_em: scale,
    }
}

/// Shrinks `base_size` so that `text` fits within `max_width` by `max_height` pixels.
///
/// See [`TextMeasurer::constrained_font_size`].
#[must_use]
pub fn constrained_font_size(
    base_size: f64,
    text: &str,
    family: &FontFamily,
    max_width: f64,
    max_height: f64,
) -> f64 {
    let style = TextStyle::new(base_size).with_family(family.clone());
    EmTextMeasurer.constrained_font_size(text, &style, max_width, max_height)
}

/// The default measurer: a per-family average glyph width table.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmTextMeasurer;

impl TextMeasurer for EmTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextExtent {
        text_size(text, &style.font_family, style.font_size)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn text_size_scales_with_point_size() {
        let at_12 = text_size("abcd", &FontFamily::SansSerif, 12.0);
        assert!((at_12.width_em - 4.0 * 0.48).abs() < 1e-9, "{at_12:?}");
        assert!((at_12.height_em - 1.0).abs() < 1e-9, "{at_12:?}");

        let at_24 = text_size("abcd", &FontFamily::Monospace, 24.0);
        assert!((at_24.width_em - 4.0 * 0.46 * 2.0).abs() < 1e-9, "{at_24:?}");
        assert!((at_24.height_px() - 32.0).abs() < 1e-9, "{at_24:?}");
    }

    #[test]
    fn constrained_size_never_grows() {
        let size = constrained_font_size(11.0, "1", &FontFamily::Monospace, 1000.0, 1000.0);
        assert!((size - 11.0).abs() < 1e-9, "got {size}");
    }

    #[test]
    fn constrained_size_takes_tighter_budget() {
        // "-000.00" at 11pt monospace: 7 * 0.46 * 11/12 em wide, 11/12 em tall.
        let text = "-000.00";
        let width_px = em_to_px(7.0 * 0.46 * 11.0 / 12.0);
        let size = constrained_font_size(11.0, text, &FontFamily::Monospace, width_px / 2.0, 1e6);
        assert!((size - 5.5).abs() < 1e-9, "width-bound size was {size}");

        let height_px = em_to_px(11.0 / 12.0);
        let size = constrained_font_size(11.0, text, &FontFamily::Monospace, 1e6, height_px / 4.0);
        assert!((size - 2.75).abs() < 1e-9, "height-bound size was {size}");
    }

    #[test]
    fn constrained_size_clamps_negative_budget() {
        let size = constrained_font_size(20.0, "title", &FontFamily::SansSerif, -5.0, 100.0);
        assert_eq!(size, 0.0, "negative budgets collapse to zero");
    }

    #[test]
    fn css_family_names() {
        assert_eq!(FontFamily::Monospace.as_css_family(), "monospace");
        assert_eq!(FontFamily::Named("Inter".into()).as_css_family(), "Inter");
    }
}
