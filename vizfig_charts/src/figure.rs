// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The figure lifecycle shared by every chart.
//!
//! Charts embed a [`FigureBase`] (title, pixel size, scene) and implement [`Figure`],
//! whose `build` fully regenerates the scene from chart state.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;

use kurbo::Rect;
use vizfig_scene::{FontFamily, FontWeight, SceneDocument, TextAnchor, TextNode, TextStyle};
use vizfig_text::TextMeasurer;

#[cfg(feature = "std")]
use crate::ChartError;

/// Default figure width in pixels.
pub const DEFAULT_WIDTH: u32 = 600;

/// Default figure height in pixels.
pub const DEFAULT_HEIGHT: u32 = 450;

/// Title size before fitting, in points.
pub const TITLE_FONT_SIZE: f64 = 20.0;

/// Axis label size, in points.
pub const AXIS_LABEL_FONT_SIZE: f64 = 12.0;

/// Which kind of x data a chart holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisMode {
    /// Real-valued x positions.
    #[default]
    Numeric,
    /// Evenly spaced string categories.
    Categorical,
}

impl fmt::Display for AxisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        })
    }
}

/// Title, size, and scene storage embedded in every chart.
#[derive(Clone, Debug)]
pub struct FigureBase {
    title: String,
    width: u32,
    height: u32,
    scene: SceneDocument,
}

impl FigureBase {
    /// An untitled figure of the default size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scene: SceneDocument::new(),
        }
    }

    /// The title; empty when unset.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sets the pixel size used by the next build.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// The scene produced by the last build.
    #[must_use]
    pub fn scene(&self) -> &SceneDocument {
        &self.scene
    }

    /// Empties the scene, sizes it to the figure, and returns it for drawing.
    pub fn begin_scene(&mut self) -> &mut SceneDocument {
        self.scene.reset();
        self.scene.set_size(self.width, self.height);
        &mut self.scene
    }

    /// The scene being drawn by the current build.
    pub(crate) fn scene_mut(&mut self) -> &mut SceneDocument {
        &mut self.scene
    }

    /// Draws a bold title centered in the top margin, shrunk to fit it.
    pub(crate) fn draw_title(&mut self, measurer: &dyn TextMeasurer, top_margin: f64) {
        if self.title.is_empty() {
            return;
        }
        let size = self.scene.size();
        let band = size.height * top_margin;
        let style = TextStyle::new(TITLE_FONT_SIZE).with_weight(FontWeight::BOLD);
        let font_size = measurer.constrained_font_size(&self.title, &style, size.width, band);
        self.scene.draw_text(
            TextNode::new(
                self.title.clone(),
                (size.width / 2.0, band / 2.0),
                TextStyle { font_size, ..style },
            )
            .with_anchor(TextAnchor::Middle),
        );
    }

    /// Restores the untitled default-size state and drops the scene.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for FigureBase {
    fn default() -> Self {
        Self::new()
    }
}

/// The capability interface every figure provides.
pub trait Figure {
    /// Shared figure state.
    fn base(&self) -> &FigureBase;

    /// Shared figure state, mutably.
    fn base_mut(&mut self) -> &mut FigureBase;

    /// Regenerates the scene from the current figure state.
    fn build(&mut self);

    /// Drops all data and settings, restoring a freshly constructed figure.
    fn clear(&mut self);

    /// The title; empty when unset.
    fn title(&self) -> &str {
        self.base().title()
    }

    /// Sets the title.
    fn set_title(&mut self, title: &str) {
        self.base_mut().set_title(title);
    }

    /// Width in pixels.
    fn width(&self) -> u32 {
        self.base().width()
    }

    /// Height in pixels.
    fn height(&self) -> u32 {
        self.base().height()
    }

    /// Sets the pixel size used by the next build.
    fn set_size(&mut self, width: u32, height: u32) {
        self.base_mut().set_size(width, height);
    }

    /// The scene produced by the last build.
    fn scene(&self) -> &SceneDocument {
        self.base().scene()
    }

    /// Builds and returns the serialized SVG document.
    fn svg_text(&mut self) -> String {
        self.build();
        self.scene().to_svg_string()
    }

    /// Builds and writes the SVG document to `path`.
    #[cfg(feature = "std")]
    fn save(&mut self, path: &std::path::Path) -> Result<(), ChartError> {
        let svg = self.svg_text();
        std::fs::write(path, svg)?;
        log::debug!("saved figure {:?} to {}", self.title(), path.display());
        Ok(())
    }
}

/// Draws the x label below the bottom ticks and the y label rotated left of the frame.
pub(crate) fn draw_axis_labels(doc: &mut SceneDocument, frame: Rect, x_label: &str, y_label: &str) {
    let height = doc.size().height;
    let style = TextStyle::new(AXIS_LABEL_FONT_SIZE).with_family(FontFamily::SansSerif);
    if !x_label.is_empty() {
        doc.draw_text(
            TextNode::new(
                x_label,
                (frame.center().x, frame.y1 + 0.75 * (height - frame.y1)),
                style.clone(),
            )
            .with_anchor(TextAnchor::Middle),
        );
    }
    if !y_label.is_empty() {
        doc.draw_text(
            TextNode::new(y_label, (0.25 * frame.x0, frame.center().y), style)
                .with_anchor(TextAnchor::Middle)
                .with_angle(-90.0),
        );
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use vizfig_scene::Primitive;
    use vizfig_text::EmTextMeasurer;

    use super::*;

    #[test]
    fn base_defaults_and_clear() {
        let mut base = FigureBase::new();
        assert_eq!((base.width(), base.height()), (600, 450));
        base.set_title("t");
        base.set_size(10, 20);
        base.begin_scene();
        assert_eq!(base.scene().width(), 10);
        base.clear();
        assert_eq!(base.title(), "");
        assert_eq!((base.width(), base.height()), (600, 450));
    }

    #[test]
    fn long_title_is_shrunk_to_the_top_band() {
        let mut base = FigureBase::new();
        base.set_title("a title much too long for a two hundred pixel figure");
        base.set_size(200, 100);
        base.begin_scene();
        base.draw_title(&EmTextMeasurer, 0.1);
        let doc = base.scene();
        let first = doc.roots().first().and_then(|id| doc.node(*id));
        let Some(Primitive::Text(t)) = first.map(|n| &n.primitive) else {
            panic!("title should be drawn");
        };
        assert!(t.style.font_size < TITLE_FONT_SIZE, "{}", t.style.font_size);
        assert_eq!(t.style.font_weight, FontWeight::BOLD);
        assert_eq!(t.pos.x, 100.0);
    }

    #[test]
    fn empty_title_is_skipped() {
        let mut base = FigureBase::new();
        base.begin_scene();
        base.draw_title(&EmTextMeasurer, 0.1);
        assert!(base.scene().is_empty());
    }

    #[test]
    fn axis_labels_are_independent() {
        let mut doc = SceneDocument::with_size(600, 450);
        let frame = Rect::new(72.0, 45.0, 570.0, 396.0);
        draw_axis_labels(&mut doc, frame, "", "count");
        let angles: Vec<f64> = doc
            .walk()
            .filter_map(|(_, _, n)| match &n.primitive {
                Primitive::Text(t) => Some(t.angle),
                _ => None,
            })
            .collect();
        assert_eq!(angles, [-90.0], "the y label does not need an x label");
    }
}
