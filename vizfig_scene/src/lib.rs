// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene sink that `VizFig` figures draw into.
//!
//! A [`SceneDocument`] is an append-only arena of primitives (background, line, rect,
//! circle, path, text, group, nested viewport) plus a defs section of clip rectangles.
//! Figures reset it at the start of every build, append primitives in paint order, and
//! hand it to [`SceneDocument::to_svg_string`] or a caller that walks the tree.
//!
//! Geometry uses `kurbo` types and colors use `peniko::Color`.

#![no_std]

extern crate alloc;

mod dash;
mod document;
mod node;
mod svg;

pub use dash::{DashParseError, DashPattern};
pub use document::{SceneDocument, Walk};
pub use node::{
    CircleNode, ClipId, GroupNode, LineNode, Node, NodeId, PathNode, Primitive, RectNode,
    StrokeStyle, TextAnchor, TextNode, ViewportNode,
};
pub use svg::path_data;

pub use vizfig_text::{FontFamily, FontWeight, TextStyle};
