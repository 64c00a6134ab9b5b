// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The append-only scene arena.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use peniko::Color;
use smallvec::SmallVec;

use crate::node::{
    CircleNode, ClipId, GroupNode, LineNode, Node, NodeId, PathNode, Primitive, RectNode,
    TextNode, ViewportNode,
};

/// An append-only tree of drawable primitives plus a defs section of clip rectangles.
///
/// Nodes live in a single arena and are addressed by [`NodeId`]. Drawing appends to the
/// document root (or to a container node via [`SceneDocument::push`]); nothing is ever
/// removed except by [`SceneDocument::reset`].
#[derive(Clone, Debug, Default)]
pub struct SceneDocument {
    width: u32,
    height: u32,
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    clips: Vec<Rect>,
    clip_lookup: HashMap<[u64; 4], ClipId>,
}

impl SceneDocument {
    /// An empty zero-sized document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty document of the given size.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        let mut doc = Self::new();
        doc.set_size(width, height);
        doc
    }

    /// Drops every node and clip definition. The size is kept.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.clips.clear();
        self.clip_lookup.clear();
    }

    /// Sets the document size in pixels.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Document width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Document height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Document size as a float [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Fills the whole document with `color`.
    pub fn draw_background(&mut self, color: Color) -> NodeId {
        self.insert(None, Primitive::Background(color))
    }

    /// Appends a line at the root.
    pub fn draw_line(&mut self, line: LineNode) -> NodeId {
        self.insert(None, line.into())
    }

    /// Appends a rectangle at the root.
    pub fn draw_rect(&mut self, rect: RectNode) -> NodeId {
        self.insert(None, rect.into())
    }

    /// Appends a circle at the root.
    pub fn draw_circle(&mut self, circle: CircleNode) -> NodeId {
        self.insert(None, circle.into())
    }

    /// Appends a path at the root.
    pub fn draw_path(&mut self, path: PathNode) -> NodeId {
        self.insert(None, path.into())
    }

    /// Appends a text node at the root.
    pub fn draw_text(&mut self, text: TextNode) -> NodeId {
        self.insert(None, text.into())
    }

    /// Appends an empty group at the root. Fill it with [`SceneDocument::push`].
    pub fn add_group(&mut self, group: GroupNode) -> NodeId {
        self.insert(None, group.into())
    }

    /// Appends `primitive` as the last child of `parent`.
    ///
    /// If `parent` is not a container in this document, the primitive is appended at
    /// the root instead.
    pub fn push(&mut self, parent: NodeId, primitive: impl Into<Primitive>) -> NodeId {
        let parent = self
            .nodes
            .get(parent.index())
            .filter(|n| n.primitive.is_container())
            .map(|_| parent);
        self.insert(parent, primitive.into())
    }

    /// Registers a clip rectangle in the defs section.
    ///
    /// Identical rectangles share one definition.
    pub fn define_clip_rect(&mut self, rect: Rect) -> ClipId {
        let key = [
            rect.x0.to_bits(),
            rect.y0.to_bits(),
            rect.x1.to_bits(),
            rect.y1.to_bits(),
        ];
        if let Some(id) = self.clip_lookup.get(&key) {
            return *id;
        }
        let id = ClipId(index_u32(self.clips.len()));
        self.clips.push(rect);
        self.clip_lookup.insert(key, id);
        id
    }

    /// Splices `other` into this document as a viewport whose top-left is `origin`.
    ///
    /// The sub-document keeps its own coordinate space and size. Its clip definitions
    /// are merged into this document's defs and its nodes are re-addressed.
    pub fn append_scene(&mut self, other: &Self, origin: Point) -> NodeId {
        let clip_map: SmallVec<[ClipId; 4]> = other
            .clips
            .iter()
            .map(|rect| self.define_clip_rect(*rect))
            .collect();
        let viewport = self.insert(
            None,
            ViewportNode {
                rect: Rect::from_origin_size(origin, other.size()),
            }
            .into(),
        );
        for root in &other.roots {
            self.copy_subtree(other, *root, viewport, &clip_map);
        }
        viewport
    }

    fn copy_subtree(&mut self, other: &Self, id: NodeId, parent: NodeId, clip_map: &[ClipId]) {
        let Some(node) = other.nodes.get(id.index()) else {
            return;
        };
        let mut primitive = node.primitive.clone();
        primitive.remap_clip(|clip| clip_map.get(clip.index()).copied().unwrap_or(clip));
        let copied = self.insert(Some(parent), primitive);
        for child in &node.children {
            self.copy_subtree(other, *child, copied, clip_map);
        }
    }

    fn insert(&mut self, parent: Option<NodeId>, primitive: Primitive) -> NodeId {
        let id = NodeId(index_u32(self.nodes.len()));
        self.nodes.push(Node {
            primitive,
            children: Vec::new(),
        });
        match parent.and_then(|p| self.nodes.get_mut(p.index())) {
            Some(parent) => parent.children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Looks up a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// The children of `id`, in draw order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or_default()
    }

    /// Top-level nodes, in draw order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Clip rectangles, indexed by [`ClipId::index`].
    #[must_use]
    pub fn clips(&self) -> &[Rect] {
        &self.clips
    }

    /// Looks up a clip rectangle.
    #[must_use]
    pub fn clip(&self, id: ClipId) -> Option<Rect> {
        self.clips.get(id.index()).copied()
    }

    /// Total number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first, draw-order traversal of every node reachable from the roots.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            doc: self,
            stack: self.roots.iter().rev().map(|id| (*id, 0)).collect(),
        }
    }
}

/// Iterator returned by [`SceneDocument::walk`], yielding `(depth, id, node)`.
#[derive(Debug)]
pub struct Walk<'a> {
    doc: &'a SceneDocument,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, depth) = self.stack.pop()?;
            let Some(node) = self.doc.node(id) else {
                continue;
            };
            self.stack
                .extend(node.children.iter().rev().map(|child| (*child, depth + 1)));
            return Some((depth, id, node));
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "scene documents hold far fewer than u32::MAX nodes"
)]
fn index_u32(index: usize) -> u32 {
    index as u32
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use kurbo::Vec2;
    use peniko::color::palette::css;

    use super::*;
    use crate::StrokeStyle;

    fn line(x: f64) -> LineNode {
        LineNode::new((x, 0.0), (x, 10.0), StrokeStyle::default())
    }

    #[test]
    fn push_into_group_nests_children() {
        let mut doc = SceneDocument::with_size(100, 50);
        doc.draw_background(css::WHITE);
        let group = doc.add_group(GroupNode {
            clip: None,
            offset: Vec2::new(5.0, 5.0),
        });
        let a = doc.push(group, line(1.0));
        let b = doc.push(group, line(2.0));

        assert_eq!(doc.children(group), &[a, b]);
        assert_eq!(doc.roots().len(), 2, "background + group at the root");
        let depths: Vec<usize> = doc.walk().map(|(depth, _, _)| depth).collect();
        assert_eq!(depths, [0, 0, 1, 1]);
    }

    #[test]
    fn push_onto_non_container_falls_back_to_root() {
        let mut doc = SceneDocument::new();
        let l = doc.draw_line(line(0.0));
        let c = doc.push(l, line(1.0));
        assert!(doc.children(l).is_empty(), "lines never hold children");
        assert_eq!(doc.roots(), &[l, c]);
    }

    #[test]
    fn identical_clip_rects_share_an_id() {
        let mut doc = SceneDocument::new();
        let a = doc.define_clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = doc.define_clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let c = doc.define_clip_rect(Rect::new(1.0, 0.0, 10.0, 10.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(doc.clips().len(), 2);
    }

    #[test]
    fn reset_keeps_size_and_drops_nodes() {
        let mut doc = SceneDocument::with_size(640, 480);
        doc.draw_line(line(0.0));
        doc.define_clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        doc.reset();
        assert!(doc.is_empty());
        assert!(doc.clips().is_empty());
        assert_eq!((doc.width(), doc.height()), (640, 480));
    }

    #[test]
    fn append_scene_remaps_clips_and_nests_under_viewport() {
        let mut child = SceneDocument::with_size(50, 40);
        let child_clip = child.define_clip_rect(Rect::new(5.0, 5.0, 45.0, 35.0));
        let group = child.add_group(GroupNode::clipped(child_clip));
        child.push(group, line(10.0));

        let mut parent = SceneDocument::with_size(100, 40);
        parent.define_clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        let viewport = parent.append_scene(&child, Point::new(50.0, 0.0));

        let Some(Primitive::Viewport(vp)) = parent.node(viewport).map(|n| &n.primitive) else {
            panic!("expected a viewport node");
        };
        assert_eq!(vp.rect, Rect::new(50.0, 0.0, 100.0, 40.0));

        let spliced_group = parent.children(viewport)[0];
        let Some(Primitive::Group(g)) = parent.node(spliced_group).map(|n| &n.primitive) else {
            panic!("expected the spliced group");
        };
        let clip = g.clip.expect("group keeps its clip");
        assert_eq!(clip.index(), 1, "child clip is renumbered after the parent's");
        assert_eq!(parent.clip(clip), Some(Rect::new(5.0, 5.0, 45.0, 35.0)));
        assert_eq!(parent.children(spliced_group).len(), 1);
    }
}
