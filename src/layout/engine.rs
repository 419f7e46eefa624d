use glam::{Vec2, vec2};
use smallvec::SmallVec;

use crate::layout::{Rect, flex};
use crate::scene::{NodeId, Scene, SceneMut};
use crate::style::{Frame, SizeMode};

type Kids = SmallVec<[NodeId; 8]>;

/// Resolves absolute bounds for every node reachable from a root canvas.
///
/// The walk is leaf-bound but iterative: an explicit work stack carries
/// `(node, resolved rect)` pairs, so recursion depth never tracks tree
/// depth. Recompute is a pure function of the declarative blocks plus the
/// viewport; re-running it with unchanged input writes identical bounds.
pub struct LayoutEngine {
    viewport: Vec2,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            viewport: Vec2::ZERO,
        }
    }

    /// Record the reference size root canvases resolve against on the next
    /// recompute.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = vec2(width.max(0.0), height.max(0.0));
    }

    /// Walk every root canvas and write `Frame::computed` for its subtree.
    /// Hidden and invisible subtrees are reset to zero bounds, never left
    /// stale. Malformed input degrades to zero-size rects; this never fails.
    pub fn recompute<S: SceneMut>(&self, scene: &mut S) {
        let roots = scene.roots();
        log::debug!(
            "recompute: {} root(s), viewport {}x{}",
            roots.len(),
            self.viewport.x,
            self.viewport.y
        );

        let viewport = Rect::new(Vec2::ZERO, self.viewport);
        for root in roots {
            if scene.is_hidden(root) || !is_visible(scene, root) {
                zero_subtree(scene, root);
                continue;
            }
            // A root canvas is the viewport, whatever its frame says.
            scene.set_computed_bounds(root, viewport);
            self.place_subtree(scene, root, viewport);
        }
    }

    fn place_subtree<S: SceneMut>(&self, scene: &mut S, root: NodeId, bounds: Rect) {
        let mut stack: Vec<(NodeId, Rect)> = vec![(root, bounds)];
        while let Some((node, rect)) = stack.pop() {
            let kids = Kids::from_slice(scene.children(node));
            if kids.is_empty() {
                continue;
            }

            let mut placeable: SmallVec<[(NodeId, Frame); 8]> = SmallVec::new();
            for &child in &kids {
                let eligible = !scene.is_hidden(child) && is_visible(scene, child);
                match scene.frame(child).copied().filter(|_| eligible) {
                    Some(frame) => placeable.push((child, frame)),
                    // Hidden, invisible, or frameless: no box of its own and
                    // nothing for descendants to anchor against.
                    None => zero_subtree(scene, child),
                }
            }

            let placements = match scene.flex(node).copied() {
                Some(flex) => flex::place(&flex, &placeable, rect),
                None => placeable
                    .iter()
                    .map(|(id, frame)| (*id, anchor_rect(frame, rect)))
                    .collect(),
            };

            for (child, child_rect) in placements {
                log::trace!(
                    "place #{} at {},{} {}x{}",
                    child.index(),
                    child_rect.origin.x,
                    child_rect.origin.y,
                    child_rect.size.x,
                    child_rect.size.y
                );
                scene.set_computed_bounds(child, child_rect);
                stack.push((child, child_rect));
            }
        }
    }
}

fn is_visible<S: Scene>(scene: &S, id: NodeId) -> bool {
    scene.element(id).map_or(true, |e| e.visible)
}

/// Anchor/offset placement against the parent's resolved box. Per axis: the
/// anchors pick a span of the parent, the offset insets it, and an explicit
/// size mode replaces the span extent with the pivot deciding where the
/// sized rect sits inside the span. Negative extents clamp to zero.
fn anchor_rect(frame: &Frame, parent: Rect) -> Rect {
    let (x, w) = anchor_axis(
        parent.origin.x,
        parent.size.x,
        frame.anchor_min.x,
        frame.anchor_max.x,
        frame.offset.left,
        frame.offset.right,
        frame.pivot.x,
        frame.width_mode,
        frame.size.x,
    );
    let (y, h) = anchor_axis(
        parent.origin.y,
        parent.size.y,
        frame.anchor_min.y,
        frame.anchor_max.y,
        frame.offset.top,
        frame.offset.bottom,
        frame.pivot.y,
        frame.height_mode,
        frame.size.y,
    );
    Rect::new(vec2(x, y), vec2(w, h))
}

#[allow(clippy::too_many_arguments)]
fn anchor_axis(
    parent_pos: f32,
    parent_extent: f32,
    anchor_min: f32,
    anchor_max: f32,
    inset_lead: f32,
    inset_trail: f32,
    pivot: f32,
    mode: SizeMode,
    size: f32,
) -> (f32, f32) {
    let span_start = parent_pos + anchor_min * parent_extent + inset_lead;
    let span_end = parent_pos + anchor_max * parent_extent - inset_trail;
    let span = (span_end - span_start).max(0.0);

    let extent = match mode {
        SizeMode::Fixed => size.max(0.0),
        SizeMode::Percent => (size / 100.0 * parent_extent).max(0.0),
        // Nothing to fill against outside a flex container.
        SizeMode::Fill => span,
    };

    (span_start + pivot * (span - extent), extent)
}

/// Reset `Frame::computed` for a whole subtree so hidden or skipped nodes
/// never report bounds from an earlier pass.
fn zero_subtree<S: SceneMut>(scene: &mut S, root: NodeId) {
    let mut stack: Vec<NodeId> = vec![root];
    while let Some(node) = stack.pop() {
        scene.set_computed_bounds(node, Rect::ZERO);
        stack.extend_from_slice(scene.children(node));
    }
}
