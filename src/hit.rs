use std::cmp::Ordering;

use glam::Vec2;

use crate::scene::{NodeId, Scene};

struct Candidate {
    id: NodeId,
    z: i32,
    depth: u32,
}

/// Topmost eligible node under `point`, or `None` for a miss. A miss is a
/// normal outcome, not an error.
pub fn hit_test<S: Scene>(scene: &S, point: Vec2) -> Option<NodeId> {
    let hit = candidates(scene, point)
        .into_iter()
        .min_by(topmost_first)
        .map(|c| c.id);
    log::debug!("hit_test {},{} -> {:?}", point.x, point.y, hit);
    hit
}

/// Every eligible node under `point`, topmost first. Same comparator as
/// [`hit_test`], so the first entry is always the `hit_test` result.
pub fn hit_test_all<S: Scene>(scene: &S, point: Vec2) -> Vec<NodeId> {
    let mut found = candidates(scene, point);
    found.sort_by(topmost_first);
    log::debug!("hit_test_all {},{} -> {} node(s)", point.x, point.y, found.len());
    found.into_iter().map(|c| c.id).collect()
}

/// Z-index descending, then depth descending (a descendant visually sits on
/// top of its container), then creation order for a deterministic result.
fn topmost_first(a: &Candidate, b: &Candidate) -> Ordering {
    b.z
        .cmp(&a.z)
        .then(b.depth.cmp(&a.depth))
        .then(a.id.cmp(&b.id))
}

/// Walk the forest, pruning hidden and invisible subtrees, and collect every
/// node whose bounds contain `point`. `raycast_target = false` skips the
/// node itself but not its children.
fn candidates<S: Scene>(scene: &S, point: Vec2) -> Vec<Candidate> {
    let mut found = Vec::new();
    for root in scene.roots() {
        let mut stack: Vec<(NodeId, u32)> = vec![(root, 0)];
        while let Some((node, depth)) = stack.pop() {
            if scene.is_hidden(node) {
                continue;
            }
            let element = scene.element(node).copied();
            if element.is_some_and(|e| !e.visible) {
                continue;
            }
            if let Some(e) = element {
                if e.raycast_target
                    && scene.frame(node).is_some()
                    && scene.computed_bounds(node).contains(point)
                {
                    found.push(Candidate {
                        id: node,
                        z: e.z_index,
                        depth,
                    });
                }
            }
            for &child in scene.children(node) {
                stack.push((child, depth + 1));
            }
        }
    }
    found
}
