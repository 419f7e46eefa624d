use crate::scene::Scene;

/// Log every node's computed bounds, indented by depth, at `debug!` level.
/// Cheap way to see where a layout went sideways.
pub fn dump_bounds<S: Scene>(scene: &S) {
    for root in scene.roots() {
        let mut stack = vec![(root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            let b = scene.computed_bounds(node);
            log::debug!(
                "{:indent$}#{} {:.1},{:.1} {:.1}x{:.1}",
                "",
                node.index(),
                b.origin.x,
                b.origin.y,
                b.size.x,
                b.size.y,
                indent = depth * 2
            );
            for &child in scene.children(node).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }
}
