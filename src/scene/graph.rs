use crate::layout::Rect;
use crate::style::{Element, Flex, Frame};

/// Opaque node identity. Ids are allocated monotonically by the owning
/// store, so ordering ids is ordering by creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Read capabilities the layout engine and hit tester need from a scene
/// store. Implemented by [`SceneArena`](crate::scene::SceneArena); hosts
/// with their own entity store implement it over that instead.
pub trait Scene {
    /// Root-tagged nodes in document order.
    fn roots(&self) -> Vec<NodeId>;

    /// Ordered children of `id`. Empty for unknown or removed ids.
    fn children(&self, id: NodeId) -> &[NodeId];

    /// Weak back-reference; used for depth queries only, never lifetime.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    fn is_root(&self, id: NodeId) -> bool;

    fn is_hidden(&self, id: NodeId) -> bool;

    fn element(&self, id: NodeId) -> Option<&Element>;

    fn frame(&self, id: NodeId) -> Option<&Frame>;

    fn flex(&self, id: NodeId) -> Option<&Flex>;

    /// Absolute bounds from the last recompute; zero for frameless nodes.
    fn computed_bounds(&self, id: NodeId) -> Rect {
        self.frame(id).map(|f| f.computed()).unwrap_or(Rect::ZERO)
    }
}

/// The single write capability. Only the layout engine takes a `SceneMut`,
/// which keeps `Frame::computed` single-writer by construction.
pub trait SceneMut: Scene {
    fn set_computed_bounds(&mut self, id: NodeId, bounds: Rect);
}
