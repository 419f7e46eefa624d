use smallvec::SmallVec;

use crate::layout::Rect;
use crate::scene::graph::{NodeId, Scene, SceneMut};
use crate::style::{Element, Flex, Frame};

type Children = SmallVec<[NodeId; 8]>;

struct Slot {
    alive: bool,
    parent: Option<NodeId>,
    children: Children,
    root: bool,
    hidden: bool,
    element: Option<Element>,
    frame: Option<Frame>,
    flex: Option<Flex>,
}

impl Slot {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            alive: true,
            parent,
            children: Children::new(),
            root: false,
            hidden: false,
            element: None,
            frame: None,
            flex: None,
        }
    }
}

/// Flat slot-vector scene store. Children lists own the hierarchy; the
/// parent field is a back-index only. Slots are never reused, so `NodeId`
/// order is creation order.
#[derive(Default)]
pub struct SceneArena {
    slots: Vec<Slot>,
}

impl SceneArena {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.index()).filter(|s| s.alive)
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.slots.get_mut(id.index()).filter(|s| s.alive)
    }

    /// Create a node, optionally attached under `parent`. A dead or unknown
    /// parent leaves the node detached.
    pub fn spawn(&mut self, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        let parent = parent.filter(|p| self.slot(*p).is_some());
        self.slots.push(Slot::new(parent));
        if let Some(p) = parent {
            if let Some(slot) = self.slot_mut(p) {
                slot.children.push(id);
            }
        }
        id
    }

    /// Root-tagged canvas node.
    pub fn spawn_root(&mut self) -> NodeId {
        let id = self.spawn(None);
        self.set_root(id, true);
        id
    }

    /// Detach `id` from its parent and vacate the whole subtree. Ids of
    /// removed nodes are never reissued.
    pub fn remove(&mut self, id: NodeId) {
        let Some(slot) = self.slot(id) else { return };
        if let Some(p) = slot.parent {
            if let Some(parent) = self.slot_mut(p) {
                parent.children.retain(|c| *c != id);
            }
        }
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            if let Some(slot) = self.slot_mut(node) {
                slot.alive = false;
                stack.extend(slot.children.drain(..));
            }
        }
    }

    pub fn set_root(&mut self, id: NodeId, root: bool) {
        if let Some(slot) = self.slot_mut(id) {
            slot.root = root;
        }
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        if let Some(slot) = self.slot_mut(id) {
            slot.hidden = hidden;
        }
    }

    pub fn set_element(&mut self, id: NodeId, element: Element) {
        if let Some(slot) = self.slot_mut(id) {
            slot.element = Some(element);
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.slot_mut(id).and_then(|s| s.element.as_mut())
    }

    pub fn set_frame(&mut self, id: NodeId, frame: Frame) {
        if let Some(slot) = self.slot_mut(id) {
            slot.frame = Some(frame);
        }
    }

    pub fn frame_mut(&mut self, id: NodeId) -> Option<&mut Frame> {
        self.slot_mut(id).and_then(|s| s.frame.as_mut())
    }

    pub fn set_flex(&mut self, id: NodeId, flex: Flex) {
        if let Some(slot) = self.slot_mut(id) {
            slot.flex = Some(flex);
        }
    }

    pub fn flex_mut(&mut self, id: NodeId) -> Option<&mut Flex> {
        self.slot_mut(id).and_then(|s| s.flex.as_mut())
    }

    /// Harness escape hatch: write bounds without a recompute. Interaction
    /// tests use this to stage geometry directly; the next recompute
    /// overwrites it.
    pub fn seed_bounds(&mut self, id: NodeId, bounds: Rect) {
        self.set_computed_bounds(id, bounds);
    }

    /// Live nodes, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.alive)
            .map(|(i, _)| NodeId(i as u32))
    }
}

impl Scene for SceneArena {
    fn roots(&self) -> Vec<NodeId> {
        self.iter().filter(|id| self.is_root(*id)).collect()
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id).map(|s| s.children.as_slice()).unwrap_or(&[])
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|s| s.parent)
    }

    fn is_root(&self, id: NodeId) -> bool {
        self.slot(id).is_some_and(|s| s.root)
    }

    fn is_hidden(&self, id: NodeId) -> bool {
        self.slot(id).is_some_and(|s| s.hidden)
    }

    fn element(&self, id: NodeId) -> Option<&Element> {
        self.slot(id).and_then(|s| s.element.as_ref())
    }

    fn frame(&self, id: NodeId) -> Option<&Frame> {
        self.slot(id).and_then(|s| s.frame.as_ref())
    }

    fn flex(&self, id: NodeId) -> Option<&Flex> {
        self.slot(id).and_then(|s| s.flex.as_ref())
    }
}

impl SceneMut for SceneArena {
    fn set_computed_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(frame) = self.frame_mut(id) {
            frame.set_computed(bounds);
        }
    }
}
