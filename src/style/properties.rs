use glam::{Vec2, vec2};

use crate::layout::Rect;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlexDir {
    Row,
    Column,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

/// How an axis of a [`Frame`] resolves its extent.
///
/// `Fixed` and `Percent` read [`Frame::size`]; `Fill` consumes leftover space
/// inside a flex container and stretches on the cross axis. Outside a flex
/// container `Fill` falls back to the anchor span.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SizeMode {
    Fixed,
    Fill,
    Percent,
}

/// Four-sided pixel inset, applied after anchor resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Edges {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn all(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

/// Declarative sizing/anchoring block. One per positioned node.
///
/// Anchors are fractions of the parent box, the offset is a pixel inset on
/// the resolved span, and `size` kicks in per axis when the matching mode is
/// `Fixed` or `Percent`. `computed` is the engine's output and nothing else
/// writes it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
    pub offset: Edges,
    pub size: Vec2,
    pub width_mode: SizeMode,
    pub height_mode: SizeMode,
    computed: Rect,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            anchor_min: Vec2::ZERO,
            anchor_max: Vec2::ONE,
            pivot: vec2(0.5, 0.5),
            offset: Edges::ZERO,
            size: Vec2::ZERO,
            width_mode: SizeMode::Fill,
            height_mode: SizeMode::Fill,
            computed: Rect::ZERO,
        }
    }
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed-extent frame on both axes.
    pub fn fixed(width: f32, height: f32) -> Self {
        Self::new()
            .size(width, height)
            .width_mode(SizeMode::Fixed)
            .height_mode(SizeMode::Fixed)
    }

    pub fn anchors(mut self, min: Vec2, max: Vec2) -> Self {
        self.anchor_min = min;
        self.anchor_max = max;
        self
    }

    pub fn pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn offset(mut self, offset: Edges) -> Self {
        self.offset = offset;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = vec2(width, height);
        self
    }

    pub fn width_mode(mut self, mode: SizeMode) -> Self {
        self.width_mode = mode;
        self
    }

    pub fn height_mode(mut self, mode: SizeMode) -> Self {
        self.height_mode = mode;
        self
    }

    /// Absolute screen rectangle from the last recompute.
    pub fn computed(&self) -> Rect {
        self.computed
    }

    pub(crate) fn set_computed(&mut self, bounds: Rect) {
        self.computed = bounds;
    }
}

/// Flex-container block. Attaching one to a node makes it position its
/// immediate visible children along `dir` instead of by their anchors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Flex {
    pub dir: FlexDir,
    pub justify: Justify,
    pub align: Align,
    pub spacing: f32,
    pub wrap: bool,
    pub reverse: bool,
}

impl Default for Flex {
    fn default() -> Self {
        Self {
            dir: FlexDir::Row,
            justify: Justify::Start,
            align: Align::Start,
            spacing: 0.0,
            wrap: false,
            reverse: false,
        }
    }
}

impl Flex {
    pub fn row() -> Self {
        Self::default()
    }

    pub fn column() -> Self {
        Self {
            dir: FlexDir::Column,
            ..Self::default()
        }
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// Generic node header read by both the layout engine and the hit tester.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub visible: bool,
    pub raycast_target: bool,
    pub z_index: i32,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            visible: true,
            raycast_target: true,
            z_index: 0,
        }
    }
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn raycast_target(mut self, raycast_target: bool) -> Self {
        self.raycast_target = raycast_target;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}
