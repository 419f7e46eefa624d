use glam::Vec2;

/// Absolute rectangle in screen space. Width and height are never negative
/// once written by the layout engine.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.origin;
        let max = self.origin + self.size;
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.origin.x <= b_max.x
            && other.origin.x <= a_max.x
            && self.origin.y <= b_max.y
            && other.origin.y <= a_max.y
    }
}
