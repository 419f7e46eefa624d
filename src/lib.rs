pub mod debug;
pub mod hit;
pub mod layout;
pub mod scene;
pub mod style;

pub use hit::{hit_test, hit_test_all};
pub use layout::{LayoutEngine, Rect};
pub use scene::{NodeId, Scene, SceneArena, SceneMut};
pub use style::{Align, Edges, Element, Flex, FlexDir, Frame, Justify, SizeMode};

pub use glam::{Vec2, vec2};

pub fn init_logging() {
    env_logger::init();
}
