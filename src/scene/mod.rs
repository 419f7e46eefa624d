pub mod arena;
pub mod graph;

pub use arena::SceneArena;
pub use graph::{NodeId, Scene, SceneMut};
