pub mod properties;

pub use properties::{Align, Edges, Element, Flex, FlexDir, Frame, Justify, SizeMode};
