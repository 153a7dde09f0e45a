pub mod escape;
pub mod node;

pub use node::{Element, Node};
