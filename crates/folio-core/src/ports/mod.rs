pub mod store;
pub mod surface;

pub use store::{KeyValueStore, StoreError};
pub use surface::{Anchor, Matcher, RenderSurface};
