pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod services;
pub mod view;

pub use errors::CoreError;
pub use events::{EventOutcome, UiEvent};
