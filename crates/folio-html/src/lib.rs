pub mod document;
pub mod shell;

pub use document::{Document, NodeId};
pub use shell::{ShellMeta, portfolio_shell};
