//! Editing front-end state

/// Editing session and command dispatch
pub mod session;

pub use session::{EditMode, EditorCommand, EditorSession};
