//! Input/output, configuration and error handling

/// Command-line argument model and command execution
pub mod cli;
/// Format constants and editor defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Map file loading and saving
pub mod file;
/// PNG preview rendering
pub mod image;
/// Batch progress display
pub mod progress;
