//! Text format for persisted maps
//!
//! The format is line oriented:
//! - `# <name>` and a legend comment
//! - `WIDTH=`, `HEIGHT=`, `SPAWN_X=`, `SPAWN_Y=` header lines
//! - a `DATA=` marker followed by one digit string per row

/// Map text parsing and validation
pub mod decode;
/// Map text generation
pub mod encode;

pub use decode::decode;
pub use encode::encode;
