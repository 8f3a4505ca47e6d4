//! Configuration emitter core
//!
//! Holds the fixed key-value payload and writes it to a caller-supplied path.

pub mod emit;
pub mod error;
pub mod line_ending;
pub mod payload;
pub mod target;

pub use emit::{ConfigEmitter, emit};
pub use error::{EmitError, Result};
pub use line_ending::LineEnding;
pub use payload::{ConfigEntry, EmittedConfig};
pub use target::OutputTarget;
