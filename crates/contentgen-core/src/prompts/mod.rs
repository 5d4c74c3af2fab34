//! Prompt assembly for the text provider and the M3 stub.

pub mod content;
pub mod m3;

pub use content::{assemble, GenerationRequest, Mode, PromptPair};
