// src/voice/mod.rs
//
// Voice command interpretation
//
// Recognized speech text goes in, at most one discrete command comes out.
// Matching is pure and deterministic: normalized substring containment,
// first command in the declared vocabulary order wins.

pub mod command;
pub mod patterns;
pub mod translator;

pub use command::VoiceCommand;
pub use patterns::{PatternTable, DEFAULT_LANGUAGE};
pub use translator::{extract_step_number, VoiceCommandTranslator};
