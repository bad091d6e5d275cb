// src/voice/translator.rs
//
// Recognized speech text -> at most one VoiceCommand.
//
// Pure and synchronous: safe to call from any thread, no state beyond the
// immutable pattern table.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::voice::command::VoiceCommand;
use crate::voice::patterns::PatternTable;

pub struct VoiceCommandTranslator {
    patterns: PatternTable,
}

impl VoiceCommandTranslator {
    pub fn new(patterns: PatternTable) -> Self {
        Self { patterns }
    }

    /// Shorthand for a translator over a language's pattern table
    pub fn for_language(language: &str) -> Self {
        Self::new(PatternTable::for_language(language))
    }

    /// Map an utterance to a command.
    ///
    /// Normalizes (lowercase, trim), then tests substring containment of
    /// each trigger, command by command in vocabulary order; the first
    /// command with a matching trigger wins. No match is a normal outcome.
    pub fn translate(&self, text: &str) -> Option<VoiceCommand> {
        let normalized = text.trim().to_lowercase();

        for (command, triggers) in self.patterns.entries() {
            if triggers
                .iter()
                .any(|trigger| normalized.contains(trigger.as_str()))
            {
                return Some(*command);
            }
        }

        debug!("No command matched utterance {:?}", normalized);
        None
    }
}

/// Pull the step number out of a STEP_NUMBER utterance ("go to step 3").
/// Returns the first integer in the text, if any.
pub fn extract_step_number(text: &str) -> Option<u32> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let digits = DIGITS.get_or_init(|| Regex::new(r"\d+").unwrap());
    digits.find(text)?.as_str().parse().ok()
}
