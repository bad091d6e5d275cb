// src/voice/patterns.rs
//
// Per-language trigger phrases for every voice command.
//
// Source format: one pipe-separated string per command, parsed once into
// lowercase, trimmed triggers. Adding a language is a data-only change and
// must never touch the matching algorithm.

use log::warn;

use crate::voice::command::VoiceCommand;

/// Language used when the selected locale has no pattern set
pub const DEFAULT_LANGUAGE: &str = "en";

/// English triggers, one row per command in evaluation order
const EN_TRIGGERS: [&str; 14] = [
    "next|forward|continue|go on|move on",
    "previous|back|go back",
    "repeat|again|say that again|one more time",
    "start|begin|let's cook",
    "ingredients|ingredient list|what do i need",
    "description|describe|about this recipe",
    "how long|cooking time|total time|duration",
    "tips|tip|advice|hints",
    "step|go to step|jump to step",
    "start timer|set timer|set a timer",
    "pause timer|pause the timer|hold the timer",
    "resume timer|resume the timer|unpause",
    "stop timer|stop the timer|cancel timer",
    "check timer|time left|how much left",
];

/// Polish triggers, same row order
const PL_TRIGGERS: [&str; 14] = [
    "dalej|następny|nastepny|kontynuuj",
    "poprzedni|cofnij|wróć|wroc",
    "powtórz|powtorz|jeszcze raz",
    "start|zacznij|rozpocznij",
    "składniki|skladniki",
    "opis|opowiedz o przepisie",
    "jak długo|jak dlugo|czas gotowania",
    "wskazówki|wskazowki|porady",
    "krok|przejdź do kroku|przejdz do kroku",
    "włącz minutnik|wlacz minutnik|ustaw minutnik",
    "zatrzymaj minutnik|pauza",
    "wznów minutnik|wznow minutnik",
    "wyłącz minutnik|wylacz minutnik|skasuj minutnik",
    "sprawdź minutnik|sprawdz minutnik|ile zostało|ile zostalo",
];

/// An ordered mapping from command to its trigger phrases.
///
/// Kept as an explicit list of pairs (not a map) so the evaluation order is
/// exactly `VoiceCommand::ALL`, reproducibly. Immutable after construction;
/// switching languages means building a new table.
pub struct PatternTable {
    entries: Vec<(VoiceCommand, Vec<String>)>,
}

impl PatternTable {
    /// Build the table for a language code ("en", "pl"). An unsupported
    /// code falls back to the default language.
    pub fn for_language(language: &str) -> Self {
        let triggers = match language {
            "en" => &EN_TRIGGERS,
            "pl" => &PL_TRIGGERS,
            other => {
                warn!(
                    "No voice patterns for language {:?}, falling back to {:?}",
                    other, DEFAULT_LANGUAGE
                );
                &EN_TRIGGERS
            }
        };
        Self::from_raw(triggers)
    }

    /// Parse one pipe-separated trigger string per command, positionally
    /// aligned with `VoiceCommand::ALL`.
    fn from_raw(raw: &[&str; 14]) -> Self {
        let entries = VoiceCommand::ALL
            .iter()
            .zip(raw.iter())
            .map(|(command, joined)| {
                let triggers = joined
                    .split('|')
                    .map(|trigger| trigger.trim().to_lowercase())
                    .filter(|trigger| !trigger.is_empty())
                    .collect();
                (*command, triggers)
            })
            .collect();
        Self { entries }
    }

    /// Entries in evaluation order
    pub fn entries(&self) -> &[(VoiceCommand, Vec<String>)] {
        &self.entries
    }
}
