use std::fmt;

/// The discrete commands the assistant can act on.
///
/// The declared order is the evaluation order: when an utterance contains
/// triggers for several commands, the one earlier in `ALL` wins. This is a
/// deliberate, reproducible tie-break, not a scoring scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    Next,
    Previous,
    Repeat,
    Start,
    Ingredients,
    Description,
    Time,
    Tips,
    StepNumber,
    StartTimer,
    PauseTimer,
    ResumeTimer,
    StopTimer,
    CheckTimer,
}

impl VoiceCommand {
    /// Every command, in evaluation order
    pub const ALL: [VoiceCommand; 14] = [
        VoiceCommand::Next,
        VoiceCommand::Previous,
        VoiceCommand::Repeat,
        VoiceCommand::Start,
        VoiceCommand::Ingredients,
        VoiceCommand::Description,
        VoiceCommand::Time,
        VoiceCommand::Tips,
        VoiceCommand::StepNumber,
        VoiceCommand::StartTimer,
        VoiceCommand::PauseTimer,
        VoiceCommand::ResumeTimer,
        VoiceCommand::StopTimer,
        VoiceCommand::CheckTimer,
    ];
}

impl fmt::Display for VoiceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VoiceCommand::Next => "NEXT",
            VoiceCommand::Previous => "PREVIOUS",
            VoiceCommand::Repeat => "REPEAT",
            VoiceCommand::Start => "START",
            VoiceCommand::Ingredients => "INGREDIENTS",
            VoiceCommand::Description => "DESCRIPTION",
            VoiceCommand::Time => "TIME",
            VoiceCommand::Tips => "TIPS",
            VoiceCommand::StepNumber => "STEP_NUMBER",
            VoiceCommand::StartTimer => "START_TIMER",
            VoiceCommand::PauseTimer => "PAUSE_TIMER",
            VoiceCommand::ResumeTimer => "RESUME_TIMER",
            VoiceCommand::StopTimer => "STOP_TIMER",
            VoiceCommand::CheckTimer => "CHECK_TIMER",
        };
        write!(f, "{}", name)
    }
}
