pub mod action;
pub mod config;
pub mod encounter;
pub mod io;
pub mod report;
pub mod session;

pub use action::Action;
pub use config::{PlayerConfig, SkirmishConfig, TelemetryConfig, WeaponConfig};
pub use encounter::{EncounterOutcome, EncounterRecord, Opponent};
pub use io::{
    BufferDisplay, DisplaySink, InputSource, PromptInput, SessionError, WriterDisplay,
    INVALID_CHOICE_PROMPT,
};
pub use report::{PlayerSummary, RunReport, RunStatus, RunSummary};
pub use session::{JournalEntry, Session};

pub use combat_core;
