use crate::record::Section;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("input closed before the form was complete")]
    InputClosed,
    #[error("failed to read from terminal: {0}")]
    TerminalRead(std::io::Error),
    #[error("failed to write to terminal: {0}")]
    TerminalWrite(std::io::Error),

    #[error("failed to write intake file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read intake file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize intake record: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize intake record: {0}")]
    Deserialization(serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    InvalidRecord { field: &'static str, reason: String },

    #[error("section {found} cannot be recorded before {expected}")]
    OutOfOrder { expected: Section, found: Section },
    #[error("intake form is incomplete: {0} has not been collected")]
    IncompleteRecord(Section),
    #[error("record has no timestamp; it must be finalised before saving")]
    NotFinalised,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl IntakeError {
    /// Whether the error means the operator walked away from the form rather than something
    /// going wrong.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, IntakeError::InputClosed)
    }
}

pub type IntakeResult<T> = std::result::Result<T, IntakeError>;
