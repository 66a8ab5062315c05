use thiserror::Error;

/// Input rejected by a domain rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// File extension is in neither the photo nor the document allow-list.
    #[error("File '{name}' has unsupported format '{format}'")]
    UnsupportedFormat { name: String, format: String },

    #[error("File '{0}' has no extension")]
    MissingExtension(String),

    /// Every number in the stage's range is taken.
    #[error("No free numbers left between {start} and {end}")]
    RanOutOfNumbers { start: i32, end: i32 },

    #[error("User {user_id} is already registered on stage {stage_id}")]
    AlreadyRegistered { user_id: i64, stage_id: i32 },

    #[error("Registration for stage {0} is closed")]
    RegistrationClosed(i32),
}
