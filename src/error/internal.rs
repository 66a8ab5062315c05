use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored enum column holds a value no variant maps to.
    ///
    /// Occurs when a role, criterion or file kind column was written outside of the
    /// service layer. Results in a generic message returned to the user.
    #[error("Unknown {column} value '{value}' in database")]
    UnknownEnumValue {
        /// Name of the column that held the value
        column: &'static str,
        /// The stored value that failed to parse
        value: String,
    },
}
