use thiserror::Error;

/// Reasons an invitation code cannot be redeemed.
///
/// None of these mutate the stored code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferralError {
    #[error("Invitation code '{0}' does not exist")]
    NotFound(String),

    #[error("Invitation code '{0}' has expired")]
    Expired(String),

    #[error("Invitation code '{0}' has already been used")]
    AlreadyActivated(String),
}
