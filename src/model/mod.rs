//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and are
//! what the service layer hands to the chat presentation layer. Enum-valued columns are
//! parsed into Rust enums here so that no caller compares raw strings.

pub mod championship;
pub mod file;
pub mod participant;
pub mod referral;
pub mod stage;
pub mod user;

/// Kind of a file-owning entity.
///
/// Stored in `file_refs.parent_type` and used to pick the object store bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Championship,
    Stage,
    Judge,
    Pilot,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Championship => "championship",
            Self::Stage => "stage",
            Self::Judge => "judge",
            Self::Pilot => "pilot",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
