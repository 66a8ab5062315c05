//! Bucket naming per entity kind.
//!
//! Every entity kind owns exactly one bucket. Buckets are never shared across kinds so
//! that keys generated for one kind can never collide with another.

use crate::model::EntityKind;

const ALL_KINDS: [EntityKind; 4] = [
    EntityKind::Championship,
    EntityKind::Stage,
    EntityKind::Judge,
    EntityKind::Pilot,
];

/// Resolves bucket names, optionally prefixed per deployment.
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    prefix: String,
}

impl Buckets {
    /// Creates bucket naming with the given deployment prefix.
    ///
    /// An empty prefix yields the bare names (`championships`, `stages`, `judges`,
    /// `pilots`). A non-empty prefix is joined with a hyphen, e.g. `dev-stages`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_end_matches('-').to_string(),
        }
    }

    /// Bucket storing the files of entities of `kind`.
    pub fn for_kind(&self, kind: EntityKind) -> String {
        let name = match kind {
            EntityKind::Championship => "championships",
            EntityKind::Stage => "stages",
            EntityKind::Judge => "judges",
            EntityKind::Pilot => "pilots",
        };

        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}-{}", self.prefix, name)
        }
    }

    /// Every bucket the application writes to, for provisioning at startup.
    pub fn all(&self) -> Vec<String> {
        ALL_KINDS.iter().map(|kind| self.for_kind(*kind)).collect()
    }
}
