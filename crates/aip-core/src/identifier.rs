//! Identifier classification.
//!
//! An inbound identifier is either a well-formed UUID or a free-text name.
//! Classification is total: any string that fails UUID parsing is treated
//! verbatim as a name, including the empty string. The classification
//! decides which query predicate the metadata source uses; a malformed
//! UUID is not an error in itself.

use uuid::Uuid;

/// A classified package identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// A well-formed UUID, normalized to lowercase hyphenated form.
    Uuid(Uuid),
    /// Anything else, carried verbatim.
    Name(String),
}

impl Identifier {
    /// Classify a raw identifier string.
    ///
    /// UUID parsing is case-insensitive; the parsed value renders as the
    /// lowercase canonical 8-4-4-4-12 form.
    pub fn classify(raw: &str) -> Self {
        match Uuid::parse_str(raw) {
            Ok(uuid) => Self::Uuid(uuid),
            Err(_) => Self::Name(raw.to_string()),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uuid(uuid) => write!(f, "{uuid}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}
