//! Lookup error taxonomy.
//!
//! Three failure modes, each tagged with the resolution stage that produced
//! it so a location-stage NotFound is distinguishable from a metadata-stage
//! one. Resolvers never swallow errors and never pick an arbitrary record
//! when more than one matches — an ambiguous match is a data-consistency
//! condition the caller must be told about.

use thiserror::Error;

/// The resolution stage a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Application-side package metadata lookup.
    Metadata,
    /// Storage-side master-file location lookup.
    Location,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Metadata => f.write_str("metadata"),
            Stage::Location => f.write_str("location"),
        }
    }
}

/// Failure outcome of a lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No record matches the identifier at this stage.
    #[error("no {0} record matches the identifier")]
    NotFound(Stage),

    /// More than one record matches the identifier at this stage.
    #[error("multiple {0} records match the identifier")]
    Ambiguous(Stage),

    /// The backing source was unreachable, timed out, or returned
    /// unparseable data. Not attributable to caller input.
    #[error("{stage} source failure: {reason}")]
    Source { stage: Stage, reason: String },
}

impl LookupError {
    /// Wrap a backing-source failure, preserving the failing stage.
    pub fn source(stage: Stage, reason: impl std::fmt::Display) -> Self {
        Self::Source {
            stage,
            reason: reason.to_string(),
        }
    }

    /// The stage this error originated from.
    pub fn stage(&self) -> Stage {
        match self {
            Self::NotFound(stage) | Self::Ambiguous(stage) => *stage,
            Self::Source { stage, .. } => *stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_stage() {
        let err = LookupError::NotFound(Stage::Location);
        assert_eq!(err.to_string(), "no location record matches the identifier");

        let err = LookupError::Ambiguous(Stage::Metadata);
        assert_eq!(
            err.to_string(),
            "multiple metadata records match the identifier"
        );
    }

    #[test]
    fn source_constructor_preserves_reason() {
        let err = LookupError::source(Stage::Metadata, "connection refused");
        assert_eq!(
            err.to_string(),
            "metadata source failure: connection refused"
        );
        assert_eq!(err.stage(), Stage::Metadata);
    }
}
