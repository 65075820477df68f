//! Engine error types

use thiserror::Error;

/// Errors produced by the differencing engine.
///
/// These are caller contract violations: the diff call is aborted before
/// any changeset is produced, so already-rendered state is never corrupted
/// by a silently mis-matched output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// Two nodes at the same level of one snapshot share an identity key.
    #[error("duplicate {scope} identity {id} in {snapshot} snapshot")]
    DuplicateIdentity {
        /// Debug rendering of the offending key.
        id: String,
        /// Which level the duplicate was found at ("section" or "item").
        scope: &'static str,
        /// Which snapshot held the duplicate ("previous" or "next").
        snapshot: &'static str,
    },
}

/// Snapshot labels used in error reporting.
pub(crate) const PREVIOUS: &str = "previous";
pub(crate) const NEXT: &str = "next";
