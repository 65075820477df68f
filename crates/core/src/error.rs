//! State transition errors

use thiserror::Error;

/// A reducer action referenced a node that does not exist.
///
/// Always recovered locally: the action becomes a no-op and a diagnostic
/// is logged; the host process never crashes over a malformed reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no category at index {index}")]
    IndexOutOfBounds { index: usize },

    #[error("no category node {id:?} under parent {parent_id:?}")]
    NodeNotFound {
        id: String,
        parent_id: Option<String>,
    },
}
