//! Actions accepted by the reducer and the effects it requests

/// External inputs to the feature: user interactions plus the follow-up
/// actions delivered when an asynchronous effect completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Persist the current selection.
    ValidateSelection,
    /// Flip selection of the top-level node at `index`.
    ToggleCategory { index: usize },
    /// Flip selection of the top-level node with `id`.
    ToggleTopCategory { id: String },
    /// Flip selection of the node with `id`: top-level when `parent_id` is
    /// `None`, otherwise nested under the named parent.
    ToggleSubcategory {
        id: String,
        parent_id: Option<String>,
    },
    /// Append `text` to the display name of every node whose id is listed.
    Append { text: String, ids: Vec<String> },
    /// A pending save completed successfully.
    AcknowledgeValidation,
    /// A pending save failed; the selection stays editable and unsaved.
    ValidationFailed { reason: String },
}

/// Asynchronous follow-up work requested by the reducer, never performed
/// inline. The store runs each effect and feeds the resulting action back
/// into the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Save the given selected keys through the persistence service.
    Save { keys: Vec<String> },
}
