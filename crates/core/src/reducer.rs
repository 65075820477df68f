//! Pure state reducer

use crate::action::{Action, Effect};
use crate::state::UneatenState;
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Effects requested by one reduction. Almost always zero or one.
pub type Effects = SmallVec<[Effect; 1]>;

/// Map (state, action) to (next state, requested effects).
///
/// Deterministic and free of side effects on anything but the returned
/// value; all I/O is expressed as an [`Effect`] for the caller to run.
/// Actions referencing a missing index or id are recovered locally: the
/// state comes back unchanged and a diagnostic is logged.
pub fn reduce(mut state: UneatenState, action: Action) -> (UneatenState, Effects) {
    let mut effects = Effects::new();

    match action {
        Action::ValidateSelection => {
            if state.pending_validation {
                // A save is already in flight; a redundant request is ignored.
                debug!("validation requested while one is pending, ignoring");
            } else {
                state.pending_validation = true;
                effects.push(Effect::Save {
                    keys: state.selected_keys(),
                });
            }
        }
        Action::ToggleCategory { index } => {
            if let Err(e) = state.toggle_at(index) {
                warn!(error = %e, "toggle ignored");
            } else {
                state.saved = false;
            }
        }
        Action::ToggleTopCategory { id } => {
            if let Err(e) = state.toggle_top(&id) {
                warn!(error = %e, "toggle ignored");
            } else {
                state.saved = false;
            }
        }
        Action::ToggleSubcategory { id, parent_id } => {
            if let Err(e) = state.toggle_sub(&id, parent_id.as_deref()) {
                warn!(error = %e, "toggle ignored");
            } else {
                state.saved = false;
            }
        }
        Action::Append { text, ids } => {
            let matched = state.append_to_names(&text, &ids);
            debug!(matched, "appended to category names");
        }
        Action::AcknowledgeValidation => {
            state.saved = true;
            state.pending_validation = false;
        }
        Action::ValidationFailed { reason } => {
            // The selection stays editable and unsaved; the pending flag
            // must never be left stuck.
            warn!(%reason, "selection save failed");
            state.pending_validation = false;
        }
    }

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CategoryState;

    fn grouped_state() -> UneatenState {
        UneatenState::new(vec![
            CategoryState::new("fishKey", "Fish"),
            CategoryState::with_substates(
                "meatKey",
                "meats",
                vec![
                    CategoryState::new("beefKey", "beef"),
                    CategoryState::new("turkeyKey", "turkey"),
                ],
            ),
        ])
    }

    #[test]
    fn toggle_by_index_marks_unsaved() {
        let (state, effects) = reduce(grouped_state(), Action::ToggleCategory { index: 0 });
        assert!(state.categories[0].is_selected);
        assert!(!state.saved);
        assert!(effects.is_empty());
    }

    #[test]
    fn toggle_out_of_bounds_is_a_noop() {
        let before = grouped_state();
        let (after, effects) = reduce(before.clone(), Action::ToggleCategory { index: 9 });
        assert_eq!(after, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn toggle_ghost_subcategory_is_a_noop() {
        let before = grouped_state();
        let (after, _) = reduce(
            before.clone(),
            Action::ToggleSubcategory {
                id: "ghost".to_string(),
                parent_id: Some("meatKey".to_string()),
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn validate_requests_save_of_selected_keys() {
        let (state, _) = reduce(grouped_state(), Action::ToggleTopCategory { id: "fishKey".into() });
        let (state, effects) = reduce(state, Action::ValidateSelection);
        assert!(state.pending_validation);
        assert_eq!(
            effects.as_slice(),
            &[Effect::Save {
                keys: vec!["fishKey".to_string()]
            }]
        );
    }

    #[test]
    fn redundant_validate_is_ignored_while_pending() {
        let (state, _) = reduce(grouped_state(), Action::ValidateSelection);
        let (state, effects) = reduce(state, Action::ValidateSelection);
        assert!(state.pending_validation);
        assert!(effects.is_empty());
    }

    #[test]
    fn acknowledge_clears_pending_and_marks_saved() {
        let (state, _) = reduce(grouped_state(), Action::ValidateSelection);
        let (state, _) = reduce(state, Action::AcknowledgeValidation);
        assert!(state.saved);
        assert!(!state.pending_validation);
    }

    #[test]
    fn acknowledge_keeps_concurrent_edits() {
        // Edits arriving while a save is pending must survive the ack.
        let (state, _) = reduce(grouped_state(), Action::ValidateSelection);
        let (state, _) = reduce(state, Action::ToggleCategory { index: 0 });
        let (state, _) = reduce(state, Action::AcknowledgeValidation);
        assert!(state.categories[0].is_selected);
        assert!(state.saved);
    }

    #[test]
    fn failed_validation_clears_pending_but_not_saved() {
        let (state, _) = reduce(grouped_state(), Action::ToggleCategory { index: 0 });
        let (state, _) = reduce(state, Action::ValidateSelection);
        let (state, _) = reduce(
            state,
            Action::ValidationFailed {
                reason: "boom".to_string(),
            },
        );
        assert!(!state.pending_validation);
        assert!(!state.saved);
    }

    #[test]
    fn append_hits_every_match_at_every_level() {
        let (state, _) = reduce(
            grouped_state(),
            Action::Append {
                text: "X".to_string(),
                ids: vec!["fishKey".to_string(), "turkeyKey".to_string()],
            },
        );
        assert_eq!(state.categories[0].name, "FishX");
        assert_eq!(state.categories[1].substates[1].name, "turkeyX");
        assert_eq!(state.categories[1].name, "meats");
    }
}
