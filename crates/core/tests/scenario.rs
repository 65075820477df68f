//! End-to-end scenario: grouped categories through store, projection and
//! reconciliation

use std::sync::Arc;
use std::time::Duration;
use uneaten_core::{
    project, Action, CategoriesService, CategoryState, MockCategoriesService, Store,
    UneatenState, STANDALONE_GROUP_ID,
};
use uneaten_diff::Reconciler;

/// Standalone fish/shellfish plus a grouped "meat" with beef and turkey.
fn initial() -> UneatenState {
    UneatenState::new(vec![
        CategoryState::new("fish", "fish"),
        CategoryState::new("shellfish", "shellfish"),
        CategoryState::with_substates(
            "meat",
            "meat",
            vec![
                CategoryState::new("beef", "beef"),
                CategoryState::new("turkey", "turkey"),
            ],
        ),
    ])
}

#[test]
fn projection_matches_expected_group_layout() {
    let groups = project(&initial());
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].id(), STANDALONE_GROUP_ID);
    let standalone: Vec<&str> = groups[0].elements().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(standalone, vec!["fish", "shellfish"]);
    assert_eq!(groups[1].id(), "meat");
    let elements: Vec<&str> = groups[1].elements().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(elements, vec!["beef", "turkey"]);
}

#[test]
fn selecting_meat_reloads_its_section_with_no_item_edits() {
    let mut state = initial();
    let mut reconciler = Reconciler::with_baseline(project(&state));

    state.categories[2].is_selected = true;
    assert!(project(&state)[1].elements().is_empty());

    let staged = reconciler.reconcile(project(&state)).unwrap();
    assert_eq!(staged.len(), 1);
    let stage = &staged[0];
    // Item count went from 2 to 0: the section-level reload rule fires.
    assert_eq!(stage.section_updated, vec![1]);
    assert!(stage.element_deleted.is_empty());
    assert!(stage.element_inserted.is_empty());
    assert!(stage.element_moved.is_empty());
    assert!(stage.section_deleted.is_empty());
    assert!(stage.section_inserted.is_empty());
}

#[test]
fn unchanged_identity_sets_never_insert_or_delete() {
    let mut state = initial();
    let mut reconciler = Reconciler::with_baseline(project(&state));

    // Names change, ids do not.
    state.categories[0].name.push_str(" etc");
    state.categories[2].name.push_str(" etc");
    let staged = reconciler.reconcile(project(&state)).unwrap();
    for stage in &staged {
        assert!(stage.section_deleted.is_empty());
        assert!(stage.section_inserted.is_empty());
        assert!(stage.element_deleted.is_empty());
        assert!(stage.element_inserted.is_empty());
    }
}

#[tokio::test]
async fn full_flow_toggle_validate_acknowledge() {
    let service = Arc::new(MockCategoriesService::new(
        Vec::new(),
        Duration::from_millis(5),
    ));
    let store = Store::spawn(initial(), service.clone());
    let mut snapshots = store.subscribe();
    let mut reconciler = Reconciler::with_baseline(project(&store.snapshot().await.unwrap()));

    store.send(Action::ToggleSubcategory {
        id: "fish".to_string(),
        parent_id: None,
    });
    store.send(Action::ToggleTopCategory {
        id: "meat".to_string(),
    });
    store.send(Action::ValidateSelection);

    let mut saved_state = None;
    while let Some(state) = snapshots.recv().await {
        let staged = reconciler.reconcile(project(&state)).unwrap();
        // Every staged batch must finish on the projection it announced.
        if let Some(last) = staged.last() {
            assert_eq!(last.data, project(&state));
        }
        if state.saved && !state.pending_validation {
            saved_state = Some(state);
            break;
        }
    }

    let state = saved_state.unwrap();
    assert_eq!(state.selected_keys(), vec!["fish", "meat"]);
    assert_eq!(
        service.selected_keys().await.unwrap(),
        vec!["fish".to_string(), "meat".to_string()]
    );
}

#[tokio::test]
async fn append_touches_all_matching_levels() {
    let service = Arc::new(MockCategoriesService::new(Vec::new(), Duration::ZERO));
    let store = Store::spawn(initial(), service);

    // "fish" is top-level, "turkey" nested under meat; shellfish untouched.
    store.send(Action::Append {
        text: " (new)".to_string(),
        ids: vec!["fish".to_string(), "turkey".to_string()],
    });

    let state = store.snapshot().await.unwrap();
    assert_eq!(state.categories[0].name, "fish (new)");
    assert_eq!(state.categories[1].name, "shellfish");
    assert_eq!(state.categories[2].substates[1].name, "turkey (new)");
}
