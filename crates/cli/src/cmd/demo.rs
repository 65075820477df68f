//! Scripted editing session printing every staged changeset

use crate::{fixtures, render};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;
use uneaten_core::{
    project, Action, CategoriesService, MockCategoriesService, Store, UneatenState,
};
use uneaten_diff::{FlatReconciler, Reconciler};

pub async fn run(latency_ms: u64, flat: bool) -> Result<()> {
    let latency = Duration::from_millis(latency_ms);
    if flat {
        run_flat(latency).await
    } else {
        run_grouped(latency).await
    }
}

/// The grouped tree: sectioned projection and reconciliation.
async fn run_grouped(latency: Duration) -> Result<()> {
    let service = Arc::new(MockCategoriesService::new(
        fixtures::grouped_categories(),
        latency,
    ));
    let categories = service
        .possible_categories()
        .await
        .context("Failed to load categories")?;
    let selected = service
        .selected_keys()
        .await
        .context("Failed to load selected keys")?;

    let initial = UneatenState::from_categories(&categories, &selected);
    let store = Store::spawn(initial.clone(), service);
    let mut snapshots = store.subscribe();
    let mut reconciler = Reconciler::with_baseline(project(&initial));

    println!("{}", "Initial groups".bold());
    render::print_groups(reconciler.baseline());
    println!();

    let script: Vec<(&str, Action)> = vec![
        (
            "toggle fish",
            Action::ToggleSubcategory {
                id: "fishKey".to_string(),
                parent_id: None,
            },
        ),
        (
            "toggle beef under meats",
            Action::ToggleSubcategory {
                id: "beefKey".to_string(),
                parent_id: Some("meatKey".to_string()),
            },
        ),
        (
            "select the whole meats group",
            Action::ToggleTopCategory {
                id: "meatKey".to_string(),
            },
        ),
        (
            "append to beef and turkey",
            Action::Append {
                text: " bla bla".to_string(),
                ids: vec!["beefKey".to_string(), "turkeyKey".to_string()],
            },
        ),
        ("validate selection", Action::ValidateSelection),
    ];

    for (label, action) in script {
        println!("{} {}", "»".cyan(), label.bold());
        store.send(action);
        let state = snapshots
            .recv()
            .await
            .context("Store ended unexpectedly")?;
        let staged = reconciler
            .reconcile(project(&state))
            .context("Reconciliation failed")?;
        debug!(label, batches = staged.len(), "applied scripted action");
        render::print_staged(&staged);
        println!("  status: {}", render::status_line(&state));
        println!();
    }

    // The save effect lands asynchronously as its own transition.
    println!("{} waiting for save acknowledgment", "»".cyan());
    let state = wait_for_settled(&mut snapshots)
        .await
        .context("Store ended before the save settled")?;
    let staged = reconciler
        .reconcile(project(&state))
        .context("Reconciliation failed")?;
    render::print_staged(&staged);
    println!("  status: {}", render::status_line(&state));

    Ok(())
}

/// The flat chicken/salad list: item-level reconciliation only.
async fn run_flat(latency: Duration) -> Result<()> {
    let service = Arc::new(MockCategoriesService::new(
        fixtures::flat_categories(),
        latency,
    ));
    let categories = service
        .possible_categories()
        .await
        .context("Failed to load categories")?;

    let initial = UneatenState::from_categories(&categories, &[]);
    let store = Store::spawn(initial.clone(), service);
    let mut snapshots = store.subscribe();
    let mut reconciler = FlatReconciler::with_baseline(initial.categories.clone());

    let script: Vec<(&str, Action)> = vec![
        ("toggle chicken", Action::ToggleCategory { index: 0 }),
        (
            "append to chicken",
            Action::Append {
                text: " bsdfsdf".to_string(),
                ids: vec!["chickenKey".to_string()],
            },
        ),
        ("validate selection", Action::ValidateSelection),
    ];

    for (label, action) in script {
        println!("{} {}", "»".cyan(), label.bold());
        store.send(action);
        let state = snapshots
            .recv()
            .await
            .context("Store ended unexpectedly")?;
        let staged = reconciler
            .reconcile(state.categories.clone())
            .context("Reconciliation failed")?;
        debug!(label, batches = staged.len(), "applied scripted action");
        if staged.is_empty() {
            println!("  {}", "no visual changes".dimmed());
        }
        for (number, stage) in staged.iter().enumerate() {
            println!(
                "  batch {}: {} updated, {} deleted, {} inserted, {} moved",
                number + 1,
                stage.updated.len(),
                stage.deleted.len(),
                stage.inserted.len(),
                stage.moved.len()
            );
        }
        println!("  status: {}", render::status_line(&state));
        println!();
    }

    println!("{} waiting for save acknowledgment", "»".cyan());
    let state = wait_for_settled(&mut snapshots)
        .await
        .context("Store ended before the save settled")?;
    println!("  status: {}", render::status_line(&state));

    Ok(())
}

/// Drain snapshots until no save is pending.
async fn wait_for_settled(
    snapshots: &mut UnboundedReceiver<UneatenState>,
) -> Option<UneatenState> {
    while let Some(state) = snapshots.recv().await {
        if !state.pending_validation {
            return Some(state);
        }
    }
    None
}
