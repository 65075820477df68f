//! Stateful reconcilers that retain the last snapshot as diff baseline
//!
//! The caller hands each reconciler successive snapshots; the reconciler
//! owns the previous one privately and replaces it only once a diff
//! succeeds, so a rejected diff never corrupts the baseline a rendered
//! view was built from. Calls must be strictly sequential.

use crate::changeset::{FlatChangeset, SectionedChangeset, StagedChangeset};
use crate::differentiable::{Diffable, DiffableSection};
use crate::error::DiffError;
use crate::{flat, sectioned};
use tracing::debug;

/// Reconciler over two-level (section + item) snapshots.
#[derive(Debug, Default)]
pub struct Reconciler<S> {
    baseline: Vec<S>,
}

impl<S: DiffableSection> Reconciler<S> {
    /// Start from an empty baseline; the first call inserts everything.
    pub fn new() -> Self {
        Self {
            baseline: Vec::new(),
        }
    }

    /// Start from an already-rendered snapshot.
    pub fn with_baseline(baseline: Vec<S>) -> Self {
        Self { baseline }
    }

    /// The snapshot the next diff will run against.
    pub fn baseline(&self) -> &[S] {
        &self.baseline
    }

    /// Diff the retained baseline against `next`, then retain `next`.
    pub fn reconcile(
        &mut self,
        next: Vec<S>,
    ) -> Result<StagedChangeset<SectionedChangeset<S>>, DiffError> {
        let staged = sectioned::diff(&self.baseline, &next)?;
        debug!(
            stages = staged.len(),
            edits = staged.iter().map(|s| s.edit_count()).sum::<usize>(),
            "reconciled sectioned snapshot"
        );
        self.baseline = next;
        Ok(staged)
    }
}

/// Reconciler over flat item lists.
#[derive(Debug, Default)]
pub struct FlatReconciler<T> {
    baseline: Vec<T>,
}

impl<T: Diffable + Clone> FlatReconciler<T> {
    pub fn new() -> Self {
        Self {
            baseline: Vec::new(),
        }
    }

    pub fn with_baseline(baseline: Vec<T>) -> Self {
        Self { baseline }
    }

    pub fn baseline(&self) -> &[T] {
        &self.baseline
    }

    /// Diff the retained baseline against `next`, then retain `next`.
    pub fn reconcile(
        &mut self,
        next: Vec<T>,
    ) -> Result<StagedChangeset<FlatChangeset<T>>, DiffError> {
        let staged = flat::diff(&self.baseline, &next)?;
        debug!(
            stages = staged.len(),
            edits = staged.iter().map(|s| s.edit_count()).sum::<usize>(),
            "reconciled flat snapshot"
        );
        self.baseline = next;
        Ok(staged)
    }
}
