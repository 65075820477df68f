//! Staged differencing engine for identity-bearing lists and sections
//!
//! This crate provides:
//! - `Diffable` / `DiffableSection` traits (identity + content equality)
//! - Flat list diffing (`flat::diff`)
//! - Two-level sectioned diffing (`sectioned::diff`)
//! - Staged changesets safe to apply batch-by-batch to a live indexed view
//! - A stateful `Reconciler` that retains the last snapshot as baseline
//!
//! Matching is always done by identity key, never by position: a node that
//! changed position comes out as an explicit move, a node whose content
//! changed comes out as an in-place update. Duplicate identities within one
//! snapshot are a caller contract violation and abort the diff.

pub mod changeset;
pub mod differentiable;
pub mod error;
pub mod flat;
pub mod lis;
pub mod reconciler;
pub mod sectioned;

// Re-exports
pub use changeset::{ElementPath, FlatChangeset, Move, SectionedChangeset, StagedChangeset};
pub use differentiable::{Diffable, DiffableSection};
pub use error::DiffError;
pub use reconciler::{FlatReconciler, Reconciler};
