//! Staged diffing of flat, identity-bearing lists

use crate::changeset::{FlatChangeset, Move, StagedChangeset};
use crate::differentiable::Diffable;
use crate::error::{DiffError, NEXT, PREVIOUS};
use crate::lis::longest_increasing_subsequence;
use ahash::AHashMap;

/// Index elements by identity, rejecting duplicates.
pub(crate) fn index_by_identity<T: Diffable>(
    elements: &[T],
    scope: &'static str,
    snapshot: &'static str,
) -> Result<AHashMap<T::Id, usize>, DiffError> {
    let mut index = AHashMap::with_capacity(elements.len());
    for (i, element) in elements.iter().enumerate() {
        let id = element.identity();
        if index.insert(id.clone(), i).is_some() {
            return Err(DiffError::DuplicateIdentity {
                id: format!("{id:?}"),
                scope,
                snapshot,
            });
        }
    }
    Ok(index)
}

/// Compute a staged changeset turning `source` into `target`.
///
/// At most three batches are produced:
/// 1. in-place content updates, at source coordinates
/// 2. deletions, at source coordinates
/// 3. insertions (target coordinates) and moves (`from` against the
///    post-deletion list, `to` against the final one)
///
/// An empty `source` degenerates to "insert everything", an empty `target`
/// to "delete everything". Equal snapshots produce no batches.
pub fn diff<T>(source: &[T], target: &[T]) -> Result<StagedChangeset<FlatChangeset<T>>, DiffError>
where
    T: Diffable + Clone,
{
    let source_index = index_by_identity(source, "item", PREVIOUS)?;
    let target_index = index_by_identity(target, "item", NEXT)?;

    let mut stages = Vec::new();

    // Stage 1: content refreshes for retained identities, in source order.
    let mut refreshed: Vec<T> = source.to_vec();
    let mut updated = Vec::new();
    for (s_idx, element) in source.iter().enumerate() {
        if let Some(&t_idx) = target_index.get(&element.identity()) {
            if !element.content_equals(&target[t_idx]) {
                refreshed[s_idx] = target[t_idx].clone();
                updated.push(s_idx);
            }
        }
    }
    if !updated.is_empty() {
        let mut stage = FlatChangeset::with_data(refreshed.clone());
        stage.updated = updated;
        stages.push(stage);
    }

    // Stage 2: deletions of identities absent from the target.
    let mut deleted = Vec::new();
    let mut retained: Vec<T> = Vec::with_capacity(target.len());
    for (s_idx, element) in refreshed.iter().enumerate() {
        if target_index.contains_key(&element.identity()) {
            retained.push(element.clone());
        } else {
            deleted.push(s_idx);
        }
    }
    if !deleted.is_empty() {
        let mut stage = FlatChangeset::with_data(retained.clone());
        stage.deleted = deleted;
        stages.push(stage);
    }

    // Stage 3: insertions and moves. Retained elements whose old positions
    // form the longest increasing run stay put; the rest move.
    let mut inserted = Vec::new();
    let mut old_positions = Vec::new();
    let mut retained_targets = Vec::new();
    let mut cursor = 0usize;
    let retained_index: AHashMap<T::Id, usize> = retained
        .iter()
        .enumerate()
        .map(|(i, e)| (e.identity(), i))
        .collect();
    for (t_idx, element) in target.iter().enumerate() {
        match retained_index.get(&element.identity()) {
            Some(&r_idx) => {
                old_positions.push(r_idx);
                retained_targets.push((t_idx, r_idx));
            }
            None => inserted.push(t_idx),
        }
    }
    debug_assert_eq!(retained_targets.len(), retained.len());

    let mut stable = vec![false; old_positions.len()];
    for pos in longest_increasing_subsequence(&old_positions) {
        stable[pos] = true;
    }
    let mut moved = Vec::new();
    for (t_idx, r_idx) in &retained_targets {
        if !stable[cursor] {
            moved.push(Move {
                from: *r_idx,
                to: *t_idx,
            });
        }
        cursor += 1;
    }
    if !inserted.is_empty() || !moved.is_empty() {
        let mut stage = FlatChangeset::with_data(target.to_vec());
        stage.inserted = inserted;
        stage.moved = moved;
        stages.push(stage);
    }

    Ok(StagedChangeset::new(stages))
}
