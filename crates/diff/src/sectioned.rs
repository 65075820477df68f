//! Staged diffing of two-level (section + item) snapshots

use crate::changeset::{ElementPath, Move, SectionedChangeset, StagedChangeset};
use crate::differentiable::{Diffable, DiffableSection};
use crate::error::{DiffError, NEXT, PREVIOUS};
use crate::flat::index_by_identity;
use crate::lis::longest_increasing_subsequence;
use ahash::AHashMap;

/// Item-level matching plan for one retained, unreloaded section pair.
struct PairPlan {
    source_section: usize,
    target_section: usize,
    /// For each source item, its index in the target item list (if retained).
    target_of_item: Vec<Option<usize>>,
}

/// Compute a staged changeset turning `source` into `target`.
///
/// Sections are matched by identity; a retained section is either reloaded
/// wholesale (per [`DiffableSection::needs_reload`]) or patched item by
/// item with the same identity-based matching. At most four batches come
/// out, in application order:
///
/// 1. section reloads and item content updates, at source coordinates
/// 2. section and item deletions, at source coordinates
/// 3. section insertions and moves
/// 4. item insertions and moves, at final section coordinates
///
/// Every batch carries the snapshot it lands on, so a renderer can retain
/// it as the base for the following batch.
pub fn diff<S>(
    source: &[S],
    target: &[S],
) -> Result<StagedChangeset<SectionedChangeset<S>>, DiffError>
where
    S: DiffableSection,
{
    let source_sections = index_by_identity(source, "section", PREVIOUS)?;
    let target_sections = index_by_identity(target, "section", NEXT)?;
    debug_assert!(source_sections.len() == source.len());

    // Fail fast on duplicate item identities anywhere in either snapshot,
    // before any output is produced.
    for section in source {
        index_by_identity(section.items(), "item", PREVIOUS)?;
    }
    for section in target {
        index_by_identity(section.items(), "item", NEXT)?;
    }

    let mut stages = Vec::new();

    // Stage 1: reload decisions and in-place item refreshes.
    let mut refreshed: Vec<S> = source.to_vec();
    let mut section_updated = Vec::new();
    let mut element_updated = Vec::new();
    let mut reloaded = vec![false; source.len()];
    let mut plans: Vec<PairPlan> = Vec::new();

    for (s_idx, section) in source.iter().enumerate() {
        let Some(&t_idx) = target_sections.get(&section.identity()) else {
            continue;
        };
        let next = &target[t_idx];
        if section.needs_reload(next) {
            refreshed[s_idx] = next.clone();
            section_updated.push(s_idx);
            reloaded[s_idx] = true;
            continue;
        }

        // Item-level matching inside a retained, unreloaded section.
        let target_items: AHashMap<<S::Item as Diffable>::Id, usize> = next
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| (item.identity(), i))
            .collect();

        let mut target_of_item = Vec::with_capacity(section.items().len());
        let mut items: Vec<S::Item> = section.items().to_vec();
        for (i_idx, item) in section.items().iter().enumerate() {
            let matched = target_items.get(&item.identity()).copied();
            if let Some(t_item) = matched {
                let next_item = &next.items()[t_item];
                if !item.content_equals(next_item) {
                    items[i_idx] = next_item.clone();
                    element_updated.push(ElementPath::new(s_idx, i_idx));
                }
            }
            target_of_item.push(matched);
        }
        refreshed[s_idx] = section.with_items(items);
        plans.push(PairPlan {
            source_section: s_idx,
            target_section: t_idx,
            target_of_item,
        });
    }

    if !section_updated.is_empty() || !element_updated.is_empty() {
        let mut stage = SectionedChangeset::with_data(refreshed.clone());
        stage.section_updated = section_updated;
        stage.element_updated = element_updated;
        stages.push(stage);
    }

    // Stage 2: deletions. Section deletes take their items with them; item
    // deletes only occur inside retained, unreloaded sections.
    let mut section_deleted = Vec::new();
    let mut element_deleted = Vec::new();
    let mut intermediate: Vec<S> = Vec::with_capacity(target.len());
    for (s_idx, section) in refreshed.iter().enumerate() {
        if !target_sections.contains_key(&section.identity()) {
            section_deleted.push(s_idx);
            continue;
        }
        if reloaded[s_idx] {
            intermediate.push(section.clone());
            continue;
        }
        if let Some(plan) = plans.iter().find(|p| p.source_section == s_idx) {
            let mut kept = Vec::with_capacity(section.items().len());
            for (i_idx, item) in section.items().iter().enumerate() {
                if plan.target_of_item[i_idx].is_some() {
                    kept.push(item.clone());
                } else {
                    element_deleted.push(ElementPath::new(s_idx, i_idx));
                }
            }
            intermediate.push(section.with_items(kept));
        } else {
            intermediate.push(section.clone());
        }
    }
    if !section_deleted.is_empty() || !element_deleted.is_empty() {
        let mut stage = SectionedChangeset::with_data(intermediate.clone());
        stage.section_deleted = section_deleted;
        stage.element_deleted = element_deleted;
        stages.push(stage);
    }

    // Stage 3: section insertions and moves against the post-deletion order.
    let intermediate_index: AHashMap<S::Id, usize> = intermediate
        .iter()
        .enumerate()
        .map(|(i, s)| (s.identity(), i))
        .collect();
    let mut section_inserted = Vec::new();
    let mut old_positions = Vec::new();
    let mut retained_targets = Vec::new();
    for (t_idx, section) in target.iter().enumerate() {
        match intermediate_index.get(&section.identity()) {
            Some(&i_idx) => {
                old_positions.push(i_idx);
                retained_targets.push((t_idx, i_idx));
            }
            None => section_inserted.push(t_idx),
        }
    }
    let mut stable = vec![false; old_positions.len()];
    for pos in longest_increasing_subsequence(&old_positions) {
        stable[pos] = true;
    }
    let mut section_moved = Vec::new();
    for (k, (t_idx, i_idx)) in retained_targets.iter().enumerate() {
        if !stable[k] {
            section_moved.push(Move {
                from: *i_idx,
                to: *t_idx,
            });
        }
    }

    // Sections arranged in final order; retained unreloaded sections still
    // carry their post-deletion item lists.
    let arranged: Vec<S> = target
        .iter()
        .map(|t_section| match intermediate_index.get(&t_section.identity()) {
            Some(&i_idx) => intermediate[i_idx].clone(),
            None => t_section.clone(),
        })
        .collect();
    if !section_inserted.is_empty() || !section_moved.is_empty() {
        let mut stage = SectionedChangeset::with_data(arranged.clone());
        stage.section_inserted = section_inserted;
        stage.section_moved = section_moved;
        stages.push(stage);
    }

    // Stage 4: item insertions and moves inside retained, unreloaded
    // sections, at final section coordinates.
    let mut element_inserted = Vec::new();
    let mut element_moved = Vec::new();
    for plan in &plans {
        let final_section = plan.target_section;
        let current = arranged[final_section].items();
        let desired = target[plan.target_section].items();

        let current_index: AHashMap<<S::Item as Diffable>::Id, usize> = current
            .iter()
            .enumerate()
            .map(|(i, item)| (item.identity(), i))
            .collect();
        let mut old_item_positions = Vec::new();
        let mut retained_items = Vec::new();
        for (t_idx, item) in desired.iter().enumerate() {
            match current_index.get(&item.identity()) {
                Some(&c_idx) => {
                    old_item_positions.push(c_idx);
                    retained_items.push((t_idx, c_idx));
                }
                None => element_inserted.push(ElementPath::new(final_section, t_idx)),
            }
        }
        let mut stable = vec![false; old_item_positions.len()];
        for pos in longest_increasing_subsequence(&old_item_positions) {
            stable[pos] = true;
        }
        for (k, (t_idx, c_idx)) in retained_items.iter().enumerate() {
            if !stable[k] {
                element_moved.push(Move {
                    from: ElementPath::new(final_section, *c_idx),
                    to: ElementPath::new(final_section, *t_idx),
                });
            }
        }
    }
    if !element_inserted.is_empty() || !element_moved.is_empty() {
        let mut stage = SectionedChangeset::with_data(target.to_vec());
        stage.element_inserted = element_inserted;
        stage.element_moved = element_moved;
        stages.push(stage);
    }

    Ok(StagedChangeset::new(stages))
}
