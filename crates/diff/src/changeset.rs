//! Changeset types produced by the engine

use std::fmt;

/// Position of an item inside a sectioned snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementPath {
    /// Section index.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

impl ElementPath {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}.{}]", self.section, self.item)
    }
}

/// A positional move. `from` is an index valid at the start of the stage,
/// `to` an index valid at its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move<P> {
    pub from: P,
    pub to: P,
}

/// One batch of edits against a flat list.
///
/// `data` is the list as it stands once this batch is applied, retained by
/// the renderer as the base for the next batch. Deletions use indices valid
/// at the start of the batch, insertions indices valid at its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatChangeset<T> {
    /// Snapshot after applying this batch.
    pub data: Vec<T>,
    /// Indices removed (start-of-batch coordinates).
    pub deleted: Vec<usize>,
    /// Indices added (end-of-batch coordinates).
    pub inserted: Vec<usize>,
    /// Indices refreshed in place (start-of-batch coordinates).
    pub updated: Vec<usize>,
    /// Moves (`from` start-of-batch, `to` end-of-batch).
    pub moved: Vec<Move<usize>>,
}

impl<T> FlatChangeset<T> {
    pub(crate) fn with_data(data: Vec<T>) -> Self {
        Self {
            data,
            deleted: Vec::new(),
            inserted: Vec::new(),
            updated: Vec::new(),
            moved: Vec::new(),
        }
    }

    /// Total number of edits in this batch.
    pub fn edit_count(&self) -> usize {
        self.deleted.len() + self.inserted.len() + self.updated.len() + self.moved.len()
    }

    /// Whether this batch carries no edits.
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

/// One batch of edits against an ordered list of sections.
///
/// Same coordinate rules as [`FlatChangeset`], applied independently at the
/// section level and the item level. A section listed in `section_updated`
/// is reloaded wholesale (header and items) and receives no item edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionedChangeset<S> {
    /// Snapshot after applying this batch.
    pub data: Vec<S>,
    pub section_deleted: Vec<usize>,
    pub section_inserted: Vec<usize>,
    /// Sections to reload in place (start-of-batch coordinates).
    pub section_updated: Vec<usize>,
    pub section_moved: Vec<Move<usize>>,
    pub element_deleted: Vec<ElementPath>,
    pub element_inserted: Vec<ElementPath>,
    pub element_updated: Vec<ElementPath>,
    pub element_moved: Vec<Move<ElementPath>>,
}

impl<S> SectionedChangeset<S> {
    pub(crate) fn with_data(data: Vec<S>) -> Self {
        Self {
            data,
            section_deleted: Vec::new(),
            section_inserted: Vec::new(),
            section_updated: Vec::new(),
            section_moved: Vec::new(),
            element_deleted: Vec::new(),
            element_inserted: Vec::new(),
            element_updated: Vec::new(),
            element_moved: Vec::new(),
        }
    }

    /// Total number of edits in this batch.
    pub fn edit_count(&self) -> usize {
        self.section_deleted.len()
            + self.section_inserted.len()
            + self.section_updated.len()
            + self.section_moved.len()
            + self.element_deleted.len()
            + self.element_inserted.len()
            + self.element_updated.len()
            + self.element_moved.len()
    }

    /// Whether this batch carries no edits.
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

/// An ordered sequence of edit batches.
///
/// Batches must be applied in order, each fully before the next begins.
/// Every batch is internally consistent: no edit references an index
/// invalidated by another edit in the same batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedChangeset<C> {
    stages: Vec<C>,
}

impl<C> StagedChangeset<C> {
    pub(crate) fn new(stages: Vec<C>) -> Self {
        Self { stages }
    }

    /// Number of batches.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the two snapshots were already reconciled.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Iterate over batches in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.stages.iter()
    }
}

impl<C> std::ops::Deref for StagedChangeset<C> {
    type Target = [C];

    fn deref(&self) -> &[C] {
        &self.stages
    }
}

impl<C> IntoIterator for StagedChangeset<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a StagedChangeset<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}
