//! Identity and content-equality contracts for diffable nodes

use std::fmt::Debug;
use std::hash::Hash;

/// A node that can be matched across two snapshots.
///
/// Identity answers "is this the same logical row, possibly moved";
/// content equality answers "does this row need a visual refresh". The two
/// are evaluated independently: an identity match with unequal content is
/// an in-place update, an identity present at a different position is a
/// move. Content equality need not consider identity, and what counts as a
/// content change is the implementor's call (a selection flag that is
/// animated separately may deliberately not count).
pub trait Diffable {
    /// Stable identity key. Never reused across distinct logical entities,
    /// never changed for the lifetime of a node.
    type Id: Hash + Eq + Clone + Debug;

    /// Extract the identity key.
    fn identity(&self) -> Self::Id;

    /// Whether the visible content of `self` and `other` is the same.
    fn content_equals(&self, other: &Self) -> bool;
}

/// A section: a diffable header carrying an ordered list of diffable items.
pub trait DiffableSection: Diffable + Clone {
    /// Item type carried by this section.
    type Item: Diffable + Clone;

    /// Ordered items of this section.
    fn items(&self) -> &[Self::Item];

    /// Rebuild this section with a replacement item list, keeping the
    /// header untouched. Used to materialize intermediate snapshots while
    /// staging edits.
    fn with_items(&self, items: Vec<Self::Item>) -> Self;

    /// Decide between a full section reload and an item-level patch when
    /// this section is retained in the next snapshot.
    ///
    /// The default reloads if the header content changed, the item count
    /// changed, or any positional item pair differs in identity or
    /// content. Implementors may override with a looser rule (e.g. header
    /// changes only) to let retained sections be patched item by item.
    fn needs_reload(&self, next: &Self) -> bool {
        !self.content_equals(next)
            || self.items().len() != next.items().len()
            || self
                .items()
                .iter()
                .zip(next.items())
                .any(|(a, b)| a.identity() != b.identity() || !a.content_equals(b))
    }
}
