//! Grouping projection and its diffable view
//!
//! Derives the ordered section view the rendering surface consumes: one
//! standalone group first (always present, possibly empty), then one group
//! per top-level category that carries subcategories, in original order.

use crate::state::{CategoryState, UneatenState};
use uneaten_diff::{Diffable, DiffableSection};

/// Identity of the single standalone group.
pub const STANDALONE_GROUP_ID: &str = "standaloneGroup";

/// One section of the projected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryGroup {
    /// Every top-level category without subcategories, headerless.
    Standalone(Vec<CategoryState>),
    /// A top-level category with subcategories, rendered with a header.
    Top(CategoryState),
}

impl CategoryGroup {
    pub fn is_standalone(&self) -> bool {
        matches!(self, CategoryGroup::Standalone(_))
    }

    /// Section identity: the fixed standalone id or the owning node's id.
    pub fn id(&self) -> &str {
        match self {
            CategoryGroup::Standalone(_) => STANDALONE_GROUP_ID,
            CategoryGroup::Top(top) => &top.id,
        }
    }

    /// Header title, absent for the standalone group.
    pub fn title(&self) -> Option<&str> {
        match self {
            CategoryGroup::Standalone(_) => None,
            CategoryGroup::Top(top) => Some(&top.name),
        }
    }

    /// Visible items. A selected top category collapses its children: the
    /// detail hides from the projected view, the data stays intact.
    pub fn elements(&self) -> &[CategoryState] {
        match self {
            CategoryGroup::Standalone(categories) => categories,
            CategoryGroup::Top(top) if top.is_selected => &[],
            CategoryGroup::Top(top) => &top.substates,
        }
    }
}

/// Derive the ordered group view from the state. Pure; calling it twice on
/// the same state yields structurally equal output.
pub fn project(state: &UneatenState) -> Vec<CategoryGroup> {
    let standalone: Vec<CategoryState> = state
        .categories
        .iter()
        .filter(|c| !c.is_group())
        .cloned()
        .collect();

    let mut groups = Vec::with_capacity(1 + state.categories.len());
    groups.push(CategoryGroup::Standalone(standalone));
    groups.extend(
        state
            .categories
            .iter()
            .filter(|c| c.is_group())
            .cloned()
            .map(CategoryGroup::Top),
    );
    groups
}

/// Name changes call for a refresh; the selection flag is surfaced through
/// state and deliberately does not count as a content change.
impl Diffable for CategoryState {
    type Id = String;

    fn identity(&self) -> String {
        self.id.clone()
    }

    fn content_equals(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Diffable for CategoryGroup {
    type Id = String;

    fn identity(&self) -> String {
        self.id().to_string()
    }

    fn content_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (CategoryGroup::Standalone(_), CategoryGroup::Standalone(_)) => true,
            (CategoryGroup::Top(a), CategoryGroup::Top(b)) => a.content_equals(b),
            _ => false,
        }
    }
}

impl DiffableSection for CategoryGroup {
    type Item = CategoryState;

    fn items(&self) -> &[CategoryState] {
        self.elements()
    }

    fn with_items(&self, items: Vec<CategoryState>) -> Self {
        match self {
            CategoryGroup::Standalone(_) => CategoryGroup::Standalone(items),
            CategoryGroup::Top(top) => {
                let mut top = top.clone();
                top.substates = items;
                CategoryGroup::Top(top)
            }
        }
    }
}
