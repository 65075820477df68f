//! Category tree data model

use crate::error::StateError;
use serde::{Deserialize, Serialize};

/// An ingredient category as delivered by the categories service.
///
/// A category with non-empty `subcategories` is a grouped category; one
/// with an empty list is standalone. Only one level of nesting is
/// exercised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable key, unique within its tree level.
    pub key: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

impl Category {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            subcategories: Vec::new(),
        }
    }

    pub fn with_subcategories(
        key: impl Into<String>,
        name: impl Into<String>,
        subcategories: Vec<Category>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            subcategories,
        }
    }
}

/// Selection state of one category node.
///
/// `id` is the sole identity key: never reused across distinct logical
/// entities, never changed after creation. `name` and `is_selected` are
/// the mutable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryState {
    pub id: String,
    pub name: String,
    pub is_selected: bool,
    /// Mirrors the category's subcategories, in order.
    pub substates: Vec<CategoryState>,
}

impl CategoryState {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_selected: false,
            substates: Vec::new(),
        }
    }

    pub fn with_substates(
        id: impl Into<String>,
        name: impl Into<String>,
        substates: Vec<CategoryState>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_selected: false,
            substates,
        }
    }

    /// Build from a service category, selecting the keys in `selected`.
    pub fn from_category(category: &Category, selected: &[String]) -> Self {
        Self {
            id: category.key.clone(),
            name: category.name.clone(),
            is_selected: selected.contains(&category.key),
            substates: category
                .subcategories
                .iter()
                .map(|sub| Self::from_category(sub, selected))
                .collect(),
        }
    }

    /// Whether this node carries subcategories.
    pub fn is_group(&self) -> bool {
        !self.substates.is_empty()
    }
}

/// Root state of the feature.
///
/// Every transition produces a brand-new value; no consumer ever observes
/// in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UneatenState {
    /// Top-level category states, in display order.
    pub categories: Vec<CategoryState>,
    /// Whether the last edit has been persisted.
    pub saved: bool,
    /// A save is in flight.
    pub pending_validation: bool,
}

impl UneatenState {
    /// Fresh state over the given nodes, considered saved.
    pub fn new(categories: Vec<CategoryState>) -> Self {
        Self {
            categories,
            saved: true,
            pending_validation: false,
        }
    }

    /// Build from service categories plus the previously selected keys.
    pub fn from_categories(categories: &[Category], selected: &[String]) -> Self {
        Self::new(
            categories
                .iter()
                .map(|c| CategoryState::from_category(c, selected))
                .collect(),
        )
    }

    /// Ids of all selected nodes, flattened across levels: each top-level
    /// node before its children, in display order.
    pub fn selected_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_selected(&self.categories, &mut keys);
        keys
    }

    pub(crate) fn toggle_at(&mut self, index: usize) -> Result<(), StateError> {
        let node = self
            .categories
            .get_mut(index)
            .ok_or(StateError::IndexOutOfBounds { index })?;
        node.is_selected = !node.is_selected;
        Ok(())
    }

    pub(crate) fn toggle_top(&mut self, id: &str) -> Result<(), StateError> {
        let node = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StateError::NodeNotFound {
                id: id.to_string(),
                parent_id: None,
            })?;
        node.is_selected = !node.is_selected;
        Ok(())
    }

    /// Toggle a node by id: top-level when `parent_id` is `None`, otherwise
    /// within the named parent's substates.
    pub(crate) fn toggle_sub(&mut self, id: &str, parent_id: Option<&str>) -> Result<(), StateError> {
        let not_found = || StateError::NodeNotFound {
            id: id.to_string(),
            parent_id: parent_id.map(str::to_string),
        };
        let node = match parent_id {
            None => self.categories.iter_mut().find(|c| c.id == id),
            Some(parent) => self
                .categories
                .iter_mut()
                .find(|c| c.id == parent)
                .and_then(|p| p.substates.iter_mut().find(|c| c.id == id)),
        };
        let node = node.ok_or_else(not_found)?;
        node.is_selected = !node.is_selected;
        Ok(())
    }

    /// Append `text` to the name of every node whose id is in `ids`,
    /// top-level nodes before their children. Returns the match count.
    pub(crate) fn append_to_names(&mut self, text: &str, ids: &[String]) -> usize {
        append_in(&mut self.categories, text, ids)
    }
}

fn collect_selected(nodes: &[CategoryState], keys: &mut Vec<String>) {
    for node in nodes {
        if node.is_selected {
            keys.push(node.id.clone());
        }
        collect_selected(&node.substates, keys);
    }
}

fn append_in(nodes: &mut [CategoryState], text: &str, ids: &[String]) -> usize {
    let mut matched = 0;
    for node in nodes {
        if ids.contains(&node.id) {
            node.name.push_str(text);
            matched += 1;
        }
        matched += append_in(&mut node.substates, text, ids);
    }
    matched
}
