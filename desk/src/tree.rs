//! Category arena and derived display structures.
//!
//! DESIGN
//! ======
//! Categories arrive either flat (`parent_id` references) or pre-nested from
//! the tree endpoint. Both shapes are normalized into one arena indexed by id;
//! the display tree, the parent picker, and subtree name sets are all pure
//! traversals over that arena. Nothing mutates a cached tree in place.
//!
//! Traversals carry a visited set, so a malformed response containing a
//! parent cycle terminates. Cycle members unreachable from a root are simply
//! not shown.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::collections::{HashMap, HashSet};

use schema::{Category, Id};

/// Flattened category records with parent/child indexes.
#[derive(Clone, Debug, Default)]
pub struct CategoryArena {
    records: Vec<Category>,
    index: HashMap<Id, usize>,
    children: HashMap<Id, Vec<usize>>,
    roots: Vec<usize>,
}

/// One node of the display tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryNode {
    /// The record itself, with `children` cleared.
    pub category: Category,
    pub children: Vec<CategoryNode>,
}

/// A selectable entry in a parent/category picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentOption {
    pub id: Id,
    pub name: String,
    /// Nesting depth; roots are `0`.
    pub depth: usize,
    /// Ancestor path joined with `" > "`, ending in `name`.
    pub path: String,
}

impl ParentOption {
    /// Name indented by two spaces per level.
    #[must_use]
    pub fn indented_label(&self) -> String {
        format!("{}{}", "  ".repeat(self.depth), self.name)
    }
}

impl CategoryArena {
    /// Build from the flat list endpoint. Later duplicates of an id are ignored.
    #[must_use]
    pub fn from_flat(categories: Vec<Category>) -> Self {
        let mut records = Vec::with_capacity(categories.len());
        let mut index = HashMap::with_capacity(categories.len());
        for mut category in categories {
            if index.contains_key(&category.id) {
                continue;
            }
            category.children.clear();
            index.insert(category.id, records.len());
            records.push(category);
        }

        let mut children: HashMap<Id, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();
        for (slot, category) in records.iter().enumerate() {
            match category.parent_id {
                Some(parent) if parent != category.id && index.contains_key(&parent) => {
                    children.entry(parent).or_default().push(slot);
                }
                _ => roots.push(slot),
            }
        }

        Self { records, index, children, roots }
    }

    /// Build from the tree endpoint. Nesting determines `parent_id`.
    #[must_use]
    pub fn from_nested(categories: Vec<Category>) -> Self {
        let mut flat = Vec::new();
        flatten_into(categories, None, &mut flat);
        Self::from_flat(flat)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: Id) -> Option<&Category> {
        self.index.get(&id).map(|&slot| &self.records[slot])
    }

    /// All records in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.records.iter()
    }

    /// Top-level categories in input order.
    ///
    /// A category whose parent is absent from the arena (or is itself) is
    /// promoted to a root so it stays visible and selectable.
    #[must_use]
    pub fn roots(&self) -> Vec<&Category> {
        self.roots.iter().map(|&slot| &self.records[slot]).collect()
    }

    /// Recursive display tree rooted at every top-level category.
    #[must_use]
    pub fn display_tree(&self) -> Vec<CategoryNode> {
        let mut visited = HashSet::new();
        self.roots
            .iter()
            .filter_map(|&slot| self.build_node(slot, &mut visited))
            .collect()
    }

    fn build_node(&self, slot: usize, visited: &mut HashSet<Id>) -> Option<CategoryNode> {
        let category = &self.records[slot];
        if !visited.insert(category.id) {
            return None;
        }
        let children = self
            .children
            .get(&category.id)
            .map(|slots| {
                slots
                    .iter()
                    .filter_map(|&child| self.build_node(child, visited))
                    .collect()
            })
            .unwrap_or_default();
        Some(CategoryNode { category: category.clone(), children })
    }

    /// Preorder picker entries, excluding `editing` and everything beneath it.
    ///
    /// Passing `None` lists every reachable category, which is what the topic
    /// editor's category picker uses.
    #[must_use]
    pub fn parent_options(&self, editing: Option<Id>) -> Vec<ParentOption> {
        let mut out = Vec::with_capacity(self.records.len());
        let mut visited = HashSet::new();
        for &slot in &self.roots {
            self.collect_options(slot, 0, "", editing, &mut visited, &mut out);
        }
        out
    }

    fn collect_options(
        &self,
        slot: usize,
        depth: usize,
        prefix: &str,
        editing: Option<Id>,
        visited: &mut HashSet<Id>,
        out: &mut Vec<ParentOption>,
    ) {
        let category = &self.records[slot];
        if editing == Some(category.id) || !visited.insert(category.id) {
            return;
        }
        let path = if prefix.is_empty() {
            category.name.clone()
        } else {
            format!("{prefix} > {}", category.name)
        };
        out.push(ParentOption {
            id: category.id,
            name: category.name.clone(),
            depth,
            path: path.clone(),
        });
        if let Some(children) = self.children.get(&category.id) {
            for &child in children {
                self.collect_options(child, depth + 1, &path, editing, visited, out);
            }
        }
    }

    /// Names of `root` and every descendant, root first, preorder.
    #[must_use]
    pub fn subtree_names(&self, root: Id) -> Vec<&str> {
        let mut names = Vec::new();
        let mut visited = HashSet::new();
        if let Some(&slot) = self.index.get(&root) {
            self.collect_names(slot, &mut visited, &mut names);
        }
        names
    }

    fn collect_names<'a>(&'a self, slot: usize, visited: &mut HashSet<Id>, names: &mut Vec<&'a str>) {
        let category = &self.records[slot];
        if !visited.insert(category.id) {
            return;
        }
        names.push(category.name.as_str());
        if let Some(children) = self.children.get(&category.id) {
            for &child in children {
                self.collect_names(child, visited, names);
            }
        }
    }
}

fn flatten_into(categories: Vec<Category>, parent: Option<Id>, out: &mut Vec<Category>) {
    for mut category in categories {
        let nested = std::mem::take(&mut category.children);
        if parent.is_some() {
            category.parent_id = parent;
        }
        let id = category.id;
        out.push(category);
        flatten_into(nested, Some(id), out);
    }
}
