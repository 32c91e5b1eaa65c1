//! Column selection and header resolution.

use std::collections::{BTreeSet, HashMap};

/// A configured column paired with its position in the file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub name: String,
    /// `None` when the header has no column with this name.
    pub index: Option<usize>,
}

impl ResolvedColumn {
    pub fn is_resolved(&self) -> bool {
        self.index.is_some()
    }
}

/// Drops every column whose name contains a non-empty exclusion term.
///
/// Matching is a case-sensitive substring test. Order and duplicates of the
/// surviving names are preserved.
pub fn filter_columns(columns: &[String], exclude_terms: &BTreeSet<String>) -> Vec<String> {
    columns
        .iter()
        .filter(|name| {
            !exclude_terms
                .iter()
                .any(|term| !term.is_empty() && name.contains(term.as_str()))
        })
        .cloned()
        .collect()
}

/// Maps header names to positions. The first occurrence of a repeated name wins.
pub fn header_index(header: &[String]) -> HashMap<&str, usize> {
    let mut index = HashMap::with_capacity(header.len());
    for (position, name) in header.iter().enumerate() {
        index.entry(name.as_str()).or_insert(position);
    }
    index
}

/// Resolves each column name against the header once.
pub fn resolve_columns(columns: &[String], header: &[String]) -> Vec<ResolvedColumn> {
    let index = header_index(header);
    columns
        .iter()
        .map(|name| ResolvedColumn {
            name: name.clone(),
            index: index.get(name.as_str()).copied(),
        })
        .collect()
}
