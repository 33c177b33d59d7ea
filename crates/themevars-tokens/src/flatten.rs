//! Recursive flattening of token trees into dash-joined paths.
//!
//! Every leaf lands at the path of its ancestors joined by `-`. A nested
//! node's `DEFAULT` entry lands at the node's own path, so a node can emit
//! both `primary` and `primary-light`. Two entries resolving to the same
//! path are rejected rather than silently overwritten.

use crate::tree::{FlatConfig, TokenTree, TokenValue, DEFAULT_KEY};
use indexmap::map::Entry;
use themevars_common::TokenError;

/// Flatten a tree with no path prefix.
pub fn flatten(tree: &TokenTree) -> Result<FlatConfig, TokenError> {
    flatten_with_prefix(tree, "")
}

/// Flatten a tree, joining every path onto `prefix`.
pub fn flatten_with_prefix(tree: &TokenTree, prefix: &str) -> Result<FlatConfig, TokenError> {
    let mut out = FlatConfig::with_capacity(tree.len());
    flatten_into(tree, prefix, false, &mut out)?;
    Ok(out)
}

/// Join two path segments with `-`, skipping empty ones.
pub fn join_path(prefix: &str, key: &str) -> String {
    match (prefix.is_empty(), key.is_empty()) {
        (true, _) => key.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}-{key}"),
    }
}

fn flatten_into(
    tree: &TokenTree,
    prefix: &str,
    nested: bool,
    out: &mut FlatConfig,
) -> Result<(), TokenError> {
    for (key, value) in tree {
        // `DEFAULT` belongs to the enclosing node, which already recorded it
        if nested && key == DEFAULT_KEY {
            continue;
        }

        let path = join_path(prefix, key);
        match value {
            TokenValue::Empty => {}
            TokenValue::Leaf(leaf) if leaf.is_empty() => {}
            TokenValue::Leaf(leaf) => insert_unique(out, path, leaf)?,
            TokenValue::Group(group) => {
                match group.get(DEFAULT_KEY) {
                    Some(TokenValue::Leaf(default)) if !default.is_empty() => {
                        insert_unique(out, path.clone(), default)?;
                    }
                    Some(TokenValue::Group(default)) => {
                        flatten_into(default, &path, true, out)?;
                    }
                    _ => {}
                }
                flatten_into(group, &path, true, out)?;
            }
        }
    }
    Ok(())
}

fn insert_unique(out: &mut FlatConfig, path: String, value: &str) -> Result<(), TokenError> {
    match out.entry(path) {
        Entry::Occupied(entry) => Err(TokenError::DuplicatePath(entry.key().clone())),
        Entry::Vacant(entry) => {
            entry.insert(value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(json: &str) -> TokenTree {
        serde_json::from_str(json).unwrap()
    }

    fn flat(pairs: &[(&str, &str)]) -> FlatConfig {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn default_maps_to_node_path() {
        let out = flatten(&tree(r#"{"a": {"DEFAULT": "x", "b": "y"}}"#)).unwrap();
        assert_eq!(out, flat(&[("a", "x"), ("a-b", "y")]));
    }

    #[test]
    fn deep_nesting_joins_with_dashes() {
        let out = flatten(&tree(r#"{"a": {"b": {"c": "z"}}}"#)).unwrap();
        assert_eq!(out, flat(&[("a-b-c", "z")]));
    }

    #[test]
    fn falsy_leaves_are_dropped() {
        assert!(flatten(&tree(r#"{"a": ""}"#)).unwrap().is_empty());
        assert!(flatten(&tree(r#"{"a": null, "b": false}"#)).unwrap().is_empty());
    }

    #[test]
    fn empty_group_contributes_nothing() {
        assert!(flatten(&tree(r#"{"a": {}}"#)).unwrap().is_empty());
    }

    #[test]
    fn falsy_default_is_absent() {
        let out = flatten(&tree(r#"{"a": {"DEFAULT": "", "b": "y"}}"#)).unwrap();
        assert_eq!(out, flat(&[("a-b", "y")]));
    }

    #[test]
    fn prefix_is_joined_onto_every_path() {
        let out = flatten_with_prefix(&tree(r#"{"primary": {"DEFAULT": "x", "light": "y"}}"#), "bg")
            .unwrap();
        assert_eq!(out, flat(&[("bg-primary", "x"), ("bg-primary-light", "y")]));
    }

    #[test]
    fn top_level_default_is_a_plain_key() {
        let out = flatten(&tree(r#"{"DEFAULT": "x", "b": "y"}"#)).unwrap();
        assert_eq!(out, flat(&[("DEFAULT", "x"), ("b", "y")]));
    }

    #[test]
    fn group_default_flattens_at_node_path() {
        let out = flatten(&tree(r#"{"a": {"DEFAULT": {"b": "x"}, "c": "y"}}"#)).unwrap();
        assert_eq!(out, flat(&[("a-b", "x"), ("a-c", "y")]));
    }

    #[test]
    fn traversal_follows_insertion_order() {
        let out = flatten(&tree(r#"{"z": "1", "a": {"y": "2", "b": "3"}, "m": "4"}"#)).unwrap();
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a-y", "a-b", "m"]);
    }

    #[test]
    fn colliding_paths_are_rejected() {
        let err = flatten(&tree(r#"{"a-b": "x", "a": {"b": "y"}}"#)).unwrap_err();
        assert!(matches!(err, TokenError::DuplicatePath(ref p) if p == "a-b"));
    }

    #[test]
    fn reflattening_flat_output_is_identity() {
        let out = flatten(&tree(
            r#"{"a": {"DEFAULT": "x", "b": {"c": "y"}}, "d": "z"}"#,
        ))
        .unwrap();
        let as_tree: TokenTree = out
            .iter()
            .map(|(k, v)| (k.clone(), TokenValue::Leaf(v.clone())))
            .collect();
        assert_eq!(flatten(&as_tree).unwrap(), out);
    }

    #[test]
    fn join_path_skips_empty_segments() {
        assert_eq!(join_path("", "primary"), "primary");
        assert_eq!(join_path("bg", ""), "bg");
        assert_eq!(join_path("tw-bg", "primary"), "tw-bg-primary");
    }
}
