//! Tree construction from the flat file list

use std::collections::HashSet;

use crate::model::FileInfo;

/// A file or directory with its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub info: FileInfo,
    pub children: Vec<TreeNode>,
}

/// A visible row of the flattened tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: String,
    pub name: String,
    pub depth: usize,
    pub is_directory: bool,
    pub expanded: bool,
}

/// Build a tree from `/`-separated relative paths
///
/// Missing parent directories are synthesized. Siblings are ordered
/// directories first, then by name.
pub fn build_tree(files: &[FileInfo]) -> Vec<TreeNode> {
    let mut roots = Vec::new();
    for file in files {
        insert(&mut roots, file);
    }
    sort_nodes(&mut roots);
    roots
}

fn insert(roots: &mut Vec<TreeNode>, file: &FileInfo) {
    let parts: Vec<&str> = file.path.split('/').filter(|p| !p.is_empty()).collect();
    let mut level = roots;

    for depth in 0..parts.len() {
        let path = parts[..=depth].join("/");
        let is_last = depth + 1 == parts.len();

        let idx = match level.iter().position(|n| n.info.path == path) {
            Some(i) => {
                if is_last {
                    level[i].info = file.clone();
                }
                i
            }
            None => {
                let info = if is_last {
                    file.clone()
                } else {
                    FileInfo::new(path, true)
                };
                level.push(TreeNode {
                    info,
                    children: Vec::new(),
                });
                level.len() - 1
            }
        };
        level = &mut level[idx].children;
    }
}

fn sort_nodes(nodes: &mut [TreeNode]) {
    nodes.sort_by(|a, b| {
        b.info
            .is_directory
            .cmp(&a.info.is_directory)
            .then_with(|| a.info.name.cmp(&b.info.name))
    });
    for node in nodes {
        sort_nodes(&mut node.children);
    }
}

/// Flatten the tree, descending only into expanded directories
pub fn flatten(nodes: &[TreeNode], expanded: &HashSet<String>) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    flatten_into(nodes, expanded, 0, &mut rows);
    rows
}

fn flatten_into(
    nodes: &[TreeNode],
    expanded: &HashSet<String>,
    depth: usize,
    rows: &mut Vec<TreeRow>,
) {
    for node in nodes {
        let is_expanded = node.info.is_directory && expanded.contains(&node.info.path);
        rows.push(TreeRow {
            path: node.info.path.clone(),
            name: node.info.name.clone(),
            depth,
            is_directory: node.info.is_directory,
            expanded: is_expanded,
        });
        if is_expanded {
            flatten_into(&node.children, expanded, depth + 1, rows);
        }
    }
}
