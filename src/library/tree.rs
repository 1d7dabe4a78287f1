//! The folder tree and its mutation/query operations.
//!
//! Lookups by id only reach root folders and their direct children. Deeper
//! folders can be seeded but are never matched by upload, delete or resolve.

use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

use super::folder::{FileRecord, FolderNode, IncomingFile};
use crate::{DeskError, Result};

/// Position of a folder reachable by id lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodePath {
    root: usize,
    child: Option<usize>,
}

/// An ordered forest of folders.
///
/// Serializes as a plain array of root folders. Deserializing goes through
/// [`FolderTree::from_roots`], so duplicate ids are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<FolderNode>")]
pub struct FolderTree {
    roots: Vec<FolderNode>,
}

impl TryFrom<Vec<FolderNode>> for FolderTree {
    type Error = DeskError;

    fn try_from(roots: Vec<FolderNode>) -> Result<Self> {
        Self::from_roots(roots)
    }
}

impl Serialize for FolderTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.roots.serialize(serializer)
    }
}

impl FolderTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from root folders, rejecting duplicate ids at any depth.
    pub fn from_roots(roots: impl IntoIterator<Item = FolderNode>) -> Result<Self> {
        let mut tree = Self::new();
        for root in roots {
            tree.insert_root(root)?;
        }
        Ok(tree)
    }

    /// Root folders in display order.
    pub fn roots(&self) -> &[FolderNode] {
        &self.roots
    }

    /// Number of root folders.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Whether `id` is used by any folder, at any depth.
    pub fn contains_id(&self, id: &str) -> bool {
        self.all_ids().contains(id)
    }

    fn all_ids(&self) -> HashSet<&str> {
        let mut ids = Vec::new();
        for root in &self.roots {
            root.collect_ids(&mut ids);
        }
        ids.into_iter().collect()
    }

    /// Append a fully-formed root folder (seed data).
    ///
    /// Fails with [`DeskError::DuplicateId`] if any id in `node`'s subtree is
    /// already in the tree or repeats within the subtree itself.
    pub fn insert_root(&mut self, node: FolderNode) -> Result<()> {
        let mut existing = self.all_ids();
        let mut incoming = Vec::new();
        node.collect_ids(&mut incoming);

        for id in incoming {
            if !existing.insert(id) {
                return Err(DeskError::DuplicateId(id.to_string()));
            }
        }

        self.roots.push(node);
        Ok(())
    }

    /// Create an empty root folder at the end of the root list.
    ///
    /// The id is `root_count + 1`, bumped past any id already taken. The name
    /// is stored trimmed, so " Sales " and "Sales" display the same.
    pub fn create_folder(&mut self, name: &str) -> Result<&FolderNode> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeskError::Validation("folder name is empty".to_string()));
        }

        let taken = self.all_ids();
        let mut next = self.roots.len() + 1;
        while taken.contains(next.to_string().as_str()) {
            next += 1;
        }
        self.roots.push(FolderNode::new(next.to_string(), name));
        let index = self.roots.len() - 1;
        Ok(&self.roots[index])
    }

    fn locate(&self, id: &str) -> Option<NodePath> {
        for (root_index, root) in self.roots.iter().enumerate() {
            if root.id == id {
                return Some(NodePath {
                    root: root_index,
                    child: None,
                });
            }
            if let Some(child_index) = root.children.iter().position(|c| c.id == id) {
                return Some(NodePath {
                    root: root_index,
                    child: Some(child_index),
                });
            }
        }
        None
    }

    fn node_mut(&mut self, path: NodePath) -> &mut FolderNode {
        let root = &mut self.roots[path.root];
        match path.child {
            Some(child) => &mut root.children[child],
            None => root,
        }
    }

    /// Find a root folder or a direct child of one.
    pub fn find(&self, id: &str) -> Option<&FolderNode> {
        self.locate(id).map(|path| {
            let root = &self.roots[path.root];
            match path.child {
                Some(child) => &root.children[child],
                None => root,
            }
        })
    }

    /// Append `incoming` to the folder `target_id`, in order.
    ///
    /// Returns the number of records added.
    pub fn upload_files(
        &mut self,
        target_id: &str,
        incoming: &[IncomingFile],
        upload_date: &str,
    ) -> Result<usize> {
        if incoming.is_empty() {
            return Err(DeskError::Validation("no files to upload".to_string()));
        }

        let path = self
            .locate(target_id)
            .ok_or_else(|| DeskError::NotFound(format!("folder {target_id}")))?;

        let records = incoming
            .iter()
            .map(|file| FileRecord::from_incoming(file, upload_date));
        Ok(self.node_mut(path).append_files(records))
    }

    /// Remove every file named `file_name` from the folder `target_id`.
    ///
    /// Returns the number of records removed, which may be zero.
    pub fn delete_file(&mut self, target_id: &str, file_name: &str) -> Result<usize> {
        let path = self
            .locate(target_id)
            .ok_or_else(|| DeskError::NotFound(format!("folder {target_id}")))?;

        Ok(self.node_mut(path).remove_files_named(file_name))
    }

    /// Files in the folder `node_id`, or an empty slice if it does not resolve.
    pub fn resolve_files(&self, node_id: &str) -> &[FileRecord] {
        self.find(node_id)
            .map(|node| node.files.as_slice())
            .unwrap_or(&[])
    }

    /// Folders in navigation order with their depth (roots, then children).
    pub fn outline(&self) -> Vec<(usize, &FolderNode)> {
        let mut rows = Vec::new();
        for root in &self.roots {
            rows.push((0, root));
            for child in &root.children {
                rows.push((1, child));
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finance_tree() -> FolderTree {
        FolderTree::from_roots([FolderNode::new("1", "Finance")
            .with_child(FolderNode::new("1-1", "Annual Reports"))
            .with_child(
                FolderNode::new("1-2", "Quarterly Reports")
                    .with_child(FolderNode::new("1-2-1", "Archive")),
            )])
        .unwrap()
    }

    fn upload(tree: &mut FolderTree, id: &str, names: &[&str]) -> Result<usize> {
        let files: Vec<IncomingFile> = names
            .iter()
            .map(|name| IncomingFile::new(*name, 1024 * 1024))
            .collect();
        tree.upload_files(id, &files, "2024-04-01")
    }

    #[test]
    fn test_create_folder() {
        let mut tree = finance_tree();

        let folder = tree.create_folder("Marketing").unwrap();
        assert_eq!(folder.id, "2");
        assert_eq!(folder.name, "Marketing");
        assert!(folder.children.is_empty());
        assert!(folder.files.is_empty());

        assert_eq!(tree.root_count(), 2);
        assert_eq!(tree.roots()[1].id, "2");
    }

    #[test]
    fn test_create_folder_trims_name() {
        let mut tree = FolderTree::new();
        let folder = tree.create_folder("  Sales  ").unwrap();
        assert_eq!(folder.name, "Sales");
    }

    #[test]
    fn test_create_folder_blank_name() {
        let mut tree = finance_tree();

        assert!(matches!(
            tree.create_folder(""),
            Err(DeskError::Validation(_))
        ));
        assert!(matches!(
            tree.create_folder("   "),
            Err(DeskError::Validation(_))
        ));
        assert_eq!(tree.root_count(), 1);
    }

    #[test]
    fn test_create_folder_allows_duplicate_names() {
        let mut tree = FolderTree::new();
        tree.create_folder("Reports").unwrap();
        tree.create_folder("Reports").unwrap();

        assert_eq!(tree.root_count(), 2);
        assert_eq!(tree.roots()[0].id, "1");
        assert_eq!(tree.roots()[1].id, "2");
    }

    #[test]
    fn test_create_folder_skips_taken_id() {
        let mut tree = FolderTree::from_roots([FolderNode::new("2", "Taken")]).unwrap();

        let folder = tree.create_folder("New").unwrap();
        assert_eq!(folder.id, "3");
        assert!(!tree.contains_id("1"));
    }

    #[test]
    fn test_insert_root_rejects_duplicate_ids() {
        let mut tree = finance_tree();

        let result = tree.insert_root(FolderNode::new("1", "Finance"));
        assert!(matches!(result, Err(DeskError::DuplicateId(id)) if id == "1"));

        let result =
            tree.insert_root(FolderNode::new("9", "Other").with_child(FolderNode::new("1-2-1", "X")));
        assert!(matches!(result, Err(DeskError::DuplicateId(id)) if id == "1-2-1"));

        let result = tree.insert_root(
            FolderNode::new("8", "Twins")
                .with_child(FolderNode::new("8-1", "A"))
                .with_child(FolderNode::new("8-1", "B")),
        );
        assert!(matches!(result, Err(DeskError::DuplicateId(id)) if id == "8-1"));

        assert_eq!(tree.root_count(), 1);
    }

    #[test]
    fn test_upload_files_appends_in_order() {
        let mut tree = finance_tree();

        assert_eq!(upload(&mut tree, "1-1", &["a.xlsx", "b.xlsx"]).unwrap(), 2);
        assert_eq!(upload(&mut tree, "1-1", &["c.xlsx", "a.xlsx"]).unwrap(), 2);

        let names: Vec<&str> = tree
            .resolve_files("1-1")
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["a.xlsx", "b.xlsx", "c.xlsx", "a.xlsx"]);
    }

    #[test]
    fn test_upload_files_to_root() {
        let mut tree = finance_tree();

        upload(&mut tree, "1", &["summary.pdf"]).unwrap();
        assert_eq!(tree.resolve_files("1").len(), 1);
        assert!(tree.resolve_files("1-1").is_empty());
    }

    #[test]
    fn test_upload_files_record_shape() {
        let mut tree = finance_tree();
        tree.upload_files("1-1", &[IncomingFile::new("Q1.xlsx", 1_258_291)], "2024-04-01")
            .unwrap();

        assert_eq!(
            tree.resolve_files("1-1"),
            &[FileRecord::new("Q1.xlsx", "1.2 MB", "2024-04-01")]
        );
    }

    #[test]
    fn test_upload_files_unknown_target() {
        let mut tree = finance_tree();
        let before = tree.clone();

        let result = upload(&mut tree, "7", &["a.xlsx"]);
        assert!(matches!(result, Err(DeskError::NotFound(_))));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_upload_files_depth_two_is_a_miss() {
        let mut tree = finance_tree();
        let before = tree.clone();

        let result = upload(&mut tree, "1-2-1", &["a.xlsx"]);
        assert!(matches!(result, Err(DeskError::NotFound(_))));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_upload_files_empty_batch() {
        let mut tree = finance_tree();
        let result = tree.upload_files("1-1", &[], "2024-04-01");
        assert!(matches!(result, Err(DeskError::Validation(_))));
    }

    #[test]
    fn test_delete_file_removes_all_matches_in_target_only() {
        let mut tree = finance_tree();
        upload(&mut tree, "1-1", &["a.xlsx", "b.xlsx", "a.xlsx"]).unwrap();
        upload(&mut tree, "1-2", &["a.xlsx"]).unwrap();

        assert_eq!(tree.delete_file("1-1", "a.xlsx").unwrap(), 2);

        assert_eq!(tree.resolve_files("1-1").len(), 1);
        assert_eq!(tree.resolve_files("1-1")[0].name, "b.xlsx");
        assert_eq!(tree.resolve_files("1-2").len(), 1);
    }

    #[test]
    fn test_delete_file_is_case_sensitive() {
        let mut tree = finance_tree();
        upload(&mut tree, "1-1", &["Q1.xlsx"]).unwrap();

        assert_eq!(tree.delete_file("1-1", "q1.xlsx").unwrap(), 0);
        assert_eq!(tree.resolve_files("1-1").len(), 1);
    }

    #[test]
    fn test_delete_file_misses() {
        let mut tree = finance_tree();
        upload(&mut tree, "1-1", &["a.xlsx"]).unwrap();
        let before = tree.clone();

        assert!(matches!(
            tree.delete_file("missing", "a.xlsx"),
            Err(DeskError::NotFound(_))
        ));
        assert!(matches!(
            tree.delete_file("1-2-1", "a.xlsx"),
            Err(DeskError::NotFound(_))
        ));
        assert_eq!(tree.delete_file("1-1", "other.xlsx").unwrap(), 0);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_resolve_files_parent_is_not_child() {
        let mut tree = finance_tree();
        upload(&mut tree, "1-1", &["a.xlsx"]).unwrap();

        assert!(tree.resolve_files("1").is_empty());
        assert!(tree.resolve_files("1-2-1").is_empty());
        assert!(tree.resolve_files("").is_empty());
    }

    #[test]
    fn test_find_is_depth_limited() {
        let tree = finance_tree();

        assert_eq!(tree.find("1").unwrap().name, "Finance");
        assert_eq!(tree.find("1-2").unwrap().name, "Quarterly Reports");
        assert!(tree.find("1-2-1").is_none());
        assert!(tree.contains_id("1-2-1"));
    }

    #[test]
    fn test_outline() {
        let tree = finance_tree();
        let rows: Vec<(usize, &str)> = tree
            .outline()
            .into_iter()
            .map(|(depth, node)| (depth, node.id.as_str()))
            .collect();

        assert_eq!(rows, vec![(0, "1"), (1, "1-1"), (1, "1-2")]);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "1", "name": "Finance", "children": [{"id": "1-1", "name": "Annual"}]},
            {"id": "1", "name": "Finance", "children": [{"id": "1-1", "name": "Annual"}]}
        ]"#;

        let err = serde_json::from_str::<FolderTree>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate folder id: 1"));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let tree = finance_tree();
        let json = serde_json::to_string(&tree).unwrap();

        let parsed: FolderTree = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_create_folder_bumps_past_several_taken_ids() {
        let mut tree = FolderTree::from_roots([
            FolderNode::new("2", "Two"),
            FolderNode::new("3", "Three").with_child(FolderNode::new("4", "Nested")),
        ])
        .unwrap();

        assert_eq!(tree.create_folder("Next").unwrap().id, "5");
    }

    #[test]
    fn test_serializes_as_plain_forest() {
        let tree = finance_tree();
        let json = serde_json::to_value(&tree).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "1");
    }
}
