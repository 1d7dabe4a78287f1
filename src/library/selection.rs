//! Current-folder selection and the views it feeds.

use super::folder::FileRecord;
use super::resolver::ContentResolver;
use super::tree::FolderTree;

/// Receives the resolved file list whenever the selection is re-resolved.
pub trait ContentView {
    /// Show `files` for the folder `node_id`.
    fn show_files(&mut self, node_id: Option<&str>, files: &[FileRecord]);
}

/// A view that keeps the last published file list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListView {
    node_id: Option<String>,
    files: Vec<FileRecord>,
}

impl FileListView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folder the listing belongs to.
    pub fn node_id(&self) -> Option<&str> {
        self.node_id.as_deref()
    }

    /// Last published files.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }
}

impl ContentView for FileListView {
    fn show_files(&mut self, node_id: Option<&str>, files: &[FileRecord]) {
        self.node_id = node_id.map(str::to_string);
        self.files = files.to_vec();
    }
}

/// Tracks the selected folder and republishes its files on change.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<String>,
    resolver: ContentResolver,
}

impl SelectionController {
    /// Create a controller with an optional initial selection.
    pub fn new(default_id: Option<String>) -> Self {
        Self {
            selected: default_id,
            resolver: ContentResolver,
        }
    }

    /// Currently selected folder id.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select `node_id` and publish its files to `view`.
    ///
    /// Returns true if the selection changed.
    pub fn select(&mut self, node_id: &str, tree: &FolderTree, view: &mut dyn ContentView) -> bool {
        let changed = self.selected.as_deref() != Some(node_id);
        self.selected = Some(node_id.to_string());
        self.refresh(tree, view);
        changed
    }

    /// Re-resolve the current selection and publish it to `view`.
    pub fn refresh(&self, tree: &FolderTree, view: &mut dyn ContentView) {
        let node_id = self.selected();
        view.show_files(node_id, self.resolver.resolve(tree, node_id));
    }
}
