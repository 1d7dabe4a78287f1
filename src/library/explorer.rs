//! Read-only report explorer.

use super::folder::{FileRecord, FolderNode};
use super::selection::{FileListView, SelectionController};
use super::tree::FolderTree;

/// Navigation over a borrowed tree. Selecting a folder shows its files;
/// nothing here can change the tree.
pub struct Explorer<'t> {
    tree: &'t FolderTree,
    selection: SelectionController,
    view: FileListView,
    on_select: Option<Box<dyn FnMut(&str) + 't>>,
}

impl<'t> Explorer<'t> {
    /// Open the explorer on `default_folder`.
    pub fn new(tree: &'t FolderTree, default_folder: Option<&str>) -> Self {
        let selection = SelectionController::new(default_folder.map(str::to_string));
        let mut view = FileListView::new();
        selection.refresh(tree, &mut view);
        Self {
            tree,
            selection,
            view,
            on_select: None,
        }
    }

    /// Call `callback` with the folder id after every selection.
    pub fn on_select(mut self, callback: impl FnMut(&str) + 't) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Select a folder and show its files.
    pub fn select(&mut self, node_id: &str) {
        self.selection.select(node_id, self.tree, &mut self.view);
        if let Some(callback) = self.on_select.as_mut() {
            callback(node_id);
        }
    }

    /// Selected folder id.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// Files shown for the selected folder.
    pub fn files(&self) -> &[FileRecord] {
        self.view.files()
    }

    /// Navigation rows (depth, folder).
    pub fn outline(&self) -> Vec<(usize, &'t FolderNode)> {
        self.tree.outline()
    }
}

impl std::fmt::Debug for Explorer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Explorer")
            .field("selected", &self.selection.selected())
            .field("files", &self.view.files().len())
            .finish()
    }
}
