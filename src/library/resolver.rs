//! Folder content resolution shared by the management and explorer views.

use super::folder::FileRecord;
use super::tree::FolderTree;

/// Maps a folder id to the files a view should display.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentResolver;

impl ContentResolver {
    /// Files for `node_id`; empty when unset or unresolved.
    pub fn resolve<'t>(&self, tree: &'t FolderTree, node_id: Option<&str>) -> &'t [FileRecord] {
        match node_id {
            Some(id) => tree.resolve_files(id),
            None => &[],
        }
    }
}
