//! Files chosen for upload but not yet committed.

use tracing::debug;

use super::folder::IncomingFile;
use super::tree::FolderTree;
use crate::{DeskError, Result};

/// Pending upload set for the selected folder.
#[derive(Debug, Clone, Default)]
pub struct UploadStaging {
    pending: Vec<IncomingFile>,
    allowed_extensions: Vec<String>,
}

impl UploadStaging {
    /// Create a staging area accepting every file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict staged files to the given extensions (e.g., ".xlsx").
    pub fn with_allowed_extensions(mut self, extensions: Vec<String>) -> Self {
        self.allowed_extensions = extensions;
        self
    }

    /// Staged files, in pick order.
    pub fn pending(&self) -> &[IncomingFile] {
        &self.pending
    }

    /// Replace the staged set with `files`. Returns the number accepted.
    pub fn stage(&mut self, files: Vec<IncomingFile>) -> usize {
        self.pending = files
            .into_iter()
            .filter(|file| {
                let accepted = file.has_extension_in(&self.allowed_extensions);
                if !accepted {
                    debug!("Skipping {}: extension not accepted", file.name);
                }
                accepted
            })
            .collect();
        self.pending.len()
    }

    /// Remove the staged file at `index`.
    pub fn unstage(&mut self, index: usize) -> Option<IncomingFile> {
        (index < self.pending.len()).then(|| self.pending.remove(index))
    }

    /// Drop every staged file.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Whether a commit to `selected` would be attempted.
    pub fn can_commit(&self, selected: Option<&str>) -> bool {
        selected.is_some() && !self.pending.is_empty()
    }

    /// Upload the staged files into `selected` and clear the staged set.
    ///
    /// Returns the number of records added. The staged set is cleared even
    /// when the selected id does not resolve to a folder.
    pub fn commit(
        &mut self,
        selected: Option<&str>,
        tree: &mut FolderTree,
        upload_date: &str,
    ) -> Result<usize> {
        let target = match selected {
            Some(id) if !self.pending.is_empty() => id,
            Some(_) => return Err(DeskError::Validation("no files staged".to_string())),
            None => return Err(DeskError::Validation("no folder selected".to_string())),
        };

        let files = std::mem::take(&mut self.pending);
        tree.upload_files(target, &files, upload_date)
    }
}
