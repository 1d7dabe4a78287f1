//! Folder management workspace.
//!
//! The workspace is the single entry point UI collaborators use. Every
//! operation is best-effort: misses and invalid input are logged and ignored.

use tracing::{debug, info, warn};

use super::explorer::Explorer;
use super::folder::{FileRecord, IncomingFile};
use super::resolver::ContentResolver;
use super::seed::seed_from_config;
use super::selection::{FileListView, SelectionController};
use super::staging::UploadStaging;
use super::tree::FolderTree;
use crate::config::LibraryConfig;
use crate::datetime::{today, Clock, SystemClock};
use crate::{DeskError, Result};

/// Management view state: the tree, the selection, and staged uploads.
#[derive(Debug)]
pub struct Workspace {
    tree: FolderTree,
    selection: SelectionController,
    staging: UploadStaging,
    view: FileListView,
    resolver: ContentResolver,
    clock: Box<dyn Clock>,
    timezone: String,
}

impl Workspace {
    /// Create a workspace over `tree` with nothing selected.
    pub fn new(tree: FolderTree) -> Self {
        Self {
            tree,
            selection: SelectionController::new(None),
            staging: UploadStaging::new(),
            view: FileListView::new(),
            resolver: ContentResolver,
            clock: Box::new(SystemClock),
            timezone: "UTC".to_string(),
        }
    }

    /// Create a workspace seeded and configured from `config`.
    pub fn from_config(config: &LibraryConfig) -> Result<Self> {
        let tree = seed_from_config(config)?;
        Ok(Self::new(tree)
            .with_timezone(&config.timezone)
            .with_allowed_extensions(config.allowed_extensions.clone()))
    }

    /// Use `clock` for upload dates.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Stamp upload dates in `timezone`.
    pub fn with_timezone(mut self, timezone: &str) -> Self {
        self.timezone = timezone.to_string();
        self
    }

    /// Restrict staged files to the given extensions.
    pub fn with_allowed_extensions(mut self, extensions: Vec<String>) -> Self {
        self.staging = self.staging.with_allowed_extensions(extensions);
        self
    }

    /// The folder tree.
    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// Selected folder id.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// Files currently shown for the selected folder.
    pub fn current_files(&self) -> &[FileRecord] {
        self.view.files()
    }

    /// Files staged for upload.
    pub fn pending(&self) -> &[IncomingFile] {
        self.staging.pending()
    }

    /// Whether the upload action is enabled.
    pub fn can_commit(&self) -> bool {
        self.staging.can_commit(self.selection.selected())
    }

    /// Create a root folder named `name`. Blank names are ignored.
    pub fn create_folder(&mut self, name: &str) {
        match self.tree.create_folder(name) {
            Ok(folder) => info!("Created folder {} ({})", folder.name, folder.id),
            Err(e) => Self::ignore("create folder", e),
        }
    }

    /// Replace the staged upload set.
    pub fn stage_files(&mut self, files: Vec<IncomingFile>) {
        let offered = files.len();
        let accepted = self.staging.stage(files);
        debug!("Staged {accepted} of {offered} files");
    }

    /// Remove one staged file by position.
    pub fn unstage_file(&mut self, index: usize) {
        if self.staging.unstage(index).is_none() {
            debug!("No staged file at index {index}");
        }
    }

    /// Upload the staged files into the selected folder.
    pub fn commit_upload(&mut self) {
        let date = today(&*self.clock, &self.timezone);
        let selected = self.selection.selected();
        match self.staging.commit(selected, &mut self.tree, &date) {
            Ok(count) => info!("Uploaded {count} files to {}", selected.unwrap_or_default()),
            Err(e) => Self::ignore("upload", e),
        }
        self.selection.refresh(&self.tree, &mut self.view);
    }

    /// Delete every file named `file_name` from the folder `node_id`.
    pub fn delete_file(&mut self, node_id: &str, file_name: &str) {
        match self.tree.delete_file(node_id, file_name) {
            Ok(0) => debug!("No file named {file_name} in {node_id}"),
            Ok(count) => info!("Deleted {count} files named {file_name} from {node_id}"),
            Err(e) => Self::ignore("delete file", e),
        }
        self.selection.refresh(&self.tree, &mut self.view);
    }

    /// Select `node_id` and show its files. Changing folders drops staged files.
    pub fn select_node(&mut self, node_id: &str) {
        if self.selection.select(node_id, &self.tree, &mut self.view) {
            self.staging.clear();
        }
    }

    /// Files in `node_id`, resolved the same way for every view.
    pub fn get_files_for_node(&self, node_id: &str) -> Vec<FileRecord> {
        self.resolver.resolve(&self.tree, Some(node_id)).to_vec()
    }

    /// A read-only explorer over the current tree.
    pub fn explorer(&self, default_folder: Option<&str>) -> Explorer<'_> {
        Explorer::new(&self.tree, default_folder)
    }

    fn ignore(action: &str, error: DeskError) {
        if error.is_silent() {
            debug!("Ignored {action}: {error}");
        } else {
            warn!("Failed to {action}: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::FixedClock;
    use crate::library::seed::sample_tree;
    use chrono::{DateTime, TimeZone, Utc};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Clock whose instant the test can move after handing it over.
    #[derive(Debug, Clone)]
    struct SharedClock(Rc<Cell<DateTime<Utc>>>);

    impl Clock for SharedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.get()
        }
    }

    fn workspace() -> Workspace {
        Workspace::new(sample_tree().unwrap())
            .with_clock(FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()))
    }

    #[test]
    fn test_create_folder() {
        let mut ws = workspace();

        ws.create_folder("Operations");
        ws.create_folder("   ");

        assert_eq!(ws.tree().root_count(), 4);
        assert_eq!(ws.tree().roots()[3].id, "4");
        assert_eq!(ws.tree().roots()[3].name, "Operations");
    }

    #[test]
    fn test_upload_flow() {
        let mut ws = workspace();

        ws.select_node("1-2");
        ws.stage_files(vec![
            IncomingFile::new("Q2_2024.xlsx", 1_258_291),
            IncomingFile::new("Q3_2024.xlsx", 2_411_724),
        ]);
        assert!(ws.can_commit());

        ws.commit_upload();

        assert!(ws.pending().is_empty());
        assert!(!ws.can_commit());
        let files = ws.current_files();
        assert_eq!(files.len(), 3);
        assert_eq!(files[1], FileRecord::new("Q2_2024.xlsx", "1.2 MB", "2024-06-01"));
        assert_eq!(files[2].size, "2.3 MB");
        assert_eq!(ws.get_files_for_node("1-2"), files.to_vec());
    }

    #[test]
    fn test_commit_without_selection_keeps_staging() {
        let mut ws = workspace();
        let before = ws.tree().clone();

        ws.stage_files(vec![IncomingFile::new("a.xlsx", 10)]);
        assert!(!ws.can_commit());
        ws.commit_upload();

        assert_eq!(ws.pending().len(), 1);
        assert_eq!(ws.tree(), &before);
    }

    #[test]
    fn test_selection_change_clears_staging() {
        let mut ws = workspace();

        ws.select_node("1-1");
        ws.stage_files(vec![IncomingFile::new("a.xlsx", 10)]);
        ws.select_node("1-1");
        assert_eq!(ws.pending().len(), 1);

        ws.select_node("2-1");
        assert!(ws.pending().is_empty());
        assert_eq!(ws.current_files()[0].name, "social_campaign_2024.xlsx");
    }

    #[test]
    fn test_delete_file_refreshes_view() {
        let mut ws = workspace();

        ws.select_node("1-1");
        ws.delete_file("1-1", "2023_annual.xlsx");

        assert_eq!(ws.current_files().len(), 1);
        assert_eq!(ws.current_files()[0].name, "2022_annual.xlsx");
    }

    #[test]
    fn test_delete_file_misses_are_silent() {
        let mut ws = workspace();
        let before = ws.tree().clone();

        ws.delete_file("nope", "2023_annual.xlsx");
        ws.delete_file("1-1", "missing.xlsx");

        assert_eq!(ws.tree(), &before);
    }

    #[test]
    fn test_staging_respects_allowed_extensions() {
        let mut ws = workspace().with_allowed_extensions(vec![".csv".to_string()]);

        ws.stage_files(vec![
            IncomingFile::new("a.xlsx", 10),
            IncomingFile::new("b.csv", 10),
        ]);
        assert_eq!(ws.pending(), &[IncomingFile::new("b.csv", 10)]);

        ws.unstage_file(3);
        assert_eq!(ws.pending().len(), 1);
        ws.unstage_file(0);
        assert!(ws.pending().is_empty());
    }

    #[test]
    fn test_upload_date_uses_timezone() {
        let mut ws = Workspace::new(sample_tree().unwrap())
            .with_clock(FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap()))
            .with_timezone("Asia/Tokyo");

        ws.select_node("3-2");
        ws.stage_files(vec![IncomingFile::new("late.xlsx", 10)]);
        ws.commit_upload();

        assert_eq!(ws.current_files()[0].upload_date, "2024-06-02");
    }

    #[test]
    fn test_upload_date_taken_at_commit() {
        let clock = SharedClock(Rc::new(Cell::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 23, 59, 0).unwrap(),
        )));
        let mut ws = Workspace::new(sample_tree().unwrap()).with_clock(clock.clone());

        ws.select_node("2-2");
        ws.stage_files(vec![IncomingFile::new("metrics_may_2024.xlsx", 10)]);
        clock.0.set(Utc.with_ymd_and_hms(2024, 6, 2, 0, 1, 0).unwrap());
        ws.commit_upload();

        let uploaded = ws
            .current_files()
            .iter()
            .find(|f| f.name == "metrics_may_2024.xlsx")
            .unwrap();
        assert_eq!(uploaded.upload_date, "2024-06-02");
    }

    #[test]
    fn test_from_config() {
        let config = LibraryConfig {
            seed: "empty".to_string(),
            ..LibraryConfig::default()
        };

        let ws = Workspace::from_config(&config).unwrap();
        assert_eq!(ws.tree().root_count(), 0);
        assert!(ws.selected_id().is_none());
    }
}
