//! Initial folder data for the report library.

use std::path::Path;

use tracing::info;

use super::folder::{FileRecord, FolderNode};
use super::tree::FolderTree;
use crate::config::LibraryConfig;
use crate::{DeskError, Result};

/// The built-in sample library: Finance, Marketing and Sales.
pub fn sample_roots() -> Vec<FolderNode> {
    vec![
        FolderNode::new("1", "Finance")
            .with_child(
                FolderNode::new("1-1", "Annual Reports")
                    .with_file(FileRecord::new("2023_annual.xlsx", "2.3 MB", "2024-03-15"))
                    .with_file(FileRecord::new("2022_annual.xlsx", "2.1 MB", "2023-03-10")),
            )
            .with_child(
                FolderNode::new("1-2", "Quarterly Reports")
                    .with_file(FileRecord::new("Q1_2024.xlsx", "1.2 MB", "2024-04-01")),
            ),
        FolderNode::new("2", "Marketing")
            .with_child(
                FolderNode::new("2-1", "Campaign Analytics").with_file(FileRecord::new(
                    "social_campaign_2024.xlsx",
                    "3.4 MB",
                    "2024-03-20",
                )),
            )
            .with_child(
                FolderNode::new("2-2", "Social Media Metrics").with_file(FileRecord::new(
                    "metrics_march_2024.xlsx",
                    "1.8 MB",
                    "2024-04-01",
                )),
            ),
        FolderNode::new("3", "Sales")
            .with_child(FolderNode::new("3-1", "Regional Performance"))
            .with_child(FolderNode::new("3-2", "Product Sales")),
    ]
}

/// Build the sample library.
pub fn sample_tree() -> Result<FolderTree> {
    FolderTree::from_roots(sample_roots())
}

/// Parse a JSON seed document (an array of folders).
pub fn parse_seed(json: &str) -> Result<FolderTree> {
    let roots: Vec<FolderNode> = serde_json::from_str(json)?;
    FolderTree::from_roots(roots)
}

/// Load a JSON seed document from disk.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<FolderTree> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_seed(&content)
}

/// Build the initial tree described by the library configuration.
pub fn seed_from_config(config: &LibraryConfig) -> Result<FolderTree> {
    if let Some(ref path) = config.seed_path {
        let tree = load_seed(path)?;
        info!("Loaded {} root folders from {}", tree.root_count(), path);
        return Ok(tree);
    }

    match config.seed.as_str() {
        "sample" => sample_tree(),
        "empty" => Ok(FolderTree::new()),
        other => Err(DeskError::Config(format!("unknown seed '{other}'"))),
    }
}
