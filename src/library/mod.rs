//! Report library module for Report Desk.
//!
//! This module provides the in-memory document library:
//! - Two-level folder tree with file records
//! - Folder selection and file resolution for views
//! - Staged uploads committed into the selected folder
//! - A read-only explorer sharing the same resolution path

mod explorer;
mod folder;
mod resolver;
mod seed;
mod selection;
mod staging;
mod tree;
mod workspace;

pub use explorer::Explorer;
pub use folder::{format_size, FileRecord, FolderNode, IncomingFile};
pub use resolver::ContentResolver;
pub use seed::{load_seed, parse_seed, sample_roots, sample_tree, seed_from_config};
pub use selection::{ContentView, FileListView, SelectionController};
pub use staging::UploadStaging;
pub use tree::FolderTree;
pub use workspace::Workspace;
