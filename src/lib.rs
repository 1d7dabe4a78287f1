//! Report Desk
//!
//! An in-memory folder and file library for report management, with a
//! line-oriented console front end.

pub mod config;
pub mod console;
pub mod datetime;
pub mod error;
pub mod library;
pub mod logging;

pub use config::Config;
pub use console::Console;
pub use datetime::{Clock, FixedClock, SystemClock};
pub use error::{DeskError, Result};
pub use library::{
    format_size, ContentResolver, ContentView, Explorer, FileListView, FileRecord, FolderNode,
    FolderTree, IncomingFile, SelectionController, UploadStaging, Workspace,
};
