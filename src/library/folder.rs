//! Folder and file record types for the report library.

use serde::{Deserialize, Serialize};

/// Bytes per megabyte used for display sizes.
const BYTES_PER_MB: u128 = 1024 * 1024;

/// Format a byte count as a one-decimal megabyte string (e.g., "2.3 MB").
///
/// Halves round up, so 262,144 bytes (exactly 0.25 MB) is "0.3 MB".
pub fn format_size(bytes: u64) -> String {
    let tenths = (u128::from(bytes) * 10 + BYTES_PER_MB / 2) / BYTES_PER_MB;
    format!("{}.{} MB", tenths / 10, tenths % 10)
}

/// Metadata for a file chosen for upload but not yet committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingFile {
    /// File name as reported by the picker.
    pub name: String,
    /// Size in bytes.
    pub byte_size: u64,
}

impl IncomingFile {
    /// Create a new IncomingFile.
    pub fn new(name: impl Into<String>, byte_size: u64) -> Self {
        Self {
            name: name.into(),
            byte_size,
        }
    }

    /// Whether the file name ends with one of `extensions` (case-insensitive).
    ///
    /// An empty extension list accepts every file.
    pub fn has_extension_in(&self, extensions: &[String]) -> bool {
        if extensions.is_empty() {
            return true;
        }
        let name = self.name.to_lowercase();
        extensions
            .iter()
            .any(|ext| name.ends_with(&ext.to_lowercase()))
    }
}

/// A file held by a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Display name.
    pub name: String,
    /// Human-readable size (e.g., "1.2 MB").
    pub size: String,
    /// Upload date (YYYY-MM-DD).
    pub upload_date: String,
}

impl FileRecord {
    /// Create a new FileRecord.
    pub fn new(
        name: impl Into<String>,
        size: impl Into<String>,
        upload_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            upload_date: upload_date.into(),
        }
    }

    /// Convert a staged file into a record stamped with `upload_date`.
    pub fn from_incoming(file: &IncomingFile, upload_date: &str) -> Self {
        Self::new(&file.name, format_size(file.byte_size), upload_date)
    }
}

/// A folder in the report library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID, unique across the whole tree.
    pub id: String,
    /// Folder name.
    pub name: String,
    /// Child folders, in display order.
    #[serde(default)]
    pub children: Vec<FolderNode>,
    /// Files, in upload order.
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

impl FolderNode {
    /// Create an empty folder.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Add a child folder.
    pub fn with_child(mut self, child: FolderNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add a file.
    pub fn with_file(mut self, file: FileRecord) -> Self {
        self.files.push(file);
        self
    }

    /// Collect the ids of this folder and every descendant, depth first.
    pub fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.id);
        for child in &self.children {
            child.collect_ids(out);
        }
    }

    /// Append records to the end of the file list.
    pub(crate) fn append_files(&mut self, records: impl IntoIterator<Item = FileRecord>) -> usize {
        let before = self.files.len();
        self.files.extend(records);
        self.files.len() - before
    }

    /// Remove every file named exactly `name`. Returns the number removed.
    pub(crate) fn remove_files_named(&mut self, name: &str) -> usize {
        let before = self.files.len();
        self.files.retain(|file| file.name != name);
        before - self.files.len()
    }
}
