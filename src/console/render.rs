//! Plain-text rendering for the console.

use std::fmt::Write;

use crate::library::{FileRecord, FolderNode, IncomingFile};

use super::command::get_command_help;

/// Render the navigation tree, marking the selected folder.
pub fn render_tree(outline: &[(usize, &FolderNode)], selected: Option<&str>) -> String {
    if outline.is_empty() {
        return "(no folders)\n".to_string();
    }

    let mut out = String::new();
    for (depth, node) in outline {
        let marker = if selected == Some(node.id.as_str()) {
            '>'
        } else {
            ' '
        };
        let indent = "  ".repeat(*depth);
        let _ = writeln!(out, "{marker} {indent}[{}] {}", node.id, node.name);
    }
    out
}

/// Render a folder's file list.
pub fn render_files(files: &[FileRecord]) -> String {
    if files.is_empty() {
        return "(no files)\n".to_string();
    }

    let mut out = String::new();
    for file in files {
        let _ = writeln!(out, "  {}  {} | {}", file.name, file.size, file.upload_date);
    }
    out
}

/// Render the staged upload set with 1-based positions.
pub fn render_pending(pending: &[IncomingFile]) -> String {
    let mut out = String::new();
    for (index, file) in pending.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({} bytes)", index + 1, file.name, file.byte_size);
    }
    out
}

/// Render the command help.
pub fn render_help() -> String {
    let mut out = String::from("Commands:\n");
    for info in get_command_help() {
        let _ = write!(out, "  {:<28} {}", info.syntax, info.description);
        if !info.aliases.is_empty() {
            let _ = write!(out, " (also: {})", info.aliases.join(", "));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::sample_tree;

    #[test]
    fn test_render_tree_marks_selection() {
        let tree = sample_tree().unwrap();
        let text = render_tree(&tree.outline(), Some("1-2"));

        assert!(text.starts_with("  [1] Finance\n"));
        assert!(text.contains(">   [1-2] Quarterly Reports\n"));
        assert!(text.contains("    [3-2] Product Sales\n"));
    }

    #[test]
    fn test_render_tree_empty() {
        assert_eq!(render_tree(&[], None), "(no folders)\n");
    }

    #[test]
    fn test_render_files() {
        let files = vec![FileRecord::new("Q1.xlsx", "1.2 MB", "2024-04-01")];
        assert_eq!(render_files(&files), "  Q1.xlsx  1.2 MB | 2024-04-01\n");
        assert_eq!(render_files(&[]), "(no files)\n");
    }

    #[test]
    fn test_render_pending() {
        let pending = vec![IncomingFile::new("a.csv", 12), IncomingFile::new("b.csv", 7)];
        assert_eq!(
            render_pending(&pending),
            "  1. a.csv (12 bytes)\n  2. b.csv (7 bytes)\n"
        );
    }

    #[test]
    fn test_render_help() {
        let help = render_help();
        assert!(help.starts_with("Commands:\n"));
        assert!(help.contains("(also: del, delete)"));
    }
}
