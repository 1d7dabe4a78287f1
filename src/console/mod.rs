//! Line-oriented console front end for Report Desk.
//!
//! Reads commands from any `BufRead`, applies them to a [`Workspace`] and
//! writes listings to any `Write`.

mod command;
mod render;

pub use command::{get_command_help, parse_command, Command, CommandInfo};
pub use render::{render_files, render_help, render_pending, render_tree};

use std::io::{BufRead, Write};

use tracing::debug;

use crate::library::Workspace;
use crate::Result;

/// Prompt printed before each command.
pub const PROMPT: &str = "desk> ";

/// Console session over a workspace.
pub struct Console<'a> {
    workspace: &'a mut Workspace,
    explorer_default: Option<String>,
}

impl<'a> Console<'a> {
    /// Create a console driving `workspace`.
    pub fn new(workspace: &'a mut Workspace) -> Self {
        Self {
            workspace,
            explorer_default: None,
        }
    }

    /// Folder `explore` opens on when no id is given.
    pub fn with_explorer_default(mut self, folder_id: impl Into<String>) -> Self {
        self.explorer_default = Some(folder_id.into());
        self
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if let Some(command) = parse_command(&line) {
                debug!("Console command: {}", command.name());
                if command == Command::Quit {
                    break;
                }
                let response = self.execute(command);
                output.write_all(response.as_bytes())?;
            }
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// Apply one command and return the text to show.
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Mkdir(name) => {
                let before = self.workspace.tree().root_count();
                self.workspace.create_folder(&name);
                match self.workspace.tree().roots().get(before) {
                    Some(folder) => format!("Created [{}] {}\n", folder.id, folder.name),
                    None => "Folder name is empty.\n".to_string(),
                }
            }
            Command::Select(id) => {
                self.workspace.select_node(&id);
                format!("Selected {id}\n{}", render_files(self.workspace.current_files()))
            }
            Command::Stage(files) => {
                self.workspace.stage_files(files);
                let pending = self.workspace.pending();
                if pending.is_empty() {
                    "No files staged.\n".to_string()
                } else {
                    format!("Staged:\n{}", render_pending(pending))
                }
            }
            Command::Unstage(position) => match position.checked_sub(1) {
                Some(index) => {
                    self.workspace.unstage_file(index);
                    format!("Staged:\n{}", render_pending(self.workspace.pending()))
                }
                None => "Usage: unstage <position>\n".to_string(),
            },
            Command::Upload => {
                if !self.workspace.can_commit() {
                    return "Select a folder and stage files first.\n".to_string();
                }
                let count = self.workspace.pending().len();
                self.workspace.commit_upload();
                format!(
                    "Uploaded {count} file(s).\n{}",
                    render_files(self.workspace.current_files())
                )
            }
            Command::Remove(name) => match self.workspace.selected_id().map(str::to_string) {
                Some(id) => {
                    self.workspace.delete_file(&id, &name);
                    render_files(self.workspace.current_files())
                }
                None => "Select a folder first.\n".to_string(),
            },
            Command::List(id) => {
                let id = id.or_else(|| self.workspace.selected_id().map(str::to_string));
                match id {
                    Some(id) => render_files(&self.workspace.get_files_for_node(&id)),
                    None => "Select a folder first.\n".to_string(),
                }
            }
            Command::Tree => render_tree(
                &self.workspace.tree().outline(),
                self.workspace.selected_id(),
            ),
            Command::Explore(id) => {
                let id = id.or_else(|| self.explorer_default.clone());
                let explorer = self.workspace.explorer(id.as_deref());
                format!(
                    "{}\n{}",
                    render_tree(&explorer.outline(), explorer.selected_id()),
                    render_files(explorer.files())
                )
            }
            Command::Help => render_help(),
            Command::Quit => String::new(),
            Command::Usage(usage) => format!("Usage: {usage}\n"),
            Command::Unknown(cmd) => format!("Unknown command: {cmd} (try help)\n"),
        }
    }
}
