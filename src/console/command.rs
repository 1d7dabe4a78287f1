//! Console command parser for Report Desk.

use crate::library::IncomingFile;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a root folder.
    Mkdir(String),
    /// Select a folder.
    Select(String),
    /// Replace the staged upload set.
    Stage(Vec<IncomingFile>),
    /// Remove a staged file (1-based position).
    Unstage(usize),
    /// Upload staged files into the selected folder.
    Upload,
    /// Delete files by name from the selected folder.
    Remove(String),
    /// List files of a folder (selected folder when omitted).
    List(Option<String>),
    /// Show the folder tree.
    Tree,
    /// Browse read-only, opening on a folder.
    Explore(Option<String>),
    /// Show help.
    Help,
    /// Leave the console.
    Quit,
    /// Known command with bad arguments; carries the usage line.
    Usage(&'static str),
    /// Unknown command.
    Unknown(String),
}

impl Command {
    /// Get the command name.
    pub fn name(&self) -> &str {
        match self {
            Command::Mkdir(_) => "mkdir",
            Command::Select(_) => "select",
            Command::Stage(_) => "stage",
            Command::Unstage(_) => "unstage",
            Command::Upload => "upload",
            Command::Remove(_) => "rm",
            Command::List(_) => "ls",
            Command::Tree => "tree",
            Command::Explore(_) => "explore",
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Usage(_) => "usage",
            Command::Unknown(cmd) => cmd,
        }
    }
}

/// Parse one `name:bytes` staging argument.
fn parse_pick(arg: &str) -> Option<IncomingFile> {
    let (name, size) = arg.rsplit_once(':')?;
    if name.is_empty() {
        return None;
    }
    let byte_size = size.parse().ok()?;
    Some(IncomingFile::new(name, byte_size))
}

fn optional(args: &str) -> Option<String> {
    (!args.is_empty()).then(|| args.to_string())
}

/// Parse a console input line. Returns None for blank lines.
pub fn parse_command(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (cmd, args) = match trimmed.find(char::is_whitespace) {
        Some(pos) => (&trimmed[..pos], trimmed[pos..].trim()),
        None => (trimmed, ""),
    };

    let command = match cmd.to_lowercase().as_str() {
        "mkdir" | "new" => match args {
            "" => Command::Usage("mkdir <name>"),
            name => Command::Mkdir(name.to_string()),
        },
        "select" | "cd" => match args {
            "" => Command::Usage("select <folder-id>"),
            id => Command::Select(id.to_string()),
        },
        "stage" | "pick" => {
            let picks: Option<Vec<IncomingFile>> =
                args.split_whitespace().map(parse_pick).collect();
            match picks {
                Some(picks) if !picks.is_empty() => Command::Stage(picks),
                _ => Command::Usage("stage <name>:<bytes> [<name>:<bytes> ...]"),
            }
        }
        "unstage" => match args.parse::<usize>() {
            Ok(position) if position > 0 => Command::Unstage(position),
            _ => Command::Usage("unstage <position>"),
        },
        "upload" | "up" => Command::Upload,
        "rm" | "del" | "delete" => match args {
            "" => Command::Usage("rm <file-name>"),
            name => Command::Remove(name.to_string()),
        },
        "ls" | "list" => Command::List(optional(args)),
        "tree" => Command::Tree,
        "explore" | "browse" => Command::Explore(optional(args)),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(cmd.to_string()),
    };

    Some(command)
}

/// Console command information for help display.
pub struct CommandInfo {
    /// Command syntax.
    pub syntax: &'static str,
    /// Command aliases.
    pub aliases: &'static [&'static str],
    /// Command description.
    pub description: &'static str,
}

/// Get all available command information.
pub fn get_command_help() -> Vec<CommandInfo> {
    vec![
        CommandInfo {
            syntax: "mkdir <name>",
            aliases: &["new"],
            description: "Create a root folder",
        },
        CommandInfo {
            syntax: "select <folder-id>",
            aliases: &["cd"],
            description: "Select a folder and show its files",
        },
        CommandInfo {
            syntax: "stage <name>:<bytes> ...",
            aliases: &["pick"],
            description: "Choose files to upload (replaces the current choice)",
        },
        CommandInfo {
            syntax: "unstage <position>",
            aliases: &[],
            description: "Drop one chosen file",
        },
        CommandInfo {
            syntax: "upload",
            aliases: &["up"],
            description: "Upload chosen files to the selected folder",
        },
        CommandInfo {
            syntax: "rm <file-name>",
            aliases: &["del", "delete"],
            description: "Delete files with this name from the selected folder",
        },
        CommandInfo {
            syntax: "ls [folder-id]",
            aliases: &["list"],
            description: "List files in a folder",
        },
        CommandInfo {
            syntax: "tree",
            aliases: &[],
            description: "Show the folder tree",
        },
        CommandInfo {
            syntax: "explore [folder-id]",
            aliases: &["browse"],
            description: "Read-only view of a folder",
        },
        CommandInfo {
            syntax: "help",
            aliases: &["h", "?"],
            description: "Show this help",
        },
        CommandInfo {
            syntax: "quit",
            aliases: &["q", "exit"],
            description: "Leave the console",
        },
    ]
}
