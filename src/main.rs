use tracing::{info, warn};

use reportdesk::{Config, Console, Workspace};

fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = reportdesk::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        reportdesk::logging::init_console_only(&config.logging.level);
    }

    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!("{e}; falling back to default library settings");
            Config {
                library: Default::default(),
                ..config
            }
        }
    };

    info!("Report Desk - report library console");

    let mut workspace = match Workspace::from_config(&config.library) {
        Ok(workspace) => workspace,
        Err(e) => {
            warn!("Failed to seed library: {e}; starting empty");
            Workspace::new(Default::default())
                .with_timezone(&config.library.timezone)
                .with_allowed_extensions(config.library.allowed_extensions.clone())
        }
    };
    info!("Library has {} root folders", workspace.tree().root_count());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let result = Console::new(&mut workspace)
        .with_explorer_default(config.library.explorer_default_folder.clone())
        .run(stdin.lock(), &mut stdout);

    if let Err(e) = result {
        eprintln!("Console error: {e}");
        std::process::exit(1);
    }
}
