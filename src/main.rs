use clap::{ArgAction, Parser, Subcommand};
use project_navigator::commands::*;
use project_navigator::core::{error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "project-navigator")]
#[command(about = "Find project folders, detect their language and open them in an editor")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the root folder and show numbered project folders
    List {
        /// Folder to scan instead of the configured root
        #[arg(long)]
        root: Option<PathBuf>,
        /// Ignore the cached scan and rescan now
        #[arg(long)]
        refresh: bool,
        /// Only show folders whose name contains this text
        #[arg(long)]
        filter: Option<String>,
    },
    /// Open folders from the last listing by index
    Open {
        /// Folder indices to open (e.g., "1 3-5,8")
        indices: Vec<String>,
    },
    /// Detect the primary language of one directory
    Detect {
        /// Directory to inspect
        directory: PathBuf,
        /// Also show per-extension file counts
        #[arg(long)]
        stats: bool,
    },
    /// Manage per-language editor commands
    Editors {
        #[command(subcommand)]
        action: EditorsAction,
    },
    /// Manage folder names skipped while scanning
    Ignored {
        #[command(subcommand)]
        action: IgnoredAction,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum EditorsAction {
    /// Show custom editors
    List,
    /// Use a command for projects of one language (%s is the folder path)
    Add { language: String, command: String },
    /// Remove custom editors by index (e.g., "1 3-5,8")
    Remove { indices: Vec<String> },
}

#[derive(Subcommand)]
enum IgnoredAction {
    /// Show ignored folder names
    List,
    /// Skip folders with this name
    Add {
        folder_name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove custom ignored folders by index (e.g., "1 3-5,8")
    Remove { indices: Vec<String> },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print current settings
    Show,
    /// Set the default folder to scan
    Root { directory: PathBuf },
    /// Set the default editor command (%s is the folder path)
    Editor { command: String },
    /// Always rescan instead of using the cached scan
    Refresh {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Set how long a scan stays cached, in minutes
    Ttl {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::List {
            root,
            refresh,
            filter,
        } => execute_list(root, refresh, filter),
        Commands::Open { indices } => execute_open(indices),
        Commands::Detect { directory, stats } => execute_detect(directory, stats),
        Commands::Editors { action } => match action {
            EditorsAction::List => execute_editors_list(),
            EditorsAction::Add { language, command } => execute_editors_add(&language, &command),
            EditorsAction::Remove { indices } => execute_editors_remove(indices),
        },
        Commands::Ignored { action } => match action {
            IgnoredAction::List => execute_ignored_list(),
            IgnoredAction::Add {
                folder_name,
                description,
            } => execute_ignored_add(&folder_name, description.as_deref()),
            IgnoredAction::Remove { indices } => execute_ignored_remove(indices),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => execute_config_show(),
            ConfigAction::Root { directory } => execute_config_root(directory),
            ConfigAction::Editor { command } => execute_config_editor(&command),
            ConfigAction::Refresh { enabled } => execute_config_refresh(enabled),
            ConfigAction::Ttl { minutes } => execute_config_ttl(minutes),
        },
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli.command) {
        log::debug!("Command failed: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
