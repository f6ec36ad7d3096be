//! Main entry point for the FamilyTree CLI.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use shared::client::{ApiClient, Binder, ClientError, Session};
use shared::config::ClientConfig;
use shared::models::TreeId;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod logging;
mod view;

use commands::session::SessionCommand;
use view::TerminalView;

/// FamilyTree CLI
#[derive(Parser)]
#[command(name = "familytree")]
#[command(about = "Command-line client for the FamilyTree API", long_about = None)]
struct Cli {
    #[command(flatten)]
    globals: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options that seed the client for every subcommand.
#[derive(Args, Debug, Clone, Default)]
struct GlobalArgs {
    /// API base URL
    #[arg(
        long,
        global = true,
        help = "FamilyTree API base URL (e.g., http://localhost:8000). Overrides the config file and FAMILYTREE_BASE_URL."
    )]
    server: Option<String>,

    /// Path to the configuration file (optional)
    #[arg(
        long,
        global = true,
        help = "Path to the configuration file (e.g., config.yaml or config.json). If not provided, defaults will be used."
    )]
    config: Option<PathBuf>,

    /// Token to send with requests
    #[arg(
        long,
        global = true,
        help = "Token from an earlier signup or signin, sent in the `token` header."
    )]
    token: Option<String>,

    /// Tree to operate on
    #[arg(long, global = true, help = "Identifier of the tree person commands operate on.")]
    tree: Option<TreeId>,
}

/// Subcommands for the FamilyTree CLI
#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Session(SessionCommand),

    /// Start an interactive shell that keeps one session for its lifetime
    Shell,

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)
        #[arg(long, value_enum)]
        shell: clap_complete::Shell,
    },

    /// Generate a configuration file
    Config {
        /// Format of the configuration file to generate (yaml or json). Defaults to yaml.
        #[arg(long, short)]
        format: Option<String>,
    },
}

fn connect(globals: GlobalArgs) -> Result<Binder<TerminalView>> {
    let config = ClientConfig::load_config(globals.config, globals.server)
        .context("failed to load configuration")?;
    logging::init(&config.log_level);

    let api = ApiClient::new(&config.base_url)
        .with_context(|| format!("invalid API base URL {}", config.base_url))?;
    let mut session = Session::new();
    if let Some(token) = globals.token {
        session.set_token(token);
    }
    if let Some(tree_id) = globals.tree {
        session.select_tree(tree_id);
    }
    tracing::debug!(base_url = api.base_url(), "client ready");
    Ok(Binder::with_session(api, session, TerminalView))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // A missing tree was already alerted by the view.
            if !is_missing_tree(&err) {
                eprintln!("Error: {err:?}");
            }
            ExitCode::FAILURE
        }
    }
}

fn is_missing_tree(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ClientError>(),
        Some(ClientError::NoTreeSelected)
    )
}

async fn run(Cli { globals, command }: Cli) -> Result<()> {
    match command {
        Commands::Session(command) => {
            let binder = connect(globals)?;
            commands::session::run(&binder, command).await
        }
        Commands::Shell => {
            let binder = connect(globals)?;
            commands::shell::run(&binder).await
        }
        Commands::Completion { shell } => {
            commands::completion::generate_completion(shell);
            Ok(())
        }
        Commands::Config { format } => {
            let format = format.unwrap_or_else(|| "yaml".to_string());
            commands::config::generate_config(&format)
        }
    }
}
