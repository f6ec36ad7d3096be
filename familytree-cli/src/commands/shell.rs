//! Interactive shell: one session shared by every line typed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::client::{Binder, ClientError, View};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::session::{self, SessionCommand};

const PROMPT: &str = "familytree> ";

#[derive(Parser, Debug)]
#[command(name = "familytree", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum ShellCommand {
    #[command(flatten)]
    Session(SessionCommand),

    /// Show the current token and tree
    Status,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug)]
enum ParseOutcome {
    Command(ShellCommand),
    Empty,
    Invalid(clap::Error),
    Unbalanced,
}

fn parse_line(line: &str) -> ParseOutcome {
    let Some(words) = shlex::split(line) else {
        return ParseOutcome::Unbalanced;
    };
    if words.is_empty() {
        return ParseOutcome::Empty;
    }
    match ShellLine::try_parse_from(words) {
        Ok(parsed) => ParseOutcome::Command(parsed.command),
        Err(err) => ParseOutcome::Invalid(err),
    }
}

fn prompt() {
    print!("{PROMPT}");
    std::io::stdout().flush().ok();
}

/// Read commands from stdin until `quit` or end of input.
pub async fn run<V: View>(binder: &Binder<V>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            ParseOutcome::Empty => {}
            ParseOutcome::Unbalanced => binder.view().show_error("unbalanced quotes"),
            ParseOutcome::Invalid(err) => {
                err.print().ok();
            }
            ParseOutcome::Command(ShellCommand::Quit) => break,
            ParseOutcome::Command(ShellCommand::Status) => print_status(binder),
            ParseOutcome::Command(ShellCommand::Session(command)) => {
                if let Err(err) = session::run(binder, command).await {
                    report(binder.view(), &err);
                }
            }
        }
        prompt();
    }
    println!();
    Ok(())
}

fn print_status<V: View>(binder: &Binder<V>) {
    let session = binder.session();
    match session.token() {
        Some(token) => println!("token: {token}"),
        None => println!("token: (none)"),
    }
    match session.tree_id() {
        Some(tree_id) => println!("tree: {tree_id}"),
        None => println!("tree: (none)"),
    }
}

/// Route a failed command to the view. A missing tree was already alerted.
fn report<V: View>(view: &V, err: &anyhow::Error) {
    if matches!(
        err.downcast_ref::<ClientError>(),
        Some(ClientError::NoTreeSelected)
    ) {
        return;
    }
    view.show_error(&format!("{err:#}"));
}
