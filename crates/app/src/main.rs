use std::io::Write;

use sparc_chat::{ChatShell, SettingsStore, ShellCommand, ShellOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they do not interleave with replies.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = SettingsStore::load();
    tracing::info!(path = ?settings.config_path(), "settings loaded");
    if !settings.settings().is_valid() {
        tracing::warn!("no SPARC API key configured; set one with /key before asking");
    }

    let mut shell = ChatShell::new(settings);
    for (role, color) in shell.theme().colors() {
        tracing::debug!(role, color, "theme color");
    }
    println!("{}", shell.banner());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(error) => {
                tracing::error!(%error, "failed to read input");
                break;
            }
        };

        let Some(command) = ShellCommand::parse(&line) else {
            continue;
        };

        match shell.handle(command).await {
            ShellOutcome::Reply(text) => println!("{text}"),
            ShellOutcome::Quit => break,
        }
    }
}
