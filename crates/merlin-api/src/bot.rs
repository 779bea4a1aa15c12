//! Discord bot process launcher
//!
//! The bot itself is a separate program. When `BOT_COMMAND` is set the API
//! server starts it once in the background; whatever happens to the child
//! is logged and never reaches the HTTP side.

use std::process::ExitStatus;

use merlin_common::BotConfig;
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Start the configured bot command in a background task
///
/// Returns `None` when no command is configured.
pub fn spawn_bot(config: &BotConfig) -> Option<JoinHandle<()>> {
    let Some(program) = config.command.clone().filter(|c| !c.trim().is_empty()) else {
        info!("Bot launcher disabled (BOT_COMMAND not set)");
        return None;
    };
    let args = config.args.clone();

    Some(tokio::spawn(async move {
        match run_bot(&program, &args).await {
            Ok(status) if status.success() => info!(%program, "Bot process exited"),
            Ok(status) => warn!(%program, code = ?status.code(), "Bot process exited with failure"),
            Err(e) => error!(%program, error = %e, "Failed to start bot process"),
        }
    }))
}

async fn run_bot(program: &str, args: &[String]) -> std::io::Result<ExitStatus> {
    info!(%program, ?args, "Starting bot process");

    let mut child = Command::new(program).args(args).kill_on_drop(true).spawn()?;

    if let Some(pid) = child.id() {
        info!(pid, "Bot process started");
    }

    child.wait().await
}
