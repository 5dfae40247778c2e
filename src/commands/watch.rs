//! Activity watching command.
//!
//! Spawns the monitor as a detached background process by default; with
//! `--foreground` the monitor runs attached to the current terminal, and
//! `--stop` terminates a running watcher.

use crate::libs::daemon;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Run attached to the current terminal instead of detaching
    #[arg(short, long)]
    foreground: bool,

    /// Stop a running watcher
    #[arg(short, long)]
    stop: bool,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }

    if args.foreground {
        return daemon::run_with_signal_handling().await;
    }

    daemon::spawn()
}
