//! Long-running mode
//!
//! Does the startup check, then waits for menu commands. Commands come from
//! stdin (one per line) and Ctrl+C, and are handled one at a time on the
//! calling thread, so two refreshes never overlap.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::app::{settle_queued, App, Command, Flow, Startup};
use crate::error::{ChangerError, Result};
use crate::notify;

/// Run the daemon until an exit command arrives
pub fn daemon(app: &App) -> Result<String> {
    let (tx, rx) = mpsc::channel();

    let interrupt = tx.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = interrupt.send(Command::Exit);
    }) {
        tracing::warn!("could not install Ctrl+C handler: {e}");
    }

    spawn_stdin_reader(tx)?;

    match app.check() {
        Ok(Startup::AlreadyFresh { current }) => {
            tracing::info!("startup: keeping today's wallpaper {current}");
        }
        Ok(Startup::Refreshed(refreshed)) => {
            tracing::info!("startup: wallpaper set to {}", refreshed.path.display());
        }
        Err(e) => report_failure(&e),
    }

    run(app, &rx, report_failure);
    Ok(String::new())
}

/// Handle commands until `Exit` or until every sender is gone.
///
/// Refresh requests that pile up while a refresh is running are dropped.
pub fn run(app: &App, rx: &Receiver<Command>, mut on_error: impl FnMut(&ChangerError)) {
    while let Ok(command) = rx.recv() {
        tracing::debug!("received {command:?}");

        let flow = app.handle(command).unwrap_or_else(|e| {
            on_error(&e);
            Flow::Continue
        });
        if flow == Flow::Exit {
            break;
        }

        if command == Command::RefreshNow && settle_queued(rx.try_iter()) == Some(Command::Exit) {
            break;
        }
    }
    tracing::info!("daemon stopped");
}

fn report_failure(err: &ChangerError) {
    tracing::error!("refresh failed: {err}");
    notify::refresh_failed(err);
}

/// Forward stdin lines as commands.
///
/// Closing stdin does not stop the daemon; a background launch usually has
/// no stdin at all.
fn spawn_stdin_reader(tx: Sender<Command>) -> Result<()> {
    thread::Builder::new()
        .name("stdin-commands".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        if tx.send(command).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!("{e}"),
                }
            }
            tracing::debug!("stdin closed");
        })?;
    Ok(())
}
