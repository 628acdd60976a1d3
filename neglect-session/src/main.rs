//! `neglect` — a terminal host for Neglect-o-Plant.
//!
//! Usage: `neglect [CONFIG.toml]`
//!
//! Reads one command per line from stdin and prints notifications and
//! effects as they happen. `status` prints a graded summary line followed by
//! the snapshot as JSON. Logs go to stderr; `RUST_LOG` overrides the
//! configured `general.log_level`.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use neglect_core::PlantConfig;
use neglect_core::name::suggest_name;
use neglect_session::hooks::{HELP, parse_command};
use neglect_session::render::{describe, status_line};
use neglect_session::{
    DeathSound, HostCommand, InputEvent, Session, SessionError, SessionHandle, Silence,
    TerminalBell,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let sound: Arc<dyn DeathSound> = if config.audio.death_sound {
        Arc::new(TerminalBell)
    } else {
        Arc::new(Silence)
    };
    let mut session = Session::spawn(config, sound);
    let handle = session.handle();
    info!(session = %handle.id(), "neglect-o-plant started");

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else { break };
                if !run_command(&handle, &line).await? {
                    break;
                }
            }
            event = session.next_event() => {
                let Some(event) = event else { break };
                println!("{}", describe(&event));
            }
        }
    }

    session.shutdown().await;
    Ok(())
}

fn load_config() -> anyhow::Result<PlantConfig> {
    match std::env::args().nth(1) {
        Some(path) => PlantConfig::from_file(Path::new(&path))
            .with_context(|| format!("loading config from {path}")),
        None => Ok(PlantConfig::default()),
    }
}

/// Apply one line of input. Returns `false` when the user asked to quit.
async fn run_command(handle: &SessionHandle, line: &str) -> anyhow::Result<bool> {
    let Some(command) = parse_command(line) else {
        if !line.trim().is_empty() {
            println!("unknown command; {HELP}");
        }
        return Ok(true);
    };

    match command {
        HostCommand::Love => handle.give_attention()?,
        HostCommand::Water => handle.water_plant()?,
        HostCommand::Revive => {
            if !handle.revive_plant().await? {
                println!("{} is not dead. Yet.", handle.snapshot().stats.name);
            }
        }
        HostCommand::Poke => handle.input(InputEvent::KeyPress)?,
        HostCommand::Name(name) => match handle.rename(name).await {
            // rejections arrive as a RenameRejected event
            Ok(()) | Err(SessionError::Plant(_)) => {}
            Err(e) => return Err(e.into()),
        },
        HostCommand::Suggest => println!("how about {}?", suggest_name(&mut rand::thread_rng())),
        HostCommand::Status => {
            let snapshot = handle.current().await?;
            println!("{}", status_line(&snapshot));
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        HostCommand::Help => println!("{HELP}"),
        HostCommand::Quit => return Ok(false),
    }
    Ok(true)
}
