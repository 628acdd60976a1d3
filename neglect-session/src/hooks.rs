//! Integration hooks between a host UI and a plant session.
//!
//! Hosts translate their native input into [`InputEvent`]s (any of which
//! counts as user activity) and into [`HostCommand`]s for explicit actions.
//! The terminal host reads one command per line via [`parse_command`].

use serde::{Deserialize, Serialize};

/// Raw user input observed anywhere in the host UI.
///
/// Every variant resets the idle detector, and revives a dead plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// Mouse button pressed.
    PointerDown,
    /// Pointer moved.
    PointerMove,
    /// Key pressed.
    KeyPress,
    /// Wheel or trackpad scroll.
    Scroll,
    /// Touch began.
    TouchStart,
    /// Click completed.
    Click,
}

/// An explicit action requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Give attention.
    Love,
    /// Water the plant.
    Water,
    /// Revive a dead plant.
    Revive,
    /// Generic activity with no other effect.
    Poke,
    /// Rename the plant. The text is passed through unvalidated.
    Name(String),
    /// Show a suggested name.
    Suggest,
    /// Print the current snapshot.
    Status,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Parse one line of terminal input.
///
/// Returns `None` for blank lines and unknown commands. `name` keeps the
/// rest of the line verbatim, so `name` alone yields an empty name that
/// the plant will reject.
#[must_use]
pub fn parse_command(line: &str) -> Option<HostCommand> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "love" | "attention" => HostCommand::Love,
        "water" => HostCommand::Water,
        "revive" => HostCommand::Revive,
        "poke" => HostCommand::Poke,
        "name" | "rename" => HostCommand::Name(rest.trim_end().to_string()),
        "suggest" => HostCommand::Suggest,
        "status" => HostCommand::Status,
        "help" | "?" => HostCommand::Help,
        "quit" | "exit" => HostCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// One-line usage summary for the terminal host.
pub const HELP: &str =
    "commands: love | water | revive | poke | name <text> | suggest | status | help | quit";
