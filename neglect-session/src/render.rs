//! Plain-text rendering for the terminal host.

use neglect_core::{PlantState, Signal, Snapshot};

use crate::session::SessionEvent;

/// One-line summary of a snapshot, with the display band of each bar.
#[must_use]
pub fn status_line(snapshot: &Snapshot) -> String {
    let stats = &snapshot.stats;
    let mut line = format!(
        "{} is {} and {} | health {} ({}) | water {} ({}) | mood {} ({}) | sass {}",
        stats.name,
        stats.state,
        stats.emotion,
        stats.health,
        snapshot.health_band(),
        stats.water_level,
        snapshot.water_band(),
        stats.mood,
        snapshot.mood_band(),
        stats.sass_level,
    );
    if stats.state != PlantState::Dead {
        line.push_str(&format!(
            " | {} decay ticks from death",
            snapshot.ticks_until_depleted()
        ));
    }
    line
}

/// Text to print for a session event.
#[must_use]
pub fn describe(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Signal(Signal::Notify(note)) => format!("💬 {}", note.message),
        SessionEvent::Signal(Signal::Effect { effect, .. }) => format!("✨ {effect:?}"),
        SessionEvent::Signal(Signal::Died { name }) => format!("💀 {name} has died"),
        SessionEvent::Signal(Signal::RenameRejected { reason }) => {
            format!("name rejected: {reason}")
        }
        SessionEvent::NamePrompt { suggestion } => {
            format!("your plant has no name yet. try `name {suggestion}`")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neglect_core::{NameRejection, VitalStats};

    #[test]
    fn status_shows_bands_and_time_left() {
        let snapshot = Snapshot {
            revision: 4,
            stats: VitalStats {
                health: 60,
                water_level: 25,
                mood: -40,
                state: PlantState::Wilting,
                ..VitalStats::default()
            },
        };
        let line = status_line(&snapshot);
        assert!(line.starts_with("LYLY is wilting and content"));
        assert!(line.contains("health 60 (fair)"));
        assert!(line.contains("water 25 (poor)"));
        assert!(line.contains("mood -40 (miserable)"));
        assert!(line.ends_with("2 decay ticks from death"));
    }

    #[test]
    fn dead_plants_have_no_countdown() {
        let snapshot = Snapshot {
            revision: 9,
            stats: VitalStats {
                health: 30,
                water_level: 0,
                state: PlantState::Dead,
                ..VitalStats::default()
            },
        };
        let line = status_line(&snapshot);
        assert!(line.contains("water 0 (poor)"));
        assert!(!line.contains("decay ticks"));
    }

    #[test]
    fn rejected_names_explain_why() {
        let event = SessionEvent::Signal(Signal::RenameRejected {
            reason: NameRejection::Empty,
        });
        assert_eq!(describe(&event), "name rejected: name is empty");
    }
}
