//! The session driver: one tokio task that owns the [`Plant`].
//!
//! ```text
//!  SessionHandle ──Command──▶ ┌──────────────┐ ──SessionEvent──▶ host
//!  (any number,   (mpsc)      │    Driver    │      (mpsc)
//!   cloneable)                │ owns Plant   │ ──Snapshot──────▶ watchers
//!                             └──────────────┘      (watch)
//!                              sleeps until the plant's next deadline
//! ```
//!
//! The driver is the only writer. Before applying a command it advances the
//! plant to the current elapsed time, so timers that came due while a
//! command was in flight fire first. Between commands it sleeps until the
//! next timer deadline; nothing is polled.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use neglect_core::name::suggest_name;
use neglect_core::{Plant, PlantConfig, PlantName, Signal, Snapshot};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::audio::DeathSound;
use crate::error::{Result, SessionError};
use crate::hooks::InputEvent;

/// Delay before a first-time user is invited to name the plant.
pub const NAME_PROMPT_AFTER: Duration = Duration::from_millis(2000);

/// Events delivered to the host, in the order they were raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A signal raised by the plant.
    Signal(Signal),
    /// The plant has not been named yet; show the naming form.
    NamePrompt {
        /// A name the form can offer.
        suggestion: String,
    },
}

#[derive(Debug)]
enum Command {
    Input(InputEvent),
    Attention,
    Water,
    Revive(oneshot::Sender<bool>),
    Rename(String, oneshot::Sender<neglect_core::error::Result<()>>),
    Snapshot(oneshot::Sender<Snapshot>),
    Shutdown,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A running plant session.
///
/// Dropping the `Session` does not stop the driver while other
/// [`SessionHandle`]s are alive; call [`Session::shutdown`] to end it.
#[derive(Debug)]
pub struct Session {
    handle: SessionHandle,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    task: JoinHandle<()>,
}

impl Session {
    /// Start a session on the current tokio runtime.
    ///
    /// Time zero of the plant's logical clock is the moment of this call.
    #[must_use]
    pub fn spawn(config: PlantConfig, sound: Arc<dyn DeathSound>) -> Self {
        let id = Uuid::new_v4();
        let play_sound = config.audio.death_sound;
        let plant = Plant::new(config);

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(plant.snapshot());

        let driver = Driver {
            plant,
            started: Instant::now(),
            commands: command_rx,
            snapshots: snapshot_tx,
            events: event_tx,
            sound,
            play_sound,
            name_prompt: Some(NAME_PROMPT_AFTER),
        };
        let task = tokio::spawn(driver.run().instrument(info_span!("session", %id)));

        Self {
            handle: SessionHandle {
                id,
                commands: command_tx,
                snapshots: snapshot_rx,
            },
            events: event_rx,
            task,
        }
    }

    /// A new handle to this session.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Wait for the next event. Returns `None` once the driver has stopped
    /// and every queued event has been read.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events.recv().await
    }

    /// Take the next event if one is already queued.
    pub fn try_next_event(&mut self) -> Option<SessionEvent> {
        self.events.try_recv().ok()
    }

    /// Stop the driver, cancelling every pending timer, and wait for it.
    pub async fn shutdown(self) {
        let _ = self.handle.shutdown();
        if let Err(e) = self.task.await {
            warn!(error = %e, "session task did not stop cleanly");
        }
    }
}

// ---------------------------------------------------------------------------
// SessionHandle
// ---------------------------------------------------------------------------

/// Cloneable front door to a running session.
///
/// Fire-and-forget methods return as soon as the command is queued; the
/// `async` ones wait for the driver's answer. Every method fails with
/// [`SessionError::Closed`] once the session has stopped.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: Uuid,
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
}

impl SessionHandle {
    /// Unique id of this session, as recorded in its tracing span.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The most recently published snapshot. May lag queued commands.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver notified on every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Report raw user activity.
    ///
    /// # Errors
    /// [`SessionError::Closed`] if the session has stopped.
    pub fn input(&self, event: InputEvent) -> Result<()> {
        self.send(Command::Input(event))
    }

    /// Give the plant attention.
    ///
    /// # Errors
    /// [`SessionError::Closed`] if the session has stopped.
    pub fn give_attention(&self) -> Result<()> {
        self.send(Command::Attention)
    }

    /// Water the plant.
    ///
    /// # Errors
    /// [`SessionError::Closed`] if the session has stopped.
    pub fn water_plant(&self) -> Result<()> {
        self.send(Command::Water)
    }

    /// Revive a dead plant. Resolves to `false` if it was not dead.
    ///
    /// # Errors
    /// [`SessionError::Closed`] if the session has stopped.
    pub async fn revive_plant(&self) -> Result<bool> {
        let (reply, answer) = oneshot::channel();
        self.send(Command::Revive(reply))?;
        answer.await.map_err(|_| SessionError::Closed)
    }

    /// Rename the plant.
    ///
    /// # Errors
    /// [`SessionError::Plant`] with the rejection reason for an empty or
    /// over-long name, [`SessionError::Closed`] if the session has stopped.
    pub async fn rename(&self, name: impl Into<String>) -> Result<()> {
        let (reply, answer) = oneshot::channel();
        self.send(Command::Rename(name.into(), reply))?;
        answer.await.map_err(|_| SessionError::Closed)??;
        Ok(())
    }

    /// A snapshot taken after every previously queued command has applied.
    ///
    /// # Errors
    /// [`SessionError::Closed`] if the session has stopped.
    pub async fn current(&self) -> Result<Snapshot> {
        let (reply, answer) = oneshot::channel();
        self.send(Command::Snapshot(reply))?;
        answer.await.map_err(|_| SessionError::Closed)
    }

    /// Ask the driver to stop. Pending timers are cancelled.
    ///
    /// # Errors
    /// [`SessionError::Closed`] if the session had already stopped.
    pub fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown)
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands.send(command).map_err(|_| SessionError::Closed)
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

struct Driver {
    plant: Plant,
    started: Instant,
    commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<Snapshot>,
    events: mpsc::UnboundedSender<SessionEvent>,
    sound: Arc<dyn DeathSound>,
    play_sound: bool,
    /// Logical time at which to prompt for a name, until one is chosen.
    name_prompt: Option<Duration>,
}

impl Driver {
    async fn run(mut self) {
        info!(name = %self.plant.stats().name, "session started");
        loop {
            let wake = self.next_wake();
            tokio::select! {
                command = self.commands.recv() => {
                    self.catch_up();
                    let Some(command) = command else { break };
                    if self.apply(command).is_break() {
                        break;
                    }
                }
                () = sleep_until_maybe(wake) => self.catch_up(),
            }
            self.flush();
        }

        self.plant.shutdown();
        self.flush();
        info!(
            total_attention = self.plant.stats().total_attention_received,
            abandonments = self.plant.stats().abandonment_count,
            "session ended"
        );
    }

    fn elapsed(&self) -> Duration {
        Instant::now().saturating_duration_since(self.started)
    }

    fn next_wake(&self) -> Option<Instant> {
        let next = match (self.plant.next_deadline(), self.name_prompt) {
            (Some(timer), Some(prompt)) => Some(timer.min(prompt)),
            (timer, prompt) => timer.or(prompt),
        };
        next.map(|at| self.started + at)
    }

    /// Fire everything that has come due, in deadline order.
    fn catch_up(&mut self) {
        let now = self.elapsed();
        self.plant.advance_to(now);
        self.flush();

        if self.name_prompt.is_some_and(|at| at <= now) {
            self.name_prompt = None;
            let suggestion = suggest_name(&mut rand::thread_rng()).to_string();
            debug!(%suggestion, "prompting for a name");
            self.emit(SessionEvent::NamePrompt { suggestion });
        }
    }

    fn apply(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Input(event) => {
                debug!(?event, "activity");
                self.plant.record_activity();
            }
            Command::Attention => self.plant.give_attention(),
            Command::Water => self.plant.water_plant(),
            Command::Revive(reply) => {
                let _ = reply.send(self.plant.revive_plant());
            }
            Command::Rename(name, reply) => {
                let result = self.plant.rename(&name);
                if result.is_ok() {
                    self.name_prompt = None;
                }
                let _ = reply.send(result);
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(self.plant.snapshot());
            }
            Command::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Forward drained signals and publish a snapshot if anything changed.
    fn flush(&mut self) {
        for signal in self.plant.drain_signals() {
            if let Signal::Died { name } = &signal {
                self.announce_death(name);
            }
            self.emit(SessionEvent::Signal(signal));
        }

        let stale = self.snapshots.borrow().revision != self.plant.revision();
        if stale {
            self.snapshots.send_replace(self.plant.snapshot());
        }
    }

    fn announce_death(&self, name: &PlantName) {
        if !self.play_sound {
            return;
        }
        match self.sound.play(name) {
            Ok(()) => debug!(%name, "death sound played"),
            Err(e) => info!(%name, reason = %e, "silent death blast"),
        }
    }

    fn emit(&self, event: SessionEvent) {
        // A host that stopped listening is not an error.
        let _ = self.events.send(event);
    }
}

async fn sleep_until_maybe(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
