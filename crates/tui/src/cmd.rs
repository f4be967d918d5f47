//! # Command Execution Layer
//!
//! Translates application [`Effect`]s into imperative commands ([`Cmd`])
//! and executes them. This is the boundary where pure state updates meet
//! side effects:
//! - Writing to the system clipboard
//! - Handing a `mailto:` URL to the platform's mail composer
//! - Persisting the chosen theme
//!
//! Navigation requests never become commands: they only start an
//! animation inside `App`, which the runtime then advances on each tick.

use std::time::Instant;

use folio_types::Effect;
use folio_util::open_mail_composer;
use tracing::{debug, warn};

use crate::app::{App, StatusLevel};

/// Side-effectful system commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write text into the system clipboard.
    ClipboardSet(String),
    /// Open the platform mail composer on a `mailto:` URL.
    OpenMailComposer(String),
    /// Store the preferred theme id.
    PersistTheme(String),
}

/// Whether the runtime keeps running after a batch of effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Continue,
    Exit,
}

/// Applies state-only effects to `app` and returns the commands left to execute.
pub fn from_effects(app: &mut App, effects: Vec<Effect>, now: Instant) -> (Vec<Cmd>, RunState) {
    let mut commands = Vec::new();
    let mut state = RunState::Continue;

    for effect in effects {
        match effect {
            Effect::NavigateTo(section_id) => {
                app.navigate_to(section_id.as_str(), now);
            }
            Effect::ComposeMail(address) => commands.push(Cmd::OpenMailComposer(format!("mailto:{}", address.trim()))),
            Effect::CopyToClipboard(text) => commands.push(Cmd::ClipboardSet(text)),
            Effect::PersistTheme(theme_id) => commands.push(Cmd::PersistTheme(theme_id)),
            Effect::Quit => state = RunState::Exit,
        }
    }

    (commands, state)
}

/// Executes commands, surfacing outcomes in the hint bar.
pub fn run_cmds(app: &mut App, commands: Vec<Cmd>, now: Instant) {
    for command in commands {
        match command {
            Cmd::ClipboardSet(text) => execute_clipboard_set(app, text, now),
            Cmd::OpenMailComposer(url) => execute_open_mail_composer(app, &url, now),
            Cmd::PersistTheme(theme_id) => execute_persist_theme(app, theme_id, now),
        }
    }
}

/// Runs a batch of effects end to end.
pub fn run_from_effects(app: &mut App, effects: Vec<Effect>) -> RunState {
    let now = Instant::now();
    let (commands, state) = from_effects(app, effects, now);
    run_cmds(app, commands, now);
    state
}

fn execute_clipboard_set(app: &mut App, text: String, now: Instant) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => app.set_status(format!("Copied {text}"), StatusLevel::Info, now),
        Err(error) => {
            warn!(%error, "clipboard write failed");
            app.set_status(format!("Clipboard error: {error}"), StatusLevel::Error, now);
        }
    }
}

fn execute_open_mail_composer(app: &mut App, url: &str, now: Instant) {
    match open_mail_composer(url) {
        Ok(()) => app.set_status("Opening mail composer…", StatusLevel::Info, now),
        Err(error) => {
            warn!(%error, "mail composer failed to open");
            app.set_status(format!("Could not open mail composer: {error}"), StatusLevel::Error, now);
        }
    }
}

fn execute_persist_theme(app: &mut App, theme_id: String, now: Instant) {
    debug!(theme = %theme_id, path = %app.preferences.path().display(), "persisting theme");
    if let Err(error) = app.preferences.set_preferred_theme(Some(theme_id)) {
        warn!(%error, "failed to persist theme preference");
        app.set_status(format!("Theme not saved: {error}"), StatusLevel::Error, now);
    }
}
