//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input, resizes, and navigation
//!   animation frames.
//! - Route input to `MainView` and execute the returned `Effect`s.
//! - Hold the tracker's scroll subscription for exactly as long as the page
//!   is on screen.
//!
//! Event Loop Strategy
//! - A dedicated input task polls `crossterm` and forwards events over a
//!   channel, keeping poll/read on one thread.
//! - Smart ticking: a fast interval (~60 fps) only while a navigation
//!   animation, a throttled scroll, or a status message is live; a long
//!   interval when idle.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_registry::{FolioConfig, Portfolio};
use folio_types::{Effect, Msg};
use folio_util::UserPreferences;
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::cmd::{self, RunState};
use crate::ui::main_component::MainView;
use crate::ui::theme;

type Tui = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Spawn a task that polls terminal input and forwards `crossterm` events
/// over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    let mut last_mouse_move = Instant::now();

    tokio::task::spawn_blocking(move || {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            match event::poll(sixteen_ms) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                    continue;
                }
                Ok(true) => {}
                Err(error) => {
                    warn!("Failed to poll events: {}", error);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    // Throttle mouse moves to once per 16 ms.
                    let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < sixteen_ms {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if let Err(error) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(error.into());
    }
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restores the terminal before the default panic report is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Tui, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: loads the theme, sets up the terminal,
/// runs the event loop, and restores the terminal on every exit path.
pub async fn run_app(portfolio: Portfolio, config: FolioConfig) -> Result<()> {
    let preferences = UserPreferences::new().unwrap_or_else(|error| {
        warn!(%error, "preferences unavailable; theme changes will not be saved");
        UserPreferences::ephemeral()
    });
    let loaded_theme = theme::load(preferences.preferred_theme().as_deref());
    info!(theme = loaded_theme.definition.id, sections = portfolio.registry.len(), "starting folio");

    let mut app = App::new(portfolio, &config, preferences, loaded_theme);
    let mut main_view = MainView::new();

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    let cleanup = cleanup_terminal(&mut terminal);
    outcome.and(cleanup)
}

async fn event_loop(terminal: &mut Tui, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();

    let size = terminal.size()?;
    main_view.handle_message(app, Msg::Resize(size.width, size.height));
    // Detaches when this function returns, including on `?` and panics.
    let _subscription = app.attach_scroll_listener();

    let fast_interval = Duration::from_millis(16);
    let idle_interval = Duration::from_millis(1000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    loop {
        let target_interval = if app.needs_fast_tick() { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let effects = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed");
                    break;
                };
                handle_input_event(app, main_view, event)
            }
            _ = ticker.tick() => main_view.handle_message(app, Msg::Tick),
            _ = signal::ctrl_c() => break,
        };

        if !effects.is_empty() && cmd::run_from_effects(app, effects) == RunState::Exit {
            break;
        }
        render(terminal, app, main_view)?;
    }
    Ok(())
}
