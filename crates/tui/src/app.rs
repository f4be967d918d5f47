//! Application state for the Folio TUI.
//!
//! `App` owns the laid-out document, the viewport's scroll position, the
//! active-section tracker, and the navigator. Every change of the scroll
//! offset, whether it comes from a key, the mouse wheel, or a navigation
//! animation frame, goes through [`App::apply_offset`], which feeds the new
//! offset to the tracker. The navigation bar only reads the tracker.

use std::time::{Duration, Instant};

use folio_engine::{ActiveSectionTracker, Navigator, ScrollOutcome, ScrollSubscription, scroll_progress};
use folio_registry::{FolioConfig, Portfolio};
use folio_types::{Effect, Msg, SectionId};
use folio_util::UserPreferences;
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::{
    document::{DocumentLayout, has_renderer},
    ui::{
        components::{common::ScrollMetrics, nav_bar::SectionNavBarState},
        theme::{LoadedTheme, Theme, ThemeDefinition, catalog},
    },
};

/// How long a status message stays in the hint bar.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Which part of the screen receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    NavBar,
    #[default]
    Document,
}

impl FocusArea {
    pub fn toggled(self) -> Self {
        match self {
            Self::NavBar => Self::Document,
            Self::Document => Self::NavBar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Transient message shown in the hint bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub shown_at: Instant,
}

/// The main application state.
pub struct App {
    pub portfolio: Portfolio,
    pub layout: DocumentLayout,
    pub metrics: ScrollMetrics,
    pub tracker: ActiveSectionTracker,
    pub navigator: Navigator,
    pub nav_bar: SectionNavBarState,
    pub theme: Box<dyn Theme>,
    pub theme_definition: &'static ThemeDefinition,
    pub preferences: UserPreferences,
    pub focus: FocusArea,
    pub status: Option<StatusMessage>,
    screen: Rect,
}

impl App {
    pub fn new(portfolio: Portfolio, config: &FolioConfig, preferences: UserPreferences, theme: LoadedTheme) -> Self {
        for descriptor in portfolio.registry.iter().filter(|descriptor| !has_renderer(descriptor.id.as_str())) {
            warn!(section = %descriptor.id, "section has no content renderer; it will never become active");
        }
        let tracker = ActiveSectionTracker::new(&portfolio.registry, config.fixed_offset).with_throttle(config.scroll_throttle());
        let nav_bar = SectionNavBarState::from_registry(&portfolio.registry);
        Self {
            layout: DocumentLayout::default(),
            metrics: ScrollMetrics::default(),
            tracker,
            navigator: Navigator::new(config.smooth_scroll_duration()),
            nav_bar,
            theme: theme.theme,
            theme_definition: theme.definition,
            preferences,
            focus: FocusArea::default(),
            status: None,
            screen: Rect::default(),
            portfolio,
        }
    }

    /// Starts tracking scroll events; dropping the guard stops it.
    pub fn attach_scroll_listener(&mut self) -> ScrollSubscription {
        let subscription = self.tracker.attach();
        self.track(Instant::now());
        subscription
    }

    /// Processes an application message at the current instant.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        self.update_at(msg, Instant::now())
    }

    pub fn update_at(&mut self, msg: &Msg, now: Instant) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                self.advance_animation(now);
                if self.tracker.has_pending() {
                    let outcome = self.tracker.flush_pending(&self.layout, now);
                    self.report(outcome);
                }
                if self.status.as_ref().is_some_and(|status| now.saturating_duration_since(status.shown_at) >= STATUS_TTL) {
                    self.status = None;
                }
                Vec::new()
            }
            Msg::Resize(width, height) => {
                self.resize(*width, *height, now);
                Vec::new()
            }
            Msg::ScrollLines(delta) => self.manual_scroll(now, |metrics| metrics.scroll_lines(i32::from(*delta))),
            Msg::ScrollPages(delta) => self.manual_scroll(now, |metrics| metrics.scroll_pages(*delta)),
            Msg::ScrollToTop => self.manual_scroll(now, ScrollMetrics::scroll_to_top),
            Msg::ScrollToBottom => self.manual_scroll(now, ScrollMetrics::scroll_to_bottom),
            Msg::CycleTheme => self.cycle_theme(now),
        }
    }

    /// Re-lays the document out for a new terminal size, keeping the scroll offset.
    pub fn resize(&mut self, width: u16, height: u16, now: Instant) {
        let screen = Rect::new(0, 0, width, height);
        if screen == self.screen {
            return;
        }
        self.screen = screen;
        self.layout = crate::layout_for_terminal(&self.portfolio, width, height);
        self.metrics.resize(self.layout.content_height(), u32::from(self.layout.viewport_height()));

        // Section tops moved; restart a running animation towards the same target.
        if let Some(target) = self.navigator.target().cloned() {
            self.navigator
                .navigate_to(target.as_str(), &self.portfolio.registry, &self.layout, self.metrics.offset(), now);
        }
        self.track(now);
    }

    /// Starts a smooth scroll to `section_id`; returns `false` when the section cannot be reached.
    pub fn navigate_to(&mut self, section_id: &str, now: Instant) -> bool {
        let started = self
            .navigator
            .navigate_to(section_id, &self.portfolio.registry, &self.layout, self.metrics.offset(), now);
        if started {
            self.nav_bar.focus_section(&SectionId::from(section_id));
            // A zero-length animation settles on its first frame.
            self.advance_animation(now);
        } else {
            self.set_status(format!("Section '{section_id}' is not available"), StatusLevel::Error, now);
        }
        started
    }

    /// Applies the navigator's frame for `now`; returns whether an animation ran.
    pub fn advance_animation(&mut self, now: Instant) -> bool {
        let Some(frame) = self.navigator.sample(now) else {
            return false;
        };
        self.apply_offset(frame.offset, now);
        true
    }

    /// Moves the viewport and lets the tracker observe the new offset.
    pub fn apply_offset(&mut self, offset: u32, now: Instant) {
        self.metrics.set_offset(offset);
        self.track(now);
    }

    pub fn is_animating(&self) -> bool {
        self.navigator.is_animating()
    }

    /// Whether the runtime should tick quickly.
    pub fn needs_fast_tick(&self) -> bool {
        self.is_animating() || self.tracker.has_pending() || self.status.is_some()
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.tracker.active_section()
    }

    /// Fraction of the document scrolled past, for the header gauge.
    pub fn progress(&self) -> f64 {
        scroll_progress(self.metrics.offset(), self.metrics.max_offset())
    }

    pub fn contact_email(&self) -> &str {
        self.portfolio.content.contact.email.trim()
    }

    /// Section the hero's call to action leads to: the one registered after the hero.
    pub fn hero_target(&self) -> Option<&SectionId> {
        let registry = &self.portfolio.registry;
        let hero = registry.first()?;
        if !self.tracker.is_active(hero.id.as_str()) {
            return None;
        }
        registry.iter().nth(1).map(|descriptor| &descriptor.id)
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel, now: Instant) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            shown_at: now,
        });
    }

    fn manual_scroll(&mut self, now: Instant, scroll: impl FnOnce(&mut ScrollMetrics)) -> Vec<Effect> {
        // User input always wins over a running animation.
        self.navigator.interrupt();
        scroll(&mut self.metrics);
        self.track(now);
        Vec::new()
    }

    fn cycle_theme(&mut self, now: Instant) -> Vec<Effect> {
        if self.theme_definition.is_ansi_fallback {
            self.set_status("Theme switching needs a truecolor terminal", StatusLevel::Info, now);
            return Vec::new();
        }
        let next = catalog::next_after(self.theme_definition.id);
        debug!(from = self.theme_definition.id, to = next.id, "switching theme");
        self.theme = next.build();
        self.theme_definition = next;
        self.set_status(format!("Theme: {}", next.label), StatusLevel::Info, now);
        vec![Effect::PersistTheme(next.id.to_string())]
    }

    fn track(&mut self, now: Instant) {
        let outcome = self.tracker.on_scroll_at(self.metrics.offset(), &self.layout, now);
        self.report(outcome);
    }

    fn report(&self, outcome: ScrollOutcome) {
        if let ScrollOutcome::Changed(id) = outcome {
            debug!(section = %id, offset = self.metrics.offset(), "active section");
        }
    }
}

/// App over the embedded portfolio with the default palette and in-memory preferences.
#[cfg(test)]
pub(crate) fn test_app(config: FolioConfig) -> App {
    let portfolio = Portfolio::embedded().expect("embedded portfolio");
    let theme = LoadedTheme::from_definition(catalog::default_truecolor());
    App::new(portfolio, &config, UserPreferences::ephemeral(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_of(app: &App, id: &str) -> u32 {
        app.layout.bounds().get(id).map(|bounds| bounds.top).expect("section mounted")
    }

    #[test]
    fn scroll_events_before_attach_are_ignored() {
        let mut app = test_app(FolioConfig::default());
        let now = Instant::now();
        app.resize(100, 30, now);
        app.update_at(&Msg::ScrollToBottom, now);
        assert!(app.tracker.is_active("home"));

        let _subscription = app.attach_scroll_listener();
        app.update_at(&Msg::ScrollLines(0), now);
        assert!(app.tracker.is_active("contact"));
    }

    #[test]
    fn navigation_settles_with_target_active() {
        let mut app = test_app(FolioConfig::default());
        let start = Instant::now();
        app.resize(100, 30, start);
        let _subscription = app.attach_scroll_listener();

        assert!(app.navigate_to("skills", start));
        assert!(app.is_animating());
        assert!(app.tracker.is_active("home"));

        let mut now = start;
        let mut seen = Vec::new();
        while app.is_animating() {
            now += Duration::from_millis(16);
            app.update_at(&Msg::Tick, now);
            if let Some(active) = app.active_section()
                && seen.last() != Some(active)
            {
                seen.push(active.clone());
            }
        }

        assert_eq!(app.metrics.offset(), top_of(&app, "skills"));
        assert!(app.tracker.is_active("skills"));
        // Sections scrolled through on the way light up in order.
        assert!(seen.iter().any(|id| id.as_str() == "experience"));
        assert_eq!(seen.last().map(SectionId::as_str), Some("skills"));
    }

    #[test]
    fn zero_duration_navigation_jumps_immediately() {
        let config = FolioConfig {
            smooth_scroll_ms: 0,
            ..FolioConfig::default()
        };
        let mut app = test_app(config);
        let now = Instant::now();
        app.resize(100, 30, now);
        let _subscription = app.attach_scroll_listener();

        assert!(app.navigate_to("contact", now));
        assert!(!app.is_animating());
        assert!(app.tracker.is_active("contact"));
    }

    #[test]
    fn manual_scroll_interrupts_navigation() {
        let mut app = test_app(FolioConfig::default());
        let start = Instant::now();
        app.resize(100, 30, start);
        let _subscription = app.attach_scroll_listener();

        assert!(app.navigate_to("awards", start));
        app.update_at(&Msg::Tick, start + Duration::from_millis(100));
        app.update_at(&Msg::ScrollToTop, start + Duration::from_millis(120));
        assert!(!app.is_animating());

        app.update_at(&Msg::Tick, start + Duration::from_secs(2));
        assert_eq!(app.metrics.offset(), 0);
        assert!(app.tracker.is_active("home"));
    }

    #[test]
    fn unknown_section_navigation_is_a_noop() {
        let mut app = test_app(FolioConfig::default());
        let now = Instant::now();
        app.resize(100, 30, now);
        let _subscription = app.attach_scroll_listener();

        assert!(!app.navigate_to("gallery", now));
        assert!(!app.is_animating());
        assert_eq!(app.metrics.offset(), 0);
        assert_eq!(app.status.as_ref().map(|status| status.level), Some(StatusLevel::Error));
    }

    #[test]
    fn resize_keeps_offset_and_retracks() {
        let mut app = test_app(FolioConfig::default());
        let now = Instant::now();
        app.resize(120, 40, now);
        let _subscription = app.attach_scroll_listener();
        let education = top_of(&app, "education");
        app.apply_offset(education, now);
        assert!(app.tracker.is_active("education"));

        app.update_at(&Msg::Resize(40, 40), now);
        assert_eq!(app.metrics.offset(), education.min(app.metrics.max_offset()));
        let expected = app
            .layout
            .bounds()
            .iter()
            .find(|(_, bounds)| bounds.contains(app.tracker.reference_point(app.metrics.offset())))
            .map(|(id, _)| id.clone());
        assert_eq!(app.active_section().cloned(), expected);
    }

    #[test]
    fn throttled_scrolls_settle_on_tick() {
        let config = FolioConfig {
            scroll_throttle_ms: 50,
            ..FolioConfig::default()
        };
        let mut app = test_app(config);
        app.resize(100, 30, Instant::now());
        let _subscription = app.attach_scroll_listener();
        let start = Instant::now();

        let skills = top_of(&app, "skills");
        app.apply_offset(skills, start + Duration::from_millis(10));
        assert!(app.tracker.is_active("home"));
        assert!(app.needs_fast_tick());

        app.update_at(&Msg::Tick, start + Duration::from_millis(100));
        assert!(app.tracker.is_active("skills"));
    }

    #[test]
    fn hero_call_to_action_targets_next_section() {
        let mut app = test_app(FolioConfig::default());
        let now = Instant::now();
        app.resize(100, 30, now);
        let _subscription = app.attach_scroll_listener();
        assert_eq!(app.hero_target().map(SectionId::as_str), Some("about"));

        app.update_at(&Msg::ScrollToBottom, now);
        assert_eq!(app.hero_target(), None);
    }

    #[test]
    fn theme_cycling_requests_persistence() {
        let mut app = test_app(FolioConfig::default());
        let effects = app.update_at(&Msg::CycleTheme, Instant::now());
        assert_eq!(effects, vec![Effect::PersistTheme("dracula".into())]);
        assert_eq!(app.theme_definition.id, "dracula");
    }

    #[test]
    fn ansi_theme_cannot_cycle() {
        let portfolio = Portfolio::embedded().expect("embedded portfolio");
        let theme = LoadedTheme::from_definition(catalog::default_ansi());
        let mut app = App::new(portfolio, &FolioConfig::default(), UserPreferences::ephemeral(), theme);
        assert!(app.update_at(&Msg::CycleTheme, Instant::now()).is_empty());
        assert_eq!(app.theme_definition.id, "ansi256");
    }

    #[test]
    fn status_expires_on_tick() {
        let mut app = test_app(FolioConfig::default());
        let now = Instant::now();
        app.set_status("copied", StatusLevel::Info, now);
        app.update_at(&Msg::Tick, now + Duration::from_secs(1));
        assert!(app.status.is_some());
        app.update_at(&Msg::Tick, now + STATUS_TTL);
        assert!(app.status.is_none());
    }
}
