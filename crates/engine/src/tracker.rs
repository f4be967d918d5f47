//! Scroll-driven active-section tracking.
//!
//! The tracker owns the single piece of navigation state, the active
//! section. On each scroll event it moves a reference point to
//! `scroll_offset + fixed_offset` (just below the sticky header) and picks
//! the first registered section whose span contains it.
//!
//! Listener lifecycle is explicit: [`ActiveSectionTracker::attach`] hands out
//! a [`ScrollSubscription`] and events are only processed while that guard
//! is alive. Dropping the guard detaches the listener on every exit path,
//! including `?` early returns and unwinding.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use folio_registry::SectionRegistry;
use folio_types::SectionId;
use tracing::{debug, trace};

use crate::GeometryProvider;

/// Generation value meaning "no listener attached".
const DETACHED: u64 = 0;

/// Result of feeding one scroll event to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The active section switched to this id.
    Changed(SectionId),
    /// Recomputed; the active section stayed the same (including no match).
    Unchanged,
    /// Throttled; the offset is kept and applied by `flush_pending`.
    Deferred,
    /// No listener attached; the event was ignored.
    Detached,
}

/// Guard representing an attached scroll listener.
///
/// Re-attaching replaces the previous subscription: the older guard then
/// becomes inert and dropping it no longer detaches anything.
#[derive(Debug)]
#[must_use = "dropping the subscription detaches the scroll listener"]
pub struct ScrollSubscription {
    listener: Arc<AtomicU64>,
    generation: u64,
}

impl ScrollSubscription {
    /// Whether this guard is still the tracker's current listener.
    pub fn is_active(&self) -> bool {
        self.listener.load(Ordering::Acquire) == self.generation
    }

    /// Detaches the listener now instead of at end of scope.
    pub fn detach(self) {}
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if self
            .listener
            .compare_exchange(self.generation, DETACHED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            debug!("scroll listener detached");
        }
    }
}

/// Rate limit for recomputes. The latest skipped offset is kept so the
/// settled active section matches an unthrottled run.
#[derive(Debug, Clone)]
struct ScrollThrottle {
    interval: Duration,
    last_run: Option<Instant>,
    pending: Option<u32>,
}

impl ScrollThrottle {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: None,
        }
    }

    fn ready(&self, now: Instant) -> bool {
        self.last_run
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }
}

/// Tracks which section is under the reference point.
#[derive(Debug)]
pub struct ActiveSectionTracker {
    sections: Vec<SectionId>,
    fixed_offset: u32,
    active: Option<SectionId>,
    listener: Arc<AtomicU64>,
    next_generation: u64,
    throttle: Option<ScrollThrottle>,
}

impl ActiveSectionTracker {
    /// Snapshots the registry order; the first section starts active.
    pub fn new(registry: &SectionRegistry, fixed_offset: u32) -> Self {
        let sections: Vec<SectionId> = registry.ids().cloned().collect();
        let active = sections.first().cloned();
        Self {
            sections,
            fixed_offset,
            active,
            listener: Arc::new(AtomicU64::new(DETACHED)),
            next_generation: 1,
            throttle: None,
        }
    }

    /// Limits recomputes to one per `interval`; `None` recomputes on every event.
    pub fn with_throttle(mut self, interval: Option<Duration>) -> Self {
        self.throttle = interval.filter(|d| !d.is_zero()).map(ScrollThrottle::new);
        self
    }

    /// Starts listening for scroll events.
    pub fn attach(&mut self) -> ScrollSubscription {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.listener.store(generation, Ordering::Release);
        debug!(sections = self.sections.len(), fixed_offset = self.fixed_offset, "scroll listener attached");
        ScrollSubscription {
            listener: Arc::clone(&self.listener),
            generation,
        }
    }

    /// Detaches whichever subscription is current.
    pub fn detach(&mut self) {
        if self.listener.swap(DETACHED, Ordering::AcqRel) != DETACHED {
            debug!("scroll listener detached");
        }
        if let Some(throttle) = self.throttle.as_mut() {
            throttle.pending = None;
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listener.load(Ordering::Acquire) != DETACHED
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_ref().is_some_and(|active| active.as_str() == id)
    }

    /// The y-coordinate tested against section spans for a scroll offset.
    pub fn reference_point(&self, scroll_offset: u32) -> u32 {
        scroll_offset.saturating_add(self.fixed_offset)
    }

    /// Handles one scroll event.
    pub fn on_scroll(&mut self, scroll_offset: u32, geometry: &dyn GeometryProvider) -> ScrollOutcome {
        self.on_scroll_at(scroll_offset, geometry, Instant::now())
    }

    /// Handles one scroll event observed at `now` (throttling uses the timestamp).
    pub fn on_scroll_at(&mut self, scroll_offset: u32, geometry: &dyn GeometryProvider, now: Instant) -> ScrollOutcome {
        if !self.is_attached() {
            trace!(scroll_offset, "scroll event ignored; listener detached");
            return ScrollOutcome::Detached;
        }
        if let Some(throttle) = self.throttle.as_mut() {
            if !throttle.ready(now) {
                throttle.pending = Some(scroll_offset);
                return ScrollOutcome::Deferred;
            }
            throttle.last_run = Some(now);
            throttle.pending = None;
        }
        self.recompute(scroll_offset, geometry)
    }

    /// Applies a deferred offset once the throttle interval has elapsed.
    pub fn flush_pending(&mut self, geometry: &dyn GeometryProvider, now: Instant) -> ScrollOutcome {
        if !self.is_attached() {
            return ScrollOutcome::Detached;
        }
        let Some(throttle) = self.throttle.as_mut() else {
            return ScrollOutcome::Unchanged;
        };
        let Some(offset) = throttle.pending else {
            return ScrollOutcome::Unchanged;
        };
        if !throttle.ready(now) {
            return ScrollOutcome::Deferred;
        }
        throttle.last_run = Some(now);
        throttle.pending = None;
        self.recompute(offset, geometry)
    }

    pub fn has_pending(&self) -> bool {
        self.throttle.as_ref().is_some_and(|throttle| throttle.pending.is_some())
    }

    fn recompute(&mut self, scroll_offset: u32, geometry: &dyn GeometryProvider) -> ScrollOutcome {
        let reference_point = self.reference_point(scroll_offset);
        let hit = self
            .sections
            .iter()
            .find(|id| geometry.bounds_of(id).is_some_and(|bounds| bounds.contains(reference_point)));

        match hit {
            Some(id) if self.active.as_ref() != Some(id) => {
                debug!(section = %id, scroll_offset, reference_point, "active section changed");
                self.active = Some(id.clone());
                ScrollOutcome::Changed(id.clone())
            }
            Some(_) => ScrollOutcome::Unchanged,
            None => {
                trace!(scroll_offset, reference_point, "no section under reference point");
                ScrollOutcome::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use folio_types::{SectionBounds, SectionDescriptor};

    use super::*;

    fn registry(ids: &[&str]) -> SectionRegistry {
        SectionRegistry::new(ids.iter().map(|id| SectionDescriptor::new(*id, *id, "")).collect()).expect("registry")
    }

    fn geometry(entries: &[(&str, u32, u32)]) -> HashMap<SectionId, SectionBounds> {
        entries
            .iter()
            .map(|(id, top, height)| (SectionId::from(*id), SectionBounds::new(*top, *height)))
            .collect()
    }

    #[test]
    fn home_about_scenario() {
        let mut tracker = ActiveSectionTracker::new(&registry(&["home", "about"]), 100);
        let geometry = geometry(&[("home", 0, 800), ("about", 800, 600)]);
        let _subscription = tracker.attach();

        assert_eq!(tracker.on_scroll(750, &geometry), ScrollOutcome::Changed("about".into()));
        assert!(tracker.is_active("about"));

        assert_eq!(tracker.on_scroll(0, &geometry), ScrollOutcome::Changed("home".into()));
        assert!(tracker.is_active("home"));

        assert_eq!(tracker.on_scroll(2000, &geometry), ScrollOutcome::Unchanged);
        assert!(tracker.is_active("home"));
    }

    #[test]
    fn starts_on_first_section_and_empty_registry_has_none() {
        let tracker = ActiveSectionTracker::new(&registry(&["a", "b"]), 0);
        assert_eq!(tracker.active_section().map(SectionId::as_str), Some("a"));

        let tracker = ActiveSectionTracker::new(&registry(&[]), 0);
        assert_eq!(tracker.active_section(), None);
    }

    #[test]
    fn overlapping_spans_prefer_registry_order() {
        let mut tracker = ActiveSectionTracker::new(&registry(&["first", "second", "third"]), 0);
        let geometry = geometry(&[("third", 0, 100), ("second", 50, 100), ("first", 60, 100)]);
        let _subscription = tracker.attach();

        // Only `third` covers 10; every span covers 70.
        assert_eq!(tracker.on_scroll(10, &geometry), ScrollOutcome::Changed("third".into()));
        assert_eq!(tracker.on_scroll(70, &geometry), ScrollOutcome::Changed("first".into()));
        assert_eq!(tracker.on_scroll(55, &geometry), ScrollOutcome::Changed("second".into()));
        assert_eq!(tracker.on_scroll(70, &geometry), ScrollOutcome::Changed("first".into()));
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let mut tracker = ActiveSectionTracker::new(&registry(&["home", "about", "contact"]), 0);
        let geometry = geometry(&[("home", 0, 10), ("contact", 10, 10)]);
        let _subscription = tracker.attach();

        assert_eq!(tracker.on_scroll(12, &geometry), ScrollOutcome::Changed("contact".into()));
    }

    #[test]
    fn reference_point_saturates() {
        let tracker = ActiveSectionTracker::new(&registry(&["home"]), 10);
        assert_eq!(tracker.reference_point(u32::MAX - 3), u32::MAX);
    }

    #[test]
    fn events_before_attach_and_after_detach_are_ignored() {
        let mut tracker = ActiveSectionTracker::new(&registry(&["home", "about"]), 0);
        let geometry = geometry(&[("home", 0, 10), ("about", 10, 10)]);

        assert_eq!(tracker.on_scroll(15, &geometry), ScrollOutcome::Detached);
        assert!(tracker.is_active("home"));

        let subscription = tracker.attach();
        assert!(subscription.is_active());
        assert_eq!(tracker.on_scroll(15, &geometry), ScrollOutcome::Changed("about".into()));

        drop(subscription);
        assert!(!tracker.is_attached());
        assert_eq!(tracker.on_scroll(0, &geometry), ScrollOutcome::Detached);
        assert!(tracker.is_active("about"));
    }

    #[test]
    fn explicit_detach_stops_recomputation() {
        let mut tracker = ActiveSectionTracker::new(&registry(&["home", "about"]), 0);
        let geometry = geometry(&[("home", 0, 10), ("about", 10, 10)]);
        let subscription = tracker.attach();

        tracker.detach();
        assert!(!subscription.is_active());
        assert_eq!(tracker.on_scroll(15, &geometry), ScrollOutcome::Detached);
        assert!(tracker.is_active("home"));
    }

    #[test]
    fn stale_subscription_does_not_detach_newer_one() {
        let mut tracker = ActiveSectionTracker::new(&registry(&["home"]), 0);
        let first = tracker.attach();
        let second = tracker.attach();
        assert!(!first.is_active());

        drop(first);
        assert!(tracker.is_attached());
        second.detach();
        assert!(!tracker.is_attached());
    }

    #[test]
    fn subscription_detaches_during_unwinding() {
        let mut tracker = ActiveSectionTracker::new(&registry(&["home"]), 0);
        let subscription = tracker.attach();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = subscription;
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert!(!tracker.is_attached());
    }

    #[test]
    fn throttled_tracking_settles_to_unthrottled_value() {
        let interval = Duration::from_millis(50);
        let mut tracker =
            ActiveSectionTracker::new(&registry(&["home", "about", "contact"]), 0).with_throttle(Some(interval));
        let geometry = geometry(&[("home", 0, 10), ("about", 10, 10), ("contact", 20, 10)]);
        let _subscription = tracker.attach();
        let start = Instant::now();

        assert_eq!(tracker.on_scroll_at(12, &geometry, start), ScrollOutcome::Changed("about".into()));
        assert_eq!(
            tracker.on_scroll_at(25, &geometry, start + Duration::from_millis(10)),
            ScrollOutcome::Deferred
        );
        assert!(tracker.is_active("about"));
        assert!(tracker.has_pending());

        assert_eq!(
            tracker.flush_pending(&geometry, start + Duration::from_millis(20)),
            ScrollOutcome::Deferred
        );
        assert_eq!(
            tracker.flush_pending(&geometry, start + interval),
            ScrollOutcome::Changed("contact".into())
        );
        assert!(!tracker.has_pending());
    }

    #[test]
    fn zero_throttle_is_disabled() {
        let mut tracker = ActiveSectionTracker::new(&registry(&["home", "about"]), 0).with_throttle(Some(Duration::ZERO));
        let geometry = geometry(&[("home", 0, 10), ("about", 10, 10)]);
        let _subscription = tracker.attach();
        let now = Instant::now();
        assert_eq!(tracker.on_scroll_at(15, &geometry, now), ScrollOutcome::Changed("about".into()));
        assert_eq!(tracker.on_scroll_at(0, &geometry, now), ScrollOutcome::Changed("home".into()));
    }
}
