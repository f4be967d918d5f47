//! Animated navigation to a section.
//!
//! `navigate_to` resolves a section's top and starts an eased scroll
//! towards it. The navigator only produces offsets; whoever owns the
//! viewport applies each frame and feeds the new offset to the tracker like
//! any other scroll event. The navigator never sets the active section.

use std::time::{Duration, Instant};

use folio_registry::SectionRegistry;
use folio_types::SectionId;
use tracing::{debug, trace};

use crate::GeometryProvider;

/// One sampled animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollFrame {
    pub offset: u32,
    /// The animation reached its destination with this frame.
    pub settled: bool,
}

/// Ease-in-out cubic over `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An in-flight scroll from one offset to another.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    target: SectionId,
    from: u32,
    to: u32,
    started_at: Instant,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(target: SectionId, from: u32, to: u32, started_at: Instant, duration: Duration) -> Self {
        Self {
            target,
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> &SectionId {
        &self.target
    }

    /// Offset at `now`; the final frame lands exactly on the destination.
    pub fn sample(&self, now: Instant) -> ScrollFrame {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return ScrollFrame {
                offset: self.to,
                settled: true,
            };
        }
        let progress = ease_in_out_cubic(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        let offset = (from + (to - from) * progress).round().clamp(0.0, f64::from(u32::MAX)) as u32;
        ScrollFrame { offset, settled: false }
    }
}

/// Starts and steps navigation animations.
#[derive(Debug, Clone)]
pub struct Navigator {
    duration: Duration,
    animation: Option<SmoothScroll>,
}

impl Navigator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            animation: None,
        }
    }

    /// Requests an animated scroll aligning `section_id`'s top with the viewport top.
    ///
    /// Returns `false` and changes nothing when the id is not registered or
    /// the section is not mounted. A running animation is replaced.
    pub fn navigate_to(
        &mut self,
        section_id: &str,
        registry: &SectionRegistry,
        geometry: &dyn GeometryProvider,
        current_offset: u32,
        now: Instant,
    ) -> bool {
        let Some(descriptor) = registry.get(section_id) else {
            debug!(section = section_id, "navigation ignored; unknown section");
            return false;
        };
        let Some(bounds) = geometry.bounds_of(&descriptor.id) else {
            debug!(section = section_id, "navigation ignored; section not mounted");
            return false;
        };
        debug!(section = section_id, from = current_offset, to = bounds.top, "navigating");
        self.animation = Some(SmoothScroll::new(
            descriptor.id.clone(),
            current_offset,
            bounds.top,
            now,
            self.duration,
        ));
        true
    }

    /// Advances the running animation, clearing it once it settles.
    pub fn sample(&mut self, now: Instant) -> Option<ScrollFrame> {
        let frame = self.animation.as_ref()?.sample(now);
        if frame.settled {
            trace!(offset = frame.offset, "navigation settled");
            self.animation = None;
        }
        Some(frame)
    }

    /// Cancels the running animation; returns whether one was running.
    pub fn interrupt(&mut self) -> bool {
        let interrupted = self.animation.take();
        if let Some(animation) = interrupted.as_ref() {
            debug!(section = %animation.target(), "navigation interrupted");
        }
        interrupted.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn target(&self) -> Option<&SectionId> {
        self.animation.as_ref().map(SmoothScroll::target)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use folio_types::{SectionBounds, SectionDescriptor};

    use super::*;

    fn fixture() -> (SectionRegistry, HashMap<SectionId, SectionBounds>) {
        let registry = SectionRegistry::new(vec![
            SectionDescriptor::new("home", "Home", "home"),
            SectionDescriptor::new("about", "About", "user"),
            SectionDescriptor::new("contact", "Contact", "mail"),
        ])
        .expect("registry");
        let geometry = HashMap::from([
            (SectionId::from("home"), SectionBounds::new(0, 40)),
            (SectionId::from("about"), SectionBounds::new(40, 30)),
        ]);
        (registry, geometry)
    }

    #[test]
    fn easing_is_monotonic_and_pinned() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < f64::EPSILON);
        let samples: Vec<f64> = (0..=10).map(|i| ease_in_out_cubic(f64::from(i) / 10.0)).collect();
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn animation_reaches_target_top() {
        let (registry, geometry) = fixture();
        let mut navigator = Navigator::new(Duration::from_millis(400));
        let start = Instant::now();

        assert!(navigator.navigate_to("about", &registry, &geometry, 0, start));
        assert_eq!(navigator.target().map(SectionId::as_str), Some("about"));

        let midway = navigator.sample(start + Duration::from_millis(200)).expect("frame");
        assert!(!midway.settled);
        assert_eq!(midway.offset, 20);

        let last = navigator.sample(start + Duration::from_millis(400)).expect("frame");
        assert_eq!(last, ScrollFrame { offset: 40, settled: true });
        assert!(!navigator.is_animating());
        assert_eq!(navigator.sample(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn scrolling_up_interpolates_downwards() {
        let (registry, geometry) = fixture();
        let mut navigator = Navigator::new(Duration::from_millis(100));
        let start = Instant::now();
        assert!(navigator.navigate_to("home", &registry, &geometry, 60, start));
        let frame = navigator.sample(start + Duration::from_millis(50)).expect("frame");
        assert_eq!(frame.offset, 30);
    }

    #[test]
    fn unknown_or_unmounted_targets_are_noops() {
        let (registry, geometry) = fixture();
        let mut navigator = Navigator::new(Duration::from_millis(100));
        let now = Instant::now();

        assert!(!navigator.navigate_to("missing", &registry, &geometry, 0, now));
        assert!(!navigator.navigate_to("contact", &registry, &geometry, 0, now));
        assert!(!navigator.is_animating());
    }

    #[test]
    fn failed_request_keeps_running_animation() {
        let (registry, geometry) = fixture();
        let mut navigator = Navigator::new(Duration::from_millis(100));
        let now = Instant::now();
        assert!(navigator.navigate_to("about", &registry, &geometry, 0, now));
        assert!(!navigator.navigate_to("contact", &registry, &geometry, 0, now));
        assert_eq!(navigator.target().map(SectionId::as_str), Some("about"));
    }

    #[test]
    fn zero_duration_jumps_on_first_frame() {
        let (registry, geometry) = fixture();
        let mut navigator = Navigator::new(Duration::ZERO);
        let now = Instant::now();
        assert!(navigator.navigate_to("about", &registry, &geometry, 0, now));
        assert_eq!(navigator.sample(now), Some(ScrollFrame { offset: 40, settled: true }));
    }

    #[test]
    fn interrupt_cancels_animation() {
        let (registry, geometry) = fixture();
        let mut navigator = Navigator::new(Duration::from_millis(100));
        let now = Instant::now();
        assert!(!navigator.interrupt());
        assert!(navigator.navigate_to("about", &registry, &geometry, 0, now));
        assert!(navigator.interrupt());
        assert_eq!(navigator.sample(now), None);
    }
}
