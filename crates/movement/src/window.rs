//! Time windows bounding how long spread zones stay active.

use std::time::Duration;

use tokio::time::Instant;

/// Wall-clock interval during which a spread's zones are live.
///
/// Windows are derived fresh on every controller invocation and never
/// persisted. The activation predicates handed to the avoidance subsystem
/// close over a copy of the window, so a zone cannot outlive it even if the
/// task that registered the zone is long gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpreadWindow {
    start: Instant,
    end: Instant,
}

impl SpreadWindow {
    /// Window opening now.
    pub fn open(duration: Duration) -> Self {
        Self::starting_at(Instant::now(), duration)
    }

    pub fn starting_at(start: Instant, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// True while `instant` falls inside the window, boundaries included.
    pub fn contains(&self, instant: Instant) -> bool {
        instant >= self.start && instant <= self.end
    }

    pub fn has_elapsed(&self) -> bool {
        Instant::now() > self.end
    }

    /// Time left until the window closes; zero once it has.
    pub fn remaining(&self) -> Duration {
        self.end.saturating_duration_since(Instant::now())
    }

    /// Predicate for the avoidance subsystem: true only while the current
    /// time is inside the window.
    pub fn activation_predicate(&self) -> impl Fn() -> bool + Send + Sync + 'static {
        let window = *self;
        move || window.contains(Instant::now())
    }
}
