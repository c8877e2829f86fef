use std::time::Duration;

use crate::timing::{step, Timed, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Window after an index change during which further changes are dropped.
    pub settle: Duration,
    pub autoplay_period: Duration,
    /// Autoplay stays off this long after the last user interaction.
    pub cooldown: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(600),
            autoplay_period: Duration::from_millis(4000),
            cooldown: Duration::from_millis(10_000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Transitioning,
    SameIndex,
    OutOfRange,
    Empty,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Moved { from: usize, to: usize },
    Dropped(DropReason),
}

impl Move {
    pub fn is_moved(&self) -> bool {
        matches!(self, Move::Moved { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Settled,
    AutoplayResumed,
    Advanced { from: usize, to: usize },
    /// An autoplay tick landed inside a settle window and was discarded.
    AutoplaySkipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselWindow {
    pub previous: usize,
    pub current: usize,
    pub next: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current: usize,
    pub autoplay_enabled: bool,
    pub paused: bool,
    pub transitioning: bool,
}

/// What is holding the carousel still.
///
/// Only keyboard focus counts. A button focused by a click or tap stays focused after
/// the pointer leaves, and must not keep autoplay stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseSources {
    pub hovered: bool,
    pub keyboard_focus: bool,
}

impl PauseSources {
    /// Focus entered the carousel; `focus_visible` is the `:focus-visible` match.
    pub fn focus(&mut self, focus_visible: bool) {
        self.keyboard_focus = focus_visible;
    }

    pub fn blur(&mut self) {
        self.keyboard_focus = false;
    }

    pub fn paused(&self) -> bool {
        self.hovered || self.keyboard_focus
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current: usize,
    settle: Duration,
    period: Duration,
    cooldown: Duration,
    autoplay_enabled: bool,
    paused: bool,
    settle_until: Option<Timestamp>,
    cooldown_until: Option<Timestamp>,
    next_tick: Option<Timestamp>,
}

impl Carousel {
    /// A carousel over `len` items, showing the first one, with autoplay running.
    pub fn new(len: usize, config: CarouselConfig, now: Timestamp) -> Self {
        let mut carousel = Self {
            len,
            current: 0,
            settle: step(config.settle),
            period: step(config.autoplay_period),
            cooldown: step(config.cooldown),
            autoplay_enabled: true,
            paused: false,
            settle_until: None,
            cooldown_until: None,
            next_tick: None,
        };
        carousel.arm_autoplay(now);
        carousel
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.settle_until.is_some()
    }

    /// Autoplay is enabled and not paused.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_enabled && !self.paused
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current: self.current,
            autoplay_enabled: self.autoplay_enabled,
            paused: self.paused,
            transitioning: self.is_transitioning(),
        }
    }

    pub fn window(&self) -> Option<CarouselWindow> {
        if self.len == 0 {
            return None;
        }
        Some(CarouselWindow {
            previous: (self.current + self.len - 1) % self.len,
            current: self.current,
            next: (self.current + 1) % self.len,
        })
    }

    pub fn next(&mut self, now: Timestamp) -> Move {
        match self.gate(now) {
            Some(reason) => self.reject(reason),
            None => self.move_to(now, (self.current + 1) % self.len),
        }
    }

    pub fn previous(&mut self, now: Timestamp) -> Move {
        match self.gate(now) {
            Some(reason) => self.reject(reason),
            None => self.move_to(now, (self.current + self.len - 1) % self.len),
        }
    }

    pub fn go_to(&mut self, now: Timestamp, index: usize) -> Move {
        if let Some(reason) = self.gate(now) {
            return self.reject(reason);
        }
        if index >= self.len {
            return self.reject(DropReason::OutOfRange);
        }
        if index == self.current {
            return self.reject(DropReason::SameIndex);
        }
        self.move_to(now, index)
    }

    /// Turn autoplay off until the cooldown has passed since the latest interaction.
    pub fn user_interacted(&mut self, now: Timestamp) {
        self.autoplay_enabled = false;
        self.next_tick = None;
        self.cooldown_until = Some(now + self.cooldown);
    }

    /// Hover/focus pause. Releasing restarts the autoplay period from `now`.
    pub fn set_paused(&mut self, now: Timestamp, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        if paused {
            self.next_tick = None;
        } else {
            self.arm_autoplay(now);
        }
    }

    fn arm_autoplay(&mut self, now: Timestamp) {
        self.next_tick = if self.is_autoplaying() && self.len > 1 {
            Some(now + self.period)
        } else {
            None
        };
    }

    fn gate(&self, now: Timestamp) -> Option<DropReason> {
        if self.len == 0 {
            Some(DropReason::Empty)
        } else if self.settle_until.is_some_and(|t| now < t) {
            Some(DropReason::Transitioning)
        } else {
            None
        }
    }

    fn reject(&self, reason: DropReason) -> Move {
        log::debug!("carousel request dropped: {reason:?}");
        Move::Dropped(reason)
    }

    fn move_to(&mut self, now: Timestamp, to: usize) -> Move {
        let from = self.current;
        self.current = to;
        self.settle_until = Some(now + self.settle);
        Move::Moved { from, to }
    }
}

#[derive(Clone, Copy)]
enum Deadline {
    Settle,
    Cooldown,
    Autoplay,
}

impl Timed for Carousel {
    type Output = CarouselEvent;

    fn next_deadline(&self) -> Option<Timestamp> {
        [self.settle_until, self.cooldown_until, self.next_tick]
            .into_iter()
            .flatten()
            .min()
    }

    fn fire(&mut self, now: Timestamp) -> Option<CarouselEvent> {
        // ties resolve in declaration order: settle, cooldown, autoplay
        let (at, which) = [
            (self.settle_until, Deadline::Settle),
            (self.cooldown_until, Deadline::Cooldown),
            (self.next_tick, Deadline::Autoplay),
        ]
        .into_iter()
        .filter_map(|(t, d)| t.filter(|t| *t <= now).map(|t| (t, d)))
        .min_by_key(|(t, _)| *t)?;

        let event = match which {
            Deadline::Settle => {
                self.settle_until = None;
                CarouselEvent::Settled
            }
            Deadline::Cooldown => {
                self.cooldown_until = None;
                self.autoplay_enabled = true;
                self.arm_autoplay(at);
                CarouselEvent::AutoplayResumed
            }
            Deadline::Autoplay => {
                self.next_tick = Some(at + self.period);
                match self.next(at) {
                    Move::Moved { from, to } => CarouselEvent::Advanced { from, to },
                    Move::Dropped(_) => CarouselEvent::AutoplaySkipped,
                }
            }
        };
        Some(event)
    }
}
