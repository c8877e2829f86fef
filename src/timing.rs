//! Deadline-driven timing shared by every page controller.
//!
//! Controllers never own a timer. They expose the next instant at which they need
//! attention and the host fires them when that instant arrives. Tests drive them
//! with a virtual clock.

use std::ops::Add;
use std::time::Duration;

/// Smallest step any controller will schedule.
pub const MIN_STEP: Duration = Duration::from_millis(1);

/// Milliseconds since the host's time origin (`performance.now()` in the browser).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, or zero if `earlier` is in the future.
    pub fn saturating_since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Self::Output {
        let ms = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(ms))
    }
}

/// Clamp a configured step so a controller always moves its deadline forward.
pub fn step(d: Duration) -> Duration {
    d.max(MIN_STEP)
}

/// A state machine driven by deadlines.
pub trait Timed {
    type Output;

    /// The next instant at which `fire` has work to do.
    fn next_deadline(&self) -> Option<Timestamp>;

    /// Process at most one deadline that is due at `now`.
    fn fire(&mut self, now: Timestamp) -> Option<Self::Output>;
}

/// Fire every deadline at or before `now`, oldest first.
///
/// Each deadline is fired at its own timestamp rather than at `now`, so a late host
/// callback replays the schedule exactly as it would have happened on time.
pub fn drain_until<T: Timed>(timed: &mut T, now: Timestamp) -> Vec<(Timestamp, T::Output)> {
    let mut out = Vec::new();
    while let Some(at) = timed.next_deadline() {
        if at > now {
            break;
        }
        match timed.fire(at) {
            Some(o) => out.push((at, o)),
            None => {
                // deadline reported due but nothing fired; avoid spinning
                log::warn!("timed controller did not advance at {}ms", at.as_millis());
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        at: Option<Timestamp>,
        left: u32,
    }

    impl Timed for Countdown {
        type Output = u32;

        fn next_deadline(&self) -> Option<Timestamp> {
            self.at
        }

        fn fire(&mut self, now: Timestamp) -> Option<u32> {
            let at = self.at?;
            if now < at {
                return None;
            }
            self.left -= 1;
            self.at = if self.left == 0 {
                None
            } else {
                Some(at + Duration::from_millis(10))
            };
            Some(self.left)
        }
    }

    #[test]
    fn test_timestamp_arithmetic() {
        let t = Timestamp::from_millis(100);
        assert_eq!((t + Duration::from_millis(50)).as_millis(), 150);
        assert_eq!(t.saturating_since(Timestamp::from_millis(40)), Duration::from_millis(60));
        assert_eq!(t.saturating_since(Timestamp::from_millis(400)), Duration::ZERO);
    }

    #[test]
    fn test_drain_fires_in_deadline_order() {
        let mut c = Countdown {
            at: Some(Timestamp::from_millis(10)),
            left: 3,
        };
        // only the first two deadlines are due
        let fired = drain_until(&mut c, Timestamp::from_millis(25));
        let times: Vec<u64> = fired.iter().map(|(t, _)| t.as_millis()).collect();
        assert_eq!(times, vec![10, 20]);
        assert_eq!(c.next_deadline(), Some(Timestamp::from_millis(30)));

        let rest = drain_until(&mut c, Timestamp::from_millis(1000));
        assert_eq!(rest, vec![(Timestamp::from_millis(30), 0)]);
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn test_step_never_zero() {
        assert_eq!(step(Duration::ZERO), MIN_STEP);
        assert_eq!(step(Duration::from_millis(80)), Duration::from_millis(80));
    }
}
