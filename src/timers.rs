//! Binds [`Timed`] controllers to host timeouts for the lifetime of a reactive owner.

use std::time::Duration;

use leptos::prelude::*;

use crate::timing::{drain_until, Timed, Timestamp};

/// Host clock: `performance.now()` in the browser, zero while server rendering.
#[cfg(feature = "hydrate")]
pub fn now() -> Timestamp {
    let ms = window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_default();
    Timestamp::from_millis(ms.max(0.0) as u64)
}

#[cfg(not(feature = "hydrate"))]
pub fn now() -> Timestamp {
    Timestamp::ZERO
}

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// One-shot timeouts supplied by the host.
pub trait Scheduler: Copy + Send + Sync + 'static {
    type Handle: Send + Sync + 'static;

    fn now(&self) -> Timestamp;

    /// Run `task` once after `delay`. `None` if the host refused the timer.
    fn schedule(&self, delay: Duration, task: Task) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn now(&self) -> Timestamp {
        now()
    }

    fn schedule(&self, delay: Duration, task: Task) -> Option<TimeoutHandle> {
        set_timeout_with_handle(task, delay)
            .map_err(|e| log::error!("failed to arm timer: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

type FireFn<T> = Box<dyn Fn(&T, <T as Timed>::Output) + Send + Sync>;

/// Owns a [`Timed`] controller and keeps exactly one host timeout armed for its
/// next deadline. The timeout is cancelled when the owning scope is cleaned up.
pub struct TimerDriver<T, S = BrowserScheduler>
where
    T: Timed + Send + Sync + 'static,
    T::Output: 'static,
    S: Scheduler,
{
    timed: StoredValue<T>,
    handle: StoredValue<Option<S::Handle>>,
    on_fire: StoredValue<FireFn<T>>,
    scheduler: S,
}

impl<T, S> Clone for TimerDriver<T, S>
where
    T: Timed + Send + Sync + 'static,
    T::Output: 'static,
    S: Scheduler,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for TimerDriver<T, S>
where
    T: Timed + Send + Sync + 'static,
    T::Output: 'static,
    S: Scheduler,
{
}

impl<T> TimerDriver<T>
where
    T: Timed + Send + Sync + 'static,
    T::Output: 'static,
{
    /// Browser timers, armed once the component has hydrated.
    ///
    /// `on_fire` sees the controller after each output it produces.
    pub fn new<F>(timed: T, on_fire: F) -> Self
    where
        F: Fn(&T, T::Output) + Send + Sync + 'static,
    {
        let driver = Self::with_scheduler(BrowserScheduler, timed, on_fire);
        Effect::watch(|| (), move |_, _, _| driver.arm(), true);
        driver
    }
}

impl<T, S> TimerDriver<T, S>
where
    T: Timed + Send + Sync + 'static,
    T::Output: 'static,
    S: Scheduler,
{
    /// Nothing is armed until the first [`arm`](Self::arm) or [`update`](Self::update).
    pub fn with_scheduler<F>(scheduler: S, timed: T, on_fire: F) -> Self
    where
        F: Fn(&T, T::Output) + Send + Sync + 'static,
    {
        let driver = Self {
            timed: StoredValue::new(timed),
            handle: StoredValue::new(None),
            on_fire: StoredValue::new(Box::new(on_fire) as FireFn<T>),
            scheduler,
        };
        on_cleanup(move || driver.cancel());
        driver
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.timed.try_with_value(f)
    }

    /// Apply an event at the current time, after replaying anything already due.
    pub fn update<R>(&self, f: impl FnOnce(&mut T, Timestamp) -> R) -> Option<R> {
        let now = self.scheduler.now();
        self.run_due(now);
        let out = self.timed.try_update_value(|t| f(t, now));
        self.arm();
        out
    }

    pub fn cancel(&self) {
        if let Some(Some(handle)) = self.handle.try_update_value(Option::take) {
            self.scheduler.cancel(handle);
        }
    }

    /// Replace any pending timeout with one for the controller's next deadline.
    pub fn arm(&self) {
        self.cancel();
        let Some(deadline) = self.timed.try_with_value(|t| t.next_deadline()).flatten() else {
            return;
        };
        let driver = *self;
        let delay = deadline.saturating_since(self.scheduler.now());
        if let Some(handle) = self
            .scheduler
            .schedule(delay, Box::new(move || driver.on_timeout()))
        {
            self.handle.try_update_value(|h| *h = Some(handle));
        }
    }

    fn on_timeout(&self) {
        self.handle.try_update_value(|h| *h = None);
        self.run_due(self.scheduler.now());
        self.arm();
    }

    fn run_due(&self, now: Timestamp) {
        let Some(outputs) = self.timed.try_update_value(|t| drain_until(t, now)) else {
            return;
        };
        for (_, output) in outputs {
            self.timed.try_with_value(|t| {
                self.on_fire.try_with_value(|f| f(t, output));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::contact::{ContactBanner, ContactStatus};
    use crate::typewriter::{Typewriter, TypewriterConfig};

    #[derive(Default)]
    struct Host {
        now: u64,
        next_id: u64,
        pending: Vec<(u64, Timestamp, Task)>,
        cancelled: Vec<u64>,
    }

    /// Virtual clock whose timeouts only run when the test advances it.
    #[derive(Clone, Copy)]
    struct ManualScheduler(&'static Mutex<Host>);

    impl ManualScheduler {
        fn new() -> Self {
            Self(Box::leak(Box::default()))
        }

        fn pending(&self) -> Vec<u64> {
            self.0.lock().unwrap().pending.iter().map(|(id, _, _)| *id).collect()
        }

        fn cancelled(&self) -> Vec<u64> {
            self.0.lock().unwrap().cancelled.clone()
        }

        fn advance_to(&self, ms: u64) {
            self.0.lock().unwrap().now = ms;
            loop {
                // take the task out before running it; it will schedule again
                let task = {
                    let mut host = self.0.lock().unwrap();
                    let due = host
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, (_, at, _))| at.as_millis() <= ms)
                        .min_by_key(|(_, (_, at, _))| *at)
                        .map(|(i, _)| i);
                    due.map(|i| host.pending.remove(i).2)
                };
                match task {
                    Some(task) => task(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u64;

        fn now(&self) -> Timestamp {
            Timestamp::from_millis(self.0.lock().unwrap().now)
        }

        fn schedule(&self, delay: Duration, task: Task) -> Option<u64> {
            let mut host = self.0.lock().unwrap();
            let id = host.next_id;
            host.next_id += 1;
            let at = Timestamp::from_millis(host.now) + delay;
            host.pending.push((id, at, task));
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            let mut host = self.0.lock().unwrap();
            host.pending.retain(|(id, _, _)| *id != handle);
            host.cancelled.push(handle);
        }
    }

    fn typewriter(text: &str) -> Typewriter {
        Typewriter::new(
            TypewriterConfig {
                text: text.to_string(),
                delay: Duration::ZERO,
                speed: Duration::from_millis(100),
            },
            Timestamp::ZERO,
        )
    }

    #[test]
    fn test_disposing_owner_cancels_pending_timer() {
        let host = ManualScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();

        let counter = Arc::clone(&fired);
        let driver = owner.with(|| {
            TimerDriver::with_scheduler(host, typewriter("abc"), move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        });
        driver.arm();
        assert_eq!(host.pending(), vec![0]);

        host.advance_to(100);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        let armed = host.pending();
        assert_eq!(armed.len(), 1);

        // component torn down mid-animation
        owner.cleanup();
        assert!(host.pending().is_empty());
        assert_eq!(host.cancelled(), armed);

        host.advance_to(1_000);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(driver.with(Typewriter::state).is_none());
    }

    #[test]
    fn test_only_one_timeout_is_armed() {
        let host = ManualScheduler::new();
        let owner = Owner::new();
        let driver = owner.with(|| TimerDriver::with_scheduler(host, typewriter("ab"), |_, _| {}));

        driver.arm();
        driver.arm();
        assert_eq!(host.pending(), vec![1]);
        assert_eq!(host.cancelled(), vec![0]);

        // the last tick completes the text and leaves nothing armed
        host.advance_to(200);
        assert!(host.pending().is_empty());
        assert_eq!(driver.with(Typewriter::is_complete), Some(true));
    }

    #[test]
    fn test_update_arms_banner_dismissal() {
        let host = ManualScheduler::new();
        let owner = Owner::new();
        let dismissed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&dismissed);
        let driver = owner.with(|| {
            TimerDriver::with_scheduler(host, ContactBanner::default(), move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        });

        host.advance_to(1_000);
        driver.update(|b, _| b.begin());
        assert!(host.pending().is_empty());

        driver.update(|b, now| b.finish(now, Ok::<(), String>(())));
        assert_eq!(host.pending().len(), 1);

        host.advance_to(5_999);
        assert_eq!(dismissed.load(Ordering::SeqCst), 0);
        host.advance_to(6_000);
        assert_eq!(dismissed.load(Ordering::SeqCst), 1);
        assert_eq!(
            driver.with(|b| b.status().clone()),
            Some(ContactStatus::Idle)
        );
    }
}
