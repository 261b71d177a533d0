//! Delayed and repeating callbacks behind an injectable [`Scheduler`].
//!
//! The browser implementation sits on `gloo-timers`. Tests drive the
//! controllers with a virtual clock instead of waiting on wall time.

use gloo_timers::callback::{Interval, Timeout};

/// Owns a scheduled callback. Cancelling or dropping the handle unschedules it.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

pub trait Scheduler {
    /// Runs `task` once after `delay_ms`.
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle;

    /// Runs `task` every `period_ms` until the handle goes away.
    fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TimerHandle;
}

/// `setTimeout`/`setInterval` on the page's window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        let timeout = Timeout::new(delay_ms, task);
        TimerHandle::new(move || drop(timeout))
    }

    fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TimerHandle {
        let interval = Interval::new(period_ms, task);
        TimerHandle::new(move || drop(interval))
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::{Scheduler, TimerHandle};

    enum Job {
        Once(Box<dyn FnOnce()>),
        Every(Rc<RefCell<Box<dyn FnMut()>>>, u64),
    }

    struct Entry {
        id: u64,
        due: u64,
        seq: u64,
        job: Job,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        next_seq: u64,
        entries: Vec<Entry>,
    }

    impl Clock {
        fn push(&mut self, id: u64, due: u64, job: Job) {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.entries.push(Entry { id, due, seq, job });
        }
    }

    enum Fired {
        Once(Box<dyn FnOnce()>),
        Every(Rc<RefCell<Box<dyn FnMut()>>>),
    }

    /// Virtual clock. Nothing runs until the test calls [`advance`](Self::advance).
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().entries.len()
        }

        /// Moves time forward, firing every callback that falls due on the way
        /// in deadline order.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let fired = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, entry)| entry.due <= target)
                        .min_by_key(|(_, entry)| (entry.due, entry.seq))
                        .map(|(index, _)| index);
                    let Some(index) = next else {
                        clock.now = target;
                        break;
                    };
                    let entry = clock.entries.remove(index);
                    clock.now = entry.due;
                    match entry.job {
                        Job::Once(task) => Fired::Once(task),
                        Job::Every(task, period) => {
                            clock.push(entry.id, entry.due + period, Job::Every(task.clone(), period));
                            Fired::Every(task)
                        }
                    }
                };
                match fired {
                    Fired::Once(task) => task(),
                    Fired::Every(task) => {
                        let mut task = task.borrow_mut();
                        (&mut *task)()
                    }
                }
            }
        }

        fn register(&self, delay_ms: u32, job: Job) -> TimerHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.push(id, due, job);
            drop(clock);

            let weak: Weak<RefCell<Clock>> = Rc::downgrade(&self.clock);
            TimerHandle::new(move || {
                if let Some(clock) = weak.upgrade() {
                    clock.borrow_mut().entries.retain(|entry| entry.id != id);
                }
            })
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
            self.register(delay_ms, Job::Once(task))
        }

        fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TimerHandle {
            let period = u64::from(period_ms.max(1));
            self.register(period_ms.max(1), Job::Every(Rc::new(RefCell::new(task)), period))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn once_fires_at_its_deadline_and_not_before() {
        let clock = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let _handle = clock.schedule_once(100, Box::new(move || flag.set(true)));

        clock.advance(99);
        assert!(!fired.get());
        clock.advance(1);
        assert!(fired.get());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn repeating_fires_every_period() {
        let clock = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let _handle = clock.schedule_repeating(10, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(35);
        assert_eq!(ticks.get(), 3);
        assert_eq!(clock.now(), 35);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let clock = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let handle = clock.schedule_repeating(10, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(10);
        drop(handle);
        clock.advance(100);
        assert_eq!(ticks.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn explicit_cancel_before_deadline() {
        let clock = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = clock.schedule_once(5, Box::new(move || flag.set(true)));

        handle.cancel();
        clock.advance(10);
        assert!(!fired.get());
    }
}
