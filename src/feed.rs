//! Instagram feed with a local fallback.
//!
//! A [`FeedController`] races one remote embed load against a one-shot
//! timeout. The first of {loaded, failed, timed out} decides what the gallery
//! shows for the rest of the mount; later signals are ignored.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::timer::{Scheduler, TimerHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedState {
    Pending,
    RemoteLoaded,
    RemoteFailed,
    FallbackShown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedSignal {
    Loaded,
    Failed,
    TimedOut,
}

/// What the view renders for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedDisplay {
    Loading,
    Remote,
    Fallback,
}

impl FeedState {
    pub fn is_terminal(self) -> bool {
        matches!(self, FeedState::RemoteLoaded | FeedState::FallbackShown)
    }

    pub fn on(self, signal: FeedSignal) -> FeedState {
        match (self, signal) {
            (FeedState::Pending, FeedSignal::Loaded) => FeedState::RemoteLoaded,
            (FeedState::Pending, FeedSignal::Failed) => FeedState::RemoteFailed.settle(),
            (FeedState::Pending, FeedSignal::TimedOut) => FeedState::FallbackShown,
            (state, _) => state.settle(),
        }
    }

    // A failed load is never shown as such.
    fn settle(self) -> FeedState {
        match self {
            FeedState::RemoteFailed => FeedState::FallbackShown,
            state => state,
        }
    }

    pub fn display(self) -> FeedDisplay {
        match self {
            FeedState::Pending => FeedDisplay::Loading,
            FeedState::RemoteLoaded => FeedDisplay::Remote,
            FeedState::RemoteFailed | FeedState::FallbackShown => FeedDisplay::Fallback,
        }
    }
}

/// Undoes an in-flight load attempt when dropped.
pub struct Detach(Option<Box<dyn FnOnce()>>);

impl Detach {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(detach)))
    }

    pub fn noop() -> Self {
        Self(None)
    }
}

impl Drop for Detach {
    fn drop(&mut self) {
        if let Some(detach) = self.0.take() {
            detach();
        }
    }
}

/// Result of asking the embed collaborator to load.
pub enum Attach {
    /// The embed runtime was already on the page.
    Ready,
    /// A load is in flight; it reports through the [`EmbedSignals`].
    Loading(Detach),
    /// The attempt could not even be started.
    Unavailable,
}

/// Third-party embed loader. Only its three outcomes matter here: a success
/// signal, an error signal, or silence.
pub trait RemoteEmbed {
    fn attach(&self, signals: EmbedSignals) -> Attach;
}

/// Callbacks handed to the embed loader. They hold the controller weakly, so
/// signals arriving after unmount are dropped on the floor.
#[derive(Clone)]
pub struct EmbedSignals {
    feed: Weak<FeedInner>,
}

impl EmbedSignals {
    pub fn loaded(&self) {
        self.send(FeedSignal::Loaded);
    }

    pub fn failed(&self) {
        self.send(FeedSignal::Failed);
    }

    fn send(&self, signal: FeedSignal) {
        match self.feed.upgrade() {
            Some(feed) => feed.signal(signal),
            None => debug!("Feed already unmounted, dropping {:?}", signal),
        }
    }
}

struct FeedInner {
    state: Cell<FeedState>,
    timeout: RefCell<Option<TimerHandle>>,
    on_change: Box<dyn Fn(FeedState)>,
}

impl FeedInner {
    fn signal(&self, signal: FeedSignal) {
        let before = self.state.get();
        let after = before.on(signal);
        if after == before {
            debug!("Ignoring {:?}, feed already settled as {:?}", signal, before);
            return;
        }
        self.state.set(after);

        let pending = self.timeout.take();
        if let Some(timeout) = pending {
            timeout.cancel();
        }

        match (after, signal) {
            (FeedState::RemoteLoaded, _) => info!("Instagram feed loaded"),
            (_, FeedSignal::TimedOut) => warn!("Instagram feed timed out, showing local gallery"),
            _ => warn!("Instagram feed failed to load, showing local gallery"),
        }
        (self.on_change)(after);
    }
}

/// Owns one load attempt and its timeout. Dropping it cancels both.
pub struct FeedController {
    inner: Rc<FeedInner>,
    _load: Detach,
}

impl FeedController {
    pub fn mount<S: Scheduler>(
        embed: &impl RemoteEmbed,
        scheduler: &S,
        timeout_ms: u32,
        on_change: impl Fn(FeedState) + 'static,
    ) -> Self {
        let inner = Rc::new(FeedInner {
            state: Cell::new(FeedState::Pending),
            timeout: RefCell::new(None),
            on_change: Box::new(on_change),
        });
        let signals = EmbedSignals {
            feed: Rc::downgrade(&inner),
        };

        let load = match embed.attach(signals) {
            Attach::Ready => {
                inner.signal(FeedSignal::Loaded);
                Detach::noop()
            }
            Attach::Loading(detach) => detach,
            Attach::Unavailable => {
                inner.signal(FeedSignal::Failed);
                Detach::noop()
            }
        };

        // The loader may have answered synchronously.
        if !inner.state.get().is_terminal() {
            let feed = Rc::downgrade(&inner);
            let timeout = scheduler.schedule_once(
                timeout_ms,
                Box::new(move || {
                    if let Some(feed) = feed.upgrade() {
                        feed.signal(FeedSignal::TimedOut);
                    }
                }),
            );
            *inner.timeout.borrow_mut() = Some(timeout);
        }

        Self { inner, _load: load }
    }

    pub fn state(&self) -> FeedState {
        self.inner.state.get()
    }
}

impl std::fmt::Debug for FeedController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedController")
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::timer::ManualScheduler;

    /// Hands the signals back to the test so it can fire them at will.
    #[derive(Default)]
    struct FakeEmbed {
        ready: bool,
        unavailable: bool,
        signals: RefCell<Option<EmbedSignals>>,
        detached: Rc<Cell<bool>>,
    }

    impl FakeEmbed {
        fn signals(&self) -> EmbedSignals {
            self.signals.borrow().clone().expect("attach was called")
        }
    }

    impl RemoteEmbed for FakeEmbed {
        fn attach(&self, signals: EmbedSignals) -> Attach {
            if self.ready {
                return Attach::Ready;
            }
            if self.unavailable {
                return Attach::Unavailable;
            }
            *self.signals.borrow_mut() = Some(signals);
            let detached = self.detached.clone();
            Attach::Loading(Detach::new(move || detached.set(true)))
        }
    }

    fn mount(embed: &FakeEmbed, clock: &ManualScheduler) -> (FeedController, Rc<RefCell<Vec<FeedState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let feed = FeedController::mount(embed, clock, 8_000, move |state| log.borrow_mut().push(state));
        (feed, seen)
    }

    #[test]
    fn starts_pending_with_a_timer_running() {
        let clock = ManualScheduler::new();
        let embed = FakeEmbed::default();
        let (feed, seen) = mount(&embed, &clock);

        assert_eq!(feed.state(), FeedState::Pending);
        assert_eq!(feed.state().display(), FeedDisplay::Loading);
        assert_eq!(clock.pending(), 1);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn success_before_timeout_wins_and_cancels_the_timer() {
        let clock = ManualScheduler::new();
        let embed = FakeEmbed::default();
        let (feed, seen) = mount(&embed, &clock);

        clock.advance(3_000);
        embed.signals().loaded();
        assert_eq!(feed.state(), FeedState::RemoteLoaded);
        assert_eq!(clock.pending(), 0);

        clock.advance(10_000);
        assert_eq!(feed.state(), FeedState::RemoteLoaded);
        assert_eq!(*seen.borrow(), vec![FeedState::RemoteLoaded]);
    }

    #[test]
    fn silence_falls_back_exactly_at_the_timeout() {
        let clock = ManualScheduler::new();
        let embed = FakeEmbed::default();
        let (feed, _seen) = mount(&embed, &clock);

        clock.advance(7_999);
        assert_eq!(feed.state(), FeedState::Pending);
        clock.advance(1);
        assert_eq!(feed.state(), FeedState::FallbackShown);
        assert_eq!(feed.state().display(), FeedDisplay::Fallback);
    }

    #[test]
    fn error_before_timeout_falls_back_immediately() {
        let clock = ManualScheduler::new();
        let embed = FakeEmbed::default();
        let (feed, seen) = mount(&embed, &clock);

        clock.advance(100);
        embed.signals().failed();
        assert_eq!(feed.state(), FeedState::FallbackShown);
        assert_eq!(clock.pending(), 0);
        assert_eq!(*seen.borrow(), vec![FeedState::FallbackShown]);
    }

    #[test]
    fn late_success_after_fallback_is_ignored() {
        let clock = ManualScheduler::new();
        let embed = FakeEmbed::default();
        let (feed, seen) = mount(&embed, &clock);

        clock.advance(8_000);
        embed.signals().loaded();
        embed.signals().failed();
        assert_eq!(feed.state(), FeedState::FallbackShown);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn error_after_success_is_ignored() {
        let clock = ManualScheduler::new();
        let embed = FakeEmbed::default();
        let (feed, _seen) = mount(&embed, &clock);

        embed.signals().loaded();
        embed.signals().failed();
        assert_eq!(feed.state(), FeedState::RemoteLoaded);
    }

    #[test]
    fn runtime_already_present_loads_without_waiting() {
        let clock = ManualScheduler::new();
        let embed = FakeEmbed {
            ready: true,
            ..FakeEmbed::default()
        };
        let (feed, seen) = mount(&embed, &clock);

        assert_eq!(feed.state(), FeedState::RemoteLoaded);
        assert_eq!(clock.pending(), 0);
        assert_eq!(*seen.borrow(), vec![FeedState::RemoteLoaded]);
    }

    #[test]
    fn loader_that_cannot_start_falls_back() {
        let clock = ManualScheduler::new();
        let embed = FakeEmbed {
            unavailable: true,
            ..FakeEmbed::default()
        };
        let (feed, _seen) = mount(&embed, &clock);

        assert_eq!(feed.state(), FeedState::FallbackShown);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn unmount_cancels_timer_and_detaches_loader() {
        let clock = ManualScheduler::new();
        let embed = FakeEmbed::default();
        let (feed, seen) = mount(&embed, &clock);
        let signals = embed.signals();

        drop(feed);
        assert!(embed.detached.get());
        assert_eq!(clock.pending(), 0);

        // Late callbacks from the loader reach nothing.
        signals.loaded();
        clock.advance(10_000);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn transitions_out_of_terminal_states_never_happen() {
        for terminal in [FeedState::RemoteLoaded, FeedState::FallbackShown] {
            for signal in [FeedSignal::Loaded, FeedSignal::Failed, FeedSignal::TimedOut] {
                assert_eq!(terminal.on(signal), terminal);
            }
        }
        assert_eq!(FeedState::RemoteFailed.on(FeedSignal::Loaded), FeedState::FallbackShown);
    }
}
