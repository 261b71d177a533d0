//! Gallery carousel: which slide is showing, and the autoplay timer that
//! moves it along.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use thiserror::Error;

use crate::config;
use crate::error::ConfigurationError;
use crate::input::CarouselCommand;
use crate::timer::{Scheduler, TimerHandle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub source: String,
    pub alt_text: String,
    pub caption: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("slide {index} is out of range for a carousel of {len}")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Slides plus the index of the one on screen. The index is always in range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    slides: Rc<[Slide]>,
    current: usize,
}

impl CarouselState {
    pub fn new(slides: impl Into<Rc<[Slide]>>) -> Result<Self, ConfigurationError> {
        let slides = slides.into();
        if slides.is_empty() {
            return Err(ConfigurationError::EmptySlides);
        }
        Ok(Self { slides, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len();
        self.current
    }

    pub fn previous(&mut self) -> usize {
        self.current = (self.current + self.len() - 1) % self.len();
        self.current
    }

    pub fn go_to(&mut self, index: usize) -> Result<usize, OutOfRange> {
        if index >= self.len() {
            return Err(OutOfRange { index, len: self.len() });
        }
        self.current = index;
        Ok(self.current)
    }
}

/// What a manual move does to the autoplay schedule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ManualNavigation {
    /// The interval keeps ticking on its original cadence.
    Continue,
    /// The interval starts over from the manual move.
    #[default]
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayOptions {
    pub interval_ms: u32,
    pub manual: ManualNavigation,
}

impl Default for AutoplayOptions {
    fn default() -> Self {
        Self {
            interval_ms: config::CAROUSEL_INTERVAL_MS,
            manual: ManualNavigation::default(),
        }
    }
}

/// Drives a [`CarouselState`] from an autoplay timer and from manual commands.
///
/// Every index change, whichever side caused it, is reported to the
/// `on_change` listener. Dropping the controller cancels autoplay.
pub struct CarouselController<S: Scheduler> {
    state: Rc<RefCell<CarouselState>>,
    scheduler: S,
    options: AutoplayOptions,
    on_change: Rc<dyn Fn(usize)>,
    autoplay: Option<TimerHandle>,
}

impl<S: Scheduler> CarouselController<S> {
    /// Shows the first slide and starts autoplay.
    pub fn start(
        slides: impl Into<Rc<[Slide]>>,
        scheduler: S,
        options: AutoplayOptions,
        on_change: impl Fn(usize) + 'static,
    ) -> Result<Self, ConfigurationError> {
        let state = CarouselState::new(slides)?;
        info!(
            "Starting carousel with {} slides, advancing every {}ms",
            state.len(),
            options.interval_ms
        );
        let mut controller = Self {
            state: Rc::new(RefCell::new(state)),
            scheduler,
            options,
            on_change: Rc::new(on_change),
            autoplay: None,
        };
        controller.schedule_autoplay();
        Ok(controller)
    }

    pub fn current_index(&self) -> usize {
        self.state.borrow().current_index()
    }

    pub fn current_slide(&self) -> Slide {
        self.state.borrow().current_slide().clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn next(&mut self) -> usize {
        let index = self.state.borrow_mut().next();
        self.moved_manually(index)
    }

    pub fn previous(&mut self) -> usize {
        let index = self.state.borrow_mut().previous();
        self.moved_manually(index)
    }

    /// Out-of-range indices leave the carousel where it was.
    pub fn go_to(&mut self, index: usize) -> Result<usize, OutOfRange> {
        let moved = self.state.borrow_mut().go_to(index);
        moved.map(|index| self.moved_manually(index))
    }

    pub fn apply(&mut self, command: CarouselCommand) -> Result<usize, OutOfRange> {
        match command {
            CarouselCommand::Next => Ok(self.next()),
            CarouselCommand::Previous => Ok(self.previous()),
            CarouselCommand::GoTo(index) => self.go_to(index),
        }
    }

    /// Cancels autoplay. Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(autoplay) = self.autoplay.take() {
            debug!("Carousel autoplay stopped at slide {}", self.current_index());
            autoplay.cancel();
        }
    }

    fn moved_manually(&mut self, index: usize) -> usize {
        if self.options.manual == ManualNavigation::Restart && self.is_playing() {
            self.schedule_autoplay();
        }
        (self.on_change)(index);
        index
    }

    fn schedule_autoplay(&mut self) {
        // Only ever one interval in flight.
        if let Some(previous) = self.autoplay.take() {
            previous.cancel();
        }
        let state = Rc::downgrade(&self.state);
        let on_change = self.on_change.clone();
        let handle = self.scheduler.schedule_repeating(
            self.options.interval_ms,
            Box::new(move || {
                let Some(state) = state.upgrade() else {
                    return;
                };
                let index = state.borrow_mut().next();
                on_change(index);
            }),
        );
        self.autoplay = Some(handle);
    }
}

impl<S: Scheduler> std::fmt::Debug for CarouselController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("playing", &self.is_playing())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use proptest::prelude::*;

    use super::*;
    use crate::timer::ManualScheduler;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide {
                source: format!("/assets/images/gallery/{i}.jpeg"),
                alt_text: format!("Design {i}"),
                caption: format!("Caption {i}"),
            })
            .collect()
    }

    fn parity() -> AutoplayOptions {
        AutoplayOptions {
            interval_ms: 4_000,
            manual: ManualNavigation::Continue,
        }
    }

    #[test]
    fn empty_slide_list_is_a_configuration_error() {
        let clock = ManualScheduler::new();
        let started = CarouselController::start(Vec::<Slide>::new(), clock.clone(), parity(), |_| {});
        assert!(matches!(started, Err(ConfigurationError::EmptySlides)));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn eight_slides_autoplay_wraps_once_after_eight_ticks() {
        let clock = ManualScheduler::new();
        let carousel = CarouselController::start(slides(8), clock.clone(), parity(), |_| {}).unwrap();

        clock.advance(3 * 4_000);
        assert_eq!(carousel.current_index(), 3);

        clock.advance(5 * 4_000);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn tick_lands_exactly_on_the_interval() {
        let clock = ManualScheduler::new();
        let carousel = CarouselController::start(slides(3), clock.clone(), parity(), |_| {}).unwrap();

        clock.advance(3_999);
        assert_eq!(carousel.current_index(), 0);
        clock.advance(1);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn listener_sees_autoplay_and_manual_moves() {
        let clock = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let mut carousel = CarouselController::start(slides(4), clock.clone(), parity(), move |index| {
            log.borrow_mut().push(index)
        })
        .unwrap();

        clock.advance(4_000);
        carousel.previous();
        carousel.go_to(3).unwrap();
        assert_eq!(*seen.borrow(), vec![1, 0, 3]);
    }

    #[test]
    fn go_to_out_of_range_leaves_state_alone() {
        let clock = ManualScheduler::new();
        let mut carousel = CarouselController::start(slides(4), clock, parity(), |_| {}).unwrap();
        carousel.go_to(2).unwrap();

        assert_eq!(carousel.go_to(4), Err(OutOfRange { index: 4, len: 4 }));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn go_to_does_not_touch_slide_data() {
        let clock = ManualScheduler::new();
        let original = slides(5);
        let mut carousel = CarouselController::start(original.clone(), clock, parity(), |_| {}).unwrap();

        carousel.go_to(4).unwrap();
        assert_eq!(carousel.current_slide(), original[4]);
        assert_eq!(&*carousel.state.borrow().slides, original.as_slice());
    }

    #[test]
    fn continue_policy_keeps_the_original_cadence() {
        let clock = ManualScheduler::new();
        let mut carousel = CarouselController::start(slides(8), clock.clone(), parity(), |_| {}).unwrap();

        clock.advance(3_000);
        carousel.next();
        clock.advance(1_000);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn restart_policy_waits_a_full_interval_after_manual_moves() {
        let clock = ManualScheduler::new();
        let options = AutoplayOptions {
            interval_ms: 4_000,
            manual: ManualNavigation::Restart,
        };
        let mut carousel = CarouselController::start(slides(8), clock.clone(), options, |_| {}).unwrap();

        clock.advance(3_000);
        carousel.next();
        clock.advance(1_000);
        assert_eq!(carousel.current_index(), 1);
        clock.advance(3_000);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn stop_is_idempotent_and_halts_autoplay() {
        let clock = ManualScheduler::new();
        let mut carousel = CarouselController::start(slides(3), clock.clone(), parity(), |_| {}).unwrap();

        carousel.stop();
        carousel.stop();
        clock.advance(20_000);
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_playing());
        assert_eq!(clock.pending(), 0);

        // Manual moves after stop must not revive the timer.
        carousel.next();
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dropping_the_controller_cancels_autoplay() {
        let clock = ManualScheduler::new();
        let carousel = CarouselController::start(slides(3), clock.clone(), parity(), |_| {}).unwrap();
        drop(carousel);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn apply_routes_commands() {
        let clock = ManualScheduler::new();
        let mut carousel = CarouselController::start(slides(5), clock, parity(), |_| {}).unwrap();

        assert_eq!(carousel.apply(CarouselCommand::Previous), Ok(4));
        assert_eq!(carousel.apply(CarouselCommand::Next), Ok(0));
        assert_eq!(carousel.apply(CarouselCommand::GoTo(2)), Ok(2));
        assert!(carousel.apply(CarouselCommand::GoTo(9)).is_err());
    }

    proptest! {
        #[test]
        fn next_len_times_returns_to_start(len in 1usize..64, start in 0usize..64) {
            let mut state = CarouselState::new(slides(len)).unwrap();
            let start = start % len;
            state.go_to(start).unwrap();
            for _ in 0..len {
                state.next();
            }
            prop_assert_eq!(state.current_index(), start);
        }

        #[test]
        fn previous_after_start_is_last(len in 1usize..64) {
            let mut state = CarouselState::new(slides(len)).unwrap();
            prop_assert_eq!(state.previous(), len - 1);
        }

        #[test]
        fn go_to_sets_exact_index(len in 1usize..64, target in 0usize..64) {
            let mut state = CarouselState::new(slides(len)).unwrap();
            let target = target % len;
            prop_assert_eq!(state.go_to(target), Ok(target));
            prop_assert_eq!(state.current_index(), target);
        }
    }
}
