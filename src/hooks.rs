use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, ScrollBehavior, ScrollToOptions, TouchEvent,
};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{AutoplayOptions, CarouselController, Slide};
use crate::embed::InstagramEmbed;
use crate::feed::{FeedController, FeedState};
use crate::input::CarouselCommand;
use crate::navigation::{self, Point, SectionBounds};
use crate::timer::BrowserScheduler;

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Clone, PartialEq)]
pub struct UseCarouselHandle {
    pub index: usize,
    pub len: usize,
    pub dispatch: Callback<CarouselCommand>,
}

/// Runs a [`CarouselController`] for the lifetime of the calling component.
/// An empty slide list is logged and leaves the handle with `len == 0`.
#[hook]
pub fn use_carousel(slides: Rc<[Slide]>, options: AutoplayOptions) -> UseCarouselHandle {
    let index = use_state(|| 0usize);
    let running = use_state(|| false);
    let controller: Rc<RefCell<Option<CarouselController<BrowserScheduler>>>> = use_mut_ref(|| None);

    {
        let controller = controller.clone();
        let index = index.clone();
        let running = running.clone();
        use_effect_with_deps(
            move |(slides, options)| {
                let setter = index.setter();
                match CarouselController::start(slides.clone(), BrowserScheduler, *options, move |i| {
                    setter.set(i)
                }) {
                    Ok(started) => {
                        debug!("Carousel started with {} slides", started.len());
                        index.set(0);
                        running.set(true);
                        *controller.borrow_mut() = Some(started);
                    }
                    Err(err) => {
                        error!("Gallery carousel disabled: {}", err);
                        running.set(false);
                    }
                }
                move || {
                    if let Some(mut carousel) = controller.borrow_mut().take() {
                        carousel.stop();
                    }
                }
            },
            (slides.clone(), options),
        );
    }

    let dispatch = {
        let controller = controller.clone();
        Callback::from(move |command: CarouselCommand| {
            let mut controller = controller.borrow_mut();
            let Some(carousel) = controller.as_mut() else {
                return;
            };
            match carousel.apply(command) {
                Ok(_) => debug!("Carousel showing {:?}", carousel.current_slide().alt_text),
                Err(err) => debug!("Ignoring carousel command {:?}: {}", command, err),
            }
        })
    };

    UseCarouselHandle {
        index: *index,
        len: if *running { slides.len() } else { 0 },
        dispatch,
    }
}

/// Loads the Instagram feed on mount and reports where it settled.
#[hook]
pub fn use_instagram_feed(timeout_ms: u32) -> FeedState {
    let state = use_state(|| FeedState::Pending);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |timeout_ms| {
                let setter = state.setter();
                let feed = FeedController::mount(
                    &InstagramEmbed::default(),
                    &BrowserScheduler,
                    *timeout_ms,
                    move |settled| setter.set(settled),
                );
                move || drop(feed)
            },
            timeout_ms,
        );
    }

    *state
}

/// True once the referenced element has scrolled into view. Never flips back.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node| {
                let setter = in_view.setter();
                let observer = node.cast::<Element>().and_then(|element| {
                    let reveal = setter.clone();
                    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                        let visible = entries
                            .iter()
                            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                        if visible {
                            reveal.set(true);
                            observer.disconnect();
                        }
                    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_root_margin(REVEAL_ROOT_MARGIN);
                    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some((observer, callback))
                        }
                        Err(err) => {
                            warn!("IntersectionObserver unavailable: {:?}", err);
                            None
                        }
                    }
                });

                // Without an observer the content would stay hidden for good.
                if observer.is_none() {
                    setter.set(true);
                }

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}

#[derive(Clone, PartialEq)]
pub struct NavigationHandle {
    pub active: String,
    pub scrolled: bool,
    pub menu_open: bool,
    pub toggle_menu: Callback<MouseEvent>,
    pub close_menu: Callback<()>,
    pub scroll_to: Callback<String>,
}

/// Smooth-scrolls so `id` sits just below the fixed navbar.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        warn!("No section with id {}", id);
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(navigation::scroll_target(f64::from(element.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn section_bounds() -> Vec<SectionBounds> {
    let Some(sections) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector_all(navigation::TRACKED_SECTIONS).ok())
    else {
        return Vec::new();
    };
    (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.client_height()),
        })
        .collect()
}

#[hook]
pub fn use_navigation() -> NavigationHandle {
    let (_, scroll_y) = use_window_scroll();
    let active = use_state(|| "home".to_string());
    let menu_open = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |scroll_y| {
                let bounds = section_bounds();
                let current = navigation::active_section(&bounds, *scroll_y);
                if *active != current {
                    active.set(current.to_string());
                }
                || ()
            },
            scroll_y,
        );
    }

    // Escape and swipe gestures close the open mobile menu; the page behind it
    // must not scroll meanwhile.
    {
        let open = *menu_open;
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |open| {
                let document = web_sys::window().and_then(|window| window.document());
                let body = document.as_ref().and_then(|document| document.body());
                let mut teardown: Option<Box<dyn FnOnce()>> = None;

                if let (true, Some(document)) = (*open, document) {
                    let on_escape = {
                        let menu_open = menu_open.clone();
                        Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                menu_open.set(false);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>)
                    };

                    let start = Rc::new(RefCell::new(None::<Point>));
                    let on_touch_start = {
                        let start = start.clone();
                        Closure::wrap(Box::new(move |e: TouchEvent| {
                            if let Some(touch) = e.touches().item(0) {
                                *start.borrow_mut() = Some(Point {
                                    x: f64::from(touch.client_x()),
                                    y: f64::from(touch.client_y()),
                                });
                            }
                        }) as Box<dyn FnMut(TouchEvent)>)
                    };
                    let on_touch_end = {
                        let menu_open = menu_open.clone();
                        Closure::wrap(Box::new(move |e: TouchEvent| {
                            let Some(origin) = start.borrow_mut().take() else {
                                return;
                            };
                            if let Some(touch) = e.changed_touches().item(0) {
                                let end = Point {
                                    x: f64::from(touch.client_x()),
                                    y: f64::from(touch.client_y()),
                                };
                                if navigation::swipe_closes_menu(origin, end) {
                                    menu_open.set(false);
                                }
                            }
                        }) as Box<dyn FnMut(TouchEvent)>)
                    };

                    let _ = document.add_event_listener_with_callback("keydown", on_escape.as_ref().unchecked_ref());
                    let _ = document
                        .add_event_listener_with_callback("touchstart", on_touch_start.as_ref().unchecked_ref());
                    let _ =
                        document.add_event_listener_with_callback("touchend", on_touch_end.as_ref().unchecked_ref());

                    teardown = Some(Box::new(move || {
                        let _ = document
                            .remove_event_listener_with_callback("keydown", on_escape.as_ref().unchecked_ref());
                        let _ = document
                            .remove_event_listener_with_callback("touchstart", on_touch_start.as_ref().unchecked_ref());
                        let _ = document
                            .remove_event_listener_with_callback("touchend", on_touch_end.as_ref().unchecked_ref());
                    }));
                }

                if let Some(body) = body.as_ref() {
                    let _ = body.style().set_property("overflow", navigation::body_overflow(*open));
                }

                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                    if let Some(body) = body {
                        let _ = body.style().set_property("overflow", navigation::body_overflow(false));
                    }
                }
            },
            open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let scroll_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: String| {
            scroll_to_section(&id);
            menu_open.set(false);
        })
    };

    NavigationHandle {
        active: (*active).clone(),
        scrolled: navigation::is_scrolled(scroll_y),
        menu_open: *menu_open,
        toggle_menu,
        close_menu,
        scroll_to,
    }
}
