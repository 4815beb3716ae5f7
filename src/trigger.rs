use crate::dom;
use crate::registry::TriggerRegistry;
use crate::stats::CountUp;
use crate::visibility::{self, ScrollDirection, ScrollTracker, SectionMetrics};
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const ANIMATE_SELECTOR: &str = "[data-animate]";
const TITLE_SELECTOR: &str = ".section-title";
const REVEAL_SELECTOR: &str = "[data-animate], .section-title";
const DRIPS_SELECTOR: &str = "[data-drips]";
const SECTION_NAME_ATTR: &str = "data-section";
const STATS_SELECTOR: &str = "[data-stats]";
const STAT_VALUE_SELECTOR: &str = ".stat-number";
const NAV_SECTION_SELECTOR: &str = "section[id]";
const NAV_LINK_SELECTOR: &str = ".nav-link";

const ANIMATED_CLASS: &str = "animated";
const DRIPS_ACTIVE_CLASS: &str = "drips-active";
const SCROLLING_UP_CLASS: &str = "scrolling-up";
const NAV_ACTIVE_CLASS: &str = "active";

const OBSERVER_THRESHOLD: f64 = 0.1;
const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const REVEAL_SETTLE_MS: u32 = 50;
const STATS_GROUP: &str = "stats";

// Owns every piece of one-shot bookkeeping plus the live listeners and
// observers, so dropping the coordinator detaches it from the page.
pub struct Coordinator {
    registry: RefCell<TriggerRegistry>,
    scroll: RefCell<ScrollTracker>,
    sweep_pending: Cell<bool>,
    sweep_frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
    observers: RefCell<Vec<ObserverHandle>>,
}

struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl Coordinator {
    pub fn install(reduced_motion: bool) -> Rc<Self> {
        let coordinator = Rc::new(Self {
            registry: RefCell::new(TriggerRegistry::new()),
            scroll: RefCell::new(ScrollTracker::new()),
            sweep_pending: Cell::new(false),
            sweep_frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
        });

        if reduced_motion {
            coordinator.reveal_everything();
            log::info!("viewport coordinator: reduced motion, effects applied immediately");
        } else if observer_supported() {
            coordinator.install_observers();
            log::info!("viewport coordinator: intersection observer strategy");
        } else {
            coordinator.install_sweep();
            coordinator.evaluate();
            log::info!("viewport coordinator: scroll sweep fallback");
        }

        coordinator.install_scroll_tracking();
        coordinator.on_scroll();
        coordinator
    }

    // Full predicate sweep over every watched group, used as the initial
    // pass and on each coalesced scroll event of the fallback strategy.
    pub fn evaluate(&self) {
        let viewport_height = dom::viewport_height();

        for element in dom::query_all(ANIMATE_SELECTOR) {
            if dom::has_class(&element, ANIMATED_CLASS) {
                continue;
            }
            if visibility::REVEAL.matches(dom::bounds_of(&element), viewport_height) {
                dom::add_class(&element, ANIMATED_CLASS);
            }
        }

        for element in dom::query_all(TITLE_SELECTOR) {
            if dom::has_class(&element, ANIMATED_CLASS) {
                continue;
            }
            if visibility::SECTION_TITLE.matches(dom::bounds_of(&element), viewport_height) {
                dom::add_class(&element, ANIMATED_CLASS);
            }
        }

        for element in dom::query_all(DRIPS_SELECTOR) {
            if visibility::DRIPS.matches(dom::bounds_of(&element), viewport_height) {
                self.fire_drips(&element);
            }
        }

        for element in dom::query_all(STATS_SELECTOR) {
            if visibility::STATS.matches(dom::bounds_of(&element), viewport_height) {
                self.fire_stats(&element, false);
            }
        }
    }

    fn install_observers(self: &Rc<Self>) {
        // Reveal group: class add is its own one-shot marker, no registry
        // entry needed. A short settle delay matches the CSS transition.
        if let Some(handle) = make_observer(|element| {
            Timeout::new(REVEAL_SETTLE_MS, move || {
                dom::add_class(&element, ANIMATED_CLASS);
            })
            .forget();
        }) {
            for element in dom::query_all(REVEAL_SELECTOR) {
                handle.observer.observe(&element);
            }
            self.observers.borrow_mut().push(handle);
        }

        let weak = Rc::downgrade(self);
        if let Some(handle) = make_observer(move |element| {
            if let Some(coordinator) = weak.upgrade() {
                coordinator.fire_drips(&element);
            }
        }) {
            for element in dom::query_all(DRIPS_SELECTOR) {
                handle.observer.observe(&element);
            }
            self.observers.borrow_mut().push(handle);
        }

        let weak = Rc::downgrade(self);
        if let Some(handle) = make_observer(move |element| {
            if let Some(coordinator) = weak.upgrade() {
                coordinator.fire_stats(&element, false);
            }
        }) {
            for element in dom::query_all(STATS_SELECTOR) {
                handle.observer.observe(&element);
            }
            self.observers.borrow_mut().push(handle);
        }
    }

    fn install_sweep(self: &Rc<Self>) {
        let Some(window) = dom::window() else {
            return;
        };
        let weak = Rc::downgrade(self);
        let listener = EventListener::new(&window, "scroll", move |_| {
            if let Some(coordinator) = weak.upgrade() {
                coordinator.schedule_sweep();
            }
        });
        self.listeners.borrow_mut().push(listener);
    }

    // Coalesces bursts of scroll events into one evaluation per frame.
    fn schedule_sweep(self: &Rc<Self>) {
        if self.sweep_pending.replace(true) {
            return;
        }

        let weak = Rc::downgrade(self);
        let frame = request_animation_frame(move |_| {
            let Some(coordinator) = weak.upgrade() else {
                return;
            };
            coordinator.sweep_frame.borrow_mut().take();
            coordinator.sweep_pending.set(false);
            coordinator.evaluate();
        });
        *self.sweep_frame.borrow_mut() = Some(frame);
    }

    // Nav highlighting and scroll-direction flag run on the raw offset, on
    // both strategies.
    fn install_scroll_tracking(self: &Rc<Self>) {
        let Some(window) = dom::window() else {
            return;
        };
        let weak = Rc::downgrade(self);
        let listener = EventListener::new(&window, "scroll", move |_| {
            if let Some(coordinator) = weak.upgrade() {
                coordinator.on_scroll();
            }
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn on_scroll(&self) {
        let offset = dom::scroll_y();
        let direction = self.scroll.borrow_mut().observe(offset);

        if let Some(body) = dom::body() {
            match direction {
                ScrollDirection::Up => dom::add_class(&body, SCROLLING_UP_CLASS),
                ScrollDirection::Down => dom::remove_class(&body, SCROLLING_UP_CLASS),
            }
        }

        self.update_active_nav(offset);
    }

    fn update_active_nav(&self, scroll_y: f64) {
        let sections = section_metrics();
        let active = visibility::active_section(&sections, scroll_y);

        for link in dom::query_all(NAV_LINK_SELECTOR) {
            let is_active = match (active, link.get_attribute("href")) {
                (Some(id), Some(href)) => href == format!("#{id}"),
                _ => false,
            };
            if is_active {
                dom::add_class(&link, NAV_ACTIVE_CLASS);
            } else {
                dom::remove_class(&link, NAV_ACTIVE_CLASS);
            }
        }
    }

    fn fire_drips(&self, element: &Element) {
        let Some(name) = element.get_attribute(SECTION_NAME_ATTR) else {
            return;
        };
        if !self.registry.borrow_mut().try_fire(&name) {
            return;
        }
        dom::add_class(element, DRIPS_ACTIVE_CLASS);
    }

    fn fire_stats(&self, section: &Element, instant: bool) {
        if !self.registry.borrow_mut().try_fire(STATS_GROUP) {
            return;
        }

        for stat in dom::query_within(section, STAT_VALUE_SELECTOR) {
            if instant {
                snap_count_up(&stat);
            } else {
                start_count_up(stat);
            }
        }
    }

    fn reveal_everything(&self) {
        for element in dom::query_all(REVEAL_SELECTOR) {
            dom::add_class(&element, ANIMATED_CLASS);
        }
        for element in dom::query_all(DRIPS_SELECTOR) {
            self.fire_drips(&element);
        }
        for element in dom::query_all(STATS_SELECTOR) {
            self.fire_stats(&element, true);
        }
    }
}

fn observer_supported() -> bool {
    dom::window()
        .map(|window| {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

// One observer per watched group; elements are unobserved as soon as their
// one-shot fires, so a group that has fully triggered costs nothing.
fn make_observer(on_enter: impl Fn(Element) + 'static) -> Option<ObserverHandle> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_enter(target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    options.set_root_margin(OBSERVER_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok()?;
    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}

fn section_metrics() -> Vec<SectionMetrics> {
    dom::query_all(NAV_SECTION_SELECTOR)
        .into_iter()
        .filter_map(|section| {
            let id = section.get_attribute("id")?;
            let offset_top = section.dyn_ref::<HtmlElement>()?.offset_top();
            Some(SectionMetrics {
                id,
                top: f64::from(offset_top),
                height: f64::from(section.client_height()),
            })
        })
        .collect()
}

fn start_count_up(element: Element) {
    let Some(text) = element.text_content() else {
        return;
    };
    let Some(counter) = CountUp::parse(&text) else {
        log::debug!("stat text {text:?} is not numeric, skipped");
        return;
    };

    let start = dom::now_ms();
    dom::raf_loop(move |_| {
        let elapsed = dom::now_ms() - start;
        let value = counter.sample(elapsed);
        element.set_text_content(Some(&counter.render(value)));
        !counter.is_done(elapsed)
    });
}

fn snap_count_up(element: &Element) {
    let Some(text) = element.text_content() else {
        return;
    };
    if let Some(counter) = CountUp::parse(&text) {
        element.set_text_content(Some(&counter.render(counter.target())));
    }
}
