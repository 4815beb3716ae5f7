use crate::dom;
use crate::filter::FilterState;
use crate::tilt;
use gloo_events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

const CURSOR_GLOW_ID: &str = "cursor-glow";
const YEAR_ID: &str = "current-year";
const TILT_SELECTOR: &str = ".tilt-card";
const PARALLAX_SELECTOR: &str = "[data-parallax]";
const PARALLAX_ATTR: &str = "data-parallax";
const SKILL_CHIP_SELECTOR: &str = ".skill-chip";
const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
const FILTER_KEY_ATTR: &str = "data-filter";
const FILTER_CARD_SELECTOR: &str = ".project-card";
const ANCHOR_SELECTOR: &str = "a[href^='#']";

const FILTER_ACTIVE_CLASS: &str = "active";
const FILTERED_OUT_CLASS: &str = "filtered-out";
const DIMMED_OPACITY: &str = "0.6";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EffectsToggles {
    pub cursor_glow: bool,
    pub tilt: bool,
    pub parallax: bool,
}

impl Default for EffectsToggles {
    fn default() -> Self {
        Self {
            cursor_glow: true,
            tilt: true,
            parallax: true,
        }
    }
}

// Independent event-to-style mappings. Each effect checks for its own
// markup and silently stands down when the page does not carry it.
pub struct Effects {
    _listeners: Vec<EventListener>,
}

impl Effects {
    pub fn install(toggles: EffectsToggles, reduced_motion: bool) -> Self {
        let mut listeners = Vec::new();

        stamp_year();
        install_filters(&mut listeners);
        install_anchor_scrolling(&mut listeners, reduced_motion);

        if !reduced_motion {
            if toggles.cursor_glow {
                install_cursor_glow(&mut listeners);
            }
            if toggles.tilt {
                install_tilt(&mut listeners);
            }
            if toggles.parallax {
                install_parallax(&mut listeners);
            }
            install_skill_chips(&mut listeners);
        }

        log::info!("decorative effects installed ({} listeners)", listeners.len());
        Self {
            _listeners: listeners,
        }
    }
}

fn stamp_year() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(YEAR_ID) else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
}

fn install_cursor_glow(listeners: &mut Vec<EventListener>) {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    let Some(glow) = document.get_element_by_id(CURSOR_GLOW_ID) else {
        log::debug!("cursor glow node missing, effect skipped");
        return;
    };

    listeners.push(EventListener::new(&window, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        dom::set_style(
            &glow,
            "transform",
            &format!("translate({}px, {}px)", event.client_x(), event.client_y()),
        );
    }));
}

fn install_tilt(listeners: &mut Vec<EventListener>) {
    for card in dom::query_all(TILT_SELECTOR) {
        let target = card.clone();
        listeners.push(EventListener::new(&card, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let tilt = tilt::tilt_for_pointer(
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
            );
            dom::set_style(&target, "transform", &tilt.to_transform());
        }));

        let target = card.clone();
        listeners.push(EventListener::new(&card, "mouseleave", move |_| {
            dom::clear_style(&target, "transform");
        }));
    }
}

fn install_parallax(listeners: &mut Vec<EventListener>) {
    let layers: Vec<(Element, f64)> = dom::query_all(PARALLAX_SELECTOR)
        .into_iter()
        .filter_map(|element| {
            let factor = element.get_attribute(PARALLAX_ATTR)?.parse::<f64>().ok()?;
            Some((element, factor))
        })
        .collect();
    if layers.is_empty() {
        return;
    }
    let Some(window) = dom::window() else {
        return;
    };

    listeners.push(EventListener::new(&window, "scroll", move |_| {
        let offset = dom::scroll_y();
        for (element, factor) in &layers {
            dom::set_style(
                element,
                "transform",
                &format!("translateY({:.1}px)", offset * factor),
            );
        }
    }));
}

fn install_skill_chips(listeners: &mut Vec<EventListener>) {
    let chips = Rc::new(dom::query_all(SKILL_CHIP_SELECTOR));

    for (index, chip) in chips.iter().enumerate() {
        let siblings = Rc::clone(&chips);
        listeners.push(EventListener::new(chip, "mouseenter", move |_| {
            for (other_index, other) in siblings.iter().enumerate() {
                if other_index != index {
                    dom::set_style(other, "opacity", DIMMED_OPACITY);
                }
            }
        }));

        let siblings = Rc::clone(&chips);
        listeners.push(EventListener::new(chip, "mouseleave", move |_| {
            for other in siblings.iter() {
                dom::clear_style(other, "opacity");
            }
        }));
    }
}

fn install_filters(listeners: &mut Vec<EventListener>) {
    let buttons = Rc::new(dom::query_all(FILTER_BUTTON_SELECTOR));
    if buttons.is_empty() {
        return;
    }
    let state = Rc::new(RefCell::new(FilterState::new()));

    for button in buttons.iter() {
        let Some(key) = button.get_attribute(FILTER_KEY_ATTR) else {
            continue;
        };
        let state = Rc::clone(&state);
        let buttons = Rc::clone(&buttons);
        listeners.push(EventListener::new(button, "click", move |_| {
            state.borrow_mut().toggle(&key);
            apply_filter(&state.borrow(), &buttons);
        }));
    }
}

fn apply_filter(state: &FilterState, buttons: &[Element]) {
    for button in buttons {
        let is_active = state.active().is_some()
            && state.active() == button.get_attribute(FILTER_KEY_ATTR).as_deref();
        if is_active {
            dom::add_class(button, FILTER_ACTIVE_CLASS);
        } else {
            dom::remove_class(button, FILTER_ACTIVE_CLASS);
        }
    }

    for card in dom::query_all(FILTER_CARD_SELECTOR) {
        let key = card.get_attribute(FILTER_KEY_ATTR).unwrap_or_default();
        if state.shows(&key) {
            dom::remove_class(&card, FILTERED_OUT_CLASS);
        } else {
            dom::add_class(&card, FILTERED_OUT_CLASS);
        }
    }
}

fn install_anchor_scrolling(listeners: &mut Vec<EventListener>, reduced_motion: bool) {
    for anchor in dom::query_all(ANCHOR_SELECTOR) {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let Some(target_id) = href.strip_prefix('#') else {
            continue;
        };
        if target_id.is_empty() {
            continue;
        }
        let target_id = target_id.to_string();

        let options = EventListenerOptions::enable_prevent_default();
        listeners.push(EventListener::new_with_options(
            &anchor,
            "click",
            options,
            move |event| {
                let Some(document) = dom::document() else {
                    return;
                };
                let Some(target) = document.get_element_by_id(&target_id) else {
                    return;
                };
                let Some(target) = target.dyn_ref::<HtmlElement>().cloned() else {
                    return;
                };
                event.prevent_default();

                if let Some(window) = dom::window() {
                    let scroll = ScrollToOptions::new();
                    scroll.set_top(f64::from(target.offset_top()));
                    scroll.set_behavior(if reduced_motion {
                        ScrollBehavior::Auto
                    } else {
                        ScrollBehavior::Smooth
                    });
                    window.scroll_to_with_scroll_to_options(&scroll);
                }
            },
        ));
    }
}
