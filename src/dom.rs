use crate::visibility::Bounds;
use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    collect_elements(&list)
}

pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };

    collect_elements(&list)
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            elements.push(element);
        }
    }
    elements
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(DEFAULT_VIEWPORT_HEIGHT)
}

pub fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        top: rect.top(),
        bottom: rect.bottom(),
    }
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().remove_property(property);
    }
}

pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

// Re-registers itself until `step` returns false. The frame handle is held
// in the slot between frames; dropping it would cancel the callback.
pub fn raf_loop(step: impl FnMut(f64) -> bool + 'static) {
    let step = Rc::new(RefCell::new(step));
    let slot = Rc::new(RefCell::new(None));
    schedule_frame(step, slot);
}

fn schedule_frame<F>(step: Rc<RefCell<F>>, slot: Rc<RefCell<Option<AnimationFrame>>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let step_next = Rc::clone(&step);
    let slot_next = Rc::clone(&slot);
    let frame = request_animation_frame(move |timestamp| {
        slot_next.borrow_mut().take();
        let again = {
            let mut step = step_next.borrow_mut();
            (&mut *step)(timestamp)
        };
        if again {
            schedule_frame(step_next, slot_next);
        }
    });
    *slot.borrow_mut() = Some(frame);
}
