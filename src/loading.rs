pub const GREETINGS: [&str; 3] = ["Hello", "Moi", "नमस्ते"];

pub const GREETING_DWELL_MS: u32 = 1000;
pub const TEXT_SWAP_MS: u32 = 300;
pub const FINAL_PAUSE_MS: u32 = 800;
pub const OVERLAY_FADE_MS: u32 = 400;
pub const TYPE_CHAR_MS: u32 = 70;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealStyle {
    Instant,
    Typewriter,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Step {
    SetText(String),
    ClearText,
    AppendChar(char),
    FadeTextOut,
    FadeTextIn,
    Wait(u32),
    FadeOverlay,
    Finish,
}

// The whole sequence as a bounded plan: every greeting is shown once, then
// the overlay fades and the page root flips to its completed state. The
// driver only interprets steps, so both reveal styles share one shape.
pub fn plan(greetings: &[&str], style: RevealStyle) -> Vec<Step> {
    let mut steps = Vec::new();

    for (index, greeting) in greetings.iter().enumerate() {
        match style {
            RevealStyle::Instant => {
                if index > 0 {
                    steps.push(Step::FadeTextOut);
                    steps.push(Step::Wait(TEXT_SWAP_MS));
                }
                steps.push(Step::SetText((*greeting).to_string()));
                if index > 0 {
                    steps.push(Step::FadeTextIn);
                }
            }
            RevealStyle::Typewriter => {
                steps.push(Step::ClearText);
                for ch in greeting.chars() {
                    steps.push(Step::AppendChar(ch));
                    steps.push(Step::Wait(TYPE_CHAR_MS));
                }
            }
        }
        steps.push(Step::Wait(GREETING_DWELL_MS));
    }

    steps.push(Step::Wait(FINAL_PAUSE_MS));
    steps.push(Step::FadeOverlay);
    steps.push(Step::Wait(OVERLAY_FADE_MS));
    steps.push(Step::Finish);
    steps
}

pub fn plan_duration_ms(steps: &[Step]) -> u32 {
    steps
        .iter()
        .map(|step| match step {
            Step::Wait(ms) => *ms,
            _ => 0,
        })
        .sum()
}

#[cfg(target_arch = "wasm32")]
pub use driver::run_loading;

#[cfg(target_arch = "wasm32")]
mod driver {
    use super::{plan, RevealStyle, Step, GREETINGS};
    use crate::dom;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Document, Element, HtmlElement};

    const OVERLAY_ID: &str = "loading-screen";
    const TEXT_ID: &str = "loading-text";
    const FADE_CLASS: &str = "fade-out";
    const LOADING_CLASS: &str = "loading";
    const COMPLETE_CLASS: &str = "loading-complete";

    pub fn run_loading(style: RevealStyle, reduced_motion: bool) {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(overlay) = document.get_element_by_id(OVERLAY_ID) else {
            log::debug!("loading overlay missing, sequence skipped");
            return;
        };
        let Some(text) = document.get_element_by_id(TEXT_ID) else {
            log::debug!("loading text node missing, sequence skipped");
            return;
        };

        if reduced_motion {
            if let Some(last) = GREETINGS.last() {
                text.set_text_content(Some(last));
            }
            finish(&document, &overlay);
            return;
        }

        let steps = plan(&GREETINGS, style);
        spawn_local(async move {
            let mut buffer = String::new();

            for step in steps {
                match step {
                    Step::SetText(value) => text.set_text_content(Some(&value)),
                    Step::ClearText => {
                        buffer.clear();
                        text.set_text_content(Some(""));
                    }
                    Step::AppendChar(ch) => {
                        buffer.push(ch);
                        text.set_text_content(Some(&buffer));
                    }
                    Step::FadeTextOut => dom::add_class(&text, FADE_CLASS),
                    Step::FadeTextIn => dom::remove_class(&text, FADE_CLASS),
                    Step::Wait(ms) => TimeoutFuture::new(ms).await,
                    Step::FadeOverlay => {
                        dom::add_class(&text, FADE_CLASS);
                        dom::add_class(&overlay, FADE_CLASS);
                    }
                    Step::Finish => finish(&document, &overlay),
                }
            }
        });
    }

    fn finish(document: &Document, overlay: &Element) {
        if let Some(body) = document.body() {
            let _ = body.class_list().remove_1(LOADING_CLASS);
            let _ = body.class_list().add_1(COMPLETE_CLASS);
        }
        if let Some(overlay) = overlay.dyn_ref::<HtmlElement>() {
            let _ = overlay.style().set_property("display", "none");
        }
        let _ = overlay.remove_attribute("aria-hidden");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_plan_shows_each_greeting_once() {
        let steps = plan(&GREETINGS, RevealStyle::Instant);

        let shown: Vec<&str> = steps
            .iter()
            .filter_map(|step| match step {
                Step::SetText(value) => Some(value.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(shown, GREETINGS);
    }

    #[test]
    fn first_greeting_is_set_without_a_fade() {
        let steps = plan(&GREETINGS, RevealStyle::Instant);

        assert_eq!(steps[0], Step::SetText("Hello".to_string()));
    }

    #[test]
    fn plan_ends_by_fading_the_overlay_then_finishing() {
        for style in [RevealStyle::Instant, RevealStyle::Typewriter] {
            let steps = plan(&GREETINGS, style);
            let tail = &steps[steps.len() - 3..];

            assert_eq!(
                tail,
                &[Step::FadeOverlay, Step::Wait(OVERLAY_FADE_MS), Step::Finish]
            );
        }
    }

    #[test]
    fn instant_plan_duration_is_fixed() {
        let steps = plan(&GREETINGS, RevealStyle::Instant);

        let expected = GREETINGS.len() as u32 * GREETING_DWELL_MS
            + (GREETINGS.len() as u32 - 1) * TEXT_SWAP_MS
            + FINAL_PAUSE_MS
            + OVERLAY_FADE_MS;
        assert_eq!(plan_duration_ms(&steps), expected);
    }

    #[test]
    fn typewriter_plan_types_every_character() {
        let steps = plan(&GREETINGS, RevealStyle::Typewriter);

        let typed: String = steps
            .iter()
            .filter_map(|step| match step {
                Step::AppendChar(ch) => Some(*ch),
                _ => None,
            })
            .collect();
        assert_eq!(typed, GREETINGS.concat());

        let char_count: u32 = GREETINGS.iter().map(|g| g.chars().count() as u32).sum();
        let expected = char_count * TYPE_CHAR_MS
            + GREETINGS.len() as u32 * GREETING_DWELL_MS
            + FINAL_PAUSE_MS
            + OVERLAY_FADE_MS;
        assert_eq!(plan_duration_ms(&steps), expected);
    }

    #[test]
    fn empty_greeting_list_still_completes() {
        let steps = plan(&[], RevealStyle::Instant);

        assert_eq!(steps.last(), Some(&Step::Finish));
        assert_eq!(plan_duration_ms(&steps), FINAL_PAUSE_MS + OVERLAY_FADE_MS);
    }
}
