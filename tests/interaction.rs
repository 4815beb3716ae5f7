use portfolio_fx::filter::FilterState;
use portfolio_fx::loading::{self, RevealStyle, Step};
use portfolio_fx::registry::TriggerRegistry;
use portfolio_fx::stats::{CountUp, COUNT_UP_DURATION_MS};
use portfolio_fx::visibility::{
    active_section, Bounds, ScrollDirection, ScrollTracker, SectionMetrics, REVEAL,
};
use std::collections::HashSet;

// Model of the page state the loading driver mutates, so the step plan can
// be interpreted without a browser.
#[derive(Default)]
struct OverlayModel {
    text: String,
    text_faded: bool,
    overlay_faded: bool,
    overlay_hidden: bool,
    body_classes: HashSet<&'static str>,
}

impl OverlayModel {
    fn new() -> Self {
        let mut model = Self::default();
        model.body_classes.insert("loading");
        model
    }

    fn apply(&mut self, step: &Step) -> u32 {
        match step {
            Step::SetText(value) => {
                self.text = value.clone();
                0
            }
            Step::ClearText => {
                self.text.clear();
                0
            }
            Step::AppendChar(ch) => {
                self.text.push(*ch);
                0
            }
            Step::FadeTextOut => {
                self.text_faded = true;
                0
            }
            Step::FadeTextIn => {
                self.text_faded = false;
                0
            }
            Step::Wait(ms) => *ms,
            Step::FadeOverlay => {
                self.text_faded = true;
                self.overlay_faded = true;
                0
            }
            Step::Finish => {
                self.body_classes.remove("loading");
                self.body_classes.insert("loading-complete");
                self.overlay_hidden = true;
                0
            }
        }
    }
}

#[test]
fn loading_sequence_terminates_with_the_page_unlocked() {
    for style in [RevealStyle::Instant, RevealStyle::Typewriter] {
        let steps = loading::plan(&loading::GREETINGS, style);
        let mut model = OverlayModel::new();
        let mut elapsed = 0u32;

        for step in &steps {
            elapsed += model.apply(step);
        }

        assert_eq!(elapsed, loading::plan_duration_ms(&steps));
        assert!(elapsed <= 10_000, "sequence must be bounded, got {elapsed}ms");
        assert_eq!(model.text, "नमस्ते");
        assert!(model.overlay_faded);
        assert!(model.overlay_hidden);
        assert!(model.body_classes.contains("loading-complete"));
        assert!(!model.body_classes.contains("loading"));
    }
}

#[test]
fn stats_group_fires_once_across_a_whole_scroll_session() {
    let mut registry = TriggerRegistry::new();
    let viewport = 800.0;
    let mut fired = 0;

    // The stats section sits 1600px down a 3000px page; scroll to the
    // bottom and back up, evaluating at every 100px like the sweep does.
    for scroll_y in (0..=2200).chain((0..=2200).rev()).step_by(100) {
        let bounds = Bounds {
            top: 1600.0 - f64::from(scroll_y),
            bottom: 2000.0 - f64::from(scroll_y),
        };
        if REVEAL.matches(bounds, viewport) && registry.try_fire("stats") {
            fired += 1;
        }
    }

    assert_eq!(fired, 1);
}

#[test]
fn count_up_driven_by_frame_timestamps_lands_exactly() {
    let counter = CountUp::parse("120+").expect("parses");
    let mut rendered = Vec::new();

    let mut elapsed = 0.0;
    loop {
        let value = counter.sample(elapsed);
        rendered.push(counter.render(value));
        if counter.is_done(elapsed) {
            break;
        }
        elapsed += 16.7;
    }

    assert_eq!(rendered.first().map(String::as_str), Some("0+"));
    assert_eq!(rendered.last().map(String::as_str), Some("120+"));

    let values: Vec<u32> = rendered
        .iter()
        .map(|text| text.trim_end_matches('+').parse().expect("numeric"))
        .collect();
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(values.iter().all(|value| *value <= 120));
}

#[test]
fn nav_highlight_follows_the_last_scrolled_past_section() {
    let sections = vec![
        SectionMetrics {
            id: "home".to_string(),
            top: 0.0,
            height: 900.0,
        },
        SectionMetrics {
            id: "work".to_string(),
            top: 900.0,
            height: 1200.0,
        },
        SectionMetrics {
            id: "contact".to_string(),
            top: 2100.0,
            height: 600.0,
        },
    ];

    let mut tracker = ScrollTracker::new();
    let mut seen = Vec::new();

    for scroll_y in [0.0, 400.0, 600.0, 1500.0, 2000.0, 1000.0, 0.0] {
        let direction = tracker.observe(scroll_y);
        let active = active_section(&sections, scroll_y).map(str::to_string);
        seen.push((active, direction));
    }

    assert_eq!(
        seen,
        vec![
            (Some("home".to_string()), ScrollDirection::Down),
            (Some("home".to_string()), ScrollDirection::Down),
            (Some("work".to_string()), ScrollDirection::Down),
            (Some("work".to_string()), ScrollDirection::Down),
            (Some("contact".to_string()), ScrollDirection::Down),
            (Some("work".to_string()), ScrollDirection::Up),
            (Some("home".to_string()), ScrollDirection::Up),
        ]
    );
}

#[test]
fn filter_round_trip_restores_every_card() {
    let cards = ["web", "web", "design", "embedded"];
    let mut state = FilterState::new();

    state.toggle("design");
    let visible: Vec<&str> = cards.iter().copied().filter(|c| state.shows(c)).collect();
    assert_eq!(visible, vec!["design"]);

    state.toggle("design");
    let visible: Vec<&str> = cards.iter().copied().filter(|c| state.shows(c)).collect();
    assert_eq!(visible.len(), cards.len());
}

#[test]
fn count_up_duration_matches_the_configured_two_seconds() {
    let counter = CountUp::parse("5").expect("parses");

    assert!(!counter.is_done(COUNT_UP_DURATION_MS - 1.0));
    assert!(counter.is_done(COUNT_UP_DURATION_MS));
}
