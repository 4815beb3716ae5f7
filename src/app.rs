use crate::dom;
use crate::effects::{Effects, EffectsToggles};
use crate::loading::{self, RevealStyle};
use crate::trigger::Coordinator;
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AppConfig {
    pub reveal: RevealStyle,
    pub toggles: EffectsToggles,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reveal: RevealStyle::Instant,
            toggles: EffectsToggles::default(),
        }
    }
}

pub struct App {
    _coordinator: Rc<Coordinator>,
    _effects: Effects,
}

impl App {
    pub fn start(config: AppConfig) -> Self {
        let reduced_motion = dom::prefers_reduced_motion();

        loading::run_loading(config.reveal, reduced_motion);
        let coordinator = Coordinator::install(reduced_motion);
        let effects = Effects::install(config.toggles, reduced_motion);

        Self {
            _coordinator: coordinator,
            _effects: effects,
        }
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let app = App::start(AppConfig::default());
    // Listeners and observers live for the whole page session.
    std::mem::forget(app);
}
