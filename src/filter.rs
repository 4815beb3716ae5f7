pub const FILTER_ALL: &str = "all";

// Selected filter key for the project grid. Selecting the active key again
// clears the filter; "all" and no selection both show every card.
#[derive(Default)]
pub struct FilterState {
    active: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, key: &str) {
        if self.active.as_deref() == Some(key) {
            self.active = None;
        } else {
            self.active = Some(key.to_string());
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn shows(&self, card_key: &str) -> bool {
        match self.active.as_deref() {
            None => true,
            Some(key) if key == FILTER_ALL => true,
            Some(key) => key == card_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_key_shows_only_matching_cards() {
        let mut state = FilterState::new();
        state.toggle("web");

        assert!(state.shows("web"));
        assert!(!state.shows("design"));
        assert!(!state.shows(""));
    }

    #[test]
    fn reselecting_the_active_key_clears_the_filter() {
        let mut state = FilterState::new();

        state.toggle("web");
        assert_eq!(state.active(), Some("web"));

        state.toggle("web");
        assert_eq!(state.active(), None);
        assert!(state.shows("design"));
    }

    #[test]
    fn switching_keys_replaces_the_selection() {
        let mut state = FilterState::new();

        state.toggle("web");
        state.toggle("design");
        assert_eq!(state.active(), Some("design"));
        assert!(!state.shows("web"));
    }

    #[test]
    fn all_key_shows_every_card() {
        let mut state = FilterState::new();
        state.toggle(FILTER_ALL);

        assert!(state.shows("web"));
        assert!(state.shows("design"));
    }

    #[test]
    fn default_state_shows_every_card() {
        let state = FilterState::new();

        assert!(state.shows("web"));
        assert!(state.shows(""));
    }
}
