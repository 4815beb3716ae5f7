use std::collections::HashSet;

// One-shot bookkeeping for named effect groups. A group fires at most once
// per page load and is never reset.
#[derive(Default)]
pub struct TriggerRegistry {
    fired: HashSet<String>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_fire(&mut self, group: &str) -> bool {
        self.fired.insert(group.to_string())
    }

    pub fn has_fired(&self, group: &str) -> bool {
        self.fired.contains(group)
    }
}
