#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

// Per-effect reveal thresholds: an element qualifies once its top edge rises
// above `top_fraction` of the viewport height, optionally requiring that its
// bottom edge has not already scrolled past `min_bottom_fraction`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EnterViewport {
    pub top_fraction: f64,
    pub min_bottom_fraction: Option<f64>,
}

pub const REVEAL: EnterViewport = EnterViewport {
    top_fraction: 0.8,
    min_bottom_fraction: Some(0.0),
};

pub const SECTION_TITLE: EnterViewport = EnterViewport {
    top_fraction: 0.75,
    min_bottom_fraction: Some(0.25),
};

pub const DRIPS: EnterViewport = EnterViewport {
    top_fraction: 0.7,
    min_bottom_fraction: None,
};

pub const STATS: EnterViewport = EnterViewport {
    top_fraction: 0.75,
    min_bottom_fraction: Some(0.0),
};

impl EnterViewport {
    pub fn matches(self, bounds: Bounds, viewport_height: f64) -> bool {
        if bounds.top >= viewport_height * self.top_fraction {
            return false;
        }

        match self.min_bottom_fraction {
            Some(fraction) => bounds.bottom > viewport_height * fraction,
            None => true,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct SectionMetrics {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

// Last section in document order whose top offset minus a third of its height
// has been scrolled past wins; later sections override earlier ones.
pub fn active_section(sections: &[SectionMetrics], scroll_y: f64) -> Option<&str> {
    let mut current = None;

    for section in sections {
        if scroll_y >= section.top - section.height / 3.0 {
            current = Some(section.id.as_str());
        }
    }

    current
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Default)]
pub struct ScrollTracker {
    last: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, offset: f64) -> ScrollDirection {
        let direction = if offset < self.last {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };
        self.last = offset.max(0.0);
        direction
    }
}
