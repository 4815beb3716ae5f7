pub const COUNT_UP_DURATION_MS: f64 = 2000.0;

// A stat element's displayed text is its only state: "120+" parses to a
// target of 120 with the plus restored on every rendered frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CountUp {
    target: u32,
    plus_suffix: bool,
}

impl CountUp {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (digits, plus_suffix) = match text.strip_suffix('+') {
            Some(rest) => (rest.trim_end(), true),
            None => (text, false),
        };
        let target = digits.parse::<u32>().ok()?;

        Some(Self {
            target,
            plus_suffix,
        })
    }

    pub fn target(self) -> u32 {
        self.target
    }

    pub fn sample(self, elapsed_ms: f64) -> u32 {
        if self.is_done(elapsed_ms) {
            // Snap exactly to the target, correcting floor-rounding drift.
            return self.target;
        }

        let progress = (elapsed_ms / COUNT_UP_DURATION_MS).clamp(0.0, 1.0);
        (f64::from(self.target) * ease_out_quad(progress)).floor() as u32
    }

    pub fn is_done(self, elapsed_ms: f64) -> bool {
        elapsed_ms >= COUNT_UP_DURATION_MS
    }

    pub fn render(self, value: u32) -> String {
        if self.plus_suffix {
            format!("{value}+")
        } else {
            value.to_string()
        }
    }
}

pub fn ease_out_quad(progress: f64) -> f64 {
    progress * (2.0 - progress)
}
