pub const MAX_TILT_DEG: f64 = 8.0;
const PERSPECTIVE_PX: f64 = 900.0;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn to_transform(self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

// Pointer position within the card, mapped so the center is level and the
// edges reach the maximum angle. The card leans toward the pointer.
pub fn tilt_for_pointer(local_x: f64, local_y: f64, width: f64, height: f64) -> Tilt {
    if width <= 0.0 || height <= 0.0 {
        return Tilt::default();
    }

    let rel_x = (local_x / width).clamp(0.0, 1.0) * 2.0 - 1.0;
    let rel_y = (local_y / height).clamp(0.0, 1.0) * 2.0 - 1.0;

    Tilt {
        rotate_x: -rel_y * MAX_TILT_DEG,
        rotate_y: rel_x * MAX_TILT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pointer_keeps_the_card_level() {
        let tilt = tilt_for_pointer(150.0, 100.0, 300.0, 200.0);

        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn corners_reach_the_maximum_angle() {
        let tilt = tilt_for_pointer(300.0, 0.0, 300.0, 200.0);

        assert_eq!(tilt.rotate_y, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_x, MAX_TILT_DEG);
    }

    #[test]
    fn pointer_outside_the_card_is_clamped() {
        let tilt = tilt_for_pointer(-50.0, 400.0, 300.0, 200.0);

        assert_eq!(tilt.rotate_y, -MAX_TILT_DEG);
        assert_eq!(tilt.rotate_x, -MAX_TILT_DEG);
    }

    #[test]
    fn degenerate_card_size_stays_level() {
        assert_eq!(tilt_for_pointer(10.0, 10.0, 0.0, 200.0), Tilt::default());
        assert_eq!(tilt_for_pointer(10.0, 10.0, 300.0, 0.0), Tilt::default());
    }

    #[test]
    fn transform_lists_perspective_first() {
        let transform = tilt_for_pointer(300.0, 100.0, 300.0, 200.0).to_transform();

        assert!(transform.starts_with("perspective(900px)"));
        assert!(transform.contains("rotateY(8.00deg)"));
    }
}
