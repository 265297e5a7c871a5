/// Pointer offsets beyond this many pixels from the centre give full tilt.
pub const OFFSET_RANGE: f64 = 100.0;
/// Maximum rotation in degrees on either axis.
pub const MAX_ROTATION: f64 = 15.0;

/// Pointer offset from the centre of the profile image, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Offset of a client-space pointer position from the centre of a box.
    pub fn from_pointer(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Tilt {
        Tilt {
            offset_x: client_x - left - width / 2.0,
            offset_y: client_y - top - height / 2.0,
        }
    }

    /// Pointer below the centre tips the top away, pointer right of the
    /// centre turns the image right.
    pub fn rotation(&self) -> Rotation {
        Rotation {
            x_deg: map_range(self.offset_y, (-OFFSET_RANGE, OFFSET_RANGE), (MAX_ROTATION, -MAX_ROTATION)),
            y_deg: map_range(self.offset_x, (-OFFSET_RANGE, OFFSET_RANGE), (-MAX_ROTATION, MAX_ROTATION)),
        }
    }

    pub fn style(&self) -> String {
        let Rotation { x_deg, y_deg } = self.rotation();
        format!(
            "transform: perspective(600px) rotateX({:.2}deg) rotateY({:.2}deg);",
            x_deg, y_deg
        )
    }
}

/// Linear interpolation from `input` to `output`, clamped to the input range.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if in_hi == in_lo {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centre_is_neutral() {
        let r = Tilt::NEUTRAL.rotation();
        assert!(close(r.x_deg, 0.0) && close(r.y_deg, 0.0), "{r:?}");
    }

    #[test]
    fn bottom_right_corner_tilts_fully() {
        let r = Tilt { offset_x: 100.0, offset_y: 100.0 }.rotation();
        assert!(close(r.x_deg, -15.0), "{r:?}");
        assert!(close(r.y_deg, 15.0), "{r:?}");
    }

    #[test]
    fn halfway_offset_gives_half_rotation() {
        let r = Tilt { offset_x: -50.0, offset_y: 50.0 }.rotation();
        assert!(close(r.x_deg, -7.5), "{r:?}");
        assert!(close(r.y_deg, -7.5), "{r:?}");
    }

    #[test]
    fn offsets_past_range_clamp() {
        let r = Tilt { offset_x: 400.0, offset_y: -250.0 }.rotation();
        assert!(close(r.x_deg, 15.0), "{r:?}");
        assert!(close(r.y_deg, 15.0), "{r:?}");
    }

    #[test]
    fn pointer_offset_is_measured_from_box_centre() {
        // 176px avatar placed at (200, 300).
        let tilt = Tilt::from_pointer(288.0, 388.0, 200.0, 300.0, 176.0, 176.0);
        assert_eq!(tilt, Tilt::NEUTRAL);

        let tilt = Tilt::from_pointer(200.0, 476.0, 200.0, 300.0, 176.0, 176.0);
        assert!(close(tilt.offset_x, -88.0));
        assert!(close(tilt.offset_y, 88.0));
    }

    #[test]
    fn leaving_resets_regardless_of_prior_offset() {
        let moved = Tilt { offset_x: 73.0, offset_y: -12.0 };
        assert_ne!(moved.rotation(), Rotation::default());

        let left = Tilt::NEUTRAL;
        assert_eq!(left.rotation(), Rotation::default());
        assert_eq!(
            left.style(),
            "transform: perspective(600px) rotateX(0.00deg) rotateY(0.00deg);"
        );
    }

    #[test]
    fn degenerate_input_range_returns_output_start() {
        assert_eq!(map_range(3.0, (1.0, 1.0), (5.0, 9.0)), 5.0);
    }
}
