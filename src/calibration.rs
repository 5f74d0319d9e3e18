use crate::reading::Reading;

/// Joystick rest position captured from the baseline readout.
///
/// The zero center is the identity and corresponds to calibration being
/// disabled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickCenter {
    x: u8,
    y: u8,
}

impl JoystickCenter {
    /// Deflections smaller than this many counts report as 0%.
    pub const X_DEADZONE: u8 = 15;
    pub const Y_DEADZONE: u8 = 5;

    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Shift the joystick axes so the captured rest position reads `(0, 0)`.
    pub fn adjust(&self, reading: Reading) -> Reading {
        Reading {
            joystick_x: reading.joystick_x - self.x as i16,
            joystick_y: reading.joystick_y - self.y as i16,
            ..reading
        }
    }

    /// Signed X deflection relative to the center, in percent of the center
    /// value. Returns 0 inside the deadzone or without a captured center.
    pub fn x_percent(&self, raw: u8) -> i16 {
        percent(self.x, raw, Self::X_DEADZONE)
    }

    /// Signed Y deflection relative to the center, in percent of the center
    /// value. Returns 0 inside the deadzone or without a captured center.
    pub fn y_percent(&self, raw: u8) -> i16 {
        percent(self.y, raw, Self::Y_DEADZONE)
    }
}

fn percent(center: u8, raw: u8, deadzone: u8) -> i16 {
    if center == 0 {
        return 0;
    }

    let offset = (raw as i32 - center as i32).abs();

    if offset < deadzone as i32 {
        return 0;
    }

    let scaled = (offset * 100 / center as i32) as i16;

    if raw >= center {
        scaled
    } else {
        -scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(joystick_x: i16, joystick_y: i16) -> Reading {
        Reading {
            joystick_x,
            joystick_y,
            ..Reading::default()
        }
    }

    #[test]
    fn rest_position_adjusts_to_zero() {
        let center = JoystickCenter::new(126, 131);

        let adjusted = center.adjust(reading(126, 131));

        assert_eq!(adjusted.joystick_x, 0);
        assert_eq!(adjusted.joystick_y, 0);
    }

    #[test]
    fn adjustment_may_go_negative() {
        let center = JoystickCenter::new(128, 128);

        let adjusted = center.adjust(reading(100, 200));

        assert_eq!(adjusted.joystick_x, -28);
        assert_eq!(adjusted.joystick_y, 72);
    }

    #[test]
    fn zero_center_passes_values_through() {
        let center = JoystickCenter::default();

        let adjusted = center.adjust(reading(37, 255));

        assert_eq!(adjusted.joystick_x, 37);
        assert_eq!(adjusted.joystick_y, 255);
    }

    #[test]
    fn adjustment_leaves_other_fields_untouched() {
        let center = JoystickCenter::new(128, 128);
        let raw = Reading {
            joystick_x: 128,
            joystick_y: 128,
            accel_x: 475,
            accel_y: 506,
            accel_z: 697,
            button_c: true,
            button_z: false,
        };

        let adjusted = center.adjust(raw);

        assert_eq!(adjusted.accel_x, 475);
        assert_eq!(adjusted.accel_y, 506);
        assert_eq!(adjusted.accel_z, 697);
        assert!(adjusted.button_c);
        assert!(!adjusted.button_z);
    }

    #[test]
    fn percent_is_zero_inside_the_deadzone() {
        let center = JoystickCenter::new(128, 128);

        assert_eq!(center.x_percent(128 + 14), 0);
        assert_eq!(center.x_percent(128 - 14), 0);
        assert_eq!(center.y_percent(128 + 4), 0);
        assert_eq!(center.y_percent(128 - 4), 0);
    }

    #[test]
    fn percent_scales_against_the_center() {
        let center = JoystickCenter::new(128, 128);

        assert_eq!(center.x_percent(192), 50);
        assert_eq!(center.x_percent(64), -50);
        assert_eq!(center.y_percent(255), 99);
        assert_eq!(center.y_percent(0), -100);
    }

    #[test]
    fn percent_without_captured_center_is_zero() {
        let center = JoystickCenter::default();

        assert_eq!(center.x_percent(255), 0);
        assert_eq!(center.y_percent(255), 0);
    }
}
