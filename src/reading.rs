use core::fmt;

use serde::{Deserialize, Serialize};

/// Decoded controller state from one six byte report.
///
/// Joystick axes are raw 8-bit ADC values with an approximate 128 center;
/// with center calibration applied they are shifted and may go negative.
/// Accelerometer axes are 10-bit values. The button lines are active low on
/// the wire and reported here as `true` when pressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub joystick_x: i16,
    pub joystick_y: i16,
    pub accel_x: u16,
    pub accel_y: u16,
    pub accel_z: u16,
    pub button_c: bool,
    pub button_z: bool,
}

impl Reading {
    pub const PACKET_SIZE: usize = 6;
}

impl From<[u8; Self::PACKET_SIZE]> for Reading {
    fn from(packet: [u8; Self::PACKET_SIZE]) -> Self {
        // Byte 5 packs the low 2 bits of each accelerometer axis above the
        // two button bits.
        Self {
            joystick_x: packet[0] as i16,
            joystick_y: packet[1] as i16,
            accel_x: ((packet[2] as u16) << 2) | ((packet[5] >> 2) & 0b11) as u16,
            accel_y: ((packet[3] as u16) << 2) | ((packet[5] >> 4) & 0b11) as u16,
            accel_z: ((packet[4] as u16) << 2) | ((packet[5] >> 6) & 0b11) as u16,
            button_c: (packet[5] & 0b10) == 0,
            button_z: (packet[5] & 0b01) == 0,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "joystick_x: {}", self.joystick_x)?;
        writeln!(f, "joystick_y: {}", self.joystick_y)?;
        writeln!(f, "accel_x: {}", self.accel_x)?;
        writeln!(f, "accel_y: {}", self.accel_y)?;
        writeln!(f, "accel_z: {}", self.accel_z)?;
        writeln!(f, "button_c: {}", self.button_c)?;
        write!(f, "button_z: {}", self.button_z)
    }
}
