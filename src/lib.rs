#![no_std]

#[cfg(test)]
extern crate std;

pub mod calibration;
pub mod reading;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use calibration::JoystickCenter;
use reading::Reading;

const I2C_ADDR: SevenBitAddress = 0x52;

const HANDSHAKE_FIRST: [u8; 2] = [0xF0, 0x55];
const HANDSHAKE_SECOND: [u8; 2] = [0xFB, 0x00];
const DATA_REQUEST: [u8; 1] = [0x00];

/// The controller needs this long after the handshake before it answers polls.
const HANDSHAKE_SETTLE_US: u32 = 5_000;
/// The controller needs this long between a poll request and the readout.
const POLL_SETTLE_US: u32 = 1_000;

pub struct Nunchuk<T> {
    dev: T,
    center_fix: bool,
    center: JoystickCenter,
    raw_joystick: (u8, u8),
    last: Reading,
}

impl<T> Nunchuk<T>
where
    T: I2c,
{
    /// Use the driver with raw joystick values (no center calibration).
    pub fn new(dev: T) -> Self {
        Self {
            dev,
            center_fix: false,
            center: JoystickCenter::default(),
            raw_joystick: (0, 0),
            last: Reading::default(),
        }
    }

    /// Capture the joystick rest position during [`init`](Self::init) and
    /// report the joystick relative to it afterwards.
    pub fn with_center_fix(self) -> Self {
        Self {
            center_fix: true,
            ..self
        }
    }

    /// Send the initialization handshake and poll once to establish the
    /// baseline reading.
    ///
    /// With center calibration enabled the baseline's raw joystick values
    /// become the center for the lifetime of the driver; a noisy first
    /// readout therefore skews the center, and there is no recalibration.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), T::Error> {
        self.dev.write(I2C_ADDR, &HANDSHAKE_FIRST)?;
        self.dev.write(I2C_ADDR, &HANDSHAKE_SECOND)?;
        delay.delay_us(HANDSHAKE_SETTLE_US);

        let packet = self.read_packet(delay)?;

        if self.center_fix {
            self.center = JoystickCenter::new(packet[0], packet[1]);
        }

        self.store(packet);

        #[cfg(feature = "defmt")]
        defmt::trace!("Nunchuk initialized");

        Ok(())
    }

    /// Request a readout, decode it and apply the center adjustment.
    ///
    /// A failed bus transaction propagates the bus error and leaves the
    /// last reading unchanged.
    pub fn poll(&mut self, delay: &mut impl DelayNs) -> Result<Reading, T::Error> {
        let packet = self.read_packet(delay)?;

        Ok(self.store(packet))
    }

    /// Last successfully decoded reading.
    pub fn last_reading(&self) -> Reading {
        self.last
    }

    pub fn joystick_center(&self) -> JoystickCenter {
        self.center
    }

    /// Signed joystick deflection relative to the captured center, per axis
    /// in percent of the center value. Always `(0, 0)` without center
    /// calibration.
    pub fn joystick_percentages(&self) -> (i16, i16) {
        (
            self.center.x_percent(self.raw_joystick.0),
            self.center.y_percent(self.raw_joystick.1),
        )
    }

    /// Release the bus handle.
    pub fn free(self) -> T {
        self.dev
    }

    fn read_packet(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<[u8; Reading::PACKET_SIZE], T::Error> {
        let mut packet = [0; Reading::PACKET_SIZE];

        self.dev.write(I2C_ADDR, &DATA_REQUEST)?;

        delay.delay_us(POLL_SETTLE_US);

        self.dev.read(I2C_ADDR, &mut packet)?;

        Ok(packet)
    }

    fn store(&mut self, packet: [u8; Reading::PACKET_SIZE]) -> Reading {
        self.raw_joystick = (packet[0], packet[1]);
        self.last = self.center.adjust(packet.into());
        self.last
    }
}
