use crate::hal::{Channel, Level, PinMode, Pins};

/// Plain digital output.
pub struct DigitalWrite {
    channel: Channel,
}

impl DigitalWrite {
    pub const fn new(channel: Channel) -> Self {
        Self { channel }
    }

    pub fn setup(&self, pins: &mut impl Pins) {
        pins.configure(self.channel, PinMode::Output);
    }

    #[inline]
    pub fn high(&self, pins: &mut impl Pins) {
        pins.write_digital(self.channel, Level::High);
    }

    #[inline]
    pub fn low(&self, pins: &mut impl Pins) {
        pins.write_digital(self.channel, Level::Low);
    }

    #[inline]
    pub fn write(&self, pins: &mut impl Pins, level: Level) {
        pins.write_digital(self.channel, level);
    }

    #[inline]
    pub const fn channel(&self) -> Channel {
        self.channel
    }
}
