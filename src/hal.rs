//! Platform collaborators: clock and pin bank.
//!
//! Pollers never touch hardware directly. The application implements these traits over its HAL
//! (or a fake in tests) and passes them into each call.

use core::ops::Not;

/// Identifies a pin or ADC channel on the platform.
pub type Channel = u8;

/// Free-running time source.
///
/// Both counters are monotonic and wrap at `u32::MAX`; see [`crate::time`].
pub trait Clock {
    fn now_micros(&self) -> u32;
    fn now_millis(&self) -> u32;
}

/// Pin bank addressed by channel number.
///
/// Reads are treated as pure samples. None of these calls may block.
pub trait Pins {
    fn configure(&mut self, channel: Channel, mode: PinMode);
    fn read_digital(&mut self, channel: Channel) -> Level;
    /// Raw ADC reading; the range depends on the converter's resolution.
    fn read_analog(&mut self, channel: Channel) -> u16;
    fn write_digital(&mut self, channel: Channel, level: Level);
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_micros(&self) -> u32 {
        (**self).now_micros()
    }

    #[inline]
    fn now_millis(&self) -> u32 {
        (**self).now_millis()
    }
}

impl<P: Pins + ?Sized> Pins for &mut P {
    #[inline]
    fn configure(&mut self, channel: Channel, mode: PinMode) {
        (**self).configure(channel, mode)
    }

    #[inline]
    fn read_digital(&mut self, channel: Channel) -> Level {
        (**self).read_digital(channel)
    }

    #[inline]
    fn read_analog(&mut self, channel: Channel) -> u16 {
        (**self).read_analog(channel)
    }

    #[inline]
    fn write_digital(&mut self, channel: Channel, level: Level) {
        (**self).write_digital(channel, level)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    /// Message payload for this level (`LOW = 0`, `HIGH = 1`).
    #[inline]
    pub const fn as_arg(self) -> u32 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl Not for Level {
    type Output = Level;

    #[inline]
    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    #[inline]
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for bool {
    #[inline]
    fn from(level: Level) -> bool {
        level.is_high()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    #[default]
    Input,
    InputPullup,
    Output,
}
