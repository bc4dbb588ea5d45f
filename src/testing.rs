//! Fake clock and pin bank for unit tests.

use crate::hal::{Channel, Clock, Level, PinMode, Pins};
use core::cell::Cell;
use std::vec::Vec;

/// Microsecond clock; `now_millis` is derived from it like on real hardware.
#[derive(Default)]
pub struct FakeClock {
    micros: Cell<u32>,
}

impl FakeClock {
    pub fn at(micros: u32) -> Self {
        Self {
            micros: Cell::new(micros),
        }
    }

    pub fn now(&self) -> u32 {
        self.micros.get()
    }

    pub fn set(&self, micros: u32) {
        self.micros.set(micros);
    }

    pub fn advance(&self, micros: u32) {
        self.micros.set(self.micros.get().wrapping_add(micros));
    }
}

impl Clock for FakeClock {
    fn now_micros(&self) -> u32 {
        self.micros.get()
    }

    fn now_millis(&self) -> u32 {
        self.micros.get() / 1000
    }
}

pub struct FakePins {
    pub digital: [Level; 16],
    pub analog: [u16; 16],
    pub modes: [Option<PinMode>; 16],
    pub writes: Vec<(Channel, Level)>,
}

impl Default for FakePins {
    fn default() -> Self {
        Self {
            digital: [Level::Low; 16],
            analog: [0; 16],
            modes: [None; 16],
            writes: Vec::new(),
        }
    }
}

impl Pins for FakePins {
    fn configure(&mut self, channel: Channel, mode: PinMode) {
        self.modes[channel as usize] = Some(mode);
    }

    fn read_digital(&mut self, channel: Channel) -> Level {
        self.digital[channel as usize]
    }

    fn read_analog(&mut self, channel: Channel) -> u16 {
        self.analog[channel as usize]
    }

    fn write_digital(&mut self, channel: Channel, level: Level) {
        self.digital[channel as usize] = level;
        self.writes.push((channel, level));
    }
}
