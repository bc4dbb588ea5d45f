use super::{EventSink, latch};
use crate::hal::{Channel, Level, PinMode, Pins};
use crate::message::{Kind, Message};

/// Reports every level change on a digital input. No debounce, so only for clean signals.
pub struct DigitalRead {
    id: i32,
    channel: Channel,
    state: Level,
}

impl DigitalRead {
    pub const fn new(id: i32, channel: Channel, initial: Level) -> Self {
        Self {
            id,
            channel,
            state: initial,
        }
    }

    /// Configure the input; `mode` is `Input` or `InputPullup`.
    pub fn setup(&self, pins: &mut impl Pins, mode: PinMode) {
        pins.configure(self.channel, mode);
    }

    /// Sample the pin. Posts `(DigitalRead, id, level)` and returns true on a change.
    pub fn execute(&mut self, pins: &mut impl Pins, mq: &mut impl EventSink) -> bool {
        let sample = pins.read_digital(self.channel);
        if !latch(&mut self.state, sample) {
            return false;
        }
        trace!("digital {}: level {}", self.id, sample.as_arg());
        mq.emit(Message::new(Kind::DigitalRead, self.id, sample.as_arg()));
        true
    }

    #[inline]
    pub const fn id(&self) -> i32 {
        self.id
    }

    #[inline]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    #[inline]
    pub const fn state(&self) -> Level {
        self.state
    }
}
