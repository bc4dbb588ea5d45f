use crate::hal::{Channel, Clock, Level, PinMode, Pins};
use crate::time::Deadline;

/// One-shot output pulse that clears itself.
///
/// [`trigger`](Self::trigger) drives the active level; once `duration_us` has passed,
/// [`execute`](Self::execute) returns the pin to the inactive level. Posts no messages.
pub struct Pulse {
    channel: Channel,
    duration_us: u32,
    active: Level,
    deadline: Deadline,
}

impl Pulse {
    pub const fn new(channel: Channel, duration_us: u32, active: Level) -> Self {
        Self {
            channel,
            duration_us,
            active,
            deadline: Deadline::DISARMED,
        }
    }

    /// Configure the pin as an output and park it at the inactive level.
    pub fn setup(&self, pins: &mut impl Pins) {
        pins.configure(self.channel, PinMode::Output);
        pins.write_digital(self.channel, !self.active);
    }

    /// Start (or restart) the pulse.
    pub fn trigger(&mut self, pins: &mut impl Pins, clock: &impl Clock) {
        self.deadline = Deadline::after(clock.now_micros(), self.duration_us);
        pins.write_digital(self.channel, self.active);
    }

    /// Returns true when the pulse ended on this call.
    pub fn execute(&mut self, pins: &mut impl Pins, clock: &impl Clock) -> bool {
        if !self.deadline.passed(clock.now_micros()) {
            return false;
        }
        pins.write_digital(self.channel, !self.active);
        self.deadline = Deadline::DISARMED;
        true
    }

    #[inline]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    #[inline]
    pub const fn duration_us(&self) -> u32 {
        self.duration_us
    }

    /// True while the output is held at the active level.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.deadline.is_armed()
    }
}
