use crate::hal::{Channel, Clock, Level, PinMode, Pins};
use crate::time::Deadline;

/// Free-running square wave with separate high and low durations.
///
/// Each toggle reschedules with the overshoot subtracted, so the average duty cycle holds under
/// irregular polling. Expect some jitter on individual edges.
pub struct RepeatingPulse {
    channel: Channel,
    high_us: u32,
    low_us: u32,
    level: Level,
    deadline: Deadline,
}

impl RepeatingPulse {
    pub const fn new(channel: Channel, high_us: u32, low_us: u32) -> Self {
        Self {
            channel,
            high_us,
            low_us,
            level: Level::Low,
            deadline: Deadline::DISARMED,
        }
    }

    pub fn setup(&self, pins: &mut impl Pins) {
        pins.configure(self.channel, PinMode::Output);
    }

    #[inline]
    const fn duration(&self, level: Level) -> u32 {
        match level {
            Level::High => self.high_us,
            Level::Low => self.low_us,
        }
    }

    /// Drive `start` now and begin toggling.
    pub fn run(&mut self, pins: &mut impl Pins, clock: &impl Clock, start: Level) {
        self.level = start;
        self.deadline = Deadline::after(clock.now_micros(), self.duration(start));
        pins.write_digital(self.channel, start);
    }

    /// Drive `end` now and stop toggling.
    pub fn stop(&mut self, pins: &mut impl Pins, end: Level) {
        self.level = end;
        self.deadline = Deadline::DISARMED;
        pins.write_digital(self.channel, end);
    }

    /// Returns true when the output toggled.
    pub fn execute(&mut self, pins: &mut impl Pins, clock: &impl Clock) -> bool {
        let now = clock.now_micros();
        if !self.deadline.passed(now) {
            return false;
        }

        self.level = !self.level;
        pins.write_digital(self.channel, self.level);
        self.deadline = self.deadline.next_compensated(now, self.duration(self.level));
        true
    }

    #[inline]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    #[inline]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub const fn is_running(&self) -> bool {
        self.deadline.is_armed()
    }
}
