use super::{EventSink, latch};
use crate::hal::{Channel, Clock, PinMode, Pins};
use crate::message::{Kind, Message};
use crate::time::Deadline;

/// Samples an ADC channel on a fixed period and reports changes.
///
/// A late sample shortens the following period by the overshoot, so the average rate holds at
/// one sample per `interval_us` even when the loop runs irregularly. The first call samples
/// immediately.
pub struct IntervalAnalogRead {
    id: i32,
    channel: Channel,
    interval_us: u32,
    value: u16,
    next: Deadline,
}

impl IntervalAnalogRead {
    pub const fn new(id: i32, channel: Channel, interval_us: u32) -> Self {
        Self {
            id,
            channel,
            interval_us,
            value: 0,
            next: Deadline::DISARMED,
        }
    }

    pub fn setup(&self, pins: &mut impl Pins) {
        pins.configure(self.channel, PinMode::Input);
    }

    /// Returns true when a scheduled sample differed from the stored value.
    pub fn execute(
        &mut self,
        pins: &mut impl Pins,
        clock: &impl Clock,
        mq: &mut impl EventSink,
    ) -> bool {
        let now = clock.now_micros();
        if self.next.is_armed() && !self.next.reached(now) {
            return false;
        }
        self.next = self.next.next_compensated(now, self.interval_us);

        let sample = pins.read_analog(self.channel);
        if !latch(&mut self.value, sample) {
            return false;
        }
        mq.emit(Message::new(Kind::AnalogRead, self.id, u32::from(sample)));
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
    pub const fn interval_us(&self) -> u32 {
        self.interval_us
    }

    #[inline]
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// When the next sample is due; disarmed before the first call.
    #[inline]
    pub const fn next_sample(&self) -> Deadline {
        self.next
    }
}
