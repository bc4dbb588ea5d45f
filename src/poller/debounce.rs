use super::EventSink;
use crate::hal::{Channel, Clock, Level, PinMode, Pins};
use crate::message::{Kind, Message};
use crate::time::Deadline;

/// Digital input with two-phase debounce.
///
/// An edge arms a settle deadline. Once the deadline has passed the pin is sampled again: if it
/// still differs from the stable level the change is committed and `(DigitalRead, id, 0)` is
/// posted, otherwise the edge is discarded as bounce. Samples taken while the deadline is pending
/// are ignored.
///
/// The message carries no level; read [`state`](Self::state) after receiving it.
pub struct DebouncedDigitalRead {
    id: i32,
    channel: Channel,
    settle_us: u32,
    state: Level,
    pending: Deadline,
}

impl DebouncedDigitalRead {
    pub const fn new(id: i32, channel: Channel, settle_us: u32, initial: Level) -> Self {
        Self {
            id,
            channel,
            settle_us,
            state: initial,
            pending: Deadline::DISARMED,
        }
    }

    pub fn setup(&self, pins: &mut impl Pins, mode: PinMode) {
        pins.configure(self.channel, mode);
    }

    /// Returns true when a settled change was committed.
    pub fn execute(
        &mut self,
        pins: &mut impl Pins,
        clock: &impl Clock,
        mq: &mut impl EventSink,
    ) -> bool {
        let sample = pins.read_digital(self.channel);
        let now = clock.now_micros();

        if !self.pending.is_armed() {
            if sample != self.state {
                self.pending = Deadline::after(now, self.settle_us);
            }
            return false;
        }

        if !self.pending.passed(now) {
            return false;
        }

        self.pending = Deadline::DISARMED;
        if sample == self.state {
            trace!("debounce {}: bounce rejected", self.id);
            return false;
        }

        debug!("debounce {}: settled at {}", self.id, sample.as_arg());
        self.state = sample;
        mq.emit(Message::new(Kind::DigitalRead, self.id, 0));
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
    pub const fn settle_us(&self) -> u32 {
        self.settle_us
    }

    /// Last committed level.
    #[inline]
    pub const fn state(&self) -> Level {
        self.state
    }

    /// True while an edge is waiting for its settle deadline.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_armed()
    }
}
