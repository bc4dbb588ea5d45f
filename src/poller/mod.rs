//! Change-detecting pollers.
//!
//! Each poller owns a couple of integers of state plus fixed configuration. The poll loop calls
//! `execute` once per iteration, handing in the pin bank, the clock and an [`EventSink`]; the
//! poller samples its source and posts at most one [`Message`] when something meaningful changed.
//!
//! | Poller                   | Clock  | Posts                           |
//! |--------------------------|--------|---------------------------------|
//! | [`DigitalRead`]          | -      | `DigitalRead(id, level)`        |
//! | [`DebouncedDigitalRead`] | micros | `DigitalRead(id, 0)`            |
//! | [`AnalogRead`]           | -      | `AnalogRead(id, value)`         |
//! | [`IntervalAnalogRead`]   | micros | `AnalogRead(id, value)`         |
//! | [`Timer`]                | millis | `Timer(id, 0)`                  |
//! | [`Pulse`]                | micros | nothing                         |
//! | [`RepeatingPulse`]       | micros | nothing                         |
//! | [`StateCell`]            | -      | `State(id, value)`              |
//!
//! Pollers hold no reference to a queue. Passing `&mut ()` as the sink keeps the state tracking
//! but discards every message.

mod analog;
mod debounce;
mod digital;
mod interval;
mod output;
mod pulse;
mod repeat;
mod state;
mod timer;

pub use analog::AnalogRead;
pub use debounce::DebouncedDigitalRead;
pub use digital::DigitalRead;
pub use interval::IntervalAnalogRead;
pub use output::DigitalWrite;
pub use pulse::Pulse;
pub use repeat::RepeatingPulse;
pub use state::{StateCell, StateValue};
pub use timer::Timer;

use crate::message::Message;
use crate::queue::MessageQueue;

/// Destination for messages produced by pollers.
pub trait EventSink {
    fn emit(&mut self, msg: Message);
}

impl<const N: usize> EventSink for MessageQueue<N> {
    #[inline]
    fn emit(&mut self, msg: Message) {
        self.post(msg);
    }
}

/// The null sink.
impl EventSink for () {
    #[inline]
    fn emit(&mut self, _msg: Message) {}
}

impl<S: EventSink> EventSink for Option<S> {
    #[inline]
    fn emit(&mut self, msg: Message) {
        if let Some(sink) = self {
            sink.emit(msg);
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    #[inline]
    fn emit(&mut self, msg: Message) {
        (**self).emit(msg);
    }
}

/// Store `sample` if it differs from `stored`. Returns whether it did.
#[inline]
pub(crate) fn latch<T: PartialEq + Copy>(stored: &mut T, sample: T) -> bool {
    if *stored == sample {
        return false;
    }
    *stored = sample;
    true
}
