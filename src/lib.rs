//! Event primitives for superloop firmware.
//!
//! # Highlights
//! - Fixed-capacity overwrite queue of `(kind, arg1, arg2)` messages.
//! - Pollers that sample a pin or clock each iteration and post only on a meaningful change:
//!   edges, debounced edges, ADC changes, periodic samples, timers, state changes.
//! - Pulse generators for one-shot and repeating outputs.
//! - No allocation, no dynamic dispatch, no interrupts. Every `new` is `const`.
//!
//! # Quick start
//! ```
//! use ph_superloop::{Clock, Kind, MessageQueue, Timer};
//!
//! struct Millis(u32);
//! impl Clock for Millis {
//!     fn now_micros(&self) -> u32 { self.0.wrapping_mul(1000) }
//!     fn now_millis(&self) -> u32 { self.0 }
//! }
//!
//! let mut queue = MessageQueue::<8>::new();
//! let mut clock = Millis(0);
//! let mut tick = Timer::new(1, 10, true);
//! tick.reset(&clock);
//!
//! clock.0 = 11;
//! assert!(tick.execute(&clock, &mut queue));
//!
//! let msg = queue.get_message();
//! assert_eq!((msg.kind, msg.arg1), (Kind::Timer, 1));
//! assert!(queue.get_message().is_idle());
//! ```
//!
//! # No-std
//! The crate is `#![no_std]`. Tests require `std`.
//!
//! # Concurrency
//! Everything runs on the poll loop. Nothing blocks, and nothing is atomic: posting from an
//! interrupt while the loop drains requires an external critical section.
//!
//! # Time
//! Clocks are wrapping `u32` counters. Deadlines compare by subtraction and `0` means
//! "disarmed"; see [`time`].
//!
//! # Logging
//! With the `defmt` feature, queue evictions (when [`MessageQueue::set_debug`] is on) and poller
//! transitions are logged through `defmt`, and public types derive `defmt::Format`.
#![no_std]

#[macro_use]
mod log;

pub mod hal;
pub mod message;
pub mod poller;
pub mod queue;
pub mod time;

pub use hal::{Channel, Clock, Level, PinMode, Pins};
pub use message::{Kind, KindError, Message, USER_BASE, UserKind};
pub use poller::{
    AnalogRead, DebouncedDigitalRead, DigitalRead, DigitalWrite, EventSink, IntervalAnalogRead,
    Pulse, RepeatingPulse, StateCell, StateValue, Timer,
};
pub use queue::{Drain, MessageQueue};
pub use time::Deadline;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod testing;
