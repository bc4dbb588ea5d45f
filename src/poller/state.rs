use super::{EventSink, latch};
use crate::hal::Level;
use crate::message::{Kind, Message};

/// Scalar that can live in a [`StateCell`].
pub trait StateValue: Copy + PartialEq {
    /// Message payload. Wider values are truncated to 32 bits, negative values wrap.
    fn to_arg(self) -> u32;
    /// Logical negation: zero becomes one, anything else becomes zero.
    fn negate(self) -> Self;
}

macro_rules! impl_state_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl StateValue for $t {
                #[inline]
                fn to_arg(self) -> u32 {
                    self as u32
                }

                #[inline]
                fn negate(self) -> Self {
                    if self == 0 { 1 } else { 0 }
                }
            }
        )*
    };
}

impl_state_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl StateValue for bool {
    #[inline]
    fn to_arg(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn negate(self) -> Self {
        !self
    }
}

impl StateValue for Level {
    #[inline]
    fn to_arg(self) -> u32 {
        self.as_arg()
    }

    #[inline]
    fn negate(self) -> Self {
        !self
    }
}

/// Application-level value that posts `(State, id, value)` whenever it changes.
pub struct StateCell<T: StateValue> {
    id: i32,
    value: T,
}

impl<T: StateValue> StateCell<T> {
    pub const fn new(id: i32, initial: T) -> Self {
        Self { id, value: initial }
    }

    /// Returns true (and posts) if `value` differs from the stored one.
    pub fn set(&mut self, value: T, mq: &mut impl EventSink) -> bool {
        if !latch(&mut self.value, value) {
            return false;
        }
        mq.emit(Message::new(Kind::State, self.id, value.to_arg()));
        true
    }

    /// `set` with the logical negation of the current value.
    #[inline]
    pub fn toggle(&mut self, mq: &mut impl EventSink) -> bool {
        self.set(self.value.negate(), mq)
    }

    #[inline]
    pub const fn id(&self) -> i32 {
        self.id
    }

    #[inline]
    pub fn get(&self) -> T {
        self.value
    }
}
