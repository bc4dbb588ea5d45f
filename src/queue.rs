//! Fixed-capacity overwrite queue for superloop events.
//!
//! # Overview
//! - Single producer, single consumer, both running on the poll loop.
//! - The producer never blocks and never sees "full": posting into a saturated queue evicts the
//!   oldest unread message.
//! - `N` slots hold at most `N - 1` live messages; one slot stays free so that
//!   `producer == consumer` always means "empty".
//! - Reading an empty queue yields [`Message::IDLE`] and changes nothing.
//!
//! # Index arithmetic
//! Cursors are reduced with `& (N - 1)`, which is why `N` must be a power of two. The check is a
//! compile-time assertion in [`MessageQueue::new`].
//!
//! # Notes
//! - There is no atomicity: if an interrupt handler posts while the loop drains, the caller must
//!   provide its own critical section.
//! - Evictions are counted in [`MessageQueue::dropped`]; with [`MessageQueue::set_debug`] they are
//!   also logged.

use crate::message::{Kind, Message};

/// Overwrite ring of [`Message`]s with `N` slots.
pub struct MessageQueue<const N: usize> {
    producer: usize,
    consumer: usize,
    dropped: u32,
    debug: bool,
    slots: [Message; N],
}

impl<const N: usize> MessageQueue<N> {
    pub const fn new() -> Self {
        const {
            assert!(
                N >= 2 && N.is_power_of_two(),
                "MessageQueue capacity must be a power of two of at least 2"
            )
        };
        Self {
            producer: 0,
            consumer: 0,
            dropped: 0,
            debug: false,
            slots: [Message::IDLE; N],
        }
    }

    #[inline(always)]
    const fn wrap(idx: usize) -> usize {
        idx & (N - 1)
    }

    /// Number of messages the queue can hold before it starts evicting.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    #[inline]
    pub const fn len(&self) -> usize {
        Self::wrap(self.producer.wrapping_sub(self.consumer))
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.producer == self.consumer
    }

    /// Post a message. If the queue is saturated the oldest unread message is dropped.
    ///
    /// `Kind::Idle` is the empty sentinel and is never stored; posting it does nothing.
    #[inline]
    pub fn post_message(&mut self, kind: Kind, arg1: i32, arg2: u32) {
        self.post(Message::new(kind, arg1, arg2));
    }

    /// [`post_message`](Self::post_message) taking a whole record.
    pub fn post(&mut self, msg: Message) {
        if msg.is_idle() {
            return;
        }

        self.slots[self.producer] = msg;
        self.producer = Self::wrap(self.producer + 1);

        if self.producer == self.consumer {
            // Caught up with the reader: make room by discarding the oldest record.
            self.consumer = Self::wrap(self.consumer + 1);
            self.dropped = self.dropped.saturating_add(1);
            if self.debug {
                warn!("MessageQueue: queue full, message dropped");
            }
        }
    }

    /// Take the oldest message, or [`Message::IDLE`] if nothing is pending.
    pub fn get_message(&mut self) -> Message {
        if self.is_empty() {
            return Message::IDLE;
        }

        let msg = self.slots[self.consumer];
        self.consumer = Self::wrap(self.consumer + 1);
        msg
    }

    /// The oldest message without consuming it.
    ///
    /// Slot memory is left untouched when the queue is empty.
    #[inline]
    pub fn peek_message(&self) -> Option<Message> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.consumer])
        }
    }

    /// Consume at most `max` messages (in order), handing each to `hook`.
    /// Returns how many were delivered.
    pub fn drain_up_to(&mut self, max: usize, mut hook: impl FnMut(&Message)) -> usize {
        let mut read = 0usize;
        while read < max {
            let msg = self.get_message();
            if msg.is_idle() {
                break;
            }
            hook(&msg);
            read += 1;
        }
        read
    }

    /// Iterator that consumes messages until the queue is empty.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, N> {
        Drain { queue: self }
    }

    /// Discard everything pending. The drop counter is not affected.
    #[inline]
    pub fn clear(&mut self) {
        self.consumer = self.producer;
    }

    /// How many messages have been evicted since creation (or since reset).
    #[inline]
    pub const fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Reset the eviction counter.
    #[inline]
    pub fn reset_dropped(&mut self) {
        self.dropped = 0;
    }

    /// Log every eviction when enabled.
    #[inline]
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    #[inline]
    pub const fn debug(&self) -> bool {
        self.debug
    }
}

impl<const N: usize> Default for MessageQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Draining iterator returned by [`MessageQueue::drain`].
pub struct Drain<'a, const N: usize> {
    queue: &'a mut MessageQueue<N>,
}

impl<const N: usize> Iterator for Drain<'_, N> {
    type Item = Message;

    #[inline]
    fn next(&mut self) -> Option<Message> {
        let msg = self.queue.get_message();
        if msg.is_idle() { None } else { Some(msg) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

#[cfg(test)]
mod tests {
    use super::MessageQueue;
    use crate::message::{Kind, Message};
    use std::vec::Vec;

    fn user(tag: u8) -> Kind {
        Kind::user(tag).unwrap()
    }

    fn tags<const N: usize>(q: &mut MessageQueue<N>) -> Vec<u8> {
        q.drain().map(|m| m.kind.tag()).collect()
    }

    #[test]
    fn get_on_empty_returns_idle() {
        let mut q = MessageQueue::<4>::new();
        assert_eq!(q.get_message(), Message::IDLE);
        assert_eq!(q.get_message(), Message::IDLE);
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn posts_in_order() {
        let mut q = MessageQueue::<8>::new();
        q.post_message(Kind::Timer, 1, 10);
        q.post_message(Kind::DigitalRead, 2, 11);
        q.post_message(Kind::AnalogRead, 3, 12);

        assert_eq!(q.len(), 3);
        assert_eq!(q.get_message(), Message::new(Kind::Timer, 1, 10));
        assert_eq!(q.get_message(), Message::new(Kind::DigitalRead, 2, 11));
        assert_eq!(q.get_message(), Message::new(Kind::AnalogRead, 3, 12));
        assert_eq!(q.get_message(), Message::IDLE);
    }

    #[test]
    fn holds_capacity_minus_one_without_loss() {
        let mut q = MessageQueue::<16>::new();
        for i in 0..15 {
            q.post_message(Kind::State, i, i as u32);
        }
        assert_eq!(q.len(), 15);
        assert_eq!(q.dropped(), 0);

        let got: Vec<i32> = q.drain().map(|m| m.arg1).collect();
        assert_eq!(got, (0..15).collect::<Vec<_>>());
        assert!(q.get_message().is_idle());
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut q = MessageQueue::<4>::new();
        for tag in 1..=5 {
            q.post_message(user(tag), 0, 0);
        }

        assert_eq!(q.len(), 3);
        assert_eq!(q.dropped(), 2);
        assert_eq!(tags(&mut q), [user(3).tag(), user(4).tag(), user(5).tag()]);
        assert!(q.get_message().is_idle());
    }

    #[test]
    fn keeps_newest_after_long_saturation() {
        let mut q = MessageQueue::<8>::new();
        for i in 0..100 {
            q.post_message(Kind::State, i, 0);
        }
        assert_eq!(q.dropped(), 93);
        let got: Vec<i32> = q.drain().map(|m| m.arg1).collect();
        assert_eq!(got, (93..100).collect::<Vec<_>>());
    }

    #[test]
    fn wraps_while_interleaving() {
        let mut q = MessageQueue::<4>::new();
        for i in 0..50 {
            q.post_message(Kind::State, i, 0);
            q.post_message(Kind::State, i + 1000, 0);
            assert_eq!(q.get_message().arg1, i);
            assert_eq!(q.get_message().arg1, i + 1000);
        }
        assert!(q.is_empty());
        assert_eq!(q.dropped(), 0);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut q = MessageQueue::<4>::new();
        assert_eq!(q.peek_message(), None);

        q.post_message(Kind::Timer, 7, 0);
        assert_eq!(q.peek_message(), Some(Message::new(Kind::Timer, 7, 0)));
        assert_eq!(q.len(), 1);
        assert_eq!(q.get_message(), Message::new(Kind::Timer, 7, 0));
        assert_eq!(q.peek_message(), None);
    }

    #[test]
    fn idle_is_never_stored() {
        let mut q = MessageQueue::<4>::new();
        q.post(Message::IDLE);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_up_to_respects_max() {
        let mut q = MessageQueue::<8>::new();
        for i in 0..5 {
            q.post_message(Kind::AnalogRead, i, 0);
        }

        let mut seen = Vec::new();
        assert_eq!(q.drain_up_to(3, |m| seen.push(m.arg1)), 3);
        assert_eq!(&seen[..], &[0, 1, 2]);
        assert_eq!(q.drain_up_to(10, |m| seen.push(m.arg1)), 2);
        assert_eq!(&seen[..], &[0, 1, 2, 3, 4]);
        assert_eq!(q.drain_up_to(0, |_| {}), 0);
    }

    #[test]
    fn clear_and_reset_dropped() {
        let mut q = MessageQueue::<2>::new();
        q.set_debug(true);
        assert!(q.debug());
        q.post_message(Kind::Timer, 1, 0);
        q.post_message(Kind::Timer, 2, 0);
        assert_eq!(q.capacity(), 1);
        assert_eq!(q.dropped(), 1);
        assert_eq!(q.peek_message().map(|m| m.arg1), Some(2));

        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.dropped(), 1);
        q.reset_dropped();
        assert_eq!(q.dropped(), 0);
    }
}
