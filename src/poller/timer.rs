use super::EventSink;
use crate::hal::Clock;
use crate::message::{Kind, Message};
use crate::time::Deadline;

/// One-shot or repeating millisecond timer.
///
/// ARMED fires `(Timer, id, 0)` once the deadline has passed, then either rearms for another
/// `interval_ms` (repeat) or disarms. [`reset`](Self::reset) and [`pause`](Self::pause) move
/// between the two states from outside the loop.
pub struct Timer {
    id: i32,
    interval_ms: u32,
    repeat: bool,
    deadline: Deadline,
}

impl Timer {
    /// A disarmed timer; call [`reset`](Self::reset) to start it.
    pub const fn new(id: i32, interval_ms: u32, repeat: bool) -> Self {
        Self {
            id,
            interval_ms,
            repeat,
            deadline: Deadline::DISARMED,
        }
    }

    /// A timer already running from `clock`'s current time.
    pub fn started(id: i32, interval_ms: u32, repeat: bool, clock: &impl Clock) -> Self {
        let mut timer = Self::new(id, interval_ms, repeat);
        timer.reset(clock);
        timer
    }

    /// Arm (or rearm) to fire `interval_ms` from now.
    #[inline]
    pub fn reset(&mut self, clock: &impl Clock) {
        self.deadline = Deadline::after(clock.now_millis(), self.interval_ms);
    }

    #[inline]
    pub fn pause(&mut self) {
        self.deadline = Deadline::DISARMED;
    }

    /// Returns true when the timer fired.
    pub fn execute(&mut self, clock: &impl Clock, mq: &mut impl EventSink) -> bool {
        let now = clock.now_millis();
        if !self.deadline.passed(now) {
            return false;
        }

        mq.emit(Message::new(Kind::Timer, self.id, 0));
        self.deadline = if self.repeat {
            Deadline::after(now, self.interval_ms)
        } else {
            Deadline::DISARMED
        };
        true
    }

    #[inline]
    pub const fn id(&self) -> i32 {
        self.id
    }

    #[inline]
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    #[inline]
    pub const fn repeats(&self) -> bool {
        self.repeat
    }

    #[inline]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_armed()
    }

    #[inline]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::Timer;
    use crate::message::{Kind, Message};
    use crate::queue::MessageQueue;
    use crate::testing::FakeClock;

    const MS: u32 = 1_000;

    #[test]
    fn one_shot_fires_once() {
        let clock = FakeClock::at(5 * MS);
        let mut q = MessageQueue::<8>::new();
        let mut t = Timer::started(2, 100, false, &clock);

        clock.advance(100 * MS);
        assert!(!t.execute(&clock, &mut q));
        clock.advance(MS);
        assert!(t.execute(&clock, &mut q));
        assert!(!t.is_armed());
        assert_eq!(t.deadline().tick(), 0);

        for _ in 0..10 {
            clock.advance(500 * MS);
            assert!(!t.execute(&clock, &mut q));
        }
        assert_eq!(q.get_message(), Message::new(Kind::Timer, 2, 0));
        assert!(q.is_empty());

        t.reset(&clock);
        clock.advance(101 * MS);
        assert!(t.execute(&clock, &mut q));
    }

    #[test]
    fn repeating_fires_until_paused() {
        let clock = FakeClock::at(MS);
        let mut q = MessageQueue::<16>::new();
        let mut t = Timer::started(7, 10, true, &clock);

        let mut fired = 0;
        for _ in 0..55 {
            clock.advance(MS);
            if t.execute(&clock, &mut q) {
                fired += 1;
            }
        }
        assert_eq!(fired, 5);
        assert!(t.is_armed());

        t.pause();
        for _ in 0..100 {
            clock.advance(MS);
            assert!(!t.execute(&clock, &mut q));
        }
        assert_eq!(q.len(), 5);
        assert!(q.drain().all(|m| m == Message::new(Kind::Timer, 7, 0)));
    }

    #[test]
    fn new_timer_is_disarmed() {
        let clock = FakeClock::at(0);
        let mut t = Timer::new(1, 10, true);
        clock.advance(1_000 * MS);
        assert!(!t.execute(&clock, &mut ()));
        assert!(!t.is_armed());
    }
}
