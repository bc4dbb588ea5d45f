//! Wraparound-safe deadlines.
//!
//! Clock readings are free-running `u32` counters that wrap. A deadline is compared against the
//! current reading by subtraction, so one wrap between arming and checking is harmless as long as
//! the real time between two checks stays under half the counter range (`2^31` ticks).
//!
//! The value `0` is reserved to mean "disarmed" for every poller. Arming never produces it: a
//! deadline that would land exactly on `0` is moved one tick later.

/// Largest tick distance that still compares correctly.
pub(crate) const HALF_RANGE: u32 = 1 << 31;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline(u32);

impl Deadline {
    pub const DISARMED: Deadline = Deadline(0);

    /// Deadline `duration` ticks after `now`.
    #[inline]
    pub const fn after(now: u32, duration: u32) -> Self {
        Self::at(now.wrapping_add(duration))
    }

    /// Deadline at an absolute tick, avoiding the disarmed sentinel.
    #[inline]
    pub const fn at(tick: u32) -> Self {
        if tick == 0 { Deadline(1) } else { Deadline(tick) }
    }

    #[inline]
    pub const fn is_armed(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn tick(self) -> u32 {
        self.0
    }

    /// `deadline < now`, modulo wrap. Always false when disarmed.
    #[inline]
    pub const fn passed(self, now: u32) -> bool {
        self.is_armed() && {
            let elapsed = now.wrapping_sub(self.0);
            elapsed != 0 && elapsed < HALF_RANGE
        }
    }

    /// `deadline <= now`, modulo wrap. Always false when disarmed.
    #[inline]
    pub const fn reached(self, now: u32) -> bool {
        self.is_armed() && now.wrapping_sub(self.0) < HALF_RANGE
    }

    /// Ticks elapsed since the deadline; `0` if it has not been reached.
    #[inline]
    pub const fn overshoot(self, now: u32) -> u32 {
        if self.reached(now) {
            now.wrapping_sub(self.0)
        } else {
            0
        }
    }

    /// Next deadline for a periodic action, shortened by how late this one was observed.
    ///
    /// Scheduling `now + (interval - overshoot)` keeps the long-run period at `interval` under
    /// irregular polling. Modulo wrap this is `deadline + interval`, so after a stall of several
    /// periods the following calls fire back to back until the schedule is caught up.
    #[inline]
    pub const fn next_compensated(self, now: u32, interval: u32) -> Self {
        let late = self.overshoot(now);
        Self::at(now.wrapping_add(interval.wrapping_sub(late)))
    }
}
