//! Message records and kinds.
//!
//! A message is a fixed-size `(kind, arg1, arg2)` triple. `arg1` carries the identity of the
//! poller that posted it and `arg2` carries the observed value (or `0` for kinds that have none).
//! The kind is a small tag; tags `1..=5` are built in and `100..=255` are free for applications.

use core::fmt;

/// First tag available to application-defined kinds.
pub const USER_BASE: u8 = 100;

/// Error returned when a raw tag does not map to a [`Kind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KindError {
    /// The tag lies in a range reserved for future built-in kinds (`0` or `6..=99`).
    Reserved(u8),
    /// `USER_BASE + offset` does not fit in a tag.
    UserOffset(u8),
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindError::Reserved(tag) => write!(f, "message tag {tag} is reserved"),
            KindError::UserOffset(offset) => {
                write!(f, "user kind offset {offset} overflows the tag range")
            }
        }
    }
}

impl core::error::Error for KindError {}

/// Application-defined kind. Always carries a tag of at least [`USER_BASE`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UserKind(u8);

impl UserKind {
    /// The kind `USER_BASE + offset`.
    pub const fn new(offset: u8) -> Result<Self, KindError> {
        match USER_BASE.checked_add(offset) {
            Some(tag) => Ok(Self(tag)),
            None => Err(KindError::UserOffset(offset)),
        }
    }

    #[inline]
    pub const fn tag(self) -> u8 {
        self.0
    }

    /// Distance from [`USER_BASE`].
    #[inline]
    pub const fn offset(self) -> u8 {
        self.0 - USER_BASE
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Kind {
    /// Returned by reads on an empty queue. Never stored.
    Idle,
    Timer,
    State,
    DigitalRead,
    AnalogRead,
    User(UserKind),
}

impl Kind {
    /// Shorthand for `Kind::User(UserKind::new(offset)?)`.
    pub const fn user(offset: u8) -> Result<Self, KindError> {
        match UserKind::new(offset) {
            Ok(kind) => Ok(Kind::User(kind)),
            Err(e) => Err(e),
        }
    }

    /// Raw tag as used on the original `int msg` interface.
    pub const fn tag(self) -> u8 {
        match self {
            Kind::Idle => 1,
            Kind::Timer => 2,
            Kind::State => 3,
            Kind::DigitalRead => 4,
            Kind::AnalogRead => 5,
            Kind::User(user) => user.tag(),
        }
    }
}

impl From<Kind> for u8 {
    #[inline]
    fn from(kind: Kind) -> u8 {
        kind.tag()
    }
}

impl TryFrom<u8> for Kind {
    type Error = KindError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Kind::Idle),
            2 => Ok(Kind::Timer),
            3 => Ok(Kind::State),
            4 => Ok(Kind::DigitalRead),
            5 => Ok(Kind::AnalogRead),
            t if t >= USER_BASE => Ok(Kind::User(UserKind(t))),
            t => Err(KindError::Reserved(t)),
        }
    }
}

/// One queued event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Message {
    pub kind: Kind,
    /// Identity of the source.
    pub arg1: i32,
    /// Payload; `0` when the kind carries no value.
    pub arg2: u32,
}

impl Message {
    /// The sentinel handed out when nothing is pending.
    pub const IDLE: Message = Message::new(Kind::Idle, 0, 0);

    #[inline]
    pub const fn new(kind: Kind, arg1: i32, arg2: u32) -> Self {
        Self { kind, arg1, arg2 }
    }

    #[inline]
    pub const fn is_idle(&self) -> bool {
        matches!(self.kind, Kind::Idle)
    }
}

impl Default for Message {
    fn default() -> Self {
        Message::IDLE
    }
}
