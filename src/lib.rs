//! Nanosecond-precision wire timestamps with signed, attosecond-resolution
//! durations.
//!
//! # Overview
//!
//! Serialization formats commonly represent a point in time as a pair of
//! integer components: a 64-bit signed number of seconds relative to an
//! epoch, and a positive sub-second number of nanoseconds. This crate
//! provides [`Timestamp`], a plain value type for such wire timestamps, and
//! [`Duration`], a signed elapsed time with attosecond resolution (1as =
//! 10⁻¹⁸s), together with the arithmetic that relates them:
//!
//! - total ordering of timestamps, by seconds first and by nanoseconds as
//!   the tie-break,
//! - advancing a timestamp by a duration, with the sub-nanosecond part of
//!   the duration rounded to the nearest whole nanosecond using
//!   round-half-to-even,
//! - measuring the signed duration from one timestamp to another, exactly.
//!
//! Round-trips are exact: for any timestamps `a` and `b`,
//! `a.advanced_by(a.duration_to(b)) == b`.
//!
//! The [`Instant`] trait captures the advancing/measuring contract for
//! generic collaborators such as the surrounding codec or a scheduler.
//!
//!
//! # Design choices and limitations
//!
//! How the two timestamp components are packed into bytes is owned by the
//! surrounding serialization layer; this crate only guarantees that the
//! component values it is handed round-trip exactly through its arithmetic.
//!
//! All arithmetic is overflow-checked: the plain operations panic on
//! overflow while their `checked_*` counterparts return `None`. Results are
//! never silently wrapped, since a wrapped seconds field would corrupt the
//! ordering and round-trip guarantees.
//!
//! Leap seconds are never accounted for, and no calendar, time zone,
//! date-time parsing or formatting facilities are provided. These can be
//! performed using other crates such as [chrono].
//!
//! [chrono]: https://crates.io/crates/chrono
//!
//!
//! # Features flags
//!
//! ### Support for `no-std`
//!
//! By default, this crate enables the `std` feature to allow conversion
//! to/from `std::time::SystemTime`, but specifying `default-features =
//! false` makes it `no-std`-compatible.
//!
//! ### Serialization
//!
//! [`Timestamp`], [`Duration`] and related error types can be (de)serialized
//! with `serde` by activating the `serde` feature.
//!
//!
//! # Examples
//!
//! ```
//! use atto_time::{Duration, Timestamp};
//!
//! // A timestamp dated 2009-02-13 23:31:30.987654321 UTC.
//! let t0 = Timestamp::new(1_234_567_890, 987_654_321);
//!
//! // The same timestamp, 1.5s later.
//! let t1 = t0.advanced_by(Duration::seconds(1) + Duration::nanoseconds(500_000_000));
//! assert_eq!(t1, Timestamp::new(1_234_567_892, 487_654_321));
//!
//! // The signed distance back from `t1` to `t0` is -1.5s.
//! assert_eq!(
//!     t1.duration_to(t0).components(),
//!     (-2, 500_000_000_000_000_000)
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod duration;
mod errors;

pub use duration::Duration;
pub use errors::OverflowError;

use core::ops::{Add, AddAssign, Sub};

use duration::ATTOS_PER_NANO;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// An exact half-nanosecond, in attoseconds.
const HALF_NANO: i64 = ATTOS_PER_NANO / 2;

/// A point in time that can be advanced by a [`Duration`] and measured
/// against other instants of the same type.
///
/// This is the contract consumed by generic collaborators that only need to
/// move instants forward or backward in time and compare them, irrespective
/// of the concrete representation.
///
/// # Examples
///
/// ```
/// use atto_time::{Duration, Instant, Timestamp};
///
/// fn one_second_later<T: Instant>(instant: T) -> T {
///     instant.advanced_by(Duration::seconds(1))
/// }
///
/// assert_eq!(one_second_later(Timestamp::EPOCH), Timestamp::new(1, 0));
/// ```
pub trait Instant: Copy + Ord {
    /// Returns the instant advanced by the provided duration.
    fn advanced_by(self, duration: Duration) -> Self;

    /// Returns the signed duration from this instant to the other instant.
    fn duration_to(self, other: Self) -> Duration;
}

/// A nanosecond-precision wire timestamp.
///
/// A timestamp specifies a point in time represented as a 64-bit signed
/// number of seconds and a positive number of nanoseconds, relative to the
/// epoch defined by the wire format it is exchanged with.
///
/// # Examples
///
/// ```
/// use atto_time::{Duration, Timestamp};
///
/// // A timestamp set to 2009-02-13 23:31:30.333333333 UTC.
/// let mut timestamp = Timestamp::new(1_234_567_890, 333_333_333);
///
/// // Increment the timestamp by 123.456s.
/// timestamp += Duration::seconds(123) + Duration::nanoseconds(456_000_000);
///
/// assert_eq!(timestamp, Timestamp::new(1_234_568_013, 789_333_333));
/// assert_eq!(timestamp.as_secs(), 1_234_568_013);
/// assert_eq!(timestamp.subsec_nanos(), 789_333_333);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    /// The number of whole seconds in the future (if positive) or in the
    /// past (if negative) of the epoch.
    ///
    /// Note that the automatic derivation of `PartialOrd` relies on
    /// lexicographical comparison so the `secs` field must appear before
    /// `nanos` in declaration order to be given higher priority.
    secs: i64,
    /// The sub-second number of nanoseconds in the future of the point in
    /// time defined by `secs`.
    ///
    /// Invariant: `0 <= nanos <= 999_999_999`.
    nanos: u32,
}

impl Timestamp {
    /// The reference epoch, which by definition is always a null timestamp.
    pub const EPOCH: Self = Self { secs: 0, nanos: 0 };

    /// The minimum possible `Timestamp`.
    pub const MIN: Self = Self {
        secs: i64::MIN,
        nanos: 0,
    };

    /// The maximum possible `Timestamp`.
    pub const MAX: Self = Self {
        secs: i64::MAX,
        nanos: NANOS_PER_SEC - 1,
    };

    /// Creates a timestamp relative to the epoch.
    ///
    /// The number of seconds is negative for dates in the past of the epoch.
    /// The number of nanoseconds is always positive and always points
    /// towards the future.
    ///
    /// # Panics
    ///
    /// This constructor will panic if the number of nanoseconds is greater
    /// than or equal to 1 second.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Timestamp;
    ///
    /// // A timestamp set to 2009-02-13 23:31:30.987654321 UTC.
    /// let timestamp = Timestamp::new(1_234_567_890, 987_654_321);
    /// ```
    pub const fn new(secs: i64, subsec_nanos: u32) -> Self {
        assert!(
            subsec_nanos < NANOS_PER_SEC,
            "invalid number of nanoseconds"
        );

        Self {
            secs,
            nanos: subsec_nanos,
        }
    }

    /// Creates a timestamp from the system clock.
    ///
    /// This is a shorthand for `from_system_time(&SystemTime::now())`.
    ///
    /// Returns an error if the system clock is set before the Unix epoch or
    /// outside the representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Timestamp;
    ///
    /// let timestamp = Timestamp::now().unwrap();
    /// ```
    #[cfg(feature = "std")]
    pub fn now() -> Result<Self, OverflowError> {
        Self::from_system_time(&std::time::SystemTime::now())
    }

    /// Creates a timestamp from a `SystemTime` timestamp.
    ///
    /// Returns an error if the provided timestamp predates the Unix epoch or
    /// is outside the representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, SystemTime};
    /// use atto_time::Timestamp;
    ///
    /// // A `SystemTime` corresponding to 2001-09-15 05:05:00.005 UTC.
    /// let system_time = SystemTime::UNIX_EPOCH + Duration::new(1_000_530_300, 5_000_000);
    /// assert_eq!(
    ///     Timestamp::from_system_time(&system_time),
    ///     Ok(Timestamp::new(1_000_530_300, 5_000_000))
    /// );
    /// ```
    #[cfg(feature = "std")]
    pub fn from_system_time(
        system_time: &std::time::SystemTime,
    ) -> Result<Self, OverflowError> {
        let unix_time = system_time
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_err(|_| OverflowError(()))?;

        let secs = i64::try_from(unix_time.as_secs()).map_err(|_| OverflowError(()))?;

        Ok(Self {
            secs,
            nanos: unix_time.subsec_nanos(),
        })
    }

    /// Returns a `SystemTime` based on the timestamp.
    ///
    /// Returns an error if the timestamp predates the Unix epoch or is
    /// outside the range representable by `SystemTime`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, SystemTime};
    /// use atto_time::Timestamp;
    ///
    /// // A timestamp set to 2000-01-01 00:00:00.123 UTC.
    /// let timestamp = Timestamp::new(946_684_800, 123_000_000);
    ///
    /// assert_eq!(
    ///     timestamp.to_system_time(),
    ///     Ok(SystemTime::UNIX_EPOCH + Duration::new(946_684_800, 123_000_000))
    /// );
    /// ```
    #[cfg(feature = "std")]
    pub fn to_system_time(&self) -> Result<std::time::SystemTime, OverflowError> {
        let secs = u64::try_from(self.secs).map_err(|_| OverflowError(()))?;

        std::time::SystemTime::UNIX_EPOCH
            .checked_add(std::time::Duration::new(secs, self.nanos))
            .ok_or(OverflowError(()))
    }

    /// Returns the number of whole seconds relative to the
    /// [`EPOCH`](Timestamp::EPOCH).
    ///
    /// Consistently with the interpretation of seconds and nanoseconds in
    /// the [`new()`](Timestamp::new) constructor, seconds are always rounded
    /// towards `-∞`.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::{Duration, Timestamp};
    ///
    /// let timestamp = Timestamp::new(1_234_567_890, 987_654_321);
    /// assert_eq!(timestamp.as_secs(), 1_234_567_890);
    ///
    /// let timestamp = Timestamp::EPOCH.advanced_by(Duration::seconds(-4));
    /// assert_eq!(timestamp.as_secs(), -4);
    /// ```
    pub const fn as_secs(&self) -> i64 {
        self.secs
    }

    /// Returns the sub-second fractional part in nanoseconds.
    ///
    /// Note that nanoseconds always point towards the future even if the
    /// date is in the past of the [`EPOCH`](Timestamp::EPOCH).
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Timestamp;
    ///
    /// let timestamp = Timestamp::new(1_234_567_890, 987_654_321);
    /// assert_eq!(timestamp.subsec_nanos(), 987_654_321);
    /// ```
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// Returns the timestamp advanced by the provided duration.
    ///
    /// The sub-nanosecond part of the duration is rounded to the nearest
    /// whole number of nanoseconds, with exact half-nanosecond remainders
    /// rounded to the even neighbor so that ties carry no systematic upward
    /// bias. A duration with a negative seconds component moves the
    /// timestamp towards the past.
    ///
    /// # Panics
    ///
    /// This function panics if the duration reports a negative attosecond
    /// component, which a normalized [`Duration`] never does, or if the
    /// resulting timestamp cannot be represented. See
    /// [`checked_advanced_by`](Self::checked_advanced_by) for a version that
    /// returns `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::{Duration, Timestamp};
    ///
    /// let timestamp = Timestamp::new(1_234_567_890, 987_654_321);
    /// assert_eq!(
    ///     timestamp.advanced_by(Duration::seconds(1) + Duration::nanoseconds(500_000_000)),
    ///     Timestamp::new(1_234_567_892, 487_654_321)
    /// );
    ///
    /// // An exact half-nanosecond rounds to the even neighbor.
    /// let timestamp = Timestamp::EPOCH;
    /// assert_eq!(timestamp.advanced_by(Duration::attoseconds(500_000_000)).subsec_nanos(), 0);
    /// assert_eq!(timestamp.advanced_by(Duration::attoseconds(1_500_000_000)).subsec_nanos(), 2);
    /// ```
    pub const fn advanced_by(self, duration: Duration) -> Self {
        match self.checked_advanced_by(duration) {
            Some(timestamp) => timestamp,
            None => panic!("overflow when advancing timestamp by duration"),
        }
    }

    /// Returns the timestamp advanced by the provided duration, checking for
    /// overflow.
    ///
    /// Returns `None` if the resulting timestamp cannot be represented.
    ///
    /// # Panics
    ///
    /// This function panics if the duration reports a negative attosecond
    /// component, which a normalized [`Duration`] never does.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::{Duration, Timestamp};
    ///
    /// let timestamp = Timestamp::new(1_234_567_890, 987_654_321);
    /// assert!(timestamp.checked_advanced_by(Duration::seconds(10)).is_some());
    /// assert!(Timestamp::MAX.checked_advanced_by(Duration::seconds(1)).is_none());
    /// ```
    pub const fn checked_advanced_by(self, duration: Duration) -> Option<Self> {
        let (secs_to_add, attos_to_add) = duration.components();
        assert!(
            attos_to_add >= 0,
            "negative attosecond component in duration"
        );

        let secs = match self.secs.checked_add(secs_to_add) {
            Some(secs) => secs,
            None => return None,
        };

        // Round the attoseconds to the nearest whole nanosecond, half to
        // even.
        let mut nanos_to_add = attos_to_add / ATTOS_PER_NANO;
        let remainder = attos_to_add % ATTOS_PER_NANO;
        if remainder > HALF_NANO || (remainder == HALF_NANO && nanos_to_add % 2 != 0) {
            nanos_to_add += 1;
        }

        // `nanos_to_add` is at most 10^9 after rounding, so the sum may
        // exceed the valid range by less than one second and a single carry
        // is enough.
        let nanos = self.nanos as i64 + nanos_to_add;
        if nanos >= NANOS_PER_SEC as i64 {
            let secs = match secs.checked_add(1) {
                Some(secs) => secs,
                None => return None,
            };

            Some(Self {
                secs,
                nanos: (nanos - NANOS_PER_SEC as i64) as u32,
            })
        } else {
            Some(Self {
                secs,
                nanos: nanos as u32,
            })
        }
    }

    /// Returns the signed duration from this timestamp to the other
    /// timestamp.
    ///
    /// The result is negative if the other timestamp is in the past of this
    /// timestamp, and is always exact: advancing this timestamp by the
    /// returned duration yields the other timestamp.
    ///
    /// # Panics
    ///
    /// This function panics if the seconds difference between the timestamps
    /// cannot be represented. See
    /// [`checked_duration_to`](Self::checked_duration_to) for a panic-free
    /// version.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Timestamp;
    ///
    /// let t0 = Timestamp::new(5, 0);
    /// let t1 = Timestamp::new(3, 500_000_000);
    ///
    /// // -1.5s.
    /// assert_eq!(t0.duration_to(t1).components(), (-2, 500_000_000_000_000_000));
    /// ```
    pub const fn duration_to(self, other: Self) -> Duration {
        match self.checked_duration_to(other) {
            Some(duration) => duration,
            None => panic!("overflow when computing duration between timestamps"),
        }
    }

    /// Returns the signed duration from this timestamp to the other
    /// timestamp, checking for overflow.
    ///
    /// Returns `None` if the seconds difference between the timestamps
    /// cannot be represented.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Timestamp;
    ///
    /// assert!(Timestamp::EPOCH.checked_duration_to(Timestamp::MAX).is_some());
    /// assert!(Timestamp::MIN.checked_duration_to(Timestamp::MAX).is_none());
    /// ```
    pub const fn checked_duration_to(self, other: Self) -> Option<Duration> {
        let secs_to_other = match other.secs.checked_sub(self.secs) {
            Some(secs) => secs,
            None => return None,
        };
        let nanos_to_other = other.nanos as i64 - self.nanos as i64;

        // Each addend normalizes independently: a negative nanosecond
        // difference borrows a second inside `Duration::nanoseconds` before
        // the final add, so the result always satisfies the duration
        // invariant.
        Duration::seconds(secs_to_other).checked_add(Duration::nanoseconds(nanos_to_other))
    }
}

impl Instant for Timestamp {
    fn advanced_by(self, duration: Duration) -> Self {
        self.advanced_by(duration)
    }

    fn duration_to(self, other: Self) -> Duration {
        self.duration_to(other)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    /// Advances the timestamp by a duration.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting timestamp cannot be
    /// represented. See [`Timestamp::checked_advanced_by`] for a panic-free
    /// version.
    fn add(self, duration: Duration) -> Self {
        self.advanced_by(duration)
    }
}

impl AddAssign<Duration> for Timestamp {
    /// Advances the timestamp by a duration, in place.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting timestamp cannot be
    /// represented.
    fn add_assign(&mut self, duration: Duration) {
        *self = *self + duration;
    }
}

impl Sub for Timestamp {
    type Output = Duration;

    /// Returns the signed duration from the other timestamp to this
    /// timestamp.
    ///
    /// # Panics
    ///
    /// This function panics if the seconds difference between the timestamps
    /// cannot be represented. See [`Timestamp::checked_duration_to`] for a
    /// panic-free version.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::{Duration, Timestamp};
    ///
    /// let t0 = Timestamp::new(100, 500_000_000);
    /// let t1 = Timestamp::new(101, 0);
    ///
    /// assert_eq!(t1 - t0, Duration::nanoseconds(500_000_000));
    /// ```
    fn sub(self, other: Self) -> Duration {
        other.duration_to(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality() {
        let t0 = Timestamp::new(123, 123_456_789);
        let t1 = Timestamp::new(123, 123_456_789);
        let t2 = Timestamp::new(123, 123_456_790);
        let t3 = Timestamp::new(124, 123_456_789);

        assert_eq!(t0, t1);
        assert_ne!(t0, t2);
        assert_ne!(t0, t3);
    }

    #[test]
    fn ordering() {
        let t0 = Timestamp::new(0, 1);
        let t1 = Timestamp::new(1, 0);

        assert!(t1 > t0);

        // Equal seconds are tie-broken by the nanoseconds.
        let t0 = Timestamp::new(5, 100);
        let t1 = Timestamp::new(5, 101);

        assert!(t0 < t1);

        // Negative seconds sort before the epoch regardless of nanoseconds.
        let t0 = Timestamp::new(-1, 999_999_999);
        let t1 = Timestamp::EPOCH;

        assert!(t0 < t1);
    }

    #[test]
    #[should_panic]
    fn invalid() {
        Timestamp::new(123, 1_000_000_000);
    }

    #[test]
    fn advanced_by_smoke() {
        let t = Timestamp::new(-100, 100_000_000);
        let dt = Duration::new(400, 300_000_000_000_000_000);

        assert_eq!(t.advanced_by(dt), Timestamp::new(300, 400_000_000));
    }

    #[test]
    fn advanced_by_with_carry() {
        let t = Timestamp::new(-100, 900_000_000);
        let dt1 = Duration::new(400, 100_000_000_000_000_000);
        let dt2 = Duration::new(400, 300_000_000_000_000_000);

        assert_eq!(t.advanced_by(dt1), Timestamp::new(301, 0));
        assert_eq!(t.advanced_by(dt2), Timestamp::new(301, 200_000_000));
    }

    #[test]
    fn advanced_by_carry_boundary() {
        let t = Timestamp::new(0, 999_999_999);

        assert_eq!(t.advanced_by(Duration::nanoseconds(1)), Timestamp::new(1, 0));
    }

    #[test]
    fn advanced_by_rounds_half_to_even() {
        let t = Timestamp::EPOCH;

        // 0.5ns is a tie and 0 is even.
        assert_eq!(
            t.advanced_by(Duration::attoseconds(500_000_000)),
            Timestamp::new(0, 0)
        );
        // 1.5ns is a tie and 1 is odd.
        assert_eq!(
            t.advanced_by(Duration::attoseconds(1_500_000_000)),
            Timestamp::new(0, 2)
        );
        // 2.5ns is a tie and 2 is even.
        assert_eq!(
            t.advanced_by(Duration::attoseconds(2_500_000_000)),
            Timestamp::new(0, 2)
        );
        // Above and below the tie round to nearest.
        assert_eq!(
            t.advanced_by(Duration::attoseconds(500_000_001)),
            Timestamp::new(0, 1)
        );
        assert_eq!(
            t.advanced_by(Duration::attoseconds(499_999_999)),
            Timestamp::new(0, 0)
        );
    }

    #[test]
    fn advanced_by_rounding_into_carry() {
        // The largest normalized attosecond field rounds up to a full
        // second.
        let t = Timestamp::new(0, 123);
        let dt = Duration::attoseconds(999_999_999_999_999_999);

        assert_eq!(t.advanced_by(dt), Timestamp::new(1, 123));
    }

    #[test]
    fn advanced_by_negative_seconds() {
        let t = Timestamp::new(5, 250_000_000);

        assert_eq!(
            t.advanced_by(Duration::seconds(-2)),
            Timestamp::new(3, 250_000_000)
        );

        // -1.5s expressed as -2s + 0.5s forward.
        let dt = Duration::seconds(-1) + Duration::nanoseconds(-500_000_000);

        assert_eq!(dt.components(), (-2, 500_000_000_000_000_000));
        assert_eq!(t.advanced_by(dt), Timestamp::new(3, 750_000_000));
    }

    #[test]
    fn advanced_by_identity() {
        let timestamps = [
            Timestamp::EPOCH,
            Timestamp::new(-1, 999_999_999),
            Timestamp::new(1_234_567_890, 987_654_321),
        ];

        for t in timestamps {
            assert_eq!(t.advanced_by(Duration::seconds(0)), t);
        }
    }

    #[test]
    #[should_panic]
    fn advanced_by_overflow() {
        let _ = Timestamp::new(i64::MAX, 0).advanced_by(Duration::seconds(1));
    }

    #[test]
    fn checked_advanced_by_overflow() {
        assert_eq!(
            Timestamp::new(i64::MAX, 0).checked_advanced_by(Duration::seconds(1)),
            None
        );

        // The seconds only overflow on the nanosecond carry.
        assert_eq!(
            Timestamp::MAX.checked_advanced_by(Duration::nanoseconds(1)),
            None
        );
    }

    #[test]
    fn duration_to_smoke() {
        let t0 = Timestamp::new(100, 100_000_000);
        let t1 = Timestamp::new(123, 223_456_789);

        assert_eq!(
            t0.duration_to(t1).components(),
            (23, 123_456_789_000_000_000)
        );
    }

    #[test]
    fn duration_to_with_borrow() {
        let t0 = Timestamp::new(100, 200_000_000);
        let t1 = Timestamp::new(101, 100_000_000);

        assert_eq!(t0.duration_to(t1).components(), (0, 900_000_000_000_000_000));
    }

    #[test]
    fn duration_to_negative() {
        let t0 = Timestamp::new(5, 0);
        let t1 = Timestamp::new(3, 500_000_000);

        assert_eq!(
            t0.duration_to(t1).components(),
            (-2, 500_000_000_000_000_000)
        );
    }

    #[test]
    #[should_panic]
    fn duration_to_overflow() {
        let _ = Timestamp::MIN.duration_to(Timestamp::MAX);
    }

    #[test]
    fn checked_duration_to_overflow() {
        assert_eq!(Timestamp::MIN.checked_duration_to(Timestamp::MAX), None);

        // The seconds difference is representable but the nanosecond borrow
        // is not.
        assert_eq!(
            Timestamp::new(0, 500_000_000).checked_duration_to(Timestamp::MIN),
            None
        );
    }

    #[test]
    fn round_trip() {
        let pairs = [
            (Timestamp::new(5, 0), Timestamp::new(3, 500_000_000)),
            (Timestamp::new(0, 1), Timestamp::new(0, 999_999_999)),
            (Timestamp::new(-10, 999_999_999), Timestamp::new(7, 3)),
            (Timestamp::new(1_234_567_890, 987_654_321), Timestamp::EPOCH),
        ];

        for (a, b) in pairs {
            assert_eq!(a.advanced_by(a.duration_to(b)), b);
            assert_eq!(b.advanced_by(b.duration_to(a)), a);
        }
    }

    #[test]
    fn instant_contract() {
        fn advance<T: Instant>(instant: T, duration: Duration) -> T {
            instant.advanced_by(duration)
        }
        fn measure<T: Instant>(from: T, to: T) -> Duration {
            from.duration_to(to)
        }

        let t0 = Timestamp::new(100, 500_000_000);
        let t1 = Timestamp::new(103, 250_000_000);

        assert_eq!(advance(t0, measure(t0, t1)), t1);
    }

    #[test]
    fn add_operators() {
        let t = Timestamp::new(100, 900_000_000);
        let dt = Duration::nanoseconds(200_000_000);

        assert_eq!(t + dt, t.advanced_by(dt));

        let mut t2 = t;
        t2 += dt;
        assert_eq!(t2, Timestamp::new(101, 100_000_000));
    }

    #[test]
    fn sub_operator() {
        let t0 = Timestamp::new(100, 500_000_000);
        let t1 = Timestamp::new(103, 250_000_000);

        assert_eq!(t1 - t0, t0.duration_to(t1));
        assert_eq!((t1 - t0).components(), (2, 750_000_000_000_000_000));
    }

    #[cfg(feature = "std")]
    #[test]
    fn now_smoke() {
        const START_OF_2022: i64 = 1_640_995_200;
        const START_OF_2100: i64 = 4_102_444_800;

        let now_secs = Timestamp::now().unwrap().as_secs();

        assert!(now_secs > START_OF_2022);
        assert!(now_secs < START_OF_2100);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time_round_trip() {
        let t = Timestamp::new(1_000_530_300, 5_000_000);

        let system_time = t.to_system_time().unwrap();
        assert_eq!(
            system_time,
            std::time::SystemTime::UNIX_EPOCH
                + std::time::Duration::new(1_000_530_300, 5_000_000)
        );
        assert_eq!(Timestamp::from_system_time(&system_time), Ok(t));
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time_pre_epoch() {
        let system_time =
            std::time::SystemTime::UNIX_EPOCH - std::time::Duration::from_secs(1);

        assert_eq!(
            Timestamp::from_system_time(&system_time),
            Err(OverflowError(()))
        );
        assert_eq!(
            Timestamp::new(-1, 0).to_system_time(),
            Err(OverflowError(()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let t = Timestamp::new(1_234_567_890, 987_654_321);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), t);

        let dt = Duration::new(-2, 500_000_000_000_000_000);
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(serde_json::from_str::<Duration>(&json).unwrap(), dt);
    }
}
