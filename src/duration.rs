//! Signed elapsed time with attosecond resolution.

use core::ops::{Add, AddAssign};

/// The number of attoseconds in one second.
pub(crate) const ATTOS_PER_SEC: i64 = 1_000_000_000_000_000_000;

/// The number of attoseconds in one nanosecond.
pub(crate) const ATTOS_PER_NANO: i64 = 1_000_000_000;

/// A signed span of time with attosecond resolution.
///
/// A duration is represented as a 64-bit signed number of seconds and a
/// positive sub-second number of attoseconds (1as = 10⁻¹⁸s). The represented
/// span is always `secs + attos/10^18`, so negative spans carry the sign in
/// the seconds: -0.5s is 1 second in the past plus 0.5s towards the future.
///
/// All constructors normalize their arguments to this canonical form, folding
/// whole seconds out of the attosecond argument with floor semantics so that
/// the stored attoseconds are always in `[0, 10^18)`.
///
/// # Examples
///
/// ```
/// use atto_time::Duration;
///
/// let dt = Duration::seconds(1) + Duration::nanoseconds(500_000_000);
/// assert_eq!(dt.components(), (1, 500_000_000_000_000_000));
///
/// // A span of -0.5s.
/// let dt = Duration::nanoseconds(-500_000_000);
/// assert_eq!(dt.components(), (-1, 500_000_000_000_000_000));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    /// The number of whole seconds, negative for spans directed towards the
    /// past.
    secs: i64,
    /// The sub-second number of attoseconds, always positive and always
    /// pointing towards the future of the point in time defined by `secs`.
    ///
    /// Invariant: `0 <= attos < ATTOS_PER_SEC`.
    attos: i64,
}

impl Duration {
    /// A duration spanning no time.
    pub const ZERO: Self = Self { secs: 0, attos: 0 };

    /// Creates a normalized duration from a number of seconds and a number of
    /// attoseconds of any sign.
    ///
    /// Whole seconds are folded out of the attosecond argument with floor
    /// semantics: the stored sub-second attoseconds are always in `[0,
    /// 10^18)`, and a negative attosecond argument borrows from the seconds.
    ///
    /// # Panics
    ///
    /// This constructor panics if the carried seconds overflow the 64-bit
    /// range. See [`checked_new`](Self::checked_new) for a panic-free
    /// version.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Duration;
    ///
    /// // 1s - 0.25s = 0.75s.
    /// let dt = Duration::new(1, -250_000_000_000_000_000);
    /// assert_eq!(dt.components(), (0, 750_000_000_000_000_000));
    ///
    /// // 2.5e18 attoseconds carry 2 whole seconds.
    /// let dt = Duration::new(0, 2_500_000_000_000_000_000);
    /// assert_eq!(dt.components(), (2, 500_000_000_000_000_000));
    /// ```
    pub const fn new(secs: i64, attos: i64) -> Self {
        match Self::checked_new(secs, attos) {
            Some(duration) => duration,
            None => panic!("overflow when normalizing duration"),
        }
    }

    /// Creates a normalized duration, checking for overflow.
    ///
    /// Returns `None` if the seconds carried out of the attosecond argument
    /// overflow the 64-bit range.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Duration;
    ///
    /// assert!(Duration::checked_new(1, -250_000_000_000_000_000).is_some());
    /// assert!(Duration::checked_new(i64::MAX, 1_000_000_000_000_000_000).is_none());
    /// ```
    pub const fn checked_new(secs: i64, attos: i64) -> Option<Self> {
        // Floor division so that a negative attosecond argument borrows a
        // second rather than leaving a negative remainder.
        let carry = attos.div_euclid(ATTOS_PER_SEC);
        let attos = attos.rem_euclid(ATTOS_PER_SEC);

        match secs.checked_add(carry) {
            Some(secs) => Some(Self { secs, attos }),
            None => None,
        }
    }

    /// Creates a duration from a number of whole seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Duration;
    ///
    /// assert_eq!(Duration::seconds(-3).components(), (-3, 0));
    /// ```
    pub const fn seconds(secs: i64) -> Self {
        Self::new(secs, 0)
    }

    /// Creates a duration from a number of nanoseconds.
    ///
    /// # Panics
    ///
    /// This constructor panics if the conversion to attoseconds overflows the
    /// 64-bit range, which happens for spans of more than about ±9.2s. See
    /// [`checked_nanoseconds`](Self::checked_nanoseconds) for a panic-free
    /// version, or [`new`](Self::new) for longer spans.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Duration;
    ///
    /// assert_eq!(
    ///     Duration::nanoseconds(1_500_000_000).components(),
    ///     (1, 500_000_000_000_000_000)
    /// );
    /// assert_eq!(
    ///     Duration::nanoseconds(-1).components(),
    ///     (-1, 999_999_999_000_000_000)
    /// );
    /// ```
    pub const fn nanoseconds(nanos: i64) -> Self {
        match Self::checked_nanoseconds(nanos) {
            Some(duration) => duration,
            None => panic!("overflow when converting nanoseconds to attoseconds"),
        }
    }

    /// Creates a duration from a number of nanoseconds, checking for
    /// overflow.
    ///
    /// Returns `None` if the conversion to attoseconds overflows the 64-bit
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Duration;
    ///
    /// assert!(Duration::checked_nanoseconds(1_500_000_000).is_some());
    /// assert!(Duration::checked_nanoseconds(i64::MAX).is_none());
    /// ```
    pub const fn checked_nanoseconds(nanos: i64) -> Option<Self> {
        match nanos.checked_mul(ATTOS_PER_NANO) {
            Some(attos) => Self::checked_new(0, attos),
            None => None,
        }
    }

    /// Creates a duration from a number of attoseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Duration;
    ///
    /// assert_eq!(Duration::attoseconds(-1).components(), (-1, 999_999_999_999_999_999));
    /// ```
    pub const fn attoseconds(attos: i64) -> Self {
        Self::new(0, attos)
    }

    /// Returns the normalized seconds and attoseconds components, exactly as
    /// stored.
    ///
    /// The attoseconds component is always in `[0, 10^18)`; the sign of the
    /// span lives entirely in the seconds component.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Duration;
    ///
    /// let (secs, attos) = Duration::nanoseconds(-500_000_000).components();
    /// assert_eq!(secs, -1);
    /// assert_eq!(attos, 500_000_000_000_000_000);
    /// ```
    pub const fn components(&self) -> (i64, i64) {
        (self.secs, self.attos)
    }

    /// Adds two durations, checking for overflow.
    ///
    /// Returns `None` if the resulting number of seconds overflows the 64-bit
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use atto_time::Duration;
    ///
    /// assert!(Duration::seconds(1).checked_add(Duration::seconds(2)).is_some());
    /// assert!(Duration::seconds(i64::MAX).checked_add(Duration::seconds(1)).is_none());
    /// ```
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        // Both operands are normalized so the attosecond sum is less than
        // 2*10^18 and cannot overflow; the carry is either 0 or 1 second.
        match self.secs.checked_add(rhs.secs) {
            Some(secs) => Self::checked_new(secs, self.attos + rhs.attos),
            None => None,
        }
    }
}

impl Add for Duration {
    type Output = Self;

    /// Adds two durations.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting duration cannot be represented.
    /// See [`Duration::checked_add`] for a panic-free version.
    fn add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Some(duration) => duration,
            None => panic!("overflow when adding durations"),
        }
    }
}

impl AddAssign for Duration {
    /// Increments the duration by another duration.
    ///
    /// # Panics
    ///
    /// This function panics if the resulting duration cannot be represented.
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
