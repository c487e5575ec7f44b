use core::ops::{Add, AddAssign, Sub, SubAssign};

use jiff::{
    civil::{self, Date, DateTime},
    SignedDuration, Zoned,
};

use crate::{error::Error, tz::ZoneResolver};

/// The number of seconds in a civil day.
const SECONDS_PER_DAY: i64 = 86_400;

/// The arbitrary date that clock times are projected onto in order to do
/// arithmetic on them.
const ANCHOR: DateTime = civil::datetime(2000, 1, 1, 0, 0, 0, 0);

/// A representation of "wall clock" time that is independent of any date or
/// time zone.
///
/// Conceptually, a `ClockTime` is what you would read off of a clock on the
/// wall: an hour, a minute and a second. It's useful for describing things
/// that recur every day, like business hours from `09:00:00` to `17:00:00`.
///
/// # Unchecked components
///
/// Unlike [`jiff::civil::Time`], a `ClockTime` does not validate its
/// components. Hours are expected to be in the range `0..=23` and minutes
/// and seconds in the range `0..=59`, but nothing enforces this. Comparisons
/// treat a clock time as the linear combination returned by
/// [`ClockTime::total_seconds`], and arithmetic normalizes whatever it is
/// given back into the canonical ranges:
///
/// ```
/// use clocktime::ClockTime;
/// use jiff::SignedDuration;
///
/// let time = ClockTime::new(25, 0, 0);
/// assert_eq!(time.total_seconds(), 90_000);
/// assert_eq!(time + SignedDuration::ZERO, ClockTime::new(1, 0, 0));
/// ```
///
/// # Comparisons
///
/// `ClockTime` implements `Eq` and `Hash` structurally, but it deliberately
/// does not implement `Ord`. Use [`ClockTime::after`] and
/// [`ClockTime::before`] instead. Note that `before` is defined as "not
/// after," which means a time is considered to be before itself.
///
/// # Arithmetic
///
/// Adding or subtracting a [`SignedDuration`] always wraps around midnight,
/// just like a clock does:
///
/// ```
/// use clocktime::ClockTime;
/// use jiff::SignedDuration;
///
/// let time = ClockTime::new(23, 30, 0);
/// assert_eq!(time + SignedDuration::from_hours(1), ClockTime::new(0, 30, 0));
/// assert_eq!(time - SignedDuration::from_hours(24), time);
/// ```
///
/// # Text format
///
/// `ClockTime` is printed and parsed as `hh:mm:ss`. See the [`fmt`](crate::fmt)
/// module for the details.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct ClockTime {
    hour: i32,
    minute: i32,
    second: i32,
}

impl ClockTime {
    /// The first second of the day, `00:00:00`.
    pub const START_OF_DAY: ClockTime = ClockTime::new(0, 0, 0);

    /// The last second of the day, `23:59:59`.
    pub const END_OF_DAY: ClockTime = ClockTime::new(23, 59, 59);

    /// Creates a new clock time from its hour, minute and second components.
    ///
    /// The components are stored as given. No validation is performed.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    ///
    /// let time = ClockTime::new(9, 30, 0);
    /// assert_eq!(time.to_string(), "09:30:00");
    /// ```
    #[inline]
    pub const fn new(hour: i32, minute: i32, second: i32) -> ClockTime {
        ClockTime { hour, minute, second }
    }

    /// Parses a clock time from `hh:mm:ss`.
    ///
    /// This is the same as using `ClockTime`'s `FromStr` trait
    /// implementation, except it also accepts byte strings.
    ///
    /// # Errors
    ///
    /// This returns an [invalid format](Error::is_invalid_format) error when
    /// the input doesn't split into exactly three colon separated fields, or
    /// when any of those fields isn't an integer. Ranges are not checked.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    ///
    /// let time = ClockTime::parse("10:11:12")?;
    /// assert_eq!(time, ClockTime::new(10, 11, 12));
    ///
    /// assert!(ClockTime::parse("10:11").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<ClockTime, Error> {
        crate::fmt::parse(input.as_ref())
    }

    /// Returns the current clock time in the time zone with the given name.
    ///
    /// If the time zone can't be found, then UTC is used instead. This
    /// never fails. To use a different fallback, or to detect a time zone
    /// name that doesn't exist, use a [`ZoneResolver`] directly.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    ///
    /// let now = ClockTime::now("America/New_York");
    /// assert!(now.hour() >= 0 && now.hour() < 24);
    /// ```
    pub fn now(time_zone_name: &str) -> ClockTime {
        ZoneResolver::global().now(time_zone_name)
    }

    /// Combines this clock time with the current date in the time zone with
    /// the given name.
    ///
    /// Like [`ClockTime::now`], UTC is used if the time zone can't be found.
    /// Components outside of their canonical ranges roll over into adjacent
    /// days. For example, `25:00:00` becomes `01:00:00` tomorrow.
    ///
    /// # Errors
    ///
    /// This only returns an error when the result falls outside of the range
    /// of datetimes supported by Jiff, which can only happen with absurdly
    /// large components.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    ///
    /// let zdt = ClockTime::new(8, 30, 0).today("US/Hawaii")?;
    /// assert_eq!((zdt.hour(), zdt.minute(), zdt.second()), (8, 30, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn today(self, time_zone_name: &str) -> Result<Zoned, Error> {
        ZoneResolver::global().today(self, time_zone_name)
    }

    /// Returns the hour component.
    #[inline]
    pub fn hour(self) -> i32 {
        self.hour
    }

    /// Returns the minute component.
    #[inline]
    pub fn minute(self) -> i32 {
        self.minute
    }

    /// Returns the second component.
    #[inline]
    pub fn second(self) -> i32 {
        self.second
    }

    /// Returns the hour, minute and second components, in that order.
    #[inline]
    pub fn hms(self) -> (i32, i32, i32) {
        (self.hour, self.minute, self.second)
    }

    /// Returns the number of seconds into the day this clock time
    /// represents.
    ///
    /// This is `hour * 3600 + minute * 60 + second`, without any clamping.
    /// It is the key used for all comparisons.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    ///
    /// assert_eq!(ClockTime::START_OF_DAY.total_seconds(), 0);
    /// assert_eq!(ClockTime::END_OF_DAY.total_seconds(), 86_399);
    /// assert_eq!(ClockTime::new(0, 90, 0).total_seconds(), 5_400);
    /// ```
    #[inline]
    pub fn total_seconds(self) -> i64 {
        i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Returns true when this clock time occurs strictly after `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    ///
    /// let t1 = ClockTime::new(8, 0, 0);
    /// let t2 = ClockTime::new(7, 59, 59);
    /// assert!(t1.after(t2));
    /// assert!(!t2.after(t1));
    /// assert!(!t1.after(t1));
    /// ```
    #[inline]
    pub fn after(self, other: ClockTime) -> bool {
        self.total_seconds() > other.total_seconds()
    }

    /// Returns true when this clock time does not occur after `other`.
    ///
    /// # Equal times
    ///
    /// This is the negation of [`ClockTime::after`], so a clock time is
    /// considered to be before itself. This is relied upon by
    /// [`ClockTime::within`] for its boundary behavior.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    ///
    /// let t1 = ClockTime::new(8, 0, 0);
    /// let t2 = ClockTime::new(7, 59, 59);
    /// assert!(t2.before(t1));
    /// assert!(!t1.before(t2));
    /// assert!(t1.before(t1));
    /// ```
    #[inline]
    pub fn before(self, other: ClockTime) -> bool {
        !self.after(other)
    }

    /// Returns true when this clock time falls within the range from `start`
    /// to `end`.
    ///
    /// The range excludes `start` and includes `end`. When `start` is after
    /// `end`, the range is taken to wrap around midnight: it covers
    /// everything after `start` until the end of the day, and everything
    /// after the start of the day until `end`.
    ///
    /// # Boundaries of a wrapping range
    ///
    /// Since the start of the day is excluded by the second half of a
    /// wrapping range, `00:00:00` is never within a wrapping range, while
    /// `23:59:59` always is.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    ///
    /// let open = ClockTime::new(9, 0, 0);
    /// let close = ClockTime::new(17, 0, 0);
    /// assert!(ClockTime::new(12, 0, 0).within(open, close));
    /// assert!(!ClockTime::new(20, 0, 0).within(open, close));
    ///
    /// // A range that spans midnight.
    /// let open = ClockTime::new(22, 0, 0);
    /// let close = ClockTime::new(2, 0, 0);
    /// assert!(ClockTime::new(23, 0, 0).within(open, close));
    /// assert!(ClockTime::new(1, 0, 0).within(open, close));
    /// assert!(!ClockTime::new(12, 0, 0).within(open, close));
    /// ```
    pub fn within(self, start: ClockTime, end: ClockTime) -> bool {
        if start.after(end) {
            return (self.after(ClockTime::START_OF_DAY) && self.before(end))
                || (self.after(start) && self.before(ClockTime::END_OF_DAY));
        }
        self.after(start) && self.before(end)
    }

    /// Add the given duration to this clock time, wrapping around midnight.
    ///
    /// Sub-second parts of the duration are applied and then truncated, so
    /// adding half a second to `00:00:00` yields `00:00:00`, while
    /// subtracting half a second yields `23:59:59`.
    ///
    /// This is also available via the `Add<SignedDuration>` trait
    /// implementation.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    /// use jiff::SignedDuration;
    ///
    /// let time = ClockTime::new(13, 1, 0);
    /// assert_eq!(
    ///     time.wrapping_add(SignedDuration::from_hours(12)),
    ///     ClockTime::new(1, 1, 0),
    /// );
    /// assert_eq!(
    ///     time.wrapping_add(SignedDuration::from_mins(-14)),
    ///     ClockTime::new(12, 47, 0),
    /// );
    /// ```
    pub fn wrapping_add(self, duration: SignedDuration) -> ClockTime {
        // Whole days never change the time of day.
        let secs = duration.as_secs().rem_euclid(SECONDS_PER_DAY);
        let nanos = duration.subsec_nanos();
        let datetime = self
            .project()
            .saturating_add(SignedDuration::from_secs(secs))
            .saturating_add(SignedDuration::new(0, nanos));
        ClockTime::from(datetime)
    }

    /// Subtract the given duration from this clock time, wrapping around
    /// midnight.
    ///
    /// This is equivalent to adding the negation of `duration`. It is also
    /// available via the `Sub<SignedDuration>` trait implementation.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    /// use jiff::SignedDuration;
    ///
    /// let time = ClockTime::new(0, 30, 0);
    /// assert_eq!(
    ///     time.wrapping_sub(SignedDuration::from_hours(1)),
    ///     ClockTime::new(23, 30, 0),
    /// );
    /// ```
    pub fn wrapping_sub(self, duration: SignedDuration) -> ClockTime {
        // Reducing to less than a day first means the negation can't
        // overflow, even for `SignedDuration::MIN`.
        let reduced =
            SignedDuration::from_secs(duration.as_secs() % SECONDS_PER_DAY)
                + SignedDuration::new(0, duration.subsec_nanos());
        self.wrapping_add(-reduced)
    }

    /// Combines this clock time with the given date.
    ///
    /// Components outside of their canonical ranges roll over into adjacent
    /// days.
    ///
    /// # Errors
    ///
    /// This returns an error when the result falls outside of the range of
    /// datetimes supported by Jiff.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    /// use jiff::civil::date;
    ///
    /// let dt = ClockTime::new(17, 0, 0).to_datetime(date(2025, 3, 9))?;
    /// assert_eq!(dt, date(2025, 3, 9).at(17, 0, 0, 0));
    ///
    /// let dt = ClockTime::new(24, 30, 0).to_datetime(date(2025, 3, 9))?;
    /// assert_eq!(dt, date(2025, 3, 10).at(0, 30, 0, 0));
    ///
    /// // About 245,000 years of hours is too far.
    /// let huge = ClockTime::new(i32::MAX, 0, 0);
    /// assert!(huge.to_datetime(date(2025, 3, 9)).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_datetime(self, date: Date) -> Result<DateTime, Error> {
        let secs = SignedDuration::from_secs(self.total_seconds());
        Ok(date.to_datetime(civil::Time::midnight()).checked_add(secs)?)
    }

    /// Projects this clock time onto the anchor date.
    ///
    /// The result is always on the anchor date, even when the components
    /// are out of range.
    fn project(self) -> DateTime {
        let secs = self.total_seconds().rem_euclid(SECONDS_PER_DAY);
        ANCHOR.saturating_add(SignedDuration::from_secs(secs))
    }
}

/// Returns the duration from `start` until `end`.
///
/// When `start` is after `end`, then `end` is taken to refer to the
/// following day. In that case, the duration is measured from `start` to
/// [`ClockTime::END_OF_DAY`] (and not midnight), and then from the start of
/// the day to `end`. This means a duration that wraps around midnight is one
/// second shorter than the true elapsed time.
///
/// # Example
///
/// ```
/// use clocktime::{duration_between, ClockTime};
/// use jiff::SignedDuration;
///
/// let start = ClockTime::new(1, 0, 0);
/// let end = ClockTime::new(23, 0, 0);
/// assert_eq!(duration_between(start, end), SignedDuration::from_hours(22));
///
/// // Wrapping around midnight.
/// assert_eq!(
///     duration_between(end, start),
///     SignedDuration::from_secs(1 * 60 * 60 + 59 * 60 + 59),
/// );
/// ```
pub fn duration_between(start: ClockTime, end: ClockTime) -> SignedDuration {
    let secs = if start.after(end) {
        ClockTime::END_OF_DAY.total_seconds() - start.total_seconds()
            + end.total_seconds()
    } else {
        end.total_seconds() - start.total_seconds()
    };
    SignedDuration::from_secs(secs)
}

/// Creates a new clock time from its hour, minute and second components.
///
/// This is a convenience function for [`ClockTime::new`].
///
/// # Example
///
/// ```
/// use clocktime::clock_time;
///
/// assert_eq!(clock_time(17, 0, 0).to_string(), "17:00:00");
/// ```
#[inline]
pub const fn clock_time(hour: i32, minute: i32, second: i32) -> ClockTime {
    ClockTime::new(hour, minute, second)
}

impl core::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        crate::fmt::print(self, f)
    }
}

impl core::fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        crate::fmt::print(self, f)
    }
}

impl core::str::FromStr for ClockTime {
    type Err = Error;

    fn from_str(string: &str) -> Result<ClockTime, Error> {
        ClockTime::parse(string)
    }
}

/// Adds a duration. This wraps around midnight.
impl Add<SignedDuration> for ClockTime {
    type Output = ClockTime;

    #[inline]
    fn add(self, rhs: SignedDuration) -> ClockTime {
        self.wrapping_add(rhs)
    }
}

/// Adds a duration in place. This wraps around midnight.
impl AddAssign<SignedDuration> for ClockTime {
    #[inline]
    fn add_assign(&mut self, rhs: SignedDuration) {
        *self = self.wrapping_add(rhs);
    }
}

/// Subtracts a duration. This wraps around midnight.
impl Sub<SignedDuration> for ClockTime {
    type Output = ClockTime;

    #[inline]
    fn sub(self, rhs: SignedDuration) -> ClockTime {
        self.wrapping_sub(rhs)
    }
}

/// Subtracts a duration in place. This wraps around midnight.
impl SubAssign<SignedDuration> for ClockTime {
    #[inline]
    fn sub_assign(&mut self, rhs: SignedDuration) {
        *self = self.wrapping_sub(rhs);
    }
}

/// Drops the sub-second component.
impl From<civil::Time> for ClockTime {
    fn from(time: civil::Time) -> ClockTime {
        ClockTime::new(
            i32::from(time.hour()),
            i32::from(time.minute()),
            i32::from(time.second()),
        )
    }
}

/// Drops the date and the sub-second component.
impl From<DateTime> for ClockTime {
    fn from(dt: DateTime) -> ClockTime {
        ClockTime::from(dt.time())
    }
}

/// Drops the date, the time zone and the sub-second component.
impl<'a> From<&'a Zoned> for ClockTime {
    fn from(zdt: &'a Zoned) -> ClockTime {
        ClockTime::from(zdt.time())
    }
}

/// Drops the date, the time zone and the sub-second component.
impl From<Zoned> for ClockTime {
    fn from(zdt: Zoned) -> ClockTime {
        ClockTime::from(&zdt)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for ClockTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> ClockTime {
        let hour = i32::from(u8::arbitrary(g) % 24);
        let minute = i32::from(u8::arbitrary(g) % 60);
        let second = i32::from(u8::arbitrary(g) % 60);
        ClockTime::new(hour, minute, second)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = ClockTime>> {
        Box::new(
            (self.hour, self.minute, self.second)
                .shrink()
                .filter(|&(h, m, s)| h >= 0 && m >= 0 && s >= 0)
                .map(|(h, m, s)| ClockTime::new(h, m, s)),
        )
    }
}
