/*!
Resolving time zone names for sampling "now."

[`ClockTime::now`] and [`ClockTime::today`] accept a time zone name and
never fail. When the name can't be found in the time zone database, they
silently use UTC instead. That policy lives in a [`ZoneResolver`], which can
also be used directly in order to pick a different fallback, to use a
different time zone database or to find out whether a name actually
resolves.

# Example

This shows how a typo in a time zone name degrades to the fallback, and how
to detect it:

```
use clocktime::tz::ZoneResolver;
use jiff::tz::{self, TimeZone};

let resolver = ZoneResolver::new().fallback(TimeZone::fixed(tz::offset(-5)));
assert!(resolver.try_resolve("America/New_Yrok").is_err());

let tz = resolver.resolve("America/New_Yrok");
let zdt = jiff::Timestamp::UNIX_EPOCH.to_zoned(tz);
assert_eq!(zdt.offset(), tz::offset(-5));
```
*/

use jiff::{
    tz::{self, TimeZone, TimeZoneDatabase},
    Zoned,
};

use crate::{error::Error, time::ClockTime};

/// The resolver used by [`ClockTime::now`] and [`ClockTime::today`].
static GLOBAL: ZoneResolver = ZoneResolver::new();

/// Looks up time zones by name, falling back to a fixed time zone when a
/// lookup fails.
///
/// By default, names are looked up in Jiff's global time zone database (see
/// [`jiff::tz::db`]) and the fallback is UTC. Both can be changed with the
/// builder-style [`ZoneResolver::database`] and [`ZoneResolver::fallback`]
/// methods.
///
/// When the `logging` crate feature is enabled, every use of the fallback
/// emits a warning.
#[derive(Debug)]
pub struct ZoneResolver {
    /// When absent, the global database is used.
    db: Option<TimeZoneDatabase>,
    fallback: TimeZone,
}

impl ZoneResolver {
    /// Creates a resolver that uses Jiff's global time zone database and
    /// falls back to UTC.
    pub const fn new() -> ZoneResolver {
        ZoneResolver { db: None, fallback: TimeZone::UTC }
    }

    /// Returns the resolver used by [`ClockTime::now`] and
    /// [`ClockTime::today`].
    ///
    /// This is the same as [`ZoneResolver::new`].
    pub(crate) fn global() -> &'static ZoneResolver {
        &GLOBAL
    }

    /// Use the given time zone database for lookups instead of Jiff's global
    /// one.
    pub fn database(self, db: TimeZoneDatabase) -> ZoneResolver {
        ZoneResolver { db: Some(db), ..self }
    }

    /// Use the given time zone whenever a lookup fails.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::tz::ZoneResolver;
    /// use jiff::tz::{self, TimeZone};
    ///
    /// let hst = TimeZone::fixed(tz::offset(-10));
    /// let resolver = ZoneResolver::new().fallback(hst);
    /// let zdt = jiff::Timestamp::UNIX_EPOCH.to_zoned(resolver.resolve("Nope"));
    /// assert_eq!(zdt.offset(), tz::offset(-10));
    /// ```
    pub fn fallback(self, tz: TimeZone) -> ZoneResolver {
        ZoneResolver { fallback: tz, ..self }
    }

    /// Returns the time zone used whenever a lookup fails.
    pub fn get_fallback(&self) -> &TimeZone {
        &self.fallback
    }

    /// Looks up the time zone with the given name.
    ///
    /// # Errors
    ///
    /// This returns an error if the name doesn't exist in this resolver's
    /// time zone database, or if it couldn't be loaded.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::tz::ZoneResolver;
    ///
    /// let resolver = ZoneResolver::new();
    /// assert!(resolver.try_resolve("US/Hawaii").is_ok());
    /// assert!(resolver.try_resolve("Mars/Olympus_Mons").unwrap_err().is_time_zone());
    /// ```
    pub fn try_resolve(&self, name: &str) -> Result<TimeZone, Error> {
        let result = match self.db {
            Some(ref db) => db.get(name),
            None => tz::db().get(name),
        };
        let tz = result.map_err(|err| Error::time_zone(name, err))?;
        trace!("resolved time zone `{name}`");
        Ok(tz)
    }

    /// Looks up the time zone with the given name, returning this resolver's
    /// fallback time zone if it can't be found.
    pub fn resolve(&self, name: &str) -> TimeZone {
        match self.try_resolve(name) {
            Ok(tz) => tz,
            Err(_err) => {
                warn!(
                    "using fallback time zone {:?} in place of `{name}`: \
                     {_err}",
                    self.fallback,
                );
                self.fallback.clone()
            }
        }
    }

    /// Returns the current clock time in the time zone with the given name.
    ///
    /// If the name can't be resolved, this resolver's fallback time zone is
    /// used.
    pub fn now(&self, name: &str) -> ClockTime {
        ClockTime::from(Zoned::now().with_time_zone(self.resolve(name)))
    }

    /// Combines `time` with the current date in the time zone with the given
    /// name.
    ///
    /// If the name can't be resolved, this resolver's fallback time zone is
    /// used. See [`ClockTime::today`] for more details.
    ///
    /// # Errors
    ///
    /// This returns an error when the result falls outside of the range of
    /// datetimes supported by Jiff.
    pub fn today(&self, time: ClockTime, name: &str) -> Result<Zoned, Error> {
        let tz = self.resolve(name);
        let today = Zoned::now().with_time_zone(tz.clone()).date();
        Ok(time.to_datetime(today)?.to_zoned(tz)?)
    }
}

impl Default for ZoneResolver {
    fn default() -> ZoneResolver {
        ZoneResolver::new()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn offset_of(tz: TimeZone) -> tz::Offset {
        Timestamp::UNIX_EPOCH.to_zoned(tz).offset()
    }

    #[test]
    fn fallback_is_utc() {
        let _ = crate::logging::Logger::init();

        let resolver = ZoneResolver::new();
        assert_eq!(offset_of(resolver.resolve("Not/AZone")), tz::Offset::UTC);
        assert_eq!(offset_of(resolver.resolve("")), tz::Offset::UTC);
    }

    #[test]
    fn fallback_is_configurable() {
        let _ = crate::logging::Logger::init();

        let resolver =
            ZoneResolver::new().fallback(TimeZone::fixed(tz::offset(9)));
        assert_eq!(offset_of(resolver.resolve("Not/AZone")), tz::offset(9));
        assert_eq!(offset_of(resolver.get_fallback().clone()), tz::offset(9));
    }

    #[test]
    fn resolves_real_names() {
        let resolver = ZoneResolver::new();
        // Hawaii hasn't observed DST since 1947.
        assert_eq!(offset_of(resolver.resolve("US/Hawaii")), tz::offset(-10));
        assert_eq!(
            offset_of(resolver.resolve("Asia/Kolkata")),
            tz::Offset::from_seconds(5 * 60 * 60 + 30 * 60).unwrap(),
        );
    }

    #[test]
    fn custom_database() {
        let resolver = ZoneResolver::new()
            .database(TimeZoneDatabase::none())
            .fallback(TimeZone::fixed(tz::offset(3)));
        assert!(resolver.try_resolve("US/Hawaii").is_err());
        assert_eq!(offset_of(resolver.resolve("US/Hawaii")), tz::offset(3));
    }

    #[test]
    fn try_resolve_errors() {
        let resolver = ZoneResolver::new();
        let err = resolver.try_resolve("Not/AZone").unwrap_err();
        assert!(err.is_time_zone());
        assert!(!err.is_invalid_format());
        assert!(err
            .to_string()
            .starts_with("failed to find time zone `Not/AZone`"));
    }

    #[test]
    fn now_with_unknown_zone_is_utc() {
        // Sampling twice with the same zone can straddle a second boundary,
        // so only compare the hour, and retry once if that straddles too.
        for _ in 0..2 {
            let before = Zoned::now().with_time_zone(TimeZone::UTC);
            let got = ClockTime::now("Not/AZone");
            let after = Zoned::now().with_time_zone(TimeZone::UTC);
            if before.hour() != after.hour() {
                continue;
            }
            assert_eq!(got.hour(), i32::from(before.hour()));
            return;
        }
        panic!("`now` in an unknown zone never agreed with UTC's hour");
    }

    #[test]
    fn today_rolls_over() {
        let before = Zoned::now().with_time_zone(TimeZone::UTC).date();
        let zdt = ClockTime::new(24, 30, 0).today("UTC").unwrap();
        let after = Zoned::now().with_time_zone(TimeZone::UTC).date();
        if before != after {
            // Crossed midnight while running.
            return;
        }
        assert_eq!(zdt.date(), before.tomorrow().unwrap());
        assert_eq!((zdt.hour(), zdt.minute(), zdt.second()), (0, 30, 0));
    }

    #[test]
    fn today_out_of_range() {
        let time = ClockTime::new(i32::MAX, 0, 0);
        assert!(time.today("UTC").is_err());
    }
}
