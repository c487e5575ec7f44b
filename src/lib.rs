/*!
This crate provides [`ClockTime`], a time of day (hours, minutes and seconds)
that is independent of any date or time zone, built on top of [Jiff](jiff).

A `ClockTime` is meant for reasoning about things that recur every day, like
business hours from `09:00:00` to `17:00:00`, without the complexity of full
timestamps. It supports:

* Construction from its components, parsing from `hh:mm:ss` and printing
back to `hh:mm:ss`.
* Wrapping arithmetic with [`jiff::SignedDuration`].
* Comparisons and containment within ranges that may wrap around midnight.
* Sampling the current clock time in a time zone, and combining a clock time
with today's date in a time zone.
* Serde and storage hooks.

# Example: business hours

```
use clocktime::{duration_between, ClockTime};
use jiff::SignedDuration;

let open: ClockTime = "09:00:00".parse()?;
let close: ClockTime = "17:30:00".parse()?;

assert!(ClockTime::new(12, 0, 0).within(open, close));
assert!(!ClockTime::new(18, 0, 0).within(open, close));
assert_eq!(
    duration_between(open, close),
    SignedDuration::from_mins(8 * 60 + 30),
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Example: a night shift

A range whose start is after its end wraps around midnight:

```
use clocktime::ClockTime;
use jiff::SignedDuration;

let start = ClockTime::new(22, 0, 0);
let end = start + SignedDuration::from_hours(8);
assert_eq!(end, ClockTime::new(6, 0, 0));

assert!(ClockTime::new(23, 15, 0).within(start, end));
assert!(ClockTime::new(3, 0, 0).within(start, end));
assert!(!ClockTime::new(12, 0, 0).within(start, end));
```

# Example: today in a time zone

```
use clocktime::ClockTime;

let opens = ClockTime::new(8, 30, 0);
let zdt = opens.today("US/Hawaii")?;
assert_eq!(zdt.time(), jiff::civil::time(8, 30, 0, 0));
// Hawaii is always 10 hours behind UTC.
assert_eq!(zdt.with_time_zone(jiff::tz::TimeZone::UTC).hour(), 18);

# Ok::<(), Box<dyn std::error::Error>>(())
```

Time zone names that can't be found silently fall back to UTC. See the
[`tz`] module for how to change or detect that.

# Crate features

* **logging** - Emits log messages via the [`log`] crate when time zone
lookups fall back, and when null values are read from storage.
* **serde** (enabled by default) - Implements `serde::Serialize` and
`serde::Deserialize` for [`ClockTime`]. See [`fmt::serde`].
* **sqlite** - Implements SQLx's `Type`, `Encode` and `Decode` traits for
SQLite. See [`sql`].

[`log`]: https://docs.rs/log
*/

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

pub use crate::{
    error::Error,
    time::{clock_time, duration_between, ClockTime},
};

#[macro_use]
mod logging;

mod error;
pub mod fmt;
pub mod sql;
mod time;
pub mod tz;
