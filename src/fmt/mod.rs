/*!
Parsing and printing of clock times.

A clock time has exactly one textual representation: `hh:mm:ss`. That is,
three integers separated by colons, each printed with at least two digits.
This is what [`ClockTime`]'s `Display` and `FromStr` trait implementations
use, and it's also what the [Serde](self::serde) and
[storage](crate::sql) hooks use.

# Parsing is lenient about ranges

Parsing only checks the *shape* of the input. Each field may be any integer
that fits into an `i32` (with an optional leading `+` or `-` sign), and no
range checks are performed:

```
use clocktime::ClockTime;

let time: ClockTime = "25:61:99".parse()?;
assert_eq!(time.hms(), (25, 61, 99));

# Ok::<(), Box<dyn std::error::Error>>(())
```

The one limit is the `i32` itself. A field that doesn't fit, like the hour
in `3000000000:00:00`, is an
[invalid format](crate::Error::is_invalid_format) error:

```
use clocktime::ClockTime;

let err = "3000000000:00:00".parse::<ClockTime>().unwrap_err();
assert!(err.is_invalid_format());
```

# Printing out-of-range values

Each field is zero padded to two digits. Values that already need two or
more characters (including negative values) are printed as plain integers:

```
use clocktime::ClockTime;

assert_eq!(ClockTime::new(8, 8, 8).to_string(), "08:08:08");
assert_eq!(ClockTime::new(123, -5, 0).to_string(), "123:-5:00");
```
*/

use crate::{
    error::{Error, Field},
    time::ClockTime,
};

#[cfg(feature = "serde")]
pub mod serde;

/// Parses `hh:mm:ss` into a clock time.
///
/// The input must split on `:` into exactly three fields, and each field must
/// be an integer. Nothing else is checked.
pub(crate) fn parse(input: &[u8]) -> Result<ClockTime, Error> {
    let fields: Vec<&[u8]> = input.split(|&byte| byte == b':').collect();
    let &[hour, minute, second] = fields.as_slice() else {
        return Err(Error::field_count(fields.len()));
    };
    let hour = parse_field(Field::Hour, hour)?;
    let minute = parse_field(Field::Minute, minute)?;
    let second = parse_field(Field::Second, second)?;
    Ok(ClockTime::new(hour, minute, second))
}

fn parse_field(field: Field, bytes: &[u8]) -> Result<i32, Error> {
    let Ok(text) = core::str::from_utf8(bytes) else {
        return Err(Error::field(field, bytes, None));
    };
    text.parse::<i32>().map_err(|err| Error::field(field, bytes, Some(err)))
}

/// Prints a clock time as `hh:mm:ss`.
pub(crate) fn print<W: core::fmt::Write>(
    time: &ClockTime,
    mut wtr: W,
) -> core::fmt::Result {
    // `{:02}` pads 0-9 with a leading zero and leaves everything else alone,
    // including negative values, whose sign counts toward the width.
    write!(
        wtr,
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}
