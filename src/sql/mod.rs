/*!
Hooks for reading and writing clock times from storage.

A clock time is stored as its `hh:mm:ss` text. Writing is done with
[`ClockTime::sql_value`]. Reading is done with [`ClockTime::scan`], which
overwrites a clock time in place from a [`SqlValue`] handed over by a
database driver:

* A byte sequence is parsed as `hh:mm:ss`.
* A null value leaves the clock time unchanged. This is not an error.
* Any other kind of value is an
[unreadable source](crate::Error::is_unreadable_source) error.

# Example

```
use clocktime::{sql::SqlValue, ClockTime};

let mut opens = ClockTime::new(9, 0, 0);
let stored = opens.sql_value();
assert_eq!(stored, "09:00:00");

opens.scan(SqlValue::Bytes(b"08:30:00"))?;
assert_eq!(opens, ClockTime::new(8, 30, 0));

// A NULL column doesn't touch the existing value.
opens.scan(SqlValue::Null)?;
assert_eq!(opens, ClockTime::new(8, 30, 0));

# Ok::<(), Box<dyn std::error::Error>>(())
```

# SQLite

When the `sqlite` crate feature is enabled, `ClockTime` also implements
SQLx's `Type`, `Encode` and `Decode` traits for SQLite. Clock times are
stored in `TEXT` columns.
*/

use crate::{error::Error, time::ClockTime};

#[cfg(feature = "sqlite")]
mod sqlite;

/// A value as handed over by a database driver.
///
/// This mirrors the handful of primitive value kinds that drivers commonly
/// produce. Only [`SqlValue::Bytes`] and [`SqlValue::Null`] can be scanned
/// into a [`ClockTime`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SqlValue<'a> {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Real(f64),
    /// A string.
    Text(&'a str),
    /// A sequence of bytes.
    Bytes(&'a [u8]),
}

impl<'a> SqlValue<'a> {
    fn kind(&self) -> &'static str {
        match *self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "a boolean",
            SqlValue::Integer(_) => "an integer",
            SqlValue::Real(_) => "a floating point number",
            SqlValue::Text(_) => "a string",
            SqlValue::Bytes(_) => "a byte sequence",
        }
    }
}

impl ClockTime {
    /// Reads a clock time from a stored value, overwriting `self`.
    ///
    /// If `src` is [`SqlValue::Null`], then `self` is left unchanged and
    /// this returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// When `src` isn't a byte sequence (or null), this returns an
    /// [unreadable source](Error::is_unreadable_source) error. When it is a
    /// byte sequence but not of the form `hh:mm:ss`, this returns an
    /// [invalid format](Error::is_invalid_format) error. In either case,
    /// `self` is left unchanged.
    pub fn scan(&mut self, src: SqlValue<'_>) -> Result<(), Error> {
        let bytes = match src {
            SqlValue::Null => {
                trace!("scanned null value, leaving {} unchanged", self);
                return Ok(());
            }
            SqlValue::Bytes(bytes) => bytes,
            other => return Err(Error::unreadable_source(other.kind())),
        };
        *self = ClockTime::parse(bytes)?;
        Ok(())
    }

    /// Returns the value to store for this clock time.
    ///
    /// This is the same as its `hh:mm:ss` text.
    pub fn sql_value(&self) -> String {
        self.to_string()
    }
}
