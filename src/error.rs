use std::num::ParseIntError;

/// An error that can occur in this crate.
///
/// There are only a handful of ways for things to go wrong:
///
/// * Parsing a string that isn't of the form `hh:mm:ss`. See
/// [`Error::is_invalid_format`].
/// * Reading a clock time from a stored value that isn't a byte sequence.
/// See [`Error::is_unreadable_source`].
/// * Looking up a time zone that doesn't exist, but only when using the
/// fallible [`ZoneResolver::try_resolve`](crate::tz::ZoneResolver::try_resolve).
/// See [`Error::is_time_zone`].
/// * Combining a clock time with a date where the result falls outside of
/// the range of datetimes supported by Jiff.
///
/// Everything else in this crate (construction, arithmetic, comparison and
/// containment) is infallible.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait, the
/// [`core::fmt::Debug`] trait and the [`core::fmt::Display`] trait, this
/// error type only provides the `Error::is_*` predicates.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Returns true when this error originated from parsing a string that
    /// isn't a clock time.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::ClockTime;
    ///
    /// assert!(ClockTime::parse("not-a-time").unwrap_err().is_invalid_format());
    /// assert!(ClockTime::parse("1:2").unwrap_err().is_invalid_format());
    /// assert!(ClockTime::parse("1:2:x").unwrap_err().is_invalid_format());
    /// ```
    pub fn is_invalid_format(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidFormat(_))
    }

    /// Returns true when this error originated from scanning a stored value
    /// that isn't a byte sequence.
    ///
    /// Note that a stored value that *is* a byte sequence, but whose contents
    /// aren't a clock time, results in an
    /// [invalid format](Error::is_invalid_format) error instead.
    ///
    /// # Example
    ///
    /// ```
    /// use clocktime::{sql::SqlValue, ClockTime};
    ///
    /// let mut time = ClockTime::START_OF_DAY;
    /// let err = time.scan(SqlValue::Integer(5)).unwrap_err();
    /// assert!(err.is_unreadable_source());
    /// ```
    pub fn is_unreadable_source(&self) -> bool {
        matches!(self.kind, ErrorKind::UnreadableSource { .. })
    }

    /// Returns true when this error originated from a failed time zone
    /// lookup.
    pub fn is_time_zone(&self) -> bool {
        matches!(self.kind, ErrorKind::TimeZone { .. })
    }

    pub(crate) fn field_count(found: usize) -> Error {
        Error::from(ErrorKind::InvalidFormat(FormatError::FieldCount {
            found,
        }))
    }

    pub(crate) fn field(
        field: Field,
        text: &[u8],
        err: Option<ParseIntError>,
    ) -> Error {
        let text = String::from_utf8_lossy(text).into_owned().into_boxed_str();
        Error::from(ErrorKind::InvalidFormat(FormatError::Field {
            field,
            text,
            err,
        }))
    }

    pub(crate) fn unreadable_source(found: &'static str) -> Error {
        Error::from(ErrorKind::UnreadableSource { found })
    }

    pub(crate) fn time_zone(name: &str, err: jiff::Error) -> Error {
        let name = Box::from(name);
        Error::from(ErrorKind::TimeZone { name, err })
    }
}

#[derive(Clone, Debug)]
enum ErrorKind {
    InvalidFormat(FormatError),
    UnreadableSource { found: &'static str },
    TimeZone { name: Box<str>, err: jiff::Error },
    Jiff(jiff::Error),
}

#[derive(Clone, Debug)]
enum FormatError {
    FieldCount {
        found: usize,
    },
    Field {
        field: Field,
        text: Box<str>,
        /// `None` when the field isn't valid UTF-8.
        err: Option<ParseIntError>,
    },
}

/// One of the three colon separated fields of a clock time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Field {
    Hour,
    Minute,
    Second,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        }
    }
}

impl From<ErrorKind> for Error {
    #[cold]
    #[inline(never)]
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl From<jiff::Error> for Error {
    fn from(err: jiff::Error) -> Error {
        Error::from(ErrorKind::Jiff(err))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind {
            ErrorKind::InvalidFormat(FormatError::Field {
                err: Some(ref err),
                ..
            }) => Some(err),
            ErrorKind::InvalidFormat(_) => None,
            ErrorKind::UnreadableSource { .. } => None,
            ErrorKind::TimeZone { ref err, .. } => Some(err),
            ErrorKind::Jiff(ref err) => Some(err),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidFormat(ref err) => {
                f.write_str("invalid clock time format: ")?;
                core::fmt::Display::fmt(err, f)
            }
            ErrorKind::UnreadableSource { found } => write!(
                f,
                "failed to read clock time from stored value: \
                 expected a byte sequence, but found {found}",
            ),
            ErrorKind::TimeZone { ref name, ref err } => {
                write!(f, "failed to find time zone `{name}`: {err}")
            }
            ErrorKind::Jiff(ref err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            FormatError::FieldCount { found } => write!(
                f,
                "expected 3 colon separated fields (`hh:mm:ss`), \
                 but found {found}",
            ),
            FormatError::Field { field, ref text, err: Some(ref err) } => {
                write!(
                    f,
                    "failed to parse {field} field `{text}` as an integer: \
                     {err}",
                    field = field.name(),
                )
            }
            FormatError::Field { field, ref text, err: None } => write!(
                f,
                "{field} field `{text}` is not valid UTF-8",
                field = field.name(),
            ),
        }
    }
}
