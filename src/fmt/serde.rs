/*!
Serde support for [`ClockTime`].

When the `serde` crate feature is enabled, `ClockTime` implements
`serde::Serialize` and `serde::Deserialize`. It is serialized as a string in
its `hh:mm:ss` format, and deserialized by parsing such a string.

# Example

```
use clocktime::ClockTime;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Shift {
    start: ClockTime,
    end: Option<ClockTime>,
}

let json = r#"{"start":"22:00:00","end":null}"#;
let got: Shift = serde_json::from_str(json)?;
assert_eq!(got.start, ClockTime::new(22, 0, 0));
assert_eq!(got.end, None);
assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Quoting

Surrounding `"` characters are stripped from a string before it is parsed.
This means a value that was quoted twice by its producer, such as the JSON
string `"\"10:11:12\""`, still deserializes.
*/

use crate::time::ClockTime;

impl serde::Serialize for ClockTime {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ClockTime {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ClockTime, D::Error> {
        use serde::de;

        struct ClockTimeVisitor;

        impl<'de> de::Visitor<'de> for ClockTimeVisitor {
            type Value = ClockTime;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a clock time string of the form `hh:mm:ss`")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<ClockTime, E> {
                let value = value
                    .strip_prefix(b"\"")
                    .and_then(|value| value.strip_suffix(b"\""))
                    .unwrap_or(value);
                ClockTime::parse(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<ClockTime, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(ClockTimeVisitor)
    }
}
