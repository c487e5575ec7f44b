use clocktime::{clock_time, sql::SqlValue, ClockTime};

#[test]
fn string() {
    let tm = ClockTime::new(8, 8, 8);
    assert_eq!(tm.to_string(), "08:08:08");

    let tm = ClockTime::new(18, 8, 8);
    assert_eq!(tm.to_string(), "18:08:08");

    let tm = ClockTime::new(12, 12, 12);
    assert_eq!(tm.to_string(), "12:12:12");

    assert_eq!(format!("{:?}", clock_time(7, 0, 5)), "07:00:05");
}

#[test]
fn roundtrip_all_canonical() {
    for hour in 0..24 {
        for minute in 0..60 {
            for second in [0, 9, 10, 59] {
                let time = ClockTime::new(hour, minute, second);
                let got: ClockTime = time.to_string().parse().unwrap();
                assert_eq!(got, time);
            }
        }
    }
}

#[test]
fn parse_errors() {
    for input in ["not-a-time", "1:2", "1:2:x", "", "::", "1:2:3:4"] {
        let err = input.parse::<ClockTime>().unwrap_err();
        assert!(err.is_invalid_format(), "{input:?}: {err}");
    }
}

#[test]
fn parse_source_error() {
    use std::error::Error as _;

    let err = ClockTime::parse("1:2:x").unwrap_err();
    let source = err.source().expect("integer parse error as source");
    assert_eq!(source.to_string(), "invalid digit found in string");
}

#[cfg(feature = "serde")]
#[test]
fn json() {
    #[derive(serde::Deserialize, serde::Serialize)]
    struct Body {
        time: ClockTime,
    }

    let raw_json = r#"{
            "time": "10:11:12"
    }"#;
    let body: Body = serde_json::from_str(raw_json).unwrap();
    let marshaled_back = serde_json::to_string(&body).unwrap();
    assert_eq!(marshaled_back, r#"{"time":"10:11:12"}"#);
}

#[test]
fn storage() -> crate::Result {
    let _ = crate::Logger::init();

    let mut time = ClockTime::default();
    time.scan(SqlValue::Bytes(b"17:45:00"))?;
    assert_eq!(time, ClockTime::new(17, 45, 0));
    assert_eq!(time.sql_value(), "17:45:00");

    time.scan(SqlValue::Null)?;
    assert_eq!(time, ClockTime::new(17, 45, 0));

    let err = time.scan(SqlValue::Integer(63_900)).unwrap_err();
    assert!(err.is_unreadable_source());
    Ok(())
}
