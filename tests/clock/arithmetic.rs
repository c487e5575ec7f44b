use clocktime::{duration_between, ClockTime};
use jiff::SignedDuration;

const HOUR: SignedDuration = SignedDuration::from_hours(1);

#[test]
fn within() {
    let t = ClockTime::new(13, 1, 0);

    let end = t + HOUR;
    let start = t - HOUR;
    assert!(t.within(start, end));
    assert!(!t.within(end, start));

    let start = t + HOUR * 2;
    let end = t + HOUR;
    assert!(t.within(start, end));
    assert!(!t.within(end, start));
}

#[test]
fn within_business_hours() -> crate::Result {
    let open: ClockTime = "09:00:00".parse()?;
    let close: ClockTime = "17:00:00".parse()?;

    let cases = [
        ("08:59:59", false),
        ("09:00:00", false),
        ("09:00:01", true),
        ("12:30:00", true),
        ("17:00:00", true),
        ("17:00:01", false),
        ("00:00:00", false),
        ("23:59:59", false),
    ];
    for (time, expected) in cases {
        let time: ClockTime = time.parse()?;
        assert_eq!(time.within(open, close), expected, "{time}");
    }
    Ok(())
}

#[test]
fn within_overnight() -> crate::Result {
    let open: ClockTime = "22:00:00".parse()?;
    let close: ClockTime = "06:00:00".parse()?;

    let cases = [
        ("21:59:59", false),
        ("22:00:00", false),
        ("22:00:01", true),
        ("23:59:59", true),
        // Midnight itself is excluded from a range that wraps around it.
        ("00:00:00", false),
        ("00:00:01", true),
        ("06:00:00", true),
        ("06:00:01", false),
        ("12:00:00", false),
    ];
    for (time, expected) in cases {
        let time: ClockTime = time.parse()?;
        assert_eq!(time.within(open, close), expected, "{time}");
    }
    Ok(())
}

#[test]
fn durations() {
    let t = ClockTime::new(0, 0, 0);

    let start = t - HOUR;
    let end = t + HOUR;
    let duration = duration_between(start, end);
    assert_eq!(
        duration,
        SignedDuration::from_secs(1 * 60 * 60 + 59 * 60 + 59),
    );

    let end = t - HOUR;
    let start = t + HOUR;
    let duration = duration_between(start, end);
    assert_eq!(duration, HOUR * 22);
}

#[test]
fn durations_use_end_of_day() {
    // A range wrapping around midnight is measured up to 23:59:59, so it's
    // always one second shy of the elapsed time.
    let start = ClockTime::new(23, 0, 0);
    let end = ClockTime::new(0, 0, 0);
    assert_eq!(duration_between(start, end), SignedDuration::from_secs(3599));

    let start = ClockTime::new(12, 0, 0);
    let end = ClockTime::new(11, 0, 0);
    assert_eq!(
        duration_between(start, end),
        HOUR * 23 - SignedDuration::from_secs(1),
    );
}

#[test]
fn add_and_sub_wrap() {
    let t = ClockTime::new(22, 45, 30);
    assert_eq!(t + HOUR * 2, ClockTime::new(0, 45, 30));
    assert_eq!(t - HOUR * 23, ClockTime::new(23, 45, 30));
    assert_eq!(
        t + SignedDuration::from_secs(-81_880),
        ClockTime::new(0, 0, 50),
    );
    assert_eq!(t.wrapping_sub(HOUR * -2), t.wrapping_add(HOUR * 2));
}

#[test]
fn comparisons() {
    let early = ClockTime::new(6, 0, 0);
    let late = ClockTime::new(18, 0, 0);

    assert!(late.after(early));
    assert!(!early.after(late));
    assert!(early.before(late));
    assert!(!late.before(early));

    // A clock time is before, but not after, itself.
    assert!(early.before(early));
    assert!(!early.after(early));
}
