use clocktime::{tz::ZoneResolver, ClockTime};
use jiff::{
    tz::{self, TimeZone},
    Zoned,
};

#[test]
fn today() {
    let time_to_test = ClockTime::new(8, 30, 0);
    let today = time_to_test.today("US/Hawaii").unwrap();
    let hawaii = TimeZone::get("US/Hawaii").unwrap();

    assert_eq!(Zoned::now().with_time_zone(hawaii).day(), today.day());
    assert_eq!(8, today.hour());
    assert_eq!(30, today.minute());
    assert_eq!(0, today.second());
    assert_eq!(18, today.with_time_zone(TimeZone::UTC).hour());
}

#[test]
fn today_unknown_zone_is_utc() {
    let _ = crate::Logger::init();

    let today = ClockTime::new(8, 30, 0).today("Not/AZone").unwrap();
    assert_eq!(today.offset(), tz::Offset::UTC);
    assert_eq!((today.hour(), today.minute()), (8, 30));
}

#[test]
fn today_with_custom_fallback() {
    let _ = crate::Logger::init();

    let resolver =
        ZoneResolver::new().fallback(TimeZone::fixed(tz::offset(-10)));
    let today = resolver.today(ClockTime::new(8, 30, 0), "Not/AZone").unwrap();
    assert_eq!(today.offset(), tz::offset(-10));
    assert_eq!(18, today.with_time_zone(TimeZone::UTC).hour());
}

#[test]
fn now_is_canonical() {
    for name in ["UTC", "US/Hawaii", "Asia/Kolkata", "Not/AZone"] {
        let now = ClockTime::now(name);
        assert!((0..24).contains(&now.hour()), "{name}: {now}");
        assert!((0..60).contains(&now.minute()), "{name}: {now}");
        assert!((0..60).contains(&now.second()), "{name}: {now}");
    }
}

#[test]
fn now_matches_zone() {
    let resolver = ZoneResolver::new();
    // Retry in case the two samples straddle an hour boundary.
    for _ in 0..3 {
        let want = Zoned::now().in_tz("US/Hawaii").unwrap();
        let got = resolver.now("US/Hawaii");
        if got.hour() == i32::from(want.hour()) {
            return;
        }
    }
    panic!("`now` in US/Hawaii never agreed with jiff on the hour");
}
