use jalali_calendar::{GregorianDate, JalaliDate, gregorian_sequence, gregorian_year};

/// Returns `true` if `next` is the Jalali day right after `prev`.
fn is_successor(prev: JalaliDate, next: JalaliDate) -> bool {
    let (y, m, d) = prev.ymd();
    let month_end = match m {
        1..=6 => d == 31,
        7..=11 => d == 30,
        _ => d == 29 || d == 30,
    };
    next.ymd() == (y, m, d + 1)
        || (month_end && m < 12 && next.ymd() == (y, m + 1, 1))
        || (month_end && m == 12 && next.ymd() == (y + 1, 1, 1))
}

fn assert_gap_free(dates: &[GregorianDate]) {
    for pair in dates.windows(2) {
        let (a, b) = (pair[0].to_jalali(), pair[1].to_jalali());
        assert!(
            is_successor(a, b),
            "{} -> {a} is not followed by {} -> {b}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn every_day_of_a_year_is_consecutive() {
    for year in [1979, 2000, 2023, 2024, 2100] {
        let dates = gregorian_year(year);
        assert_gap_free(&dates);
        let jalali: Vec<_> = dates.iter().map(|d| d.to_jalali()).collect();
        assert!(jalali.windows(2).all(|w| w[0] < w[1]), "year {year}");
    }
}

#[test]
fn consecutive_across_two_centuries() {
    let start = GregorianDate::new(1901, 1, 1).unwrap();
    assert_gap_free(&gregorian_sequence(start, 200 * 366));
}

#[test]
fn increasing_day_within_month() {
    for month in 1..=12u8 {
        let max = GregorianDate::days_in_month(2025, month);
        for day in 1..max {
            let a = GregorianDate::new(2025, month, day).unwrap().to_jalali();
            let b = GregorianDate::new(2025, month, day + 1).unwrap().to_jalali();
            assert!(is_successor(a, b), "2025-{month:02}-{day:02}: {a} then {b}");
        }
    }
}

#[test]
fn nowruz_each_year_around_epoch_split() {
    for gy in 1590..=1610 {
        let nowruz = GregorianDate::new(gy, 3, 21).unwrap().to_jalali();
        assert_eq!(nowruz.year(), gy - 621, "Nowruz of {gy}");
    }
    assert_eq!(GregorianDate::new(1600, 3, 21).unwrap().to_jalali().ymd(), (979, 1, 1));
    assert_eq!(GregorianDate::new(1601, 3, 21).unwrap().to_jalali().ymd(), (980, 1, 1));
}

#[test]
fn jalali_year_never_jumps_or_repeats_across_epoch_split() {
    let start = GregorianDate::new(1500, 1, 1).unwrap();
    let dates = gregorian_sequence(start, 200 * 365);
    for pair in dates.windows(2) {
        let (a, b) = (pair[0].to_jalali(), pair[1].to_jalali());
        assert!(a <= b, "{} -> {a} then {} -> {b}", pair[0], pair[1]);
        if a.year() != b.year() {
            assert_eq!(b.year(), a.year() + 1, "{} -> {b}", pair[1]);
            assert_eq!((b.month(), b.day()), (1, 1), "{} -> {b}", pair[1]);
        }
    }
}

#[test]
fn year_end_straddles_split_in_same_jalali_year() {
    let dec31 = GregorianDate::new(1600, 12, 31).unwrap().to_jalali();
    let jan1 = GregorianDate::new(1601, 1, 1).unwrap().to_jalali();
    assert_eq!(dec31.year(), 979);
    assert_eq!(jan1.year(), 979);
    assert!(dec31 < jan1);
}

#[test]
fn strictly_increasing_from_split_onward() {
    let start = GregorianDate::new(1600, 3, 1).unwrap();
    let dates = gregorian_sequence(start, 3 * 366);
    for pair in dates.windows(2) {
        assert!(pair[0].to_jalali() < pair[1].to_jalali(), "at {}", pair[1]);
    }
}
