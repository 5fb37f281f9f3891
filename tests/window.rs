//! Tests for the chart window engine: classification, resolution selection,
//! trading-day range resolution and axis ticks.
//!
//! Reference week used throughout (March 2020):
//!
//! | Mon | Tue | Wed | Thu | Fri | Sat | Sun |
//! |-----|-----|-----|-----|-----|-----|-----|
//! | 2   | 3   | 4   | 5   | 6   | 7   | 8   |

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use stockalyzer::window::{
    DateRange, DateRangeResolver, DurationBucket, GridLine, ResolutionKind, SessionHours,
    WindowError, classify, is_weekend, resolution_for, resolve, ticks, trading_day_shift,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn time(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

// ===================================================================
// DurationBucket
// ===================================================================

#[test]
fn test_buckets_are_ordered_by_span() {
    assert!(DurationBucket::ALL.windows(2).all(|w| w[0] < w[1]));
    assert!(DurationBucket::Intraday < DurationBucket::Max);
}

#[test]
fn test_bucket_codes_parse() {
    assert_eq!("5d".parse::<DurationBucket>().unwrap(), DurationBucket::D5);
    assert_eq!(" MAX ".parse::<DurationBucket>().unwrap(), DurationBucket::Max);
    assert_eq!(DurationBucket::Y3.to_string(), "3y");
}

#[test]
fn test_unknown_bucket_code_is_unsupported() {
    let err = "2w".parse::<DurationBucket>().unwrap_err();
    assert_eq!(err, WindowError::UnsupportedBucket("2w".into()));
}

// ===================================================================
// DurationClassifier
// ===================================================================

#[test]
fn test_classify_same_instant_is_intraday() {
    let t = at(2020, 3, 4, 10, 30);
    assert_eq!(classify(t, t), DurationBucket::Intraday);
}

#[test]
fn test_classify_three_days_is_d5() {
    let bucket = classify(at(2020, 3, 1, 0, 0), at(2020, 3, 4, 0, 0));
    assert_eq!(bucket, DurationBucket::D5);
}

#[test]
fn test_classify_ignores_time_of_day() {
    // Two minutes apart, but across midnight: one calendar day.
    assert_eq!(
        classify(at(2020, 3, 2, 23, 59), at(2020, 3, 3, 0, 1)),
        DurationBucket::Intraday
    );
    // Almost three days apart, but only two calendar days.
    assert_eq!(
        classify(at(2020, 3, 2, 0, 0), at(2020, 3, 4, 23, 0)),
        DurationBucket::D5
    );
}

#[test]
fn test_classify_thresholds_are_inclusive() {
    let start = at(2015, 1, 1, 12, 0);
    let span = |days: i64| classify(start, start + Duration::days(days));

    let expected = [
        (1, DurationBucket::Intraday),
        (2, DurationBucket::D5),
        (5, DurationBucket::D5),
        (6, DurationBucket::D10),
        (10, DurationBucket::D10),
        (11, DurationBucket::M1),
        (31, DurationBucket::M1),
        (32, DurationBucket::M3),
        (93, DurationBucket::M3),
        (94, DurationBucket::M6),
        (186, DurationBucket::M6),
        (187, DurationBucket::Y1),
        (372, DurationBucket::Y1),
        (373, DurationBucket::Y3),
        (1116, DurationBucket::Y3),
        (1117, DurationBucket::Y5),
        (1860, DurationBucket::Y5),
        (1861, DurationBucket::Max),
        (20_000, DurationBucket::Max),
    ];
    for (days, bucket) in expected {
        assert_eq!(span(days), bucket, "{days} day(s)");
    }
}

#[test]
fn test_classified_bucket_accommodates_span() {
    let start = at(2019, 6, 1, 9, 0);
    for days in 0..2000 {
        let bucket = classify(start, start + Duration::days(days));
        if let Some(max) = bucket.max_days() {
            assert!(days <= max, "{days} day(s) classified as {bucket}");
        }
    }
}

#[test]
fn test_classify_reversed_range_uses_absolute_span() {
    let a = at(2020, 1, 1, 0, 0);
    let b = at(2020, 3, 1, 0, 0);
    assert_eq!(classify(b, a), classify(a, b));
    assert_eq!(classify(b, a), DurationBucket::M3);
}

// ===================================================================
// ResolutionSelector
// ===================================================================

#[test]
fn test_resolution_table() {
    use DurationBucket::*;
    use ResolutionKind::*;

    assert_eq!(resolution_for(Intraday), Second);
    assert_eq!(resolution_for(D5), FiveSecond);
    assert_eq!(resolution_for(D10), FifteenSecond);
    for bucket in [M1, M3, M6] {
        assert_eq!(resolution_for(bucket), Minute);
    }
    for bucket in [Y1, Y3, Y5] {
        assert_eq!(resolution_for(bucket), Daily);
    }
    assert_eq!(resolution_for(Max), Weekly);
}

#[test]
fn test_resolution_coarsens_with_span() {
    let resolutions: Vec<_> = DurationBucket::ALL.into_iter().map(resolution_for).collect();
    assert!(resolutions.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_resolution_provider_codes() {
    assert_eq!(ResolutionKind::FifteenSecond.provider_code(), "15");
    assert_eq!(ResolutionKind::Minute.provider_code(), "60");
    assert_eq!(ResolutionKind::Weekly.to_string(), "W");
}

// ===================================================================
// DateRangeResolver: intraday
// ===================================================================

#[test]
fn test_intraday_on_saturday_resolves_to_friday() {
    let range = resolve(DurationBucket::Intraday, at(2020, 3, 7, 12, 0)).unwrap();
    assert_eq!(range.from, at(2020, 3, 6, 8, 0));
    assert_eq!(range.to, at(2020, 3, 6, 22, 0));
}

#[test]
fn test_intraday_on_sunday_resolves_to_friday() {
    let range = resolve(DurationBucket::Intraday, at(2020, 3, 8, 9, 0)).unwrap();
    assert_eq!(range.from.date(), date(2020, 3, 6));
    assert_eq!(range.to.date(), date(2020, 3, 6));
}

#[test]
fn test_intraday_weekend_shift() {
    assert_eq!(trading_day_shift(DurationBucket::Intraday, date(2020, 3, 7)), Some(-1));
    assert_eq!(trading_day_shift(DurationBucket::Intraday, date(2020, 3, 8)), Some(-2));
    assert_eq!(trading_day_shift(DurationBucket::Intraday, date(2020, 3, 4)), Some(0));
}

#[test]
fn test_intraday_on_weekday_keeps_the_day() {
    let range = resolve(DurationBucket::Intraday, at(2020, 3, 4, 23, 30)).unwrap();
    assert_eq!(range.from, at(2020, 3, 4, 8, 0));
    assert_eq!(range.to, at(2020, 3, 4, 22, 0));
}

// ===================================================================
// DateRangeResolver: trading-day buckets
// ===================================================================

/// Weekend days among `today` and the `count - 1` days before it.
fn weekend_days(today: NaiveDate, count: i64) -> i64 {
    (0..count)
        .filter(|&i| is_weekend(today - Duration::days(i)))
        .count() as i64
}

#[test]
fn test_d5_without_weekend_shifts_by_count() {
    // Friday: Mon..Fri look-back has no weekend day.
    let friday = date(2020, 3, 6);
    assert_eq!(weekend_days(friday, 5), 0);
    assert_eq!(trading_day_shift(DurationBucket::D5, friday), Some(-5));

    let range = resolve(DurationBucket::D5, friday.and_hms_opt(15, 0, 0).unwrap()).unwrap();
    assert_eq!(range.from, at(2020, 3, 1, 8, 0));
    assert_eq!(range.to, at(2020, 3, 6, 22, 0));
}

#[test]
fn test_d5_skips_weekend_days() {
    // Monday: look-back Mon, Sun, Sat, Fri, Thu contains two weekend days.
    let monday = date(2020, 3, 9);
    assert_eq!(trading_day_shift(DurationBucket::D5, monday), Some(-7));

    let range = resolve(DurationBucket::D5, monday.and_hms_opt(10, 0, 0).unwrap()).unwrap();
    assert_eq!(range.from.date(), date(2020, 3, 2));
    assert_eq!(range.to.date(), monday);
}

#[test]
fn test_d10_carries_extra_day() {
    let friday = date(2020, 3, 6);
    assert_eq!(weekend_days(friday, 10), 2);
    assert_eq!(trading_day_shift(DurationBucket::D10, friday), Some(-13));

    let range = resolve(DurationBucket::D10, friday.and_hms_opt(12, 0, 0).unwrap()).unwrap();
    assert_eq!(range.from, at(2020, 2, 22, 8, 0));
    assert_eq!(range.to, at(2020, 3, 6, 22, 0));
}

#[test]
fn test_day_bucket_shift_formula() {
    let mut today = date(2020, 2, 1);
    for _ in 0..60 {
        let d5 = trading_day_shift(DurationBucket::D5, today).unwrap();
        let d10 = trading_day_shift(DurationBucket::D10, today).unwrap();
        assert_eq!(d5, -5 - weekend_days(today, 5), "D5 on {today}");
        assert_eq!(d10, -10 - weekend_days(today, 10) - 1, "D10 on {today}");
        today = today.succ_opt().unwrap();
    }
}

#[test]
fn test_calendar_buckets_have_no_trading_day_shift() {
    assert_eq!(trading_day_shift(DurationBucket::M1, date(2020, 3, 7)), None);
    assert_eq!(trading_day_shift(DurationBucket::Max, date(2020, 3, 7)), None);
}

// ===================================================================
// DateRangeResolver: calendar buckets
// ===================================================================

#[test]
fn test_month_buckets_subtract_calendar_months() {
    let now = at(2020, 3, 7, 12, 0);

    let m1 = resolve(DurationBucket::M1, now).unwrap();
    assert_eq!(m1.from, at(2020, 2, 7, 8, 0));
    assert_eq!(m1.to, at(2020, 3, 7, 22, 0));

    let y5 = resolve(DurationBucket::Y5, now).unwrap();
    assert_eq!(y5.from.date(), date(2015, 3, 7));

    let max = resolve(DurationBucket::Max, now).unwrap();
    assert_eq!(max.from.date(), date(1990, 3, 7));
}

#[test]
fn test_month_subtraction_clamps_to_month_end() {
    let range = resolve(DurationBucket::M3, at(2020, 5, 31, 12, 0)).unwrap();
    assert_eq!(range.from.date(), date(2020, 2, 29));
}

#[test]
fn test_resolved_range_is_ordered_for_every_bucket() {
    let start = at(2020, 2, 24, 13, 0);
    for offset in 0..21 {
        let now = start + Duration::days(offset);
        for bucket in DurationBucket::ALL {
            let range = resolve(bucket, now).unwrap();
            assert!(range.from < range.to, "{bucket} at {now}: {range}");
            assert_eq!(range.from.time(), time(8));
            assert_eq!(range.to.time(), time(22));
        }
    }
}

#[test]
fn test_resolver_uses_configured_session() {
    let session = SessionHours::from_hours(9, 17).unwrap();
    let resolver = DateRangeResolver::new(session);

    let range = resolver.resolve(DurationBucket::Y1, at(2020, 3, 4, 12, 0)).unwrap();
    assert_eq!(range.from, at(2019, 3, 4, 9, 0));
    assert_eq!(range.to, at(2020, 3, 4, 17, 0));
}

// ===================================================================
// Session hours & literal ranges
// ===================================================================

#[test]
fn test_session_hours_validation() {
    assert!(matches!(
        SessionHours::from_hours(22, 8),
        Err(WindowError::InvalidSession(_))
    ));
    assert!(matches!(
        SessionHours::from_hours(8, 24),
        Err(WindowError::InvalidSession(_))
    ));
    let default = SessionHours::default();
    assert_eq!((default.open(), default.close()), (time(8), time(22)));
}

#[test]
fn test_inverted_session_is_rejected_on_deserialize() {
    let err = serde_json::from_str::<SessionHours>(r#"{"open":"22:00:00","close":"08:00:00"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid trading session"), "{err}");

    let session: SessionHours =
        serde_json::from_str(r#"{"open":"09:00:00","close":"17:00:00"}"#).unwrap();
    let range = DateRangeResolver::new(session)
        .resolve(DurationBucket::Intraday, at(2020, 3, 4, 12, 0))
        .unwrap();
    assert!(range.from < range.to);
}

#[test]
fn test_inverted_range_is_rejected_on_deserialize() {
    let json = r#"{"from":"2020-03-04T22:00:00","to":"2020-03-04T08:00:00"}"#;
    assert!(serde_json::from_str::<DateRange>(json).is_err());

    let range = DateRange::new(at(2020, 3, 4, 8, 0), at(2020, 3, 4, 22, 0)).unwrap();
    let back: DateRange = serde_json::from_str(&serde_json::to_string(&range).unwrap()).unwrap();
    assert_eq!(back, range);
}

#[test]
fn test_single_weekend_day_is_market_closed() {
    let range = DateRange::new(at(2020, 3, 7, 8, 0), at(2020, 3, 7, 22, 0)).unwrap();
    assert_eq!(
        range.ensure_tradable(),
        Err(WindowError::WeekendMarketClosed { date: date(2020, 3, 7) })
    );
}

#[test]
fn test_multi_day_and_weekday_ranges_are_tradable() {
    let weekend = DateRange::new(at(2020, 3, 7, 8, 0), at(2020, 3, 8, 22, 0)).unwrap();
    assert!(weekend.ensure_tradable().is_ok());

    let friday = DateRange::new(at(2020, 3, 6, 8, 0), at(2020, 3, 6, 22, 0)).unwrap();
    assert!(friday.ensure_tradable().is_ok());
    assert_eq!(friday.days(), 0);
}

#[test]
fn test_literal_range_must_be_ordered() {
    let t = at(2020, 3, 6, 8, 0);
    assert_eq!(
        DateRange::new(t, t),
        Err(WindowError::InvalidRange { from: t, to: t })
    );
}

// ===================================================================
// AxisTickGenerator
// ===================================================================

/// Ten timestamps on one day; the hour changes between index 4 and 5.
fn hour_crossing_series() -> Vec<NaiveDateTime> {
    let first = at(2020, 3, 6, 9, 10);
    (0..10).map(|i| first + Duration::minutes(10 * i)).collect()
}

#[test]
fn test_intraday_ticks_at_hour_boundary() {
    let times = hour_crossing_series();
    assert_eq!(times[4], at(2020, 3, 6, 9, 50));
    assert_eq!(times[5], at(2020, 3, 6, 10, 0));

    let (marks, grid) = ticks(&times, DurationBucket::Intraday).unwrap();

    let positions: Vec<_> = marks.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0, 5, 10]);
    assert_eq!(marks[0].label, "03-06 9AM");
    assert_eq!(marks[1].label, "03-06 10AM");
    assert_eq!(marks[2].label, "");
    assert_eq!(grid, vec![GridLine { position: 5 }]);
}

#[test]
fn test_intraday_tick_on_same_hour_of_next_day() {
    let times = [at(2020, 3, 5, 21, 0), at(2020, 3, 6, 21, 0)];
    let (marks, grid) = ticks(&times, DurationBucket::Intraday).unwrap();
    assert_eq!(marks[1].position, 1);
    assert_eq!(marks[1].label, "03-06 9PM");
    assert_eq!(grid, vec![GridLine { position: 1 }]);
}

#[test]
fn test_intraday_afternoon_label() {
    let times = [at(2020, 3, 6, 12, 59), at(2020, 3, 6, 13, 0)];
    let (marks, _) = ticks(&times, DurationBucket::Intraday).unwrap();
    assert_eq!(marks[0].label, "03-06 12PM");
    assert_eq!(marks[1].label, "03-06 1PM");
}

#[test]
fn test_day_ticks() {
    // Hourly samples 20:00..03:00 across three calendar days.
    let first = at(2020, 3, 3, 20, 0);
    let times: Vec<_> = (0..32).map(|i| first + Duration::hours(i)).collect();

    let (marks, grid) = ticks(&times, DurationBucket::D5).unwrap();

    assert_eq!(marks.first().unwrap().label, "2020-03-03");
    let interior: Vec<_> = marks[1..marks.len() - 1]
        .iter()
        .map(|t| (t.position, t.label.as_str()))
        .collect();
    assert_eq!(interior, vec![(4, "2020-03-04"), (28, "2020-03-05")]);
    assert_eq!(grid.len(), 2);
    assert_eq!(marks.last().unwrap().position, 32);
}

#[test]
fn test_month_ticks_leave_leading_tick_blank() {
    let first = at(2020, 1, 15, 0, 0);
    let times: Vec<_> = (0..60).map(|i| first + Duration::days(i)).collect();

    let (marks, grid) = ticks(&times, DurationBucket::M3).unwrap();

    assert_eq!(marks[0].label, "");
    let labels: Vec<_> = marks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["", "Feb", "Mar", ""]);
    // Jan 15 + 17 days = Feb 1, + 46 days = Mar 1.
    assert_eq!(grid, vec![GridLine { position: 17 }, GridLine { position: 46 }]);
}

#[test]
fn test_year_ticks() {
    let first = at(2016, 11, 7, 0, 0);
    let times: Vec<_> = (0..100).map(|i| first + Duration::weeks(i)).collect();

    let (marks, grid) = ticks(&times, DurationBucket::Max).unwrap();

    let labels: Vec<_> = marks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["", "2017", "2018", ""]);
    assert_eq!(grid.len(), 2);
    for (mark, line) in marks[1..marks.len() - 1].iter().zip(&grid) {
        assert_eq!(mark.position, line.position);
        assert_eq!(times[mark.position].month(), 1);
    }
}

#[test]
fn test_ticks_are_framed_by_sentinels() {
    let first = at(2019, 12, 30, 21, 0);
    let times: Vec<_> = (0..400).map(|i| first + Duration::hours(7 * i)).collect();

    for bucket in DurationBucket::ALL {
        let (marks, grid) = ticks(&times, bucket).unwrap();
        assert_eq!(marks.first().unwrap().position, 0, "{bucket}");
        assert_eq!(marks.last().unwrap().position, times.len(), "{bucket}");
        assert_eq!(marks.last().unwrap().label, "", "{bucket}");
        assert_eq!(grid.len(), marks.len() - 2, "{bucket}");
        assert!(marks.windows(2).all(|w| w[0].position < w[1].position));
    }
}

#[test]
fn test_no_boundary_yields_only_sentinels() {
    let times = [at(2020, 3, 6, 9, 1), at(2020, 3, 6, 9, 2)];
    let (marks, grid) = ticks(&times, DurationBucket::Intraday).unwrap();
    assert_eq!(marks.len(), 2);
    assert!(grid.is_empty());
}

#[test]
fn test_ticks_need_two_timestamps() {
    assert_eq!(
        ticks(&[], DurationBucket::Intraday),
        Err(WindowError::EmptySeries { len: 0 })
    );
    assert_eq!(
        ticks(&[at(2020, 3, 6, 9, 0)], DurationBucket::Y1),
        Err(WindowError::EmptySeries { len: 1 })
    );
}
