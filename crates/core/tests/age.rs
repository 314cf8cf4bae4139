use agecalc_core::dates::{
    CalendarDate, DateError, DateInput, age, age_from_today, years_between,
};
use chrono::{Local, NaiveDate};
use insta::assert_snapshot;
use rstest::rstest;

#[rstest]
#[case("2000年1月1日", "2024年1月1日", 24)]
#[case("2000年1月2日", "2024年1月1日", 23)]
#[case("2000年6月15日", "2024年6月14日", 23)]
#[case("2000年6月15日", "2024年6月15日", 24)]
#[case("2000年6月15日23時0分0秒", "2024年6月15日0時0分0秒", 24)]
#[case("2024年1月1日", "2000年1月1日", -24)]
fn structured_inputs(#[case] from: &str, #[case] to: &str, #[case] expected: i32) {
    assert_eq!(age(from, to), Ok(expected));
}

#[rstest]
#[case("2000-01-01", "2024-01-01", 24)]
#[case("2000-01-02", "2024年1月1日", 23)]
#[case("2000年6月15日", "2024-06-14T12:00:00", 23)]
#[case("June 15, 2000", "2024/06/15", 24)]
fn mixed_inputs(#[case] from: &str, #[case] to: &str, #[case] expected: i32) {
    assert_eq!(age(from, to), Ok(expected));
}

#[rstest]
#[case("2024年1月1日")]
#[case("1970-01-01")]
#[case("2024年2月29日12時0分0秒")]
fn same_date_is_zero(#[case] date: &str) {
    assert_eq!(age(date, date), Ok(0));
}

#[test]
fn calendar_date_inputs() {
    let birth = CalendarDate::new(1990, 3, 10);
    let day = CalendarDate::new(2020, 3, 9);
    assert_eq!(age(birth, day), Ok(29));
    assert_eq!(age(&birth, "2020年3月10日"), Ok(30));
}

#[test]
fn month_thirteen_rolls_over() {
    // 2023年13月1日 resolves to 2024-01-01
    assert_eq!(age("2000年1月1日", "2023年13月1日"), Ok(24));
}

#[test]
fn unparseable_input_is_invalid_date() {
    let err = age("not-a-date", "2024年1月1日").unwrap_err();
    assert_eq!(err, DateError::InvalidDate { input: "not-a-date".into() });
    assert_snapshot!(err.to_string(), @"invalid date: not-a-date");

    assert!(age("2024年1月1日", DateInput::Text(String::new())).is_err());
}

#[test]
fn age_from_today_matches_age_against_today() {
    let birth = CalendarDate::new(1990, 1, 1);
    let today = Local::now().date_naive();
    let expected = age(birth, today).unwrap();
    assert_eq!(age_from_today(&birth), Ok(expected));
}

#[test]
fn years_between_ignores_time() {
    let from =
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(23, 59, 59).unwrap();
    let to = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(years_between(from, to), 1);
}
