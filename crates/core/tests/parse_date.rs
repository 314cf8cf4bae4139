use agecalc_core::dates::{CalendarDate, parse_date};
use rstest::rstest;

#[rstest]
#[case("2024年1月1日", 2024, 1, 1)]
#[case("2000年6月15日", 2000, 6, 15)]
#[case("1999年12月31日", 1999, 12, 31)]
#[case("0001年01月09号", 1, 1, 9)]
fn parses_date_at_midnight(
    #[case] input: &str,
    #[case] year: i32,
    #[case] month: u32,
    #[case] day: u32,
) {
    let date = parse_date(input).expect("should match");
    assert_eq!(date, CalendarDate::new(year, month, day));
    assert_eq!((date.hour, date.minute, date.second), (0, 0, 0));
}

#[rstest]
#[case("2024年1月1日0時0分0秒", (0, 0, 0))]
#[case("2024年1月1日9時5分7秒", (9, 5, 7))]
#[case("2024年1月1日23時59分59秒", (23, 59, 59))]
fn parses_time_of_day(#[case] input: &str, #[case] hms: (u32, u32, u32)) {
    let date = parse_date(input).expect("should match");
    assert_eq!((date.hour, date.minute, date.second), hms);
}

#[rstest]
#[case("2024/01/01")]
#[case("2024-01-01")]
#[case("2024年1月1日!")]
#[case("今日2024年1月1日")]
#[case("2024年1月1日 ")]
#[case("2024年1月1")]
#[case("2024年1月")]
#[case("2024年1月1日9時30分")]
#[case("2024年1月1日9時30分0秒0")]
#[case("abcd年1月1日")]
#[case("not-a-date")]
fn rejects_non_matching(#[case] input: &str) {
    assert_eq!(parse_date(input), None);
}

#[test]
fn keeps_out_of_range_fields() {
    assert_eq!(parse_date("2024年13月32日"), Some(CalendarDate::new(2024, 13, 32)));
    assert_eq!(parse_date("2024年0月0日"), Some(CalendarDate::new(2024, 0, 0)));
}
