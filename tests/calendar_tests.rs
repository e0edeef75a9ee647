use chrono::{NaiveDate, Weekday};
use dispatch_board::calendar::{
    CalendarCursor, CalendarView, day_end, day_start, days_in_range, end_of_month, is_weekend,
    start_of_week,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn day_bounds_span_midnight_to_last_millisecond() {
    let day = d(2024, 6, 3);
    assert_eq!(day_start(day), day.and_hms_opt(0, 0, 0).unwrap());
    assert_eq!(day_end(day), day.and_hms_milli_opt(23, 59, 59, 999).unwrap());
}

#[test]
fn week_view_runs_monday_to_sunday() {
    // 2024-06-05 is a Wednesday
    let cursor = CalendarCursor::new(d(2024, 6, 5), CalendarView::Week);
    let days = cursor.visible_days();
    assert_eq!(days.len(), 7);
    assert_eq!(days.first().copied().unwrap(), d(2024, 6, 3));
    assert_eq!(days.last().copied().unwrap(), d(2024, 6, 9));
}

#[test]
fn week_start_is_configurable() {
    let cursor =
        CalendarCursor::new(d(2024, 6, 5), CalendarView::Week).with_week_start(Weekday::Sun);
    assert_eq!(cursor.bounds(), (d(2024, 6, 2), d(2024, 6, 8)));
    // a Sunday is the first day of its own week
    assert_eq!(start_of_week(d(2024, 6, 9), Weekday::Sun), d(2024, 6, 9));
    assert_eq!(start_of_week(d(2024, 6, 9), Weekday::Mon), d(2024, 6, 3));
}

#[test]
fn month_view_covers_the_whole_month() {
    let june = CalendarCursor::new(d(2024, 6, 17), CalendarView::Month);
    assert_eq!(june.bounds(), (d(2024, 6, 1), d(2024, 6, 30)));
    assert_eq!(june.visible_days().len(), 30);

    let leap_feb = CalendarCursor::new(d(2024, 2, 10), CalendarView::Month);
    assert_eq!(leap_feb.visible_days().len(), 29);
    assert_eq!(end_of_month(d(2023, 12, 5)), d(2023, 12, 31));
}

#[test]
fn day_view_shows_only_selected_day() {
    let cursor = CalendarCursor::new(d(2024, 6, 5), CalendarView::Day);
    assert_eq!(cursor.visible_days(), vec![d(2024, 6, 5)]);
}

#[test]
fn navigation_steps_by_view_unit() {
    let mut cursor = CalendarCursor::new(d(2024, 6, 5), CalendarView::Day);
    cursor.next();
    assert_eq!(cursor.selected, d(2024, 6, 6));

    cursor.set_view(CalendarView::Week);
    cursor.prev();
    assert_eq!(cursor.selected, d(2024, 5, 30));

    cursor.selected = d(2024, 1, 31);
    cursor.set_view(CalendarView::Month);
    cursor.next();
    assert_eq!(cursor.selected, d(2024, 2, 29));
    cursor.prev();
    assert_eq!(cursor.selected, d(2024, 1, 29));
}

#[test]
fn labels_describe_visible_range() {
    let week = CalendarCursor::new(d(2024, 6, 5), CalendarView::Week);
    assert_eq!(week.label(), "3 Jun - 9 Jun 2024");
    let month = CalendarCursor::new(d(2024, 6, 5), CalendarView::Month);
    assert_eq!(month.label(), "June 2024");
    let day = CalendarCursor::new(d(2024, 6, 5), CalendarView::Day);
    assert_eq!(day.label(), "Wednesday, 5 June 2024");
}

#[test]
fn weekends_and_ranges() {
    assert!(is_weekend(d(2024, 6, 8)));
    assert!(is_weekend(d(2024, 6, 9)));
    assert!(!is_weekend(d(2024, 6, 10)));
    assert!(days_in_range(d(2024, 6, 2), d(2024, 6, 1)).is_empty());
    assert_eq!(days_in_range(d(2024, 6, 1), d(2024, 6, 1)), vec![d(2024, 6, 1)]);
}

#[test]
fn views_parse_from_text() {
    assert_eq!("Month".parse::<CalendarView>().unwrap(), CalendarView::Month);
    assert_eq!(" week ".parse::<CalendarView>().unwrap(), CalendarView::Week);
    assert!("year".parse::<CalendarView>().is_err());
    assert_eq!(CalendarView::default(), CalendarView::Week);
}

#[test]
fn extreme_dates_stay_in_range() {
    let last = NaiveDate::MAX;
    assert_eq!(day_end(last), last.and_hms_milli_opt(23, 59, 59, 999).unwrap());
    assert_eq!(end_of_month(last), last);

    let week = CalendarCursor::new(last, CalendarView::Week);
    let (start, end) = week.bounds();
    assert!(start <= last && end == last);
    assert!(!week.visible_days().is_empty());

    let first =
        CalendarCursor::new(NaiveDate::MIN, CalendarView::Week).with_week_start(Weekday::Sun);
    let days = first.visible_days();
    assert_eq!(days.first().copied(), Some(NaiveDate::MIN));
    assert!(days.len() <= 7);

    let mut cursor = CalendarCursor::new(last, CalendarView::Day);
    cursor.next();
    assert_eq!(cursor.selected, last);
}
