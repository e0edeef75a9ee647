use chrono::{
    Datelike, Days, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday,
};
use serde::{Deserialize, Serialize};

use crate::task::string_enum_impls;

/// First instant of `day`.
pub fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

const LAST_MILLISECOND: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// Last millisecond of `day` (23:59:59.999).
pub fn day_end(day: NaiveDate) -> NaiveDateTime {
    day.and_time(LAST_MILLISECOND)
}

pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    Day,
    #[default]
    Week,
    Month,
}

impl CalendarView {
    pub const ALL: [CalendarView; 3] = [CalendarView::Day, CalendarView::Week, CalendarView::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Day => "day",
            CalendarView::Week => "week",
            CalendarView::Month => "month",
        }
    }
}

string_enum_impls!(CalendarView, "calendar view");

pub fn start_of_week(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday()
        - week_starts_on.num_days_from_monday())
        % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

pub fn end_of_week(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    start_of_week(date, week_starts_on)
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first_of_next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Every day from `start` to `end`, both inclusive. Empty when `start > end`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Which slice of the calendar the board is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCursor {
    pub selected: NaiveDate,
    pub view: CalendarView,
    pub week_starts_on: Weekday,
}

impl CalendarCursor {
    pub fn new(selected: NaiveDate, view: CalendarView) -> Self {
        Self {
            selected,
            view,
            week_starts_on: Weekday::Mon,
        }
    }

    pub fn with_week_start(mut self, week_starts_on: Weekday) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }

    /// First and last visible day.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        match self.view {
            CalendarView::Day => (self.selected, self.selected),
            CalendarView::Week => (
                start_of_week(self.selected, self.week_starts_on),
                end_of_week(self.selected, self.week_starts_on),
            ),
            CalendarView::Month => (start_of_month(self.selected), end_of_month(self.selected)),
        }
    }

    pub fn visible_days(&self) -> Vec<NaiveDate> {
        let (start, end) = self.bounds();
        days_in_range(start, end)
    }

    pub fn next(&mut self) {
        self.selected = self.shifted(true);
    }

    pub fn prev(&mut self) {
        self.selected = self.shifted(false);
    }

    pub fn today(&mut self) {
        self.selected = Local::now().date_naive();
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    fn shifted(&self, forward: bool) -> NaiveDate {
        let date = self.selected;
        let moved = match (self.view, forward) {
            (CalendarView::Day, true) => date.checked_add_signed(Duration::days(1)),
            (CalendarView::Day, false) => date.checked_sub_signed(Duration::days(1)),
            (CalendarView::Week, true) => date.checked_add_signed(Duration::weeks(1)),
            (CalendarView::Week, false) => date.checked_sub_signed(Duration::weeks(1)),
            // chrono clamps to the last day of shorter months
            (CalendarView::Month, true) => date.checked_add_months(Months::new(1)),
            (CalendarView::Month, false) => date.checked_sub_months(Months::new(1)),
        };
        moved.unwrap_or(date)
    }

    /// Header text for the current range, e.g. `3 Jun - 9 Jun 2024`.
    pub fn label(&self) -> String {
        match self.view {
            CalendarView::Day => self.selected.format("%A, %-d %B %Y").to_string(),
            CalendarView::Week => {
                let (start, end) = self.bounds();
                format!("{} - {}", start.format("%-d %b"), end.format("%-d %b %Y"))
            }
            CalendarView::Month => self.selected.format("%B %Y").to_string(),
        }
    }
}
