use chrono::{Datelike, Days, NaiveDate, Weekday};

pub(super) fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

pub(super) fn is_saturday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

/// `date + n` jours, `None` au-delà du calendrier représentable.
pub(super) fn days_after(date: NaiveDate, n: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(n))
}

pub(super) fn days_before(date: NaiveDate, n: u64) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(n))
}
