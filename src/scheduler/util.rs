use chrono::NaiveDate;

/// Jours de `start` à `end` inclus, en ordre croissant.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}
