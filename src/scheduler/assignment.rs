use super::availability::AvailabilityIndex;
use super::stats::RosterStats;
use super::types::{AssignmentRecord, DayLabel, SchedError, Schedule};
use super::util;
use crate::calendar::{Calendar, DayKind};
use crate::model::Roster;
use chrono::{Datelike, NaiveDate};

pub(super) fn generate_schedule(
    roster: &Roster,
    calendar: &Calendar,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Schedule, SchedError> {
    if start > end {
        return Err(SchedError::InvalidRange { start, end });
    }

    let index = AvailabilityIndex::from_roster(roster);
    let mut stats = RosterStats::for_roster(roster);
    let mut records = Vec::new();

    for date in util::days_inclusive(start, end) {
        let kind = calendar.classify(date);
        if !kind.is_scheduled() {
            #[cfg(feature = "logging")]
            tracing::debug!(%date, "day excluded");
            continue;
        }

        let Some(chosen) = select_least_loaded(&index, &stats, date, kind) else {
            #[cfg(feature = "logging")]
            tracing::warn!(%date, assigned = records.len(), "no eligible person");
            return Err(SchedError::NoEligiblePerson {
                date,
                partial: Box::new(Schedule { records, stats }),
            });
        };

        let person = &roster.people()[chosen];
        stats.record(chosen, date);
        records.push(AssignmentRecord {
            date,
            label: DayLabel::new(date.weekday(), kind.is_make_up()),
            person: person.name.clone(),
        });

        #[cfg(feature = "logging")]
        tracing::debug!(%date, person = %person.name, make_up = kind.is_make_up(), "day assigned");
    }

    #[cfg(feature = "logging")]
    tracing::info!(%start, %end, days = records.len(), people = roster.len(), "schedule generated");

    Ok(Schedule { records, stats })
}

/// Éligible le moins chargé ; à égalité, le premier dans l'ordre du roster.
pub(super) fn select_least_loaded(
    index: &AvailabilityIndex,
    stats: &RosterStats,
    date: NaiveDate,
    kind: DayKind,
) -> Option<usize> {
    index
        .eligible(date, kind)
        .min_by_key(|&idx| (stats.count_at(idx), idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Person;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn tie_goes_to_first_in_roster() {
        let roster = Roster::from_people([
            Person::parse("Zoé", "mon").unwrap(),
            Person::parse("Adam", "mon").unwrap(),
        ])
        .unwrap();
        let index = AvailabilityIndex::from_roster(&roster);
        let mut stats = RosterStats::for_roster(&roster);
        let monday = d(2024, 3, 4);

        let first = select_least_loaded(&index, &stats, monday, DayKind::ScheduledNormal);
        assert_eq!(first, Some(0));

        stats.record(0, monday);
        let second = select_least_loaded(&index, &stats, monday, DayKind::ScheduledNormal);
        assert_eq!(second, Some(1));

        stats.record(1, monday);
        let third = select_least_loaded(&index, &stats, monday, DayKind::ScheduledNormal);
        assert_eq!(third, Some(0));
    }

    #[test]
    fn ineligible_person_never_selected_even_if_idle() {
        let roster = Roster::from_people([
            Person::parse("Alice", "mon").unwrap(),
            Person::parse("Bob", "tue").unwrap(),
        ])
        .unwrap();
        let index = AvailabilityIndex::from_roster(&roster);
        let mut stats = RosterStats::for_roster(&roster);
        let monday = d(2024, 3, 4);
        stats.record(0, monday);
        stats.record(0, d(2024, 3, 11));

        let pick = select_least_loaded(&index, &stats, d(2024, 3, 18), DayKind::ScheduledNormal);
        assert_eq!(pick, Some(0));
    }

    #[test]
    fn excluded_days_leave_loads_untouched() {
        let roster = Roster::from_people([Person::parse("Alice", "mon").unwrap()]).unwrap();
        let saturday = d(2024, 3, 9);
        let sunday = d(2024, 3, 10);
        let schedule =
            generate_schedule(&roster, &Calendar::default(), saturday, sunday).unwrap();
        assert!(schedule.records.is_empty());
        assert_eq!(schedule.stats.total(), 0);
    }
}
