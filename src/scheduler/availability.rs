use crate::calendar::DayKind;
use crate::model::{Roster, WeekdaySet};
use chrono::{Datelike, NaiveDate, Weekday};

/// Disponibilités indexées par position dans le roster.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex {
    sets: Vec<WeekdaySet>,
}

impl AvailabilityIndex {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            sets: roster.people().iter().map(|p| p.availability).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn is_available(&self, person: usize, day: Weekday) -> bool {
        self.sets.get(person).is_some_and(|set| set.contains(day))
    }

    /// Un jour de rattrapage est ouvert à tout le roster, quels que soient
    /// les jours déclarés.
    pub fn is_eligible(&self, person: usize, date: NaiveDate, kind: DayKind) -> bool {
        match kind {
            DayKind::Excluded => false,
            DayKind::ScheduledMakeUp => person < self.sets.len(),
            DayKind::ScheduledNormal => self.is_available(person, date.weekday()),
        }
    }

    /// Positions éligibles, dans l'ordre du roster.
    pub fn eligible(&self, date: NaiveDate, kind: DayKind) -> impl Iterator<Item = usize> + '_ {
        (0..self.sets.len()).filter(move |&idx| self.is_eligible(idx, date, kind))
    }
}
