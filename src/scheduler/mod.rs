mod assignment;
mod availability;
mod stats;
mod types;
mod util;

pub use availability::AvailabilityIndex;
pub use stats::{PersonLoad, RosterStats};
pub use types::{AssignmentRecord, DayLabel, SchedError, Schedule, MAKE_UP_MARKER};
pub use util::days_inclusive;

use crate::calendar::Calendar;
use crate::model::{Person, Roster};
use chrono::NaiveDate;

/// Génère le planning de `start` à `end` inclus.
///
/// Chaque jour travaillé reçoit la personne éligible la moins chargée ;
/// à égalité, la première dans l'ordre du roster. Même entrée, même sortie.
pub fn generate_schedule(
    roster: &Roster,
    calendar: &Calendar,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Schedule, SchedError> {
    assignment::generate_schedule(roster, calendar, start, end)
}

/// Scheduler : encapsule un roster et le calendrier de la génération
#[derive(Debug, Default)]
pub struct Scheduler {
    roster: Roster,
    calendar: Calendar,
}

impl Scheduler {
    pub fn new(calendar: Calendar) -> Self {
        Self {
            roster: Roster::default(),
            calendar,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }

    /// Ajoute un lot de personnes ; un lot invalide laisse le roster intact.
    pub fn add_people(&mut self, people: Vec<Person>) -> Result<(), SchedError> {
        let mut next = self.roster.clone();
        for person in people {
            next.push(person)?;
        }
        self.roster = next;
        Ok(())
    }

    pub fn generate(&self, start: NaiveDate, end: NaiveDate) -> Result<Schedule, SchedError> {
        generate_schedule(&self.roster, &self.calendar, start, end)
    }
}
