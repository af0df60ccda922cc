use crate::calendar::date_key;
use crate::model::Roster;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Charge d'une personne pendant une génération.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PersonLoad {
    pub name: String,
    pub count: usize,
    pub dates: Vec<NaiveDate>,
}

impl PersonLoad {
    pub fn joined_dates(&self, sep: &str) -> String {
        self.dates
            .iter()
            .map(|d| date_key(*d))
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// Totaux par personne, dans l'ordre du roster (personnes sans service incluses).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RosterStats {
    loads: Vec<PersonLoad>,
}

impl RosterStats {
    pub(super) fn for_roster(roster: &Roster) -> Self {
        Self {
            loads: roster
                .people()
                .iter()
                .map(|p| PersonLoad {
                    name: p.name.clone(),
                    count: 0,
                    dates: Vec::new(),
                })
                .collect(),
        }
    }

    pub(super) fn record(&mut self, person: usize, date: NaiveDate) {
        if let Some(load) = self.loads.get_mut(person) {
            load.count += 1;
            load.dates.push(date);
        }
    }

    pub(super) fn count_at(&self, person: usize) -> usize {
        self.loads.get(person).map_or(0, |l| l.count)
    }

    pub fn loads(&self) -> &[PersonLoad] {
        &self.loads
    }

    pub fn get(&self, name: &str) -> Option<&PersonLoad> {
        self.loads.iter().find(|l| l.name == name)
    }

    pub fn total(&self) -> usize {
        self.loads.iter().map(|l| l.count).sum()
    }

    /// `(min, max)` des compteurs ; `None` pour un roster vide.
    pub fn spread(&self) -> Option<(usize, usize)> {
        let min = self.loads.iter().map(|l| l.count).min()?;
        let max = self.loads.iter().map(|l| l.count).max()?;
        Some((min, max))
    }
}
