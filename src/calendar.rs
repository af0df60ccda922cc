use crate::model::is_weekend;
use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Format canonique des clés de date.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Clé canonique `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_KEY_FORMAT)
}

/// Statut d'une date vis-à-vis du planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DayKind {
    Excluded,
    ScheduledNormal,
    ScheduledMakeUp,
}

impl DayKind {
    pub fn is_scheduled(self) -> bool {
        !matches!(self, DayKind::Excluded)
    }

    pub fn is_make_up(self) -> bool {
        matches!(self, DayKind::ScheduledMakeUp)
    }
}

/// Classe une date. Ordre d'évaluation : jour férié, puis week-end non
/// rattrapé, puis jour travaillé (rattrapage ou normal).
pub fn classify(
    date: NaiveDate,
    holidays: &BTreeSet<NaiveDate>,
    make_up_days: &BTreeSet<NaiveDate>,
) -> DayKind {
    if holidays.contains(&date) {
        return DayKind::Excluded;
    }
    let make_up = make_up_days.contains(&date);
    if is_weekend(date.weekday()) && !make_up {
        return DayKind::Excluded;
    }
    if make_up {
        DayKind::ScheduledMakeUp
    } else {
        DayKind::ScheduledNormal
    }
}

/// Jours fériés 2024 (Chine continentale) et 1er janvier 2025.
const DEFAULT_HOLIDAYS: &[(i32, u32, u32)] = &[
    (2024, 1, 1),
    (2024, 2, 10),
    (2024, 2, 11),
    (2024, 2, 12),
    (2024, 2, 13),
    (2024, 2, 14),
    (2024, 2, 15),
    (2024, 2, 16),
    (2024, 2, 17),
    (2024, 4, 4),
    (2024, 4, 5),
    (2024, 4, 6),
    (2024, 5, 1),
    (2024, 5, 2),
    (2024, 5, 3),
    (2024, 5, 4),
    (2024, 5, 5),
    (2024, 6, 10),
    (2024, 9, 15),
    (2024, 9, 16),
    (2024, 9, 17),
    (2024, 10, 1),
    (2024, 10, 2),
    (2024, 10, 3),
    (2024, 10, 4),
    (2024, 10, 5),
    (2024, 10, 6),
    (2024, 10, 7),
    (2025, 1, 1),
];

/// Samedis/dimanches travaillés correspondants.
const DEFAULT_MAKE_UP_DAYS: &[(i32, u32, u32)] =
    &[(2024, 9, 14), (2024, 9, 29), (2024, 10, 12), (2025, 1, 11)];

fn to_dates(raw: &[(i32, u32, u32)]) -> BTreeSet<NaiveDate> {
    raw.iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

/// Jours fériés + jours de rattrapage, figés pendant une génération.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calendar {
    #[cfg_attr(feature = "serde", serde(default))]
    pub holidays: BTreeSet<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub make_up_days: BTreeSet<NaiveDate>,
}

impl Calendar {
    pub fn new<H, M>(holidays: H, make_up_days: M) -> Self
    where
        H: IntoIterator<Item = NaiveDate>,
        M: IntoIterator<Item = NaiveDate>,
    {
        Self {
            holidays: holidays.into_iter().collect(),
            make_up_days: make_up_days.into_iter().collect(),
        }
    }

    /// Calendrier intégré, utilisé quand aucun fichier n'existe encore.
    pub fn builtin() -> Self {
        Self {
            holidays: to_dates(DEFAULT_HOLIDAYS),
            make_up_days: to_dates(DEFAULT_MAKE_UP_DAYS),
        }
    }

    pub fn classify(&self, date: NaiveDate) -> DayKind {
        classify(date, &self.holidays, &self.make_up_days)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_make_up_day(&self, date: NaiveDate) -> bool {
        self.make_up_days.contains(&date)
    }

    /// Retourne `false` si la date était déjà présente.
    pub fn add_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.insert(date)
    }

    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove(&date)
    }

    pub fn add_make_up_day(&mut self, date: NaiveDate) -> bool {
        self.make_up_days.insert(date)
    }

    pub fn remove_make_up_day(&mut self, date: NaiveDate) -> bool {
        self.make_up_days.remove(&date)
    }
}
