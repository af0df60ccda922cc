#![forbid(unsafe_code)]
//! Duty roster — génération d'un tableau de permanence journalier.
//!
//! - Un jour travaillé = une personne.
//! - Jours fériés exclus ; samedis/dimanches exclus sauf jours de rattrapage.
//! - Choix de la personne éligible la moins chargée, départage par ordre du roster.
//! - Stockage fichiers (CSV/JSON) avec la feature `serde`.

pub mod calendar;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;

pub use calendar::{classify, date_key, parse_date_key, Calendar, DayKind};
pub use model::{parse_weekday, weekday_label, Person, Roster, RosterError, WeekdaySet};
pub use scheduler::{
    generate_schedule, AssignmentRecord, AvailabilityIndex, DayLabel, PersonLoad, RosterStats,
    SchedError, Schedule, Scheduler,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
