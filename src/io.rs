use crate::calendar::{date_key, parse_date_key};
use crate::model::{Person, Roster};
use crate::scheduler::{RosterStats, Schedule};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, Trim, Writer, WriterBuilder};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Séparateur des dates dans la colonne `dates` des statistiques.
pub const DATES_SEPARATOR: &str = "、";

/// Import du roster depuis CSV: header `name,weekdays` (ex. `Alice,一、三、五`)
pub fn import_people_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let path = path.as_ref();
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_people(rdr)
}

pub fn read_people<R: Read>(mut rdr: Reader<R>) -> anyhow::Result<Roster> {
    let mut roster = Roster::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = line + 2;
        let name = rec.get(0).context("missing name")?;
        let days = rec.get(1).context("missing weekdays")?;
        if name.is_empty() {
            bail!("invalid people row {row} (empty name)");
        }
        let person =
            Person::parse(name, days).with_context(|| format!("row {row} ({name})"))?;
        roster
            .push(person)
            .with_context(|| format!("row {row} ({name})"))?;
    }
    Ok(roster)
}

/// Liste de dates `YYYY-MM-DD`, une par ligne ; lignes vides et `#` ignorées.
pub fn import_dates<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<NaiveDate>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_dates(&raw)
}

pub fn parse_dates(raw: &str) -> anyhow::Result<Vec<NaiveDate>> {
    raw.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(row, line)| {
            parse_date_key(line).with_context(|| format!("line {row}: invalid date {line:?}"))
        })
        .collect()
}

/// Export CSV du planning: header `date,weekday,person`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let w = WriterBuilder::new().has_headers(true).from_path(path)?;
    write_schedule(w, schedule)
}

pub fn write_schedule<W: Write>(mut w: Writer<W>, schedule: &Schedule) -> anyhow::Result<()> {
    w.write_record(["date", "weekday", "person"])?;
    for rec in &schedule.records {
        let date = rec.date_key();
        let label = rec.label.to_string();
        w.write_record([date.as_str(), label.as_str(), rec.person.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des statistiques: header `name,days,dates`
pub fn export_stats_csv<P: AsRef<Path>>(path: P, stats: &RosterStats) -> anyhow::Result<()> {
    let w = WriterBuilder::new().has_headers(true).from_path(path)?;
    write_stats(w, stats)
}

pub fn write_stats<W: Write>(mut w: Writer<W>, stats: &RosterStats) -> anyhow::Result<()> {
    w.write_record(["name", "days", "dates"])?;
    let mut buf = itoa::Buffer::new();
    for load in stats.loads() {
        let dates = load.joined_dates(DATES_SEPARATOR);
        w.write_record([load.name.as_str(), buf.format(load.count), dates.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Liste de dates triée, une par ligne.
pub fn format_dates<'a, I: IntoIterator<Item = &'a NaiveDate>>(dates: I) -> String {
    dates
        .into_iter()
        .map(|d| format!("{}\n", date_key(*d)))
        .collect()
}
