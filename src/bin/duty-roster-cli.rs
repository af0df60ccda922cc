#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use duty_roster::{
    calendar::{date_key, Calendar, DayKind},
    io,
    scheduler::{days_inclusive, generate_schedule, SchedError, Schedule},
    storage::{JsonStorage, Storage},
};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de génération de tableau de permanence
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    log: bool,

    /// Fichier JSON du calendrier (jours fériés + rattrapages)
    #[arg(long, global = true, default_value = "calendar.json")]
    calendar: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning sur une période
    Generate {
        /// CSV `name,weekdays`
        #[arg(long)]
        people: PathBuf,
        /// YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// YYYY-MM-DD (inclus)
        #[arg(long)]
        end: NaiveDate,
        #[arg(long, default_value = "schedule.csv")]
        out_schedule: PathBuf,
        #[arg(long, default_value = "stats.csv")]
        out_stats: PathBuf,
        #[arg(long)]
        out_json: Option<PathBuf>,
        /// Écrire le planning partiel si un jour n'a personne d'éligible
        #[arg(long)]
        write_partial: bool,
    },

    /// Gérer les jours fériés
    Holiday {
        #[command(subcommand)]
        action: DateAction,
    },

    /// Gérer les jours de rattrapage (week-ends travaillés)
    Makeup {
        #[command(subcommand)]
        action: DateAction,
    },

    /// Afficher le statut de chaque date d'une période
    Preview {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
}

#[derive(Subcommand, Debug)]
enum DateAction {
    Add { date: NaiveDate },
    Remove { date: NaiveDate },
    List,
    /// Importer un fichier texte (une date par ligne)
    Import { file: PathBuf },
}

#[derive(Debug, Clone, Copy)]
enum DateSet {
    Holidays,
    MakeUp,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.calendar);
    let mut calendar = storage.load_or_builtin()?;

    let code = match cli.cmd {
        Commands::Generate {
            people,
            start,
            end,
            out_schedule,
            out_stats,
            out_json,
            write_partial,
        } => {
            let roster = io::import_people_csv(&people)?;
            let write = |schedule: &Schedule| -> Result<()> {
                io::export_schedule_csv(&out_schedule, schedule)?;
                io::export_stats_csv(&out_stats, &schedule.stats)?;
                if let Some(path) = &out_json {
                    io::export_schedule_json(path, schedule)?;
                }
                Ok(())
            };
            match generate_schedule(&roster, &calendar, start, end) {
                Ok(schedule) => {
                    print_schedule(&schedule);
                    write(&schedule)?;
                    0
                }
                Err(SchedError::NoEligiblePerson { date, partial }) => {
                    eprintln!("No eligible person for {}", date_key(date));
                    if write_partial {
                        write(&partial)?;
                        eprintln!("Partial schedule written ({} day(s))", partial.records.len());
                    }
                    // Code 2 = planning incomplet
                    2
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Holiday { action } => {
            apply(&storage, &mut calendar, DateSet::Holidays, action)?;
            0
        }
        Commands::Makeup { action } => {
            apply(&storage, &mut calendar, DateSet::MakeUp, action)?;
            0
        }
        Commands::Preview { start, end } => {
            if start > end {
                bail!(SchedError::InvalidRange { start, end });
            }
            for date in days_inclusive(start, end) {
                let status = match calendar.classify(date) {
                    DayKind::Excluded => "excluded",
                    DayKind::ScheduledNormal => "working",
                    DayKind::ScheduledMakeUp => "make-up",
                };
                println!("{} | {} | {}", date_key(date), date.format("%a"), status);
            }
            0
        }
    };

    std::process::exit(code);
}

fn apply(
    storage: &JsonStorage,
    calendar: &mut Calendar,
    set: DateSet,
    action: DateAction,
) -> Result<()> {
    match action {
        DateAction::Add { date } => {
            let added = match set {
                DateSet::Holidays => calendar.add_holiday(date),
                DateSet::MakeUp => calendar.add_make_up_day(date),
            };
            if !added {
                println!("{} already present", date_key(date));
            }
            storage.save(calendar)?;
        }
        DateAction::Remove { date } => {
            let removed = match set {
                DateSet::Holidays => calendar.remove_holiday(date),
                DateSet::MakeUp => calendar.remove_make_up_day(date),
            };
            if !removed {
                bail!("{} is not in the list", date_key(date));
            }
            storage.save(calendar)?;
        }
        DateAction::List => {
            let dates = match set {
                DateSet::Holidays => &calendar.holidays,
                DateSet::MakeUp => &calendar.make_up_days,
            };
            print!("{}", io::format_dates(dates));
        }
        DateAction::Import { file } => {
            let dates = io::import_dates(file)?;
            let target = match set {
                DateSet::Holidays => &mut calendar.holidays,
                DateSet::MakeUp => &mut calendar.make_up_days,
            };
            let before = target.len();
            target.extend(dates);
            println!("{} date(s) added", target.len() - before);
            storage.save(calendar)?;
        }
    }
    Ok(())
}

fn print_schedule(schedule: &Schedule) {
    for rec in &schedule.records {
        println!("{} | {} | {}", rec.date_key(), rec.label, rec.person);
    }
    println!();
    for load in schedule.stats.loads() {
        println!("{}: {} day(s)", load.name, load.count);
    }
}
