use chrono::Weekday;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Les sept jours, dans l'ordre du calendrier (lundi d'abord).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Table fixe jour -> libellé d'affichage.
pub const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "一",
        Weekday::Tue => "二",
        Weekday::Wed => "三",
        Weekday::Thu => "四",
        Weekday::Fri => "五",
        Weekday::Sat => "六",
        Weekday::Sun => "日",
    }
}

pub const fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Erreurs de construction du roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("invalid availability token: {0:?}")]
    InvalidAvailability(String),
    #[error("person name cannot be empty")]
    EmptyName,
    #[error("person {0} has no available weekday")]
    EmptyAvailability(String),
    #[error("duplicate person in roster: {0}")]
    DuplicatePerson(String),
}

/// Lit un jour : caractère chinois (`一`..`日`, `天`), nom anglais complet
/// ou abréviation à trois lettres, sans tenir compte de la casse.
pub fn parse_weekday(token: &str) -> Result<Weekday, RosterError> {
    let raw = token.trim();
    let day = match raw {
        "一" => Some(Weekday::Mon),
        "二" => Some(Weekday::Tue),
        "三" => Some(Weekday::Wed),
        "四" => Some(Weekday::Thu),
        "五" => Some(Weekday::Fri),
        "六" => Some(Weekday::Sat),
        "日" | "天" => Some(Weekday::Sun),
        _ => match raw.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Some(Weekday::Mon),
            "tuesday" | "tue" => Some(Weekday::Tue),
            "wednesday" | "wed" => Some(Weekday::Wed),
            "thursday" | "thu" => Some(Weekday::Thu),
            "friday" | "fri" => Some(Weekday::Fri),
            "saturday" | "sat" => Some(Weekday::Sat),
            "sunday" | "sun" => Some(Weekday::Sun),
            _ => None,
        },
    };
    day.ok_or_else(|| RosterError::InvalidAvailability(raw.to_string()))
}

/// Ensemble de jours de la semaine (masque 7 bits, bit 0 = lundi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Weekday>", into = "Vec<Weekday>")
)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(0b111_1111)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_monday();
    }

    pub fn contains(self, day: Weekday) -> bool {
        (self.0 >> day.num_days_from_monday()) & 0b1 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        ALL_WEEKDAYS.into_iter().filter(move |d| self.contains(*d))
    }

    /// Parse une liste `一、三、五`, `mon;wed` ou `Monday Friday`.
    /// Les doublons sont tolérés.
    pub fn parse_list(raw: &str) -> Result<Self, RosterError> {
        raw.split(|c: char| matches!(c, '、' | ';' | '；' | '|' | ',' | '，') || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(parse_weekday)
            .collect()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl From<Vec<Weekday>> for WeekdaySet {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}

/// Personne de permanence : nom unique + jours où elle peut être de service.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "PersonRecord", into = "PersonRecord")
)]
pub struct Person {
    pub name: String,
    pub availability: WeekdaySet,
}

/// Forme sérialisée d'une personne ; relue via `Person::new`.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PersonRecord {
    name: String,
    availability: Vec<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<PersonRecord> for Person {
    type Error = RosterError;

    fn try_from(raw: PersonRecord) -> Result<Self, Self::Error> {
        let availability = raw
            .availability
            .iter()
            .map(|tok| parse_weekday(tok))
            .collect::<Result<WeekdaySet, _>>()?;
        Self::new(raw.name, availability)
    }
}

#[cfg(feature = "serde")]
impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        Self {
            name: person.name,
            availability: person.availability.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl Person {
    pub fn new<N: AsRef<str>>(name: N, availability: WeekdaySet) -> Result<Self, RosterError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if availability.is_empty() {
            return Err(RosterError::EmptyAvailability(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            availability,
        })
    }

    /// Construit une personne à partir de la colonne texte des jours.
    pub fn parse<N: AsRef<str>>(name: N, days: &str) -> Result<Self, RosterError> {
        Self::new(name, WeekdaySet::parse_list(days)?)
    }

    pub fn is_available(&self, day: Weekday) -> bool {
        self.availability.contains(day)
    }
}

/// Roster ordonné ; l'ordre d'insertion sert de départage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Person>", into = "Vec<Person>")
)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people<I: IntoIterator<Item = Person>>(people: I) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for person in people {
            roster.push(person)?;
        }
        Ok(roster)
    }

    pub fn push(&mut self, person: Person) -> Result<(), RosterError> {
        if self.find_person_by_name(&person.name).is_some() {
            return Err(RosterError::DuplicatePerson(person.name));
        }
        self.people.push(person);
        Ok(())
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn find_person_by_name<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.name == name)
    }
}

impl TryFrom<Vec<Person>> for Roster {
    type Error = RosterError;

    fn try_from(people: Vec<Person>) -> Result<Self, Self::Error> {
        Self::from_people(people)
    }
}

impl From<Roster> for Vec<Person> {
    fn from(roster: Roster) -> Self {
        roster.people
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chinese_and_english_tokens() {
        let set = WeekdaySet::parse_list("一、三；fri").unwrap();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn unknown_token_is_invalid_availability() {
        let err = Person::parse("Alice", "Monday;Funday").unwrap_err();
        assert_eq!(err, RosterError::InvalidAvailability("Funday".into()));
    }

    #[test]
    fn person_requires_name_and_days() {
        assert_eq!(
            Person::new("  ", WeekdaySet::all()).unwrap_err(),
            RosterError::EmptyName
        );
        assert_eq!(
            Person::parse("Bob", " ").unwrap_err(),
            RosterError::EmptyAvailability("Bob".into())
        );
    }

    #[test]
    fn roster_rejects_duplicates_and_keeps_order() {
        let alice = Person::parse("Alice", "mon").unwrap();
        let bob = Person::parse("Bob", "tue").unwrap();
        let mut roster = Roster::from_people([alice.clone(), bob]).unwrap();
        assert_eq!(roster.people()[0].name, "Alice");
        assert_eq!(
            roster.push(alice).unwrap_err(),
            RosterError::DuplicatePerson("Alice".into())
        );
        assert_eq!(roster.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_roster_goes_through_validation() {
        let err = serde_json::from_str::<Roster>(r#"[{"name":"","availability":[]}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("person name cannot be empty"));

        let err = serde_json::from_str::<Roster>(r#"[{"name":"Bob","availability":[]}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("person Bob has no available weekday"));

        let err = serde_json::from_str::<Roster>(r#"[{"name":"Bob","availability":["Funday"]}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid availability token"));

        let roster = serde_json::from_str::<Roster>(
            r#"[{"name":"Alice","availability":["一","Wed"]},{"name":"Bob","availability":["fri"]}]"#,
        )
        .unwrap();
        assert_eq!(roster.people()[0], Person::parse("Alice", "mon、wed").unwrap());

        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(serde_json::from_str::<Roster>(&json).unwrap(), roster);
    }

    #[test]
    fn labels_are_fixed() {
        let labels: String = ALL_WEEKDAYS.iter().map(|d| weekday_label(*d)).collect();
        assert_eq!(labels, "一二三四五六日");
        assert!(is_weekend(Weekday::Sun));
        assert!(!is_weekend(Weekday::Fri));
    }
}
