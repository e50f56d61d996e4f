use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Identifiant fort pour Worker (entier stable fourni par l'appelant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(u32);

impl WorkerId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Travailleur avec bornes d'heures *mensuelles* optionnelles.
///
/// La sentinelle `-1` dans les constructeurs signifie « sans contrainte »
/// (représentée ici par `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    #[serde(default)]
    pub min_hours: Option<u32>,
    #[serde(default)]
    pub max_hours: Option<u32>,
}

impl Worker {
    /// Crée un travailleur en validant `min_hours <= max_hours` lorsque les
    /// deux bornes sont contraintes. `-1` = sans contrainte.
    pub fn new<N: Into<String>>(
        id: WorkerId,
        name: N,
        min_hours: i32,
        max_hours: i32,
    ) -> Result<Self, String> {
        let min = parse_hour_bound(min_hours)?;
        let max = parse_hour_bound(max_hours)?;
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err("min_hours is greater than max_hours".to_string());
            }
        }
        Ok(Self {
            id,
            name: name.into(),
            min_hours: min,
            max_hours: max,
        })
    }

    /// Travailleur sans aucune borne d'heures.
    pub fn unconstrained<N: Into<String>>(id: WorkerId, name: N) -> Self {
        Self {
            id,
            name: name.into(),
            min_hours: None,
            max_hours: None,
        }
    }
}

fn parse_hour_bound(raw: i32) -> Result<Option<u32>, String> {
    match raw {
        -1 => Ok(None),
        v if v >= 0 => Ok(Some(v as u32)),
        v => Err(format!("invalid hour bound: {v}")),
    }
}

/// Créneau journalier (heure de début/fin, franchissement de minuit permis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    /// Crée un créneau depuis des heures `HH:MM` (format 24 h).
    pub fn new<N: Into<String>>(name: N, start: &str, end: &str) -> Result<Self, String> {
        let start = NaiveTime::parse_from_str(start, "%H:%M")
            .map_err(|_| format!("invalid time (expected HH:MM): {start}"))?;
        let end = NaiveTime::parse_from_str(end, "%H:%M")
            .map_err(|_| format!("invalid time (expected HH:MM): {end}"))?;
        Ok(Self::from_times(name, start, end))
    }

    pub fn from_times<N: Into<String>>(name: N, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Durée en minutes, modulo 24 h (un créneau 23:00 → 07:00 dure 480 min).
    pub fn duration_minutes(&self) -> u32 {
        let start = self.start.num_seconds_from_midnight() / 60;
        let mut end = self.end.num_seconds_from_midnight() / 60;
        if end < start {
            end += 24 * 60;
        }
        end - start
    }

    /// Créneau de nuit : nom « N »/« night » (insensible à la casse),
    /// ou début à 22:00 et après, ou début avant 06:00.
    pub fn is_night(&self) -> bool {
        let minute = self.start.num_seconds_from_midnight() / 60;
        self.name.eq_ignore_ascii_case("n")
            || self.name.eq_ignore_ascii_case("night")
            || minute >= 22 * 60
            || minute < 6 * 60
    }

    /// Créneau de pointe (soirée) : nom « E »/« evening ».
    pub fn is_evening(&self) -> bool {
        self.name.eq_ignore_ascii_case("e") || self.name.eq_ignore_ascii_case("evening")
    }
}

/// Période de congés pour un ensemble de travailleurs
/// (intervalle de dates inclusif des deux côtés).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub worker_ids: Vec<WorkerId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Holiday {
    /// Crée un congé depuis des dates `YYYY-MM-DD`, en validant
    /// `start_date <= end_date`.
    pub fn new<N: Into<String>>(
        name: N,
        worker_ids: Vec<WorkerId>,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, String> {
        let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|_| format!("invalid date (expected YYYY-MM-DD): {start_date}"))?;
        let end = NaiveDate::parse_from_str(end_date, "%Y-%m-%d")
            .map_err(|_| format!("invalid date (expected YYYY-MM-DD): {end_date}"))?;
        Self::from_dates(name, worker_ids, start, end)
    }

    pub fn from_dates<N: Into<String>>(
        name: N,
        worker_ids: Vec<WorkerId>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, String> {
        if start_date > end_date {
            return Err("holiday start date must be before or equal to end date".to_string());
        }
        Ok(Self {
            name: name.into(),
            worker_ids,
            start_date,
            end_date,
        })
    }

    /// Le travailleur est-il en congé à cette date ?
    pub fn covers(&self, worker: WorkerId, date: NaiveDate) -> bool {
        self.worker_ids.contains(&worker) && date >= self.start_date && date <= self.end_date
    }
}

/// Horizon de planification : nombre de jours et ancre calendaire
/// (le jour d'indice 0 est le premier jour du mois ancré).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub num_days: usize,
    anchor: NaiveDate,
}

impl Horizon {
    pub fn new(num_days: usize, year: i32, month: u32) -> Result<Self, String> {
        let anchor = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| format!("invalid calendar anchor: {year}-{month:02}"))?;
        Ok(Self { num_days, anchor })
    }

    /// Date calendaire du jour d'indice `day` (0-based).
    pub fn date(&self, day: usize) -> NaiveDate {
        self.anchor + chrono::Duration::days(day as i64)
    }

    /// Jour de la semaine du jour d'indice `day`.
    pub fn weekday(&self, day: usize) -> Weekday {
        self.date(day).weekday()
    }

    /// Borne basse d'heures mensuelles suggérée :
    /// 7 h × (jours du mois − jours de week-end).
    pub fn suggested_min_hours(&self, weekend: &[Weekday]) -> u32 {
        7 * self.working_days_in_month(weekend)
    }

    /// Borne haute d'heures mensuelles suggérée :
    /// 8 h × (jours du mois − jours de week-end).
    pub fn suggested_max_hours(&self, weekend: &[Weekday]) -> u32 {
        8 * self.working_days_in_month(weekend)
    }

    fn working_days_in_month(&self, weekend: &[Weekday]) -> u32 {
        let mut count = 0;
        let mut date = self.anchor;
        while date.month() == self.anchor.month() {
            if !weekend.contains(&date.weekday()) {
                count += 1;
            }
            date += chrono::Duration::days(1);
        }
        count
    }
}
