use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifiant fort pour Worker
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Membre de l'équipe
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
}

impl Worker {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: WorkerId::random(),
            name: name.into(),
        }
    }

    pub fn with_id<N: Into<String>>(id: WorkerId, name: N) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Type de poste. `Leave` n'est pas un poste travaillé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShiftType {
    Morning,
    Evening,
    Night,
    Leave,
}

impl ShiftType {
    /// Postes réellement travaillés, dans l'ordre d'affichage.
    pub const REAL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Evening, ShiftType::Night];

    pub fn is_real(self) -> bool {
        !matches!(self, ShiftType::Leave)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftType::Morning => "morning",
            ShiftType::Evening => "evening",
            ShiftType::Night => "night",
            ShiftType::Leave => "leave",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(ShiftType::Morning),
            "evening" => Ok(ShiftType::Evening),
            "night" => Ok(ShiftType::Night),
            "leave" => Ok(ShiftType::Leave),
            other => Err(format!("unknown shift type: {other}")),
        }
    }
}

/// Ligne du planning. `worker_name` est figé au moment de la génération.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleEntry {
    pub worker_id: WorkerId,
    pub worker_name: String,
    pub date: NaiveDate,
    /// Nom anglais du jour de `date` ("Sunday", ...)
    pub day: String,
    pub shift: ShiftType,
}

impl ScheduleEntry {
    pub fn new(worker: &Worker, date: NaiveDate, shift: ShiftType) -> Self {
        Self {
            worker_id: worker.id.clone(),
            worker_name: worker.name.clone(),
            date,
            day: weekday_name(date).to_string(),
            shift,
        }
    }

    /// Congé dérivé d'une entrée existante, daté ailleurs.
    pub fn leave_from(entry: &ScheduleEntry, date: NaiveDate) -> Self {
        Self {
            worker_id: entry.worker_id.clone(),
            worker_name: entry.worker_name.clone(),
            date,
            day: weekday_name(date).to_string(),
            shift: ShiftType::Leave,
        }
    }
}

/// Dernier poste réel d'un membre (interne au générateur).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastShiftRecord {
    pub date: NaiveDate,
    pub shift: ShiftType,
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    use chrono::{Datelike, Weekday};
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_names_are_english() {
        let sunday = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
        assert_eq!(weekday_name(sunday), "Sunday");
        assert_eq!(weekday_name(sunday.succ_opt().unwrap()), "Monday");
    }

    #[test]
    fn shift_type_parses_its_display() {
        for shift in [ShiftType::Morning, ShiftType::Evening, ShiftType::Night, ShiftType::Leave] {
            assert_eq!(shift.to_string().parse::<ShiftType>().unwrap(), shift);
        }
        assert!("afternoon".parse::<ShiftType>().is_err());
        assert!(!ShiftType::Leave.is_real());
    }
}
