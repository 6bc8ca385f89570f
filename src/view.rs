//! Regroupement du planning par jour puis par poste, pour l'affichage et l'export.

use crate::model::{weekday_name, ScheduleEntry, ShiftType, WorkerId};
use std::collections::BTreeMap;

/// Cellule vide
pub const EMPTY_CELL: &str = "-";

/// Une ligne du tableau : les noms par poste pour une date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub date: chrono::NaiveDate,
    pub day: &'static str,
    pub morning: Vec<String>,
    pub evening: Vec<String>,
    pub night: Vec<String>,
    pub leave: Vec<String>,
}

impl DayRow {
    fn new(date: chrono::NaiveDate) -> Self {
        Self {
            date,
            day: weekday_name(date),
            morning: Vec::new(),
            evening: Vec::new(),
            night: Vec::new(),
            leave: Vec::new(),
        }
    }

    pub fn names(&self, shift: ShiftType) -> &[String] {
        match shift {
            ShiftType::Morning => &self.morning,
            ShiftType::Evening => &self.evening,
            ShiftType::Night => &self.night,
            ShiftType::Leave => &self.leave,
        }
    }

    fn names_mut(&mut self, shift: ShiftType) -> &mut Vec<String> {
        match shift {
            ShiftType::Morning => &mut self.morning,
            ShiftType::Evening => &mut self.evening,
            ShiftType::Night => &mut self.night,
            ShiftType::Leave => &mut self.leave,
        }
    }

    /// Noms joints par `separator`, ou `-`.
    pub fn cell(&self, shift: ShiftType, separator: &str) -> String {
        let names = self.names(shift);
        if names.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            names.join(separator)
        }
    }
}

/// Compteurs par membre
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub name: String,
    pub morning: usize,
    pub evening: usize,
    pub night: usize,
    pub leave: usize,
}

impl WorkerStats {
    pub fn worked(&self) -> usize {
        self.morning + self.evening + self.night
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleTable {
    rows: Vec<DayRow>,
    stats: Vec<(WorkerId, WorkerStats)>,
    entries: usize,
}

impl ScheduleTable {
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let mut by_date: BTreeMap<chrono::NaiveDate, DayRow> = BTreeMap::new();
        let mut stats: Vec<(WorkerId, WorkerStats)> = Vec::new();

        for entry in entries {
            by_date
                .entry(entry.date)
                .or_insert_with(|| DayRow::new(entry.date))
                .names_mut(entry.shift)
                .push(entry.worker_name.clone());

            let pos = match stats.iter().position(|(id, _)| id == &entry.worker_id) {
                Some(pos) => pos,
                None => {
                    let fresh = WorkerStats {
                        name: entry.worker_name.clone(),
                        ..WorkerStats::default()
                    };
                    stats.push((entry.worker_id.clone(), fresh));
                    stats.len() - 1
                }
            };
            let counters = &mut stats[pos].1;
            match entry.shift {
                ShiftType::Morning => counters.morning += 1,
                ShiftType::Evening => counters.evening += 1,
                ShiftType::Night => counters.night += 1,
                ShiftType::Leave => counters.leave += 1,
            }
        }

        Self {
            rows: by_date.into_values().collect(),
            stats,
            entries: entries.len(),
        }
    }

    /// Aucun planning
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[DayRow] {
        &self.rows
    }

    /// Lignes datées dans `[start, end]` ; les congés hors période sont écartés.
    pub fn rows_within(
        &self,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> impl Iterator<Item = &DayRow> {
        self.rows
            .iter()
            .filter(move |r| r.date >= start && r.date <= end)
    }

    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// Statistiques par membre, dans l'ordre de première apparition.
    pub fn counts(&self) -> impl Iterator<Item = &WorkerStats> {
        self.stats.iter().map(|(_, s)| s)
    }

    pub fn stats_for(&self, id: &WorkerId) -> Option<&WorkerStats> {
        self.stats.iter().find(|(wid, _)| wid == id).map(|(_, s)| s)
    }
}
