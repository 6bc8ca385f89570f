use crate::model::{ScheduleEntry, Worker, WorkerId};
use crate::scheduler::ScheduleGenerator;
use chrono::{Days, NaiveDate};
use thiserror::Error;

/// Nombre minimal de membres pour lancer une génération.
pub const MIN_WORKERS: usize = 2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    #[error("worker name cannot be empty")]
    EmptyName,
    #[error("worker with this name already exists: {0}")]
    DuplicateName(String),
    #[error("unknown worker: {0}")]
    UnknownWorker(String),
    #[error("at least {needed} workers are required to generate a schedule (found {found})")]
    InsufficientWorkers { needed: usize, found: usize },
}

/// Session en mémoire : équipe + dernier planning généré.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    workers: Vec<Worker>,
    schedule: Vec<ScheduleEntry>,
    start: Option<NaiveDate>,
    days: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    /// Ajoute un membre ; nom non vide et unique (sans tenir compte de la casse).
    pub fn add_worker(&mut self, name: &str) -> Result<WorkerId, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.find_worker_by_name(name).is_some() {
            return Err(RosterError::DuplicateName(name.to_string()));
        }
        let worker = Worker::new(name);
        let id = worker.id.clone();
        self.workers.push(worker);
        Ok(id)
    }

    /// Retire un membre et purge ses lignes du planning courant.
    pub fn remove_worker(&mut self, id: &WorkerId) -> Result<Worker, RosterError> {
        let pos = self
            .workers
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| RosterError::UnknownWorker(id.as_str().to_string()))?;
        let removed = self.workers.remove(pos);
        self.schedule.retain(|e| &e.worker_id != id);
        Ok(removed)
    }

    pub fn find_worker_by_name<'a>(&'a self, name: &str) -> Option<&'a Worker> {
        let name = name.trim();
        self.workers
            .iter()
            .find(|w| w.name.to_lowercase() == name.to_lowercase())
    }

    pub fn find_worker_by_id<'a>(&'a self, id: &WorkerId) -> Option<&'a Worker> {
        self.workers.iter().find(|w| &w.id == id)
    }

    /// Changer la date de départ invalide le planning courant.
    pub fn set_start(&mut self, start: NaiveDate) {
        if self.start != Some(start) {
            self.schedule.clear();
        }
        self.start = Some(start);
    }

    /// Remplace le planning courant par une nouvelle génération.
    pub fn generate(
        &mut self,
        generator: &ScheduleGenerator,
        start: NaiveDate,
    ) -> Result<&[ScheduleEntry], RosterError> {
        if self.workers.len() < MIN_WORKERS {
            return Err(RosterError::InsufficientWorkers {
                needed: MIN_WORKERS,
                found: self.workers.len(),
            });
        }
        self.schedule = generator.generate(&self.workers, start);
        self.start = Some(start);
        self.days = generator.options().days;
        Ok(&self.schedule)
    }

    /// Période couverte `[start, start + days - 1]` du planning courant.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.schedule.is_empty() {
            return None;
        }
        let start = self.start?;
        let end = start.checked_add_days(Days::new(u64::from(self.days.saturating_sub(1))))?;
        Some((start, end))
    }
}
