mod assignment;
mod leave;
mod types;
mod util;

pub use types::{GenerateOptions, DEFAULT_DAYS};

use crate::model::{ScheduleEntry, Worker};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use types::LastShiftMap;

/// Générateur de roulement : sans état, l'historique vit le temps d'un appel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleGenerator {
    opts: GenerateOptions,
}

impl ScheduleGenerator {
    pub fn new(opts: GenerateOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> GenerateOptions {
        self.opts
    }

    /// Génère `days` jours à partir de `start` (graine fixe si configurée).
    pub fn generate(&self, workers: &[Worker], start: NaiveDate) -> Vec<ScheduleEntry> {
        let seed = self.opts.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with_rng(workers, start, &mut rng)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        workers: &[Worker],
        start: NaiveDate,
        rng: &mut R,
    ) -> Vec<ScheduleEntry> {
        let mut history = LastShiftMap::new();
        let mut schedule = Vec::new();

        for offset in 0..u64::from(self.opts.days) {
            let Some(date) = util::days_after(start, offset) else {
                #[cfg(feature = "logging")]
                tracing::warn!(%start, offset, "calendar overflow, generation stopped");
                break;
            };
            let day = assignment::assign_day(workers, date, &mut history, rng);
            #[cfg(feature = "logging")]
            tracing::debug!(%date, entries = day.len(), "day generated");
            schedule.extend(day);
        }

        schedule
    }
}

/// Planning de 30 jours avec un tirage aléatoire frais.
pub fn generate(workers: &[Worker], start: NaiveDate) -> Vec<ScheduleEntry> {
    ScheduleGenerator::default().generate(workers, start)
}

/// Comme [`generate`], avec une source d'aléa injectée.
pub fn generate_with_rng<R: Rng + ?Sized>(
    workers: &[Worker],
    start: NaiveDate,
    rng: &mut R,
) -> Vec<ScheduleEntry> {
    ScheduleGenerator::default().generate_with_rng(workers, start, rng)
}
