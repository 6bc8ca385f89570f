use super::{leave, types::LastShiftMap, util};
use crate::model::{LastShiftRecord, ScheduleEntry, ShiftType, Worker};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Membres disponibles : exclut ceux sortis de nuit la veille.
pub(super) fn available_workers<'a>(
    workers: &'a [Worker],
    date: NaiveDate,
    history: &LastShiftMap,
) -> Vec<&'a Worker> {
    let yesterday = util::days_before(date, 1);
    workers
        .iter()
        .filter(|w| match history.get(&w.id) {
            Some(last) => !(last.shift == ShiftType::Night && Some(last.date) == yesterday),
            None => true,
        })
        .collect()
}

/// Construit le lot d'un jour : postes réels puis congés dérivés.
pub(super) fn assign_day<R: Rng + ?Sized>(
    workers: &[Worker],
    date: NaiveDate,
    history: &mut LastShiftMap,
    rng: &mut R,
) -> Vec<ScheduleEntry> {
    let mut available = available_workers(workers, date, history);
    if available.is_empty() {
        #[cfg(feature = "logging")]
        tracing::warn!(%date, "no worker available, day left empty");
        return Vec::new();
    }

    let sunday = util::is_sunday(date);
    let mut entries = Vec::with_capacity(available.len() + 2);

    if sunday {
        available.shuffle(rng);
        // au-delà du troisième : rien ce dimanche
        for (worker, shift) in available.iter().zip(ShiftType::REAL) {
            assign(&mut entries, history, worker, date, shift);
        }
    } else if available.len() < 2 {
        for worker in &available {
            assign(&mut entries, history, worker, date, ShiftType::Morning);
        }
        return entries;
    } else {
        available.shuffle(rng);
        assign(&mut entries, history, available[0], date, ShiftType::Evening);
        assign(&mut entries, history, available[1], date, ShiftType::Night);
        for worker in &available[2..] {
            assign(&mut entries, history, worker, date, ShiftType::Morning);
        }
    }

    leave::apply_leave_rules(&mut entries, date);
    entries
}

fn assign(
    entries: &mut Vec<ScheduleEntry>,
    history: &mut LastShiftMap,
    worker: &Worker,
    date: NaiveDate,
    shift: ShiftType,
) {
    entries.push(ScheduleEntry::new(worker, date, shift));
    history.insert(worker.id.clone(), LastShiftRecord { date, shift });
}
