use super::util;
use crate::model::{ScheduleEntry, ShiftType};
use chrono::NaiveDate;

/// Ajoute au lot du jour les congés dérivés de ses postes réels.
///
/// - nuit du samedi ou du dimanche : deux jours de congé (J+1, J+2) ;
/// - autre nuit : J+1 ;
/// - dimanche matin/soir : congé la veille (samedi).
///
/// Les congés ne comptent pas comme poste pour la disponibilité.
pub(super) fn apply_leave_rules(entries: &mut Vec<ScheduleEntry>, date: NaiveDate) {
    let sunday = util::is_sunday(date);
    let rest_days: u64 = if sunday || util::is_saturday(date) { 2 } else { 1 };

    let mut leaves = Vec::new();

    for entry in entries.iter().filter(|e| e.shift == ShiftType::Night) {
        for offset in 1..=rest_days {
            match util::days_after(date, offset) {
                Some(leave_date) => leaves.push(ScheduleEntry::leave_from(entry, leave_date)),
                None => {
                    #[cfg(feature = "logging")]
                    tracing::warn!(%date, offset, "leave date out of calendar range, skipped");
                }
            }
        }
    }

    if sunday {
        if let Some(saturday) = util::days_before(date, 1) {
            leaves.extend(
                entries
                    .iter()
                    .filter(|e| matches!(e.shift, ShiftType::Morning | ShiftType::Evening))
                    .map(|e| ScheduleEntry::leave_from(e, saturday)),
            );
        }
    }

    entries.extend(leaves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Worker;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leave_dates(entries: &[ScheduleEntry]) -> Vec<NaiveDate> {
        entries
            .iter()
            .filter(|e| e.shift == ShiftType::Leave)
            .map(|e| e.date)
            .collect()
    }

    #[test]
    fn weekday_night_gives_next_day() {
        let w = Worker::new("A");
        let wed = date(2025, 10, 8);
        let mut entries = vec![ScheduleEntry::new(&w, wed, ShiftType::Night)];
        apply_leave_rules(&mut entries, wed);
        assert_eq!(leave_dates(&entries), vec![date(2025, 10, 9)]);
        assert_eq!(entries[1].day, "Thursday");
    }

    #[test]
    fn saturday_night_gives_sunday_and_monday() {
        let w = Worker::new("A");
        let sat = date(2025, 10, 4);
        let mut entries = vec![ScheduleEntry::new(&w, sat, ShiftType::Night)];
        apply_leave_rules(&mut entries, sat);
        assert_eq!(leave_dates(&entries), vec![date(2025, 10, 5), date(2025, 10, 6)]);
    }

    #[test]
    fn sunday_day_shifts_get_previous_saturday() {
        let (a, b, c) = (Worker::new("A"), Worker::new("B"), Worker::new("C"));
        let sun = date(2025, 10, 5);
        let mut entries = vec![
            ScheduleEntry::new(&a, sun, ShiftType::Morning),
            ScheduleEntry::new(&b, sun, ShiftType::Evening),
            ScheduleEntry::new(&c, sun, ShiftType::Night),
        ];
        apply_leave_rules(&mut entries, sun);

        let leaves: Vec<_> = entries[3..]
            .iter()
            .map(|e| (e.worker_name.as_str(), e.date))
            .collect();
        assert_eq!(
            leaves,
            vec![
                ("C", date(2025, 10, 6)),
                ("C", date(2025, 10, 7)),
                ("A", date(2025, 10, 4)),
                ("B", date(2025, 10, 4)),
            ]
        );
    }

    #[test]
    fn weekday_morning_has_no_leave() {
        let w = Worker::new("A");
        let tue = date(2025, 10, 7);
        let mut entries = vec![ScheduleEntry::new(&w, tue, ShiftType::Morning)];
        apply_leave_rules(&mut entries, tue);
        assert_eq!(entries.len(), 1);
    }
}
