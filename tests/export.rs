#![forbid(unsafe_code)]
use chrono::NaiveDate;
use roulement::{
    io, Document, DocumentRenderer, Roster, ScheduleEntry, ScheduleTable, ShiftType, TextRenderer,
    Worker,
};
use std::fs;
use tempfile::tempdir;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
}

fn two_days() -> Vec<ScheduleEntry> {
    let (alice, bob) = (Worker::new("Alice"), Worker::new("Bob"));
    let night = ScheduleEntry::new(&bob, date(1), ShiftType::Night);
    vec![
        ScheduleEntry::new(&alice, date(1), ShiftType::Evening),
        night.clone(),
        ScheduleEntry::leave_from(&night, date(2)),
        ScheduleEntry::new(&alice, date(2), ShiftType::Morning),
    ]
}

#[test]
fn text_document_layout() {
    let table = ScheduleTable::from_entries(&two_days());
    let doc = Document::new(&table, date(1), date(2), date(14), 20, ", ");
    let rendered = TextRenderer.render(&doc);

    insta::assert_snapshot!(rendered, @r"
Monthly Work Shift Schedule
October 1, 2025 - October 2, 2025

Date             | Morning Shift | Evening Shift | Night Shift | On Leave
-----------------+---------------+---------------+-------------+---------
Wednesday, Oct 1 | -             | Alice         | Bob         | -
Thursday, Oct 2  | Alice         | -             | -           | Bob

Generated on 10/14/2025 - Page 1 of 1
");
}

#[test]
fn document_paginates_with_footer_on_each_page() {
    let table = ScheduleTable::from_entries(&two_days());
    let doc = Document::new(&table, date(1), date(2), date(14), 1, ", ");
    assert_eq!(doc.page_count(), 2);

    let rendered = TextRenderer.render(&doc);
    assert_eq!(rendered.matches('\u{c}').count(), 1);
    assert!(rendered.contains("Page 1 of 2"));
    assert!(rendered.contains("Page 2 of 2"));
    assert_eq!(rendered.matches("Monthly Work Shift Schedule").count(), 2);
}

#[test]
fn csv_export_has_five_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    let table = ScheduleTable::from_entries(&two_days());
    io::export_schedule_csv(&path, &table, ", ").unwrap();

    let data = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = data.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,Morning Shift,Evening Shift,Night Shift,On Leave",
            "2025-10-01,-,Alice,Bob,-",
            "2025-10-02,Alice,-,-,Bob",
        ]
    );
}

#[test]
fn csv_export_quotes_joined_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    let (a, b) = (Worker::new("Alice"), Worker::new("Bob"));
    let entries = vec![
        ScheduleEntry::new(&a, date(1), ShiftType::Morning),
        ScheduleEntry::new(&b, date(1), ShiftType::Morning),
    ];
    io::export_schedule_csv(&path, &ScheduleTable::from_entries(&entries), ", ").unwrap();

    let data = fs::read_to_string(&path).unwrap();
    assert!(data.contains("2025-10-01,\"Alice, Bob\",-,-,-"));
}

#[test]
fn json_export_reads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    let entries = two_days();
    io::export_schedule_json(&path, &entries).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"shift\": \"leave\""));
    assert!(raw.contains("\"date\": \"2025-10-02\""));
    let back: Vec<ScheduleEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, entries);
}

#[test]
fn import_workers_goes_through_registry() {
    let dir = tempdir().unwrap();
    let ok = dir.path().join("team.csv");
    fs::write(&ok, "name\nAlice\nBob\n").unwrap();
    let mut roster = Roster::new();
    assert_eq!(io::import_workers_csv(&ok, &mut roster).unwrap(), 2);

    let dup = dir.path().join("dup.csv");
    fs::write(&dup, "name\nCarol\nbob\n").unwrap();
    let err = io::import_workers_csv(&dup, &mut roster).unwrap_err();
    assert!(format!("{err:#}").contains("already exists"));
}

#[test]
fn default_file_name_uses_start_date() {
    assert_eq!(
        io::default_file_name(date(1), "csv").to_str(),
        Some("shift-schedule-2025-10-01.csv")
    );
}
