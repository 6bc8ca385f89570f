use crate::document::{Document, DocumentRenderer, HEADERS};
use crate::model::ScheduleEntry;
use crate::roster::Roster;
use crate::view::ScheduleTable;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Nom de fichier par défaut : `shift-schedule-<YYYY-MM-DD>.<ext>`
pub fn default_file_name(start: NaiveDate, ext: &str) -> PathBuf {
    PathBuf::from(format!("shift-schedule-{}.{ext}", start.format("%Y-%m-%d")))
}

/// Import de membres depuis CSV: header `name`
pub fn import_workers_csv<P: AsRef<Path>>(path: P, roster: &mut Roster) -> anyhow::Result<usize> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut added = 0usize;
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?;
        if name.trim().is_empty() {
            bail!("invalid worker row {} (empty name)", line + 2);
        }
        roster
            .add_worker(name)
            .with_context(|| format!("row {}", line + 2))?;
        added += 1;
    }
    Ok(added)
}

/// Export CSV du tableau: header `Date,Morning Shift,Evening Shift,Night Shift,On Leave`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    table: &ScheduleTable,
    separator: &str,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(HEADERS)?;
    for row in table.rows() {
        let date = row.date.format("%Y-%m-%d").to_string();
        let [_, morning, evening, night, leave] = crate::document::row_cells(row, separator);
        w.write_record([date, morning, evening, night, leave])?;
    }
    let data = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv: {}", e.error()))?;
    write_atomic(path, &data)
}

/// Export JSON des lignes brutes (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    entries: &[ScheduleEntry],
) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(entries)?;
    write_atomic(path, &json)
}

pub fn export_document<P: AsRef<Path>>(
    path: P,
    document: &Document,
    renderer: &dyn DocumentRenderer,
) -> anyhow::Result<()> {
    write_atomic(path, renderer.render(document).as_bytes())
}

/// Écriture atomique : fichier temporaire voisin puis renommage.
fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}
