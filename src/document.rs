use crate::model::ShiftType;
use crate::view::{DayRow, ScheduleTable};
use chrono::NaiveDate;

pub const TITLE: &str = "Monthly Work Shift Schedule";
pub const HEADERS: [&str; 5] = ["Date", "Morning Shift", "Evening Shift", "Night Shift", "On Leave"];

/// Document paginé prêt à rendre (titre, période, tableau 5 colonnes, pied de page).
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub period: String,
    pub pages: Vec<Vec<[String; 5]>>,
    pub generated_on: NaiveDate,
}

impl Document {
    pub fn new(
        table: &ScheduleTable,
        start: NaiveDate,
        end: NaiveDate,
        generated_on: NaiveDate,
        rows_per_page: usize,
        separator: &str,
    ) -> Self {
        let rows: Vec<[String; 5]> = table.rows().iter().map(|r| row_cells(r, separator)).collect();
        let pages = if rows.is_empty() {
            vec![Vec::new()]
        } else {
            rows.chunks(rows_per_page.max(1)).map(<[_]>::to_vec).collect()
        };
        Self {
            title: TITLE.to_string(),
            period: format!("{} - {}", long_date(start), long_date(end)),
            pages,
            generated_on,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn footer(&self, page: usize) -> String {
        format!(
            "Generated on {} - Page {} of {}",
            self.generated_on.format("%-m/%-d/%Y"),
            page,
            self.page_count()
        )
    }
}

/// Cellules d'une ligne : date puis matin, soir, nuit, congé.
pub fn row_cells(row: &DayRow, separator: &str) -> [String; 5] {
    [
        row.date.format("%A, %b %-d").to_string(),
        row.cell(ShiftType::Morning, separator),
        row.cell(ShiftType::Evening, separator),
        row.cell(ShiftType::Night, separator),
        row.cell(ShiftType::Leave, separator),
    ]
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Permet de customiser le rendu du document (texte, markdown, etc.).
pub trait DocumentRenderer {
    fn render(&self, document: &Document) -> String;
}

/// Rendu texte à colonnes fixes ; pages séparées par un saut de page.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl DocumentRenderer for TextRenderer {
    fn render(&self, document: &Document) -> String {
        let mut widths = HEADERS.map(str::len);
        for row in document.pages.iter().flatten() {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for (idx, page) in document.pages.iter().enumerate() {
            if idx > 0 {
                out.push('\u{c}');
                out.push('\n');
            }
            out.push_str(&document.title);
            out.push('\n');
            out.push_str(&document.period);
            out.push_str("\n\n");
            push_line(&mut out, &HEADERS.map(str::to_string), &widths);
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(rule.join("-+-").as_str());
            out.push('\n');
            for row in page {
                push_line(&mut out, row, &widths);
            }
            out.push('\n');
            out.push_str(&document.footer(idx + 1));
            out.push('\n');
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, w)| format!("{cell:<w$}", w = *w))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_still_has_one_page() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let doc = Document::new(&ScheduleTable::default(), d, d, d, 10, ", ");
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.period, "October 1, 2025 - October 1, 2025");
        assert_eq!(doc.footer(1), "Generated on 10/1/2025 - Page 1 of 1");
    }
}
