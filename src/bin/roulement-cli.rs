#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use roulement::{
    config::Config,
    document::{Document, TextRenderer},
    io,
    model::ShiftType,
    roster::Roster,
    scheduler::ScheduleGenerator,
    view::ScheduleTable,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

const RULES: &str = "\
Shift distribution
  - One worker per evening shift (except Sunday)
  - One worker per night shift (except Sunday)
  - Sunday: one worker each for morning, evening and night
  - Regular days: all others work the morning shift
Leave rules
  - Night shift workers get the next day off
  - Saturday night workers get Sunday + Monday off
  - Sunday night workers get Monday + Tuesday off
  - Sunday morning/evening workers get Saturday off
";

/// CLI de génération de roulement (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer un planning
    Generate {
        /// liste "Alice,Bob,..."
        #[arg(long, conflicts_with = "workers_csv")]
        workers: Option<String>,
        /// CSV avec un header `name`
        #[arg(long)]
        workers_csv: Option<String>,
        /// YYYY-MM-DD (défaut : 1er du mois courant)
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Fichier de configuration JSON
        #[arg(long)]
        config: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Document paginé (texte) ; "-" pour le nom par défaut
        #[arg(long)]
        out_doc: Option<String>,
    },

    /// Afficher les règles de planification
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    match cli.cmd {
        Commands::Rules => {
            print!("{RULES}");
        }
        Commands::Generate {
            workers,
            workers_csv,
            start,
            days,
            seed,
            config,
            out_json,
            out_csv,
            out_doc,
        } => {
            let mut cfg = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };
            if let Some(days) = days {
                cfg.days = days;
            }
            if seed.is_some() {
                cfg.seed = seed;
            }
            cfg.validate()?;

            let mut roster = Roster::new();
            if let Some(list) = workers {
                for name in list.split(',').filter(|s| !s.trim().is_empty()) {
                    roster.add_worker(name)?;
                }
            }
            if let Some(path) = workers_csv {
                io::import_workers_csv(&path, &mut roster)?;
            }
            if roster.workers().is_empty() {
                bail!("no workers given (use --workers or --workers-csv)");
            }

            let today = Local::now().date_naive();
            let start = match start {
                Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .with_context(|| format!("invalid start date: {raw}"))?,
                None => today.with_day(1).context("invalid first day of month")?,
            };

            let generator = ScheduleGenerator::new(cfg.generate_options());
            roster.generate(&generator, start)?;
            let table = ScheduleTable::from_entries(roster.schedule());
            let (from, to) = roster.period().unwrap_or((start, start));

            if table.is_empty() {
                println!("No schedule generated");
            }
            for row in table.rows_within(from, to) {
                println!(
                    "{} {:<9} | {} | {} | {} | leave: {}",
                    row.date,
                    row.day,
                    row.cell(ShiftType::Morning, &cfg.separator),
                    row.cell(ShiftType::Evening, &cfg.separator),
                    row.cell(ShiftType::Night, &cfg.separator),
                    row.cell(ShiftType::Leave, &cfg.separator),
                );
            }
            println!(
                "{} workers, {} entries",
                roster.workers().len(),
                table.entry_count()
            );

            if let Some(path) = out_json {
                io::export_schedule_json(path, roster.schedule())?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &table, &cfg.separator)?;
            }
            if let Some(path) = out_doc {
                let path = if path == "-" {
                    io::default_file_name(start, "txt")
                } else {
                    path.into()
                };
                let document = Document::new(
                    &table,
                    from,
                    to,
                    today,
                    cfg.rows_per_page,
                    &cfg.separator,
                );
                io::export_document(&path, &document, &TextRenderer)?;
                println!("Document written to {}", path.display());
            }
        }
    }

    Ok(())
}
