#![forbid(unsafe_code)]
//! Roulement — génération locale d'un planning d'équipes sur 30 jours.
//!
//! - Rotation matin / soir / nuit tirée au hasard chaque jour.
//! - Repos obligatoire le lendemain d'une nuit.
//! - Règles du dimanche et congés dérivés (veille, lendemain).
//! - Aucune persistance : chaque génération repart d'un historique vide.

pub mod document;
pub mod model;
pub mod roster;
pub mod scheduler;
pub mod view;

#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub mod io;

pub use document::{Document, DocumentRenderer, TextRenderer};
pub use model::{ScheduleEntry, ShiftType, Worker, WorkerId};
pub use roster::{Roster, RosterError};
pub use scheduler::{generate, generate_with_rng, GenerateOptions, ScheduleGenerator};
pub use view::{DayRow, ScheduleTable, WorkerStats};

#[cfg(feature = "serde")]
pub use config::{Config, ConfigError};
