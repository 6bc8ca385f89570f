use crate::model::{LastShiftRecord, WorkerId};
use std::collections::HashMap;

/// Nombre de jours générés par défaut.
pub const DEFAULT_DAYS: u32 = 30;

/// Options de génération
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub days: u32,
    /// Graine fixe : même graine, même planning.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            seed: None,
        }
    }
}

/// Historique par membre, créé et jeté à chaque génération.
pub(crate) type LastShiftMap = HashMap<WorkerId, LastShiftRecord>;
