use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entrée d'un motif de rotation : un créneau nommé ou un repos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternStep {
    Work(String),
    Rest,
}

impl PatternStep {
    /// Parse une liste `"D,E,N,-,-"` (`-`, vide ou `rest` = repos).
    pub fn parse_list(raw: &str) -> Vec<PatternStep> {
        raw.split(',')
            .map(|chunk| {
                let chunk = chunk.trim();
                if chunk.is_empty() || chunk == "-" || chunk.eq_ignore_ascii_case("rest") {
                    PatternStep::Rest
                } else {
                    PatternStep::Work(chunk.to_string())
                }
            })
            .collect()
    }
}

/// Options de génération d'un planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Nombre maximal de travailleurs par créneau (>= 1).
    pub max_workers_per_slot: u32,
    /// Assertion de l'appelant : un seul travailleur par créneau.
    /// Incohérente avec `max_workers_per_slot > 1` (rejetée à la validation).
    pub single_worker_per_slot: bool,
    /// Autoriser plusieurs créneaux par travailleur et par jour.
    pub allow_multiple_slots_per_day: bool,
    /// Utiliser `rotation_pattern` (sans effet si le motif est vide).
    pub use_rotation: bool,
    /// Motif cyclique, p. ex. `[D, E, N, repos, repos]`.
    pub rotation_pattern: Vec<PatternStep>,
    /// Interdire deux nuits consécutives. Implicitement désactivé quand un
    /// motif de rotation est actif (l'adjacence y est encodée).
    pub avoid_back_to_back_nights: bool,
    /// Plafond de jours travaillés par fenêtre hebdomadaire.
    pub max_slots_per_week: u32,
    /// Passe de rééquilibrage aléatoire après la couverture (équité seule).
    pub rebalance: bool,
    /// Graine du générateur aléatoire, pour des plannings reproductibles.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_workers_per_slot: 1,
            single_worker_per_slot: false,
            allow_multiple_slots_per_day: false,
            use_rotation: false,
            rotation_pattern: Vec::new(),
            avoid_back_to_back_nights: true,
            max_slots_per_week: 7,
            rebalance: false,
            seed: None,
        }
    }
}

impl PlanConfig {
    /// La rotation n'a de sens qu'avec un motif non vide.
    pub fn rotation_active(&self) -> bool {
        self.use_rotation && !self.rotation_pattern.is_empty()
    }

    /// La garde anti-nuits consécutives est neutralisée sous rotation.
    pub fn night_guard_active(&self) -> bool {
        !self.rotation_active() && self.avoid_back_to_back_nights
    }

    pub(crate) fn validate(&self) -> Result<(), PlanError> {
        if self.max_workers_per_slot < 1 {
            return Err(PlanError::InvalidConfig("max_workers_per_slot must be >= 1"));
        }
        if self.single_worker_per_slot && self.max_workers_per_slot > 1 {
            return Err(PlanError::InvalidConfig(
                "single_worker_per_slot conflicts with max_workers_per_slot > 1",
            ));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid worker {0}: min_hours is greater than max_hours")]
    InvalidHourBounds(String),
    #[error("invalid holiday {0}: start date is after end date")]
    InvalidHolidayRange(String),
    #[error("duplicate worker id: {0}")]
    DuplicateWorker(u32),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("rotation pattern names unknown slot: {0}")]
    UnknownPatternSlot(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
