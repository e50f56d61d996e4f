mod accounting;
mod eligibility;
mod fair_greedy;
mod grid;
mod rebalance;
mod rotation;
mod types;
mod util;

pub use types::{PatternStep, PlanConfig, PlanError};

use crate::model::{Holiday, Horizon, Slot, Worker};
use crate::schedule::Schedule;
use accounting::Accounting;
use grid::Grid;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Vue en lecture seule des entrées pendant une génération.
struct BuildCtx<'a> {
    workers: &'a [Worker],
    slots: &'a [Slot],
    holidays: &'a [Holiday],
    horizon: &'a Horizon,
    config: &'a PlanConfig,
    cancel: Option<&'a AtomicBool>,
}

impl BuildCtx<'_> {
    /// Drapeau d'annulation, consulté aux frontières de boucles externes.
    fn cancelled(&self) -> bool {
        self.cancel.map_or(false, |c| c.load(Ordering::Relaxed))
    }
}

/// Planificateur : détient les entrées validées et pilote la génération.
///
/// Toutes les validations fatales ont lieu dans [`Planner::new`] ; la
/// génération elle-même n'échoue jamais — les cellules non couvertes et les
/// minima non atteints sont livrés comme données, via le [`Schedule`].
#[derive(Debug, Clone)]
pub struct Planner {
    workers: Vec<Worker>,
    slots: Vec<Slot>,
    holidays: Vec<Holiday>,
    horizon: Horizon,
    config: PlanConfig,
    // motif résolu en indices de créneaux (None = repos), figé à la construction
    resolved_pattern: Vec<Option<usize>>,
}

impl Planner {
    pub fn new(
        workers: Vec<Worker>,
        slots: Vec<Slot>,
        holidays: Vec<Holiday>,
        horizon: Horizon,
        config: PlanConfig,
    ) -> Result<Self, PlanError> {
        config.validate()?;

        let mut seen = HashSet::new();
        for worker in &workers {
            if !seen.insert(worker.id) {
                return Err(PlanError::DuplicateWorker(worker.id.as_u32()));
            }
            // les champs étant publics, on revérifie l'invariant du modèle
            if let (Some(lo), Some(hi)) = (worker.min_hours, worker.max_hours) {
                if lo > hi {
                    return Err(PlanError::InvalidHourBounds(worker.name.clone()));
                }
            }
        }
        for holiday in &holidays {
            if holiday.start_date > holiday.end_date {
                return Err(PlanError::InvalidHolidayRange(holiday.name.clone()));
            }
        }

        let resolved_pattern = if config.rotation_active() {
            util::resolve_pattern(&config.rotation_pattern, &slots)?
        } else {
            Vec::new()
        };

        Ok(Self {
            workers,
            slots,
            holidays,
            horizon,
            config,
            resolved_pattern,
        })
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Génère un planning avec la graine de la config (aléatoire sinon).
    pub fn generate(&self) -> Schedule {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        self.generate_with_seed(seed)
    }

    /// Génère un planning reproductible : même graine, mêmes entrées,
    /// même grille.
    pub fn generate_with_seed(&self, seed: u64) -> Schedule {
        self.build(seed, None)
    }

    /// Variante défensive pour très grands horizons : le drapeau est
    /// consulté aux frontières de boucles ; une annulation rend le planning
    /// partiel tel quel, jamais d'erreur.
    pub fn generate_cancellable(&self, seed: u64, cancel: &AtomicBool) -> Schedule {
        self.build(seed, Some(cancel))
    }

    fn build(&self, seed: u64, cancel: Option<&AtomicBool>) -> Schedule {
        let mut rng = StdRng::seed_from_u64(seed);
        let ctx = BuildCtx {
            workers: &self.workers,
            slots: &self.slots,
            holidays: &self.holidays,
            horizon: &self.horizon,
            config: &self.config,
            cancel,
        };
        let mut grid = Grid::new(self.horizon.num_days, self.slots.len());
        let mut acct = Accounting::new(self.workers.len());

        debug!(
            seed,
            rotation = self.config.rotation_active(),
            num_days = self.horizon.num_days,
            "génération du planning"
        );

        if self.config.rotation_active() {
            rotation::run(&ctx, &self.resolved_pattern, &mut rng, &mut grid, &mut acct);
        } else {
            fair_greedy::run(&ctx, &mut rng, &mut grid, &mut acct);
            if self.config.rebalance && self.config.max_workers_per_slot > 1 {
                rebalance::run(&ctx, &mut rng, &mut grid, &mut acct);
            }
        }

        self.freeze(grid)
    }

    /// Fige la grille de travail en [`Schedule`] immuable.
    fn freeze(&self, grid: Grid) -> Schedule {
        let cells = grid
            .into_cells()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.into_iter().map(|w| self.workers[w].id).collect())
                    .collect()
            })
            .collect();
        Schedule::new(
            self.workers.clone(),
            self.slots.clone(),
            self.horizon,
            cells,
        )
    }
}
