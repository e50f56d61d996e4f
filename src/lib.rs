#![forbid(unsafe_code)]
//! Roulement — bibliothèque de génération de plannings d'équipe (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Deux stratégies : équité gloutonne, rotation cyclique à décalage.
//! - Contraintes : congés, bornes d'heures mensuelles, plafond
//!   hebdomadaire, nuits consécutives interdites.
//! - Aléa injectable (graine) : générations reproductibles.
//! - Sous-couverture et minima non atteints livrés comme données, jamais
//!   comme erreurs.

pub mod engine;
pub mod io;
pub mod model;
pub mod schedule;
pub mod storage;

pub use engine::{PatternStep, PlanConfig, PlanError, Planner};
pub use model::{Holiday, Horizon, Slot, Worker, WorkerId};
pub use schedule::Schedule;
pub use storage::{JsonStorage, Plan, Storage};
