use crate::model::{Horizon, Slot, Worker, WorkerId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Planning figé : jour → créneau → ensemble de travailleurs.
///
/// Créé vide au début d'une génération, muté uniquement pendant les phases
/// de construction, immuable une fois rendu. Une cellule vide signifie
/// « non couvert » — jamais d'absence de cellule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    workers: Vec<Worker>,
    slots: Vec<Slot>,
    horizon: Horizon,
    // jour-majeur, créneau-mineur
    cells: Vec<Vec<Vec<WorkerId>>>,
}

impl Schedule {
    pub(crate) fn new(
        workers: Vec<Worker>,
        slots: Vec<Slot>,
        horizon: Horizon,
        cells: Vec<Vec<Vec<WorkerId>>>,
    ) -> Self {
        Self {
            workers,
            slots,
            horizon,
            cells,
        }
    }

    pub fn num_days(&self) -> usize {
        self.cells.len()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    /// Travailleurs affectés à la cellule (jour, créneau).
    pub fn assigned(&self, day: usize, slot: usize) -> &[WorkerId] {
        &self.cells[day][slot]
    }

    /// Nombre total de créneaux par travailleur (zéro inclus pour les
    /// travailleurs jamais affectés).
    pub fn shift_counts(&self) -> HashMap<WorkerId, u32> {
        let mut counts: HashMap<WorkerId, u32> =
            self.workers.iter().map(|w| (w.id, 0)).collect();
        for row in &self.cells {
            for cell in row {
                for id in cell {
                    *counts.entry(*id).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Minutes de travail cumulées par travailleur.
    pub fn work_minutes(&self) -> HashMap<WorkerId, u32> {
        let mut minutes: HashMap<WorkerId, u32> =
            self.workers.iter().map(|w| (w.id, 0)).collect();
        for row in &self.cells {
            for (slot_idx, cell) in row.iter().enumerate() {
                let duration = self.slots[slot_idx].duration_minutes();
                for id in cell {
                    *minutes.entry(*id).or_insert(0) += duration;
                }
            }
        }
        minutes
    }

    /// Heures de travail par travailleur (minutes cumulées, plancher).
    pub fn work_hours(&self) -> HashMap<WorkerId, u32> {
        self.work_minutes()
            .into_iter()
            .map(|(id, minutes)| (id, minutes / 60))
            .collect()
    }

    /// Rendu texte compact : une ligne par jour, puis le bilan par
    /// travailleur.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (day, row) in self.cells.iter().enumerate() {
            let _ = write!(out, "Jour {} ({})", day + 1, self.horizon.date(day));
            for (slot_idx, cell) in row.iter().enumerate() {
                let names = if cell.is_empty() {
                    "-".to_string()
                } else {
                    cell.iter()
                        .map(|id| self.worker_name(*id))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                let _ = write!(out, "  {} [{}]", self.slots[slot_idx].name, names);
            }
            out.push('\n');
        }

        let counts = self.shift_counts();
        let hours = self.work_hours();
        out.push('\n');
        out.push_str("Bilan par travailleur :\n");
        for w in &self.workers {
            let _ = writeln!(
                out,
                "{} : {} créneaux, {} h",
                w.name,
                counts.get(&w.id).copied().unwrap_or(0),
                hours.get(&w.id).copied().unwrap_or(0)
            );
        }
        out
    }

    fn worker_name(&self, id: WorkerId) -> &str {
        self.workers
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.name.as_str())
            .unwrap_or("?")
    }
}
