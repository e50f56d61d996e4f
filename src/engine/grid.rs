use crate::model::Slot;

/// Grille en cours de construction : jour → créneau → travailleurs
/// (indices de position, sémantique d'ensemble — jamais de doublon).
#[derive(Debug)]
pub(super) struct Grid {
    cells: Vec<Vec<Vec<usize>>>,
}

impl Grid {
    pub(super) fn new(num_days: usize, num_slots: usize) -> Self {
        Self {
            cells: vec![vec![Vec::new(); num_slots]; num_days],
        }
    }

    pub(super) fn occupancy(&self, day: usize, slot: usize) -> usize {
        self.cells[day][slot].len()
    }

    pub(super) fn contains(&self, day: usize, slot: usize, worker: usize) -> bool {
        self.cells[day][slot].contains(&worker)
    }

    /// Ajoute le travailleur à la cellule (no-op s'il y figure déjà).
    pub(super) fn push(&mut self, day: usize, slot: usize, worker: usize) {
        let cell = &mut self.cells[day][slot];
        if !cell.contains(&worker) {
            cell.push(worker);
        }
    }

    /// Le travailleur occupe-t-il un créneau quelconque ce jour-là ?
    pub(super) fn assigned_on_day(&self, day: usize, worker: usize) -> bool {
        self.cells[day].iter().any(|cell| cell.contains(&worker))
    }

    /// Le travailleur occupe-t-il un créneau de nuit ce jour-là ?
    pub(super) fn worked_night(&self, day: usize, worker: usize, slots: &[Slot]) -> bool {
        self.cells[day]
            .iter()
            .enumerate()
            .any(|(idx, cell)| slots[idx].is_night() && cell.contains(&worker))
    }

    pub(super) fn into_cells(self) -> Vec<Vec<Vec<usize>>> {
        self.cells
    }
}
