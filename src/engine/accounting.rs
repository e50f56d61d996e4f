use std::collections::BTreeSet;

/// Cumuls par travailleur pendant une génération, en tableaux parallèles
/// indexés par la position du travailleur dans la liste d'entrée.
#[derive(Debug)]
pub(super) struct Accounting {
    total_minutes: Vec<u32>,
    slots_assigned: Vec<u32>,
    days_worked: Vec<BTreeSet<usize>>,
}

impl Accounting {
    pub(super) fn new(num_workers: usize) -> Self {
        Self {
            total_minutes: vec![0; num_workers],
            slots_assigned: vec![0; num_workers],
            days_worked: vec![BTreeSet::new(); num_workers],
        }
    }

    /// Enregistre une affectation (seule mutation possible).
    pub(super) fn record(&mut self, worker: usize, day: usize, minutes: u32) {
        self.total_minutes[worker] += minutes;
        self.slots_assigned[worker] += 1;
        self.days_worked[worker].insert(day);
    }

    pub(super) fn total_minutes(&self, worker: usize) -> u32 {
        self.total_minutes[worker]
    }

    pub(super) fn slots_assigned(&self, worker: usize) -> u32 {
        self.slots_assigned[worker]
    }

    pub(super) fn max_assigned(&self) -> u32 {
        self.slots_assigned.iter().copied().max().unwrap_or(0)
    }

    /// Jours travaillés dans la fenêtre hebdomadaire courante.
    ///
    /// Politique unique : semaines = blocs de 7 jours alignés sur le début
    /// de l'horizon (`week_start = day - day % 7`), borne incluse.
    pub(super) fn weekly_count(&self, worker: usize, day: usize) -> u32 {
        let week_start = day - day % 7;
        self.days_worked[worker].range(week_start..=day).count() as u32
    }

    /// Le minimum d'heures mensuel est-il atteint ? (`None` = pas de minimum)
    pub(super) fn min_hours_met(&self, worker: usize, min_hours: Option<u32>) -> bool {
        min_hours.map_or(true, |min| self.total_minutes[worker] >= min * 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_window_is_aligned_on_horizon_start() {
        let mut acct = Accounting::new(1);
        for day in [0, 3, 6, 7, 8] {
            acct.record(0, day, 480);
        }
        // jours 0..=6 : trois jours travaillés
        assert_eq!(acct.weekly_count(0, 6), 3);
        // la fenêtre suivante repart de zéro au jour 7
        assert_eq!(acct.weekly_count(0, 7), 1);
        assert_eq!(acct.weekly_count(0, 8), 2);
        assert_eq!(acct.weekly_count(0, 13), 2);
    }

    #[test]
    fn same_day_twice_counts_one_day() {
        let mut acct = Accounting::new(1);
        acct.record(0, 2, 480);
        acct.record(0, 2, 480);
        assert_eq!(acct.slots_assigned(0), 2);
        assert_eq!(acct.total_minutes(0), 960);
        assert_eq!(acct.weekly_count(0, 2), 1);
    }

    #[test]
    fn min_hours_met_with_and_without_bound() {
        let mut acct = Accounting::new(1);
        assert!(acct.min_hours_met(0, None));
        assert!(!acct.min_hours_met(0, Some(8)));
        acct.record(0, 0, 480);
        assert!(acct.min_hours_met(0, Some(8)));
    }
}
