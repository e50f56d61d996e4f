use super::types::{PatternStep, PlanError};
use super::BuildCtx;
use crate::model::{Slot, Worker};

/// Le travailleur est-il en congé au jour d'indice `day` ?
pub(super) fn on_holiday(ctx: &BuildCtx, worker: usize, day: usize) -> bool {
    let date = ctx.horizon.date(day);
    let id = ctx.workers[worker].id;
    ctx.holidays.iter().any(|h| h.covers(id, date))
}

/// Contrôle d'heures « plancher avant engagement » :
/// `(minutes cumulées + durée) / 60` ne doit pas dépasser le plafond.
pub(super) fn projected_hours_ok(worker: &Worker, total_minutes: u32, slot_minutes: u32) -> bool {
    match worker.max_hours {
        Some(max) => (total_minutes + slot_minutes) / 60 <= max,
        None => true,
    }
}

/// Résout chaque entrée du motif en indice de créneau (insensible à la
/// casse) ; `None` = repos. Une entrée inconnue est une erreur fatale.
pub(super) fn resolve_pattern(
    pattern: &[PatternStep],
    slots: &[Slot],
) -> Result<Vec<Option<usize>>, PlanError> {
    pattern
        .iter()
        .map(|step| match step {
            PatternStep::Rest => Ok(None),
            PatternStep::Work(name) => slots
                .iter()
                .position(|s| s.name.eq_ignore_ascii_case(name))
                .map(Some)
                .ok_or_else(|| PlanError::UnknownPatternSlot(name.clone())),
        })
        .collect()
}
