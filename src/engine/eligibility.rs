use super::accounting::Accounting;
use super::grid::Grid;
use super::util;
use super::BuildCtx;

/// Prédicat pur d'éligibilité d'un travailleur pour un créneau un jour
/// donné. Aucune mutation ; contrôles dans l'ordre, arrêt au premier échec :
///
/// 1. un seul créneau par jour (sauf autorisation explicite) ;
/// 2. congés (intervalle inclusif) ;
/// 3. plafond d'heures projeté, plancher avant engagement ;
/// 4. plafond hebdomadaire (jours travaillés dans la fenêtre courante) ;
/// 5. pas deux nuits consécutives (si la garde est active).
pub(super) fn is_eligible(
    ctx: &BuildCtx,
    grid: &Grid,
    acct: &Accounting,
    worker: usize,
    slot: usize,
    day: usize,
) -> bool {
    if !ctx.config.allow_multiple_slots_per_day && grid.assigned_on_day(day, worker) {
        return false;
    }

    if util::on_holiday(ctx, worker, day) {
        return false;
    }

    let duration = ctx.slots[slot].duration_minutes();
    if !util::projected_hours_ok(&ctx.workers[worker], acct.total_minutes(worker), duration) {
        return false;
    }

    if acct.weekly_count(worker, day) >= ctx.config.max_slots_per_week {
        return false;
    }

    if ctx.config.night_guard_active() && ctx.slots[slot].is_night() {
        if day > 0 && grid.worked_night(day - 1, worker, ctx.slots) {
            return false;
        }
    }

    true
}
