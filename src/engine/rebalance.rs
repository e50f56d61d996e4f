use super::accounting::Accounting;
use super::grid::Grid;
use super::util;
use super::BuildCtx;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

/// Rééquilibrage par recherche aléatoire : rapproche chaque travailleur du
/// compte d'affectations maximal observé. La recherche est bornée par un
/// budget d'essais explicite (`num_days × num_slots`) ; à épuisement, le
/// travailleur reste sous-affecté et le manque est visible dans les
/// agrégats.
pub(super) fn run(ctx: &BuildCtx, rng: &mut StdRng, grid: &mut Grid, acct: &mut Accounting) {
    let num_days = ctx.horizon.num_days;
    let num_slots = ctx.slots.len();
    if num_days == 0 || num_slots == 0 {
        return;
    }

    let capacity = ctx.config.max_workers_per_slot as usize;
    let target = acct.max_assigned();
    let budget = num_days * num_slots;

    for w in 0..ctx.workers.len() {
        if ctx.cancelled() {
            return;
        }
        let mut attempts = 0usize;
        while acct.slots_assigned(w) < target && attempts < budget {
            attempts += 1;
            let day = rng.random_range(0..num_days);
            let slot_idx = rng.random_range(0..num_slots);

            if grid.contains(day, slot_idx, w) {
                continue;
            }
            if util::on_holiday(ctx, w, day) {
                continue;
            }
            if !ctx.config.allow_multiple_slots_per_day && grid.assigned_on_day(day, w) {
                continue;
            }
            if grid.occupancy(day, slot_idx) >= capacity {
                continue;
            }
            let duration = ctx.slots[slot_idx].duration_minutes();
            if !util::projected_hours_ok(&ctx.workers[w], acct.total_minutes(w), duration) {
                continue;
            }

            grid.push(day, slot_idx, w);
            acct.record(w, day, duration);
        }

        if acct.slots_assigned(w) < target {
            debug!(
                worker = %ctx.workers[w].id,
                assigned = acct.slots_assigned(w),
                objectif = target,
                "rééquilibrage incomplet (budget d'essais épuisé)"
            );
        }
    }
}
