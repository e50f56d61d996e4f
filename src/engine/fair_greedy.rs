use super::accounting::Accounting;
use super::eligibility;
use super::grid::Grid;
use super::BuildCtx;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Probabilité de sauter un jour entier pendant le remplissage opportuniste.
const DAY_SKIP_CHANCE: f64 = 0.5;
/// Probabilité de compléter un créneau de pointe (soirée).
const PEAK_FILL_CHANCE: f64 = 0.7;
/// Probabilité de compléter les autres créneaux.
const BASE_FILL_CHANCE: f64 = 0.3;

/// Stratégie d'équité gloutonne : couverture minimale d'abord, puis
/// remplissage opportuniste jusqu'à la capacité des créneaux.
pub(super) fn run(ctx: &BuildCtx, rng: &mut StdRng, grid: &mut Grid, acct: &mut Accounting) {
    cover(ctx, rng, grid, acct);
    if ctx.config.max_workers_per_slot > 1 {
        debug!("remplissage opportuniste des créneaux multi-travailleurs");
        pack(ctx, rng, grid, acct);
    }
}

/// Phase 1 : pour chaque cellule (jour, créneau), le candidat éligible le
/// moins chargé en minutes prend le créneau — un seul par cellule ici.
fn cover(ctx: &BuildCtx, rng: &mut StdRng, grid: &mut Grid, acct: &mut Accounting) {
    for day in 0..ctx.horizon.num_days {
        if ctx.cancelled() {
            return;
        }
        for slot_idx in 0..ctx.slots.len() {
            // clé de départage tirée une fois par candidat et par tri,
            // jamais par comparaison (transitivité du comparateur)
            let mut order: Vec<(u32, u32, usize)> = (0..ctx.workers.len())
                .map(|w| (acct.total_minutes(w), rng.random::<u32>(), w))
                .collect();
            order.sort_unstable();

            for &(_, _, w) in &order {
                if eligibility::is_eligible(ctx, grid, acct, w, slot_idx, day) {
                    grid.push(day, slot_idx, w);
                    acct.record(w, day, ctx.slots[slot_idx].duration_minutes());
                    break;
                }
            }
        }
    }
}

/// Phase 2 : parcours des jours en ordre mélangé, avec du bruit
/// préservant l'équité ; les travailleurs sous leur minimum d'heures
/// passent en tête de file.
fn pack(ctx: &BuildCtx, rng: &mut StdRng, grid: &mut Grid, acct: &mut Accounting) {
    let capacity = ctx.config.max_workers_per_slot as usize;

    let mut day_order: Vec<usize> = (0..ctx.horizon.num_days).collect();
    day_order.shuffle(rng);

    for day in day_order {
        if ctx.cancelled() {
            return;
        }
        if rng.random_bool(DAY_SKIP_CHANCE) {
            continue;
        }

        for slot_idx in 0..ctx.slots.len() {
            let slot = &ctx.slots[slot_idx];
            let fill_chance = if slot.is_evening() {
                PEAK_FILL_CHANCE
            } else {
                BASE_FILL_CHANCE
            };
            if !rng.random_bool(fill_chance) {
                continue;
            }
            if grid.occupancy(day, slot_idx) >= capacity {
                continue;
            }

            let mut candidates: Vec<(u8, u32, u32, usize)> = (0..ctx.workers.len())
                .filter(|&w| !grid.contains(day, slot_idx, w))
                .filter(|&w| eligibility::is_eligible(ctx, grid, acct, w, slot_idx, day))
                .map(|w| {
                    let met = acct.min_hours_met(w, ctx.workers[w].min_hours);
                    (u8::from(met), acct.total_minutes(w), rng.random::<u32>(), w)
                })
                .collect();
            candidates.sort_unstable();

            for &(_, _, _, w) in &candidates {
                if grid.occupancy(day, slot_idx) >= capacity {
                    break;
                }
                grid.push(day, slot_idx, w);
                acct.record(w, day, slot.duration_minutes());
            }
        }
    }
}
