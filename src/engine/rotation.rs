use super::accounting::Accounting;
use super::eligibility;
use super::grid::Grid;
use super::util;
use super::BuildCtx;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Stratégie par motif cyclique : chaque travailleur suit le motif avec un
/// décalage positionnel stable, puis les trous sont comblés et les minima
/// d'heures corrigés.
pub(super) fn run(
    ctx: &BuildCtx,
    pattern: &[Option<usize>],
    rng: &mut StdRng,
    grid: &mut Grid,
    acct: &mut Accounting,
) {
    if pattern.is_empty() || ctx.workers.is_empty() {
        return;
    }

    // mélange unique : la position dans `order` est le décalage du
    // travailleur pour toute la génération
    let mut order: Vec<usize> = (0..ctx.workers.len()).collect();
    order.shuffle(rng);

    strict_rotation(ctx, pattern, &order, grid, acct);
    fill_in(ctx, &order, grid, acct);
    raise_to_minimums(ctx, pattern, &order, rng, grid, acct);
}

/// Étape 1 : affectation stricte — au jour `d`, le travailleur de décalage
/// `idx` vise l'entrée `pattern[(d + idx) % L]`.
fn strict_rotation(
    ctx: &BuildCtx,
    pattern: &[Option<usize>],
    order: &[usize],
    grid: &mut Grid,
    acct: &mut Accounting,
) {
    let len = pattern.len();
    let capacity = ctx.config.max_workers_per_slot as usize;

    for day in 0..ctx.horizon.num_days {
        if ctx.cancelled() {
            return;
        }
        for (offset, &w) in order.iter().enumerate() {
            let Some(slot_idx) = pattern[(day + offset) % len] else {
                continue; // repos
            };
            if grid.occupancy(day, slot_idx) >= capacity {
                continue;
            }
            if !eligibility::is_eligible(ctx, grid, acct, w, slot_idx, day) {
                continue;
            }
            grid.push(day, slot_idx, w);
            acct.record(w, day, ctx.slots[slot_idx].duration_minutes());
        }
    }
}

/// Étape 2 : complément des créneaux sous capacité, les moins chargés en
/// minutes d'abord (ordre mélangé préservé à égalité).
fn fill_in(ctx: &BuildCtx, order: &[usize], grid: &mut Grid, acct: &mut Accounting) {
    let capacity = ctx.config.max_workers_per_slot as usize;

    for day in 0..ctx.horizon.num_days {
        if ctx.cancelled() {
            return;
        }
        for slot_idx in 0..ctx.slots.len() {
            if grid.occupancy(day, slot_idx) >= capacity {
                continue;
            }

            let mut candidates: Vec<(u32, usize)> = order
                .iter()
                .copied()
                .filter(|&w| !grid.contains(day, slot_idx, w))
                .filter(|&w| eligibility::is_eligible(ctx, grid, acct, w, slot_idx, day))
                .map(|w| (acct.total_minutes(w), w))
                .collect();
            candidates.sort_by_key(|&(minutes, _)| minutes);

            for &(_, w) in &candidates {
                if grid.occupancy(day, slot_idx) >= capacity {
                    break;
                }
                grid.push(day, slot_idx, w);
                acct.record(w, day, ctx.slots[slot_idx].duration_minutes());
            }
        }
    }
}

/// Étape 3 : correction des minima — pour chaque travailleur sous son
/// minimum (mais déjà affecté au moins une fois), on balaie tout l'horizon
/// à la recherche de cellules admissibles, mélangées puis triées par
/// occupation croissante. L'épuisement des candidates n'est pas une erreur.
fn raise_to_minimums(
    ctx: &BuildCtx,
    pattern: &[Option<usize>],
    order: &[usize],
    rng: &mut StdRng,
    grid: &mut Grid,
    acct: &mut Accounting,
) {
    let len = pattern.len();
    let capacity = ctx.config.max_workers_per_slot as usize;

    for (offset, &w) in order.iter().enumerate() {
        if ctx.cancelled() {
            return;
        }
        let Some(min) = ctx.workers[w].min_hours else {
            continue;
        };
        let target = min * 60;
        if acct.total_minutes(w) == 0 || acct.total_minutes(w) >= target {
            continue;
        }

        let mut cells: Vec<(usize, usize)> = Vec::new();
        for day in 0..ctx.horizon.num_days {
            if util::on_holiday(ctx, w, day) {
                continue;
            }
            // l'entrée de motif précédente était une nuit : jour exclu,
            // pour préserver la garantie anti-nuits consécutives du motif
            if day > 0 {
                if let Some(prev) = pattern[(day - 1 + offset) % len] {
                    if ctx.slots[prev].is_night() {
                        continue;
                    }
                }
            }
            for slot_idx in 0..ctx.slots.len() {
                if admissible(ctx, grid, acct, w, day, slot_idx, capacity) {
                    cells.push((day, slot_idx));
                }
            }
        }

        // mélange pour l'équité, puis cellules les plus vides d'abord
        cells.shuffle(rng);
        cells.sort_by_key(|&(d, s)| grid.occupancy(d, s));

        for (day, slot_idx) in cells {
            if acct.total_minutes(w) >= target {
                break;
            }
            // les affectations de cette boucle changent la donne : on
            // revérifie avant chaque engagement
            if !admissible(ctx, grid, acct, w, day, slot_idx, capacity) {
                continue;
            }
            grid.push(day, slot_idx, w);
            acct.record(w, day, ctx.slots[slot_idx].duration_minutes());
        }

        if acct.total_minutes(w) < target {
            debug!(
                worker = %ctx.workers[w].id,
                minutes = acct.total_minutes(w),
                minimum = target,
                "minimum d'heures non atteint (candidates épuisées)"
            );
        }
    }
}

/// Admissibilité d'une cellule pour la correction des minima : cellule
/// libre pour ce travailleur, sous capacité, plafond d'heures respecté,
/// unicité journalière respectée, pas de nuit adjacente à une autre nuit.
fn admissible(
    ctx: &BuildCtx,
    grid: &Grid,
    acct: &Accounting,
    w: usize,
    day: usize,
    slot_idx: usize,
    capacity: usize,
) -> bool {
    if grid.contains(day, slot_idx, w) {
        return false;
    }
    if grid.occupancy(day, slot_idx) >= capacity {
        return false;
    }
    if !ctx.config.allow_multiple_slots_per_day && grid.assigned_on_day(day, w) {
        return false;
    }
    let duration = ctx.slots[slot_idx].duration_minutes();
    if !util::projected_hours_ok(&ctx.workers[w], acct.total_minutes(w), duration) {
        return false;
    }
    if ctx.slots[slot_idx].is_night() {
        if day > 0 && grid.worked_night(day - 1, w, ctx.slots) {
            return false;
        }
        if day + 1 < ctx.horizon.num_days && grid.worked_night(day + 1, w, ctx.slots) {
            return false;
        }
    }
    true
}
