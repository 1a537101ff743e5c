//! Tournament selection, single-point list-level crossover, and mutation.

use rand::Rng;

use crate::domain::period::Period;
use crate::domain::solution::Solution;
use crate::index::DomainIndex;

/// Samples `tournament_size` individuals uniformly with replacement and
/// returns the index of the fittest. Ties are broken by first-seen.
pub fn tournament_select<R: Rng>(
    population: &[Solution],
    tournament_size: usize,
    rng: &mut R,
) -> usize {
    let mut best_idx = rng.gen_range(0..population.len());
    let mut best_fitness = population[best_idx].fitness_score;
    for _ in 1..tournament_size {
        let candidate = rng.gen_range(0..population.len());
        if population[candidate].fitness_score > best_fitness {
            best_idx = candidate;
            best_fitness = population[candidate].fitness_score;
        }
    }
    best_idx
}

/// Single-point, list-level crossover. Picks `k` in `[1, min(|a|,|b|)-1]`;
/// child1 = a[:k] + b[k:], child2 = b[:k] + a[k:]. Does not preserve the
/// "every slot appears exactly once" coverage invariant — recovery, if any,
/// is left to the fitness landscape.
pub fn crossover<R: Rng>(a: &[Period], b: &[Period], rng: &mut R) -> (Vec<Period>, Vec<Period>) {
    let shortest = a.len().min(b.len());
    if shortest < 2 {
        return (a.to_vec(), b.to_vec());
    }
    let k = rng.gen_range(1..shortest);

    let mut child1 = a[..k].to_vec();
    child1.extend_from_slice(&b[k..]);

    let mut child2 = b[..k].to_vec();
    child2.extend_from_slice(&a[k..]);

    (child1, child2)
}

/// Mutates `periods` in place: `s` random pairwise swaps of periods
/// (`s` in `[1, min(5, n/2)]`), plus an independent 10% chance per period of
/// re-sampling its teacher, and likewise its room. Subject and section never
/// mutate. Callers are expected to have already cloned `periods` from its
/// parent — mutation never aliases another solution's storage.
pub fn mutate<R: Rng>(periods: &mut [Period], index: &DomainIndex, rng: &mut R) {
    let n = periods.len();
    if n < 2 {
        return;
    }

    // Swaps only the slot (weekday/period_number/start/end) between two
    // periods, never their subject or section — those never mutate.
    let max_swaps = (n / 2).min(5).max(1);
    let swaps = rng.gen_range(1..=max_swaps);
    for _ in 0..swaps {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if i != j {
            let slot_i = (periods[i].weekday, periods[i].period_number, periods[i].start_time, periods[i].end_time);
            let slot_j = (periods[j].weekday, periods[j].period_number, periods[j].start_time, periods[j].end_time);
            (periods[i].weekday, periods[i].period_number, periods[i].start_time, periods[i].end_time) = slot_j;
            (periods[j].weekday, periods[j].period_number, periods[j].start_time, periods[j].end_time) = slot_i;
        }
    }

    for period in periods.iter_mut() {
        if rng.gen_bool(0.10) {
            let eligible = index.eligible_teachers(&period.subject_id);
            period.teacher_id = if eligible.is_empty() {
                None
            } else {
                Some(eligible[rng.gen_range(0..eligible.len())].id.clone())
            };
        }
        if rng.gen_bool(0.10) {
            let rooms = index.available_rooms();
            period.room_id = if rooms.is_empty() {
                None
            } else {
                Some(rooms[rng.gen_range(0..rooms.len())].id.clone())
            };
        }
    }
}
