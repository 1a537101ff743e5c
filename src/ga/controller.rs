//! The generational loop: elitism, offspring fill, parallel fitness
//! evaluation, and early termination on a quality threshold.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Deserialize;

use crate::domain::inputs::{BreakSchedule, Constraints, SchoolTiming, Section};
use crate::domain::solution::Solution;
use crate::errors::AppError;
use crate::ga::fitness::evaluate;
use crate::ga::initializer::initialize_solution;
use crate::ga::operators::{crossover, mutate, tournament_select};
use crate::index::DomainIndex;

const FITNESS_THRESHOLD: f64 = 0.95;

fn default_population_size() -> usize {
    100
}
fn default_generations() -> u32 {
    1000
}
fn default_mutation_rate() -> f64 {
    0.10
}
fn default_crossover_rate() -> f64 {
    0.80
}
fn default_elite_size() -> usize {
    20
}
fn default_tournament_size() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct GaParams {
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    #[serde(default = "default_generations")]
    pub generations: u32,
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,
    #[serde(default = "default_elite_size")]
    pub elite_size: usize,
    #[serde(default = "default_tournament_size")]
    pub tournament_size: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        GaParams {
            population_size: default_population_size(),
            generations: default_generations(),
            mutation_rate: default_mutation_rate(),
            crossover_rate: default_crossover_rate(),
            elite_size: default_elite_size(),
            tournament_size: default_tournament_size(),
            seed: None,
        }
    }
}

/// Cheap `Arc<AtomicBool>` handle shared with a caller who wants to stop a
/// run early. Checked between generations, never inside one.
#[derive(Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct GaOutcome {
    pub best: Solution,
    pub generations_run: u32,
    pub terminated_early: bool,
    pub partial: bool,
}

/// Runs the generational loop to completion, to an early-termination
/// threshold, to cancellation, or to a wall-clock budget — whichever comes
/// first. The initial population is always `population_size` fresh random
/// solutions; callers that want to seed from an existing timetable report it
/// out-of-band rather than injecting it into generation zero.
pub fn run(
    index: &DomainIndex,
    sections: &[Section],
    timing: &SchoolTiming,
    breaks: &[BreakSchedule],
    constraints: &Constraints,
    params: &GaParams,
    cancellation: &CancellationToken,
    max_duration: Option<Duration>,
) -> Result<GaOutcome, AppError> {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let started = Instant::now();
    let mut population = Vec::with_capacity(params.population_size);
    for _ in 0..params.population_size {
        population.push(initialize_solution(index, sections, timing, breaks, &mut rng)?);
    }
    evaluate_population(&mut population, index, constraints);
    sort_population(&mut population);

    let mut generations_run = 0u32;
    let mut terminated_early = false;
    let mut partial = false;

    for _ in 0..params.generations {
        if cancellation.is_cancelled() {
            partial = true;
            break;
        }
        if let Some(budget) = max_duration {
            if started.elapsed() >= budget {
                partial = true;
                break;
            }
        }

        let elite_count = params.elite_size.min(population.len());
        let mut next_generation: Vec<Solution> = population[..elite_count].to_vec();

        while next_generation.len() < params.population_size {
            let parent_a = tournament_select(&population, params.tournament_size, &mut rng);
            let parent_b = tournament_select(&population, params.tournament_size, &mut rng);

            let (mut child_a, mut child_b) = if rng.gen_bool(params.crossover_rate) {
                crossover(&population[parent_a].periods, &population[parent_b].periods, &mut rng)
            } else {
                (population[parent_a].periods.clone(), population[parent_b].periods.clone())
            };

            if rng.gen_bool(params.mutation_rate) {
                mutate(&mut child_a, index, &mut rng);
            }
            if rng.gen_bool(params.mutation_rate) {
                mutate(&mut child_b, index, &mut rng);
            }

            next_generation.push(Solution::new(child_a));
            if next_generation.len() < params.population_size {
                next_generation.push(Solution::new(child_b));
            }
        }
        next_generation.truncate(params.population_size);

        // Elite solutions carry their evaluation over unchanged; only the
        // freshly bred offspring need re-scoring, and that pass is the one
        // parallelized across a worker-thread pool.
        let (_elites, offspring) = next_generation.split_at_mut(elite_count);
        evaluate_population(offspring, index, constraints);

        population = next_generation;
        sort_population(&mut population);
        generations_run += 1;

        let best = &population[0];
        if best.fitness_score >= FITNESS_THRESHOLD && best.critical_conflicts() == 0 {
            terminated_early = true;
            break;
        }
    }

    let best = population.into_iter().next().ok_or_else(|| {
        AppError::internal("generation loop produced an empty population")
    })?;

    Ok(GaOutcome {
        best,
        generations_run,
        terminated_early,
        partial,
    })
}

fn evaluate_population(population: &mut [Solution], index: &DomainIndex, constraints: &Constraints) {
    population.par_iter_mut().for_each(|solution| {
        let evaluation = evaluate(&solution.periods, index, constraints);
        solution.fitness_score = evaluation.fitness;
        solution.conflicts = evaluation.conflicts;
    });
}

fn sort_population(population: &mut [Solution]) {
    population.sort_by(|a, b| {
        b.fitness_score
            .partial_cmp(&a.fitness_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
