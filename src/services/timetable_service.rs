//! Thin orchestration layer between the HTTP handlers and the GA engine:
//! validates requests, builds a `DomainIndex`, drives a run, and shapes the
//! result into the wire DTOs.

use std::collections::HashSet;

use crate::domain::solution::Solution;
use crate::errors::{AppError, Result};
use crate::ga::controller::{run, CancellationToken, GaParams};
use crate::ga::fitness::evaluate;
use crate::index::DomainIndex;
use crate::models::context::RunContext;
use crate::models::request::{AnalyzeRequest, GenerateRequest, OptimizeRequest};
use crate::models::response::{
    AnalyzeResponse, AnalyzeStatistics, Improvement, OptimizeResponse, Statistics, TimetableResult,
};

/// Full validation for `generate`, which builds a timetable from scratch and
/// so needs a populated context. `optimize`/`analyze` only require a
/// non-empty `periods` list (checked inline at their call sites), matching
/// the source system's own, looser input contract for those two operations.
fn validate_context(context: &RunContext) -> Result<()> {
    if context.sections.is_empty() {
        return Err(AppError::validation("sections must not be empty"));
    }
    if context.teachers.is_empty() {
        return Err(AppError::validation("teachers must not be empty"));
    }
    if context.subjects.is_empty() {
        return Err(AppError::validation("subjects must not be empty"));
    }
    context.school_timing.validate()?;
    for break_schedule in &context.break_schedules {
        break_schedule.validate()?;
    }
    Ok(())
}

fn resolve_generate_params(request: &GenerateRequest, defaults: &GaParams) -> GaParams {
    GaParams {
        population_size: request.population_size.unwrap_or(defaults.population_size),
        generations: request.generations.unwrap_or(defaults.generations),
        mutation_rate: request.mutation_rate.unwrap_or(defaults.mutation_rate),
        crossover_rate: request.crossover_rate.unwrap_or(defaults.crossover_rate),
        elite_size: request.elite_size.unwrap_or(defaults.elite_size),
        ..defaults.clone()
    }
}

/// `defaults` comes from `AppConfig::ga_defaults`; a request's own
/// hyperparameters, when present, win field-by-field.
pub fn generate(request: GenerateRequest, defaults: &GaParams) -> Result<TimetableResult> {
    validate_context(&request.context)?;
    let params = resolve_generate_params(&request, defaults);

    let index = DomainIndex::build(
        &request.context.sections,
        &request.context.teachers,
        &request.context.subjects,
        &request.context.rooms,
        &request.context.school_timing,
    );

    log::info!(
        "generate: starting run population_size={} generations={}",
        params.population_size,
        params.generations
    );
    let outcome = run(
        &index,
        &request.context.sections,
        &request.context.school_timing,
        &request.context.break_schedules,
        &request.context.constraints,
        &params,
        &CancellationToken::new(),
        None,
    )?;
    log::info!(
        "generate: finished after {} generations, fitness={:.4}, terminated_early={}",
        outcome.generations_run,
        outcome.best.fitness_score,
        outcome.terminated_early
    );

    Ok(to_timetable_result(outcome.best, &params))
}

/// Reduced schedule per the fixed `optimize` profile: a shorter, higher-
/// mutation run starting from a fresh random population, not from `periods`.
fn optimize_params() -> GaParams {
    GaParams {
        population_size: 50,
        generations: 500,
        mutation_rate: 0.15,
        ..GaParams::default()
    }
}

pub fn optimize(request: OptimizeRequest) -> Result<OptimizeResponse> {
    if request.periods.is_empty() {
        return Err(AppError::validation("periods must not be empty"));
    }

    let index = DomainIndex::build(
        &request.context.sections,
        &request.context.teachers,
        &request.context.subjects,
        &request.context.rooms,
        &request.context.school_timing,
    );

    let baseline = evaluate(&request.periods, &index, &request.context.constraints);
    log::info!(
        "optimize: baseline fitness={:.4} conflicts={}",
        baseline.fitness,
        baseline.conflicts.len()
    );

    let params = optimize_params();
    let outcome = run(
        &index,
        &request.context.sections,
        &request.context.school_timing,
        &request.context.break_schedules,
        &request.context.constraints,
        &params,
        &CancellationToken::new(),
        None,
    )?;
    log::info!(
        "optimize: finished after {} generations, fitness={:.4}",
        outcome.generations_run,
        outcome.best.fitness_score
    );

    let final_fitness = outcome.best.fitness_score;
    let final_conflicts = outcome.best.conflicts.len();

    Ok(OptimizeResponse {
        optimized_timetable: to_timetable_result(outcome.best, &params),
        improvement: Improvement {
            initial_fitness: baseline.fitness,
            final_fitness,
            initial_conflicts: baseline.conflicts.len(),
            final_conflicts,
        },
    })
}

pub fn analyze(request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    if request.periods.is_empty() {
        return Err(AppError::validation("periods must not be empty"));
    }

    let index = DomainIndex::build(
        &request.context.sections,
        &request.context.teachers,
        &request.context.subjects,
        &request.context.rooms,
        &request.context.school_timing,
    );

    let evaluation = evaluate(&request.periods, &index, &request.context.constraints);

    let mut conflicts_by_type = std::collections::HashMap::new();
    for conflict in &evaluation.conflicts {
        *conflicts_by_type.entry(conflict.type_name().to_string()).or_insert(0usize) += 1;
    }

    let total_sections = distinct_count(request.periods.iter().map(|p| p.section_id.as_str()));
    let total_teachers = distinct_count(request.periods.iter().filter_map(|p| p.teacher_id.as_deref()));
    let total_rooms = distinct_count(request.periods.iter().filter_map(|p| p.room_id.as_deref()));

    Ok(AnalyzeResponse {
        fitness_score: evaluation.fitness,
        distribution_score: evaluation.distribution_score,
        workload_balance_score: evaluation.workload_balance_score,
        total_conflicts: evaluation.conflicts.len(),
        conflicts_by_type,
        conflicts: evaluation.conflicts,
        statistics: AnalyzeStatistics {
            total_periods: request.periods.len(),
            total_sections,
            total_teachers,
            total_rooms,
        },
    })
}

fn distinct_count<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.collect::<HashSet<_>>().len()
}


fn to_timetable_result(best: Solution, params: &GaParams) -> TimetableResult {
    let critical_conflicts = best.critical_conflicts();
    TimetableResult {
        statistics: Statistics {
            total_periods: best.periods.len(),
            conflict_count: best.conflicts.len(),
            critical_conflicts,
        },
        periods: best.periods,
        fitness_score: best.fitness_score,
        conflicts: best.conflicts,
        population_size: params.population_size,
        generations: params.generations,
        mutation_rate: params.mutation_rate,
        crossover_rate: params.crossover_rate,
        elite_size: params.elite_size,
    }
}
