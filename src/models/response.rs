use std::collections::HashMap;

use serde::Serialize;

use crate::domain::conflict::Conflict;
use crate::domain::period::Period;

#[derive(Debug, Serialize)]
pub struct Statistics {
    pub total_periods: usize,
    pub conflict_count: usize,
    pub critical_conflicts: usize,
}

/// Shared by `generate`'s direct response and `optimize`'s
/// `optimized_timetable` field — the hyperparameters that actually produced
/// this result are echoed back alongside it.
#[derive(Debug, Serialize)]
pub struct TimetableResult {
    pub periods: Vec<Period>,
    pub fitness_score: f64,
    pub conflicts: Vec<Conflict>,
    pub statistics: Statistics,
    pub population_size: usize,
    pub generations: u32,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub elite_size: usize,
}

#[derive(Debug, Serialize)]
pub struct Improvement {
    pub initial_fitness: f64,
    pub final_fitness: f64,
    pub initial_conflicts: usize,
    pub final_conflicts: usize,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimized_timetable: TimetableResult,
    pub improvement: Improvement,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeStatistics {
    pub total_periods: usize,
    pub total_sections: usize,
    pub total_teachers: usize,
    pub total_rooms: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub fitness_score: f64,
    pub distribution_score: f64,
    pub workload_balance_score: f64,
    pub total_conflicts: usize,
    pub conflicts_by_type: HashMap<String, usize>,
    pub conflicts: Vec<Conflict>,
    pub statistics: AnalyzeStatistics,
}
