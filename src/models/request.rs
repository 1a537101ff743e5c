use serde::Deserialize;

use crate::domain::period::Period;
use crate::models::context::RunContext;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub context: RunContext,
    #[serde(default)]
    pub population_size: Option<usize>,
    #[serde(default)]
    pub generations: Option<u32>,
    #[serde(default)]
    pub mutation_rate: Option<f64>,
    #[serde(default)]
    pub crossover_rate: Option<f64>,
    #[serde(default)]
    pub elite_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub periods: Vec<Period>,
    #[serde(flatten)]
    pub context: RunContext,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub periods: Vec<Period>,
    #[serde(flatten)]
    pub context: RunContext,
}
