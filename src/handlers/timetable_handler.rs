use actix_web::{web, HttpResponse};

use crate::config::state::AppState;
use crate::errors::Result;
use crate::models::request::{AnalyzeRequest, GenerateRequest, OptimizeRequest};
use crate::services::timetable_service;

pub async fn generate_handler(
    state: web::Data<AppState>,
    body: web::Json<GenerateRequest>,
) -> Result<HttpResponse> {
    log::debug!("POST /timetable/generate: starting");
    let result = timetable_service::generate(body.into_inner(), &state.config.ga_defaults)?;
    log::debug!("POST /timetable/generate: done, fitness={:.4}", result.fitness_score);
    Ok(HttpResponse::Ok().json(result))
}

pub async fn optimize_handler(
    _state: web::Data<AppState>,
    body: web::Json<OptimizeRequest>,
) -> Result<HttpResponse> {
    log::debug!("POST /timetable/optimize: starting");
    let result = timetable_service::optimize(body.into_inner())?;
    log::debug!(
        "POST /timetable/optimize: done, final_fitness={:.4}",
        result.improvement.final_fitness
    );
    Ok(HttpResponse::Ok().json(result))
}

pub async fn analyze_handler(
    _state: web::Data<AppState>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse> {
    log::debug!("POST /timetable/analyze: starting");
    let result = timetable_service::analyze(body.into_inner())?;
    log::debug!("POST /timetable/analyze: done, fitness={:.4}", result.fitness_score);
    Ok(HttpResponse::Ok().json(result))
}
