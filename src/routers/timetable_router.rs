use actix_web::web::{self, ServiceConfig};

use crate::handlers::timetable_handler::{analyze_handler, generate_handler, optimize_handler};

pub fn routers_timetable(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/timetable")
            .route("/generate", web::post().to(generate_handler))
            .route("/optimize", web::post().to(optimize_handler))
            .route("/analyze", web::post().to(analyze_handler)),
    );
}
