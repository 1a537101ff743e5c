use actix_web::web::{scope, ServiceConfig};
use actix_web::{HttpResponse, Responder};

use crate::routers::timetable_router::routers_timetable;

const API_V1: &str = "/api/v1";

pub fn all_routers(cfg: &mut ServiceConfig) {
    cfg.service(scope("/").route("/", actix_web::web::get().to(root_handler)));
    cfg.service(scope(API_V1).configure(routers_timetable));
}

async fn root_handler() -> impl Responder {
    HttpResponse::Ok().body("timetable-ga-engine")
}
