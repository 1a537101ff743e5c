use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use timetable_ga_engine::config::application_conf::AppConfig;
use timetable_ga_engine::config::state::AppState;
use timetable_ga_engine::{config, routers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    config::logger::init();

    let app_config = AppConfig::from_env().unwrap_or_else(|err| {
        log::warn!("falling back to default configuration: {err}");
        AppConfig {
            server: Default::default(),
            ga_defaults: Default::default(),
            json_payload_limit_bytes: 2 * 1024 * 1024,
        }
    });

    let host = app_config.server.host.clone();
    let port = app_config.server.port;
    let payload_limit = app_config.json_payload_limit_bytes;
    let state = AppState::new(app_config);

    log::info!("timetable-ga-engine listening on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().limit(payload_limit))
            .wrap(Cors::permissive())
            .configure(routers::all_routers::all_routers)
    })
    .bind((host, port))?
    .run()
    .await
}
