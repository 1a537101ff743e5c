use env_logger::Env;
use std::env;

/// Initialize logging for the application.
///
/// Usage:
/// ```rust
/// config::logger::init();
/// ```
pub fn init() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info,actix_web=info");
    }

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            let ts = buf.timestamp_seconds();
            let level = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "[{}] [{}] {}", ts, level, record.args())
        })
        .init();

    log::info!("logger initialized");
}
