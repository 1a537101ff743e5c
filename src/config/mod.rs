pub mod application_conf;
pub mod logger;
pub mod state;
