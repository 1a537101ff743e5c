pub mod config;
pub mod domain;
pub mod errors;
pub mod ga;
pub mod handlers;
pub mod index;
pub mod models;
pub mod routers;
pub mod services;
