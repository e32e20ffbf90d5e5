use config::Config;
use sqlx::AnyPool;

pub mod common;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;

pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub config: Config,
}
