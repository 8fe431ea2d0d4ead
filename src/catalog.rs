use axum::Router;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;

pub mod command;
pub mod controller;
pub mod domain;
pub mod factory;

/// Builds the catalog HTTP application with a freshly seeded store.
pub fn app(config: &Configuration) -> Router {
    let svc = factory::create_catalog_service(config);
    controller::build_router(AppState::new(config, svc))
}
