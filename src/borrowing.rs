use axum::Router;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub mod availability;
pub mod command;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

/// Builds the borrowing HTTP application. Fails if the availability checker cannot be built.
pub fn app(config: &Configuration) -> LibraryResult<Router> {
    let svc = factory::create_borrowing_service(config)?;
    Ok(controller::build_router(AppState::new(config, svc)))
}
