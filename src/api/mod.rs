//! REST API modules.

pub mod error;
pub mod health;
pub mod products;
pub mod users;

pub use error::{project, ApiResult};

use actix_web::web;

/// Register the resource routes plus the uniform fallback for unmatched
/// paths.
///
/// Health probes are wired separately because they carry
/// [`health::HealthState`] app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::list_users)
        .service(products::list_products)
        .default_service(web::route().to(error::fallback));
}
