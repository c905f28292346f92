//! Service entry point: wires the REST endpoints, health probes, and OpenAPI
//! docs.

use actix_web::{web, App, HttpServer};
use std::env;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use example_api::api;
use example_api::api::health::{live, ready, HealthState};
use example_api::doc::ApiDoc;
use example_api::Trace;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flip below still sees it.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_health_state.clone())
            .wrap(Trace)
            .configure(api::configure)
            .service(ready)
            .service(live)
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&bind_addr)?;

    health_state.mark_ready();
    server.run().await
}
