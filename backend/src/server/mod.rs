//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::content::{
    list_crisis_lines, list_events, list_resource_collections,
};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::likes::like_question;
use backend::inbound::http::questions::{create_question, list_questions};
use backend::inbound::http::replies::{create_reply, list_replies};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::tokens::mint_anon_token;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(list_questions)
        .service(create_question)
        .service(list_replies)
        .service(create_reply)
        .service(like_question)
        .service(mint_anon_token)
        .service(list_crisis_lines)
        .service(list_resource_collections)
        .service(list_events);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

#[cfg(feature = "metrics")]
fn make_metrics() -> actix_web_prom::PrometheusMetrics {
    PrometheusMetricsBuilder::new("safespace")
        .endpoint("/metrics")
        .build()
        .expect("configure Prometheus metrics")
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is
///   initialised.
/// - `config`: pre-built [`ServerConfig`] with binding and optional pool.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        db_pool: _,
    } = config;

    #[cfg(feature = "metrics")]
    let prometheus = make_metrics();

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
