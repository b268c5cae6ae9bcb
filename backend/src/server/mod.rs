//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::body::{BoxBody, EitherBody};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use engage_local::doc::ApiDoc;
use engage_local::domain::CommunityService;
use engage_local::inbound::http::community::{
    list_challenges, list_forum_posts, list_projects, user_notifications, user_progress,
    user_stats,
};
use engage_local::inbound::http::health::{HealthState, health, live, ready};
use engage_local::inbound::http::not_found::route_not_found;
use engage_local::inbound::http::root::{
    index, placeholder_challenges, placeholder_projects, placeholder_users,
};
use engage_local::inbound::http::state::HttpState;
use engage_local::outbound::example_dataset::ExampleDatasetRepository;
use engage_local::{ErrorShield, Trace};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    expose_details: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        expose_details,
    } = deps;

    let api = web::scope("/api/v1")
        .service(list_projects)
        .service(list_challenges)
        .service(list_forum_posts)
        .service(user_progress)
        .service(user_stats)
        .service(user_notifications);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(index)
        .service(health)
        .service(ready)
        .service(live)
        .service(placeholder_projects)
        .service(placeholder_challenges)
        .service(placeholder_users)
        .service(api);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(route_not_found))
        .wrap(ErrorShield::new(expose_details))
        .wrap(Trace)
}

/// Construct an Actix HTTP server over the example dataset.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `repository`: community records loaded at startup.
/// - `config`: pre-built [`ServerConfig`] with the bind address and environment.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener. Signal handling
/// is disabled; the caller owns shutdown through the server handle.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    repository: ExampleDatasetRepository,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let community = CommunityService::new(Arc::new(repository));
    let http_state = web::Data::new(HttpState::new(Arc::new(community), Arc::new(DefaultClock)));
    let expose_details = config.environment.exposes_error_details();
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            expose_details,
        })
    })
    .disable_signals()
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
