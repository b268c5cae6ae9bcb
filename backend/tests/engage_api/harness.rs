//! Server harness and shared world for the HTTP behaviour suite.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The server is wired the same way as
//! the binary, over the built-in example dataset. The `WorldFixture` stops the
//! server even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use engage_local::domain::CommunityService;
use engage_local::example_data::load_community_repository;
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
use engage_local::settings::ServerSettings;
use engage_local::{ErrorShield, Trace};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub(crate) struct ApiWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) health: web::Data<HealthState>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_cache_control: Option<String>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<ApiWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(&self.world);
    }
}

fn shutdown(world: &SharedWorld) {
    // The future must not borrow the world; `block_on` runs while it is held.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn build_http_state() -> HttpState {
    let repository =
        load_community_repository(&ServerSettings::default()).expect("built-in dataset loads");
    let community = CommunityService::new(Arc::new(repository));
    HttpState::new(Arc::new(community), Arc::new(DefaultClock))
}

async fn spawn_api_server(
    http_state: HttpState,
    health_state: web::Data<HealthState>,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let http_data = web::Data::new(http_state);
    let server_health = health_state.clone();

    let server = HttpServer::new(move || {
        let api = web::scope("/api/v1")
            .service(list_projects)
            .service(list_challenges)
            .service(list_forum_posts)
            .service(user_progress)
            .service(user_stats)
            .service(user_notifications);

        App::new()
            .app_data(http_data.clone())
            .app_data(server_health.clone())
            .service(index)
            .service(health)
            .service(ready)
            .service(live)
            .service(placeholder_projects)
            .service(placeholder_challenges)
            .service(placeholder_users)
            .service(api)
            .default_service(web::to(route_not_found))
            .wrap(ErrorShield::new(false))
            .wrap(Trace)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    health_state.mark_ready();

    Ok((format!("http://{addr}"), handle))
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    (runtime, local)
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let health_state = web::Data::new(HealthState::new());
    let http_state = build_http_state();

    let (base_url, server) = local
        .block_on(&runtime, spawn_api_server(http_state, health_state.clone()))
        .expect("server should start");

    let world = Rc::new(RefCell::new(ApiWorld {
        runtime,
        local,
        base_url,
        server,
        health: health_state,
        last_status: None,
        last_body: None,
        last_cache_control: None,
        last_trace_id: None,
    }));

    WorldFixture { world }
}
