//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use todo_list_backend::Trace;
use todo_list_backend::middleware::cors;
#[cfg(debug_assertions)]
use todo_list_backend::doc::ApiDoc;
use todo_list_backend::domain::ports::{
    DependencyHealthCheck, TodoItemsReadRepository, TodoItemsWriteRepository,
};
use todo_list_backend::domain::todo_items::TodoItemHandlers;
use todo_list_backend::inbound::http::health::{HealthState, live, readiness};
use todo_list_backend::inbound::http::state::HttpState;
use todo_list_backend::inbound::http::todo_items;
use todo_list_backend::outbound::memory::InMemoryTodoItemsRepository;
use todo_list_backend::outbound::persistence::{DatabaseHealthCheck, DieselTodoItemsRepository};

struct Adapters {
    read: Arc<dyn TodoItemsReadRepository>,
    write: Arc<dyn TodoItemsWriteRepository>,
    health: Vec<Arc<dyn DependencyHealthCheck>>,
}

fn build_adapters(config: &ServerConfig) -> Adapters {
    match &config.db_pool {
        Some(pool) => {
            info!("storing todo items in PostgreSQL");
            let repo = Arc::new(DieselTodoItemsRepository::new(pool.clone()));
            let database: Arc<dyn DependencyHealthCheck> =
                Arc::new(DatabaseHealthCheck::new(pool.clone()));
            Adapters {
                read: repo.clone(),
                write: repo,
                health: vec![database],
            }
        }
        None => {
            warn!("no database configured; todo items are kept in memory");
            let repo = Arc::new(InMemoryTodoItemsRepository::default());
            Adapters {
                read: repo.clone(),
                write: repo,
                health: Vec::new(),
            }
        }
    }
}

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
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors())
        .wrap(Trace)
        .configure(todo_items::configure)
        .service(readiness)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the Actix HTTP server.
///
/// Readiness flips to ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let adapters = build_adapters(&config);
    let handlers = TodoItemHandlers::new(adapters.read, adapters.write, Arc::new(DefaultClock));
    let http_state = web::Data::new(HttpState::new(handlers, config.environment));
    let health_state = web::Data::new(HealthState::new(adapters.health));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    info!(addr = %config.bind_addr, environment = %config.environment, "listening");
    health_state.mark_ready();
    Ok(server)
}
