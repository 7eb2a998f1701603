use axum::{routing::get, routing::post, Router};

use repository::Repository;
use service::{EventService, MeetupService, RegistrationService};
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;
use utoipauto::utoipauto;

pub mod create_meetup;
pub mod healthz;
pub mod meetup;
pub mod not_found;
pub mod registration;
mod request;
mod response;
mod util;

pub enum ApiError {
    BadRequest(Vec<String>),
    NotFound,
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    registrations: RegistrationService,
    events: EventService,
    meetups: MeetupService,
}

pub fn serve(repository: Repository) -> anyhow::Result<Router> {
    #[utoipauto(paths = "./libs/api/src")]
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "meetup-scheduler", description = "Meetup registration and enrollment API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let state = ApiState {
        registrations: RegistrationService::new(repository.registration),
        events: EventService::new(repository.event),
        meetups: MeetupService::new(repository.meetup),
    };

    let origins = ["http://localhost:3000".parse()?];

    // registrations
    let registration_router = Router::new()
        .route(
            "/",
            post(registration::create_registration)
                .get(registration::find_registrations),
        )
        .route(
            "/:id",
            get(registration::get_registration)
                .put(registration::update_registration)
                .delete(registration::delete_registration),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // events
    let create_meetup_router = Router::new()
        .route(
            "/",
            post(create_meetup::create_event).get(create_meetup::find_events),
        )
        .route(
            "/:id",
            get(create_meetup::get_event)
                .put(create_meetup::update_event)
                .delete(create_meetup::delete_event),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // enrollments
    let meetup_router = Router::new()
        .route("/", post(meetup::enroll).get(meetup::find_meetups))
        .route("/:id", get(meetup::get_meetup))
        .fallback(not_found::get_404)
        .with_state(state);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/api/registration", registration_router)
        .nest("/api/create-meetups", create_meetup_router)
        .nest("/api/meetups", meetup_router)
        .layer(CorsLayer::new().allow_origin(origins))
        .fallback(not_found::get_404);

    Ok(router)
}
