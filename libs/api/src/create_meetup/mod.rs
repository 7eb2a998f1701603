use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::prelude::*;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, ErrorListResp, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::{EventForm, GetEventsParam};
use self::response::{EventResp, GetEventsResp};

/// Create an event
#[utoipa::path(
    post,
    path = "/api/create-meetups",
    request_body = EventForm,
    responses(
        (status = 201, description = "Event created", body = EventResp),
        (status = 400, description = "Validation failure or duplicate event name", body = ErrorListResp)
    )
)]
pub async fn create_event(
    State(state): State<ApiState>,
    Json(form): Json<EventForm>,
) -> ApiResponse<(StatusCode, Json<EventResp>)> {
    form.validate().map_err(ApiError::BadRequest)?;

    let created = state
        .events
        .save_new(form.into_entity())
        .await
        .into_response()?;

    Ok((StatusCode::CREATED, Json(EventResp::from(created))))
}

/// Fetch an event by id
#[utoipa::path(
    get,
    path = "/api/create-meetups/{id}",
    responses(
        (status = 200, description = "Get event successfully", body = EventResp),
        (status = 404, description = "No event with that id")
    ),
    params(
        ("id", description = "event id"),
    )
)]
pub async fn get_event(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<EventResp>> {
    let event = state.events.get_by_id(id).await.into_response()?;

    let Some(event) = event else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(EventResp::from(event)))
}

/// Update an event's name, date, link and guest speaker
#[utoipa::path(
    put,
    path = "/api/create-meetups/{id}",
    request_body = EventForm,
    responses(
        (status = 200, description = "Update event successfully", body = EventResp),
        (status = 404, description = "No event with that id")
    ),
    params(
        ("id", description = "event id"),
    )
)]
pub async fn update_event(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Json(form): Json<EventForm>,
) -> ApiResponse<Json<EventResp>> {
    form.validate().map_err(ApiError::BadRequest)?;

    let event = state.events.get_by_id(id).await.into_response()?;

    let Some(mut event) = event else {
        return Err(ApiError::NotFound);
    };

    event.name = form.event;
    if let Some(event_date) = form.event_date {
        event.event_date = event_date;
    }
    event.link = form.link_meetup;
    event.guest_speaker = form.guest_speaker;

    let updated = state.events.update(event).await.into_response()?;

    Ok(Json(EventResp::from(updated)))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/api/create-meetups/{id}",
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "No event with that id")
    ),
    params(
        ("id", description = "event id"),
    )
)]
pub async fn delete_event(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<StatusCode> {
    let event = state.events.get_by_id(id).await.into_response()?;

    let Some(event) = event else {
        return Err(ApiError::NotFound);
    };

    state.events.delete(event).await.into_response()?;

    Ok(StatusCode::NO_CONTENT)
}

/// Paged, example-filtered event search
#[utoipa::path(
    get,
    path = "/api/create-meetups",
    responses(
        (status = 200, description = "List events successfully", body = GetEventsResp)
    ),
    params(
        GetEventsParam
    )
)]
pub async fn find_events(
    State(state): State<ApiState>,
    Query(params): Query<GetEventsParam>,
) -> ApiResponse<Json<GetEventsResp>> {
    let filter = EventFilter {
        name: params.event,
        hosted_by: params.hosted_by,
        guest_speaker: params.guest_speaker,
    };

    let (events, total) = state
        .events
        .find_all(&filter, params.pagination.page(), params.pagination.limit())
        .await
        .into_response()?;

    Ok(Json(GetEventsResp {
        content: events.into_iter().map(EventResp::from).collect(),
        page: params.pagination.page(),
        limit: params.pagination.limit(),
        total_elements: total,
    }))
}
