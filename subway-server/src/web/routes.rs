//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::{Distance, InvalidName, InvalidSection, LineId, Name, StationId};
use crate::service::ServiceError;
use crate::stations::StationError;

use super::dto::*;
use super::state::AppState;

/// A `201 Created` response with a `Location` header.
type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

fn created<T>(location: String, body: T) -> Created<T> {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(show_stations))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", post(create_line).get(show_lines))
        .route(
            "/lines/:id",
            get(show_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(remove_station),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<StationRequest>,
) -> Result<Created<StationResponse>, AppError> {
    let name = Name::parse(&req.name)?;
    let station = state.stations.create(name);
    Ok(created(
        format!("/stations/{}", station.id),
        StationResponse::from_station(&station),
    ))
}

async fn show_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state
        .stations
        .list()
        .iter()
        .map(StationResponse::from_station)
        .collect();
    Json(stations)
}

async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<StationId>,
) -> Result<StatusCode, AppError> {
    state.stations.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<LineRequest>,
) -> Result<Created<LineResponse>, AppError> {
    let name = Name::parse(&req.name)?;

    let line = match (req.up_station_id, req.down_station_id, req.distance) {
        (Some(up), Some(down), Some(distance)) => {
            let distance = Distance::new(distance)?;
            state
                .lines
                .create_line(name, req.color, up, down, distance)?
        }
        (None, None, None) => state.lines.create_empty_line(name, req.color),
        _ => {
            return Err(AppError::BadRequest {
                message: "upStationId, downStationId and distance must be given together"
                    .to_string(),
            });
        }
    };

    Ok(created(
        format!("/lines/{}", line.id()),
        LineResponse::from_line(&line),
    ))
}

async fn show_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    let lines = state
        .lines
        .show_lines()
        .iter()
        .map(LineResponse::from_line)
        .collect();
    Json(lines)
}

async fn show_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state.lines.show_line(id)?;
    Ok(Json(LineResponse::from_line(&line)))
}

async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Json(req): Json<LineUpdateRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let name = Name::parse(&req.name)?;
    let line = state.lines.update_line(id, name, req.color)?;
    Ok(Json(LineResponse::from_line(&line)))
}

async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
) -> Result<StatusCode, AppError> {
    state.lines.delete_line(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Json(req): Json<SectionRequest>,
) -> Result<Created<LineResponse>, AppError> {
    let distance = Distance::new(req.distance)?;
    let line = state
        .lines
        .add_section(id, req.up_station_id, req.down_station_id, distance)?;
    Ok(created(
        format!("/lines/{}", line.id()),
        LineResponse::from_line(&line),
    ))
}

async fn remove_station(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Query(query): Query<RemoveStationQuery>,
) -> Result<StatusCode, AppError> {
    state.lines.remove_station(id, query.station_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        if e.is_not_found() {
            AppError::NotFound {
                message: e.to_string(),
            }
        } else {
            AppError::BadRequest {
                message: e.to_string(),
            }
        }
    }
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl From<InvalidName> for AppError {
    fn from(e: InvalidName) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidSection> for AppError {
    fn from(e: InvalidSection) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
