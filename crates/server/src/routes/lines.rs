use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use service::line::{Line, LineInput};

use crate::{errors::JsonApiError, state::ServerState};

/// Request body for create and update.
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    pub name: String,
    pub color: String,
}

impl From<LineRequest> for LineInput {
    fn from(r: LineRequest) -> Self { LineInput { name: r.name, color: r.color } }
}

fn location(line: &Line) -> String {
    format!("/lines/{}", line.id)
}

#[utoipa::path(
    get, path = "/lines", tag = "lines",
    responses(
        (status = 200, description = "All lines ordered by id", body = [crate::openapi::LineResponseDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Line>>, JsonApiError> {
    Ok(Json(state.lines.list().await?))
}

#[utoipa::path(
    post, path = "/lines", tag = "lines",
    request_body = crate::openapi::LineRequestDoc,
    responses(
        (status = 201, description = "Created; Location points at the new line", body = crate::openapi::LineResponseDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<LineRequest>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let Json(input) = payload?;
    let line = state.lines.create(input.into()).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, location(&line))], Json(line)).into_response())
}

#[utoipa::path(
    get, path = "/lines/{id}", tag = "lines",
    params(("id" = i64, Path, description = "Line ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::LineResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Line>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.lines.get(id).await?))
}

#[utoipa::path(
    put, path = "/lines/{id}", tag = "lines",
    params(("id" = i64, Path, description = "Line ID")),
    request_body = crate::openapi::LineRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::LineResponseDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<LineRequest>, JsonRejection>,
) -> Result<Json<Line>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.lines.update(id, input.into()).await?))
}

#[utoipa::path(
    delete, path = "/lines/{id}", tag = "lines",
    params(("id" = i64, Path, description = "Line ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.lines.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
