//! The `{ "data": ... }` envelope every successful API response is wrapped in.
//!
//! Errors use a different shape (`{ "error", "code" }`, see
//! [`AppError`](crate::error::AppError)), so clients can branch on the
//! presence of `data`.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `201 Created` with the new resource in the envelope.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<DataResponse<T>>) {
    (StatusCode::CREATED, Json(DataResponse { data }))
}
