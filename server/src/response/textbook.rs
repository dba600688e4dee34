use application::transfer::TextbookDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct TextbookResponse {
    id: String,
    title: String,
    author: String,
    year: String,
    price: String,
}

impl IntoResponse for TextbookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    exists: bool,
}

impl IntoResponse for ExistsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

/// Confirmation returned by mutating operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: String,
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct TextbookPresenter;

impl Exhaust<TextbookDto> for TextbookPresenter {
    type To = TextbookResponse;
    fn emit(&self, output: TextbookDto) -> Self::To {
        let TextbookDto {
            id,
            title,
            author,
            year,
            price,
        } = output;
        TextbookResponse {
            id,
            title,
            author,
            year,
            price,
        }
    }
}

impl Exhaust<bool> for TextbookPresenter {
    type To = ExistsResponse;
    fn emit(&self, output: bool) -> Self::To {
        ExistsResponse { exists: output }
    }
}

impl Exhaust<String> for TextbookPresenter {
    type To = MessageResponse;
    fn emit(&self, output: String) -> Self::To {
        MessageResponse { message: output }
    }
}
