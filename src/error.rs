use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

// 未被处理的失败，统一以 500 返回
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("missing field `{0}` in request body")]
    MissingField(&'static str),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!(error = %e, "Store operation failed"),
            AppError::MissingField(field) => {
                tracing::warn!(field = *field, "Request body is missing a field")
            }
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// 取出必填字段，缺失时返回 MissingField
pub fn require<T>(value: Option<T>, field: &'static str) -> AppResult<T> {
    value.ok_or(AppError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_a_server_error() {
        let response = AppError::MissingField("email").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn row_not_found_is_a_server_error() {
        let response = AppError::from(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn require_reports_the_field_name() {
        let err = require::<String>(None, "climate").unwrap_err();
        assert_eq!(err.to_string(), "missing field `climate` in request body");
        assert_eq!(require(Some(3), "id").unwrap(), 3);
    }
}
