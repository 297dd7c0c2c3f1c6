//! Error → HTTP status mapping.
//!
//! | Error | Status |
//! |---|---|
//! | `NotFound` | 404 |
//! | `Transition` | 405 Method Not Allowed |
//! | `Validation` | 400 |
//! | `Store` | 500 |

use crate::employee_actor::EmployeeError;
use crate::order_actor::OrderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// A request failure, rendered as `{ "title": …, "detail": … }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub title: &'static str,
    pub detail: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "Not found",
            ApiError::MethodNotAllowed(_) => "Method not allowed",
            ApiError::BadRequest(_) => "Bad request",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::NotFound(e.to_string()),
            OrderError::Transition(_) => ApiError::MethodNotAllowed(e.to_string()),
            OrderError::Validation(_) => ApiError::BadRequest(e.to_string()),
            OrderError::Store(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(e: EmployeeError) -> Self {
        match e {
            EmployeeError::NotFound(_) => ApiError::NotFound(e.to_string()),
            EmployeeError::Validation(_) => ApiError::BadRequest(e.to_string()),
            EmployeeError::Store(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(%status, detail = %self, "Request failed");
        let body = ErrorResponse {
            title: self.title(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{Action, TransitionError};
    use crate::model::{EmployeeId, OrderId, Status};

    #[test]
    fn test_order_error_table() {
        let transition = OrderError::Transition(TransitionError {
            order_id: OrderId(4),
            attempted_action: Action::Complete,
            current_status: Status::Cancelled,
        });
        let cases = [
            (OrderError::NotFound(OrderId(4)), StatusCode::NOT_FOUND),
            (transition, StatusCode::METHOD_NOT_ALLOWED),
            (OrderError::Validation("blank".into()), StatusCode::BAD_REQUEST),
            (OrderError::Store("closed".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status_code(), status);
        }
    }

    #[test]
    fn test_transition_detail_names_action_and_status() {
        let api = ApiError::from(OrderError::Transition(TransitionError {
            order_id: OrderId(4),
            attempted_action: Action::Complete,
            current_status: Status::Cancelled,
        }));
        assert_eq!(api.title(), "Method not allowed");
        assert_eq!(api.to_string(), "cannot complete order 4 in status CANCELLED");
    }

    #[test]
    fn test_employee_not_found() {
        let api = ApiError::from(EmployeeError::NotFound(EmployeeId(99)));
        assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(api.to_string(), "Could not find employee 99");
    }
}
