use crate::api::v1::handler::ApiResponse;
use crate::application_port::NavigationError;
use crate::domain::RouteTableError;
use serde::Serialize;
use std::convert::Infallible;
use thiserror::Error;
use tracing::warn;
use warp::http::StatusCode;
use warp::{Rejection, reject};

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (code, message) = if let Some(err) = err.find::<ApiErrorCode>() {
        (err.clone(), err.to_string())
    } else if let Some(invalid) = err.find::<reject::InvalidQuery>() {
        (ApiErrorCode::InvalidRequest, invalid.to_string())
    } else if err.is_not_found() {
        (ApiErrorCode::RouteNotFound, ApiErrorCode::RouteNotFound.to_string())
    } else {
        (ApiErrorCode::InternalError, format!("Unhandled error: {:?}", err))
    };
    let status = code.status();
    let json = warp::reply::json(&ApiResponse::<()>::err(code, message));
    Ok(warp::reply::with_status(json, status))
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Error, Serialize)]
pub enum ApiErrorCode {
    #[error("No route matches the requested path")]
    RouteNotFound,
    #[error("Invalid request")]
    InvalidRequest,
    #[error("View could not be loaded")]
    ViewUnavailable,
    #[error("Internal error")]
    InternalError,
}

impl ApiErrorCode {
    pub fn internal<E: std::fmt::Display>(error: E) -> ApiErrorCode {
        warn!("Internal error: {}", error);
        ApiErrorCode::InternalError
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::RouteNotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiErrorCode::ViewUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl reject::Reject for ApiErrorCode {}

impl From<NavigationError> for ApiErrorCode {
    fn from(error: NavigationError) -> Self {
        match error {
            NavigationError::Routing(RouteTableError::NoRoute(_)) => ApiErrorCode::RouteNotFound,
            NavigationError::Routing(e) => ApiErrorCode::internal(e),
            NavigationError::View(e) => {
                warn!("{}", e);
                ApiErrorCode::ViewUnavailable
            }
        }
    }
}
