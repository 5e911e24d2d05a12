use crate::application_port::NavigationService;
use crate::domain_model::Resolution;
use crate::api::v1::error::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(code: ApiErrorCode, message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
        }
    }
}

pub async fn list_routes(
    navigation_service: Arc<dyn NavigationService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let routes = navigation_service.routes();
    Ok(warp::reply::json(&ApiResponse::ok(routes)))
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub path: String,
    pub resolution: Resolution,
}

pub async fn resolve_route(
    query: ResolveQuery,
    navigation_service: Arc<dyn NavigationService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let resolution = navigation_service.resolve(&query.path);
    let response = ResolveResponse {
        path: query.path,
        resolution,
    };
    Ok(warp::reply::json(&ApiResponse::ok(response)))
}
