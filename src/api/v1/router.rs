use super::error::recover_error;
use super::handler;
use crate::api::v1::handler::ResolveQuery;
use crate::server::Server;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let list = warp::get()
        .and(warp::path("routes"))
        .and(warp::path::end())
        .and(with(server.navigation_service.clone()))
        .and_then(handler::list_routes);

    let resolve = warp::get()
        .and(warp::path("resolve"))
        .and(warp::path::end())
        .and(warp::query::<ResolveQuery>())
        .and(with(server.navigation_service.clone()))
        .and_then(handler::resolve_route);

    list.or(resolve)
}

/// Everything under `/api`. Rejections are recovered here so an unknown API
/// path answers with a JSON error instead of reaching the page shell.
pub fn scoped(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("api").and(
        warp::path("v1")
            .and(routes(server))
            .recover(recover_error),
    )
}

pub(crate) fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::pages;
    use serde_json::Value;
    use warp::http::StatusCode;

    fn api(server: Arc<Server>) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        scoped(server)
    }

    fn body_json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn lists_routes_with_names() {
        let filter = api(Arc::new(Server::for_tests()));
        let res = warp::test::request()
            .method("GET")
            .path("/api/v1/routes")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res.body());
        assert_eq!(json["success"], true);
        let routes = json["data"].as_array().unwrap();
        assert_eq!(routes.len(), 34);
        assert_eq!(routes[0]["path"], "/manager/home");
        assert_eq!(routes[0]["name"], "系统首页");
        assert_eq!(routes[0]["section"], "/manager");
        let front_home = routes.iter().find(|r| r["path"] == "/front/home").unwrap();
        assert!(front_home["name"].is_null());
    }

    #[tokio::test]
    async fn resolves_single_step() {
        let filter = api(Arc::new(Server::for_tests()));
        let res = warp::test::request()
            .path("/api/v1/resolve?path=/")
            .reply(&filter)
            .await;
        let json = body_json(res.body());
        assert_eq!(json["data"]["resolution"]["kind"], "redirect");
        assert_eq!(json["data"]["resolution"]["to"], "/manager/home");

        let res = warp::test::request()
            .path("/api/v1/resolve?path=/front/literature")
            .reply(&filter)
            .await;
        let json = body_json(res.body());
        assert_eq!(json["data"]["resolution"]["kind"], "matched");
        assert_eq!(json["data"]["resolution"]["view"], "front/MedicalLiterature");
        assert_eq!(json["data"]["resolution"]["layout"], "Front");
    }

    #[tokio::test]
    async fn missing_query_is_rejected() {
        let filter = api(Arc::new(Server::for_tests()));
        let res = warp::test::request()
            .path("/api/v1/resolve")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res.body())["success"], false);
    }

    #[tokio::test]
    async fn unknown_api_path_answers_json_before_pages() {
        let server = Arc::new(Server::for_tests());
        let filter = scoped(server.clone())
            .or(pages(server))
            .recover(recover_error);
        for path in ["/api/v1/nope", "/api/other"] {
            let res = warp::test::request().path(path).reply(&filter).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
            let json = body_json(res.body());
            assert_eq!(json["success"], false);
            assert_eq!(json["error"]["code"], "RouteNotFound");
        }

        let res = warp::test::request().path("/apis").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    }
}
