use crate::api::v1::{ApiErrorCode, with};
use crate::application_port::{NavigationService, Page};
use crate::domain_model::{OUTLET, Resolution};
use crate::logger::*;
use crate::server::Server;
use nanoid::nanoid;
use std::sync::Arc;
use warp::http::Uri;
use warp::path::FullPath;
use warp::{Filter, Reply, reject};

/// Every GET not claimed by the API renders a portal page.
pub fn pages(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::get()
        .and(warp::path::full())
        .and(with(server.navigation_service.clone()))
        .and_then(serve_page)
}

pub async fn serve_page(
    path: FullPath,
    navigation_service: Arc<dyn NavigationService>,
) -> Result<warp::reply::Response, warp::Rejection> {
    let request_id = nanoid!(10);
    debug!(%request_id, path = path.as_str(), "page request");

    match navigation_service.resolve(path.as_str()) {
        // Redirects go back to the browser so its address bar follows.
        Resolution::Redirect { to, .. } => {
            let uri: Uri = to
                .parse()
                .map_err(ApiErrorCode::internal)
                .map_err(reject::custom)?;
            Ok(warp::redirect::temporary(uri).into_response())
        }
        Resolution::NotFound { .. } => Err(reject::custom(ApiErrorCode::RouteNotFound)),
        Resolution::Matched(_) => {
            let page = navigation_service
                .navigate(path.as_str())
                .await
                .map_err(ApiErrorCode::from)
                .map_err(reject::custom)?;
            info!(%request_id, route = %page.route.path, view = %page.view.view, "page rendered");
            Ok(warp::reply::html(render_page(&page)).into_response())
        }
    }
}

/// Places the view inside its section layout and wraps the result in a
/// document titled with the route name.
pub fn render_page(page: &Page) -> String {
    let body = match &page.layout {
        Some(layout) if layout.markup.contains(OUTLET) => {
            layout.markup.replacen(OUTLET, &page.view.markup, 1)
        }
        Some(layout) => format!("{}{}", layout.markup, page.view.markup),
        None => page.view.markup.clone(),
    };
    let title = escape_html(page.route.name.as_deref().unwrap_or(&page.route.path));
    format!(
        "<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\" />\n  <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::v1::recover_error;
    use crate::domain_model::{RouteMatch, ViewModule, ViewRef};
    use warp::http::{StatusCode, header};

    fn module(view: &str, markup: &str) -> Arc<ViewModule> {
        Arc::new(ViewModule {
            view: ViewRef::new(view),
            markup: markup.to_string(),
        })
    }

    fn page(name: Option<&str>, layout: Option<Arc<ViewModule>>) -> Page {
        Page {
            requested: "/x".to_string(),
            route: RouteMatch {
                path: "/x".to_string(),
                name: name.map(str::to_string),
                view: ViewRef::new("X"),
                layout: None,
                section: None,
            },
            redirected_from: Vec::new(),
            layout,
            view: module("X", "<p>x</p>"),
        }
    }

    #[test]
    fn view_fills_layout_outlet() {
        let layout = module("L", "<nav></nav><main>{{outlet}}</main>");
        let html = render_page(&page(Some("Doctors"), Some(layout)));
        assert!(html.contains("<nav></nav><main><p>x</p></main>"));
        assert!(html.contains("<title>Doctors</title>"));
    }

    #[test]
    fn view_is_appended_without_outlet() {
        let html = render_page(&page(None, Some(module("L", "<nav></nav>"))));
        assert!(html.contains("<nav></nav><p>x</p>"));
        assert!(html.contains("<title>/x</title>"));
    }

    #[test]
    fn title_is_escaped() {
        let html = render_page(&page(Some("<b>&</b>"), None));
        assert!(html.contains("<title>&lt;b&gt;&amp;&lt;/b&gt;</title>"));
    }

    #[tokio::test]
    async fn serves_page_in_section_layout() {
        let filter = pages(Arc::new(Server::for_tests())).recover(recover_error);
        let res = warp::test::request()
            .path("/manager/home")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let html = String::from_utf8(res.body().to_vec()).unwrap();
        assert!(html.contains("<title>系统首页</title>"));
        assert!(html.contains("data-layout=\"Manager\""));
        assert!(html.contains("<section data-view=\"manager/Home\"></section>"));
    }

    #[tokio::test]
    async fn root_and_unknown_paths_redirect() {
        let filter = pages(Arc::new(Server::for_tests())).recover(recover_error);
        for (path, location) in [("/", "/manager/home"), ("/nonexistent", "/404"), ("/manager", "/404")] {
            let res = warp::test::request().path(path).reply(&filter).await;
            assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
            assert_eq!(res.headers()[header::LOCATION], location, "{path}");
        }
    }

    #[tokio::test]
    async fn not_found_page_renders() {
        let filter = pages(Arc::new(Server::for_tests())).recover(recover_error);
        let res = warp::test::request().path("/404").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::OK);
        let html = String::from_utf8(res.body().to_vec()).unwrap();
        assert!(html.contains("data-view=\"404\""));
    }
}
