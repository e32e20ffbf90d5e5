use axum::response::Html;

use super::{ROUTES, RouteInfo};

pub async fn sitemap() -> Html<String> {
    Html(render(ROUTES))
}

// 渲染路由表，无参数的 GET 路由渲染为链接
pub fn render(routes: &[RouteInfo]) -> String {
    let mut links = String::new();
    let mut others = String::new();

    for route in routes {
        if route.method == "GET" && !route.path.contains('{') {
            if route.path != "/" {
                links.push_str(&format!(
                    "<li><a href=\"{path}\">{path}</a></li>",
                    path = route.path
                ));
            }
        } else {
            others.push_str(&format!(
                "<li><code>{} {}</code></li>",
                route.method, route.path
            ));
        }
    }

    format!(
        "<div style=\"text-align: center;\">\
         <h1>Welcome to the Holonet API</h1>\
         <p>Specify a real endpoint path like:</p>\
         <ul style=\"text-align: left;\">{links}</ul>\
         <p>Other endpoints:</p>\
         <ul style=\"text-align: left;\">{others}</ul>\
         </div>"
    )
}
