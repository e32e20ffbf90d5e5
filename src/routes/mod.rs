use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, middleware::log_errors};

pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
}

impl RouteInfo {
    pub const fn new(method: &'static str, path: &'static str) -> Self {
        Self { method, path }
    }
}

// 路由表，供首页 sitemap 展示，需与 `router` 保持一致
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo::new("GET", "/"),
    RouteInfo::new("GET", "/user"),
    RouteInfo::new("POST", "/user"),
    RouteInfo::new("GET", "/user/{id}"),
    RouteInfo::new("DELETE", "/user/{id}"),
    RouteInfo::new("GET", "/user/{id}/favorite"),
    RouteInfo::new("GET", "/people"),
    RouteInfo::new("POST", "/people"),
    RouteInfo::new("GET", "/people/{id}"),
    RouteInfo::new("DELETE", "/people/{id}"),
    RouteInfo::new("GET", "/planet"),
    RouteInfo::new("POST", "/planet"),
    RouteInfo::new("GET", "/planet/{id}"),
    RouteInfo::new("DELETE", "/planet/{id}"),
    RouteInfo::new("GET", "/favorite"),
    RouteInfo::new("POST", "/favorite/people/{id}"),
    RouteInfo::new("DELETE", "/favorite/people/{id}"),
    RouteInfo::new("POST", "/favorite/planet/{id}"),
    RouteInfo::new("DELETE", "/favorite/planet/{id}"),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap::sitemap))
        // 用户
        .route("/user", get(user::list_users).post(user::create_user))
        .route("/user/{id}", get(user::get_user).delete(user::delete_user))
        .route("/user/{id}/favorite", get(favorite::list_user_favorites))
        // 人物
        .route("/people", get(people::list_people).post(people::create_person))
        .route(
            "/people/{id}",
            get(people::get_person).delete(people::delete_person),
        )
        // 星球
        .route("/planet", get(planet::list_planets).post(planet::create_planet))
        .route(
            "/planet/{id}",
            get(planet::get_planet).delete(planet::delete_planet),
        )
        // 收藏
        .route("/favorite", get(favorite::list_favorites))
        .route(
            "/favorite/people/{id}",
            post(favorite::add_favorite_people).delete(favorite::delete_favorite_people),
        )
        .route(
            "/favorite/planet/{id}",
            post(favorite::add_favorite_planet).delete(favorite::delete_favorite_planet),
        )
}

// 完整应用：路由、请求追踪、5xx 日志与 CORS
pub fn app(state: AppState) -> Router {
    router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(log_errors))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
