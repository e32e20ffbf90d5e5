use axum::{
    body::{Body, to_bytes},
    http::{Request, header::CONTENT_LENGTH},
    middleware::Next,
    response::Response,
};
use tracing::error;

// 日志中最多记录的响应体字节数，响应本身保持完整
const MAX_LOGGED_BODY: usize = 4096;

// 记录所有 5xx 响应的请求行与响应体
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to read error response body for {} {}: {}", method, uri, e);
            parts.headers.remove(CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let logged = &bytes[..bytes.len().min(MAX_LOGGED_BODY)];
    let suffix = if bytes.len() > MAX_LOGGED_BODY { "..." } else { "" };
    error!(
        "Server error on {} {} - Status: {}, Body: {}{}",
        method,
        uri,
        parts.status,
        String::from_utf8_lossy(logged),
        suffix
    );

    // 重新组装响应体
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
