use axum::extract::Request;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Request headers browsers are allowed to send cross-origin.
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Permissive CORS in the exact shape the clients expect: every response
/// carries the allow headers, and a pre-flight OPTIONS request is answered
/// directly with a plain `ok` body instead of reaching a route handler.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return decorate("ok".into_response());
    }

    decorate(next.run(request).await)
}

fn decorate(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}
