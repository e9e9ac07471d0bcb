// API module entry
// School activity sign-up API

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::http;
use crate::http::query::percent_decode;
use crate::logger;

// Re-export public types
pub use response::*;
pub use types::{ErrorResponse, MessageResponse};

/// API route handler
///
/// Dispatches to handler functions based on request path and method.
/// Activity names arrive percent-encoded in the path and may contain
/// spaces once decoded.
pub async fn handle_api(
    method: &Method,
    path: &str,
    query: Option<&str>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if path == "/activities" {
        return match *method {
            Method::GET | Method::HEAD => handlers::handle_list_activities(state).await,
            _ => Ok(http::build_405_response("GET, HEAD, OPTIONS")),
        };
    }

    match parse_activity_action(path) {
        Some((activity, "signup")) if *method == Method::POST => {
            let activity = percent_decode(activity);
            handlers::handle_signup(state, &activity, query).await
        }
        Some((activity, "unregister")) if *method == Method::POST => {
            let activity = percent_decode(activity);
            handlers::handle_unregister(state, &activity, query).await
        }
        Some((_, "signup" | "unregister")) => Ok(http::build_405_response("POST, OPTIONS")),
        _ => {
            logger::log_api_request(method.as_str(), path, 404);
            not_found()
        }
    }
}

/// Split `/activities/{name}/{action}` into its encoded name and action
fn parse_activity_action(path: &str) -> Option<(&str, &str)> {
    let rest = path.strip_prefix("/activities/")?;
    let (activity, action) = rest.rsplit_once('/')?;
    if activity.is_empty() {
        return None;
    }
    Some((activity, action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn test_state() -> Arc<AppState> {
        let config = Config::load_from("missing-config-file").unwrap();
        Arc::new(AppState::new(config))
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_parse_activity_action() {
        assert_eq!(
            parse_activity_action("/activities/Chess%20Club/signup"),
            Some(("Chess%20Club", "signup"))
        );
        assert_eq!(
            parse_activity_action("/activities/Gym Class/unregister"),
            Some(("Gym Class", "unregister"))
        );
        assert_eq!(parse_activity_action("/activities"), None);
        assert_eq!(parse_activity_action("/activities/"), None);
        assert_eq!(parse_activity_action("/activities/Chess%20Club"), None);
        assert_eq!(parse_activity_action("/activities//signup"), None);
    }

    #[tokio::test]
    async fn test_list_dispatch() {
        let state = test_state();
        let response = handle_api(&Method::GET, "/activities", None, state)
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let json = body_json(response).await;
        assert!(json.get("Chess Club").is_some());
    }

    #[tokio::test]
    async fn test_list_rejects_post() {
        let state = test_state();
        let response = handle_api(&Method::POST, "/activities", None, state)
            .await
            .unwrap();
        assert_eq!(response.status(), 405);
        assert_eq!(
            response.headers().get("Allow").unwrap(),
            "GET, HEAD, OPTIONS"
        );
    }

    #[tokio::test]
    async fn test_signup_dispatch_decodes_name() {
        let state = test_state();
        let response = handle_api(
            &Method::POST,
            "/activities/Art%20Studio/signup",
            Some("email=painter%40mergington.edu"),
            Arc::clone(&state),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), 200);

        let snapshot = state.roster.snapshot().await;
        assert!(snapshot["Art Studio"]
            .participants
            .contains(&"painter@mergington.edu".to_string()));
    }

    #[tokio::test]
    async fn test_signup_requires_post() {
        let state = test_state();
        let response = handle_api(
            &Method::GET,
            "/activities/Chess%20Club/signup",
            Some("email=a%40b"),
            state,
        )
        .await
        .unwrap();
        assert_eq!(response.status(), 405);
        assert_eq!(response.headers().get("Allow").unwrap(), "POST, OPTIONS");
    }

    #[tokio::test]
    async fn test_unknown_api_path() {
        let state = test_state();
        let response = handle_api(&Method::GET, "/activities/Chess%20Club", None, state)
            .await
            .unwrap();
        assert_eq!(response.status(), 404);

        let json = body_json(response).await;
        assert_eq!(json["detail"], "Not Found");
    }

    #[tokio::test]
    async fn test_unregister_dispatch() {
        let state = test_state();

        handle_api(
            &Method::POST,
            "/activities/Tennis%20Club/signup",
            Some("email=t%40mergington.edu"),
            Arc::clone(&state),
        )
        .await
        .unwrap();

        let response = handle_api(
            &Method::POST,
            "/activities/Tennis%20Club/unregister",
            Some("email=t%40mergington.edu"),
            Arc::clone(&state),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), 200);

        let snapshot = state.roster.snapshot().await;
        assert!(!snapshot["Tennis Club"]
            .participants
            .contains(&"t@mergington.edu".to_string()));
    }
}
