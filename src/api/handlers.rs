// Sign-up API handlers module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use super::response::{error_response, json_response, roster_error_response};
use super::types::MessageResponse;
use crate::config::AppState;
use crate::http::query::query_param;
use crate::logger;

/// List every activity with its current participants
pub async fn handle_list_activities(
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let activities = state.roster.snapshot().await;
    logger::log_api_request("GET", "/activities", 200);
    json_response(StatusCode::OK, &activities)
}

/// Sign a student up for an activity
///
/// `activity` is the percent-decoded name from the path; the student
/// email comes from the `email` query parameter.
pub async fn handle_signup(
    state: Arc<AppState>,
    activity: &str,
    query: Option<&str>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = format!("/activities/{activity}/signup");

    let Some(email) = query_param(query, "email") else {
        logger::log_api_request("POST", &path, 400);
        return error_response(StatusCode::BAD_REQUEST, "Missing email query parameter");
    };

    match state.roster.signup(activity, &email).await {
        Ok(()) => {
            logger::log_api_request("POST", &path, 200);
            json_response(
                StatusCode::OK,
                &MessageResponse {
                    message: format!("Signed up {email} for {activity}"),
                },
            )
        }
        Err(e) => {
            logger::log_api_request("POST", &path, roster_error_status(&e));
            roster_error_response(&e)
        }
    }
}

/// Remove a student from an activity
pub async fn handle_unregister(
    state: Arc<AppState>,
    activity: &str,
    query: Option<&str>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = format!("/activities/{activity}/unregister");

    let Some(email) = query_param(query, "email") else {
        logger::log_api_request("POST", &path, 400);
        return error_response(StatusCode::BAD_REQUEST, "Missing email query parameter");
    };

    match state.roster.unregister(activity, &email).await {
        Ok(()) => {
            logger::log_api_request("POST", &path, 200);
            json_response(
                StatusCode::OK,
                &MessageResponse {
                    message: format!("Unregistered {email} from {activity}"),
                },
            )
        }
        Err(e) => {
            logger::log_api_request("POST", &path, roster_error_status(&e));
            roster_error_response(&e)
        }
    }
}

fn roster_error_status(error: &crate::roster::RosterError) -> u16 {
    match error {
        crate::roster::RosterError::UnknownActivity => 404,
        _ => 400,
    }
}
