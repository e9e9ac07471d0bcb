//! rosterd — activity sign-up API for Mergington High School
//!
//! A single-process HTTP service over an in-memory activity roster:
//! - `GET /activities` lists every activity with its participant roster
//! - `POST /activities/{name}/signup?email=...` registers a student
//! - `POST /activities/{name}/unregister?email=...` removes a student
//! - `GET /` redirects to the static sign-up page under `/static/`

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod roster;
pub mod server;
