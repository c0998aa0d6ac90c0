//! HTTP API for managing static host records.
//!
//! Every endpoint takes and returns JSON. Endpoints other than `/login` and `/ping` require an
//! `Authorization: Bearer <token>` header carrying a token from `/login`. A missing or
//! malformed header is answered with HTTP 401 and `{"error":"Unauthorized"}`; a token with a bad
//! signature or past its expiry with HTTP 401 and `{"error":"Invalid token"}`.
//!
//! # API Endpoints
//!
//! ## `/login` (POST)
//!
//!   Expects `{"username": "admin", "password": "..."}` and checks it against the
//!   [`Config::users_path`][crate::config::Config::users_path] file. Returns
//!   `{"token": "..."}`, or HTTP 401 and `{"error":"invalid credentials"}`. Tokens are valid for
//!   [`Config::token_ttl`][crate::config::Config::token_ttl] (one hour by default).
//!
//! ## `/ping` (GET)
//!
//!   Returns HTTP 200 (OK) and `{"message":"Pong!"}`. No authentication.
//!
//! ## `/list` (GET)
//!
//!   Returns every host record:
//!
//!   ```json
//!   { "success": true, "hosts": [ { "host": "nas.lan", "ip": "192.168.1.20" } ] }
//!   ```
//!
//! ## `/add` (POST)
//!
//!   Expects `{"host": "nas.lan", "ip": "192.168.1.20"}`. Checks, in order, that `host` and
//!   `ip` are present, that `ip` [looks like IPv4][crate::api::model::valid_ipv4] and that the
//!   host isn't already listed, answering HTTP 400 with a `message` otherwise. The record is then
//!   appended and the DNS resolver [reloaded][crate::reload].
//!
//!   ```json
//!   { "success": true, "message": "Host added", "host": "nas.lan", "ip": "192.168.1.20" }
//!   ```
//!
//!   If the hosts file can't be written the response is HTTP 401 with
//!   `{"message":"Failed to add host","cause":"..."}`. If the record was written but the reload
//!   failed the response is HTTP 401 with
//!   `{"message":"Host added, but failed to reload dns","cause":"..."}`; the record is kept.
//!
//! ## `/del` (POST)
//!
//!   Expects `{"host": "nas.lan"}`. Answers HTTP 400 if `host` is missing or not listed.
//!
//!   ```json
//!   { "success": true, "message": "Deleted host", "host": "nas.lan" }
//!   ```
//!
//!   If the hosts file can't be rewritten the response is HTTP 401 with
//!   `{"message":"Failed to remove host","cause":"..."}`.

mod api_error;
mod bearer;
pub mod model;
mod routes;
pub mod server;

pub use server::{new, AppState};
