//! Client layer for the shorten service
//!
//! The CLI talks to the remote service only through this layer. It has no
//! presentation side effects: callers own the loading affordance and render
//! the uniform outcome themselves.
//!
//! # Architecture
//!
//! ```text
//! CLI → ShortenClient ──→ POST /v4/shorten (bearer token)
//! ```
//!
//! # Outcome mapping
//!
//! - HTTP-OK + `id` field → `Ok(ShortenedLink)`
//! - body with `message` field → `Err(Service)`, surfaced verbatim
//! - transport failure / malformed body → `Err(Transport)` with a generic
//!   user-facing message; the root cause is only logged

mod shorten;
mod state;

pub use shorten::{
    ShortenClient, ShortenRequest, ShortenedLink, UNEXPECTED_ERROR_MESSAGE, map_response,
};
pub use state::{InFlightGuard, InFlightPermit, RequestState};
