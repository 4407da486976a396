//! Doctor lookup endpoint.
//!
//! ```text
//! GET /api/v1/doctors?specialty=Dermatology&city=New%20York&state=NY
//! ```
//!
//! The body is always the lookup contract: `{"success": [...]}` or
//! `{"error": "..."}`. Only a request without `specialty` is rejected at the
//! HTTP layer.

use actix_web::{HttpResponse, get, web};
use tracing::debug;

use crate::domain::ports::LookupRequest;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::state::HttpState;

/// Look up doctors for a specialty, optionally narrowed by city and state.
#[get("/doctors")]
pub async fn find_doctors(
    state: web::Data<HttpState>,
    query: web::Query<LookupRequest>,
) -> HttpResponse {
    let request = query.into_inner();
    debug!(specialty = %request.specialty, "doctor lookup requested");
    let result = state.lookup.lookup(request).await;
    HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(result)
}

#[cfg(test)]
#[path = "doctors_tests.rs"]
mod tests;
