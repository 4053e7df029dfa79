//! Login endpoint.
//!
//! This is a functional stub, not a security boundary: the handler looks
//! the user up by username and reports success no matter what, and the
//! supplied password is never compared against anything. Reproduced
//! faithfully from the service this replaces; real credential verification
//! must land before any production use.

use api_types::{Ack, user::Login};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<Login>,
) -> Result<Json<Ack>, ServerError> {
    let user = state.catalog.user_by_username(&payload.username).await?;
    tracing::debug!(
        username = %payload.username,
        found = user.is_some(),
        "login lookup"
    );

    Ok(Json(Ack::new("Logged in successfully")))
}
