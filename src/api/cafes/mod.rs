//! Cafe API module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | / | GET | Static landing page |
//! | /random | GET | One randomly chosen cafe |
//! | /all | GET | Every cafe, as a bare list |
//! | /search?loc=X | GET | Cafes at an exact location |
//! | /add | POST | Add a cafe (urlencoded form) |
//! | /update-price/{id}?new_price=P | PATCH | Set a cafe's coffee price |
//! | /report-closed/{id}?api_key=K | DELETE | Delete a cafe (secret-gated) |

pub mod form;
mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/random", get(handler::random))
        .route("/all", get(handler::all))
        .route("/search", get(handler::search))
        .route("/add", post(handler::add))
        .route("/update-price/{id}", patch(handler::update_price))
        .route("/report-closed/{id}", delete(handler::report_closed))
}
