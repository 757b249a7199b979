use axum::{
    routing::{get, post},
    Router,
};

mod health;
pub mod tasks;

pub use health::health;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::routes::index))
        .route("/add", post(tasks::routes::create))
        .route("/delete/{id}", get(tasks::routes::delete))
        .route("/edit/{id}", get(tasks::routes::edit_form))
        .route("/update/{id}", post(tasks::routes::update))
        .route("/health", get(health))
}
