use axum::{extract::State, response::IntoResponse};

use crate::controllers::RootController;
use crate::db::Catalog;

pub async fn root_route() -> impl IntoResponse {
    RootController::root().await
}

pub async fn health_check_route(State(catalog): State<Catalog>) -> impl IntoResponse {
    RootController::health_check(&catalog).await
}
