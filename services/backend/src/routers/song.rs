use axum::{extract::State, response::Response};

use crate::controllers::SongController;
use crate::db::Catalog;

pub async fn sarkilar_route(State(catalog): State<Catalog>) -> Response {
    SongController::list_songs(&catalog).await
}
