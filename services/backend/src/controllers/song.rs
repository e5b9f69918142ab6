use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::db::Catalog;

pub struct SongController;

impl SongController {
    /// Every song in the catalog, in file order.
    pub async fn list_songs(catalog: &Catalog) -> Response {
        debug!("Serving {} songs", catalog.len());
        (StatusCode::OK, Json(catalog.songs())).into_response()
    }
}
