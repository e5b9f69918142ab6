use axum::extract::Json;
use serde_json::{json, Value};

use crate::db::Catalog;

pub struct RootController;

impl RootController {
    pub async fn root() -> Json<Value> {
        Json(json!({
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }

    pub async fn health_check(catalog: &Catalog) -> Json<Value> {
        Json(json!({
            "status": "ok",
            "songs": catalog.len(),
        }))
    }
}
