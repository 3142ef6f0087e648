use axum::response::Json;
use serde_json::{json, Value};
use tracing::instrument;

/// Fixed order status payload
#[instrument(name = "get_status")]
pub async fn get_status() -> Json<Value> {
    Json(json!({ "Order Status": "Success" }))
}
