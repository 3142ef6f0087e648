use axum::{
    extract::{Query, State},
    response::Json,
};
use tracing::instrument;

use crate::app::AppState;
use crate::models::{DrinkItem, FoodItem, ItemFilter};

/// Raw query pairs. Collecting pairs instead of a typed struct means unknown,
/// repeated or oddly-cased keys never turn into a rejection.
pub type QueryPairs = Vec<(String, String)>;

/// `GET /api/v1/foods[?ID=..]`
#[instrument(name = "list_foods", skip_all)]
pub async fn list_foods(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Json<Vec<FoodItem>> {
    let filter = ItemFilter::from_query_pairs(&params);
    Json(state.catalog_service.list_foods(&filter))
}

/// `GET /api/v1/drinks[?ID=..]`
#[instrument(name = "list_drinks", skip_all)]
pub async fn list_drinks(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Json<Vec<DrinkItem>> {
    let filter = ItemFilter::from_query_pairs(&params);
    Json(state.catalog_service.list_drinks(&filter))
}
