use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::application::{GetQuoteUseCase, ListMarketsUseCase};
use crate::domain::{Quote, Symbol};
use crate::presentation::rest::ApiError;

use super::AppState;

/// GET /markets
pub async fn list_markets(State(state): State<Arc<AppState>>) -> Json<Vec<Symbol>> {
    let use_case = ListMarketsUseCase::new(Arc::clone(&state.quote_repo));
    Json(use_case.execute().await)
}

/// GET /quotes/{symbol}
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<Quote>, ApiError> {
    let use_case = GetQuoteUseCase::new(Arc::clone(&state.quote_repo));

    let quote = use_case.execute(&symbol).await.map_err(|e| {
        tracing::debug!(symbol = %symbol, "quote not available");
        ApiError::from(e)
    })?;

    Ok(Json(quote))
}
