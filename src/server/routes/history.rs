//! History endpoint

use crate::core::{HistoryEntryView, HistoryParams};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

/// History response body
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntryView>,
}

/// GET /calculator/history
///
/// Query parameters: `operation`, `sort_by` (`date` or `result`) and
/// `sort_order` (`desc` or ascending otherwise).
pub async fn get_history(
    state: web::Data<AppState>,
    params: web::Query<HistoryParams>,
) -> Result<HttpResponse> {
    debug!("History requested: {:?}", params);

    let history = state.calculator.history_entries(&params).await?;
    Ok(HttpResponse::Ok().json(HistoryResponse { history }))
}
