//! Arithmetic endpoints
//!
//! Thin adapters over [`Calculator`](crate::core::Calculator): each handler
//! extracts the operands, runs the pipeline and maps the outcome to a
//! response.

use crate::core::{BatchItem, OperationKind};
use crate::server::state::AppState;
use crate::utils::error::{CalculatorError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

/// Body of the single-operation endpoints
#[derive(Debug, Deserialize)]
pub struct NumbersRequest {
    pub numbers: Vec<f64>,
}

async fn run_operation(
    state: web::Data<AppState>,
    kind: OperationKind,
    request: NumbersRequest,
) -> Result<HttpResponse> {
    let calculation = state
        .calculator
        .calculate(kind, request.numbers)
        .await
        .map_err(CalculatorError::from)?;

    info!("{} of {:?} = {}", kind, calculation.numbers, calculation.result);
    Ok(HttpResponse::Ok().json(calculation))
}

/// POST /calculator/sum
pub async fn sum(
    state: web::Data<AppState>,
    request: web::Json<NumbersRequest>,
) -> Result<HttpResponse> {
    run_operation(state, OperationKind::Sum, request.into_inner()).await
}

/// POST /calculator/subtract
pub async fn subtract(
    state: web::Data<AppState>,
    request: web::Json<NumbersRequest>,
) -> Result<HttpResponse> {
    run_operation(state, OperationKind::Subtract, request.into_inner()).await
}

/// POST /calculator/multiply
pub async fn multiply(
    state: web::Data<AppState>,
    request: web::Json<NumbersRequest>,
) -> Result<HttpResponse> {
    run_operation(state, OperationKind::Multiply, request.into_inner()).await
}

/// POST /calculator/divide
pub async fn divide(
    state: web::Data<AppState>,
    request: web::Json<NumbersRequest>,
) -> Result<HttpResponse> {
    run_operation(state, OperationKind::Divide, request.into_inner()).await
}

/// POST /calculator/batch
///
/// Answers 200 with one outcome per item, whatever the items' fate.
pub async fn batch(
    state: web::Data<AppState>,
    items: web::Json<Vec<BatchItem>>,
) -> Result<HttpResponse> {
    let outcomes = state.calculator.run_batch(items.into_inner()).await;
    Ok(HttpResponse::Ok().json(outcomes))
}
