//! Stock controller: maps service outcomes onto HTTP statuses.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use service::stock::{domain::StockDto, repository::StockRepository, StockService};

use crate::errors::JsonApiError;

type Svc<R> = State<Arc<StockService<R>>>;

/// `GET /api/stock/{id}`: 404 when the id is unknown.
pub async fn get<R: StockRepository + 'static>(State(svc): Svc<R>, Path(id): Path<i32>) -> Result<Json<StockDto>, JsonApiError> {
    match svc.get(id).await? {
        Some(found) => Ok(Json(found)),
        None => Err(JsonApiError::not_found(format!("stock {id} not found"))),
    }
}

/// `GET /api/stock`
pub async fn search<R: StockRepository + 'static>(State(svc): Svc<R>) -> Result<Json<Vec<StockDto>>, JsonApiError> {
    let list = svc.get_all().await?;
    info!(count = list.len(), "list stock");
    Ok(Json(list))
}

/// `POST /api/stock`: merge-save; creates when the body has no id.
///
/// ```text
/// POST /api/stock
/// { "name": "Tomatoes", "unitOfMeasure": "Kg", "valueOfMeasure": "1", "quantity": 50 }
/// ```
pub async fn create<R: StockRepository + 'static>(State(svc): Svc<R>, Json(input): Json<StockDto>) -> Result<Json<StockDto>, JsonApiError> {
    let saved = svc.save(input).await?;
    Ok(Json(saved))
}

/// `PUT /api/stock/{id}`: full replace; the path id wins over any id in the body.
///
/// ```text
/// PUT /api/stock/1
/// { "quantity": 30 }
/// ```
pub async fn update<R: StockRepository + 'static>(
    State(svc): Svc<R>,
    Path(id): Path<i32>,
    Json(mut input): Json<StockDto>,
) -> Result<Json<StockDto>, JsonApiError> {
    input.id = Some(id);
    let updated = svc.update(input).await?;
    Ok(Json(updated))
}

/// `DELETE /api/stock/{id}`: 200 with `true`, or 400 when nothing was deleted.
pub async fn delete<R: StockRepository + 'static>(State(svc): Svc<R>, Path(id): Path<i32>) -> Result<Json<bool>, JsonApiError> {
    if svc.delete(id).await? {
        Ok(Json(true))
    } else {
        Err(JsonApiError::bad_request(format!("stock {id} could not be deleted")))
    }
}
