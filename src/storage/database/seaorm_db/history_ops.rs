use crate::storage::HistoryStore;
use crate::storage::types::{HistoryQuery, HistoryRecord, NewHistoryRecord, SortField, SortOrder};
use crate::utils::error::{CalculatorError, Result};
use chrono::Utc;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, history};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a history record
    pub async fn insert_history(&self, record: NewHistoryRecord) -> Result<i64> {
        debug!("Inserting history record: {}", record.operation);

        let active_model = history::ActiveModel {
            id: NotSet,
            operation: Set(record.operation.label().to_string()),
            numbers: Set(serde_json::to_string(&record.numbers)?),
            result: Set(record.result),
            // UTC keeps text-backed date columns sortable across offset changes
            date: Set(record.date.with_timezone(&Utc).fixed_offset()),
            date_formatted: Set(record.date_formatted),
        };

        let inserted = entities::History::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(CalculatorError::Database)?;

        Ok(i64::from(inserted.last_insert_id))
    }

    /// List history records matching the query
    pub async fn list_history(&self, query: &HistoryQuery) -> Result<Vec<HistoryRecord>> {
        debug!("Listing history with {:?}", query);

        let mut select = entities::History::find();

        if let Some(kind) = query.operation {
            select = select.filter(history::Column::Operation.eq(kind.label()));
        }

        let column = match query.sort_by {
            SortField::Date => history::Column::Date,
            SortField::Result => history::Column::Result,
        };
        let order = match query.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        // Ties fall back to insertion order
        let models = select
            .order_by(column, order)
            .order_by_asc(history::Column::Id)
            .all(&self.db)
            .await
            .map_err(CalculatorError::Database)?;

        models.into_iter().map(record_from_model).collect()
    }

    /// Delete every history record
    pub async fn clear_history(&self) -> Result<u64> {
        let deleted = entities::History::delete_many()
            .exec(&self.db)
            .await
            .map_err(CalculatorError::Database)?;

        debug!("Cleared {} history records", deleted.rows_affected);
        Ok(deleted.rows_affected)
    }
}

fn record_from_model(model: history::Model) -> Result<HistoryRecord> {
    let numbers: Vec<f64> = serde_json::from_str(&model.numbers)?;

    Ok(HistoryRecord {
        id: i64::from(model.id),
        operation: model.operation,
        numbers,
        result: model.result,
        date: model.date,
        date_formatted: model.date_formatted,
    })
}

#[async_trait::async_trait]
impl HistoryStore for SeaOrmDatabase {
    fn backend(&self) -> &'static str {
        self.backend_type.name()
    }

    async fn insert(&self, record: NewHistoryRecord) -> Result<()> {
        self.insert_history(record).await.map(|_| ())
    }

    async fn find(&self, query: &HistoryQuery) -> Result<Vec<HistoryRecord>> {
        self.list_history(query).await
    }

    async fn clear(&self) -> Result<u64> {
        self.clear_history().await
    }

    async fn health_check(&self) -> Result<()> {
        self.ping().await
    }
}
