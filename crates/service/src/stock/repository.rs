use async_trait::async_trait;

use super::domain::{Stock, StockDetails};
use crate::errors::ServiceError;

/// Repository abstraction for stock persistence.
#[async_trait]
pub trait StockRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<Stock>, ServiceError>;
    async fn get_all(&self) -> Result<Vec<Stock>, ServiceError>;
    /// Insert a new record; storage assigns the id.
    async fn create(&self, details: StockDetails) -> Result<Stock, ServiceError>;
    /// Replace an existing record. `Ok(None)` when `stock.id` is unknown.
    async fn update(&self, stock: Stock) -> Result<Option<Stock>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockStockRepository {
        rows: Mutex<BTreeMap<i32, StockDetails>>,
        last_id: Mutex<i32>,
    }

    fn poisoned<T>(_: T) -> ServiceError {
        ServiceError::Db("mock store lock poisoned".into())
    }

    impl MockStockRepository {
        /// Seed a record directly, bypassing the service.
        pub fn insert(&self, details: StockDetails) -> Stock {
            let mut last = self.last_id.lock().unwrap_or_else(|e| e.into_inner());
            *last += 1;
            let id = *last;
            self.rows.lock().unwrap_or_else(|e| e.into_inner()).insert(id, details.clone());
            Stock { id, details }
        }

        pub fn len(&self) -> usize {
            self.rows.lock().map(|rows| rows.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    // Each call yields once so concurrent callers interleave the way real I/O would.
    #[async_trait]
    impl StockRepository for MockStockRepository {
        async fn get(&self, id: i32) -> Result<Option<Stock>, ServiceError> {
            tokio::task::yield_now().await;
            let rows = self.rows.lock().map_err(poisoned)?;
            Ok(rows.get(&id).cloned().map(|details| Stock { id, details }))
        }

        async fn get_all(&self) -> Result<Vec<Stock>, ServiceError> {
            tokio::task::yield_now().await;
            let rows = self.rows.lock().map_err(poisoned)?;
            Ok(rows.iter().map(|(id, details)| Stock { id: *id, details: details.clone() }).collect())
        }

        async fn create(&self, details: StockDetails) -> Result<Stock, ServiceError> {
            tokio::task::yield_now().await;
            let mut last = self.last_id.lock().map_err(poisoned)?;
            *last += 1;
            let id = *last;
            self.rows.lock().map_err(poisoned)?.insert(id, details.clone());
            Ok(Stock { id, details })
        }

        async fn update(&self, stock: Stock) -> Result<Option<Stock>, ServiceError> {
            tokio::task::yield_now().await;
            let mut rows = self.rows.lock().map_err(poisoned)?;
            match rows.get_mut(&stock.id) {
                Some(row) => {
                    *row = stock.details.clone();
                    Ok(Some(stock))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            tokio::task::yield_now().await;
            let mut rows = self.rows.lock().map_err(poisoned)?;
            Ok(rows.remove(&id).is_some())
        }
    }
}
