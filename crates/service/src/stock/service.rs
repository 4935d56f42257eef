use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{Stock, StockDetails, StockDto};
use super::repository::StockRepository;
use crate::errors::ServiceError;

/// Stock business service independent of web framework.
///
/// Holds no state of its own beyond the shared repository; concurrent calls are
/// not coordinated, so two merge-saves on one id race with last-write-wins.
pub struct StockService<R: StockRepository> {
    repo: Arc<R>,
}

impl<R: StockRepository> StockService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Fetch one record; `None` when the id is unknown.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Option<StockDto>, ServiceError> {
        Ok(self.repo.get(id).await?.map(StockDto::from))
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<StockDto>, ServiceError> {
        let rows = self.repo.get_all().await?;
        Ok(rows.into_iter().map(StockDto::from).collect())
    }

    /// Replace the stored record with `input` converted wholesale; nothing is merged.
    #[instrument(skip(self, input), fields(id = ?input.id))]
    pub async fn update(&self, input: StockDto) -> Result<StockDto, ServiceError> {
        let Some(id) = input.id else {
            return Err(ServiceError::operation_failed("stock update requires an id"));
        };
        let record = Stock { id, details: input.to_details() };
        match self.repo.update(record).await? {
            Some(stored) => {
                info!(id, "stock_replaced");
                Ok(stored.into())
            }
            None => {
                warn!(id, "stock_update_missed");
                Err(ServiceError::not_found(&format!("stock {id}")))
            }
        }
    }

    /// Merge-save: overlay the provided fields of `input` onto the current record.
    ///
    /// Without an id the base is a blank record, inserted with a fresh id.
    /// With an id that storage does not know, nothing is written.
    ///
    /// # Examples
    /// ```
    /// use service::stock::{StockService, domain::{StockDetails, StockDto}, repository::mock::MockStockRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockStockRepository::default());
    /// let existing = repo.insert(StockDetails { name: Some("Tomatoes".into()), quantity: 50, ..Default::default() });
    /// let svc = StockService::new(repo);
    /// let input = StockDto { id: Some(existing.id), quantity: Some(30), ..Default::default() };
    /// let saved = tokio_test::block_on(svc.save(input)).unwrap();
    /// assert_eq!(saved.quantity, Some(30));
    /// assert_eq!(saved.name.as_deref(), Some("Tomatoes"));
    /// ```
    #[instrument(skip(self, input), fields(id = ?input.id))]
    pub async fn save(&self, input: StockDto) -> Result<StockDto, ServiceError> {
        let Some(id) = input.id else {
            let mut details = StockDetails::default();
            input.overlay(&mut details);
            let created = self.repo.create(details).await?;
            info!(id = created.id, "stock_created");
            return Ok(created.into());
        };

        let Some(mut current) = self.repo.get(id).await? else {
            warn!(id, "stock_merge_base_missing");
            return Err(ServiceError::not_found(&format!("stock {id}")));
        };
        input.overlay(&mut current.details);

        match self.repo.update(current).await? {
            Some(stored) => {
                info!(id, "stock_merged");
                Ok(stored.into())
            }
            // Deleted between the read and the write.
            None => Err(ServiceError::not_found(&format!("stock {id}"))),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(id, "stock_deleted");
        }
        Ok(deleted)
    }
}
