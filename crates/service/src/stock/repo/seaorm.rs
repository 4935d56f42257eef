use sea_orm::{DatabaseConnection, NotSet, Set};

use crate::errors::ServiceError;
use crate::stock::domain::{Stock, StockDetails};
use crate::stock::repository::StockRepository;
use models::stock;

pub struct SeaOrmStockRepository {
    db: DatabaseConnection,
}

impl SeaOrmStockRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn to_domain(m: stock::Model) -> Stock {
    Stock {
        id: m.id,
        details: StockDetails {
            name: m.name,
            unit_of_measure: m.unit_of_measure,
            value_of_measure: m.value_of_measure,
            quantity: m.quantity,
            expiry_date: m.expiry_date,
            comment: m.comment,
        },
    }
}

fn to_model(s: Stock) -> stock::Model {
    let StockDetails { name, unit_of_measure, value_of_measure, quantity, expiry_date, comment } = s.details;
    stock::Model { id: s.id, name, unit_of_measure, value_of_measure, quantity, expiry_date, comment }
}

#[async_trait::async_trait]
impl StockRepository for SeaOrmStockRepository {
    async fn get(&self, id: i32) -> Result<Option<Stock>, ServiceError> {
        Ok(stock::find(&self.db, id).await?.map(to_domain))
    }

    async fn get_all(&self) -> Result<Vec<Stock>, ServiceError> {
        Ok(stock::list(&self.db).await?.into_iter().map(to_domain).collect())
    }

    async fn create(&self, d: StockDetails) -> Result<Stock, ServiceError> {
        let am = stock::ActiveModel {
            id: NotSet,
            name: Set(d.name),
            unit_of_measure: Set(d.unit_of_measure),
            value_of_measure: Set(d.value_of_measure),
            quantity: Set(d.quantity),
            expiry_date: Set(d.expiry_date),
            comment: Set(d.comment),
        };
        Ok(to_domain(stock::create(&self.db, am).await?))
    }

    async fn update(&self, s: Stock) -> Result<Option<Stock>, ServiceError> {
        Ok(stock::replace(&self.db, to_model(s)).await?.map(to_domain))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(stock::delete(&self.db, id).await?)
    }
}
