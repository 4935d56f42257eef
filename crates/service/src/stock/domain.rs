use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stored stock record. `id` is assigned by storage and always present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stock {
    pub id: i32,
    pub details: StockDetails,
}

/// Mutable part of a stock record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StockDetails {
    pub name: Option<String>,
    pub unit_of_measure: Option<String>,
    pub value_of_measure: Option<Decimal>,
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
    pub comment: Option<String>,
}

/// Wire model accepted and returned by the HTTP layer.
///
/// Every field is optional: `None` (absent or `null`) means "not provided",
/// which is distinct from a provided zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub unit_of_measure: Option<String>,
    pub value_of_measure: Option<Decimal>,
    pub quantity: Option<i32>,
    pub expiry_date: Option<NaiveDate>,
    pub comment: Option<String>,
}

/// Text counts as provided only when it is non-empty, so an empty string can
/// never clear a stored value through a merge.
fn present_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl StockDto {
    /// Copy every provided field of `self` onto `target`, leaving the rest untouched.
    pub fn overlay(&self, target: &mut StockDetails) {
        if let Some(name) = present_text(&self.name) {
            target.name = Some(name.to_owned());
        }
        if let Some(unit) = present_text(&self.unit_of_measure) {
            target.unit_of_measure = Some(unit.to_owned());
        }
        if self.value_of_measure.is_some() {
            target.value_of_measure = self.value_of_measure;
        }
        if let Some(quantity) = self.quantity {
            target.quantity = quantity;
        }
        if self.expiry_date.is_some() {
            target.expiry_date = self.expiry_date;
        }
        if let Some(comment) = present_text(&self.comment) {
            target.comment = Some(comment.to_owned());
        }
    }

    /// Wholesale conversion: anything not provided becomes unset (quantity 0).
    pub fn to_details(&self) -> StockDetails {
        StockDetails {
            name: self.name.clone(),
            unit_of_measure: self.unit_of_measure.clone(),
            value_of_measure: self.value_of_measure,
            quantity: self.quantity.unwrap_or_default(),
            expiry_date: self.expiry_date,
            comment: self.comment.clone(),
        }
    }
}

impl From<Stock> for StockDto {
    fn from(stock: Stock) -> Self {
        let StockDetails { name, unit_of_measure, value_of_measure, quantity, expiry_date, comment } = stock.details;
        Self {
            id: Some(stock.id),
            name,
            unit_of_measure,
            value_of_measure,
            quantity: Some(quantity),
            expiry_date,
            comment,
        }
    }
}
