//! Service layer for the stock resource.
//! - `stock::service` holds the business rules (merge-save, full update).
//! - `stock::repository` is the storage seam; `stock::repo::seaorm` backs it with SeaORM.
//! - `stock::domain` maps between the wire model and stored records.

pub mod errors;
pub mod stock;
#[cfg(test)]
pub mod test_support;
