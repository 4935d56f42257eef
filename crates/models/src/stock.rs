use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub unit_of_measure: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub value_of_measure: Option<Decimal>,
    pub quantity: i32,
    pub expiry_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// All rows, ordered by id.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Insert a row; `id` must be `NotSet` so storage assigns it.
pub async fn create(db: &DatabaseConnection, am: ActiveModel) -> Result<Model, ModelError> {
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Overwrite every column of an existing row. `Ok(None)` when no row has `model.id`.
pub async fn replace(db: &DatabaseConnection, model: Model) -> Result<Option<Model>, ModelError> {
    let am: ActiveModel = ActiveModel::from(model).reset_all();
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(ModelError::Db(e.to_string())),
    }
}

/// Delete by id; returns true if a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
