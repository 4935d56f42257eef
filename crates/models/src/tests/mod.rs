//! Entity-level CRUD tests against in-memory SQLite.

use anyhow::Result;
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{prelude::Decimal, DatabaseConnection, NotSet, Set};

use crate::{db, stock};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn tomatoes() -> stock::ActiveModel {
    stock::ActiveModel {
        id: NotSet,
        name: Set(Some("Tomatoes".into())),
        unit_of_measure: Set(Some("Kg".into())),
        value_of_measure: Set(Some(Decimal::new(15, 1))),
        quantity: Set(50),
        expiry_date: Set(NaiveDate::from_ymd_opt(2025, 3, 1)),
        comment: Set(None),
    }
}

#[tokio::test]
async fn create_assigns_id_and_find_returns_row() -> Result<()> {
    let db = setup_test_db().await?;

    let created = stock::create(&db, tomatoes()).await?;
    assert!(created.id > 0);
    assert_eq!(created.name.as_deref(), Some("Tomatoes"));
    assert_eq!(created.value_of_measure, Some(Decimal::new(15, 1)));

    let found = stock::find(&db, created.id).await?;
    assert_eq!(found, Some(created));
    Ok(())
}

#[tokio::test]
async fn find_unknown_id_is_none() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(stock::find(&db, 4242).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn list_is_ordered_by_id() -> Result<()> {
    let db = setup_test_db().await?;
    let a = stock::create(&db, tomatoes()).await?;
    let mut second = tomatoes();
    second.name = Set(Some("Mozzarella".into()));
    let b = stock::create(&db, second).await?;

    let rows = stock::list(&db).await?;
    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    Ok(())
}

#[tokio::test]
async fn replace_overwrites_every_column() -> Result<()> {
    let db = setup_test_db().await?;
    let created = stock::create(&db, tomatoes()).await?;

    let replacement = stock::Model {
        id: created.id,
        name: Some("Basil".into()),
        unit_of_measure: None,
        value_of_measure: None,
        quantity: 0,
        expiry_date: None,
        comment: Some("fresh".into()),
    };
    let updated = stock::replace(&db, replacement.clone()).await?;
    assert_eq!(updated, Some(replacement.clone()));
    assert_eq!(stock::find(&db, created.id).await?, Some(replacement));
    Ok(())
}

#[tokio::test]
async fn replace_missing_row_is_none() -> Result<()> {
    let db = setup_test_db().await?;
    let ghost = stock::Model {
        id: 77,
        name: Some("Ghost".into()),
        unit_of_measure: None,
        value_of_measure: None,
        quantity: 1,
        expiry_date: None,
        comment: None,
    };
    assert!(stock::replace(&db, ghost).await?.is_none());
    assert!(stock::list(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn replace_after_concurrent_delete_is_none() -> Result<()> {
    let db = setup_test_db().await?;
    let created = stock::create(&db, tomatoes()).await?;
    let read = stock::find(&db, created.id).await?.expect("row was just created");

    assert!(stock::delete(&db, created.id).await?);
    let changed = stock::Model { quantity: 30, ..read };
    assert!(stock::replace(&db, changed).await?.is_none());
    assert!(stock::find(&db, created.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() -> Result<()> {
    let db = setup_test_db().await?;
    let created = stock::create(&db, tomatoes()).await?;

    assert!(stock::delete(&db, created.id).await?);
    assert!(!stock::delete(&db, created.id).await?);
    assert!(stock::find(&db, created.id).await?.is_none());
    Ok(())
}
