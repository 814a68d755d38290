#![allow(clippy::unwrap_used)]

use anyhow::Result;
use islamic_companion_bot::catalog::City;
use islamic_companion_bot::database::connection::DatabaseManager;
use islamic_companion_bot::database::models::Registration;
use islamic_companion_bot::database::store::{RegistrationStore, SqliteRegistrationStore};
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> Result<(DatabaseManager, String, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db_manager = DatabaseManager::new(&database_url).await?;
    db_manager.run_migrations().await?;

    Ok((db_manager, database_url, temp_dir))
}

#[tokio::test]
async fn test_registration_upsert_replaces_city() -> Result<()> {
    let (db, _url, _temp_dir) = setup_test_db().await?;

    let first = Registration::upsert(&db.pool, 123, "riyadh").await?;
    let second = Registration::upsert(&db.pool, 123, "jeddah").await?;

    assert_eq!(second.city, "jeddah");
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(Registration::count(&db.pool).await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_registration_delete_and_counts() -> Result<()> {
    let (db, _url, _temp_dir) = setup_test_db().await?;

    Registration::upsert(&db.pool, 1, "makkah").await?;
    Registration::upsert(&db.pool, 2, "makkah").await?;
    Registration::upsert(&db.pool, 3, "riyadh").await?;

    assert_eq!(
        Registration::count_by_city(&db.pool).await?,
        vec![("makkah".to_string(), 2), ("riyadh".to_string(), 1)]
    );

    assert!(Registration::delete(&db.pool, 3).await?);
    assert!(!Registration::delete(&db.pool, 3).await?);
    assert!(Registration::find_by_chat_id(&db.pool, 3).await?.is_none());
    assert_eq!(Registration::count(&db.pool).await?, 2);

    Ok(())
}

#[tokio::test]
async fn test_store_set_get_list() -> Result<()> {
    let (db, _url, _temp_dir) = setup_test_db().await?;
    let store = SqliteRegistrationStore::new(db);

    assert_eq!(store.get(123).await?, None);

    store.set(123, City::Riyadh).await?;
    store.set(-100456, City::Madinah).await?;
    store.set(123, City::Jeddah).await?;

    assert_eq!(store.get(123).await?, Some(City::Jeddah));
    assert_eq!(
        store.list().await?,
        vec![(-100456, City::Madinah), (123, City::Jeddah)]
    );
    assert_eq!(store.count().await?, 2);

    Ok(())
}

#[tokio::test]
async fn test_store_delete_missing_is_noop() -> Result<()> {
    let (db, _url, _temp_dir) = setup_test_db().await?;
    let store = SqliteRegistrationStore::new(db);

    assert!(!store.delete(42).await?);

    store.set(42, City::Makkah).await?;
    assert!(store.delete(42).await?);
    assert!(store.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_store_survives_reopen() -> Result<()> {
    let (db, url, _temp_dir) = setup_test_db().await?;
    SqliteRegistrationStore::new(db.clone()).set(777, City::Makkah).await?;
    db.pool.close().await;

    let reopened = DatabaseManager::new(&url).await?;
    reopened.run_migrations().await?;
    let store = SqliteRegistrationStore::new(reopened);

    assert_eq!(store.get(777).await?, Some(City::Makkah));

    Ok(())
}

#[tokio::test]
async fn test_store_skips_unknown_city_rows() -> Result<()> {
    let (db, _url, _temp_dir) = setup_test_db().await?;
    Registration::upsert(&db.pool, 1, "cairo").await?;
    Registration::upsert(&db.pool, 2, "riyadh").await?;

    let store = SqliteRegistrationStore::new(db.clone());

    assert_eq!(store.get(1).await?, None);
    assert_eq!(store.list().await?, vec![(2, City::Riyadh)]);
    // Health reports what the dispatcher targets, not raw rows.
    assert_eq!(store.count().await?, 1);
    assert_eq!(Registration::count(&db.pool).await?, 2);

    Ok(())
}
