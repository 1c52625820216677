use crate::company::{self, NewCompany};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory database per test. A single pooled connection keeps
/// every query on the same in-memory instance.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn acme() -> NewCompany {
    NewCompany {
        name: "Acme".into(),
        email: "contact@acme.test".into(),
        website: "https://acme.test".into(),
    }
}

#[tokio::test]
async fn create_then_get_roundtrip() -> Result<()> {
    let db = setup_test_db().await?;

    let created = company::create(&db, acme()).await?;
    assert!(created.id >= 1);

    let found = company::get_by_id(&db, created.id).await?;
    let found = found.expect("created row should be readable");
    assert_eq!(found, created);
    Ok(())
}

#[tokio::test]
async fn list_is_ordered_by_id() -> Result<()> {
    let db = setup_test_db().await?;

    assert!(company::list_all(&db).await?.is_empty());

    let a = company::create(&db, acme()).await?;
    let b = company::create(
        &db,
        NewCompany {
            name: "Globex".into(),
            email: "info@globex.test".into(),
            website: "https://globex.test".into(),
        },
    )
    .await?;

    let all = company::list_all(&db).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, a.id);
    assert_eq!(all[1].id, b.id);
    Ok(())
}

#[tokio::test]
async fn update_replaces_all_fields() -> Result<()> {
    let db = setup_test_db().await?;
    let created = company::create(&db, acme()).await?;

    let updated = company::update(
        &db,
        created.id,
        NewCompany {
            name: "Acme Corp".into(),
            email: "hello@acme.test".into(),
            website: "https://www.acme.test".into(),
        },
    )
    .await?
    .expect("row exists");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Acme Corp");
    assert_eq!(updated.email, "hello@acme.test");
    assert_eq!(updated.website, "https://www.acme.test");

    // Update on a missing id reports None rather than an error.
    let missing = company::update(&db, created.id + 1000, acme()).await?;
    assert!(missing.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_removes_row() -> Result<()> {
    let db = setup_test_db().await?;
    let created = company::create(&db, acme()).await?;

    assert!(company::delete(&db, created.id).await?);
    assert!(company::get_by_id(&db, created.id).await?.is_none());
    assert!(!company::delete(&db, created.id).await?);
    Ok(())
}

#[tokio::test]
async fn insert_many_commits_once() -> Result<()> {
    let db = setup_test_db().await?;

    let rows = vec![
        acme(),
        NewCompany {
            name: "Globex".into(),
            email: "info@globex.test".into(),
            website: "https://globex.test".into(),
        },
        NewCompany {
            name: "Initech".into(),
            email: "office@initech.test".into(),
            website: "https://initech.test".into(),
        },
    ];
    let created = company::insert_many(&db, rows).await?;
    assert_eq!(created, 3);
    assert_eq!(company::list_all(&db).await?.len(), 3);
    Ok(())
}
