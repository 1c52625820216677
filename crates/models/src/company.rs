use sea_orm::{
    entity::prelude::*, ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub website: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a row that has not been persisted yet.
#[derive(Clone, Debug)]
pub struct NewCompany {
    pub name: String,
    pub email: String,
    pub website: String,
}

fn db_err(e: DbErr) -> ModelError {
    ModelError::Db(e.to_string())
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(db_err)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(db_err)
}

pub async fn create(db: &DatabaseConnection, row: NewCompany) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(row.name),
        email: Set(row.email),
        website: Set(row.website),
    };
    am.insert(db).await.map_err(db_err)
}

/// Full replace of the three mutable columns. Returns `None` when the id
/// does not exist.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    row: NewCompany,
) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(db_err)? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.name = Set(row.name);
    am.email = Set(row.email);
    am.website = Set(row.website);
    let updated = am.update(db).await.map_err(db_err)?;
    Ok(Some(updated))
}

/// Returns `false` when the id does not exist.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    Ok(res.rows_affected > 0)
}

/// Insert every row inside one transaction with a single terminal commit,
/// so a failure leaves the table untouched.
pub async fn insert_many(
    db: &DatabaseConnection,
    rows: Vec<NewCompany>,
) -> Result<u64, ModelError> {
    let txn = db.begin().await.map_err(db_err)?;
    let mut created = 0u64;
    for row in rows {
        let am = ActiveModel {
            id: NotSet,
            name: Set(row.name),
            email: Set(row.email),
            website: Set(row.website),
        };
        am.insert(&txn).await.map_err(db_err)?;
        created += 1;
    }
    txn.commit().await.map_err(db_err)?;
    Ok(created)
}
