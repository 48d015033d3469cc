use chrono::Utc;
use contracts::domain::a001_category::aggregate::{Banner, Category, CategoryDto};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, Set, Statement};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;
use crate::shared::paging::PageRequest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub banner_url: String,
    pub banner_public_id: String,
    pub description: String,
    pub active: bool,
    pub position: i32,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category {
            id: m.id,
            name: m.name,
            banner: Banner {
                url: m.banner_url,
                public_id: m.banner_public_id,
            },
            description: m.description,
            active: m.active,
            position: m.position,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

#[derive(Debug, FromQueryResult)]
struct CountResult {
    count: i64,
}

/// Страница неудалённых категорий в заданном порядке и их общее число
pub async fn list_page(page: PageRequest, order_by: &str) -> anyhow::Result<(Vec<Category>, u64)> {
    let db = conn();

    let count = CountResult::find_by_statement(Statement::from_string(
        db.get_database_backend(),
        "SELECT COUNT(*) as count FROM a001_category c WHERE c.is_deleted = 0".to_string(),
    ))
    .one(db)
    .await?
    .map(|r| r.count)
    .unwrap_or(0);

    // order_by is built from a whitelist, never from raw input
    let sql = format!(
        "SELECT c.* FROM a001_category c WHERE c.is_deleted = 0 ORDER BY {} LIMIT ? OFFSET ?",
        order_by
    );
    let rows = Entity::find()
        .from_raw_sql(Statement::from_sql_and_values(
            db.get_database_backend(),
            &sql,
            [i64::from(page.limit).into(), (page.offset() as i64).into()],
        ))
        .all(db)
        .await?;

    Ok((
        rows.into_iter().map(Into::into).collect(),
        u64::try_from(count).unwrap_or(0),
    ))
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Category>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(dto: &CategoryDto) -> anyhow::Result<Category> {
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        name: Set(dto.name.trim().to_string()),
        banner_url: Set(dto.banner.url.clone()),
        banner_public_id: Set(dto.banner.public_id.clone()),
        description: Set(dto.description.clone()),
        active: Set(dto.active),
        position: Set(dto.position),
        is_deleted: Set(false),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let model = active.insert(conn()).await?;
    Ok(model.into())
}

pub async fn update(id: &str, dto: &CategoryDto) -> anyhow::Result<Category> {
    let active = ActiveModel {
        id: Set(id.to_string()),
        name: Set(dto.name.trim().to_string()),
        banner_url: Set(dto.banner.url.clone()),
        banner_public_id: Set(dto.banner.public_id.clone()),
        description: Set(dto.description.clone()),
        active: Set(dto.active),
        position: Set(dto.position),
        updated_at: Set(Some(Utc::now())),
        is_deleted: sea_orm::ActiveValue::NotSet,
        created_at: sea_orm::ActiveValue::NotSet,
    };
    let model = active.update(conn()).await?;
    Ok(model.into())
}

pub async fn soft_delete(id: &str) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
