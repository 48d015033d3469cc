use chrono::Utc;
use contracts::domain::a002_item::aggregate::{CategoryRef, Item, ItemDto};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, Set, Statement, Value};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;
use crate::shared::paging::PageRequest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub author: String,
    /// JSON-массив ссылок
    pub pic: String,
    pub description: String,
    pub price_pay: i64,
    pub price_input: i64,
    pub slogan: String,
    pub barcode: String,
    pub count: i32,
    pub weight: i32,
    pub category_id: String,
    /// JSON-массив ссылок
    pub detail_pic: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Строка списка: товар плюс название категории из LEFT JOIN
#[derive(Debug, FromQueryResult)]
struct ItemRow {
    id: String,
    name: String,
    author: String,
    pic: String,
    description: String,
    price_pay: i64,
    price_input: i64,
    slogan: String,
    barcode: String,
    count: i32,
    weight: i32,
    category_id: String,
    category_name: Option<String>,
    detail_pic: String,
}

impl From<ItemRow> for Item {
    fn from(r: ItemRow) -> Self {
        Item {
            id: r.id,
            name: r.name,
            author: r.author,
            pic: decode_pictures(&r.pic),
            description: r.description,
            price_pay: r.price_pay,
            price_input: r.price_input,
            slogan: r.slogan,
            barcode: r.barcode,
            count: r.count,
            weight: r.weight,
            category: CategoryRef {
                id: r.category_id,
                name: r.category_name.unwrap_or_default(),
            },
            detail_pic: decode_pictures(&r.detail_pic),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct CountResult {
    count: i64,
}

/// Пустая или повреждённая колонка читается как пустой список
fn decode_pictures(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn encode_pictures(pics: &[String]) -> String {
    let cleaned: Vec<&str> = pics
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    serde_json::to_string(&cleaned).unwrap_or_else(|_| "[]".to_string())
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

const SELECT_ITEMS: &str = r#"
    SELECT i.id, i.name, i.author, i.pic, i.description, i.price_pay, i.price_input,
           i.slogan, i.barcode, i.count, i.weight, i.category_id, c.name AS category_name,
           i.detail_pic
    FROM a002_item i
    LEFT JOIN a001_category c ON c.id = i.category_id
"#;

/// Результат выборки страницы товаров
#[derive(Debug)]
pub struct ItemSlice {
    pub items: Vec<Item>,
    /// С учётом фильтра по категории
    pub filtered_total: u64,
    /// По всему каталогу
    pub overall_total: u64,
}

async fn count(sql: &str, values: Vec<Value>) -> anyhow::Result<u64> {
    let db = conn();
    let count = CountResult::find_by_statement(Statement::from_sql_and_values(
        db.get_database_backend(),
        sql,
        values,
    ))
    .one(db)
    .await?
    .map(|r| r.count)
    .unwrap_or(0);
    Ok(u64::try_from(count).unwrap_or(0))
}

pub async fn list_page(
    page: PageRequest,
    order_by: &str,
    category_id: Option<&str>,
) -> anyhow::Result<ItemSlice> {
    let db = conn();

    let mut where_clauses = vec!["i.is_deleted = 0".to_string()];
    let mut params: Vec<Value> = Vec::new();
    if let Some(category_id) = category_id.filter(|c| !c.is_empty()) {
        where_clauses.push("i.category_id = ?".to_string());
        params.push(category_id.into());
    }
    let where_sql = where_clauses.join(" AND ");

    let filtered_total = count(
        &format!("SELECT COUNT(*) as count FROM a002_item i WHERE {}", where_sql),
        params.clone(),
    )
    .await?;
    let overall_total = count(
        "SELECT COUNT(*) as count FROM a002_item i WHERE i.is_deleted = 0",
        Vec::new(),
    )
    .await?;

    let sql = format!(
        "{} WHERE {} ORDER BY {} LIMIT ? OFFSET ?",
        SELECT_ITEMS, where_sql, order_by
    );
    params.push(i64::from(page.limit).into());
    params.push((page.offset() as i64).into());

    let rows = ItemRow::find_by_statement(Statement::from_sql_and_values(
        db.get_database_backend(),
        &sql,
        params,
    ))
    .all(db)
    .await?;

    Ok(ItemSlice {
        items: rows.into_iter().map(Into::into).collect(),
        filtered_total,
        overall_total,
    })
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Item>> {
    let db = conn();
    let sql = format!("{} WHERE i.id = ? AND i.is_deleted = 0", SELECT_ITEMS);
    let row = ItemRow::find_by_statement(Statement::from_sql_and_values(
        db.get_database_backend(),
        &sql,
        [id.into()],
    ))
    .one(db)
    .await?;
    Ok(row.map(Into::into))
}

pub async fn count_active_by_category(category_id: &str) -> anyhow::Result<u64> {
    let n = Entity::find()
        .filter(Column::CategoryId.eq(category_id))
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(n)
}

/// Возвращает id новой записи
pub async fn insert(dto: &ItemDto) -> anyhow::Result<String> {
    let now = Utc::now();
    let id = uuid::Uuid::new_v4().to_string();
    let active = ActiveModel {
        id: Set(id.clone()),
        name: Set(dto.name.trim().to_string()),
        author: Set(dto.author.trim().to_string()),
        pic: Set(encode_pictures(&dto.pic)),
        description: Set(dto.description.clone()),
        price_pay: Set(dto.price_pay),
        price_input: Set(dto.price_input),
        slogan: Set(dto.slogan.clone()),
        barcode: Set(dto.barcode.trim().to_string()),
        count: Set(dto.count),
        weight: Set(dto.weight),
        category_id: Set(dto.category_id.clone()),
        detail_pic: Set(encode_pictures(&dto.detail_pic)),
        is_deleted: Set(false),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    active.insert(conn()).await?;
    Ok(id)
}

pub async fn update(id: &str, dto: &ItemDto) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id.to_string()),
        name: Set(dto.name.trim().to_string()),
        author: Set(dto.author.trim().to_string()),
        pic: Set(encode_pictures(&dto.pic)),
        description: Set(dto.description.clone()),
        price_pay: Set(dto.price_pay),
        price_input: Set(dto.price_input),
        slogan: Set(dto.slogan.clone()),
        barcode: Set(dto.barcode.trim().to_string()),
        count: Set(dto.count),
        weight: Set(dto.weight),
        category_id: Set(dto.category_id.clone()),
        detail_pic: Set(encode_pictures(&dto.detail_pic)),
        updated_at: Set(Some(Utc::now())),
        is_deleted: sea_orm::ActiveValue::NotSet,
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pictures_are_stored_as_json_without_blanks() {
        let raw = encode_pictures(&["a.png".into(), "  ".into(), " b.png ".into()]);
        assert_eq!(raw, r#"["a.png","b.png"]"#);
        assert_eq!(decode_pictures(&raw), vec!["a.png", "b.png"]);
    }

    #[test]
    fn broken_picture_column_reads_as_empty() {
        assert!(decode_pictures("").is_empty());
        assert!(decode_pictures("not json").is_empty());
    }
}
