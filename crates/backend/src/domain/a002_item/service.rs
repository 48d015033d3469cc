use contracts::domain::a002_item::aggregate::{DeleteItemRequest, Item, ItemDto, ItemPage};
use contracts::domain::common::{DeletedRef, ListQuery};

use super::repository::{self, ItemSlice};
use crate::domain::a001_category;
use crate::shared::api::{PageOrRecord, ServiceError, ServiceResult};
use crate::shared::paging::{order_by_clause, PageMeta, PageRequest, SortColumn};

const SORT_COLUMNS: &[SortColumn] = &[
    ("name", "i.name"),
    ("pricePay", "i.price_pay"),
    ("count", "i.count"),
];
const ID_COLUMN: &str = "i.id";
const DEFAULT_ORDER: &str = "i.created_at DESC";

pub fn build_page(request: PageRequest, slice: ItemSlice) -> ItemPage {
    let meta = PageMeta::compute(request, slice.filtered_total);
    ItemPage {
        curr_page: meta.current_page,
        next_page: meta.next_page,
        prev_page: meta.prev_page,
        total_item: slice.filtered_total,
        total_page: meta.total_pages,
        total_number: slice.overall_total,
        products: slice.items,
    }
}

/// `GET /api/item`: страница (с необязательным фильтром по категории) или одна запись
pub async fn query(q: ListQuery) -> ServiceResult<PageOrRecord<ItemPage, Item>> {
    if q.is_single() {
        let id = q.id.as_deref().unwrap_or_default();
        let item = repository::get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("Item"))?;
        return Ok(PageOrRecord::Record(item));
    }

    let request = PageRequest::from_query(q.page, q.limit);
    let order_by = order_by_clause(
        q.direction,
        q.column.as_deref(),
        SORT_COLUMNS,
        DEFAULT_ORDER,
        ID_COLUMN,
    );
    let slice = repository::list_page(request, &order_by, q.category_id.as_deref()).await?;
    Ok(PageOrRecord::Page(build_page(request, slice)))
}

async fn validate(dto: &ItemDto) -> ServiceResult<()> {
    dto.validate().map_err(ServiceError::Validation)?;
    if a001_category::repository::get_by_id(&dto.category_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::NotFound("Category"));
    }
    Ok(())
}

pub async fn create(dto: ItemDto) -> ServiceResult<Item> {
    validate(&dto).await?;
    let id = repository::insert(&dto).await?;
    tracing::info!("Item {} created ({})", id, dto.name.trim());
    repository::get_by_id(&id)
        .await?
        .ok_or(ServiceError::NotFound("Item"))
}

pub async fn update(id: &str, dto: ItemDto) -> ServiceResult<Item> {
    validate(&dto).await?;
    if repository::get_by_id(id).await?.is_none() {
        return Err(ServiceError::NotFound("Item"));
    }
    repository::update(id, &dto).await?;
    repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound("Item"))
}

pub async fn delete(req: DeleteItemRequest) -> ServiceResult<DeletedRef> {
    let id = req.item_id.trim();
    if id.is_empty() {
        return Err(ServiceError::Validation("Item id is required".into()));
    }
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::NotFound("Item"));
    }
    tracing::info!("Item {} deleted", id);
    Ok(DeletedRef { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_and_overall_totals_are_kept_apart() {
        let slice = ItemSlice {
            items: vec![],
            filtered_total: 9,
            overall_total: 120,
        };
        let page = build_page(PageRequest { page: 1, limit: 8 }, slice);
        assert_eq!(page.total_item, 9);
        assert_eq!(page.total_number, 120);
        assert_eq!(page.total_page, 2);
        assert!(page.next_page);
        assert!(!page.prev_page);
    }

    #[test]
    fn page_serializes_with_api_names() {
        let slice = ItemSlice {
            items: vec![],
            filtered_total: 0,
            overall_total: 0,
        };
        let page = build_page(PageRequest { page: 1, limit: 8 }, slice);
        let json = serde_json::to_value(PageOrRecord::<_, Item>::Page(page)).unwrap();
        assert_eq!(json["totalItem"], 0);
        assert_eq!(json["totalNumber"], 0);
        assert!(json["products"].as_array().unwrap().is_empty());
    }
}
