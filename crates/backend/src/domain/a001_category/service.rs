use contracts::domain::a001_category::aggregate::{
    Category, CategoryDto, CategoryPage, DeleteCategoryRequest,
};
use contracts::domain::common::{DeletedRef, ListQuery};

use super::repository;
use crate::domain::a002_item;
use crate::shared::api::{PageOrRecord, ServiceError, ServiceResult};
use crate::shared::paging::{order_by_clause, PageMeta, PageRequest, SortColumn};

const SORT_COLUMNS: &[SortColumn] = &[("name", "c.name"), ("position", "c.position")];
const ID_COLUMN: &str = "c.id";
const DEFAULT_ORDER: &str = "c.position ASC, c.name ASC";

pub fn build_page(request: PageRequest, total: u64, categories: Vec<Category>) -> CategoryPage {
    let meta = PageMeta::compute(request, total);
    CategoryPage {
        curr_page: meta.current_page,
        next_page: meta.next_page,
        prev_page: meta.prev_page,
        total_category: total,
        total_page: meta.total_pages,
        categories,
    }
}

/// `GET /api/category`: страница, либо одна запись при заданном `id`
pub async fn query(q: ListQuery) -> ServiceResult<PageOrRecord<CategoryPage, Category>> {
    if q.is_single() {
        let id = q.id.as_deref().unwrap_or_default();
        let category = repository::get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("Category"))?;
        return Ok(PageOrRecord::Record(category));
    }

    let request = PageRequest::from_query(q.page, q.limit);
    let order_by = order_by_clause(
        q.direction,
        q.column.as_deref(),
        SORT_COLUMNS,
        DEFAULT_ORDER,
        ID_COLUMN,
    );
    let (categories, total) = repository::list_page(request, &order_by).await?;
    Ok(PageOrRecord::Page(build_page(request, total, categories)))
}

pub async fn create(dto: CategoryDto) -> ServiceResult<Category> {
    dto.validate().map_err(ServiceError::Validation)?;
    let category = repository::insert(&dto).await?;
    tracing::info!("Category {} created ({})", category.id, category.name);
    Ok(category)
}

pub async fn update(id: &str, dto: CategoryDto) -> ServiceResult<Category> {
    dto.validate().map_err(ServiceError::Validation)?;
    if repository::get_by_id(id).await?.is_none() {
        return Err(ServiceError::NotFound("Category"));
    }
    Ok(repository::update(id, &dto).await?)
}

/// Категорию с активными товарами удалить нельзя
pub async fn delete(req: DeleteCategoryRequest) -> ServiceResult<DeletedRef> {
    let id = req.category_id.trim();
    if id.is_empty() {
        return Err(ServiceError::Validation("Category id is required".into()));
    }
    if a002_item::repository::count_active_by_category(id).await? > 0 {
        return Err(ServiceError::CategoryInUse);
    }
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::NotFound("Category"));
    }
    match req.public_id.as_deref().filter(|p| !p.is_empty()) {
        Some(public_id) => tracing::info!("Category {} deleted, banner {} released", id, public_id),
        None => tracing::info!("Category {} deleted", id),
    }
    Ok(DeletedRef { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_shape_follows_request_and_total() {
        let page = build_page(PageRequest { page: 2, limit: 10 }, 25, vec![]);
        assert_eq!(page.curr_page, 2);
        assert_eq!(page.total_page, 3);
        assert_eq!(page.total_category, 25);
        assert!(page.next_page);
        assert!(page.prev_page);
    }

    #[test]
    fn page_serializes_with_api_names() {
        let page = build_page(PageRequest { page: 1, limit: 10 }, 0, vec![]);
        let json = serde_json::to_value(PageOrRecord::<_, Category>::Page(page)).unwrap();
        assert_eq!(json["currPage"], 1);
        assert_eq!(json["totalCategory"], 0);
        assert_eq!(json["nextPage"], false);
        assert!(json["categories"].as_array().unwrap().is_empty());
    }
}
