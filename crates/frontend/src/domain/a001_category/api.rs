use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{
    Category, CategoryDto, CategoryPage, DeleteCategoryRequest,
};
use contracts::domain::common::{DeletedRef, ListQuery, PagedCollection};

use crate::shared::http::{get_enveloped, send_enveloped, BodyMethod};
use crate::shared::list_controller::{CollectionGateway, DeleteTarget, GatewayError};

const ENDPOINT: &str = "/api/category";

/// Категорий на странице списка
pub const CATEGORY_PAGE_SIZE: u32 = 10;

/// `/api/category` over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryGateway;

#[async_trait(?Send)]
impl CollectionGateway for CategoryGateway {
    type Entity = Category;
    type Form = CategoryDto;

    async fn list_page(
        &self,
        query: ListQuery,
        token: &str,
    ) -> Result<PagedCollection<Category>, GatewayError> {
        let page: CategoryPage = get_enveloped(ENDPOINT, &query, token).await?;
        Ok(page.into())
    }

    async fn fetch_one(&self, id: &str, token: &str) -> Result<Category, GatewayError> {
        get_enveloped(ENDPOINT, &ListQuery::by_id(id), token).await
    }

    async fn create(&self, form: &CategoryDto, token: &str) -> Result<Category, GatewayError> {
        send_enveloped(BodyMethod::Post, ENDPOINT, form, token).await
    }

    async fn update(
        &self,
        id: &str,
        form: &CategoryDto,
        token: &str,
    ) -> Result<Category, GatewayError> {
        let path = format!("{}/{}", ENDPOINT, id);
        send_enveloped(BodyMethod::Put, &path, form, token).await
    }

    async fn delete(&self, target: &DeleteTarget, token: &str) -> Result<(), GatewayError> {
        let body = DeleteCategoryRequest {
            category_id: target.id.clone(),
            public_id: target.auxiliary.clone(),
        };
        let _: DeletedRef = send_enveloped(BodyMethod::Delete, ENDPOINT, &body, token).await?;
        Ok(())
    }
}
