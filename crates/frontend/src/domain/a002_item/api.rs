use async_trait::async_trait;
use contracts::domain::a002_item::aggregate::{DeleteItemRequest, Item, ItemDto, ItemPage};
use contracts::domain::common::{DeletedRef, ListQuery, PagedCollection};

use crate::shared::http::{get_enveloped, send_enveloped, BodyMethod};
use crate::shared::list_controller::{CollectionGateway, DeleteTarget, GatewayError};

const ENDPOINT: &str = "/api/item";

/// Товаров на странице списка
pub const ITEM_PAGE_SIZE: u32 = 8;

/// `/api/item` over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemGateway;

#[async_trait(?Send)]
impl CollectionGateway for ItemGateway {
    type Entity = Item;
    type Form = ItemDto;

    async fn list_page(
        &self,
        query: ListQuery,
        token: &str,
    ) -> Result<PagedCollection<Item>, GatewayError> {
        let page: ItemPage = get_enveloped(ENDPOINT, &query, token).await?;
        Ok(page.into())
    }

    async fn fetch_one(&self, id: &str, token: &str) -> Result<Item, GatewayError> {
        get_enveloped(ENDPOINT, &ListQuery::by_id(id), token).await
    }

    async fn create(&self, form: &ItemDto, token: &str) -> Result<Item, GatewayError> {
        send_enveloped(BodyMethod::Post, ENDPOINT, form, token).await
    }

    async fn update(&self, id: &str, form: &ItemDto, token: &str) -> Result<Item, GatewayError> {
        let path = format!("{}/{}", ENDPOINT, id);
        send_enveloped(BodyMethod::Put, &path, form, token).await
    }

    /// Items carry no linked resource; `auxiliary` is ignored
    async fn delete(&self, target: &DeleteTarget, token: &str) -> Result<(), GatewayError> {
        let body = DeleteItemRequest {
            item_id: target.id.clone(),
        };
        let _: DeletedRef = send_enveloped(BodyMethod::Delete, ENDPOINT, &body, token).await?;
        Ok(())
    }
}
