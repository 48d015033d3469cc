use contracts::domain::a002_item::aggregate::{CategoryRef, Item, ItemDto};
use contracts::domain::common::ListQuery;

use crate::domain::a001_category::api::CategoryGateway;
use crate::domain::a002_item::api::ItemGateway;
use crate::shared::list_controller::{CollectionGateway, GatewayError};

/// Upper bound the server accepts for `limit`
const CATEGORY_OPTIONS_LIMIT: u32 = 100;

/// Create when `id` is absent, update otherwise
pub async fn save_form(
    id: Option<String>,
    dto: ItemDto,
    token: String,
) -> Result<Item, GatewayError> {
    let gateway = ItemGateway;
    match id {
        Some(id) => gateway.update(&id, &dto, &token).await,
        None => gateway.create(&dto, &token).await,
    }
}

/// Categories for the picker, in the server's default order
pub async fn fetch_category_options(token: String) -> Result<Vec<CategoryRef>, GatewayError> {
    let page = CategoryGateway
        .list_page(ListQuery::page(1, CATEGORY_OPTIONS_LIMIT), &token)
        .await?;
    Ok(page
        .records
        .into_iter()
        .map(|c| CategoryRef {
            id: c.id,
            name: c.name,
        })
        .collect())
}

/// "a.jpg, b.jpg" → ["a.jpg", "b.jpg"]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(values: &[String]) -> String {
    values.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_list_ignores_blank_entries() {
        assert_eq!(split_list(" a.jpg, ,b.jpg ,"), vec!["a.jpg", "b.jpg"]);
        assert!(split_list("").is_empty());
        assert_eq!(join_list(&split_list("a.jpg,b.jpg")), "a.jpg, b.jpg");
    }
}
