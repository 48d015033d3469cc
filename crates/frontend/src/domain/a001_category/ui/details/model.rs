use contracts::domain::a001_category::aggregate::{Category, CategoryDto};

use crate::domain::a001_category::api::CategoryGateway;
use crate::shared::list_controller::{CollectionGateway, GatewayError};

/// Create when `id` is absent, update otherwise
pub async fn save_form(
    id: Option<String>,
    dto: CategoryDto,
    token: String,
) -> Result<Category, GatewayError> {
    let gateway = CategoryGateway;
    match id {
        Some(id) => gateway.update(&id, &dto, &token).await,
        None => gateway.create(&dto, &token).await,
    }
}
