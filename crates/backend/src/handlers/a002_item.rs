use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a002_item::aggregate::{DeleteItemRequest, Item, ItemDto, ItemPage};
use contracts::domain::common::{ApiResponse, DeletedRef, ListQuery};

use crate::domain::a002_item;
use crate::shared::api::{respond, PageOrRecord};

/// GET /api/item?page=&limit=&type=&column=&categoryId=&id=
pub async fn list(Query(query): Query<ListQuery>) -> Json<ApiResponse<PageOrRecord<ItemPage, Item>>> {
    respond(a002_item::service::query(query).await)
}

/// POST /api/item
pub async fn create(Json(dto): Json<ItemDto>) -> Json<ApiResponse<Item>> {
    respond(a002_item::service::create(dto).await)
}

/// PUT /api/item/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<ItemDto>) -> Json<ApiResponse<Item>> {
    respond(a002_item::service::update(&id, dto).await)
}

/// DELETE /api/item
pub async fn delete(Json(req): Json<DeleteItemRequest>) -> Json<ApiResponse<DeletedRef>> {
    respond(a002_item::service::delete(req).await)
}
