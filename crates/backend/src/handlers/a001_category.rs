use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a001_category::aggregate::{
    Category, CategoryDto, CategoryPage, DeleteCategoryRequest,
};
use contracts::domain::common::{ApiResponse, DeletedRef, ListQuery};

use crate::domain::a001_category;
use crate::shared::api::{respond, PageOrRecord};

/// GET /api/category?page=&limit=&type=&column=&id=
pub async fn list(
    Query(query): Query<ListQuery>,
) -> Json<ApiResponse<PageOrRecord<CategoryPage, Category>>> {
    respond(a001_category::service::query(query).await)
}

/// POST /api/category
pub async fn create(Json(dto): Json<CategoryDto>) -> Json<ApiResponse<Category>> {
    respond(a001_category::service::create(dto).await)
}

/// PUT /api/category/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<CategoryDto>,
) -> Json<ApiResponse<Category>> {
    respond(a001_category::service::update(&id, dto).await)
}

/// DELETE /api/category
pub async fn delete(Json(req): Json<DeleteCategoryRequest>) -> Json<ApiResponse<DeletedRef>> {
    respond(a001_category::service::delete(req).await)
}
