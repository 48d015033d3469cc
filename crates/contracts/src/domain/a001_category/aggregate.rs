use serde::{Deserialize, Serialize};

use crate::domain::common::PagedCollection;

// ============================================================================
// Aggregate
// ============================================================================

/// Баннер категории (ссылка на внешнее хранилище изображений)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default)]
    pub url: String,
    /// Идентификатор ресурса во внешнем хранилище
    #[serde(default)]
    pub public_id: String,
}

/// Категория каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub banner: Banner,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub position: i32,
}

impl Category {
    /// Данные для формы редактирования
    pub fn to_dto(&self) -> CategoryDto {
        CategoryDto {
            name: self.name.clone(),
            banner: self.banner.clone(),
            description: self.description.clone(),
            active: self.active,
            position: self.position,
        }
    }

    /// Идентификатор баннера во внешнем хранилище, если он есть
    pub fn banner_public_id(&self) -> Option<&str> {
        let id = self.banner.public_id.trim();
        (!id.is_empty()).then_some(id)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления категории
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    #[serde(default)]
    pub banner: Banner,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub position: i32,
}

impl CategoryDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        if self.position < 0 {
            return Err("Position cannot be negative".into());
        }
        Ok(())
    }
}

/// Тело запроса на удаление категории
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCategoryRequest {
    pub category_id: String,
    /// Баннер, который внешний сервис должен удалить вместе с категорией
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

// ============================================================================
// Page
// ============================================================================

/// Страница категорий в формате API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub curr_page: u32,
    pub next_page: bool,
    pub prev_page: bool,
    pub total_category: u64,
    pub total_page: u32,
    pub categories: Vec<Category>,
}

impl From<CategoryPage> for PagedCollection<Category> {
    fn from(p: CategoryPage) -> Self {
        Self {
            records: p.categories,
            current_page: p.curr_page,
            has_next_page: p.next_page,
            has_prev_page: p.prev_page,
            total_count: p.total_category,
            total_pages: p.total_page,
            overall_count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_decodes_from_api_shape() {
        let raw = r#"{
            "currPage": 2,
            "nextPage": true,
            "prevPage": true,
            "totalCategory": 42,
            "totalPage": 5,
            "categories": [
                {
                    "_id": "c1",
                    "name": "novels",
                    "banner": { "url": "https://cdn/x.png", "public_id": "x" },
                    "description": "",
                    "active": true,
                    "position": 3
                }
            ]
        }"#;
        let page: CategoryPage = serde_json::from_str(raw).unwrap();
        let paged: PagedCollection<Category> = page.into();
        assert_eq!(paged.current_page, 2);
        assert!(paged.has_next_page && paged.has_prev_page);
        assert_eq!(paged.total_count, 42);
        assert_eq!(paged.total_pages, 5);
        assert_eq!(paged.records[0].banner_public_id(), Some("x"));
    }

    #[test]
    fn validate_requires_name() {
        let dto = CategoryDto {
            name: "  ".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = CategoryDto {
            name: "Comics".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn delete_request_omits_missing_public_id() {
        let req = DeleteCategoryRequest {
            category_id: "c1".into(),
            public_id: None,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"categoryId":"c1"}"#
        );
    }
}
