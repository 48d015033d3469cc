use serde::{Deserialize, Serialize};

use super::SortDirection;

/// Параметры запроса списка (`GET /api/<entity>?...`).
///
/// Если задан `id`, сервер игнорирует пагинацию и сортировку
/// и возвращает одну запись вместо страницы.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Фильтр товаров по категории
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl ListQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, direction: SortDirection, column: impl Into<String>) -> Self {
        self.direction = Some(direction);
        self.column = Some(column.into());
        self
    }

    /// Запрос одной записи, а не страницы
    pub fn is_single(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_record_detection_ignores_empty_id() {
        assert!(ListQuery::by_id("42").is_single());
        assert!(!ListQuery::by_id("").is_single());
        assert!(!ListQuery::page(1, 10).is_single());
    }

    #[test]
    fn sort_is_carried_in_type_and_column() {
        let query = ListQuery::page(2, 10).with_sort(SortDirection::Asc, "name");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["type"], "asc");
        assert_eq!(json["column"], "name");
        assert_eq!(json["page"], 2);
        assert!(json.get("id").is_none());
    }
}
