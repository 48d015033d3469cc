use serde::{Deserialize, Serialize};

use crate::domain::common::PagedCollection;

// ============================================================================
// Aggregate
// ============================================================================

/// Категория, к которой относится товар (развёрнутая ссылка)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Товар каталога (книга)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub author: String,
    /// Изображения для карточки товара
    #[serde(default)]
    pub pic: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_pay: i64,
    #[serde(default)]
    pub price_input: i64,
    #[serde(default)]
    pub slogan: String,
    #[serde(default)]
    pub barcode: String,
    /// Остаток на складе
    #[serde(default)]
    pub count: i32,
    /// Количество страниц
    #[serde(default)]
    pub weight: i32,
    #[serde(rename = "categoryId")]
    pub category: CategoryRef,
    #[serde(default)]
    pub detail_pic: Vec<String>,
}

impl Item {
    /// Данные для формы редактирования
    pub fn to_dto(&self) -> ItemDto {
        ItemDto {
            name: self.name.clone(),
            author: self.author.clone(),
            pic: self.pic.clone(),
            description: self.description.clone(),
            price_pay: self.price_pay,
            price_input: self.price_input,
            slogan: self.slogan.clone(),
            barcode: self.barcode.clone(),
            count: self.count,
            weight: self.weight,
            category_id: self.category.id.clone(),
            detail_pic: self.detail_pic.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления товара
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub pic: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_pay: i64,
    #[serde(default)]
    pub price_input: i64,
    #[serde(default)]
    pub slogan: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub weight: i32,
    pub category_id: String,
    #[serde(default)]
    pub detail_pic: Vec<String>,
}

impl ItemDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Item name is required".into());
        }
        if self.category_id.trim().is_empty() {
            return Err("Category is required".into());
        }
        if self.price_pay < 0 || self.price_input < 0 {
            return Err("Prices cannot be negative".into());
        }
        if self.count < 0 {
            return Err("Count cannot be negative".into());
        }
        if self.weight < 0 {
            return Err("Page number cannot be negative".into());
        }
        Ok(())
    }
}

/// Тело запроса на удаление товара
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemRequest {
    pub item_id: String,
}

// ============================================================================
// Page
// ============================================================================

/// Страница товаров в формате API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    pub curr_page: u32,
    pub next_page: bool,
    pub prev_page: bool,
    /// Количество товаров с учётом фильтра
    pub total_item: u64,
    pub total_page: u32,
    /// Количество товаров в каталоге целиком
    pub total_number: u64,
    pub products: Vec<Item>,
}

impl From<ItemPage> for PagedCollection<Item> {
    fn from(p: ItemPage) -> Self {
        Self {
            records: p.products,
            current_page: p.curr_page,
            has_next_page: p.next_page,
            has_prev_page: p.prev_page,
            total_count: p.total_item,
            total_pages: p.total_page,
            overall_count: Some(p.total_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_decodes_populated_category() {
        let raw = r#"{
            "_id": "i1",
            "name": "Dune",
            "author": "Frank Herbert",
            "pic": ["a.png", "b.png"],
            "description": "",
            "pricePay": 120000,
            "priceInput": 90000,
            "slogan": "",
            "barcode": "978-0441013593",
            "count": 7,
            "weight": 412,
            "categoryId": { "_id": "c1", "name": "sci-fi" },
            "detailPic": []
        }"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.category.name, "sci-fi");
        assert_eq!(item.price_pay, 120000);
        assert_eq!(item.to_dto().category_id, "c1");
    }

    #[test]
    fn page_keeps_overall_total() {
        let page = ItemPage {
            curr_page: 1,
            next_page: false,
            prev_page: false,
            total_item: 3,
            total_page: 1,
            total_number: 57,
            products: vec![],
        };
        let paged: PagedCollection<Item> = page.into();
        assert_eq!(paged.total_count, 3);
        assert_eq!(paged.overall_count, Some(57));
    }

    #[test]
    fn validate_rejects_missing_category_and_negative_values() {
        let mut dto = ItemDto {
            name: "Dune".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate(), Err("Category is required".to_string()));

        dto.category_id = "c1".into();
        dto.count = -1;
        assert!(dto.validate().is_err());

        dto.count = 2;
        assert!(dto.validate().is_ok());
    }
}
