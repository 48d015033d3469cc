//! Постраничная выборка и сортировка для списков `GET /api/<entity>`

use contracts::domain::common::SortDirection;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Нормализованные параметры страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// С 1
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn from_query(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.filter(|p| *p >= 1).unwrap_or(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// Метаданные страницы в ответе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub next_page: bool,
    pub prev_page: bool,
}

impl PageMeta {
    pub fn compute(request: PageRequest, total: u64) -> Self {
        let limit = u64::from(request.limit);
        let total_pages = u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX);
        Self {
            current_page: request.page,
            total_pages,
            next_page: request.page < total_pages,
            prev_page: request.page > 1,
        }
    }
}

/// Колонка сортировки: имя в API → выражение SQL
pub type SortColumn = (&'static str, &'static str);

/// `ORDER BY` для запроса списка.
///
/// Неизвестная колонка или направление `default` дают порядок по умолчанию.
/// `id_column` замыкает сортировку, чтобы равные значения не путали страницы.
pub fn order_by_clause(
    direction: Option<SortDirection>,
    column: Option<&str>,
    allowed: &[SortColumn],
    default_order: &str,
    id_column: &str,
) -> String {
    let sql_column = column.and_then(|c| {
        allowed
            .iter()
            .find(|(api, _)| *api == c)
            .map(|(_, sql)| *sql)
    });
    match (direction, sql_column) {
        (Some(SortDirection::Asc), Some(sql)) => format!("{} ASC, {}", sql, id_column),
        (Some(SortDirection::Desc), Some(sql)) => format!("{} DESC, {}", sql, id_column),
        _ => format!("{}, {}", default_order, id_column),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[SortColumn] = &[("name", "c.name"), ("position", "c.position")];

    #[test]
    fn page_request_defaults_and_clamps() {
        assert_eq!(
            PageRequest::from_query(None, None),
            PageRequest { page: 1, limit: 10 }
        );
        assert_eq!(PageRequest::from_query(Some(0), Some(0)).page, 1);
        assert_eq!(PageRequest::from_query(Some(0), Some(0)).limit, 1);
        assert_eq!(PageRequest::from_query(Some(3), Some(500)).limit, 100);
        assert_eq!(PageRequest::from_query(Some(3), Some(8)).offset(), 16);
    }

    #[test]
    fn page_meta_flags() {
        let meta = PageMeta::compute(PageRequest { page: 2, limit: 10 }, 42);
        assert_eq!(meta.total_pages, 5);
        assert!(meta.next_page);
        assert!(meta.prev_page);

        let last = PageMeta::compute(PageRequest { page: 5, limit: 10 }, 42);
        assert!(!last.next_page);

        let empty = PageMeta::compute(PageRequest { page: 1, limit: 10 }, 0);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.next_page);
        assert!(!empty.prev_page);
    }

    #[test]
    fn order_by_uses_whitelist() {
        let default = "c.position ASC, c.name ASC";
        let fallback = "c.position ASC, c.name ASC, c.id";
        let order = |dir, col| order_by_clause(dir, col, COLUMNS, default, "c.id");
        assert_eq!(order(Some(SortDirection::Desc), Some("name")), "c.name DESC, c.id");
        assert_eq!(order(Some(SortDirection::Asc), Some("position")), "c.position ASC, c.id");
        assert_eq!(order(Some(SortDirection::Asc), Some("name; DROP")), fallback);
        assert_eq!(order(Some(SortDirection::Default), Some("name")), fallback);
        assert_eq!(order(None, None), fallback);
    }
}
