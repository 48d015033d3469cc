/// Одна страница записей с метаданными пагинации.
///
/// Общая форма для всех сущностей; страницы конкретных агрегатов
/// (`CategoryPage`, `ItemPage`) приводятся к ней через `From`.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedCollection<E> {
    /// Записи в порядке, который вернул сервер
    pub records: Vec<E>,
    /// Номер страницы, начиная с 1
    pub current_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub total_count: u64,
    pub total_pages: u32,
    /// Общее число записей без учёта фильтра, если сервер его сообщает
    pub overall_count: Option<u64>,
}

impl<E> PagedCollection<E> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
