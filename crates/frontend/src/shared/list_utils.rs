/// Утилиты отображения сортировки в заголовках таблиц
use contracts::domain::common::{SortDirection, SortState};

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.column != field {
        return " ⇅";
    }
    match sort.direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
        SortDirection::Default => " ⇅",
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.is_active() && sort.column == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_active_column_only() {
        let sort = SortState {
            direction: SortDirection::Desc,
            column: "name".into(),
        };
        assert_eq!(get_sort_indicator(&sort, "name"), " ▼");
        assert_eq!(get_sort_indicator(&sort, "position"), " ⇅");
        assert_eq!(get_sort_class(&sort, "name"), "sort-icon active");
        assert_eq!(get_sort_class(&SortState::default(), ""), "sort-icon");
    }
}
