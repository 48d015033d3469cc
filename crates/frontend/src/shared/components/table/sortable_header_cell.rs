//! Сортируемая ячейка заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_field="name"
//!     sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::common::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Колонка, которую сервер принимает в параметре `column`
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    sort: Signal<SortState>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();
    let field_for_class = sort_field;

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, &field_for_class))>
                    {move || sort.with(|s| get_sort_indicator(s, &field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
