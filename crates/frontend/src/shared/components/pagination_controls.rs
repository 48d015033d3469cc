use crate::shared::icons::icon;
use leptos::prelude::*;

/// Навигация назад/вперёд по страницам, которые отдаёт сервер.
///
/// Доступность кнопок берётся из флагов страницы, а не вычисляется.
#[component]
pub fn PaginationControls(
    /// Текущая страница (с 1)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(into)]
    has_prev: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    on_prev: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !has_prev.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get().max(1),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !has_next.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
