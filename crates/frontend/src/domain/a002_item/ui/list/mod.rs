use contracts::domain::a002_item::aggregate::Item;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

use crate::domain::a002_item::api::{ItemGateway, ITEM_PAGE_SIZE};
use crate::domain::a002_item::ui::details::ItemDetails;
use crate::shared::browser::BrowserWindow;
use crate::shared::components::table::{format_amount, SortableHeaderCell};
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_controller::{
    spawn_controller_task, use_list_state, ListController, ListEnvironment, LoadStatus,
};
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;
use crate::system::auth::session::AuthSession;

type Controller = ListController<ItemGateway>;

#[component]
pub fn ItemList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let env = ListEnvironment {
        session: Rc::new(AuthSession::new(auth_state)),
        confirm: Rc::new(BrowserWindow),
        notify: Rc::new(use_notifications()),
        viewport: Rc::new(BrowserWindow),
    };
    let controller = Controller::new(ItemGateway, env, ITEM_PAGE_SIZE);
    let state = use_list_state(&controller);

    // "total product" badge, updated from every loaded page
    let total_products = RwSignal::new(0u64);
    controller.subscribe(move |s| {
        if let Some(total) = s.page.as_ref().and_then(|p| p.overall_count) {
            let _ = total_products.try_set(total);
        }
    });

    let controller = StoredValue::new_local(controller);

    Effect::new(move |_| {
        let c = controller.get_value();
        spawn_controller_task(async move { c.mount().await });
    });

    let toggle_sort = move |field: String| {
        let c = controller.get_value();
        spawn_controller_task(async move { c.toggle_sort(&field).await });
    };
    let go_prev = move |_| {
        let c = controller.get_value();
        spawn_controller_task(async move { c.go_to_previous_page().await });
    };
    let go_next = move |_| {
        let c = controller.get_value();
        spawn_controller_task(async move { c.go_to_next_page().await });
    };
    let edit = move |id: String| {
        let c = controller.get_value();
        spawn_controller_task(async move { c.request_edit(&id).await });
    };
    let remove = move |id: String| {
        let c = controller.get_value();
        spawn_controller_task(async move { c.request_delete(&id, None).await });
    };
    let on_saved = move |_| {
        let c = controller.get_value();
        c.clear_edit_target();
        spawn_controller_task(async move { c.refresh().await });
    };
    let on_cancel = move |_| controller.with_value(|c| c.clear_edit_target());

    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    // the form only reacts when the target itself changes, not on every reload
    let edit_target = Memo::new(move |_| state.with(|s| s.edit_target.clone()));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("items")}
                    <h1 class="page__title">"Items"</h1>
                    <span class="badge badge--primary" title="Total products">
                        {move || format_amount(i64::try_from(total_products.get()).unwrap_or(i64::MAX))}
                    </span>
                </div>
            </div>

            <ItemDetails
                edit_target=edit_target
                on_saved=Callback::new(on_saved)
                on_cancel=Callback::new(on_cancel)
            />

            <div class="page__content">
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.current_page().unwrap_or(1)))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.total_count()))
                    has_prev=Signal::derive(move || state.with(|s| s.has_prev_page()))
                    has_next=Signal::derive(move || state.with(|s| s.has_next_page()))
                    on_prev=Callback::new(go_prev)
                    on_next=Callback::new(go_next)
                />

                {move || state.with(|s| match &s.status {
                    LoadStatus::Failed(reason) => Some(view! {
                        <div class="alert alert--error">{reason.clone()}</div>
                    }),
                    _ => None,
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1200px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=70.0>""</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Name"
                                    sort_field="name"
                                    sort=sort
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=220.0
                                />
                                <TableHeaderCell min_width=150.0>"Author"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Category"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Price"
                                    sort_field="pricePay"
                                    sort=sort
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=100.0
                                />
                                <TableHeaderCell min_width=100.0>"Input price"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Count"
                                    sort_field="count"
                                    sort=sort
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=80.0
                                />
                                <TableHeaderCell min_width=80.0>"Pages"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Barcode"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.records().to_vec())
                                key=|item: &Item| item.id.clone()
                                children=move |item| {
                                    let id_for_edit = item.id.clone();
                                    let id_for_delete = item.id.clone();
                                    let cover = item.pic.first().cloned();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {cover.map(|src| view! {
                                                    <img class="table__thumb" src=src alt="cover" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.author.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.category.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__number">{format_amount(item.price_pay)}</span>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__number">{format_amount(item.price_input)}</span>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__number">{format_amount(i64::from(item.count))}</span>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__number">{item.weight}</span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.barcode.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="btn btn-icon"
                                                        title="Edit"
                                                        on:click=move |_| edit(id_for_edit.clone())
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="btn btn-icon btn-danger"
                                                        title="Delete"
                                                        on:click=move |_| remove(id_for_delete.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
