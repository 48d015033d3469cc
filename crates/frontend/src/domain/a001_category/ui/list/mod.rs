use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

use crate::domain::a001_category::api::{CategoryGateway, CATEGORY_PAGE_SIZE};
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::browser::BrowserWindow;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_controller::{
    spawn_controller_task, use_list_state, ListController, ListEnvironment, LoadStatus,
};
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;
use crate::system::auth::session::AuthSession;

type Controller = ListController<CategoryGateway>;

#[component]
pub fn CategoryList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let env = ListEnvironment {
        session: Rc::new(AuthSession::new(auth_state)),
        confirm: Rc::new(BrowserWindow),
        notify: Rc::new(use_notifications()),
        viewport: Rc::new(BrowserWindow),
    };
    let controller = Controller::new(CategoryGateway, env, CATEGORY_PAGE_SIZE);
    let state = use_list_state(&controller);
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
    let remove = move |category: Category| {
        let c = controller.get_value();
        spawn_controller_task(async move {
            c.request_delete(&category.id, category.banner_public_id())
                .await
        });
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
                    {icon("categories")}
                    <h1 class="page__title">"Categories"</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.total_count()).to_string()}
                    </span>
                </div>
            </div>

            <CategoryDetails
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
                    <Table attr:style="width: 100%; min-width: 720px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="Name"
                                    sort_field="name"
                                    sort=sort
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=200.0
                                />
                                <TableHeaderCell min_width=120.0>"Banner"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Active"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Position"
                                    sort_field="position"
                                    sort=sort
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=90.0
                                />
                                <TableHeaderCell min_width=100.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.records().to_vec())
                                key=|category| category.id.clone()
                                children=move |category| {
                                    let id_for_edit = category.id.clone();
                                    let for_delete = category.clone();
                                    let banner = category.banner.url.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {(!banner.is_empty()).then(|| view! {
                                                    <img class="table__thumb" src=banner alt="banner" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category.description.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {if category.active { "Yes" } else { "No" }}
                                            </TableCell>
                                            <TableCell>{category.position}</TableCell>
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
                                                        on:click=move |_| remove(for_delete.clone())
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
