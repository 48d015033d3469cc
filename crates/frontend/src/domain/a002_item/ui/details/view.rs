use super::view_model::ItemDetailsViewModel;
use contracts::domain::a002_item::aggregate::{Item, ItemDto};
use leptos::prelude::*;
use thaw::*;

use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;
use crate::system::auth::session::AuthSession;

/// Create/edit form shown above the item table
#[component]
pub fn ItemDetails(
    #[prop(into)] edit_target: Signal<Option<Item>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let vm = ItemDetailsViewModel::new(AuthSession::new(auth_state), use_notifications());

    vm.load_categories();
    Effect::new(move |_| vm.sync_with(edit_target.get()));

    let number_input = move |label: &'static str,
                             id: &'static str,
                             get: fn(&ItemDto) -> i64,
                             set: fn(&mut ItemDto, i64)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type="number"
                    id=id
                    min="0"
                    prop:value=move || vm.form.with(|f| get(f).to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse().unwrap_or(0);
                        vm.form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="details-container item-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit item" } else { "New item" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form details-form--grid">
                <div class="form-group">
                    <label for="item-name">"Name"</label>
                    <input
                        type="text"
                        id="item-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="item-author">"Author"</label>
                    <input
                        type="text"
                        id="item-author"
                        prop:value=move || vm.form.with(|f| f.author.clone())
                        on:input=move |ev| vm.form.update(|f| f.author = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="item-category">"Category"</label>
                    <select
                        id="item-category"
                        prop:value=move || vm.form.with(|f| f.category_id.clone())
                        on:change=move |ev| {
                            vm.form.update(|f| f.category_id = event_target_value(&ev))
                        }
                    >
                        <option value="">"Select a category"</option>
                        <For
                            each=move || vm.categories.get()
                            key=|c| c.id.clone()
                            children=move |c| {
                                let id = c.id.clone();
                                let selected_id = c.id.clone();
                                view! {
                                    <option
                                        value=id
                                        selected=move || vm.form.with(|f| f.category_id == selected_id)
                                    >
                                        {c.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                {number_input("Pay price", "item-price-pay", |f| f.price_pay, |f, v| f.price_pay = v)}
                {number_input("Input price", "item-price-input", |f| f.price_input, |f, v| f.price_input = v)}
                {number_input("Count", "item-count", |f| i64::from(f.count), |f, v| {
                    f.count = i32::try_from(v).unwrap_or(i32::MAX)
                })}
                {number_input("Pages", "item-weight", |f| i64::from(f.weight), |f, v| {
                    f.weight = i32::try_from(v).unwrap_or(i32::MAX)
                })}

                <div class="form-group">
                    <label for="item-slogan">"Slogan"</label>
                    <input
                        type="text"
                        id="item-slogan"
                        prop:value=move || vm.form.with(|f| f.slogan.clone())
                        on:input=move |ev| vm.form.update(|f| f.slogan = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="item-barcode">"Barcode"</label>
                    <input
                        type="text"
                        id="item-barcode"
                        prop:value=move || vm.form.with(|f| f.barcode.clone())
                        on:input=move |ev| vm.form.update(|f| f.barcode = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="item-pic">"Pictures (comma separated URLs)"</label>
                    <input
                        type="text"
                        id="item-pic"
                        prop:value=move || vm.pic_text.get()
                        on:input=move |ev| vm.pic_text.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="item-detail-pic">"Detail pictures (comma separated URLs)"</label>
                    <input
                        type="text"
                        id="item-detail-pic"
                        prop:value=move || vm.detail_pic_text.get()
                        on:input=move |ev| vm.detail_pic_text.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group form-group--wide">
                    <label for="item-description">"Description"</label>
                    <textarea
                        id="item-description"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || if vm.is_edit_mode() { "Update" } else { "Create" }}
                </Button>
                <Show when=move || vm.is_edit_mode()>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            vm.reset();
                            on_cancel.run(());
                        }
                    >
                        "Cancel"
                    </Button>
                </Show>
            </div>
        </div>
    }
}
