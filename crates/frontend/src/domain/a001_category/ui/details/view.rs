use super::view_model::CategoryDetailsViewModel;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use thaw::*;

use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;
use crate::system::auth::session::AuthSession;

/// Create/edit form shown above the category table
#[component]
pub fn CategoryDetails(
    #[prop(into)] edit_target: Signal<Option<Category>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let vm = CategoryDetailsViewModel::new(AuthSession::new(auth_state), use_notifications());

    Effect::new(move |_| vm.sync_with(edit_target.get()));

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit category" } else { "New category" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="category-name">"Name"</label>
                    <input
                        type="text"
                        id="category-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Category name"
                    />
                </div>

                <div class="form-group">
                    <label for="category-banner-url">"Banner URL"</label>
                    <input
                        type="text"
                        id="category-banner-url"
                        prop:value=move || vm.form.with(|f| f.banner.url.clone())
                        on:input=move |ev| vm.form.update(|f| f.banner.url = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="category-banner-id">"Banner public id"</label>
                    <input
                        type="text"
                        id="category-banner-id"
                        prop:value=move || vm.form.with(|f| f.banner.public_id.clone())
                        on:input=move |ev| {
                            vm.form.update(|f| f.banner.public_id = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="category-description">"Description"</label>
                    <textarea
                        id="category-description"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        rows="3"
                    />
                </div>

                <div class="form-group">
                    <label for="category-position">"Position"</label>
                    <input
                        type="number"
                        id="category-position"
                        min="0"
                        prop:value=move || vm.form.with(|f| f.position.to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(0);
                            vm.form.update(|f| f.position = value);
                        }
                    />
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="category-active"
                        prop:checked=move || vm.form.with(|f| f.active)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.form.update(|f| f.active = checked);
                        }
                    />
                    <label for="category-active">"Active"</label>
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
