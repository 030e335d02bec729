//! Item Form Component
//!
//! Name input plus hidden id. Submits as create, or as update while an item
//! is being edited.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = store.form_name().get_untracked();
        let client = ctx.client();
        spawn_local(async move {
            // Failures are already on the status line.
            let _ = client.submit(&name).await;
        });
    };

    let is_editing = move || store.editing().read().is_some();

    view! {
        <form id="crudForm" class="item-form" on:submit=submit>
            <div class="item-form-row">
                <input
                    type="text"
                    id="itemName"
                    placeholder="Item name"
                    aria-label="Item name"
                    prop:value=move || store.form_name().get()
                    on:input=move |ev| store.form_name().set(event_target_value(&ev))
                />
                <input
                    type="hidden"
                    id="itemId"
                    prop:value=move || store.editing().get().map(|id| id.to_string()).unwrap_or_default()
                />
                <button type="submit" class="btn btn-primary">
                    {move || if is_editing() { "Update" } else { "Create" }}
                </button>
            </div>

            {move || store.editing().get().map(|id| view! {
                <button type="button" class="btn cancel-btn" on:click=move |_| ctx.client().cancel_edit()>
                    "Cancel editing #" {id.to_string()}
                </button>
            })}
        </form>
    }
}
