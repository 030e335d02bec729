//! Item Table Component
//!
//! One row per item with Edit/Delete buttons. Buttons address rows by item
//! id, so removing or reordering rows never retargets them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use item_sync::Item;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemTable() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <table class="items-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="itemsList">
                <For
                    each=move || store.items().get()
                    key=|item| (item.id.clone(), item.name.clone())
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </tbody>
        </table>
        <p class="item-count">{move || format!("{} items", store.items().read().len())}</p>
    }
}

#[component]
fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let row_id = item.id.clone();
    let is_editing = move || ctx.store.editing().with(|editing| editing.as_ref() == Some(&row_id));

    let edit_id = item.id.clone();
    let on_edit = move |_| {
        let _ = ctx.client().edit(&edit_id);
    };

    let delete_id = item.id.clone();
    let on_delete = move |_| {
        let client = ctx.client();
        let id = delete_id.clone();
        spawn_local(async move {
            let _ = client.delete(&id).await;
        });
    };

    view! {
        <tr class=move || if is_editing() { "item-row editing" } else { "item-row" }>
            <td>{item.name.clone()}</td>
            <td class="actions">
                <button class="btn" aria-label=format!("Edit item: {}", item.name) on:click=on_edit>
                    "Edit"
                </button>
                <button class="btn btn-danger" aria-label=format!("Delete item: {}", item.name) on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
