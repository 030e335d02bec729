//! Status Line Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn StatusLine() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <p
            id="statusMessage"
            class=move || format!("status status-{}", store.status().with(|slot| slot.status().kind()))
            role="status"
            aria-live="polite"
        >
            {move || store.status().with(|slot| slot.status().to_string())}
        </p>
    }
}
