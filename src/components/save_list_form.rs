//! Save List Form Component
//!
//! Card for snapshotting the working list under a name. A successful
//! save clears the working list and the name input.

use leptos::prelude::*;

use crate::console;
use crate::context::use_app_context;
use crate::store::{store_set_saved_lists, use_app_store, AppStateStoreFields};

#[component]
pub fn SaveListForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (list_name, set_list_name) = signal(String::new());

    let can_save = move || {
        !list_name.get().trim().is_empty() && !store.tasks().read().is_empty()
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = list_name.get();
        let items = store.tasks().read().items().to_vec();

        if let Some(saved) = ctx.save_list(&name, &items) {
            console::log(&format!(
                "[SAVE] stored list '{}' with {} items",
                saved.name,
                saved.items.len()
            ));
            store.tasks().write().clear();
            store_set_saved_lists(&store, ctx.saved_lists());
            set_list_name.set(String::new());
        }
    };

    view! {
        <div class="card">
            <h2>"Save Current List"</h2>
            <div class="card-content">
                <form class="save-list-form" on:submit=on_save>
                    <input
                        type="text"
                        placeholder="Enter list name..."
                        prop:value=move || list_name.get()
                        on:input=move |ev| set_list_name.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || !can_save()>
                        "Save"
                    </button>
                </form>
            </div>
        </div>
    }
}
