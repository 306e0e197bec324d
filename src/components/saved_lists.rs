//! Saved Lists Component
//!
//! Card listing every saved snapshot with resume, edit, and delete
//! actions. Resume copies the items back into the working list; edit
//! does the same and drops the snapshot; delete asks for confirmation.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{
    store_load_tasks, store_set_saved_lists, use_app_store, AppStateStoreFields,
};

#[component]
pub fn SavedListsView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="card">
            <h2>"Saved Lists"</h2>
            <div class="card-content">
                <For
                    each=move || store.saved_lists().get()
                    key=|list| list.id
                    children=move |list| {
                        let id = list.id;
                        view! {
                            <div class="saved-list-row">
                                <span class="saved-list-name">{list.name.clone()}</span>
                                <div class="row-actions">
                                    <button
                                        class="icon-btn"
                                        title="Resume"
                                        on:click=move |_| {
                                            if let Some(items) = ctx.resume_list(id) {
                                                store_load_tasks(&store, items);
                                            }
                                        }
                                    >
                                        "⤓"
                                    </button>
                                    <button
                                        class="icon-btn"
                                        title="Edit"
                                        on:click=move |_| {
                                            if let Some(items) = ctx.edit_list(id) {
                                                store_load_tasks(&store, items);
                                                store_set_saved_lists(&store, ctx.saved_lists());
                                            }
                                        }
                                    >
                                        "✎"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="icon-btn danger"
                                        on_confirm=Callback::new(move |_: ()| {
                                            ctx.delete_list(id);
                                            store_set_saved_lists(&store, ctx.saved_lists());
                                        })
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
