//! Task List Component
//!
//! The Current List card: one row per task with a selection checkbox,
//! toggle-done and delete actions, plus the bulk-delete footer shown
//! while anything is selected.

use leptos::prelude::*;

use crate::store::{
    store_delete_selected, store_delete_task, store_toggle_done, store_toggle_select,
    use_app_store, AppStateStoreFields,
};

/// Current working list with per-row and bulk actions
#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    let selected_count = move || store.tasks().read().selected_count();

    view! {
        <div class="card">
            <h2>"Current List"</h2>
            <div class="card-content">
                <For
                    // key includes done so a toggled row re-renders
                    each=move || store.tasks().read().items().to_vec()
                    key=|item| (item.id, item.done)
                    children=move |item| {
                        let id = item.id;
                        let done = item.done;
                        view! {
                            <div class="task-row">
                                <div class="task-content">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || store.tasks().read().is_selected(id)
                                        on:change=move |_| store_toggle_select(&store, id)
                                    />
                                    <span class=move || {
                                        if done { "task-text done" } else { "task-text" }
                                    }>
                                        {item.text.clone()}
                                    </span>
                                </div>
                                <div class="task-actions">
                                    <button
                                        class="icon-btn"
                                        title=move || if done { "Mark not done" } else { "Mark done" }
                                        on:click=move |_| store_toggle_done(&store, id)
                                    >
                                        {if done { "✗" } else { "✓" }}
                                    </button>
                                    <button
                                        class="icon-btn danger"
                                        title="Delete"
                                        on:click=move |_| store_delete_task(&store, id)
                                    >
                                        "×"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || { selected_count() > 0 }>
                <div class="card-footer">
                    <span>
                        {move || {
                            let n = selected_count();
                            format!("{} item{} selected", n, if n > 1 { "s" } else { "" })
                        }}
                    </span>
                    <button
                        class="icon-btn danger"
                        on:click=move |_| store_delete_selected(&store)
                    >
                        "delete selected ×"
                    </button>
                </div>
            </Show>
        </div>
    }
}
