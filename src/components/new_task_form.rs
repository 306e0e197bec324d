//! New Task Form Component
//!
//! Form for appending a task to the working list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_task, use_app_store, AppStateStoreFields};

/// Form for creating new tasks. The button shows the position the new
/// task will take and stays disabled while the input is blank; the store
/// re-checks blank text either way.
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if store_add_task(&store, &text).is_some() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button
                type="submit"
                disabled=move || new_text.get().trim().is_empty()
            >
                {move || format!("Add #{}", store.tasks().read().len() + 1)}
            </button>
        </form>
    }
}
