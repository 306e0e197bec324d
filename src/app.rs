//! To-Do Stash App
//!
//! Root component: builds the reactive store and the saved-list
//! repository, hydrates from localStorage, and lays out the cards.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, SaveListForm, SavedListsView, TaskListView};
use crate::console;
use crate::context::AppContext;
use crate::saved::SavedListRepository;
use crate::storage::BrowserStorage;
use crate::store::{store_set_saved_lists, AppState};

#[component]
pub fn App() -> impl IntoView {
    // Id counters for items and snapshots both start at the startup
    // timestamp, matching ids minted by earlier sessions
    let seed = js_sys::Date::now() as u64;

    let store = Store::new(AppState::new(seed));
    provide_context(store);

    let mut repo = SavedListRepository::with_seed(Box::new(BrowserStorage::new()), seed);
    repo.hydrate();
    console::log(&format!("[APP] hydrated {} saved lists", repo.lists().len()));

    let ctx = AppContext::new(repo);
    provide_context(ctx);
    store_set_saved_lists(&store, ctx.saved_lists());

    view! {
        <div class="app-container">
            <h1 class="app-title">"TO DO LIST"</h1>

            <NewTaskForm />
            <TaskListView />
            <SaveListForm />
            <SavedListsView />
        </div>
    }
}
