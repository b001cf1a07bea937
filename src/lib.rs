pub mod comments;
pub mod components;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod notify;
pub mod pages;
pub mod storage;

use components::NavBar;
use config::WidgetConfig;
use leptos::*;
use leptos_router::*;
use pages::{HomePage, NotFoundPage, ProjectDetailPage};
use storage::{BrowserStorage, KeyValueStore};
use wasm_bindgen::prelude::*;

/// Drop the stored comments so a corrupted value cannot break the next load.
fn clear_stored_comments() {
    let config = WidgetConfig::default();
    let storage = BrowserStorage::new();
    let _ = storage.remove(&config.comments_key);
    let _ = storage.remove(&config.pinned_key);
}

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"This page hit an error. Try refreshing, or clear saved comments and reload."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        clear_stored_comments();
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reset & Reload"</button>
                </div>
            </main>
        }>
            <Router>
                <NavBar/>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/project/:id" view=ProjectDetailPage/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
