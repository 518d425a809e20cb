mod analysis;
mod api;
mod banner;
mod chat;
mod config;
mod copy_button;
mod dom_utils;
mod error;
mod error_box;
mod export;
mod header;
mod markup;
mod options;
mod results;
mod state;
mod upload;
mod workspace;

use leptos::prelude::*;
use leptos_use::use_event_listener;

use crate::config::ApiConfig;
use crate::error_box::ErrorBanner;
use crate::header::Header;
use crate::results::ResultsPanel;
use crate::state::GlobalState;
use crate::upload::UploadPanel;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let config = ApiConfig::from_location();
    leptos::logging::log!("[INFO] [App] Backend at '{}'.", config.base_url);
    let state = GlobalState::new(config);
    provide_context(state);

    // Results only live in memory; ask before navigating away from them.
    let _ = use_event_listener(window(), leptos::ev::beforeunload, move |ev| {
        if state
            .workspace
            .with_untracked(|ws| ws.has_unsaved_results())
        {
            ev.prevent_default();
            ev.set_return_value("");
        }
    });

    view! {
        <Header />
        <ErrorBanner />
        <main class="workspace">
            <UploadPanel />
            <ResultsPanel />
        </main>
    }
}
