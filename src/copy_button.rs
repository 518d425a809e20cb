use leptos::logging::log;
use leptos::{prelude::*, task::spawn_local};
use leptos_use::use_timeout_fn;

use crate::config::COPY_FEEDBACK_MS;
use crate::dom_utils;
use crate::error::WorkspaceError;
use crate::state::GlobalState;

pub const COPY_LABEL: &str = "📋 Copy";
pub const COPIED_LABEL: &str = "✅ Copied!";

/// Copies the summary (and key points) of the current result.
#[component]
pub fn CopyButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");
    let (copied, set_copied) = signal(false);

    let timeout_controls = use_timeout_fn(
        move |_| {
            set_copied.set(false);
        },
        COPY_FEEDBACK_MS as f64,
    );

    let on_copy = move |_event: web_sys::MouseEvent| {
        // Nothing stored means the clipboard is never touched.
        let text = match state.workspace.with_untracked(|ws| ws.copy_text()) {
            Ok(text) => text,
            Err(err) => {
                state.show_error(err);
                return;
            }
        };

        let start = timeout_controls.start.clone();
        let stop = timeout_controls.stop.clone();

        spawn_local(async move {
            match dom_utils::write_clipboard(&text).await {
                Ok(()) => {
                    stop();
                    set_copied.set(true);
                    start(());
                }
                Err(e) => {
                    log!("[ERROR] CopyButton: Error copying to clipboard: {:?}", e);
                    state.show_error(WorkspaceError::Clipboard);
                }
            }
        });
    };

    view! {
        <button
            class="copy-button"
            data-size="compact"
            data-copied=move || copied.get().to_string()
            style:background=move || if copied.get() { "var(--success)" } else { "" }
            on:click=on_copy
        >
            {move || if copied.get() { COPIED_LABEL } else { COPY_LABEL }}
        </button>
    }
}
