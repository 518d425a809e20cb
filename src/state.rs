use gloo_timers::callback::Timeout;
use leptos::logging::log;
use leptos::prelude::*;

use crate::banner::Banner;
use crate::config::{ApiConfig, ERROR_DISMISS_MS};
use crate::error::WorkspaceError;
use crate::workspace::Workspace;

#[derive(Clone, Copy)]
pub struct GlobalState {
    pub config: StoredValue<ApiConfig>,
    pub workspace: RwSignal<Workspace>,
    // Browser handle of the selected file, kept next to its description in `workspace`.
    pub picked_file: StoredValue<Option<web_sys::File>, LocalStorage>,
    pub chat_input: RwSignal<String>,
    pub error: RwSignal<Banner>,
}

impl GlobalState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            workspace: RwSignal::new(Workspace::new()),
            picked_file: StoredValue::new_local(None),
            chat_input: RwSignal::new(String::new()),
            error: RwSignal::new(Banner::default()),
        }
    }

    /// Runs a workspace transition and returns its result. `None` once the
    /// signal has been disposed.
    pub fn transition<T>(&self, f: impl FnOnce(&mut Workspace) -> T) -> Option<T> {
        self.workspace.try_update(f)
    }

    /// Replaces the banner. It disappears after `ERROR_DISMISS_MS` unless a
    /// newer error took its place in the meantime.
    pub fn show_error(&self, err: WorkspaceError) {
        log!("[WARN] [Banner] {}", err);
        let Some(serial) = self.error.try_update(|banner| banner.show(err)) else {
            return;
        };

        let error = self.error;
        Timeout::new(ERROR_DISMISS_MS, move || {
            let _ = error.try_update(|banner| banner.expire(serial));
        })
        .forget();
    }

    pub fn clear_error(&self) {
        self.error.update(Banner::dismiss);
    }

    pub fn reset(&self) {
        self.transition(Workspace::reset);
        self.picked_file.set_value(None);
        self.chat_input.set(String::new());
        self.clear_error();
        log!("[INFO] [Workspace] Reset to empty state.");
    }
}
