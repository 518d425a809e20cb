use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dom_utils;
use crate::error::{Operation, WorkspaceError};
use crate::state::GlobalState;

pub const SUMMARY_PREFIX: &str = "summary";
pub const EXTRACTED_PREFIX: &str = "extracted";

pub fn export_file_name(prefix: &str, epoch_ms: u64) -> String {
    format!("{prefix}_{epoch_ms}.txt")
}

/// Posts the whole stored result to `/download` and saves what comes back.
pub fn download_summary(state: GlobalState) {
    let payload = match state.workspace.with_untracked(|ws| ws.download_payload().cloned()) {
        Ok(payload) => payload,
        Err(err) => {
            state.show_error(err);
            return;
        }
    };
    let config = state.config.get_value();

    spawn_local(async move {
        let outcome = api::download_summary(&config, &payload)
            .await
            .map_err(|e| {
                log!("[ERROR] [Export] Download request failed: {}", e);
                WorkspaceError::from_api(Operation::Download, e)
            })
            .and_then(|bytes| save(&bytes, SUMMARY_PREFIX, Operation::Download));
        if let Err(err) = outcome {
            state.show_error(err);
        }
    });
}

/// Asks the backend for the extracted plain text of the current session.
pub fn convert_to_text(state: GlobalState) {
    let session_id = match state
        .workspace
        .with_untracked(|ws| ws.convert_session().map(str::to_owned))
    {
        Ok(session_id) => session_id,
        Err(err) => {
            state.show_error(err);
            return;
        }
    };
    let config = state.config.get_value();

    spawn_local(async move {
        let outcome = api::convert_to_text(&config, &session_id)
            .await
            .map_err(|e| {
                log!("[ERROR] [Export] Convert request failed: {}", e);
                WorkspaceError::from_api(Operation::Convert, e)
            })
            .and_then(|bytes| save(&bytes, EXTRACTED_PREFIX, Operation::Convert));
        if let Err(err) = outcome {
            state.show_error(err);
        }
    });
}

fn save(bytes: &[u8], prefix: &str, operation: Operation) -> Result<(), WorkspaceError> {
    let file_name = export_file_name(prefix, dom_utils::now_ms());
    dom_utils::save_bytes(bytes, &file_name).map_err(|e| {
        log!("[ERROR] [Export] Could not save {}: {:?}", file_name, e);
        WorkspaceError::transport(operation)
    })?;
    log!("[INFO] [Export] Saved {} ({} bytes).", file_name, bytes.len());
    Ok(())
}
