use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::GlobalState;
use crate::workspace::Resolution;

/// Sends the question currently in the chat input about the active session.
pub fn send_chat(state: GlobalState) {
    let question = state.chat_input.get_untracked();
    let ticket = match state.transition(|ws| ws.begin_chat(&question)) {
        Some(Ok(ticket)) => ticket,
        Some(Err(err)) => {
            state.show_error(err);
            return;
        }
        None => return,
    };
    state.chat_input.set(String::new());
    let config = state.config.get_value();

    spawn_local(async move {
        log!("[DEBUG] [Chat] Asking session {}.", ticket.session_id);
        let outcome = api::chat(&config, &ticket.session_id, &ticket.question).await;
        match state.transition(|ws| ws.finish_chat(&ticket, outcome)) {
            Some(Resolution::Applied) => log!("[DEBUG] [Chat] Answer received."),
            Some(Resolution::Rejected(err)) => state.show_error(err),
            Some(Resolution::Stale) => log!("[DEBUG] [Chat] Discarding superseded answer."),
            None => {}
        }
    });
}
