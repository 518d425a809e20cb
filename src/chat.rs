mod actions;
mod controls;
mod message;

use leptos::{html, prelude::*};

use crate::state::GlobalState;
use actions::send_chat;
use controls::ChatControls;
use message::ChatMessage;

pub const CHAT_PLACEHOLDER: &str = "Ask questions about your document...";

#[component]
pub fn ChatInterface() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");

    let transcript = Memo::new(move |_| state.workspace.with(|ws| ws.transcript().to_vec()));

    let ref_input: NodeRef<html::Input> = NodeRef::new();
    let ref_history: NodeRef<html::Div> = NodeRef::new();

    // Keep the newest message in view.
    Effect::new(move |_| {
        transcript.track();
        if let Some(history) = ref_history.get() {
            history.set_scroll_top(history.scroll_height());
        }
    });

    let submit = Callback::new(move |_: ()| {
        send_chat(state);
        if let Some(input) = ref_input.get_untracked() {
            let _ = input.focus();
        }
    });

    view! {
        <chat-interface>
            <div class="chat-history" node_ref=ref_history>
                {move || {
                    let entries = transcript.get();
                    if entries.is_empty() {
                        view! {
                            <div style="text-align: center; opacity: 0.6; padding: 2rem;">
                                {CHAT_PLACEHOLDER}
                            </div>
                        }
                            .into_any()
                    } else {
                        entries
                            .into_iter()
                            .map(|entry| view! { <ChatMessage entry=entry /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <ChatControls input=state.chat_input ref_input=ref_input submit=submit />
        </chat-interface>
    }
}
