use leptos::prelude::*;

use crate::markup;
use crate::workspace::ChatEntry;

#[component]
pub fn ChatMessage(#[prop(into)] entry: ChatEntry) -> impl IntoView {
    let html = markup::chat_entry_html(&entry);
    view! {
        <chat-message
            class="chat-message"
            data-role=entry.role.as_str()
            data-pending=entry.pending.to_string()
            inner_html=html
        ></chat-message>
    }
}
