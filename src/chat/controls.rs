use leptos::ev::KeyboardEvent;
use leptos::{html, prelude::*};

/// Plain Enter sends. Enter also confirms an IME composition, which must not.
fn sends_question(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

#[component]
pub fn ChatControls(
    #[prop(into)] input: RwSignal<String>,
    #[prop(into)] ref_input: NodeRef<html::Input>,
    #[prop(into)] submit: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        if sends_question(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            submit.run(());
        }
    };

    view! {
        <chat-controls>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <div style="display:flex; padding-left: 4px; padding-right: 4px; padding-bottom: 4px; gap: 4px;">
                    <input
                        type="text"
                        style="flex-grow: 1"
                        prop:value=move || input.get()
                        on:input:target=move |ev| input.set(ev.target().value())
                        placeholder="Ask a question about the document..."
                        node_ref=ref_input
                        on:keydown=on_keydown
                    />
                    <button type="submit" data-role="primary" style="flex-shrink:0">
                        "Send"
                    </button>
                </div>
            </form>
        </chat-controls>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_sends_unless_composing_or_shifted() {
        assert!(sends_question("Enter", false, false));
        assert!(!sends_question("Enter", false, true));
        assert!(!sends_question("Enter", true, false));
        assert!(!sends_question("a", false, false));
    }
}
