use leptos::prelude::*;

use crate::state::GlobalState;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");

    view! {
        <header>
            <div>
                <h1>"📄 AI PDF Summarizer"</h1>
                <div style="opacity: 0.6; font-size: 0.9em">
                    "Summaries, key points, mind maps and Q&A for your documents"
                </div>
            </div>
            <button
                data-role="primary"
                data-size="compact"
                style:margin-left="auto"
                on:click=move |_| state.reset()
            >
                "🔄 New Analysis"
            </button>
        </header>
    }
}
