use leptos::prelude::*;

use crate::state::GlobalState;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");

    view! {
        {move || {
            state
                .error
                .with(|banner| banner.message().cloned())
                .map(|error| {
                    view! {
                        <error-box role="alert">
                            <span>{error.banner_text()}</span>
                            <button
                                data-size="compact"
                                data-role="outline"
                                style="margin-left: auto"
                                on:click=move |_| state.clear_error()
                            >
                                "dismiss"
                            </button>
                        </error-box>
                    }
                })
        }}
    }
}
