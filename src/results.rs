use leptos::prelude::*;

use crate::chat::ChatInterface;
use crate::copy_button::CopyButton;
use crate::export;
use crate::markup;
use crate::state::GlobalState;
use crate::workspace::{Phase, Tab};

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");
    let phase = Memo::new(move |_| state.workspace.with(|ws| ws.phase()));

    view! {
        <results-panel>
            {move || match phase.get() {
                Phase::Empty => {
                    view! {
                        <empty-state>
                            <div style="font-size: 3em">"📚"</div>
                            <div>"Upload a PDF to see its summary here"</div>
                        </empty-state>
                    }
                        .into_any()
                }
                Phase::Loading => {
                    view! {
                        <loading-state>
                            <span class="spinner"></span>
                            <div>"Analyzing your document..."</div>
                        </loading-state>
                    }
                        .into_any()
                }
                Phase::Results => view! { <ResultsContent /> }.into_any(),
            }}
        </results-panel>
    }
}

#[component]
fn ResultsContent() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");

    view! {
        <results-content>
            <results-toolbar>
                <CopyButton />
                <button data-size="compact" on:click=move |_| export::download_summary(state)>
                    "💾 Download"
                </button>
                <button data-size="compact" on:click=move |_| export::convert_to_text(state)>
                    "📝 Convert to Text"
                </button>
            </results-toolbar>
            <MetadataBadges />
            <TabBar />
            <TabPanels />
        </results-content>
    }
}

#[component]
fn MetadataBadges() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");
    let badges = Memo::new(move |_| {
        state.workspace.with(|ws| {
            ws.data()
                .map(|data| markup::metadata_badges(&data.metadata))
                .unwrap_or_default()
        })
    });

    view! {
        <metadata-bar>
            {move || {
                badges
                    .get()
                    .into_iter()
                    .map(|badge| {
                        view! {
                            <div class="metadata-item">{format!("{} {}", badge.icon, badge.label)}</div>
                        }
                    })
                    .collect_view()
            }}
        </metadata-bar>
    }
}

#[component]
fn TabBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");

    view! {
        <div class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let visible = Memo::new(move |_| state.workspace.with(|ws| ws.tab_visible(tab)));
                    let active = Memo::new(move |_| state.workspace.with(|ws| ws.active_tab() == tab));
                    view! {
                        <button
                            class="tab"
                            data-tab=tab.id()
                            data-active=move || active.get().to_string()
                            style:display=move || if visible.get() { "block" } else { "none" }
                            on:click=move |_| state.workspace.update(|ws| ws.select_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TabPanels() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");
    let active_tab = Memo::new(move |_| state.workspace.with(|ws| ws.active_tab()));

    let summary = Memo::new(move |_| {
        state
            .workspace
            .with(|ws| ws.data().map(|d| d.summary.clone()).unwrap_or_default())
    });
    let key_points = Memo::new(move |_| {
        state
            .workspace
            .with(|ws| ws.data().and_then(|d| d.key_points.clone()).unwrap_or_default())
    });
    let mindmap_html = Memo::new(move |_| {
        state.workspace.with(|ws| {
            ws.data()
                .and_then(|d| d.mind_map())
                .map(|map| markup::render_mindmap_html(&map))
                .unwrap_or_default()
        })
    });

    let is_active = move |tab: Tab| move || (active_tab.get() == tab).to_string();

    view! {
        <tab-content id=Tab::Summary.id() data-active=is_active(Tab::Summary)>
            <div class="summary-text" style="white-space: pre-wrap">
                {move || summary.get()}
            </div>
        </tab-content>
        <tab-content id=Tab::KeyPoints.id() data-active=is_active(Tab::KeyPoints)>
            <div class="key-points" style="white-space: pre-wrap">
                {move || key_points.get()}
            </div>
        </tab-content>
        <tab-content id=Tab::MindMap.id() data-active=is_active(Tab::MindMap)>
            <div class="mindmap-container" inner_html=move || mindmap_html.get()></div>
        </tab-content>
        <tab-content id=Tab::Chat.id() data-active=is_active(Tab::Chat)>
            <ChatInterface />
        </tab-content>
    }
}
