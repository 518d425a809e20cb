use leptos::ev::{DragEvent, SubmitEvent};
use leptos::logging::log;
use leptos::task::spawn_local;
use leptos::{html, prelude::*};

use crate::api::{self, ApiError};
use crate::dom_utils;
use crate::options::{Audience, Language, SummaryLength, UploadOptions};
use crate::state::GlobalState;
use crate::workspace::{Resolution, Workspace};

pub fn submit_upload(state: GlobalState) {
    let ticket = match state.transition(Workspace::begin_upload) {
        Some(Ok(ticket)) => ticket,
        Some(Err(err)) => {
            state.show_error(err);
            return;
        }
        None => return,
    };
    state.clear_error();
    let file = state.picked_file.get_value();
    let config = state.config.get_value();

    spawn_local(async move {
        let outcome = match file {
            Some(file) => match dom_utils::read_file(&file).await {
                Ok(payload) => {
                    log!(
                        "[INFO] [Upload] Sending '{}' ({} bytes).",
                        payload.name,
                        payload.bytes.len()
                    );
                    api::upload(&config, payload, &ticket.options).await
                }
                Err(e) => Err(ApiError::Transport(e.to_string())),
            },
            None => Err(ApiError::Transport("no file handle for selection".to_string())),
        };

        match state.transition(|ws| ws.finish_upload(&ticket, outcome)) {
            Some(Resolution::Applied) => log!("[INFO] [Upload] Analysis received."),
            Some(Resolution::Rejected(err)) => state.show_error(err),
            Some(Resolution::Stale) => log!("[DEBUG] [Upload] Discarding superseded reply."),
            None => {}
        }
    });
}

fn update_options(state: GlobalState, f: impl FnOnce(&mut UploadOptions)) {
    state.workspace.update(|ws| f(ws.options_mut()));
}

#[component]
pub fn UploadPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState context not found");
    let (dragover, set_dragover) = signal(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let selected_name = Memo::new(move |_| {
        state
            .workspace
            .with(|ws| ws.selected_file().map(|f| f.name.clone()))
    });
    let uploading = Memo::new(move |_| state.workspace.with(|ws| ws.is_uploading()));
    let options = Memo::new(move |_| state.workspace.with(|ws| ws.options().clone()));

    // A reset clears the selection; the native input has to follow.
    Effect::new(move |_| {
        if selected_name.get().is_none() {
            if let Some(input) = file_input.get() {
                input.set_value("");
            }
        }
    });

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragover.set(false);
        let file = dom_utils::dropped_file(&ev);
        let candidate = file.as_ref().map(dom_utils::describe_file);
        match state.transition(|ws| ws.drop_file(candidate)) {
            Some(Ok(())) => {
                state.picked_file.set_value(file);
                state.clear_error();
            }
            Some(Err(err)) => state.show_error(err),
            None => {}
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_upload(state);
    };

    view! {
        <upload-panel>
            <form on:submit=on_submit>
                <input
                    type="file"
                    name="file"
                    accept=".pdf,application/pdf"
                    style="display: none"
                    node_ref=file_input
                    on:change:target=move |ev| {
                        if let Some(file) = ev.target().files().and_then(|files| files.get(0)) {
                            let selected = dom_utils::describe_file(&file);
                            state.picked_file.set_value(Some(file));
                            state.workspace.update(|ws| ws.select_file(selected));
                            state.clear_error();
                        }
                    }
                />
                <upload-zone
                    data-dragover=move || dragover.get().to_string()
                    on:click=move |_| {
                        if let Some(input) = file_input.get() {
                            input.click();
                        }
                    }
                    on:dragover=move |ev: DragEvent| {
                        ev.prevent_default();
                        set_dragover.set(true);
                    }
                    on:dragleave=move |_| set_dragover.set(false)
                    on:drop=on_drop
                >
                    <div style="font-size: 2em">"📁"</div>
                    <div>"Click to choose a PDF or drop it here"</div>
                    {move || {
                        selected_name
                            .get()
                            .map(|name| view! { <div class="file-name">{format!("📄 {name}")}</div> })
                    }}
                </upload-zone>

                <upload-options>
                    <label>
                        "Audience"
                        <select on:change:target=move |ev| {
                            if let Some(audience) = Audience::parse(&ev.target().value()) {
                                update_options(state, |o| o.audience = audience);
                            }
                        }>
                            {Audience::ALL
                                .into_iter()
                                .map(|audience| {
                                    view! {
                                        <option
                                            value=audience.as_str()
                                            prop:selected=move || options.get().audience == audience
                                        >
                                            {audience.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Summary length"
                        <select on:change:target=move |ev| {
                            if let Some(length) = SummaryLength::parse(&ev.target().value()) {
                                update_options(state, |o| o.length = length);
                            }
                        }>
                            {SummaryLength::ALL
                                .into_iter()
                                .map(|length| {
                                    view! {
                                        <option
                                            value=length.as_str()
                                            prop:selected=move || options.get().length == length
                                        >
                                            {length.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Output language"
                        <select on:change:target=move |ev| {
                            if let Some(language) = Language::parse(&ev.target().value()) {
                                update_options(state, |o| o.language = language);
                            }
                        }>
                            {Language::ALL
                                .into_iter()
                                .map(|language| {
                                    view! {
                                        <option
                                            value=language.as_str()
                                            prop:selected=move || options.get().language == language
                                        >
                                            {language.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || options.get().include_key_points
                            on:change:target=move |ev| {
                                let checked = ev.target().checked();
                                update_options(state, |o| o.include_key_points = checked);
                            }
                        />
                        "Extract key points"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || options.get().include_mindmap
                            on:change:target=move |ev| {
                                let checked = ev.target().checked();
                                update_options(state, |o| o.include_mindmap = checked);
                            }
                        />
                        "Generate mind map"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || options.get().use_ocr
                            on:change:target=move |ev| {
                                let checked = ev.target().checked();
                                update_options(state, |o| o.use_ocr = checked);
                            }
                        />
                        "Use OCR for scanned PDFs"
                    </label>
                </upload-options>

                <button type="submit" data-role="primary" disabled=move || uploading.get()>
                    {move || {
                        if uploading.get() {
                            view! {
                                <span class="spinner"></span>
                                "Analyzing..."
                            }
                                .into_any()
                        } else {
                            "✨ Analyze Document".into_any()
                        }
                    }}
                </button>
            </form>
        </upload-panel>
    }
}
