use anyhow::{anyhow, Result};
use leptos::logging::log;
use leptos::prelude::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, DragEvent, File, HtmlAnchorElement, Url};

use crate::api::FilePayload;
use crate::workspace::SelectedFile;

const FALLBACK_MIME: &str = "application/octet-stream";

fn js_err(context: &str, e: JsValue) -> anyhow::Error {
    anyhow!("{context}: {:?}", e)
}

pub fn describe_file(file: &File) -> SelectedFile {
    SelectedFile {
        name: file.name(),
        mime: file.type_(),
    }
}

/// First file of a drop, if any.
pub fn dropped_file(ev: &DragEvent) -> Option<File> {
    ev.data_transfer()
        .and_then(|dt| dt.files())
        .and_then(|files| files.get(0))
}

pub async fn read_file(file: &File) -> Result<FilePayload> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| js_err("reading file", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = file.type_();
    Ok(FilePayload {
        name: file.name(),
        mime: if mime.is_empty() {
            FALLBACK_MIME.to_string()
        } else {
            mime
        },
        bytes,
    })
}

/// Hands `bytes` to the browser as a download named `file_name`.
pub fn save_bytes(bytes: &[u8], file_name: &str) -> Result<()> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(|e| js_err("creating blob", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_err("creating object url", e))?;

    let anchor: HtmlAnchorElement = document()
        .create_element("a")
        .map_err(|e| js_err("creating anchor", e))?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document().body().ok_or_else(|| anyhow!("document has no body"))?;
    body.append_child(&anchor)
        .map_err(|e| js_err("attaching anchor", e))?;
    anchor.click();
    if let Err(e) = body.remove_child(&anchor) {
        log!("[WARN] [DOM_UTILS] Failed to detach download anchor: {:?}", e);
    }
    if let Err(e) = Url::revoke_object_url(&url) {
        log!("[WARN] [DOM_UTILS] Failed to revoke object url: {:?}", e);
    }
    Ok(())
}

pub async fn write_clipboard(text: &str) -> Result<()> {
    // `clipboard()` is undefined outside secure contexts.
    let clipboard = Some(window().navigator().clipboard())
        .filter(|c| !c.is_undefined())
        .ok_or_else(|| anyhow!("Clipboard API not available or not in secure context"))?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| js_err("writing clipboard", e))?;
    Ok(())
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
