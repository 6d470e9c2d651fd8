//! Clipboard copy with a selection-based `execCommand` fallback.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlDocument;

use crate::dom::Elements;
use crate::widget::Shared;

/// How long the "Copied!" confirmation stays up.
const CONFIRM_MS: i32 = 1200;

/// Copy the current dp text to the system clipboard.
///
/// Prefers the async clipboard API; when that rejects (permissions,
/// insecure context), falls back to selecting the dp field and issuing
/// `execCommand("copy")`. The confirmation shows either way.
pub fn copy_dp(widget: &Shared) {
    let shared = Rc::clone(widget);
    wasm_bindgen_futures::spawn_local(async move {
        let text = shared.borrow().els.dp_output.value();
        if !write_clipboard(&text).await {
            fallback_copy(&shared.borrow().els);
        }
        show_confirmation(&shared);
    });
}

async fn write_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.is_ok()
}

/// Legacy path: select the dp field and copy the selection.
fn fallback_copy(els: &Elements) {
    els.dp_output.select();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(html_doc) = document.dyn_into::<HtmlDocument>() else {
        return;
    };
    if html_doc.exec_command("copy").is_err() {
        web_sys::console::warn_1(&JsValue::from_str("px2dp: clipboard copy failed"));
    }
}

/// Swap the visual label to "Copied!" and restore it shortly after.
fn show_confirmation(widget: &Shared) {
    let w = widget.borrow();
    let label = &w.els.visual_label;
    let previous = label.text_content().unwrap_or_default();
    label.set_text_content(Some("Copied!"));

    let restore_label = label.clone();
    let restore = Closure::once_into_js(move || {
        restore_label.set_text_content(Some(&previous));
    });
    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            restore.unchecked_ref(),
            CONFIRM_MS,
        );
    }
}
