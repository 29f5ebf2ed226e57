//! Browser glue for the rich-text editor.
//!
//! `desk::editor` decides what a toolbar command does; this module carries the
//! resulting [`DomAction`] out against the live `contenteditable` element and
//! reads the markup back so the document model stays in sync.
//!
//! TRADE-OFFS
//! ==========
//! `document.execCommand` is deprecated but is still the only selection-aware
//! editing primitive every browser ships. SSR paths no-op.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use desk::editor::DomAction;
use desk::notify::Failure;
use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
fn inline_style(property: &str, value: &str) -> String {
    format!("{property}: {value}")
}

/// Carry out `action` on the editable element behind `target`.
///
/// Returns the element's markup afterwards, or `None` when the element is
/// not mounted (or on the server).
pub fn apply(target: NodeRef<leptos::html::Div>, action: &DomAction) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let el = target.get_untracked()?;
        let document = web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()?;
        if !matches!(action, DomAction::Replace(_)) {
            let _ = el.focus();
        }
        match action {
            DomAction::Exec { command, value } => {
                let _ = document.exec_command_with_show_ui_and_value(command, false, value.as_deref().unwrap_or_default());
            }
            DomAction::InsertHtml(html) => {
                let _ = document.exec_command_with_show_ui_and_value("insertHTML", false, html);
            }
            DomAction::StyleSelection { property, value } => style_selection(&document, property, value),
            DomAction::Replace(markup) => el.set_inner_html(markup),
        }
        Some(el.inner_html())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, action);
        None
    }
}

/// Wrap the current selection in a styled `<span>`. Collapsed selections are left alone.
#[cfg(feature = "hydrate")]
fn style_selection(document: &web_sys::HtmlDocument, property: &str, value: &str) {
    let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten()) else {
        return;
    };
    if selection.range_count() == 0 {
        return;
    }
    let Ok(range) = selection.get_range_at(0) else {
        return;
    };
    if range.collapsed() {
        return;
    }
    let Ok(span) = document.create_element("span") else {
        return;
    };
    let _ = span.set_attribute("style", &inline_style(property, value));
    if let Ok(contents) = range.extract_contents() {
        let _ = span.append_child(&contents);
        let _ = range.insert_node(&span);
    }
}

/// Replace the editable element's markup without touching the selection.
pub fn load(target: NodeRef<leptos::html::Div>, markup: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = target.get_untracked() {
            if el.inner_html() != markup {
                el.set_inner_html(markup);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, markup);
    }
}

/// Current markup of the editable element.
pub fn read(target: NodeRef<leptos::html::Div>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        target.get_untracked().map(|el| el.inner_html())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
        None
    }
}

/// Read the file picked in an `<input type="file">` change event as an
/// inline `data:` URL.
///
/// # Errors
///
/// No file was picked, the file could not be read, or it is not an image.
pub async fn image_from_change(ev: leptos::ev::Event) -> Result<String, Failure> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .ok_or_else(|| Failure::Invalid("파일 입력을 찾을 수 없습니다".to_owned()))?;
        let file = input
            .files()
            .and_then(|files| files.get(0))
            .ok_or_else(|| Failure::Invalid("이미지를 선택하세요".to_owned()))?;
        input.set_value("");
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| Failure::Transport(format!("{e:?}")))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        desk::editor::image_data_url(&file.type_(), &bytes).map_err(Failure::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        Err(Failure::Transport("not available on server".to_owned()))
    }
}

/// Current time as an ISO-8601 string; empty on the server.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
