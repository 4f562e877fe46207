use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlLinkElement};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Best-effort text for a thrown JS value: string payloads as-is, `Error`
/// objects by message, anything else through its debug form.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Milliseconds since the epoch, from the JS clock.
#[must_use]
pub fn now_ms() -> u64 {
    // Date.now() is integral and non-negative.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let now = js_sys::Date::now().max(0.0) as u64;
    now
}

/// A pending `setTimeout` callback. Dropping the handle cancels it.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedule `callback` after `delay_ms`. Returns `None` outside a browser
    /// or when the timer cannot be registered.
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let win = window()?;
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let closure = Closure::once(callback);
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(id) => Some(Self {
                id,
                _callback: closure,
            }),
            Err(err) => {
                console_error(&format!("failed to schedule timer: {}", js_error_message(&err)));
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// `<link rel="preload" as="image">` in the document head, removed on drop.
pub struct ImagePreload {
    link: HtmlLinkElement,
}

impl ImagePreload {
    pub fn start(href: &str) -> Option<Self> {
        let doc = document()?;
        let head = doc.head()?;
        let link = doc
            .create_element("link")
            .ok()?
            .dyn_into::<HtmlLinkElement>()
            .ok()?;
        link.set_rel("preload");
        link.set_as("image");
        link.set_href(href);
        head.append_child(&link).ok()?;
        Some(Self { link })
    }
}

impl Drop for ImagePreload {
    fn drop(&mut self) {
        self.link.remove();
    }
}
