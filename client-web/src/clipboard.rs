use async_trait::async_trait;
use common::{clipboard::Clipboard, view::Notifier, Error};
use js_sys::{Function, Promise, Reflect};
use tracing::error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `navigator.clipboard` of the current window.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavigatorClipboard;

#[async_trait(?Send)]
impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> common::Result<()> {
        let window = web_sys::window().ok_or(Error::ClipboardUnavailable)?;
        let navigator = window.navigator();

        // missing outside secure contexts
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| Error::ClipboardUnavailable)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(Error::ClipboardUnavailable);
        }

        let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or(Error::ClipboardUnavailable)?;

        let promise: Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| Error::ClipboardRejected(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| Error::ClipboardUnavailable)?;

        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| Error::ClipboardRejected(format!("{:?}", e)))
    }
}

/// Acknowledges with a browser alert.
#[derive(Debug, Default, Clone, Copy)]
pub struct Alert;

impl Notifier for Alert {
    fn notify(&mut self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    error!("failed to show alert: {:?}", e);
                }
            }
            None => error!("no window to show {:?}", message),
        }
    }
}
