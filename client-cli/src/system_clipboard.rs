use async_trait::async_trait;
use common::{clipboard::Clipboard, Error};

/// The OS clipboard. A context is opened per write.
#[derive(Debug, Default)]
pub struct SystemClipboard;

cfg_if::cfg_if! {
    if #[cfg(feature = "system-clipboard")] {
        use clipboard::{ClipboardContext, ClipboardProvider};
        use tracing::debug;

        #[async_trait(?Send)]
        impl Clipboard for SystemClipboard {
            async fn write_text(&self, text: &str) -> common::Result<()> {
                let mut ctx: ClipboardContext = ClipboardProvider::new().map_err(|e| {
                    debug!("clipboard init error: {}", e);
                    Error::ClipboardUnavailable
                })?;

                ctx.set_contents(text.to_owned())
                    .map_err(|e| Error::ClipboardRejected(e.to_string()))
            }
        }
    } else {
        // built without clipboard support
        #[async_trait(?Send)]
        impl Clipboard for SystemClipboard {
            async fn write_text(&self, _text: &str) -> common::Result<()> {
                Err(Error::ClipboardUnavailable)
            }
        }
    }
}
