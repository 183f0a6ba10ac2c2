use async_trait::async_trait;
use tracing::{debug, error};

use crate::view::Notifier;

/// Platform clipboard-write capability. The write may suspend; there is no
/// cancellation and no timeout.
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> crate::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    /// Nothing was written because there was nothing to copy.
    Skipped,
}

/// Writes `text` to the clipboard and acknowledges with `ack` on success.
/// A failure is logged and nothing is shown to the user; it is never retried.
pub async fn copy_to_clipboard<C, N>(clipboard: &C, notifier: &mut N, text: &str, ack: &str) -> CopyOutcome
where
    C: Clipboard + ?Sized,
    N: Notifier + ?Sized,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            debug!(len = text.chars().count(), "copied to clipboard");
            notifier.notify(ack);
            CopyOutcome::Copied
        }
        Err(e) => {
            error!("Failed to copy text: {}", e);
            CopyOutcome::Failed
        }
    }
}
