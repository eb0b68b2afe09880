use crate::contact_form::error_chain_fmt;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// How long "Copied!" stays visible after a successful copy.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_millis(2000);

#[derive(thiserror::Error)]
pub enum ClipboardError {
    #[error("The system clipboard rejected the write")]
    Unavailable(#[from] arboard::Error),
    #[error("The clipboard task did not complete")]
    Task(#[from] tokio::task::JoinError),
}

impl std::fmt::Debug for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// The operating system clipboard.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.set_text(text)
        })
        .await??;
        Ok(())
    }
}

/// Transient flag raised by a successful copy. It lowers itself once
/// [`COPIED_INDICATOR_DURATION`] has elapsed on the tokio clock.
#[derive(Debug, Clone, Default)]
pub struct CopiedIndicator {
    shown_until: Option<Instant>,
}

impl CopiedIndicator {
    pub fn show(&mut self) {
        self.shown_until = Some(Instant::now() + COPIED_INDICATOR_DURATION);
    }

    pub fn is_shown(&self) -> bool {
        self.shown_until
            .is_some_and(|shown_until| Instant::now() < shown_until)
    }
}
