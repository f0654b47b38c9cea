use copypasta::{ClipboardContext, ClipboardProvider};

use pagetools_core::password::Clipboard;

/// System clipboard. Unavailability and write failures are logged and
/// otherwise ignored.
pub struct SystemClipboard {
    context: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let context = match ClipboardContext::new() {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                None
            }
        };
        Self { context }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) {
        if let Some(ctx) = self.context.as_mut() {
            if let Err(e) = ctx.set_contents(text.to_owned()) {
                tracing::debug!(error = %e, "clipboard write failed");
            }
        }
    }
}
