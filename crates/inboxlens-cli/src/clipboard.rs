//! Fire-and-forget clipboard writes.
//!
//! [`Clipboard::copy`] hands text to a backend and returns nothing. Backend
//! failures are logged at debug level and dropped; callers never observe them.

use crate::config::{ClipboardBackendKind, ClipboardConfig};
use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use is_terminal::IsTerminal;
use std::io;
use tracing::debug;

/// A platform clipboard-write primitive.
pub trait ClipboardBackend {
    fn name(&self) -> &'static str;
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// OSC 52 escape sequence written to stdout. Works over SSH when the
/// terminal emulator supports it.
pub struct Osc52Clipboard;

impl ClipboardBackend for Osc52Clipboard {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        execute!(io::stdout(), CopyToClipboard::to_clipboard_from(text))
    }
}

/// Discards every write.
pub struct NoopClipboard;

impl ClipboardBackend for NoopClipboard {
    fn name(&self) -> &'static str {
        "none"
    }

    fn write(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Copy service shared by every copy trigger.
pub struct Clipboard {
    backend: Box<dyn ClipboardBackend>,
}

impl Clipboard {
    pub fn new(backend: Box<dyn ClipboardBackend>) -> Self {
        Self { backend }
    }

    pub fn from_config(config: &ClipboardConfig) -> Self {
        let backend: Box<dyn ClipboardBackend> = match config.backend {
            ClipboardBackendKind::None => Box::new(NoopClipboard),
            ClipboardBackendKind::Osc52 => Box::new(Osc52Clipboard),
            ClipboardBackendKind::Auto => auto_backend(io::stdout().is_terminal()),
        };

        debug!(backend = backend.name(), "clipboard backend selected");
        Self::new(backend)
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Write `text` to the clipboard. Never fails and never retries.
    pub fn copy(&mut self, text: &str) {
        match self.backend.write(text) {
            Ok(()) => debug!(
                backend = self.backend.name(),
                chars = text.chars().count(),
                "clipboard write dispatched"
            ),
            Err(e) => debug!(
                backend = self.backend.name(),
                error = %e,
                "clipboard write failed"
            ),
        }
    }
}

/// OSC 52 needs a terminal to interpret the escape; piped output gets none.
fn auto_backend(stdout_is_terminal: bool) -> Box<dyn ClipboardBackend> {
    if stdout_is_terminal {
        Box::new(Osc52Clipboard)
    } else {
        Box::new(NoopClipboard)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every write for inspection.
    #[derive(Clone, Default)]
    pub struct MemoryClipboard {
        pub writes: Rc<RefCell<Vec<String>>>,
    }

    impl ClipboardBackend for MemoryClipboard {
        fn name(&self) -> &'static str {
            "memory"
        }

        fn write(&mut self, text: &str) -> io::Result<()> {
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    pub struct FailingClipboard;

    impl ClipboardBackend for FailingClipboard {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn write(&mut self, _text: &str) -> io::Result<()> {
            Err(io::Error::other("clipboard unavailable"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FailingClipboard, MemoryClipboard};
    use super::*;

    #[test]
    fn test_copy_reaches_backend() {
        let memory = MemoryClipboard::default();
        let mut clipboard = Clipboard::new(Box::new(memory.clone()));

        clipboard.copy("Billing");
        clipboard.copy("250");

        assert_eq!(*memory.writes.borrow(), vec!["Billing", "250"]);
    }

    #[test]
    fn test_backend_failure_is_absorbed() {
        let mut clipboard = Clipboard::new(Box::new(FailingClipboard));
        clipboard.copy("Billing");
        clipboard.copy("Billing");
        assert_eq!(clipboard.backend_name(), "failing");
    }

    #[test]
    fn test_from_config_explicit_backends() {
        let config = ClipboardConfig {
            backend: ClipboardBackendKind::None,
        };
        assert_eq!(Clipboard::from_config(&config).backend_name(), "none");

        let config = ClipboardConfig {
            backend: ClipboardBackendKind::Osc52,
        };
        assert_eq!(Clipboard::from_config(&config).backend_name(), "osc52");
    }

    #[test]
    fn test_auto_backend_needs_terminal() {
        assert_eq!(auto_backend(true).name(), "osc52");
        assert_eq!(auto_backend(false).name(), "none");
    }
}
