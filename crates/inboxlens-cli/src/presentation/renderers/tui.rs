//! Interactive results page.
//!
//! Sets up the terminal, routes key presses to [`ResultsComponent`] and
//! carries out the actions it emits. The record is never modified here.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use serde::Serialize;
use tracing::{debug, info};

use crate::clipboard::Clipboard;
use crate::presentation::view_models::ResultsViewModel;
use crate::presentation::views::tui::components::{ResultsAction, ResultsComponent};

/// How the page ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationOutcome {
    /// Hand control back to the caller.
    Back,
    Quit,
}

pub struct TuiRenderer<'a> {
    data: &'a ResultsViewModel,
    clipboard: &'a mut Clipboard,
    component: ResultsComponent,
}

impl<'a> TuiRenderer<'a> {
    pub fn new(data: &'a ResultsViewModel, clipboard: &'a mut Clipboard) -> Self {
        Self {
            data,
            clipboard,
            component: ResultsComponent::new(),
        }
    }

    pub fn run(mut self) -> Result<NavigationOutcome> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e.into());
            }
        };

        let result = self.event_loop(&mut terminal);
        let restored = restore_terminal(&mut terminal);

        let outcome = result?;
        restored?;
        info!(?outcome, "results view closed");
        Ok(outcome)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<NavigationOutcome> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                self.component.render(f, area, self.data);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = self.component.handle_input(key, self.data) {
                    if let Some(outcome) = self.apply(action) {
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    /// Carry out a component action. Returns the outcome when the page should close.
    fn apply(&mut self, action: ResultsAction) -> Option<NavigationOutcome> {
        match action {
            ResultsAction::Copy { title, value } => {
                debug!(card = %title, "copy triggered");
                self.clipboard.copy(&value);
                None
            }
            ResultsAction::Back => Some(NavigationOutcome::Back),
            ResultsAction::Quit => Some(NavigationOutcome::Quit),
        }
    }
}

/// Run every restore step, then report the first failure.
fn restore_terminal<B>(terminal: &mut Terminal<B>) -> io::Result<()>
where
    B: Backend + io::Write,
{
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::MemoryClipboard;
    use crate::presentation::presenters::build_results;
    use crate::source::RecordOrigin;
    use inboxlens_types::Classification;

    #[test]
    fn test_apply_copy_dispatches_to_clipboard() {
        let data = build_results(&Classification::default(), RecordOrigin::Default);
        let memory = MemoryClipboard::default();
        let mut clipboard = Clipboard::new(Box::new(memory.clone()));
        let mut renderer = TuiRenderer::new(&data, &mut clipboard);

        let outcome = renderer.apply(ResultsAction::Copy {
            title: "Request Type".to_string(),
            value: "Not Classified".to_string(),
        });

        assert_eq!(outcome, None);
        assert_eq!(*memory.writes.borrow(), vec!["Not Classified"]);
    }

    #[test]
    fn test_apply_navigation() {
        let data = build_results(&Classification::default(), RecordOrigin::Default);
        let mut clipboard = Clipboard::new(Box::new(MemoryClipboard::default()));
        let mut renderer = TuiRenderer::new(&data, &mut clipboard);

        assert_eq!(renderer.apply(ResultsAction::Back), Some(NavigationOutcome::Back));
        assert_eq!(renderer.apply(ResultsAction::Quit), Some(NavigationOutcome::Quit));
    }

    /// Fails its first write, records the rest.
    #[derive(Default)]
    struct FailFirstWrite {
        failed: bool,
        written: Vec<u8>,
    }

    impl io::Write for FailFirstWrite {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::other("terminal gone"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn fixed_terminal<W: io::Write>(writer: W) -> Terminal<CrosstermBackend<W>> {
        let options = ratatui::TerminalOptions {
            viewport: ratatui::Viewport::Fixed(ratatui::layout::Rect::new(0, 0, 20, 5)),
        };
        Terminal::with_options(CrosstermBackend::new(writer), options).unwrap()
    }

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut terminal = fixed_terminal(Vec::new());

        restore_terminal(&mut terminal).unwrap();

        let written = String::from_utf8_lossy(terminal.backend().writer()).to_string();
        assert!(written.contains("\u{1b}[?1049l"));
        assert!(written.contains("\u{1b}[?25h"));
    }

    #[test]
    fn test_restore_continues_after_failed_step() {
        let mut terminal = fixed_terminal(FailFirstWrite::default());

        assert!(restore_terminal(&mut terminal).is_err());

        let written = String::from_utf8_lossy(&terminal.backend().writer().written).to_string();
        assert!(written.contains("\u{1b}[?25h"));
    }

    #[test]
    fn test_outcome_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NavigationOutcome::Back).unwrap(),
            r#""back""#
        );
    }
}
