use std::fmt;

use crate::presentation::formatters::{Palette, truncate};
use crate::presentation::view_models::{CopyResultViewModel, CreateView, DisplayOptions, ViewMode};

const PREVIEW_CHARS: usize = 60;

impl CreateView for CopyResultViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CopyResultView {
            data: self,
            options,
        })
    }
}

struct CopyResultView<'a> {
    data: &'a CopyResultViewModel,
    options: DisplayOptions,
}

impl<'a> fmt::Display for CopyResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = Palette::new(self.options.enable_color);

        match self.options.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.value),
            ViewMode::Compact => writeln!(f, "{}: {}", self.data.target, self.data.value),
            ViewMode::Standard => writeln!(
                f,
                "{} {}",
                p.dim("Value:"),
                truncate(&self.data.value, PREVIEW_CHARS)
            ),
            ViewMode::Verbose => {
                writeln!(f, "{} {}", p.dim("Target: "), self.data.target)?;
                writeln!(f, "{} {}", p.dim("Value:  "), self.data.value)?;
                writeln!(f, "{} {}", p.dim("Backend:"), self.data.backend)
            }
        }
    }
}
