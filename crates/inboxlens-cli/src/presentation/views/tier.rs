use std::fmt;

use crate::presentation::formatters::{Palette, bar_ratio, format_percent};
use crate::presentation::view_models::{ConfidenceViewModel, CreateView, DisplayOptions, ViewMode};

use super::results::gradient_bar;

const TIER_BAR_WIDTH: usize = 20;

impl CreateView for ConfidenceViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(TierView {
            data: self,
            options,
        })
    }
}

pub struct TierView<'a> {
    data: &'a ConfidenceViewModel,
    options: DisplayOptions,
}

impl<'a> fmt::Display for TierView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = Palette::new(self.options.enable_color);
        let percent = format_percent(self.data.percent);

        match self.options.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.tier),
            ViewMode::Compact => writeln!(f, "{} {} {}", self.data.tier, percent, self.data.solid),
            ViewMode::Standard | ViewMode::Verbose => {
                writeln!(f, "Score:    {} ({})", self.data.score, percent)?;
                writeln!(f, "Tier:     {}", p.token(self.data.tier.as_str(), self.data.solid))?;
                writeln!(f, "Solid:    {}", self.data.solid)?;
                writeln!(f, "Gradient: {}", self.data.gradient)?;
                if self.options.mode == ViewMode::Verbose {
                    let bar = gradient_bar(
                        bar_ratio(self.data.score),
                        TIER_BAR_WIDTH,
                        &self.data.gradient,
                        &p,
                    );
                    writeln!(f, "Bar:      {}", bar)?;
                }
                Ok(())
            }
        }
    }
}
