use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::clock::Timestamp;
use crate::session::mode::Mode;
use crate::session::phrase::Phrase;
use crate::store::stats_log::compute_stats;
use crate::ui::theme::Theme;

/// Error count and elapsed seconds under the phrase.
pub struct StatusLine<'a> {
    phrase: &'a Phrase,
    now: Timestamp,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(phrase: &'a Phrase, now: Timestamp, theme: &'a Theme) -> Self {
        Self { phrase, now, theme }
    }

    /// Seconds spent on the correctly typed part so far.
    fn seconds(&self) -> f64 {
        let (bytes, _) = self.phrase.correct_prefix();
        let (seconds, _, _) = compute_stats(
            &self.phrase.input[..bytes],
            self.phrase.round().started_at,
            self.now,
        );
        seconds
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let errors_style = if self.phrase.highlight_errors(self.now) {
            self.theme.fail()
        } else {
            Style::default()
        };
        let errors = Line::styled(format!("{:3} errors", self.phrase.round().errors), errors_style);

        if self.phrase.mode == Mode::Slow {
            Paragraph::new(errors)
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let half = area.width / 2;
        let left = Rect::new(area.x, area.y, half.saturating_sub(1), area.height);
        let right = Rect::new(
            area.x + (half + 1).min(area.width),
            area.y,
            area.width.saturating_sub(half + 1),
            area.height,
        );
        Paragraph::new(errors)
            .alignment(Alignment::Right)
            .render(left, buf);
        Paragraph::new(format!("{:4.1} seconds", self.seconds())).render(right, buf);
    }
}
