use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::clock::Timestamp;
use crate::engine::scoring::{level, progress};
use crate::session::state::SessionState;
use crate::ui::theme::Theme;

/// Score, level and progress in the top-left corner; repeat marker top-right.
pub struct Header<'a> {
    state: &'a SessionState,
    now: Timestamp,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a SessionState, now: Timestamp, theme: &'a Theme) -> Self {
        Self { state, now, theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let score = self.state.score;
        let current = level(score);
        let mut score_line = Line::raw(format!("   Score: {score:.0}"));
        let mut level_line = Line::raw(format!("   Level: {current}"));

        if let Some(last) = self
            .state
            .last_score
            .as_ref()
            .filter(|_| self.state.showing_last_score(self.now))
        {
            score_line = Line::styled(
                format!("   Score: {score:.0}  +{:.0} ({:.0}%)", last.value, last.percent),
                self.theme.highlight(),
            );
            if level(score - last.value) != current {
                level_line = Line::styled(
                    format!("   Level: {current}  level up! ( \u{361}\u{b0} \u{35c}\u{296} \u{361}\u{b0})"),
                    self.theme.highlight(),
                );
            }
        }

        vec![
            score_line,
            level_line,
            Line::raw(format!("Progress: {:.0}%", 100.0 * progress(score))),
        ]
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let repeat = self.state.repeat;
        Paragraph::new(self.lines()).render(area, buf);
        if repeat {
            Paragraph::new("Repeating phrase")
                .alignment(Alignment::Right)
                .render(Rect { height: 1, ..area }, buf);
        }
    }
}
