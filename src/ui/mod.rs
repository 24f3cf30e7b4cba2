pub mod components;
pub mod layout;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::clock::Timestamp;
use crate::keyboard::finger::hint_for;
use crate::session::state::SessionState;
use components::finger_hints::FingerHints;
use components::header::Header;
use components::status_line::StatusLine;
use components::typing_area::TypingArea;
use layout::ScreenLayout;
use theme::Theme;

/// Draw the whole practice screen for `state` as of `now`.
pub fn render(frame: &mut Frame, state: &SessionState, now: Timestamp, theme: &Theme) {
    let phrase = &state.phrase;
    let layout = ScreenLayout::new(frame.area(), !state.hide_fingers);

    frame.render_widget(Header::new(state, now, theme), layout.header);

    let mode = phrase.mode;
    frame.render_widget(
        Paragraph::new(Line::styled(format!("In {} mode", mode.name()), theme.accent(mode.accent())))
            .alignment(Alignment::Center),
        layout.mode,
    );
    frame.render_widget(
        Paragraph::new(format!("({}!)", mode.description())).alignment(Alignment::Center),
        layout.description,
    );

    frame.render_widget(TypingArea::new(phrase, now, theme), layout.phrase);

    if let Some(area) = layout.fingers {
        let (_, correct) = phrase.correct_prefix();
        let next = phrase.text.chars().nth(correct);
        frame.render_widget(FingerHints::new(hint_for(next), theme), area);
    }

    frame.render_widget(StatusLine::new(phrase, now, theme), layout.stats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_state;
    use chrono::Utc;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_demo_screen_renders() {
        let now = Utc::now();
        let state = demo_state(now);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render(frame, &state, now, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Score: 8938  +201 (87%)"));
        assert!(screen.contains("In normal mode"));
        assert!(screen.contains("(type at normal speed, avoid mistakes!)"));
        assert!(screen.contains("correct␣horse␣bta"));
        assert!(screen.contains("2 errors"));
        assert!(screen.contains("/"));
    }
}
