use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::clock::Timestamp;
use crate::session::phrase::Phrase;
use crate::ui::theme::Theme;

const ENTER_MARKER: char = '\u{23ce}'; // ⏎
const SPACE_MARKER: char = '\u{2423}'; // ␣

/// The phrase with typed input laid over it, or the slow-mode countdown.
pub struct TypingArea<'a> {
    phrase: &'a Phrase,
    now: Timestamp,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(phrase: &'a Phrase, now: Timestamp, theme: &'a Theme) -> Self {
        Self { phrase, now, theme }
    }
}

pub fn fail_message(errors: u32, seconds_left: u64) -> String {
    match errors {
        0 | 1 => format!("Not quite! Please try again in {seconds_left}..."),
        2 | 3 => format!("FAIL! Let's do this again in {seconds_left}..."),
        4 | 5 => format!("Dude?! Try again in {seconds_left}..."),
        6..=8 => format!("Are you serious?!? Again in {seconds_left}..."),
        _ => format!("I don't even... {seconds_left}..."),
    }
}

fn spaced(c: char) -> char {
    if c == ' ' { SPACE_MARKER } else { c }
}

/// One cell per character: correct input, wrong input, then the untyped
/// rest of the text ending in the Enter marker.
fn phrase_cells(phrase: &Phrase) -> Vec<(char, CellKind)> {
    let (_, correct) = phrase.correct_prefix();
    let typed: Vec<char> = phrase.input.chars().collect();
    let target: Vec<char> = phrase.text.chars().chain([ENTER_MARKER]).collect();

    (0..typed.len().max(target.len()))
        .map(|i| {
            if i < correct {
                (spaced(typed[i]), CellKind::Correct)
            } else if i < typed.len() {
                (spaced(typed[i]), CellKind::Incorrect)
            } else {
                (target[i], CellKind::Pending)
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellKind {
    Correct,
    Incorrect,
    Pending,
}

fn centred(area: Rect, width: usize) -> Rect {
    let width = (width as u16).min(area.width);
    let x = area.x + (area.width / 2).saturating_sub(width / 2);
    Rect::new(x, area.y, width.min(area.right() - x), area.height)
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.phrase.show_fail(self.now) {
            let message = fail_message(
                self.phrase.round().errors,
                self.phrase.fail_seconds_left(self.now),
            );
            let width = message.chars().count();
            Line::styled(message, self.theme.fail()).render(centred(area, width), buf);
            return;
        }

        let spans: Vec<Span> = phrase_cells(self.phrase)
            .into_iter()
            .map(|(c, kind)| {
                let style = match kind {
                    CellKind::Correct => self.theme.correct(),
                    CellKind::Incorrect => self.theme.incorrect(),
                    CellKind::Pending => self.theme.pending(),
                };
                Span::styled(c.to_string(), style)
            })
            .collect();

        // Centre on the text alone so the line does not jump while typing.
        let text_width = self.phrase.text.chars().count();
        let start = centred(area, text_width).x;
        let rect = Rect::new(start, area.y, area.right() - start, area.height);
        Line::from(spans).render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::mode::Mode;
    use chrono::Utc;
    use ratatui::style::Color;

    fn render_line(phrase: &Phrase, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        TypingArea::new(phrase, Utc::now(), &Theme::default()).render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer) -> String {
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_fail_messages_escalate() {
        assert_eq!(fail_message(1, 3), "Not quite! Please try again in 3...");
        assert_eq!(fail_message(3, 2), "FAIL! Let's do this again in 2...");
        assert_eq!(fail_message(5, 1), "Dude?! Try again in 1...");
        assert_eq!(fail_message(8, 1), "Are you serious?!? Again in 1...");
        assert_eq!(fail_message(9, 1), "I don't even... 1...");
    }

    #[test]
    fn test_cells_mark_errors() {
        let mut phrase = Phrase::new("ab c");
        phrase.input = "ab x".to_string();
        let cells = phrase_cells(&phrase);
        assert_eq!(cells[2], (SPACE_MARKER, CellKind::Correct));
        assert_eq!(cells[3], ('x', CellKind::Incorrect));
        assert_eq!(cells[4], (ENTER_MARKER, CellKind::Pending));
    }

    #[test]
    fn test_overlong_input_is_drawn() {
        let mut phrase = Phrase::new("a");
        phrase.input = "abc".to_string();
        assert_eq!(phrase_cells(&phrase).len(), 3);
    }

    #[test]
    fn test_render_centres_text() {
        let phrase = Phrase::new("cat");
        let buf = render_line(&phrase, 11);
        assert_eq!(row(&buf), "    cat⏎   ");
    }

    #[test]
    fn test_render_colours_correct_prefix() {
        let mut phrase = Phrase::new("cat");
        phrase.input = "c".to_string();
        let buf = render_line(&phrase, 3);
        assert_eq!(buf.content[0].fg, Color::Green);
        assert_eq!(buf.content[1].fg, Color::White);
    }

    #[test]
    fn test_render_countdown_when_blocked() {
        let now = Utc::now();
        let mut phrase = Phrase::new("cat");
        phrase.mode = Mode::Slow;
        phrase.round_mut().errors = 1;
        phrase.round_mut().failed_at = Some(now);
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        TypingArea::new(&phrase, now, &Theme::default()).render(area, &mut buf);
        assert!(row(&buf).contains("Not quite! Please try again in 3..."));
    }
}
