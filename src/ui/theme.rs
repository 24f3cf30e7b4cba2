use ratatui::style::{Color, Modifier, Style};

use crate::session::mode::Accent;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text: Color,
    pub text_correct: Color,
    pub text_incorrect_fg: Color,
    pub text_incorrect_bg: Color,
    pub highlight: Color,
    pub error: Color,
    pub finger_fg: Color,
    pub finger_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            text_correct: Color::Green,
            text_incorrect_fg: Color::Black,
            text_incorrect_bg: Color::Red,
            highlight: Color::Blue,
            error: Color::Red,
            finger_fg: Color::Black,
            finger_bg: Color::Blue,
        }
    }
}

impl Theme {
    pub fn accent(&self, accent: Accent) -> Style {
        let color = match accent {
            Accent::Green => Color::Green,
            Accent::Magenta => Color::Magenta,
            Accent::Yellow => Color::Yellow,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn fail(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn correct(&self) -> Style {
        Style::default().fg(self.text_correct)
    }

    pub fn incorrect(&self) -> Style {
        Style::default()
            .fg(self.text_incorrect_fg)
            .bg(self.text_incorrect_bg)
    }

    pub fn pending(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn finger(&self, highlighted: bool) -> Style {
        if highlighted {
            Style::default().fg(self.finger_fg).bg(self.finger_bg)
        } else {
            Style::default()
        }
    }
}
