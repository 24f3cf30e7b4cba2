use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::keyboard::finger::{FINGER_SEQUENCE, FingerAssignment, Finger, Hand};
use crate::ui::theme::Theme;

/// Ten finger glyphs with the ones for the next key highlighted. Thumbs sit
/// one row lower, the right hand is shifted apart from the left.
pub struct FingerHints<'a> {
    active: &'a [FingerAssignment],
    theme: &'a Theme,
}

impl<'a> FingerHints<'a> {
    pub fn new(active: &'a [FingerAssignment], theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

fn offset(finger: FingerAssignment) -> (u16, u16) {
    let dx = if finger.hand == Hand::Right { 2 } else { 0 };
    let dy = u16::from(finger.finger == Finger::Thumb);
    (dx, dy)
}

impl Widget for FingerHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let x0 = area.x + (area.width / 2).saturating_sub(6);
        for (i, finger) in FINGER_SEQUENCE.iter().enumerate() {
            let (dx, dy) = offset(*finger);
            let x = x0 + i as u16 + dx;
            let y = area.y + dy;
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            let style = self.theme.finger(self.active.contains(finger));
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(finger.glyph()).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::finger::qwerty_fingers;
    use ratatui::style::Color;

    #[test]
    fn test_layout_and_highlight() {
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        FingerHints::new(qwerty_fingers(' '), &Theme::default()).render(area, &mut buf);

        let row = |y: u16| -> String { (0..20u16).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        let top = row(0);
        let bottom = row(1);
        assert_eq!(top, "    ||||    ||||    ");
        assert_eq!(bottom, "        /  \\        ");
        assert_eq!(buf[(8u16, 1u16)].bg, Color::Blue);
        assert_eq!(buf[(4u16, 0u16)].bg, Color::Reset);
    }
}
