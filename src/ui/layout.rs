use ratatui::layout::Rect;

/// Rows of the practice screen. Everything hangs off the vertical centre,
/// the header sits at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub mode: Rect,
    pub description: Rect,
    pub phrase: Rect,
    pub fingers: Option<Rect>,
    pub stats: Rect,
}

const HEADER_HEIGHT: u16 = 3;

impl ScreenLayout {
    pub fn new(area: Rect, show_fingers: bool) -> Self {
        let mid = area.y + area.height / 2;
        let row = |offset: i32, height: u16| -> Rect {
            let y = (i32::from(mid) + offset).clamp(i32::from(area.y), i32::from(area.bottom()));
            let y = y as u16;
            Rect::new(area.x, y, area.width, height.min(area.bottom().saturating_sub(y)))
        };

        let stats_offset = if show_fingers { 6 } else { 4 };
        Self {
            header: Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), HEADER_HEIGHT)
                .intersection(area),
            mode: row(-4, 1),
            description: row(-3, 1),
            phrase: row(0, 1),
            fingers: show_fingers.then(|| row(2, 2)),
            stats: row(stats_offset, 1),
        }
    }
}
