use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

pub struct Layout {
    pub full: Rect,
    pub header: Rect,
    pub content: Rect,
    pub message: Rect,
    pub status: Rect,
}

impl Layout {
    pub fn new(area: Rect) -> Self {
        // Message panel space is always reserved so the form does not jump
        // when messages appear/disappear
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(10),   // Content
                Constraint::Length(3), // Message panel (always reserved)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            full: area,
            header: chunks[0],
            content: chunks[1],
            message: chunks[2],
            status: chunks[3],
        }
    }

    /// Box of at most `width` x `height` centered in `area`
    pub fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
        let horizontal = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(width.min(area.width)),
                Constraint::Fill(1),
            ])
            .split(area);

        let vertical = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(height.min(area.height)),
                Constraint::Fill(1),
            ])
            .split(horizontal[1]);

        vertical[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_fill_the_area() {
        let layout = Layout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.message.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.content.height, 19);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn centered_box_is_clamped_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let boxed = Layout::centered_box(area, 60, 20);
        assert_eq!(boxed, area);

        let boxed = Layout::centered_box(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!((boxed.x, boxed.y, boxed.width, boxed.height), (20, 7, 40, 10));
    }
}
