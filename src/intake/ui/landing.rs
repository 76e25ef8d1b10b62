use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::IntakeApp;
use crate::ui::Layout;

pub fn draw_landing(frame: &mut Frame, area: Rect, app: &IntakeApp) {
    let content_width = 60.min(area.width.saturating_sub(4));
    let content_height = 14.min(area.height.saturating_sub(2));
    let centered = Layout::centered_box(area, content_width, content_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(format!(" {} ", app.config.general.title));

    let inner = block.inner(centered);
    frame.render_widget(Clear, centered);
    frame.render_widget(block, centered);

    if inner.height < 6 {
        return;
    }

    frame.render_widget(
        Paragraph::new(app.config.general.subtitle.as_str())
            .style(app.theme.style())
            .wrap(Wrap { trim: true }),
        Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 2),
    );

    let how_it_works = [
        "  1. Tell us what you need",
        "  2. Get matched with an Excel expert",
        "  3. Track your project in the client portal",
    ];
    let mut y = inner.y + 4;
    for line in how_it_works {
        if y >= inner.y + inner.height - 2 {
            break;
        }
        frame.render_widget(
            Paragraph::new(line).style(app.theme.muted_style()),
            Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1),
        );
        y += 1;
    }

    // Trigger button - centered at bottom
    let button_y = inner.y + inner.height - 2;
    let button_text = "[ Start a Request ]";
    let button_width = button_text.len() as u16;
    let button_x = inner.x + inner.width.saturating_sub(button_width) / 2;
    frame.render_widget(
        Paragraph::new(button_text)
            .style(app.theme.primary_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)),
        Rect::new(button_x, button_y, button_width.min(inner.width), 1),
    );

    let hint = "Press Enter to begin";
    let hint_x = inner.x + inner.width.saturating_sub(hint.len() as u16) / 2;
    frame.render_widget(
        Paragraph::new(hint).style(app.theme.muted_style()),
        Rect::new(hint_x, button_y + 1, (hint.len() as u16).min(inner.width), 1),
    );
}
