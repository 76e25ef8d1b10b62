use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::{ContentFocus, IntakeApp, Step, TextField};
use crate::vim::VimMode;

pub fn draw_details(frame: &mut Frame, area: Rect, app: &IntakeApp) {
    if area.height < 5 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Step::Details.prompt())
            .style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let is_focused = app.focus == ContentFocus::Field(TextField::Details);
    let is_insert = is_focused && app.vim_mode == VimMode::Insert;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_focused {
            app.theme.primary_style()
        } else {
            app.theme.border_style()
        });

    let content = app.details.content();
    let paragraph = if is_insert {
        // Text area spans several lines, so the cursor is spliced into the text
        let before: String = content.chars().take(app.details.cursor()).collect();
        let after: String = content.chars().skip(app.details.cursor()).collect();
        Paragraph::new(format!("{before}|{after}")).style(app.theme.style())
    } else if content.is_empty() {
        Paragraph::new("Describe your project or issue...").style(app.theme.muted_style())
    } else {
        Paragraph::new(content).style(app.theme.style())
    };

    let box_height = (area.height - 2).min(6);
    frame.render_widget(
        paragraph.block(block).wrap(Wrap { trim: false }),
        Rect::new(area.x, area.y + 2, area.width, box_height),
    );
}
