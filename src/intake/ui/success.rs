use ratatui::{
    prelude::*,
    widgets::{Clear, Paragraph, Wrap},
};

use super::super::{IntakeApp, IntakeForm};

/// Overlay shown once the request is submitted
pub fn draw_success(frame: &mut Frame, area: Rect, app: &IntakeApp, form: &IntakeForm) {
    frame.render_widget(Clear, area);
    if area.height < 10 {
        return;
    }

    let mut y = area.y + 1;
    frame.render_widget(
        Paragraph::new("Your request has been submitted!")
            .style(app.theme.success_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        Rect::new(area.x, y, area.width, 1),
    );
    y += 2;

    frame.render_widget(
        Paragraph::new(
            "Create a free account to track your project, upload files, \
             and chat directly with our Excel team.",
        )
        .style(app.theme.style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        Rect::new(area.x + 2, y, area.width.saturating_sub(4), 3),
    );
    y += 4;

    if let Some(submission) = form.submission() {
        let link = submission.signup_link(&app.config.handoff.signup_url);
        frame.render_widget(
            Paragraph::new(link)
                .style(app.theme.muted_style())
                .alignment(Alignment::Center),
            Rect::new(area.x + 2, y, area.width.saturating_sub(4), 1),
        );
    }

    let button_y = area.y + area.height - 3;
    let button = " [Enter] Create My Account ";
    let button_width = (button.len() as u16).min(area.width);
    frame.render_widget(
        Paragraph::new(button).style(app.theme.button_style(true)),
        Rect::new(
            area.x + (area.width - button_width) / 2,
            button_y,
            button_width,
            1,
        ),
    );
    frame.render_widget(
        Paragraph::new("[s] Skip for now")
            .style(app.theme.muted_style())
            .alignment(Alignment::Center),
        Rect::new(area.x, button_y + 1, area.width, 1),
    );
}
