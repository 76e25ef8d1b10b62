use ratatui::{prelude::*, widgets::Paragraph};

use super::super::{ContentFocus, IntakeApp, IntakeForm, Step, TextField};
use super::draw_input;

pub fn draw_contact(frame: &mut Frame, area: Rect, app: &IntakeApp, form: &IntakeForm) {
    if area.height < 9 || area.width < 30 {
        return;
    }

    let mut y = area.y;
    frame.render_widget(
        Paragraph::new(Step::Contact.prompt())
            .style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Rect::new(area.x, y, area.width, 1),
    );
    y += 2;

    let fields = [
        ("Name *", TextField::Name, "Your full name"),
        ("Email *", TextField::Email, "you@example.com"),
        ("Phone", TextField::Phone, "(555) 555-5555"),
    ];

    for (label, field, placeholder) in fields {
        let is_focused = app.focus == ContentFocus::Field(field);

        frame.render_widget(
            Paragraph::new(label).style(if is_focused {
                app.theme.primary_style()
            } else {
                app.theme.style()
            }),
            Rect::new(area.x, y, 10, 1),
        );

        let field_area = Rect::new(area.x + 10, y, area.width - 10, 1);
        draw_input(frame, field_area, app, app.buffer(field), is_focused, placeholder);
        y += 2;
    }

    let checkbox = if form.nda() { "[x]" } else { "[ ]" };
    let nda_style = if app.focus == ContentFocus::Nda {
        app.theme.primary_style().add_modifier(Modifier::BOLD)
    } else {
        app.theme.style()
    };
    frame.render_widget(
        Paragraph::new(format!("{checkbox} I would like to sign an NDA before work begins."))
            .style(nda_style),
        Rect::new(area.x, y, area.width, 1),
    );
}
