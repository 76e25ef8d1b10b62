use ratatui::{prelude::*, widgets::Paragraph};

use super::super::{Choice, IntakeApp, IntakeForm};

pub fn draw_options(frame: &mut Frame, area: Rect, app: &IntakeApp, form: &IntakeForm) {
    if area.height < 3 {
        return;
    }

    let step = form.step();
    let selected = form.selected(step);
    let mut y = area.y;

    frame.render_widget(
        Paragraph::new(step.prompt()).style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Rect::new(area.x, y, area.width, 1),
    );
    y += 2;

    for (idx, choice) in Choice::options_for(step).iter().enumerate() {
        if y >= area.y + area.height {
            break;
        }

        let is_cursor = idx == app.option_cursor;
        let is_selected = selected == Some(*choice);

        let prefix = if is_cursor { ">" } else { " " };
        let marker = if is_selected { "(*)" } else { "( )" };
        let line = format!("{prefix} {marker} {}. {}", idx + 1, choice.label());

        let style = if is_selected {
            app.theme.success_style().add_modifier(Modifier::BOLD)
        } else if is_cursor {
            app.theme.primary_style()
        } else {
            app.theme.style()
        };

        frame.render_widget(Paragraph::new(line).style(style), Rect::new(area.x, y, area.width, 1));
        y += 1;
    }
}
