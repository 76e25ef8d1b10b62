mod choice;
mod contact;
mod details;
mod landing;
mod success;

use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};

use super::{IntakeApp, IntakeForm, Step};
use crate::ui::Layout as ScreenLayout;
use crate::vim::{InputBuffer, VimMode};

/// Width and height of the modal dialog
const MODAL_SIZE: (u16, u16) = (64, 20);

/// Smallest terminal the header, content, message and status rows fit in
const MIN_SIZE: (u16, u16) = (40, 15);

/// Main draw function for the intake host
pub fn draw(frame: &mut Frame, app: &IntakeApp) {
    let area = frame.area();
    let (min_width, min_height) = MIN_SIZE;
    if area.width < min_width || area.height < min_height {
        draw_too_small(frame, area, app);
        return;
    }

    let layout = ScreenLayout::new(area);
    frame.render_widget(Clear, layout.full);

    draw_header(frame, layout.header, app);

    match app.form() {
        None => landing::draw_landing(frame, layout.content, app),
        Some(form) if app.is_modal() => {
            landing::draw_landing(frame, layout.content, app);
            let (width, height) = MODAL_SIZE;
            let area = ScreenLayout::centered_box(layout.content, width, height);
            draw_form(frame, area, app, form);
        }
        Some(form) => draw_form(frame, layout.content, app, form),
    }

    draw_message(frame, layout.message, app);
    draw_status_bar(frame, layout.status, app);

    if app.show_help {
        draw_help(frame, layout.content, app);
    }
}

fn draw_too_small(frame: &mut Frame, area: Rect, app: &IntakeApp) {
    let (width, height) = MIN_SIZE;
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(format!("Terminal too small, need {width}x{height}"))
            .style(app.theme.error_style())
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Draw header bar (1 line, no borders)
fn draw_header(frame: &mut Frame, area: Rect, app: &IntakeApp) {
    let title = format!(" {} (v{}) ", app.config.general.title, env!("CARGO_PKG_VERSION"));
    frame.render_widget(
        Paragraph::new(title).style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        area,
    );

    let time = Local::now().format("%H:%M").to_string();
    frame.render_widget(
        Paragraph::new(format!("{time} "))
            .style(app.theme.muted_style())
            .alignment(Alignment::Right),
        area,
    );
}

fn draw_form(frame: &mut Frame, area: Rect, app: &IntakeApp, form: &IntakeForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.primary_style())
        .title(format!(" {} ", app.config.general.title))
        .title_style(app.theme.primary_style().add_modifier(Modifier::BOLD));

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    if inner.height < 8 || inner.width < 30 {
        return;
    }

    // Progress bar
    let step = form.step();
    let gauge = Gauge::default()
        .gauge_style(app.theme.primary_style())
        .ratio(form.progress())
        .label(format!("Step {} of {}", step.number(), Step::COUNT));
    frame.render_widget(gauge, Rect::new(inner.x + 1, inner.y, inner.width - 2, 1));

    let body = Rect::new(inner.x + 2, inner.y + 2, inner.width - 4, inner.height - 4);
    if step.has_options() {
        choice::draw_options(frame, body, app, form);
    } else if step == Step::Details {
        details::draw_details(frame, body, app);
    } else {
        contact::draw_contact(frame, body, app, form);
    }

    let buttons = Rect::new(inner.x + 2, inner.y + inner.height - 1, inner.width - 4, 1);
    draw_buttons(frame, buttons, app, form);

    if form.is_submitted() {
        success::draw_success(frame, inner, app, form);
    }
}

/// Back / Next / Submit row. A button whose gate fails is drawn disabled.
fn draw_buttons(frame: &mut Frame, area: Rect, app: &IntakeApp, form: &IntakeForm) {
    let step = form.step();

    if step != Step::FIRST {
        let back = " [h] Back ";
        frame.render_widget(
            Paragraph::new(back).style(app.theme.muted_style()),
            Rect::new(area.x, area.y, (back.len() as u16).min(area.width), 1),
        );
    }

    let (text, enabled) = if step.is_last() {
        (" [Enter] Submit ", form.can_submit())
    } else {
        (" [l] Next ", form.can_advance())
    };
    let width = (text.len() as u16).min(area.width);
    frame.render_widget(
        Paragraph::new(text).style(app.theme.button_style(enabled)),
        Rect::new(area.x + area.width - width, area.y, width, 1),
    );
}

/// One-line text input, vim-style: `|` cursor in insert mode, block cursor
/// when focused in normal mode, placeholder when empty and unfocused.
pub(super) fn draw_input(
    frame: &mut Frame,
    area: Rect,
    app: &IntakeApp,
    buffer: &InputBuffer,
    focused: bool,
    placeholder: &str,
) {
    let content = buffer.content();
    let cursor_pos = buffer.cursor();

    if focused && app.vim_mode == VimMode::Insert {
        let before: String = content.chars().take(cursor_pos).collect();
        let after: String = content.chars().skip(cursor_pos).collect();
        let line = Line::from(vec![
            Span::styled(before, app.theme.style()),
            Span::styled("|", app.theme.primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(after, app.theme.style()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    } else if focused {
        let chars: Vec<char> = content.chars().collect();
        let mut spans: Vec<Span> = chars
            .iter()
            .enumerate()
            .map(|(i, ch)| {
                let style = if i == cursor_pos {
                    app.theme.style().add_modifier(Modifier::REVERSED)
                } else {
                    app.theme.style()
                };
                Span::styled(ch.to_string(), style)
            })
            .collect();
        if cursor_pos >= chars.len() {
            spans.push(Span::styled(" ", app.theme.style().add_modifier(Modifier::REVERSED)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    } else if content.is_empty() {
        frame.render_widget(
            Paragraph::new(placeholder).style(app.theme.muted_style()),
            area,
        );
    } else {
        frame.render_widget(Paragraph::new(content).style(app.theme.style()), area);
    }
}

fn draw_message(frame: &mut Frame, area: Rect, app: &IntakeApp) {
    let Some(msg) = &app.message else {
        return;
    };

    let (title, border_style, text_style) = if msg.is_error {
        (" Error ", app.theme.error_style(), app.theme.error_style())
    } else {
        (" Info ", app.theme.secondary_style(), app.theme.style())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .title_style(border_style.add_modifier(Modifier::BOLD));

    let content = Line::from(vec![
        Span::styled(msg.text.as_str(), text_style),
        Span::styled(" (press any key to dismiss)", app.theme.muted_style()),
    ]);

    frame.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &IntakeApp) {
    frame.render_widget(Clear, area);

    let mode_name = app.vim_mode.display_name();
    let mode_span = Span::styled(format!(" {mode_name} "), app.theme.mode_style(mode_name));

    // Command buffer in command mode, otherwise show left hint
    let after_mode = if app.vim_mode == VimMode::Command {
        Span::styled(format!(":{}", app.command_buffer.content()), app.theme.style())
    } else {
        Span::styled(app.status_bar.left_hint.as_str(), app.theme.muted_style())
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![mode_span, Span::raw(" "), after_mode])),
        Rect::new(area.x, area.y, area.width * 2 / 3, 1),
    );

    let right_text = match app.form() {
        Some(form) if !form.is_submitted() => format!(
            "{}/{}  {} ",
            form.step().number(),
            Step::COUNT,
            app.status_bar.right_hint
        ),
        _ => format!("{} ", app.status_bar.right_hint),
    };
    frame.render_widget(
        Paragraph::new(right_text)
            .style(app.theme.muted_style())
            .alignment(Alignment::Right),
        Rect::new(area.x + area.width / 3, area.y, area.width - area.width / 3, 1),
    );
}

fn draw_help(frame: &mut Frame, area: Rect, app: &IntakeApp) {
    let help_text = [
        "Form:",
        "  j/k            Move between options / fields",
        "  Space          Select option / toggle NDA",
        "  1-4            Quick select option",
        "  l / Tab        Next step",
        "  h / S-Tab      Previous step",
        "  Enter          Select / Submit",
        "  Esc            Close the request dialog",
        "",
        "Vim Modes:",
        "  i / a          Edit the focused field",
        "  Esc            Return to normal",
        "  :              Command mode",
        "",
        "Commands: :next :back :submit :skip :signup :close :q",
        "",
        "Press q or Esc to close",
    ];

    let width = 60.min(area.width.saturating_sub(4));
    let height = (help_text.len() as u16 + 2).min(area.height);
    let help_area = ScreenLayout::centered_box(area, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(" Help ");

    let inner = block.inner(help_area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(block, help_area);

    for (i, line) in help_text.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        frame.render_widget(
            Paragraph::new(*line).style(app.theme.style()),
            Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{HostMode, IntakeConfig};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn render(app: &IntakeApp) -> String {
        render_at(app, 80, 24)
    }

    fn render_at(app: &IntakeApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut IntakeApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn inline_app() -> IntakeApp {
        let mut config = IntakeConfig::default();
        config.host.mode = HostMode::Inline;
        IntakeApp::new(config)
    }

    #[test]
    fn landing_offers_start_trigger() {
        let app = IntakeApp::new(IntakeConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Start a Request"));
        assert!(!screen.contains("Step 1 of 5"));
    }

    #[test]
    fn first_step_shows_prompt_options_and_progress() {
        let app = inline_app();
        let screen = render(&app);
        assert!(screen.contains("Step 1 of 5"));
        assert!(screen.contains("What are you looking for?"));
        assert!(screen.contains("Spreadsheet Creation"));
        assert!(screen.contains("Create / Fix VBA Code"));
    }

    #[test]
    fn modal_draws_form_over_landing() {
        let mut app = IntakeApp::new(IntakeConfig::default());
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Step 1 of 5"));
    }

    #[test]
    fn contact_step_and_success_overlay() {
        let mut app = inline_app();
        for key in ['1', 'l', '1', 'l', '1', 'l', 'i', 'x'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('l'));

        let screen = render(&app);
        assert!(screen.contains("Step 5 of 5"));
        assert!(screen.contains("you@example.com"));
        assert!(screen.contains("NDA"));

        press(&mut app, KeyCode::Char('i'));
        for c in "Jane".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "j@x.io".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("Your request has been submitted!"));
        assert!(screen.contains("Create My Account"));
        assert!(screen.contains("Skip for now"));
    }

    #[test]
    fn help_popup_lists_commands() {
        let mut app = inline_app();
        press(&mut app, KeyCode::Char('?'));
        let screen = render(&app);
        assert!(screen.contains(":submit"));
    }

    #[test]
    fn every_screen_renders_at_small_sizes() {
        let sizes = [(1, 1), (5, 3), (20, 8), (31, 12), (39, 15), (40, 14), (40, 15), (64, 20)];
        let mut keys: Vec<KeyCode> = vec![KeyCode::Enter];
        keys.extend("1l1l1lix".chars().map(KeyCode::Char));
        keys.extend([KeyCode::Esc, KeyCode::Char('l'), KeyCode::Char('i')]);
        keys.extend("Jane".chars().map(KeyCode::Char));
        keys.push(KeyCode::Tab);
        keys.extend("j@x.io".chars().map(KeyCode::Char));
        keys.extend([KeyCode::Esc, KeyCode::Enter, KeyCode::Char('?')]);

        for mode in [HostMode::Modal, HostMode::Inline] {
            for (width, height) in sizes {
                let mut config = IntakeConfig::default();
                config.host.mode = mode;
                let mut app = IntakeApp::new(config);

                render_at(&app, width, height);
                for key in &keys {
                    press(&mut app, *key);
                    render_at(&app, width, height);
                }
                assert!(app.show_help, "{mode:?} at {width}x{height} did not reach help");
            }
        }
    }

    #[test]
    fn undersized_terminal_shows_notice() {
        let app = IntakeApp::new(IntakeConfig::default());
        let screen = render_at(&app, 20, 8);
        assert!(screen.contains("Terminal too"));
        assert!(!screen.contains("Start a Request"));

        let screen = render_at(&app, 40, 15);
        assert!(screen.contains("Start a Request"));
    }
}
