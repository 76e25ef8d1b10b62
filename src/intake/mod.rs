mod config;
mod error;
mod form;
mod options;
mod steps;
mod submission;
pub mod ui;
mod widgets;

pub use config::{GeneralConfig, HandoffConfig, HostConfig, HostMode, IntakeConfig};
pub use error::{Field, GateError};
pub use form::{FormResult, IntakeEvent, IntakeForm, Phase, TextField, Transition};
pub use options::{Choice, Device, RequestType, Urgency};
pub use steps::Step;
pub use submission::{signup_link, Submission};
pub use widgets::StatusBarState;

use crate::ui::Theme;
use crate::vim::{parse_command, Command, InputBuffer, ModeAction, VimMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

/// Actions the host must carry out on behalf of the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeAction {
    /// Hand the submitted email off to the account-creation page
    OpenSignup(String),
}

/// What is currently focused inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFocus {
    /// Option list on steps 1-3
    Options,
    /// A text input
    Field(TextField),
    /// NDA checkbox on the contact step
    Nda,
}

/// Message displayed to the user
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

/// Host surface for the intake form.
///
/// Mounts at most one [`IntakeForm`] at a time. In modal mode the form only
/// exists while the dialog is open; closing it discards everything entered.
pub struct IntakeApp {
    pub config: IntakeConfig,
    pub theme: Theme,

    // Vim mode state
    pub vim_mode: VimMode,
    pub command_buffer: InputBuffer,

    form: Option<IntakeForm>,
    pub focus: ContentFocus,
    pub option_cursor: usize,

    // Editing buffers mirrored into the form on every keystroke
    pub details: InputBuffer,
    pub name: InputBuffer,
    pub email: InputBuffer,
    pub phone: InputBuffer,

    // UI state
    pub message: Option<Message>,
    pub show_help: bool,
    pub should_exit: bool,

    /// Terminal results emitted by the form this session, oldest first
    pub results: Vec<FormResult>,

    pub status_bar: StatusBarState,
}

impl IntakeApp {
    pub fn new(config: IntakeConfig) -> Self {
        let form = match config.host.mode {
            HostMode::Inline => Some(IntakeForm::new()),
            HostMode::Modal => None,
        };

        let mut app = Self {
            config,
            theme: Theme::default(),
            vim_mode: VimMode::Normal,
            command_buffer: InputBuffer::new(),
            form,
            focus: ContentFocus::Options,
            option_cursor: 0,
            details: InputBuffer::new(),
            name: InputBuffer::new(),
            email: InputBuffer::new(),
            phone: InputBuffer::new(),
            message: None,
            show_help: false,
            should_exit: false,
            results: Vec::new(),
            status_bar: StatusBarState::landing(),
        };
        app.update_status_bar();
        app
    }

    pub fn form(&self) -> Option<&IntakeForm> {
        self.form.as_ref()
    }

    pub fn is_modal(&self) -> bool {
        self.config.host.mode == HostMode::Modal
    }

    /// Most recent submission, if any
    pub fn last_submission(&self) -> Option<&Submission> {
        self.results.iter().rev().find_map(|result| match result {
            FormResult::Submitted(submission) => Some(submission),
            FormResult::Dismissed => None,
        })
    }

    pub fn buffer(&self, field: TextField) -> &InputBuffer {
        match field {
            TextField::Details => &self.details,
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
        }
    }

    fn buffer_mut(&mut self, field: TextField) -> &mut InputBuffer {
        match field {
            TextField::Details => &mut self.details,
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
        }
    }

    /// Mount a fresh form (the "Start a Request" trigger)
    pub fn open_form(&mut self) {
        if self.form.is_some() {
            return;
        }
        self.clear_buffers();
        self.form = Some(IntakeForm::new());
        self.enter_step(Step::FIRST);
        info!("Intake form opened");
    }

    /// Unmount the form, discarding whatever was entered
    pub fn close_form(&mut self) {
        if !self.is_modal() {
            self.set_error("The inline form cannot be closed".to_string());
            return;
        }
        if self.form.take().is_some() {
            self.clear_buffers();
            self.vim_mode = VimMode::Normal;
            info!("Intake form closed");
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<IntakeAction> {
        // Clear message on any key
        if self.message.is_some() {
            self.message = None;
        }

        // Handle help popup
        if self.show_help {
            if key.code == KeyCode::Esc || key.code == KeyCode::Char('q') {
                self.show_help = false;
            }
            self.update_status_bar();
            return None;
        }

        let result = match self.vim_mode {
            VimMode::Normal => self.handle_normal_mode(key),
            VimMode::Insert => {
                self.handle_insert_mode(key);
                None
            }
            VimMode::Command => self.handle_command_mode(key),
        };

        self.update_status_bar();
        result
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Option<IntakeAction> {
        match key.code {
            KeyCode::Char(':') => {
                self.vim_mode = self.vim_mode.transition(ModeAction::EnterCommand);
                self.command_buffer.clear();
                return None;
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = true;
                return None;
            }
            KeyCode::Char('q') => {
                self.should_exit = true;
                return None;
            }
            _ => {}
        }

        let Some(form) = self.form.as_ref() else {
            if key.code == KeyCode::Enter {
                self.open_form();
            }
            return None;
        };

        if form.is_submitted() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('c') => self.create_account(),
                KeyCode::Char('s') => {
                    self.skip_for_now();
                    None
                }
                KeyCode::Esc => {
                    self.close_form();
                    None
                }
                _ => None,
            };
        }

        let step = form.step();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.navigate_down(),
            KeyCode::Char('k') | KeyCode::Up => self.navigate_up(),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => self.advance(),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => self.retreat(),
            KeyCode::Char(' ') => match self.focus {
                ContentFocus::Options => self.select_highlighted(),
                ContentFocus::Nda => self.toggle_nda(),
                ContentFocus::Field(_) => {}
            },
            KeyCode::Enter => match self.focus {
                ContentFocus::Options => self.select_highlighted(),
                _ if step.is_last() => self.submit(),
                _ => self.advance(),
            },
            KeyCode::Char('i') | KeyCode::Char('a') => {
                if let ContentFocus::Field(field) = self.focus {
                    if key.code == KeyCode::Char('a') {
                        self.buffer_mut(field).move_end();
                    }
                    self.vim_mode = self.vim_mode.transition(ModeAction::EnterInsert);
                }
            }
            // Quick select by number
            KeyCode::Char(c) if c.is_ascii_digit() && step.has_options() => {
                let num = c.to_digit(10).unwrap_or(0) as usize;
                if num > 0 && num <= Choice::options_for(step).len() {
                    self.option_cursor = num - 1;
                    self.select_highlighted();
                }
            }
            KeyCode::Esc => {
                if self.is_modal() {
                    self.close_form();
                }
            }
            _ => {}
        }
        None
    }

    fn handle_insert_mode(&mut self, key: KeyEvent) {
        let ContentFocus::Field(field) = self.focus else {
            self.vim_mode = VimMode::Normal;
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
            }
            KeyCode::Enter => {
                if field == TextField::Details {
                    self.details.insert('\n');
                    self.sync_field(field);
                } else {
                    self.next_contact_field(field);
                }
            }
            KeyCode::Tab => {
                if field != TextField::Details {
                    self.next_contact_field(field);
                }
            }
            KeyCode::BackTab => {
                let prev = match field {
                    TextField::Email => Some(TextField::Name),
                    TextField::Phone => Some(TextField::Email),
                    _ => None,
                };
                if let Some(prev) = prev {
                    self.focus = ContentFocus::Field(prev);
                }
            }
            KeyCode::Backspace => {
                if self.buffer_mut(field).delete_back() {
                    self.sync_field(field);
                }
            }
            KeyCode::Delete => {
                if self.buffer_mut(field).delete_forward() {
                    self.sync_field(field);
                }
            }
            KeyCode::Left => self.buffer_mut(field).move_left(),
            KeyCode::Right => self.buffer_mut(field).move_right(),
            KeyCode::Home => self.buffer_mut(field).move_start(),
            KeyCode::End => self.buffer_mut(field).move_end(),
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match c {
                        'u' => {
                            self.buffer_mut(field).clear();
                            self.sync_field(field);
                        }
                        'a' => self.buffer_mut(field).move_start(),
                        'e' => self.buffer_mut(field).move_end(),
                        _ => {}
                    }
                } else {
                    self.buffer_mut(field).insert(c);
                    self.sync_field(field);
                }
            }
            _ => {}
        }
    }

    fn handle_command_mode(&mut self, key: KeyEvent) -> Option<IntakeAction> {
        match key.code {
            KeyCode::Esc => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let cmd = self.command_buffer.content().to_string();
                self.vim_mode = self.vim_mode.transition(ModeAction::Execute);
                self.command_buffer.clear();
                return self.execute_command(&cmd);
            }
            KeyCode::Backspace => {
                if self.command_buffer.is_empty() {
                    self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                } else {
                    self.command_buffer.delete_back();
                }
            }
            KeyCode::Char(c) => {
                self.command_buffer.insert(c);
            }
            _ => {}
        }
        None
    }

    fn execute_command(&mut self, cmd: &str) -> Option<IntakeAction> {
        let command = match parse_command(cmd) {
            Ok(command) => command,
            Err(e) => {
                self.set_error(e.to_string());
                return None;
            }
        };

        match command {
            Command::Help => self.show_help = true,
            Command::Quit => self.should_exit = true,
            Command::Close => self.close_form(),
            _ if self.form.is_none() => {
                self.set_error("No request in progress. Press Enter to start one".to_string());
            }
            Command::Next => self.advance(),
            Command::Back => self.retreat(),
            Command::Submit => self.submit(),
            Command::Skip => self.skip_for_now(),
            Command::Signup => return self.create_account(),
        }
        None
    }

    fn navigate_down(&mut self) {
        let Some(step) = self.form.as_ref().map(|f| f.step()) else {
            return;
        };
        match self.focus {
            ContentFocus::Options => {
                let count = Choice::options_for(step).len();
                if self.option_cursor + 1 < count {
                    self.option_cursor += 1;
                }
            }
            ContentFocus::Field(TextField::Details) => {}
            ContentFocus::Field(field) => {
                self.focus = match field {
                    TextField::Name => ContentFocus::Field(TextField::Email),
                    TextField::Email => ContentFocus::Field(TextField::Phone),
                    _ => ContentFocus::Nda,
                };
            }
            ContentFocus::Nda => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus {
            ContentFocus::Options => {
                self.option_cursor = self.option_cursor.saturating_sub(1);
            }
            ContentFocus::Field(TextField::Email) => {
                self.focus = ContentFocus::Field(TextField::Name);
            }
            ContentFocus::Field(TextField::Phone) => {
                self.focus = ContentFocus::Field(TextField::Email);
            }
            ContentFocus::Nda => {
                self.focus = ContentFocus::Field(TextField::Phone);
            }
            ContentFocus::Field(_) => {}
        }
    }

    fn next_contact_field(&mut self, field: TextField) {
        match field {
            TextField::Name => self.focus = ContentFocus::Field(TextField::Email),
            TextField::Email => self.focus = ContentFocus::Field(TextField::Phone),
            _ => {
                self.focus = ContentFocus::Nda;
                self.vim_mode = VimMode::Normal;
            }
        }
    }

    fn select_highlighted(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let step = form.step();
        let Some(choice) = Choice::options_for(step).get(self.option_cursor).copied() else {
            return;
        };
        if let Err(e) = form.select_option(step, choice) {
            self.set_error(e.to_string());
        }
    }

    fn toggle_nda(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        if let Err(e) = form.toggle_nda() {
            self.set_error(e.to_string());
        }
    }

    fn sync_field(&mut self, field: TextField) {
        let value = self.buffer(field).content().to_string();
        let Some(form) = self.form.as_mut() else {
            return;
        };
        if let Err(e) = form.set_text(field, value) {
            self.set_error(e.to_string());
        }
    }

    fn advance(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let before = form.step();
        match form.advance() {
            Ok(step) if step != before => self.enter_step(step),
            Ok(_) => {}
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn retreat(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let before = form.step();
        match form.retreat() {
            Ok(step) if step != before => self.enter_step(step),
            Ok(_) => {}
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn submit(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match form.submit() {
            Ok(result) => {
                self.vim_mode = VimMode::Normal;
                self.results.push(result);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// "Create My Account": hand the email off and leave
    fn create_account(&mut self) -> Option<IntakeAction> {
        let submission = self.form.as_ref().and_then(|f| f.submission());
        let Some(submission) = submission else {
            self.set_error("Submit the request before creating an account".to_string());
            return None;
        };

        let link = submission.signup_link(&self.config.handoff.signup_url);
        info!("Handing off to account creation: {}", link);
        self.should_exit = true;
        Some(IntakeAction::OpenSignup(link))
    }

    /// "Skip for now": reset the form, and close it when hosted in a modal
    fn skip_for_now(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match form.skip_for_now() {
            Ok(result) => {
                self.results.push(result);
                self.clear_buffers();
                if self.is_modal() {
                    self.form = None;
                } else {
                    self.enter_step(Step::FIRST);
                }
                self.set_info("Thanks! An Excel expert will be in touch soon".to_string());
                info!("Account creation skipped");
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Point focus at the first input of `step`
    fn enter_step(&mut self, step: Step) {
        self.vim_mode = VimMode::Normal;
        self.focus = match step {
            Step::Details => ContentFocus::Field(TextField::Details),
            Step::Contact => ContentFocus::Field(TextField::Name),
            _ => ContentFocus::Options,
        };
        let selected = self.form.as_ref().and_then(|f| f.selected(step));
        self.option_cursor = selected
            .and_then(|choice| Choice::options_for(step).iter().position(|c| *c == choice))
            .unwrap_or(0);
    }

    fn clear_buffers(&mut self) {
        self.details.clear();
        self.name.clear();
        self.email.clear();
        self.phone.clear();
    }

    pub fn set_error(&mut self, text: String) {
        self.message = Some(Message {
            text,
            is_error: true,
        });
    }

    pub fn set_info(&mut self, text: String) {
        self.message = Some(Message {
            text,
            is_error: false,
        });
    }

    pub fn tick(&mut self) {
        self.update_status_bar();
    }

    /// Update status bar based on current application state
    pub fn update_status_bar(&mut self) {
        if self.vim_mode == VimMode::Command {
            self.status_bar = StatusBarState::command_mode();
            return;
        }

        self.status_bar = match &self.form {
            None => StatusBarState::landing(),
            Some(form) if form.is_submitted() => StatusBarState::submitted(),
            Some(form) => match self.focus {
                ContentFocus::Options => StatusBarState::choice_step(form.can_advance()),
                ContentFocus::Field(_) if self.vim_mode == VimMode::Insert => {
                    StatusBarState::text_insert()
                }
                ContentFocus::Field(_) => {
                    StatusBarState::text_normal(form.can_submit(), form.step().is_last())
                }
                ContentFocus::Nda => StatusBarState::nda_toggle(),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut IntakeApp, code: KeyCode) -> Option<IntakeAction> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut IntakeApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn run_command(app: &mut IntakeApp, cmd: &str) -> Option<IntakeAction> {
        press(app, KeyCode::Char(':'));
        type_text(app, cmd);
        press(app, KeyCode::Enter)
    }

    fn inline_config() -> IntakeConfig {
        let mut config = IntakeConfig::default();
        config.host.mode = HostMode::Inline;
        config
    }

    /// Drives a modal app from the landing screen to the success overlay
    fn submit_request(app: &mut IntakeApp) {
        if app.form().is_none() {
            press(app, KeyCode::Enter);
        }
        press(app, KeyCode::Char(' '));
        press(app, KeyCode::Char('l'));
        press(app, KeyCode::Char('j'));
        press(app, KeyCode::Char(' '));
        press(app, KeyCode::Char('l'));
        press(app, KeyCode::Char('2'));
        press(app, KeyCode::Char('l'));
        press(app, KeyCode::Char('i'));
        type_text(app, "Fix my macro");
        press(app, KeyCode::Esc);
        press(app, KeyCode::Char('l'));
        press(app, KeyCode::Char('i'));
        type_text(app, "Jane Doe");
        press(app, KeyCode::Tab);
        type_text(app, "jane@example.com");
        press(app, KeyCode::Esc);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn modal_starts_on_landing_and_inline_starts_mounted() {
        let modal = IntakeApp::new(IntakeConfig::default());
        assert!(modal.form().is_none());

        let inline = IntakeApp::new(inline_config());
        assert_eq!(inline.form().map(|f| f.step()), Some(Step::RequestType));
    }

    #[test]
    fn blocked_advance_reports_missing_field() {
        let mut app = IntakeApp::new(IntakeConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('l'));

        assert_eq!(app.form().map(|f| f.step()), Some(Step::RequestType));
        let message = app.message.as_ref().expect("gate failure should be reported");
        assert!(message.is_error);
        assert_eq!(message.text, "Request type is required");
    }

    #[test]
    fn keyboard_flow_submits_and_hands_off_email() {
        let mut app = IntakeApp::new(IntakeConfig::default());
        submit_request(&mut app);

        let form = app.form().expect("form stays mounted after submit");
        assert_eq!(form.phase(), Phase::Submitted);

        let submission = app.last_submission().expect("submission recorded");
        assert_eq!(submission.request_type, Some(RequestType::SpreadsheetCreation));
        assert_eq!(submission.urgency, Some(Urgency::ThisWeek));
        assert_eq!(submission.device, Some(Device::Pc));
        assert_eq!(submission.details, "Fix my macro");
        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.email, "jane@example.com");

        let action = press(&mut app, KeyCode::Enter);
        assert_eq!(
            action,
            Some(IntakeAction::OpenSignup(
                "/signup?email=jane%40example.com".to_string()
            ))
        );
        assert!(app.should_exit);
    }

    #[test]
    fn skip_for_now_closes_modal_and_records_dismissal() {
        let mut app = IntakeApp::new(IntakeConfig::default());
        submit_request(&mut app);
        press(&mut app, KeyCode::Char('s'));

        assert!(app.form().is_none());
        assert!(app.name.is_empty());
        assert!(matches!(app.results.as_slice(), [
            FormResult::Submitted(_),
            FormResult::Dismissed
        ]));
    }

    #[test]
    fn skip_for_now_resets_inline_form() {
        let mut app = IntakeApp::new(inline_config());
        submit_request(&mut app);
        run_command(&mut app, "skip");

        assert_eq!(app.form(), Some(&IntakeForm::new()));
        assert_eq!(app.focus, ContentFocus::Options);
        assert!(app.email.is_empty());
    }

    #[test]
    fn closing_modal_discards_progress() {
        let mut app = IntakeApp::new(IntakeConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Esc);
        assert!(app.form().is_none());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form(), Some(&IntakeForm::new()));
    }

    #[test]
    fn retreat_restores_cursor_on_previous_selection() {
        let mut app = IntakeApp::new(IntakeConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('h'));

        assert_eq!(app.form().map(|f| f.step()), Some(Step::RequestType));
        assert_eq!(app.option_cursor, 2);
    }

    #[test]
    fn nda_toggles_with_space_on_contact_step() {
        let mut app = IntakeApp::new(inline_config());
        for key in ['1', 'l', '1', 'l', '1', 'l'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "VBA");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('l'));

        for _ in 0..3 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.focus, ContentFocus::Nda);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form().map(|f| f.nda()), Some(true));
    }

    #[test]
    fn submit_with_missing_email_stays_on_contact_step() {
        let mut app = IntakeApp::new(inline_config());
        for key in ['4', 'l', '4', 'l', '2', 'l'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "Macro");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "Jane Doe");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.form().map(|f| f.phase()), Some(Phase::Editing(Step::Contact)));
        assert_eq!(
            app.message.as_ref().map(|m| m.text.as_str()),
            Some("Email is required")
        );
    }

    #[test]
    fn commands_without_form_are_rejected() {
        let mut app = IntakeApp::new(IntakeConfig::default());
        run_command(&mut app, "next");
        assert!(app.message.as_ref().is_some_and(|m| m.is_error));

        run_command(&mut app, "bogus");
        assert_eq!(
            app.message.as_ref().map(|m| m.text.as_str()),
            Some("Unknown command: bogus")
        );

        run_command(&mut app, "q");
        assert!(app.should_exit);
    }

    #[test]
    fn signup_requires_submission() {
        let mut app = IntakeApp::new(inline_config());
        assert_eq!(run_command(&mut app, "signup"), None);
        assert!(!app.should_exit);
    }
}
