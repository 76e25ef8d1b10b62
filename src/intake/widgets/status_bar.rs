/// Dynamic status bar state that can be updated by content panels
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Left side hint text (e.g., "j/k: options  Space: select")
    pub left_hint: String,
    /// Right side hint text (e.g., "l: next  h: back")
    pub right_hint: String,
}

impl StatusBarState {
    /// Get hints for the landing screen
    pub fn landing() -> Self {
        Self {
            left_hint: String::new(),
            right_hint: "Enter: start a request  q: quit".to_string(),
        }
    }

    /// Get hints for an option step
    pub fn choice_step(can_advance: bool) -> Self {
        Self {
            left_hint: "j/k: options  Space: select".to_string(),
            right_hint: if can_advance {
                "l: next  h: back".to_string()
            } else {
                "select an option  h: back".to_string()
            },
        }
    }

    /// Get hints for a text step in normal mode
    pub fn text_normal(can_submit: bool, is_last: bool) -> Self {
        let right_hint = match (is_last, can_submit) {
            (true, true) => "Enter: submit  h: back",
            (true, false) => "name and email required  h: back",
            (false, _) => "l: next  h: back",
        };
        Self {
            left_hint: "j/k: fields  i: edit".to_string(),
            right_hint: right_hint.to_string(),
        }
    }

    /// Get hints for insert mode in a text field
    pub fn text_insert() -> Self {
        Self {
            left_hint: "Type to enter text".to_string(),
            right_hint: "Esc: normal  Tab: next field".to_string(),
        }
    }

    /// Get hints for the NDA checkbox
    pub fn nda_toggle() -> Self {
        Self {
            left_hint: "Space: toggle NDA".to_string(),
            right_hint: "Enter: submit  h: back".to_string(),
        }
    }

    /// Get hints for the success overlay
    pub fn submitted() -> Self {
        Self {
            left_hint: "Request submitted".to_string(),
            right_hint: "Enter: create account  s: skip for now".to_string(),
        }
    }

    /// Get hints for command mode
    pub fn command_mode() -> Self {
        Self {
            left_hint: String::new(),
            right_hint: "Enter: run  Esc: cancel".to_string(),
        }
    }
}
