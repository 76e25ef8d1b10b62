use std::fmt;
use thiserror::Error;

use super::steps::Step;

/// Values a step gate can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Type,
    Urgency,
    Device,
    Details,
    Name,
    Email,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Type => "Request type",
            Field::Urgency => "Urgency",
            Field::Device => "Device",
            Field::Details => "Project details",
            Field::Name => "Name",
            Field::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reason a transition was refused. The form is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("Submit is only available on step {last} (currently on step {0})", last = Step::LAST)]
    NotFinalStep(Step),

    #[error("That option belongs to step {expected}, but the form is on step {current}")]
    WrongStep { expected: Step, current: Step },

    #[error("Request has already been submitted")]
    AlreadySubmitted,

    #[error("Request has not been submitted yet")]
    NotSubmitted,
}
