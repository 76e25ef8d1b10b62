use std::fmt;

/// The five screens of the intake form, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    RequestType,
    Urgency,
    Device,
    Details,
    Contact,
}

impl Step {
    pub const COUNT: u8 = 5;
    pub const FIRST: Step = Step::RequestType;
    pub const LAST: Step = Step::Contact;

    /// 1-based position of the step
    pub fn number(&self) -> u8 {
        match self {
            Step::RequestType => 1,
            Step::Urgency => 2,
            Step::Device => 3,
            Step::Details => 4,
            Step::Contact => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1 => Some(Step::RequestType),
            2 => Some(Step::Urgency),
            3 => Some(Step::Device),
            4 => Some(Step::Details),
            5 => Some(Step::Contact),
            _ => None,
        }
    }

    /// Following step, clamped at the last one
    pub fn next(&self) -> Step {
        Step::from_number(self.number() + 1).unwrap_or(Step::LAST)
    }

    /// Preceding step, clamped at the first one
    pub fn prev(&self) -> Step {
        Step::from_number(self.number().saturating_sub(1)).unwrap_or(Step::FIRST)
    }

    pub fn is_last(&self) -> bool {
        *self == Step::LAST
    }

    /// Whether the step is answered by picking one of a fixed set of options
    pub fn has_options(&self) -> bool {
        matches!(self, Step::RequestType | Step::Urgency | Step::Device)
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Step::RequestType => "What are you looking for?",
            Step::Urgency => "How urgent is your project?",
            Step::Device => "What device do you use?",
            Step::Details => "Tell us about the project",
            Step::Contact => "How can we reach you?",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
