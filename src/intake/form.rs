//! State machine behind the "Get Excel Help Now" request form.
//!
//! The form walks through five steps. Each step has a gate: the field(s) that
//! must be filled before the form may move forward. Going back is never gated.
//! Once submitted the form is frozen until it is reset.
//!
//! Every operation is total. A refused operation returns a [`GateError`]
//! describing why and leaves the form exactly as it was.

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::error::{Field, GateError};
use super::options::{Choice, Device, RequestType, Urgency};
use super::steps::Step;
use super::submission::Submission;

/// Free-text fields, editable on every keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Details,
    Name,
    Email,
    Phone,
}

/// Observable state of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing(Step),
    Submitted,
}

/// Terminal result handed to the host surface
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult {
    /// The request was sent; carries every collected value
    Submitted(Submission),
    /// The user chose "skip for now" after submitting
    Dismissed,
}

/// Input accepted by [`IntakeForm::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeEvent {
    Select(Step, Choice),
    SetText(TextField, String),
    ToggleNda,
    Advance,
    Retreat,
    Submit,
    Reset,
    SkipForNow,
}

/// Outcome of [`IntakeForm::apply`]: the next form plus what happened
#[derive(Debug, Clone)]
pub struct Transition {
    pub form: IntakeForm,
    pub outcome: Result<Option<FormResult>, GateError>,
}

/// Text fields are scrubbed when replaced, on reset, and on drop.
#[derive(Debug, Clone, Default, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct IntakeForm {
    #[zeroize(skip)]
    step: Step,
    #[zeroize(skip)]
    request_type: Option<RequestType>,
    #[zeroize(skip)]
    urgency: Option<Urgency>,
    #[zeroize(skip)]
    device: Option<Device>,
    details: String,
    name: String,
    email: String,
    phone: String,
    nda: bool,
    #[zeroize(skip)]
    submitted_at: Option<DateTime<Utc>>,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn phase(&self) -> Phase {
        if self.is_submitted() {
            Phase::Submitted
        } else {
            Phase::Editing(self.step)
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    pub fn request_type(&self) -> Option<RequestType> {
        self.request_type
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.urgency
    }

    pub fn device(&self) -> Option<Device> {
        self.device
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn nda(&self) -> bool {
        self.nda
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Details => &self.details,
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
        }
    }

    /// Choice currently recorded for an option step
    pub fn selected(&self, step: Step) -> Option<Choice> {
        match step {
            Step::RequestType => self.request_type.map(Choice::Type),
            Step::Urgency => self.urgency.map(Choice::Urgency),
            Step::Device => self.device.map(Choice::Device),
            Step::Details | Step::Contact => None,
        }
    }

    /// Completion ratio in (0, 1], derived from the current step
    pub fn progress(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(Step::COUNT)
    }

    /// Checks the gate of the current step.
    pub fn check_gate(&self) -> Result<(), GateError> {
        match self.step {
            Step::RequestType if self.request_type.is_none() => {
                Err(GateError::MissingField(Field::Type))
            }
            Step::Urgency if self.urgency.is_none() => Err(GateError::MissingField(Field::Urgency)),
            Step::Device if self.device.is_none() => Err(GateError::MissingField(Field::Device)),
            Step::Details if self.details.is_empty() => {
                Err(GateError::MissingField(Field::Details))
            }
            Step::Contact if self.name.is_empty() => Err(GateError::MissingField(Field::Name)),
            Step::Contact if self.email.is_empty() => Err(GateError::MissingField(Field::Email)),
            _ => Ok(()),
        }
    }

    pub fn can_advance(&self) -> bool {
        !self.is_submitted() && self.check_gate().is_ok()
    }

    pub fn can_submit(&self) -> bool {
        self.step.is_last() && self.can_advance()
    }

    /// Records an option for `step`. Returns whether the value changed.
    pub fn select_option(&mut self, step: Step, choice: Choice) -> Result<bool, GateError> {
        self.ensure_editing()?;
        if choice.step() != step || step != self.step {
            return Err(GateError::WrongStep {
                expected: choice.step(),
                current: self.step,
            });
        }

        let changed = self.selected(step) != Some(choice);
        match choice {
            Choice::Type(t) => self.request_type = Some(t),
            Choice::Urgency(u) => self.urgency = Some(u),
            Choice::Device(d) => self.device = Some(d),
        }
        if changed {
            debug!(step = step.number(), option = choice.label(), "Option selected");
        }
        Ok(changed)
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) -> Result<(), GateError> {
        self.ensure_editing()?;
        let slot = match field {
            TextField::Details => &mut self.details,
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
        };
        slot.zeroize();
        *slot = value.into();
        Ok(())
    }

    /// Flips the NDA flag and returns its new value.
    pub fn toggle_nda(&mut self) -> Result<bool, GateError> {
        self.ensure_editing()?;
        self.nda = !self.nda;
        Ok(self.nda)
    }

    /// Moves forward one step if the current gate holds. Stays put on the
    /// last step; submitting is a separate operation.
    pub fn advance(&mut self) -> Result<Step, GateError> {
        self.ensure_editing()?;
        self.check_gate()?;
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Moves back one step, clamped at the first.
    pub fn retreat(&mut self) -> Result<Step, GateError> {
        self.ensure_editing()?;
        self.step = self.step.prev();
        Ok(self.step)
    }

    pub fn submit(&mut self) -> Result<FormResult, GateError> {
        self.ensure_editing()?;
        if !self.step.is_last() {
            return Err(GateError::NotFinalStep(self.step));
        }
        self.check_gate()?;

        let submitted_at = Utc::now();
        self.submitted_at = Some(submitted_at);
        let submission = self.snapshot(submitted_at);
        info!(
            request_type = submission.request_type.map(|t| t.label()),
            urgency = submission.urgency.map(|u| u.label()),
            device = submission.device.map(|d| d.label()),
            nda = submission.nda,
            "Intake request submitted"
        );
        Ok(FormResult::Submitted(submission))
    }

    /// Restores the initial state. Only valid after a submission.
    pub fn reset(&mut self) -> Result<(), GateError> {
        if !self.is_submitted() {
            return Err(GateError::NotSubmitted);
        }
        self.zeroize();
        *self = Self::new();
        debug!("Intake form reset");
        Ok(())
    }

    /// "Skip for now": reset, then report the dismissal to the host.
    pub fn skip_for_now(&mut self) -> Result<FormResult, GateError> {
        self.reset()?;
        Ok(FormResult::Dismissed)
    }

    /// The submitted payload, while the form is in its terminal phase
    pub fn submission(&self) -> Option<Submission> {
        self.submitted_at.map(|at| self.snapshot(at))
    }

    /// Pure transition: returns the next form without touching `self`.
    pub fn apply(&self, event: IntakeEvent) -> Transition {
        let mut form = self.clone();
        let outcome = match event {
            IntakeEvent::Select(step, choice) => form.select_option(step, choice).map(|_| None),
            IntakeEvent::SetText(field, value) => form.set_text(field, value).map(|_| None),
            IntakeEvent::ToggleNda => form.toggle_nda().map(|_| None),
            IntakeEvent::Advance => form.advance().map(|_| None),
            IntakeEvent::Retreat => form.retreat().map(|_| None),
            IntakeEvent::Submit => form.submit().map(Some),
            IntakeEvent::Reset => form.reset().map(|_| None),
            IntakeEvent::SkipForNow => form.skip_for_now().map(Some),
        };
        Transition { form, outcome }
    }

    fn ensure_editing(&self) -> Result<(), GateError> {
        if self.is_submitted() {
            Err(GateError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }

    fn snapshot(&self, submitted_at: DateTime<Utc>) -> Submission {
        Submission {
            request_type: self.request_type,
            urgency: self.urgency,
            device: self.device,
            details: self.details.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            nda: self.nda,
            submitted_at,
        }
    }
}
