//! Fixed choices offered on the first three steps of the intake form.

use serde::Serialize;
use std::fmt;

use super::steps::Step;

/// What kind of Excel help is being requested (step 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RequestType {
    #[serde(rename = "Spreadsheet Creation")]
    SpreadsheetCreation,
    #[serde(rename = "Edit Current Spreadsheet")]
    EditSpreadsheet,
    #[serde(rename = "Create / Fix a Formula")]
    Formula,
    #[serde(rename = "Create / Fix VBA Code")]
    VbaCode,
}

impl RequestType {
    pub const ALL: [RequestType; 4] = [
        RequestType::SpreadsheetCreation,
        RequestType::EditSpreadsheet,
        RequestType::Formula,
        RequestType::VbaCode,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RequestType::SpreadsheetCreation => "Spreadsheet Creation",
            RequestType::EditSpreadsheet => "Edit Current Spreadsheet",
            RequestType::Formula => "Create / Fix a Formula",
            RequestType::VbaCode => "Create / Fix VBA Code",
        }
    }
}

/// How soon the work is needed (step 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Urgency {
    #[serde(rename = "Immediate (Today)")]
    Immediate,
    #[serde(rename = "This Week")]
    ThisWeek,
    #[serde(rename = "This Month")]
    ThisMonth,
    #[serde(rename = "Flexible")]
    Flexible,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Immediate,
        Urgency::ThisWeek,
        Urgency::ThisMonth,
        Urgency::Flexible,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Immediate => "Immediate (Today)",
            Urgency::ThisWeek => "This Week",
            Urgency::ThisMonth => "This Month",
            Urgency::Flexible => "Flexible",
        }
    }
}

/// Platform the client runs Excel on (step 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Device {
    Mac,
    #[serde(rename = "PC")]
    Pc,
}

impl Device {
    pub const ALL: [Device; 2] = [Device::Mac, Device::Pc];

    pub fn label(&self) -> &'static str {
        match self {
            Device::Mac => "Mac",
            Device::Pc => "PC",
        }
    }
}

/// A single selectable option, tagged with the field it fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Type(RequestType),
    Urgency(Urgency),
    Device(Device),
}

impl Choice {
    /// The step on which this choice is offered
    pub fn step(&self) -> Step {
        match self {
            Choice::Type(_) => Step::RequestType,
            Choice::Urgency(_) => Step::Urgency,
            Choice::Device(_) => Step::Device,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Choice::Type(t) => t.label(),
            Choice::Urgency(u) => u.label(),
            Choice::Device(d) => d.label(),
        }
    }

    /// Options offered on `step`, in display order. Empty for text steps.
    pub fn options_for(step: Step) -> Vec<Choice> {
        match step {
            Step::RequestType => RequestType::ALL.iter().copied().map(Choice::Type).collect(),
            Step::Urgency => Urgency::ALL.iter().copied().map(Choice::Urgency).collect(),
            Step::Device => Device::ALL.iter().copied().map(Choice::Device).collect(),
            Step::Details | Step::Contact => Vec::new(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_counts_per_step() {
        assert_eq!(Choice::options_for(Step::RequestType).len(), 4);
        assert_eq!(Choice::options_for(Step::Urgency).len(), 4);
        assert_eq!(Choice::options_for(Step::Device).len(), 2);
        assert!(Choice::options_for(Step::Details).is_empty());
        assert!(Choice::options_for(Step::Contact).is_empty());
    }

    #[test]
    fn every_option_belongs_to_its_step() {
        for step in [Step::RequestType, Step::Urgency, Step::Device] {
            for choice in Choice::options_for(step) {
                assert_eq!(choice.step(), step);
            }
        }
    }

    #[test]
    fn labels_match_the_request_form() {
        assert_eq!(Choice::Type(RequestType::VbaCode).to_string(), "Create / Fix VBA Code");
        assert_eq!(Choice::Urgency(Urgency::Immediate).to_string(), "Immediate (Today)");
        assert_eq!(Choice::Device(Device::Pc).to_string(), "PC");
    }
}
