use super::lead::LeadField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Welcome,
    Choice,
    Input,
    Confirmation,
}

/// One fixed question of the lead-capture flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: StepKind,
    pub options: &'static [&'static str],
    pub field: Option<LeadField>,
    /// Placeholder for the text box on input steps.
    pub placeholder: &'static str,
}

pub const SERVICE_OPTIONS: &[&str] = &[
    "FSSAI License",
    "GST Registration",
    "Trademark Registration",
    "Company Registration",
    "ISO Certification",
    "Other Services",
];

pub const BUSINESS_TYPE_OPTIONS: &[&str] = &[
    "Proprietorship",
    "Partnership",
    "Private Limited",
    "LLP",
    "Not started yet",
];

/// The flow as it is authored for the site. Phone is the last question, so
/// answering it is what reaches the confirmation.
pub fn default_steps() -> Vec<Step> {
    vec![
        Step {
            id: "welcome",
            prompt: "Hi there! 👋 I'm the Geemadhura assistant. Which service can we help you with today?",
            kind: StepKind::Welcome,
            options: &[],
            field: None,
            placeholder: "",
        },
        Step {
            id: "service",
            prompt: "Which service are you looking for?",
            kind: StepKind::Choice,
            options: SERVICE_OPTIONS,
            field: Some(LeadField::Service),
            placeholder: "",
        },
        Step {
            id: "business_type",
            prompt: "Great choice! What type of business do you run?",
            kind: StepKind::Choice,
            options: BUSINESS_TYPE_OPTIONS,
            field: Some(LeadField::BusinessType),
            placeholder: "",
        },
        Step {
            id: "location",
            prompt: "Which city is your business located in?",
            kind: StepKind::Input,
            options: &[],
            field: Some(LeadField::Location),
            placeholder: "e.g. Hyderabad",
        },
        Step {
            id: "name",
            prompt: "May I know your name?",
            kind: StepKind::Input,
            options: &[],
            field: Some(LeadField::Name),
            placeholder: "Your full name",
        },
        Step {
            id: "phone",
            prompt: "Finally, what's the best phone number to reach you on?",
            kind: StepKind::Input,
            options: &[],
            field: Some(LeadField::Phone),
            placeholder: "10-digit mobile number",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_starts_with_welcome_and_ends_with_phone() {
        let steps = default_steps();
        assert_eq!(steps[0].kind, StepKind::Welcome);
        assert_eq!(steps[1].id, "service");
        assert_eq!(steps[2].id, "business_type");
        assert_eq!(steps[4].id, "name");
        assert_eq!(steps.last().and_then(|s| s.field), Some(LeadField::Phone));
    }

    #[test]
    fn choice_steps_have_options_and_input_steps_do_not() {
        for step in default_steps() {
            match step.kind {
                StepKind::Choice => assert!(!step.options.is_empty(), "{} has no options", step.id),
                StepKind::Input => assert!(step.options.is_empty(), "{} has options", step.id),
                _ => {}
            }
        }
    }
}
