//! Step state machine for the consultation wizard.
//!
//! Every transition that is not currently allowed is a silent no-op: the
//! method returns `false` and the wizard is left untouched. The view uses the
//! same checks to disable its buttons.

use chrono::NaiveDate;

use super::form::{BookingForm, ServiceKind, TimeSlot};
use super::submission::Confirmation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    PersonalInfo,
    Schedule,
    ServicesAndDetails,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::PersonalInfo,
            WizardStep::Schedule,
            WizardStep::ServicesAndDetails,
        ]
    }

    /// 1-based position shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::PersonalInfo => 1,
            WizardStep::Schedule => 2,
            WizardStep::ServicesAndDetails => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Schedule => "Schedule",
            WizardStep::ServicesAndDetails => "Services & Details",
        }
    }

    fn following(&self) -> Option<WizardStep> {
        match self {
            WizardStep::PersonalInfo => Some(WizardStep::Schedule),
            WizardStep::Schedule => Some(WizardStep::ServicesAndDetails),
            WizardStep::ServicesAndDetails => None,
        }
    }

    fn preceding(&self) -> Option<WizardStep> {
        match self {
            WizardStep::PersonalInfo => None,
            WizardStep::Schedule => Some(WizardStep::PersonalInfo),
            WizardStep::ServicesAndDetails => Some(WizardStep::Schedule),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Required input still absent on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Email,
    PreferredDate,
    PreferredTime,
    Services,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            MissingField::Name => "full name",
            MissingField::Email => "email address",
            MissingField::PreferredDate => "preferred date",
            MissingField::PreferredTime => "preferred time",
            MissingField::Services => "at least one service",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    form: BookingForm,
    submission: SubmissionState,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::PersonalInfo,
            form: BookingForm::default(),
            submission: SubmissionState::Idle,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_editable(&self) -> bool {
        self.submission == SubmissionState::Idle
    }

    pub fn missing_fields(&self) -> Vec<MissingField> {
        let form = &self.form;
        let mut missing = Vec::new();
        match self.step {
            WizardStep::PersonalInfo => {
                if form.name.trim().is_empty() {
                    missing.push(MissingField::Name);
                }
                if form.email.trim().is_empty() {
                    missing.push(MissingField::Email);
                }
            }
            WizardStep::Schedule => {
                if form.preferred_date.is_none() {
                    missing.push(MissingField::PreferredDate);
                }
                if form.preferred_time.is_none() {
                    missing.push(MissingField::PreferredTime);
                }
            }
            WizardStep::ServicesAndDetails => {
                if !form.has_services() {
                    missing.push(MissingField::Services);
                }
            }
        }
        missing
    }

    pub fn can_advance(&self) -> bool {
        self.is_editable()
            && match self.step {
                WizardStep::PersonalInfo => self.form.has_contact(),
                WizardStep::Schedule => self.form.has_schedule(),
                WizardStep::ServicesAndDetails => false,
            }
    }

    pub fn can_go_back(&self) -> bool {
        self.is_editable() && self.step.preceding().is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.is_editable()
            && self.step == WizardStep::ServicesAndDetails
            && self.form.has_services()
    }

    /// Moves forward one step when the current step is complete.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.following() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Moves back one step. Never validates.
    pub fn previous(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        match self.step.preceding() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// `Idle -> Submitting`, allowed on the last step with a service picked.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.submission = SubmissionState::Submitting;
        true
    }

    /// `Submitting -> Submitted`. Yields the confirmation to announce only on
    /// that transition, so a stray second completion announces nothing.
    pub fn complete_submission(&mut self) -> Option<Confirmation> {
        if self.submission != SubmissionState::Submitting {
            return None;
        }
        self.submission = SubmissionState::Submitted;
        Some(Confirmation::booked())
    }

    /// Starts over from an empty form. Only available once submitted.
    pub fn reset(&mut self) -> bool {
        if self.submission != SubmissionState::Submitted {
            return false;
        }
        *self = Wizard::new();
        true
    }

    pub fn set_name(&mut self, name: String) {
        if self.is_editable() {
            self.form.name = name;
        }
    }

    pub fn set_email(&mut self, email: String) {
        if self.is_editable() {
            self.form.email = email;
        }
    }

    pub fn set_preferred_date(&mut self, date: Option<NaiveDate>) {
        if self.is_editable() {
            self.form.preferred_date = date;
        }
    }

    pub fn set_preferred_time(&mut self, slot: Option<TimeSlot>) {
        if self.is_editable() {
            self.form.preferred_time = slot;
        }
    }

    pub fn toggle_service(&mut self, service: ServiceKind) {
        if self.is_editable() {
            self.form.toggle_service(service);
        }
    }

    pub fn set_message(&mut self, message: String) {
        if self.is_editable() {
            self.form.message = message;
        }
    }
}
