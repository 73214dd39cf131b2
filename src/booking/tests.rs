//! Tests for the consultation wizard

use std::cell::RefCell;

use chrono::NaiveDate;

use super::*;

#[derive(Default)]
struct RecordingNotifier {
    sent: RefCell<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str) {
        self.sent
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn result_for(wizard: &Wizard) -> SubmissionResult {
    SubmissionResult {
        email: wizard.form().email.clone(),
        service_count: wizard.form().selected_services.len(),
    }
}

/// A wizard sitting on the last step with contact and schedule filled in.
fn wizard_at_services_step() -> Wizard {
    let mut wizard = Wizard::new();
    wizard.set_name("Alice".to_string());
    wizard.set_email("alice@x.com".to_string());
    assert!(wizard.next());
    wizard.set_preferred_date(date(2025, 1, 10));
    wizard.set_preferred_time(Some(TimeSlot::NineAm));
    assert!(wizard.next());
    wizard
}

#[test]
fn test_new_wizard_starts_idle_on_personal_info() {
    let wizard = Wizard::new();
    assert_eq!(wizard.step(), WizardStep::PersonalInfo);
    assert_eq!(wizard.step().number(), 1);
    assert_eq!(wizard.submission(), SubmissionState::Idle);
    assert_eq!(wizard.form(), &BookingForm::default());
}

#[test]
fn test_next_blocked_without_name_or_email() {
    let cases = [("", ""), ("Alice", ""), ("", "alice@x.com"), ("  ", "alice@x.com")];
    for (name, email) in cases {
        let mut wizard = Wizard::new();
        wizard.set_name(name.to_string());
        wizard.set_email(email.to_string());
        assert!(!wizard.next(), "advanced with name={name:?} email={email:?}");
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
    }
}

#[test]
fn test_next_advances_one_step_per_call() {
    let mut wizard = Wizard::new();
    wizard.set_name("Alice".to_string());
    wizard.set_email("alice@x.com".to_string());

    assert!(wizard.next());
    assert_eq!(wizard.step(), WizardStep::Schedule);

    // Schedule is still empty, so the second call must not skip ahead.
    assert!(!wizard.next());
    assert_eq!(wizard.step(), WizardStep::Schedule);
}

#[test]
fn test_schedule_requires_both_date_and_time() {
    let mut wizard = Wizard::new();
    wizard.set_name("Alice".to_string());
    wizard.set_email("alice@x.com".to_string());
    wizard.next();

    wizard.set_preferred_date(date(2025, 1, 10));
    assert!(!wizard.next());
    assert_eq!(wizard.missing_fields(), vec![MissingField::PreferredTime]);

    wizard.set_preferred_date(None);
    wizard.set_preferred_time(Some(TimeSlot::TwoPm));
    assert!(!wizard.next());
    assert_eq!(wizard.missing_fields(), vec![MissingField::PreferredDate]);

    wizard.set_preferred_date(date(2025, 1, 10));
    assert!(wizard.next());
    assert_eq!(wizard.step(), WizardStep::ServicesAndDetails);
}

#[test]
fn test_next_is_noop_on_last_step() {
    let mut wizard = wizard_at_services_step();
    wizard.toggle_service(ServiceKind::WebDevelopment);
    assert!(!wizard.next());
    assert_eq!(wizard.step(), WizardStep::ServicesAndDetails);
}

#[test]
fn test_previous_never_validates() {
    let mut wizard = wizard_at_services_step();
    wizard.set_preferred_time(None);

    assert!(wizard.previous());
    assert_eq!(wizard.step(), WizardStep::Schedule);
    assert!(wizard.previous());
    assert_eq!(wizard.step(), WizardStep::PersonalInfo);
    assert!(!wizard.previous());
    assert_eq!(wizard.step(), WizardStep::PersonalInfo);
}

#[test]
fn test_previous_keeps_entered_values() {
    let mut wizard = wizard_at_services_step();
    wizard.previous();
    assert_eq!(wizard.form().preferred_time, Some(TimeSlot::NineAm));
    assert_eq!(wizard.form().name, "Alice");
}

#[test]
fn test_submit_blocked_without_services() {
    let mut wizard = wizard_at_services_step();
    assert!(!wizard.can_submit());
    assert!(!wizard.begin_submit());
    assert_eq!(wizard.submission(), SubmissionState::Idle);
    assert_eq!(wizard.missing_fields(), vec![MissingField::Services]);
}

#[test]
fn test_submit_blocked_before_last_step() {
    let mut wizard = Wizard::new();
    wizard.toggle_service(ServiceKind::ApiIntegration);
    assert!(!wizard.begin_submit());
    assert_eq!(wizard.submission(), SubmissionState::Idle);
}

#[test]
fn test_submission_emits_exactly_one_notification() {
    let mut wizard = wizard_at_services_step();
    wizard.toggle_service(ServiceKind::WebDevelopment);
    assert!(wizard.begin_submit());
    assert_eq!(wizard.submission(), SubmissionState::Submitting);

    let notifier = RecordingNotifier::default();
    let result = result_for(&wizard);
    assert!(complete_and_announce(&mut wizard, &result, &notifier));
    assert!(!complete_and_announce(&mut wizard, &result, &notifier));

    assert_eq!(wizard.submission(), SubmissionState::Submitted);
    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "Consultation Booked!");
    assert_eq!(sent[0].1, "We'll get back to you within 24 hours.");
}

#[test]
fn test_completion_without_submit_is_ignored() {
    let mut wizard = wizard_at_services_step();
    assert_eq!(wizard.complete_submission(), None);
    assert_eq!(wizard.submission(), SubmissionState::Idle);
}

#[test]
fn test_form_is_frozen_while_submitting() {
    let mut wizard = wizard_at_services_step();
    wizard.toggle_service(ServiceKind::DataAnalysis);
    wizard.begin_submit();

    wizard.set_name("Mallory".to_string());
    wizard.toggle_service(ServiceKind::DataAnalysis);
    assert!(!wizard.previous());
    assert!(!wizard.begin_submit());

    assert_eq!(wizard.form().name, "Alice");
    assert!(wizard.form().is_selected(ServiceKind::DataAnalysis));
    assert_eq!(wizard.step(), WizardStep::ServicesAndDetails);
}

#[test]
fn test_reset_only_after_submitted() {
    let mut wizard = wizard_at_services_step();
    wizard.toggle_service(ServiceKind::WebDevelopment);
    assert!(!wizard.reset());

    wizard.begin_submit();
    assert!(!wizard.reset());
    assert_eq!(wizard.submission(), SubmissionState::Submitting);
}

#[test]
fn test_reset_restores_empty_wizard() {
    let mut wizard = wizard_at_services_step();
    wizard.toggle_service(ServiceKind::WebDevelopment);
    wizard.set_message("Need a storefront".to_string());
    wizard.begin_submit();
    wizard.complete_submission();

    assert!(wizard.reset());
    assert_eq!(wizard.step(), WizardStep::PersonalInfo);
    assert_eq!(wizard.submission(), SubmissionState::Idle);
    assert_eq!(wizard.form(), &BookingForm::default());
}

#[test]
fn test_alice_books_web_development() {
    let mut wizard = Wizard::new();
    wizard.set_name("Alice".to_string());
    wizard.set_email("alice@x.com".to_string());
    wizard.next();
    assert_eq!(wizard.step().number(), 2);

    wizard.set_preferred_date(form::parse_date_input("2025-01-10"));
    wizard.set_preferred_time("9:00 AM - 10:00 AM".parse().ok());
    wizard.next();
    assert_eq!(wizard.step().number(), 3);

    wizard.toggle_service("Web Development".parse().unwrap());
    assert!(wizard.begin_submit());

    let notifier = RecordingNotifier::default();
    let result = result_for(&wizard);
    assert_eq!(result.service_count, 1);
    complete_and_announce(&mut wizard, &result, &notifier);
    assert_eq!(wizard.submission(), SubmissionState::Submitted);
}

#[test]
fn test_step_titles() {
    let titles: Vec<&str> = WizardStep::all().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["Personal Info", "Schedule", "Services & Details"]);
}
