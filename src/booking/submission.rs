use gloo_timers::callback::Timeout;
use log::{debug, info};

use super::form::BookingForm;
use super::wizard::Wizard;

/// Sink for user-facing notifications. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub body: &'static str,
}

impl Confirmation {
    pub fn booked() -> Self {
        Self {
            title: "Consultation Booked!",
            body: "We'll get back to you within 24 hours.",
        }
    }
}

/// Outcome of a simulated submission. There is no backend to reject the
/// request, so every submission is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub email: String,
    pub service_count: usize,
}

/// Pending simulated request. Dropping it cancels the completion, so a
/// component that owns one never hears back after it is destroyed.
pub struct SubmissionTimer {
    timeout: Option<Timeout>,
}

impl SubmissionTimer {
    pub fn start<F>(form: &BookingForm, delay_ms: u32, on_complete: F) -> Self
    where
        F: FnOnce(SubmissionResult) + 'static,
    {
        let result = SubmissionResult {
            email: form.email.trim().to_string(),
            service_count: form.selected_services.len(),
        };
        debug!("Simulating consultation request, completes in {}ms", delay_ms);
        let timeout = Timeout::new(delay_ms, move || on_complete(result));
        Self { timeout: Some(timeout) }
    }

    /// Cancels the pending completion explicitly.
    pub fn cancel(mut self) {
        if let Some(timeout) = self.timeout.take() {
            timeout.cancel();
            debug!("Consultation request cancelled");
        }
    }
}

/// Finishes a submission that is in flight and raises the confirmation.
/// Returns whether a notification was sent.
pub fn complete_and_announce(
    wizard: &mut Wizard,
    result: &SubmissionResult,
    notifier: &dyn Notifier,
) -> bool {
    match wizard.complete_submission() {
        Some(confirmation) => {
            info!(
                "Consultation request for {} accepted ({} services)",
                result.email, result.service_count
            );
            notifier.notify(confirmation.title, confirmation.body);
            true
        }
        None => false,
    }
}
