//! Contact form state machine.
//!
//! Submission is a simulation: the server sleeps for [`SUBMIT_DELAY`], logs
//! the payload and discards it. Nothing is stored or delivered anywhere.
//! If this ever grows a real backend it needs an explicit timeout and a
//! failure path; the current stub has neither because it cannot fail.

use std::time::Duration;

use serde::Deserialize;
use tokio::time::sleep;

/// Fixed duration of the simulated delivery.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// The four free-text fields collected by the contact section.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    status: FormStatus,
}

impl ContactForm {
    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields,
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Move to `Submitting`. Returns `false` without any state change when a
    /// submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.status == FormStatus::Submitting {
            return false;
        }
        self.status = FormStatus::Submitting;
        true
    }

    fn complete(&mut self) {
        self.status = FormStatus::Success;
        self.fields = FormFields::default();
    }

    /// Drive the full `Idle -> Submitting -> Success` cycle around the fixed
    /// delay. On success all fields are cleared. Returns `false` when the
    /// form was already submitting.
    pub async fn submit(&mut self) -> bool {
        if !self.begin() {
            return false;
        }
        sleep(SUBMIT_DELAY).await;
        self.complete();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Enjoyed the sharding article.".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn submit_transitions_to_success_and_clears_fields() {
        let mut form = ContactForm::with_fields(filled());
        assert_eq!(form.status(), FormStatus::Idle);

        let started = tokio::time::Instant::now();
        assert!(form.submit().await);

        assert_eq!(form.status(), FormStatus::Success);
        let cleared = form.fields();
        assert!(cleared.name.is_empty());
        assert!(cleared.email.is_empty());
        assert!(cleared.subject.is_empty());
        assert!(cleared.message.is_empty());
        assert_eq!(started.elapsed(), SUBMIT_DELAY);
    }

    #[test]
    fn begin_is_rejected_while_submitting() {
        let mut form = ContactForm::with_fields(filled());
        assert!(form.begin());
        assert_eq!(form.status(), FormStatus::Submitting);

        assert!(!form.begin());
        assert_eq!(form.status(), FormStatus::Submitting);
        assert_eq!(form.fields().name, "Ada");
    }

    #[tokio::test(start_paused = true)]
    async fn resubmission_after_success_is_allowed() {
        let mut form = ContactForm::with_fields(filled());
        assert!(form.submit().await);
        assert!(form.submit().await);
        assert_eq!(form.status(), FormStatus::Success);
    }
}
