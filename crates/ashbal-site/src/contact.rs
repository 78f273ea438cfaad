//! Simulated contact form submission
//!
//! A valid submission spawns a task that waits `submit_delay`, reports
//! success while clearing the fields, then returns to idle after
//! `success_display`. The task is owned by a [`SubmissionHandle`]; dropping
//! or resetting the form cancels it, so no state change happens afterwards.

use crate::error::{SiteError, SiteResult};
use ashbal_common::Direction;
use ashbal_config::ContactConfig;
use ashbal_i18n::schema::ContactText;
use ashbal_rtl::first_strong_direction;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

/// Where the form is in its submission cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Nothing submitted, or the success message has expired
    #[default]
    Idle,
    /// Waiting for the simulated send to finish
    Submitting,
    /// Sent; the fields have been cleared
    Success,
    /// Sending failed
    Error,
}

impl SubmissionStatus {
    /// Localized message shown under the form, if any
    pub fn message(self, text: &ContactText) -> Option<&str> {
        match self {
            Self::Success => Some(&text.success),
            Self::Error => Some(&text.error),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// Values typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    /// Sender name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Free text, in any script
    pub message: String,
}

impl ContactFields {
    /// Check the fields the markup marks as required.
    ///
    /// # Errors
    ///
    /// [`SiteError::Validation`] naming the first offending field.
    pub fn validate(&self) -> SiteResult<()> {
        if self.name.trim().is_empty() {
            return Err(SiteError::validation("name", "must not be empty"));
        }
        if self.email.trim().is_empty() {
            return Err(SiteError::validation("email", "must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(SiteError::validation("email", "must contain '@'"));
        }
        if self.message.trim().is_empty() {
            return Err(SiteError::validation("message", "must not be empty"));
        }
        Ok(())
    }

    /// `dir` for the message box, taken from the first strong character of
    /// what was typed. Empty or neutral text keeps the page direction.
    pub fn message_direction(&self, page: Direction) -> Direction {
        first_strong_direction(&self.message).unwrap_or(page)
    }
}

/// Delays of the simulated submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTimings {
    /// Time between submitting and success
    pub submit_delay: Duration,
    /// How long the success message stays before returning to idle
    pub success_display: Duration,
}

impl Default for ContactTimings {
    fn default() -> Self {
        Self::from(&ContactConfig::default())
    }
}

impl From<&ContactConfig> for ContactTimings {
    fn from(config: &ContactConfig) -> Self {
        Self {
            submit_delay: config.submit_delay(),
            success_display: config.success_display(),
        }
    }
}

/// An in-flight submission. Dropping the handle cancels it.
#[derive(Debug)]
pub struct SubmissionHandle {
    id: Uuid,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl SubmissionHandle {
    /// Identifier logged with every state change of this submission
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether the task has run to completion or been cancelled
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the submission; no further status change will be sent
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for SubmissionHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Contact form state
#[derive(Debug)]
pub struct ContactForm {
    fields: Arc<Mutex<ContactFields>>,
    status: Arc<watch::Sender<SubmissionStatus>>,
    timings: ContactTimings,
    in_flight: Option<SubmissionHandle>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ContactTimings::default())
    }
}

impl ContactForm {
    /// Empty idle form using `timings` for its submissions
    pub fn new(timings: ContactTimings) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            fields: Arc::new(Mutex::new(ContactFields::default())),
            status: Arc::new(status),
            timings,
            in_flight: None,
        }
    }

    /// Snapshot of the typed values
    pub fn fields(&self) -> ContactFields {
        self.fields.lock().clone()
    }

    /// Replace the name field
    pub fn set_name(&self, value: impl Into<String>) {
        self.fields.lock().name = value.into();
    }

    /// Replace the email field
    pub fn set_email(&self, value: impl Into<String>) {
        self.fields.lock().email = value.into();
    }

    /// Replace the message field
    pub fn set_message(&self, value: impl Into<String>) {
        self.fields.lock().message = value.into();
    }

    /// Current submission status
    pub fn status(&self) -> SubmissionStatus {
        *self.status.borrow()
    }

    /// Delays applied to the next submission
    pub fn timings(&self) -> ContactTimings {
        self.timings
    }

    /// Change the delays. A submission already in flight keeps its own.
    pub fn set_timings(&mut self, timings: ContactTimings) {
        self.timings = timings;
    }

    /// Receive every status change
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// The submission currently running, if any
    pub fn in_flight(&self) -> Option<&SubmissionHandle> {
        self.in_flight.as_ref()
    }

    /// Validate and start a simulated submission.
    ///
    /// Must be called inside a tokio runtime. A submission already in
    /// flight is cancelled and replaced.
    ///
    /// # Errors
    ///
    /// [`SiteError::Validation`] when a field is missing or the email has no
    /// `@`; the status is left untouched.
    pub fn submit(&mut self) -> SiteResult<Uuid> {
        self.fields.lock().validate()?;

        if let Some(previous) = self.in_flight.take() {
            debug!(submission = %previous.id(), "Replacing in-flight submission");
        }

        let id = Uuid::new_v4();
        let token = CancellationToken::new();
        self.status.send_replace(SubmissionStatus::Submitting);
        info!(submission = %id, "Contact form submitted");

        let task = tokio::spawn(run_submission(
            id,
            token.clone(),
            self.timings,
            Arc::clone(&self.fields),
            Arc::clone(&self.status),
        ));
        self.in_flight = Some(SubmissionHandle { id, token, task });
        Ok(id)
    }

    /// Cancel any running submission, clear the fields and return to idle
    pub fn reset(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            debug!(submission = %handle.id(), "Cancelling submission on reset");
        }
        *self.fields.lock() = ContactFields::default();
        self.status.send_replace(SubmissionStatus::Idle);
    }
}

async fn run_submission(
    id: Uuid,
    token: CancellationToken,
    timings: ContactTimings,
    fields: Arc<Mutex<ContactFields>>,
    status: Arc<watch::Sender<SubmissionStatus>>,
) {
    tokio::select! {
        () = token.cancelled() => {
            debug!(submission = %id, "Submission cancelled before completion");
            return;
        }
        () = tokio::time::sleep(timings.submit_delay) => {}
    }

    {
        // Observers see the cleared fields together with the success state
        let mut fields = fields.lock();
        // A reset may have landed between the timer firing and this lock
        if token.is_cancelled() {
            debug!(submission = %id, "Submission cancelled before completion");
            return;
        }
        *fields = ContactFields::default();
        status.send_replace(SubmissionStatus::Success);
    }
    info!(submission = %id, "Contact form submission succeeded");

    tokio::select! {
        () = token.cancelled() => {
            debug!(submission = %id, "Submission cancelled while showing success");
        }
        () = tokio::time::sleep(timings.success_display) => {
            status.send_replace(SubmissionStatus::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let form = ContactForm::default();
        form.set_name("Amina");
        form.set_email("amina@example.com");
        form.set_message("When are the kids' classes?");
        form
    }

    #[test]
    fn test_validation() {
        let mut fields = ContactFields {
            name: "A".to_string(),
            email: "a@b".to_string(),
            message: "hi".to_string(),
        };
        assert!(fields.validate().is_ok());

        fields.name = "   ".to_string();
        assert!(matches!(fields.validate(), Err(SiteError::Validation { field: "name", .. })));

        fields.name = "A".to_string();
        fields.email = "ab".to_string();
        assert!(matches!(fields.validate(), Err(SiteError::Validation { field: "email", .. })));
    }

    #[test]
    fn test_message_direction_follows_typed_text() {
        let mut fields = ContactFields::default();
        assert_eq!(fields.message_direction(Direction::Rtl), Direction::Rtl);

        fields.message = "مرحبا, I would like to join".to_string();
        assert_eq!(fields.message_direction(Direction::Ltr), Direction::Rtl);

        fields.message = "123 Hello مرحبا".to_string();
        assert_eq!(fields.message_direction(Direction::Rtl), Direction::Ltr);
    }

    #[test]
    fn test_status_messages() {
        let text = ContactText {
            title: String::new(),
            name: String::new(),
            email: String::new(),
            message: String::new(),
            submit: String::new(),
            follow_us: String::new(),
            success: "ok".to_string(),
            error: "ko".to_string(),
            placeholders: ashbal_i18n::schema::PlaceholderText {
                name: String::new(),
                email: String::new(),
                message: String::new(),
            },
        };
        assert_eq!(SubmissionStatus::Success.message(&text), Some("ok"));
        assert_eq!(SubmissionStatus::Error.message(&text), Some("ko"));
        assert_eq!(SubmissionStatus::Submitting.message(&text), None);
    }

    #[tokio::test]
    async fn test_invalid_submit_leaves_status() {
        let mut form = ContactForm::default();
        form.set_name("Amina");
        assert!(form.submit().is_err());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.in_flight().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_timeline() {
        let mut form = filled_form();
        form.submit().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(form.fields().name, "Amina");

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.fields(), ContactFields::default());

        tokio::time::sleep(Duration::from_millis(2998)).await;
        assert_eq!(form.status(), SubmissionStatus::Success);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_cancelled_after_delay_sends_nothing() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let form = filled_form();
        let token = CancellationToken::new();
        let mut rx = form.subscribe();
        rx.borrow_and_update();

        // The delay elapses while the fields are held; cancel before releasing them
        let guard = form.fields.lock();
        let task = runtime.spawn(run_submission(
            Uuid::new_v4(),
            token.clone(),
            ContactTimings {
                submit_delay: Duration::from_millis(1),
                success_display: Duration::from_millis(1),
            },
            Arc::clone(&form.fields),
            Arc::clone(&form.status),
        ));
        std::thread::sleep(Duration::from_millis(50));
        token.cancel();
        drop(guard);

        runtime.block_on(task).unwrap();
        assert!(!rx.has_changed().unwrap());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "Amina");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_submission() {
        let mut form = filled_form();
        let mut rx = form.subscribe();
        form.submit().unwrap();
        rx.borrow_and_update();
        drop(form);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(!rx.has_changed().unwrap_or(false));
        assert_eq!(*rx.borrow(), SubmissionStatus::Submitting);
    }
}
