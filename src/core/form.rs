//! Form submission flow
//!
//! Provides:
//! - `FormSubmission`, the validation and field set of one page form
//! - `WebinarForm`, the webinar registration (contact forms live in `contact`)
//! - `FormTransport` seam for the asynchronous POST
//! - `submit()` driving the Idle → Validating → Submitting → Succeeded | Failed flow
//! - `FeedbackSlot` holding the single transient feedback message and its
//!   fade/dismiss schedule

use std::future::Future;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::config::InteractionConfig;
use super::error::FormError;

/// Shown after the endpoint accepted a registration
pub const SUCCESS_MESSAGE: &str =
    "Thank you for registering! We'll email your webinar details shortly.";

/// How long a feedback message stays fully visible (ms)
pub const FEEDBACK_DISPLAY_MS: u32 = InteractionConfig::DEFAULT.feedback_display_ms;

/// Fade-out duration before the message is removed (ms)
pub const FEEDBACK_FADE_MS: u32 = InteractionConfig::DEFAULT.feedback_fade_ms;

/// Fields that must not be blank
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum RequiredField {
    #[display("school or organization name")]
    SchoolName,
    #[display("contact person")]
    ContactPerson,
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("message")]
    Message,
}

impl RequiredField {
    /// `name` attribute of the matching input
    pub fn input_name(&self) -> &'static str {
        match self {
            RequiredField::SchoolName => "school_name",
            RequiredField::ContactPerson => "contact_person",
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Message => "message",
        }
    }
}

/// A page form that can be validated and posted
pub trait FormSubmission {
    /// Label of the submit button while idle
    const SUBMIT_LABEL: &'static str;

    /// Required fields in form order
    const REQUIRED: &'static [RequiredField];

    /// Current value of a required field; empty for fields the form lacks
    fn required_value(&self, field: RequiredField) -> &str;

    /// Field set posted to the endpoint, keyed by input name
    fn field_set(&self) -> Vec<(&'static str, String)>;

    /// Text shown once the endpoint accepted the form
    fn success_message(&self) -> String;

    /// Check required fields in form order, then the email format
    fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Self::REQUIRED
            .iter()
            .copied()
            .find(|field| self.required_value(*field).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }

        if !is_valid_email(self.required_value(RequiredField::Email).trim()) {
            return Err(FormError::InvalidEmail);
        }

        Ok(())
    }
}

/// Values entered into the webinar form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebinarForm {
    pub school_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub attendees: String,
    pub message: String,
}

impl WebinarForm {
    pub fn new(
        school_name: impl Into<String>,
        contact_person: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            school_name: school_name.into(),
            contact_person: contact_person.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_attendees(mut self, attendees: impl Into<String>) -> Self {
        self.attendees = attendees.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl FormSubmission for WebinarForm {
    const SUBMIT_LABEL: &'static str = "Register for the Webinar";

    const REQUIRED: &'static [RequiredField] = &[
        RequiredField::SchoolName,
        RequiredField::ContactPerson,
        RequiredField::Email,
    ];

    fn required_value(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::SchoolName => &self.school_name,
            RequiredField::ContactPerson => &self.contact_person,
            RequiredField::Email => &self.email,
            RequiredField::Name | RequiredField::Message => "",
        }
    }

    fn field_set(&self) -> Vec<(&'static str, String)> {
        vec![
            (RequiredField::SchoolName.input_name(), self.school_name.trim().to_string()),
            (RequiredField::ContactPerson.input_name(), self.contact_person.trim().to_string()),
            (RequiredField::Email.input_name(), self.email.trim().to_string()),
            ("phone", self.phone.trim().to_string()),
            ("attendees", self.attendees.trim().to_string()),
            ("message", self.message.trim().to_string()),
        ]
    }

    fn success_message(&self) -> String {
        SUCCESS_MESSAGE.to_string()
    }
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, and a
/// dot in the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Endpoint a form posts to: its `action` attribute when present and
/// non-blank, otherwise `fallback`
pub fn resolve_endpoint(action_attribute: Option<&str>, fallback: &str) -> String {
    action_attribute
        .map(str::trim)
        .filter(|action| !action.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Raw answer from the form endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl TransportResponse {
    pub fn new(status: u16) -> Self {
        Self { status, body: None }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx status into an error
    pub fn into_result(self) -> Result<(), FormError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(FormError::Status(self.status))
        }
    }
}

/// Sends the form field set to the endpoint
pub trait FormTransport {
    fn post(
        &self,
        endpoint: &str,
        fields: &[(&'static str, String)],
    ) -> impl Future<Output = Result<TransportResponse, FormError>>;
}

#[derive(Deserialize)]
struct EndpointErrorBody {
    #[serde(default)]
    errors: Vec<EndpointError>,
}

#[derive(Deserialize)]
struct EndpointError {
    message: String,
}

/// Error messages reported by the endpoint in a JSON error body
pub fn endpoint_errors(body: &str) -> Vec<String> {
    serde_json::from_str::<EndpointErrorBody>(body)
        .map(|parsed| parsed.errors.into_iter().map(|e| e.message).collect())
        .unwrap_or_default()
}

/// Lifecycle of one submission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// Button is disabled and shows the loading indicator
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionPhase::Validating | SubmissionPhase::Submitting)
    }

    /// A new submission may start
    pub fn can_submit(&self) -> bool {
        !self.is_busy()
    }

    /// Button text for this phase; `idle` is the form's own label
    pub fn button_label(&self, idle: &'static str) -> &'static str {
        if self.is_busy() { "Submitting..." } else { idle }
    }

    /// Return a finished submission to `Idle`. Returns whether it changed.
    pub fn settle(&mut self) -> bool {
        match self {
            SubmissionPhase::Succeeded | SubmissionPhase::Failed => {
                *self = SubmissionPhase::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Run one submission.
///
/// `on_phase` is called on every transition so the caller can mirror the
/// phase into its button state. No request is made when validation fails.
pub async fn submit<T: FormTransport, F: FormSubmission>(
    transport: &T,
    endpoint: &str,
    form: &F,
    mut on_phase: impl FnMut(SubmissionPhase),
) -> Result<(), FormError> {
    on_phase(SubmissionPhase::Validating);
    if let Err(e) = form.validate() {
        on_phase(SubmissionPhase::Failed);
        return Err(e);
    }

    on_phase(SubmissionPhase::Submitting);
    let result = match transport.post(endpoint, &form.field_set()).await {
        Ok(response) => response.into_result(),
        Err(e) => Err(e),
    };

    on_phase(if result.is_ok() {
        SubmissionPhase::Succeeded
    } else {
        SubmissionPhase::Failed
    });
    result
}

/// Feedback message kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum FeedbackKind {
    #[display("success")]
    Success,
    #[display("error")]
    Error,
}

/// Message shown next to the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }

    /// Message for the outcome of submitting `form`
    pub fn for_outcome<F: FormSubmission>(form: &F, result: &Result<(), FormError>) -> Self {
        match result {
            Ok(()) => Self::success(form.success_message()),
            Err(e) => Self::error(e.user_message()),
        }
    }
}

/// Feedback currently on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShownFeedback {
    pub id: u64,
    pub feedback: Feedback,
    pub fading: bool,
}

/// Timer step of a shown message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackStep {
    Fade,
    Dismiss,
}

/// Timers started for every shown message. Each delay counts from the
/// previous step.
pub const FEEDBACK_SCHEDULE: [(u32, FeedbackStep); 2] = [
    (FEEDBACK_DISPLAY_MS, FeedbackStep::Fade),
    (FEEDBACK_FADE_MS, FeedbackStep::Dismiss),
];

/// Holds at most one visible feedback message.
///
/// Every message gets an id; timers carry that id so a timer belonging to
/// a replaced message never touches its successor.
#[derive(Clone, Debug, Default)]
pub struct FeedbackSlot {
    current: Option<ShownFeedback>,
    next_id: u64,
}

impl FeedbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is shown, returning the id of the new message
    pub fn show(&mut self, feedback: Feedback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(ShownFeedback {
            id,
            feedback,
            fading: false,
        });
        id
    }

    /// Start the fade-out of message `id`
    pub fn begin_fade(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(shown) if shown.id == id => {
                shown.fading = true;
                true
            }
            _ => false,
        }
    }

    /// Remove message `id` if it is still the one shown
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|shown| shown.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Run one scheduled step for message `id`
    pub fn apply(&mut self, id: u64, step: FeedbackStep) -> bool {
        match step {
            FeedbackStep::Fade => self.begin_fade(id),
            FeedbackStep::Dismiss => self.dismiss(id),
        }
    }

    pub fn current(&self) -> Option<&ShownFeedback> {
        self.current.as_ref()
    }
}
