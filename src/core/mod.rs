//! Core interaction logic for the landing page
//!
//! Everything here is DOM-free so it can be unit tested natively; the `ui`
//! module applies the decisions to the page.

pub mod anchor;
pub mod config;
pub mod contact;
pub mod error;
pub mod form;
pub mod menu;
pub mod reveal;
pub mod scroll;
#[cfg(test)]
mod tests;

pub use anchor::{AnchorAction, fragment_target, resolve_anchor, scroll_target};
pub use config::{InteractionConfig, SiteSettings};
pub use contact::ContactForm;
pub use error::FormError;
pub use form::{
    FEEDBACK_SCHEDULE, Feedback, FeedbackKind, FeedbackSlot, FeedbackStep, FormSubmission,
    FormTransport, SubmissionPhase, TransportResponse, WebinarForm, submit,
};
pub use menu::{MenuState, MenuTarget};
pub use reveal::{RevealStyle, RevealTracker, card_hover_style, stagger_delay_ms};
pub use scroll::{ScrollSnapshot, ScrollThrottle, SectionBounds, active_section, is_link_active};
