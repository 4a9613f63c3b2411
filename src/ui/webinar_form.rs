//! Webinar registration form
//!
//! Submission runs through `core::form::submit`, which validates the
//! required fields before anything is sent. While a submission is in
//! flight the button is disabled and shows a spinner; it is restored in
//! every terminal state.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::form::RequiredField;
use crate::core::{SiteSettings, WebinarForm};
use crate::ui::common::{FormField, SelectField, SubmitButton, TextAreaField};
use crate::ui::feedback::FeedbackBanner;
use crate::ui::menu::use_menu_context;
use crate::ui::submission::FormSubmitter;

/// Signals backing each input
#[derive(Clone, Copy)]
struct FormFields {
    school_name: RwSignal<String>,
    contact_person: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    attendees: RwSignal<String>,
    message: RwSignal<String>,
}

impl FormFields {
    fn new() -> Self {
        Self {
            school_name: RwSignal::new(String::new()),
            contact_person: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            attendees: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> WebinarForm {
        WebinarForm::new(
            self.school_name.get_untracked(),
            self.contact_person.get_untracked(),
            self.email.get_untracked(),
        )
        .with_phone(self.phone.get_untracked())
        .with_attendees(self.attendees.get_untracked())
        .with_message(self.message.get_untracked())
    }

    fn reset(&self) {
        for field in [
            self.school_name,
            self.contact_person,
            self.email,
            self.phone,
            self.attendees,
            self.message,
        ] {
            field.set(String::new());
        }
    }
}

#[component]
pub fn WebinarRegistrationForm() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let action = settings.form_endpoint.clone();

    let fields = FormFields::new();
    let submitter = FormSubmitter::new(use_menu_context());
    let busy = submitter.is_busy();
    let label = submitter.button_label::<WebinarForm>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submitter.start(fields.snapshot(), &settings.form_endpoint, move || fields.reset());
    };

    view! {
        <div class="form-container">
            <FeedbackBanner state=submitter.feedback />
            <form
                id="webinarForm"
                class="webinar-form"
                action=action
                method="POST"
                node_ref=submitter.form_ref
                on:submit=on_submit
                novalidate=true
            >
                <div class="form-row">
                    <FormField
                        label="School / Organization"
                        name=RequiredField::SchoolName.input_name()
                        required=true
                        placeholder="Riverside High School"
                        value=fields.school_name
                        disabled=busy
                    />
                    <FormField
                        label="Contact Person"
                        name=RequiredField::ContactPerson.input_name()
                        required=true
                        placeholder="Your full name"
                        value=fields.contact_person
                        disabled=busy
                    />
                </div>
                <div class="form-row">
                    <FormField
                        label="Email"
                        name=RequiredField::Email.input_name()
                        input_type="email"
                        required=true
                        placeholder="you@school.edu"
                        value=fields.email
                        disabled=busy
                    />
                    <FormField
                        label="Phone"
                        name="phone"
                        input_type="tel"
                        placeholder="Optional"
                        value=fields.phone
                        disabled=busy
                    />
                </div>
                <SelectField
                    label="Expected attendees"
                    name="attendees"
                    value=fields.attendees
                    options=vec![
                        ("", "Select a range"),
                        ("1-10", "1 - 10"),
                        ("11-50", "11 - 50"),
                        ("51-200", "51 - 200"),
                        ("200+", "More than 200"),
                    ]
                    disabled=busy
                />
                <TextAreaField
                    label="Questions for the webinar"
                    name="message"
                    placeholder="Anything you'd like us to cover?"
                    value=fields.message
                    disabled=busy
                />
                <SubmitButton loading=busy label=label />
            </form>
        </div>
    }
}
