//! Contact form in the "Talk to us" section

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::form::RequiredField;
use crate::core::{ContactForm, SiteSettings};
use crate::ui::common::{FormField, SubmitButton, TextAreaField};
use crate::ui::feedback::FeedbackBanner;
use crate::ui::menu::use_menu_context;
use crate::ui::submission::FormSubmitter;

#[derive(Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    message: RwSignal<String>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> ContactForm {
        ContactForm::new(
            self.name.get_untracked(),
            self.email.get_untracked(),
            self.message.get_untracked(),
        )
    }

    fn reset(&self) {
        for field in [self.name, self.email, self.message] {
            field.set(String::new());
        }
    }
}

#[component]
pub fn ContactMessageForm() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let action = settings.form_endpoint.clone();

    let fields = ContactFields::new();
    let submitter = FormSubmitter::new(use_menu_context());
    let busy = submitter.is_busy();
    let label = submitter.button_label::<ContactForm>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submitter.start(fields.snapshot(), &settings.form_endpoint, move || fields.reset());
    };

    view! {
        <div class="form-container contact-form-container">
            <FeedbackBanner state=submitter.feedback />
            <form
                id="contactForm"
                class="contact-form"
                action=action
                method="POST"
                node_ref=submitter.form_ref
                on:submit=on_submit
                novalidate=true
            >
                <FormField
                    label="Your name"
                    name=RequiredField::Name.input_name()
                    id="contact_name"
                    required=true
                    value=fields.name
                    disabled=busy
                />
                <FormField
                    label="Email"
                    name=RequiredField::Email.input_name()
                    id="contact_email"
                    input_type="email"
                    required=true
                    placeholder="you@school.edu"
                    value=fields.email
                    disabled=busy
                />
                <TextAreaField
                    label="Message"
                    name=RequiredField::Message.input_name()
                    id="contact_message"
                    required=true
                    placeholder="How can we help?"
                    value=fields.message
                    disabled=busy
                />
                <SubmitButton loading=busy label=label />
            </form>
        </div>
    }
}
