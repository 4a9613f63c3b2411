//! Submit handling shared by the page forms

use leptos::html;
use leptos::prelude::*;

use crate::core::{FormSubmission, SubmissionPhase};
use crate::ui::feedback::FeedbackState;
use crate::ui::menu::MenuController;

/// Everything a page form needs to run a submission
#[derive(Clone, Copy)]
pub struct FormSubmitter {
    pub form_ref: NodeRef<html::Form>,
    pub phase: RwSignal<SubmissionPhase>,
    pub feedback: FeedbackState,
    pub menu: MenuController,
}

impl FormSubmitter {
    pub fn new(menu: MenuController) -> Self {
        let phase = RwSignal::new(SubmissionPhase::Idle);
        Self {
            form_ref: NodeRef::new(),
            phase,
            feedback: FeedbackState::new(phase),
            menu,
        }
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.get().is_busy())
    }

    /// Button text for forms of type `F`
    pub fn button_label<F: FormSubmission + 'static>(&self) -> Signal<&'static str> {
        let phase = self.phase;
        Signal::derive(move || phase.get().button_label(F::SUBMIT_LABEL))
    }

    /// Start a submission unless one is already running.
    ///
    /// `fallback_endpoint` is used when the rendered form carries no
    /// `action`. On success `on_success` clears the bound fields, then the
    /// form element is reset and scrolled into view and the menu closes.
    pub fn start<F>(&self, form: F, fallback_endpoint: &str, on_success: impl FnOnce() + 'static)
    where
        F: FormSubmission + 'static,
    {
        if !self.phase.get_untracked().can_submit() {
            return;
        }

        #[cfg(not(feature = "ssr"))]
        {
            use leptos::logging::{error, log};
            use leptos::task::spawn_local;

            use crate::core::form::resolve_endpoint;
            use crate::core::{Feedback, submit};
            use crate::ui::transport::FetchTransport;

            let Self {
                form_ref,
                phase,
                feedback,
                menu,
            } = *self;
            let action = form_ref
                .get_untracked()
                .and_then(|el| el.get_attribute("action"));
            let endpoint = resolve_endpoint(action.as_deref(), fallback_endpoint);

            spawn_local(async move {
                let result = submit(&FetchTransport, &endpoint, &form, |p| phase.set(p)).await;

                match &result {
                    Ok(()) => {
                        log!("Form accepted by {}", endpoint);
                        on_success();
                        if let Some(el) = form_ref.get_untracked() {
                            el.reset();
                            scroll_into_view(&el);
                        }
                        menu.close();
                    }
                    Err(e) if e.is_validation() => {}
                    Err(e) => error!("Form submission to {} failed: {}", endpoint, e),
                }

                feedback.show(Feedback::for_outcome(&form, &result));
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (form, fallback_endpoint, on_success);
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn scroll_into_view(form: &web_sys::HtmlFormElement) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    form.scroll_into_view_with_scroll_into_view_options(&options);
}
