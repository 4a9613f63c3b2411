//! Transient feedback message shown above a page form

use leptos::prelude::*;

use crate::core::{Feedback, FeedbackKind, FeedbackSlot, SubmissionPhase};
use crate::ui::icon::{Icon, icons};

/// Feedback state for one form
#[derive(Clone, Copy)]
pub struct FeedbackState {
    slot: RwSignal<FeedbackSlot>,
    phase: RwSignal<SubmissionPhase>,
}

impl FeedbackState {
    /// Feedback for the form whose submission runs through `phase`
    pub fn new(phase: RwSignal<SubmissionPhase>) -> Self {
        Self {
            slot: RwSignal::new(FeedbackSlot::new()),
            phase,
        }
    }

    /// Replace the current message and run its fade and removal timers.
    /// Removing the message returns a finished submission to `Idle`.
    pub fn show(&self, feedback: Feedback) {
        let mut id = 0;
        self.slot.update(|slot| id = slot.show(feedback));

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::{FEEDBACK_SCHEDULE, FeedbackStep};
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let Self { slot, phase } = *self;
            spawn_local(async move {
                for (delay, step) in FEEDBACK_SCHEDULE {
                    TimeoutFuture::new(delay).await;
                    let mut applied = false;
                    slot.maybe_update(|s| {
                        applied = s.apply(id, step);
                        applied
                    });
                    if applied && step == FeedbackStep::Dismiss {
                        phase.maybe_update(SubmissionPhase::settle);
                    }
                }
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = id;
        }
    }
}

/// Renders the message held by `state`, if any
#[component]
pub fn FeedbackBanner(state: FeedbackState) -> impl IntoView {
    let current = move || state.slot.with(|slot| slot.current().cloned());

    view! {
        {move || {
            current().map(|shown| {
                let (kind_class, icon) = match shown.feedback.kind {
                    FeedbackKind::Success => ("form-message success", icons::CHECK),
                    FeedbackKind::Error => ("form-message error", icons::ALERT_CIRCLE),
                };
                let style = if shown.fading {
                    "opacity: 0; transition: opacity 0.3s ease;"
                } else {
                    "opacity: 1; transition: opacity 0.3s ease;"
                };

                view! {
                    <div class=kind_class style=style role="status" aria-live="polite">
                        <Icon name=icon class="icon" />
                        <span>{shown.feedback.message}</span>
                    </div>
                }
            })
        }}
    }
}
