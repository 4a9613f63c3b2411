#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use crate::core::error::{GENERIC_ERROR_MESSAGE, MISSING_FIELDS_MESSAGE};
    use crate::core::form::SUCCESS_MESSAGE;
    use crate::core::{
        AnchorAction, ContactForm, FEEDBACK_SCHEDULE, Feedback, FeedbackKind, FeedbackSlot,
        FeedbackStep, FormError, FormSubmission, FormTransport, MenuState, ScrollSnapshot,
        SectionBounds, SubmissionPhase, TransportResponse, WebinarForm, resolve_anchor, submit,
    };

    /// Transport double recording every request
    struct MockTransport {
        reply: Result<TransportResponse, FormError>,
        calls: Cell<usize>,
        last_fields: RefCell<Vec<(&'static str, String)>>,
    }

    impl MockTransport {
        fn replying(reply: Result<TransportResponse, FormError>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                last_fields: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for MockTransport {
        async fn post(
            &self,
            _endpoint: &str,
            fields: &[(&'static str, String)],
        ) -> Result<TransportResponse, FormError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_fields.borrow_mut() = fields.to_vec();
            self.reply.clone()
        }
    }

    fn valid_form() -> WebinarForm {
        WebinarForm::new("Riverside High", "Dana Kim", "dana@riverside.edu")
            .with_attendees("40")
            .with_message("Interested in the spring session")
    }

    fn run<F: FormSubmission>(
        transport: &MockTransport,
        form: &F,
    ) -> (Result<(), FormError>, Vec<SubmissionPhase>) {
        let mut phases = Vec::new();
        let result = block_on(submit(
            transport,
            "https://forms.example.com/f/test",
            form,
            |phase| phases.push(phase),
        ));
        (result, phases)
    }

    #[test]
    fn test_successful_submission() {
        let transport = MockTransport::replying(Ok(TransportResponse::new(200)));
        let (result, phases) = run(&transport, &valid_form());

        assert!(result.is_ok());
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(
            phases,
            vec![
                SubmissionPhase::Validating,
                SubmissionPhase::Submitting,
                SubmissionPhase::Succeeded
            ]
        );

        let fields = transport.last_fields.borrow();
        assert!(fields.contains(&("contact_person", "Dana Kim".to_string())));

        let feedback = Feedback::for_outcome(&valid_form(), &result);
        assert_eq!(feedback.kind, FeedbackKind::Success);
        assert_eq!(feedback.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_empty_contact_person_makes_no_request() {
        let transport = MockTransport::replying(Ok(TransportResponse::new(200)));
        let form = WebinarForm::new("Riverside High", "", "dana@riverside.edu");
        let (result, phases) = run(&transport, &form);

        assert!(result.as_ref().is_err_and(FormError::is_validation));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(
            phases,
            vec![SubmissionPhase::Validating, SubmissionPhase::Failed]
        );
        assert_eq!(Feedback::for_outcome(&form, &result).message, MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_non_success_status_restores_button() {
        let transport = MockTransport::replying(Ok(
            TransportResponse::new(500).with_body(r#"{"errors":[{"message":"down"}]}"#)
        ));
        let (result, phases) = run(&transport, &valid_form());

        assert_eq!(result, Err(FormError::Status(500)));
        assert_eq!(transport.calls.get(), 1);

        let last = *phases.last().unwrap();
        assert_eq!(last, SubmissionPhase::Failed);
        assert!(!last.is_busy());
        assert_eq!(
            last.button_label(WebinarForm::SUBMIT_LABEL),
            SubmissionPhase::Idle.button_label(WebinarForm::SUBMIT_LABEL)
        );

        let feedback = Feedback::for_outcome(&valid_form(), &result);
        assert_eq!(feedback.kind, FeedbackKind::Error);
        assert_eq!(feedback.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_network_failure_is_generic() {
        let transport =
            MockTransport::replying(Err(FormError::Transport("failed to fetch".to_string())));
        let (result, phases) = run(&transport, &valid_form());

        assert!(matches!(result, Err(FormError::Transport(_))));
        assert_eq!(phases.last(), Some(&SubmissionPhase::Failed));
        assert_eq!(
            Feedback::for_outcome(&valid_form(), &result).message,
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_user_may_retry_after_failure() {
        let failing = MockTransport::replying(Ok(TransportResponse::new(503)));
        let (first, phases) = run(&failing, &valid_form());
        assert!(first.is_err());
        assert!(phases.last().unwrap().can_submit());

        let working = MockTransport::replying(Ok(TransportResponse::new(201)));
        let (second, _) = run(&working, &valid_form());
        assert!(second.is_ok());
    }

    /// Drive the feedback timers on a simulated clock, the way the banner
    /// does: wait each delay, apply the step, and settle the phase once the
    /// message is gone. Returns the time of removal.
    fn play_schedule(slot: &mut FeedbackSlot, phase: &mut SubmissionPhase, id: u64) -> Option<u32> {
        let mut now = 0u32;
        for (delay, step) in FEEDBACK_SCHEDULE {
            now += delay;
            let applied = slot.apply(id, step);
            if step == FeedbackStep::Fade {
                assert_eq!(applied, slot.current().is_some_and(|s| s.id == id && s.fading));
            }
            if applied && step == FeedbackStep::Dismiss {
                phase.settle();
                return Some(now);
            }
        }
        None
    }

    #[test]
    fn test_feedback_removed_within_lifetime() {
        let transport = MockTransport::replying(Ok(TransportResponse::new(500)));
        let (result, phases) = run(&transport, &valid_form());
        let mut phase = *phases.last().unwrap();
        assert_eq!(phase, SubmissionPhase::Failed);

        let mut slot = FeedbackSlot::new();
        let id = slot.show(Feedback::for_outcome(&valid_form(), &result));

        let removed_at = play_schedule(&mut slot, &mut phase, id).unwrap();
        assert!(removed_at <= 5300);
        assert!(slot.current().is_none());
        assert_eq!(phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_replaced_feedback_outlives_old_schedule() {
        let mut slot = FeedbackSlot::new();
        let mut phase = SubmissionPhase::Failed;
        let first = slot.show(Feedback::error(GENERIC_ERROR_MESSAGE));
        let second = slot.show(Feedback::success(SUCCESS_MESSAGE));

        // The first message's timers neither fade nor remove the second
        assert_eq!(play_schedule(&mut slot, &mut phase, first), None);
        assert_eq!(slot.current().map(|s| (s.id, s.fading)), Some((second, false)));
        assert_eq!(phase, SubmissionPhase::Failed);

        assert!(play_schedule(&mut slot, &mut phase, second).is_some());
        assert_eq!(phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_dismissal_does_not_interrupt_new_submission() {
        let mut slot = FeedbackSlot::new();
        let id = slot.show(Feedback::error(GENERIC_ERROR_MESSAGE));
        let mut phase = SubmissionPhase::Submitting;

        assert!(play_schedule(&mut slot, &mut phase, id).is_some());
        assert_eq!(phase, SubmissionPhase::Submitting);
    }

    #[test]
    fn test_anchor_navigation_closes_menu() {
        let mut menu = MenuState::new();
        menu.toggle();

        let action = resolve_anchor("#section2", 80.0, menu, |_| Some(900.0));
        assert!(action.apply_to_menu(&mut menu));
        assert!(!menu.is_open());
        assert!(matches!(action, AnchorAction::ScrollTo { top, .. } if top == 800.0));
    }

    #[test]
    fn test_missing_anchor_leaves_menu_open() {
        let mut menu = MenuState::new();
        menu.toggle();

        let action = resolve_anchor("#missing", 80.0, menu, |_| None);
        assert_eq!(action, AnchorAction::Missing);
        assert!(!action.apply_to_menu(&mut menu));
        assert!(menu.is_open());
    }

    #[test]
    fn test_contact_form_missing_message_makes_no_request() {
        let transport = MockTransport::replying(Ok(TransportResponse::new(200)));
        let form = ContactForm::new("Ana", "ana@school.org", "   ");
        let (result, phases) = run(&transport, &form);

        assert_eq!(
            result,
            Err(FormError::MissingField(crate::core::form::RequiredField::Message))
        );
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(phases.last(), Some(&SubmissionPhase::Failed));
        assert_eq!(Feedback::for_outcome(&form, &result).message, MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_contact_form_thanks_visitor_by_name() {
        let transport = MockTransport::replying(Ok(TransportResponse::new(200)));
        let form = ContactForm::new("Ana", "ana@school.org", "Do you offer district plans?");
        let (result, _) = run(&transport, &form);

        assert!(result.is_ok());
        assert_eq!(
            *transport.last_fields.borrow(),
            vec![
                ("name", "Ana".to_string()),
                ("email", "ana@school.org".to_string()),
                ("message", "Do you offer district plans?".to_string()),
            ]
        );

        let feedback = Feedback::for_outcome(&form, &result);
        assert_eq!(feedback.kind, FeedbackKind::Success);
        assert_eq!(
            feedback.message,
            "Thank you Ana! We have received your message and will contact you at ana@school.org soon."
        );
    }

    #[test]
    fn test_initial_snapshot_at_top_of_page() {
        let sections = vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
        ];
        let snapshot = ScrollSnapshot::compute(0.0, &sections);
        assert!(!snapshot.scrolled);
        assert_eq!(snapshot.active_section.as_deref(), Some("home"));

        let snapshot = ScrollSnapshot::compute(700.0, &sections);
        assert!(snapshot.scrolled);
        assert_eq!(snapshot.active_section.as_deref(), Some("about"));
    }
}
