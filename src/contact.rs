mod dispatch;
mod form;
mod validation;

pub use dispatch::{DispatchError, DispatchResponse, EmailDispatcher, NoticeKind, Notifier};
pub use form::{Field, FormFields, SubmissionState, UnknownField};
pub use validation::{validate, ValidationError, ValidationErrors};

use std::sync::Arc;

use leptos::prelude::*;

pub const SUCCESS_MESSAGE: &str = "Message send successfull";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    Delivered,
    Failed,
}

/// Flips the form back to `Idle` however the dispatch ends.
struct SendingGuard(RwSignal<SubmissionState>);

impl SendingGuard {
    fn begin(state: RwSignal<SubmissionState>) -> Self {
        state.set(SubmissionState::Sending);
        Self(state)
    }
}

impl Drop for SendingGuard {
    fn drop(&mut self) {
        // the signal may already be disposed if the form unmounted mid-flight
        self.0.try_set(SubmissionState::Idle);
    }
}

/// State and submission flow behind the contact form.
///
/// Field values, validation errors and the sending flag are separate signals so
/// the view only re-renders what changed. Each instance owns its own signals.
#[derive(Clone, Copy)]
pub struct ContactFormController {
    fields: RwSignal<FormFields>,
    errors: RwSignal<ValidationErrors>,
    state: RwSignal<SubmissionState>,
    dispatcher: StoredValue<Arc<dyn EmailDispatcher>>,
    notifier: StoredValue<Arc<dyn Notifier>>,
}

impl ContactFormController {
    pub fn new(dispatcher: Arc<dyn EmailDispatcher>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            fields: RwSignal::new(FormFields::default()),
            errors: RwSignal::new(ValidationErrors::default()),
            state: RwSignal::new(SubmissionState::Idle),
            dispatcher: StoredValue::new(dispatcher),
            notifier: StoredValue::new(notifier),
        }
    }

    /// Stores a keystroke. Errors are left alone until the next submit.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.fields.update(move |f| f.set(field, value));
    }

    /// Routes an input event by the element's `name` attribute.
    pub fn update_named(&self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = name.parse::<Field>()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn fields(&self) -> FormFields {
        self.fields.get()
    }

    pub fn field(&self, field: Field) -> String {
        self.fields.with(|f| f.get(field).to_string())
    }

    pub fn errors(&self) -> ValidationErrors {
        self.errors.get()
    }

    pub fn error_for(&self, field: Field) -> Option<String> {
        self.errors.with(|e| e.message(field))
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn is_sending(&self) -> bool {
        self.state() == SubmissionState::Sending
    }

    /// Validates, then hands the fields to the dispatcher.
    ///
    /// On success the form is cleared; on failure the input is kept so the user
    /// can retry. There is no automatic retry.
    pub async fn submit(&self) -> SubmitOutcome {
        let errors = self.fields.with_untracked(validate);
        if !errors.is_empty() {
            log::debug!("contact form has {} invalid field(s)", errors.len());
            self.errors.set(errors);
            return SubmitOutcome::Invalid;
        }
        self.errors.set(ValidationErrors::default());

        let fields = self.fields.get_untracked();
        let dispatcher = self.dispatcher.get_value();
        let _sending = SendingGuard::begin(self.state);

        match dispatcher.send(&fields).await {
            Ok(res) => {
                log::info!("contact message sent: {} {}", res.status, res.text);
                self.notify(NoticeKind::Success, SUCCESS_MESSAGE);
                self.fields.try_set(FormFields::default());
                SubmitOutcome::Delivered
            }
            Err(e) => {
                log::error!("contact message failed: {e}");
                self.notify(NoticeKind::Error, FAILURE_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }

    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notifier.try_with_value(|n| n.notify(kind, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        panic::{catch_unwind, AssertUnwindSafe},
        sync::Mutex,
    };

    use async_trait::async_trait;
    use futures::{channel::oneshot, executor::block_on};
    use http::StatusCode;

    type Reply = Result<DispatchResponse, DispatchError>;

    // Records every call; replies immediately unless a gate is installed.
    struct MockDispatcher {
        calls: Mutex<Vec<FormFields>>,
        reply: Reply,
        gate: Mutex<Option<oneshot::Receiver<Reply>>>,
    }

    impl MockDispatcher {
        fn replying(reply: Reply) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply,
                gate: Mutex::new(None),
            }
        }

        fn ok() -> Self {
            Self::replying(Ok(DispatchResponse {
                status: StatusCode::OK,
                text: "OK".to_string(),
            }))
        }

        fn failing() -> Self {
            Self::replying(Err(DispatchError::Request("network down".to_string())))
        }

        fn gated(rx: oneshot::Receiver<Reply>) -> Self {
            let d = Self::ok();
            *d.gate.lock().unwrap() = Some(rx);
            d
        }

        fn calls(&self) -> Vec<FormFields> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl EmailDispatcher for MockDispatcher {
        async fn send(&self, fields: &FormFields) -> Result<DispatchResponse, DispatchError> {
            self.calls.lock().unwrap().push(fields.clone());
            let gate = self.gate.lock().unwrap().take();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(DispatchError::Request("gate dropped".to_string()))),
                None => self.reply.clone(),
            }
        }
    }

    struct PanickingDispatcher;

    #[async_trait(?Send)]
    impl EmailDispatcher for PanickingDispatcher {
        async fn send(&self, _fields: &FormFields) -> Result<DispatchResponse, DispatchError> {
            panic!("dispatcher blew up");
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<(NoticeKind, String)>>,
    }

    impl RecordingNotifier {
        fn notices(&self) -> Vec<(NoticeKind, String)> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.notices.lock().unwrap().push((kind, message.to_string()));
        }
    }

    fn setup(
        dispatcher: MockDispatcher,
    ) -> (ContactFormController, Arc<MockDispatcher>, Arc<RecordingNotifier>) {
        let dispatcher = Arc::new(dispatcher);
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = ContactFormController::new(dispatcher.clone(), notifier.clone());
        (controller, dispatcher, notifier)
    }

    fn fill_alice(controller: &ContactFormController) {
        controller.update_field(Field::Name, "Alice");
        controller.update_field(Field::Email, "alice@example.com");
        controller.update_field(Field::Message, "Hello");
    }

    fn alice() -> FormFields {
        FormFields {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let (controller, _, _) = setup(MockDispatcher::ok());
        assert_eq!(controller.fields(), FormFields::default());
        assert!(controller.errors().is_empty());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(!controller.is_sending());
    }

    #[test]
    fn test_each_empty_field_blocks_dispatch() {
        for missing in Field::all() {
            let (controller, dispatcher, notifier) = setup(MockDispatcher::ok());
            fill_alice(&controller);
            controller.update_field(missing, "");

            let outcome = block_on(controller.submit());

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert!(controller.error_for(missing).is_some());
            assert_eq!(controller.errors().len(), 1);
            assert!(dispatcher.calls().is_empty());
            assert!(notifier.notices().is_empty());
            assert_eq!(controller.state(), SubmissionState::Idle);
        }
    }

    #[test]
    fn test_invalid_email_blocks_dispatch() {
        for email in ["foo", "foo@bar"] {
            let (controller, dispatcher, _) = setup(MockDispatcher::ok());
            fill_alice(&controller);
            controller.update_field(Field::Email, email);

            assert_eq!(block_on(controller.submit()), SubmitOutcome::Invalid);
            assert_eq!(
                controller.error_for(Field::Email).as_deref(),
                Some("Email is invalid")
            );
            assert!(dispatcher.calls().is_empty());
        }
    }

    #[test]
    fn test_invalid_submit_keeps_input() {
        let (controller, _, _) = setup(MockDispatcher::ok());
        controller.update_field(Field::Name, "Bob");

        block_on(controller.submit());

        assert_eq!(controller.field(Field::Name), "Bob");
        assert_eq!(
            controller.error_for(Field::Message).as_deref(),
            Some("message is required")
        );
    }

    #[test]
    fn test_sending_while_dispatch_outstanding() {
        let (tx, rx) = oneshot::channel();
        let (controller, dispatcher, _) = setup(MockDispatcher::gated(rx));
        fill_alice(&controller);

        let observer = {
            let dispatcher = dispatcher.clone();
            async move {
                // submit has been polled up to the dispatcher's await point
                assert_eq!(controller.state(), SubmissionState::Sending);
                assert!(controller.errors().is_empty());
                assert_eq!(dispatcher.calls(), vec![alice()]);
                tx.send(Ok(DispatchResponse {
                    status: StatusCode::OK,
                    text: "OK".to_string(),
                }))
                .unwrap();
            }
        };

        let (outcome, ()) = block_on(async { futures::join!(controller.submit(), observer) });

        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(dispatcher.calls().len(), 1);
    }

    #[test]
    fn test_success_resets_fields_and_notifies() {
        let (controller, dispatcher, notifier) = setup(MockDispatcher::ok());
        fill_alice(&controller);

        let outcome = block_on(controller.submit());

        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(dispatcher.calls(), vec![alice()]);
        assert_eq!(controller.fields(), FormFields::default());
        assert_eq!(
            notifier.notices(),
            vec![(NoticeKind::Success, SUCCESS_MESSAGE.to_string())]
        );
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_failure_keeps_fields_and_notifies() {
        let (controller, dispatcher, notifier) = setup(MockDispatcher::failing());
        fill_alice(&controller);

        let outcome = block_on(controller.submit());

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(dispatcher.calls().len(), 1);
        assert_eq!(controller.fields(), alice());
        assert_eq!(
            notifier.notices(),
            vec![(NoticeKind::Error, FAILURE_MESSAGE.to_string())]
        );
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_rejected_reply_is_a_failure() {
        let (controller, _, notifier) = setup(MockDispatcher::replying(Err(
            DispatchError::Rejected {
                status: StatusCode::BAD_REQUEST,
                body: "The template ID is invalid".to_string(),
            },
        )));
        fill_alice(&controller);

        assert_eq!(block_on(controller.submit()), SubmitOutcome::Failed);
        assert_eq!(notifier.notices()[0].0, NoticeKind::Error);
        assert_eq!(controller.fields(), alice());
    }

    #[test]
    fn test_update_field_does_not_touch_errors() {
        let (controller, _, _) = setup(MockDispatcher::ok());
        block_on(controller.submit());
        let before = controller.errors();
        assert_eq!(before.len(), 3);

        controller.update_field(Field::Email, "x");
        controller.update_field(Field::Email, "x@y.com");

        assert_eq!(controller.field(Field::Email), "x@y.com");
        assert_eq!(controller.errors(), before);
    }

    #[test]
    fn test_update_named_routes_by_input_name() {
        let (controller, _, _) = setup(MockDispatcher::ok());

        controller.update_named("email", "x@y.com").unwrap();
        controller.update_named("message", "Hi").unwrap();

        assert_eq!(controller.field(Field::Email), "x@y.com");
        assert_eq!(controller.field(Field::Message), "Hi");
        assert_eq!(
            controller.update_named("subject", "spam"),
            Err(UnknownField("subject".to_string()))
        );
        // an unknown name leaves every field alone
        assert_eq!(controller.field(Field::Name), "");
        assert_eq!(controller.fields().email, "x@y.com");
    }

    #[test]
    fn test_success_resubmit_dispatches_again() {
        let (controller, dispatcher, notifier) = setup(MockDispatcher::ok());

        fill_alice(&controller);
        assert_eq!(block_on(controller.submit()), SubmitOutcome::Delivered);
        assert_eq!(controller.fields(), FormFields::default());

        fill_alice(&controller);
        assert_eq!(block_on(controller.submit()), SubmitOutcome::Delivered);

        assert_eq!(dispatcher.calls(), vec![alice(), alice()]);
        assert_eq!(
            notifier.notices(),
            vec![
                (NoticeKind::Success, SUCCESS_MESSAGE.to_string()),
                (NoticeKind::Success, SUCCESS_MESSAGE.to_string()),
            ]
        );
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_valid_submit_clears_stale_errors() {
        let (controller, _, _) = setup(MockDispatcher::ok());
        block_on(controller.submit());
        assert!(!controller.errors().is_empty());

        fill_alice(&controller);
        block_on(controller.submit());

        assert!(controller.errors().is_empty());
    }

    #[test]
    fn test_resubmit_dispatches_again() {
        let (controller, dispatcher, notifier) = setup(MockDispatcher::failing());
        fill_alice(&controller);

        block_on(controller.submit());
        block_on(controller.submit());

        // input survives failures, so the same values go out twice
        assert_eq!(dispatcher.calls(), vec![alice(), alice()]);
        assert_eq!(notifier.notices().len(), 2);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_panicking_dispatcher_still_returns_to_idle() {
        let notifier = Arc::new(RecordingNotifier::default());
        let controller =
            ContactFormController::new(Arc::new(PanickingDispatcher), notifier.clone());
        fill_alice(&controller);

        let res = catch_unwind(AssertUnwindSafe(|| block_on(controller.submit())));

        assert!(res.is_err());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(notifier.notices().is_empty());
        assert_eq!(controller.fields(), alice());
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let (first, _, _) = setup(MockDispatcher::ok());
        let (second, _, _) = setup(MockDispatcher::ok());
        first.update_field(Field::Name, "Alice");
        assert_eq!(second.field(Field::Name), "");
    }
}
