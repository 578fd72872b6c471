//! State behind the landing-page question box.
//!
//! The component owns one `AskFlow`. A submission goes `begin()` -> one
//! request -> `settle()`, and `Pending` is the only thing stopping a second
//! request from going out while the first is unanswered.

use log::{info, warn};

use crate::api::AskError;

/// Shown whenever the backend could not produce an answer, whatever the cause.
pub const ERROR_MESSAGE: &str = "Erro ao processar sua pergunta. Tente novamente.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Settled,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AskFlow {
    question: String,
    last_question: Option<String>,
    answer: Option<String>,
    state: RequestState,
}

impl AskFlow {
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn last_question(&self) -> Option<&str> {
        self.last_question.as_deref()
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == RequestState::Pending
    }

    pub fn set_question(&mut self, text: String) {
        self.question = text;
    }

    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.question.trim().is_empty()
    }

    /// Moves to `Pending` and hands back the trimmed question to send.
    /// Returns `None` and leaves everything untouched when nothing may be sent.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let question = self.question.trim().to_string();
        self.question.clear();
        self.last_question = Some(question.clone());
        self.state = RequestState::Pending;
        Some(question)
    }

    /// Records the outcome of the in-flight request. Outcomes arriving when
    /// nothing is pending are dropped.
    pub fn settle(&mut self, outcome: Result<String, AskError>) {
        if !self.is_pending() {
            warn!("Dropping answer that arrived with no request pending");
            return;
        }
        match outcome {
            Ok(answer) => {
                info!("Answer received ({} chars)", answer.len());
                self.answer = Some(answer);
            }
            Err(e) => {
                warn!("Ask request failed: {}", e);
                self.answer = Some(ERROR_MESSAGE.to_string());
            }
        }
        self.state = RequestState::Settled;
    }
}

/// Enter submits, Shift+Enter is left to the textarea as a newline.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode_answer;
    use std::cell::Cell;

    /// Stand-in for the backend: counts calls and replies with a canned body
    /// or a transport failure.
    struct MockEndpoint {
        calls: Cell<usize>,
        reply: Result<&'static str, AskError>,
    }

    impl MockEndpoint {
        fn answering(body: &'static str) -> Self {
            Self { calls: Cell::new(0), reply: Ok(body) }
        }

        fn failing(err: AskError) -> Self {
            Self { calls: Cell::new(0), reply: Err(err) }
        }

        fn call(&self, _question: &str) -> Result<String, AskError> {
            self.calls.set(self.calls.get() + 1);
            match &self.reply {
                Ok(body) => decode_answer(body),
                Err(e) => Err(e.clone()),
            }
        }
    }

    /// What the component does on a button click: send only if `begin` allows it.
    fn trigger(flow: &mut AskFlow, endpoint: &MockEndpoint) -> Option<Result<String, AskError>> {
        flow.begin().map(|question| endpoint.call(&question))
    }

    fn flow_with(question: &str) -> AskFlow {
        let mut flow = AskFlow::default();
        flow.set_question(question.to_string());
        flow
    }

    #[test]
    fn starts_idle_with_no_answer() {
        let flow = AskFlow::default();
        assert_eq!(flow.state(), RequestState::Idle);
        assert!(flow.answer().is_none());
        assert!(!flow.can_submit());
    }

    #[test]
    fn empty_or_blank_question_sends_nothing() {
        let endpoint = MockEndpoint::answering(r#"{"answer":"X"}"#);
        for text in ["", "   ", "\n\t "] {
            let mut flow = flow_with(text);
            assert!(trigger(&mut flow, &endpoint).is_none());
            assert_eq!(flow.state(), RequestState::Idle);
            assert!(flow.answer().is_none());
        }
        assert_eq!(endpoint.calls.get(), 0);
    }

    #[test]
    fn blank_question_keeps_previous_answer() {
        let endpoint = MockEndpoint::answering(r#"{"answer":"primeira"}"#);
        let mut flow = flow_with("pergunta");
        let outcome = trigger(&mut flow, &endpoint).unwrap();
        flow.settle(outcome);

        flow.set_question("  ".to_string());
        assert!(trigger(&mut flow, &endpoint).is_none());
        assert_eq!(flow.answer(), Some("primeira"));
        assert_eq!(endpoint.calls.get(), 1);
    }

    #[test]
    fn begin_trims_and_goes_pending() {
        let mut flow = flow_with("  Posso ser demitido durante as férias?  \n");
        let sent = flow.begin();
        assert_eq!(sent.as_deref(), Some("Posso ser demitido durante as férias?"));
        assert!(flow.is_pending());
        assert_eq!(flow.question(), "");
        assert_eq!(flow.last_question(), Some("Posso ser demitido durante as férias?"));
    }

    #[test]
    fn successful_answer_is_displayed_and_trigger_reenabled() {
        let endpoint = MockEndpoint::answering(r#"{"answer":"X"}"#);
        let mut flow = flow_with("Qual o prazo de prescrição?");
        let outcome = trigger(&mut flow, &endpoint).unwrap();
        flow.settle(outcome);

        assert_eq!(flow.answer(), Some("X"));
        assert_eq!(flow.state(), RequestState::Settled);
        assert!(!flow.is_pending());

        flow.set_question("Outra pergunta".to_string());
        assert!(flow.can_submit());
    }

    #[test]
    fn failure_shows_fixed_message_and_reenables_trigger() {
        let endpoint = MockEndpoint::failing(AskError::Network("connection refused".to_string()));
        let mut flow = flow_with("Como faço um contrato de aluguel?");
        let outcome = trigger(&mut flow, &endpoint).unwrap();
        flow.settle(outcome);

        assert_eq!(flow.answer(), Some(ERROR_MESSAGE));
        assert_eq!(flow.state(), RequestState::Settled);
        flow.set_question("de novo".to_string());
        assert!(flow.can_submit());
    }

    #[test]
    fn malformed_body_and_bad_status_use_the_same_message() {
        let endpoint = MockEndpoint::answering("not json");
        let mut flow = flow_with("a");
        let outcome = trigger(&mut flow, &endpoint).unwrap();
        flow.settle(outcome);
        assert_eq!(flow.answer(), Some(ERROR_MESSAGE));

        let mut flow = flow_with("b");
        flow.begin();
        flow.settle(Err(AskError::Status(500)));
        assert_eq!(flow.answer(), Some(ERROR_MESSAGE));
    }

    #[test]
    fn no_second_request_while_pending() {
        let endpoint = MockEndpoint::answering(r#"{"answer":"X"}"#);
        let mut flow = flow_with("primeira");
        assert!(flow.begin().is_some());

        flow.set_question("segunda".to_string());
        assert!(!flow.can_submit());
        assert!(trigger(&mut flow, &endpoint).is_none());
        if is_submit_key("Enter", false) {
            assert!(trigger(&mut flow, &endpoint).is_none());
        }
        assert_eq!(endpoint.calls.get(), 0);
        assert!(flow.is_pending());
        assert_eq!(flow.question(), "segunda");
    }

    #[test]
    fn new_answer_replaces_previous_one() {
        let mut flow = flow_with("um");
        flow.begin();
        flow.settle(Ok("resposta um".to_string()));
        flow.set_question("dois".to_string());
        flow.begin();
        flow.settle(Ok("resposta dois".to_string()));
        assert_eq!(flow.answer(), Some("resposta dois"));
        assert_eq!(flow.last_question(), Some("dois"));
    }

    #[test]
    fn stray_outcome_without_pending_request_is_ignored() {
        let mut flow = AskFlow::default();
        flow.settle(Ok("fantasma".to_string()));
        assert!(flow.answer().is_none());
        assert_eq!(flow.state(), RequestState::Idle);
    }

    #[test]
    fn only_plain_enter_submits() {
        assert!(is_submit_key("Enter", false));
        assert!(!is_submit_key("Enter", true));
        assert!(!is_submit_key("a", false));
        assert!(!is_submit_key("Tab", false));
    }
}
