//! The conversation panel state machine.
//!
//! The panel owns the transcript, the draft being composed, and the
//! open/waiting flags. Per request it moves `Idle -> Waiting -> Idle`;
//! there is no error state, because the generator contract guarantees a
//! displayable reply for every accepted submission.

use crate::chat::{ChatMessage, Transcript};
use crate::generator::ResponseGenerator;

/// State for the floating chat panel.
///
/// At most one request is in flight at a time: while `waiting` is set,
/// further submissions are rejected as silent no-ops, which keeps
/// replies appended in submission order.
#[derive(Debug, Clone)]
pub struct Panel {
    transcript: Transcript,
    draft: String,
    open: bool,
    waiting: bool,
}

impl Panel {
    /// Create a closed, idle panel with a fresh transcript.
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            draft: String::new(),
            open: false,
            waiting: false,
        }
    }

    /// The conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The uncommitted text the visitor is composing.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a request is outstanding.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Flip the panel open or closed. Transcript and draft are untouched.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Close the panel. State persists for when it is reopened.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Replace the draft text. Any text is accepted, including empty.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Start a submission.
    ///
    /// Rejected as a no-op when the trimmed draft is empty or a request
    /// is already in flight. On acceptance the user message is appended,
    /// the draft cleared, and the waiting flag set; the returned text is
    /// the prompt to hand to the generator.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.waiting || self.draft.trim().is_empty() {
            return None;
        }

        let content = std::mem::take(&mut self.draft);
        self.transcript.push(ChatMessage::user(content.clone()));
        self.waiting = true;
        Some(content)
    }

    /// Settle the in-flight submission with the generator's reply.
    ///
    /// Success and failure look the same here: the generator always hands
    /// back displayable text, so the reply is appended as an ordinary
    /// assistant message and the panel returns to idle.
    pub fn complete(&mut self, reply: impl Into<String>) {
        self.transcript.push(ChatMessage::assistant(reply));
        self.waiting = false;
    }

    /// Submit the current draft against `generator`.
    ///
    /// Composes [`Panel::begin_submit`] and [`Panel::complete`] around the
    /// generator call. Returns false when the submission was rejected
    /// (blank draft, or a request already outstanding).
    pub async fn submit<G: ResponseGenerator>(&mut self, generator: &G) -> bool {
        let Some(prompt) = self.begin_submit() else {
            return false;
        };

        let reply = generator.generate(&prompt).await;
        self.complete(reply);
        true
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{Role, WELCOME_MESSAGE};
    use std::cell::Cell;

    /// Stand-in generator that echoes the prompt and counts calls.
    struct Echo {
        calls: Cell<usize>,
    }

    impl Echo {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl ResponseGenerator for Echo {
        async fn generate(&self, prompt: &str) -> String {
            self.calls.set(self.calls.get() + 1);
            format!("echo: {prompt}")
        }
    }

    #[test]
    fn test_fresh_panel() {
        let panel = Panel::new();
        assert!(!panel.is_open());
        assert!(!panel.is_waiting());
        assert_eq!(panel.draft(), "");
        assert_eq!(panel.transcript().len(), 1);
        assert_eq!(panel.transcript().last().unwrap().content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_toggle_and_close_keep_state() {
        let mut panel = Panel::new();
        panel.set_draft("half-typed question");
        panel.toggle_open();
        assert!(panel.is_open());

        panel.close();
        assert!(!panel.is_open());

        panel.close();
        assert!(!panel.is_open());

        // Reopening finds the transcript and draft untouched.
        panel.toggle_open();
        assert_eq!(panel.draft(), "half-typed question");
        assert_eq!(panel.transcript().len(), 1);
    }

    #[test]
    fn test_begin_submit_rejects_blank_draft() {
        let mut panel = Panel::new();

        panel.set_draft("");
        assert!(panel.begin_submit().is_none());

        panel.set_draft("   \t  ");
        assert!(panel.begin_submit().is_none());

        assert_eq!(panel.transcript().len(), 1);
        assert!(!panel.is_waiting());
        // The whitespace draft is not auto-cleared by the rejection.
        assert_eq!(panel.draft(), "   \t  ");
    }

    #[test]
    fn test_begin_submit_appends_and_locks() {
        let mut panel = Panel::new();
        panel.set_draft("What languages do you use?");

        let prompt = panel.begin_submit().expect("submission accepted");
        assert_eq!(prompt, "What languages do you use?");
        assert_eq!(panel.draft(), "");
        assert!(panel.is_waiting());

        let last = panel.transcript().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "What languages do you use?");
    }

    #[test]
    fn test_second_submit_while_waiting_is_noop() {
        let mut panel = Panel::new();
        panel.set_draft("a");
        assert!(panel.begin_submit().is_some());

        panel.set_draft("b");
        assert!(panel.begin_submit().is_none());

        // Only "a"'s user message made it in; "b" stays in the draft.
        assert_eq!(panel.transcript().len(), 2);
        assert_eq!(panel.transcript().last().unwrap().content, "a");
        assert_eq!(panel.draft(), "b");

        panel.complete("reply to a");
        assert!(!panel.is_waiting());
        assert_eq!(panel.transcript().last().unwrap().content, "reply to a");
    }

    #[tokio::test]
    async fn test_submit_appends_exchange_in_order() {
        let mut panel = Panel::new();
        let generator = Echo::new();

        panel.set_draft("What languages do you use?");
        assert!(panel.submit(&generator).await);

        assert!(!panel.is_waiting());
        assert_eq!(panel.draft(), "");

        let roles: Vec<Role> = panel
            .transcript()
            .messages()
            .iter()
            .map(|m| m.role)
            .collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
        assert_eq!(
            panel.transcript().last().unwrap().content,
            "echo: What languages do you use?"
        );
        assert_eq!(generator.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejected_does_not_call_generator() {
        let mut panel = Panel::new();
        let generator = Echo::new();

        panel.set_draft("   ");
        assert!(!panel.submit(&generator).await);
        assert_eq!(generator.calls.get(), 0);
        assert_eq!(panel.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_transcript_grows_by_two_per_accepted_submission() {
        let mut panel = Panel::new();
        let generator = Echo::new();

        for n in 1usize..=5 {
            panel.set_draft(format!("question {n}"));
            assert!(panel.submit(&generator).await);
            assert_eq!(panel.transcript().len(), 1 + 2 * n);
        }
        assert_eq!(generator.calls.get(), 5);

        // User and assistant messages alternate after the welcome seed.
        for pair in panel.transcript().messages()[1..].chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
        }
    }
}
