use std::future::Future;
use std::rc::Rc;

use serde::Deserialize;
use yew::prelude::*;

use crate::error::SiteError;

pub const SPAM_DETECTED: &str = "Spam detected.";
pub const SENDING: &str = "Sending...";
pub const SENT: &str = "Message sent — thank you!";
pub const FAILED: &str = "Failed to send message.";
pub const TRANSPORT_FAILED: &str = "Error sending message.";

pub const STATUS_CLEAR_MS: u32 = 5000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Honeypot. Hidden from people, filled in by bots.
    pub website: String,
}

impl ContactFields {
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            name: get("name"),
            email: get("email"),
            phone: get("phone"),
            message: get("message"),
            website: get("website"),
        }
    }

    pub fn is_spam(&self) -> bool {
        !self.website.trim().is_empty()
    }
}

/// Body returned by the mail endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ContactReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// What came back over the wire, before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawReply {
    pub http_ok: bool,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Spam,
    Sent,
    Refused(String),
    Failed,
    TransportError,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Spam => SPAM_DETECTED.to_string(),
            Outcome::Sent => SENT.to_string(),
            Outcome::Refused(reason) => reason.clone(),
            Outcome::Failed => FAILED.to_string(),
            Outcome::TransportError => TRANSPORT_FAILED.to_string(),
        }
    }
}

pub fn classify(http_ok: bool, body: Option<ContactReply>) -> Outcome {
    if !http_ok {
        return Outcome::TransportError;
    }
    match body {
        // not JSON: trust the status line
        None => Outcome::Sent,
        Some(ContactReply { ok: true, .. }) => Outcome::Sent,
        Some(ContactReply { error: Some(reason), .. }) if !reason.trim().is_empty() => {
            Outcome::Refused(reason)
        }
        Some(_) => Outcome::Failed,
    }
}

pub fn interpret(raw: &RawReply) -> Outcome {
    let reply = match serde_json::from_str::<serde_json::Value>(&raw.body) {
        // JSON of the wrong shape is a refusal, not a success
        Ok(value) => Some(
            serde_json::from_value(value).unwrap_or(ContactReply { ok: false, error: None }),
        ),
        Err(_) => None,
    };
    classify(raw.http_ok, reply)
}

/// Where a submission goes: the form's own `action`, or `fallback` when it
/// has none.
pub fn submit_target(action: Option<&str>, fallback: &str) -> String {
    match action.map(str::trim) {
        Some(action) if !action.is_empty() => action.to_string(),
        _ => fallback.to_string(),
    }
}

/// Runs one submission. Always yields an outcome, so the caller's
/// re-enable path is never skipped.
pub async fn deliver<F, Fut>(fields: ContactFields, send: F) -> Outcome
where
    F: FnOnce(ContactFields) -> Fut,
    Fut: Future<Output = Result<RawReply, SiteError>>,
{
    if fields.is_spam() {
        return Outcome::Spam;
    }
    match send(fields).await {
        Ok(raw) => interpret(&raw),
        Err(e) => {
            log::warn!("contact form transport failed: {}", e);
            Outcome::TransportError
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub submitting: bool,
    pub status: Option<String>,
    /// Bumped on every finished submission; names the pending auto-clear.
    pub generation: u32,
    /// Bumped when the form should be reset.
    pub reset_token: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    Begin,
    Finish(Outcome),
    Expire(u32),
}

impl FormState {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Begin => {
                self.submitting = true;
                self.status = Some(SENDING.to_string());
            }
            FormAction::Finish(outcome) => {
                self.submitting = false;
                self.status = Some(outcome.message());
                self.generation = self.generation.wrapping_add(1);
                if outcome == Outcome::Sent {
                    self.reset_token = self.reset_token.wrapping_add(1);
                }
            }
            FormAction::Expire(generation) => {
                if generation == self.generation {
                    self.status = None;
                }
            }
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
            phone: String::new(),
            message: "Hello".to_string(),
            website: String::new(),
        }
    }

    fn reply(http_ok: bool, body: &str) -> Result<RawReply, SiteError> {
        Ok(RawReply {
            http_ok,
            body: body.to_string(),
        })
    }

    #[test]
    fn honeypot_short_circuits_without_network() {
        let called = Cell::new(false);
        let mut spam = fields();
        spam.website = "http://spam.example".to_string();

        let outcome = block_on(deliver(spam, |_| {
            called.set(true);
            async { reply(true, r#"{"ok":true}"#) }
        }));

        assert_eq!(outcome, Outcome::Spam);
        assert_eq!(outcome.message(), "Spam detected.");
        assert!(!called.get());
    }

    #[test]
    fn success_clears_form_and_expires_after_timeout() {
        let mut state = FormState::default();
        state.apply(FormAction::Begin);
        assert!(state.submitting);
        assert_eq!(state.status.as_deref(), Some(SENDING));

        let outcome = block_on(deliver(fields(), |sent| async move {
            assert_eq!(sent.email, "ada@example.org");
            reply(true, r#"{"ok":true,"error":null}"#)
        }));
        state.apply(FormAction::Finish(outcome));

        assert!(!state.submitting);
        assert_eq!(state.status.as_deref(), Some("Message sent — thank you!"));
        assert_eq!(state.reset_token, 1);
        assert_eq!(STATUS_CLEAR_MS, 5000);

        state.apply(FormAction::Expire(state.generation));
        assert_eq!(state.status, None);
    }

    #[test]
    fn server_error_status_is_a_transport_failure() {
        let mut state = FormState::default();
        state.apply(FormAction::Begin);
        let outcome = block_on(deliver(fields(), |_| async { reply(false, r#"{"ok":true}"#) }));
        state.apply(FormAction::Finish(outcome));

        assert!(!state.submitting);
        assert_eq!(state.status.as_deref(), Some(TRANSPORT_FAILED));
        assert_eq!(state.reset_token, 0);
    }

    #[test]
    fn network_error_is_reported_not_propagated() {
        let outcome = block_on(deliver(fields(), |_| async {
            Err(SiteError::Transport("offline".to_string()))
        }));
        assert_eq!(outcome, Outcome::TransportError);
    }

    #[test]
    fn backend_error_text_is_shown() {
        let raw = RawReply {
            http_ok: true,
            body: r#"{"ok":false,"error":"Please provide a valid email"}"#.to_string(),
        };
        assert_eq!(interpret(&raw).message(), "Please provide a valid email");
    }

    #[test]
    fn refusal_without_text_is_generic() {
        assert_eq!(classify(true, Some(ContactReply { ok: false, error: None })), Outcome::Failed);
        assert_eq!(
            classify(true, Some(ContactReply { ok: false, error: Some("  ".to_string()) })),
            Outcome::Failed
        );
    }

    #[test]
    fn non_json_body_follows_http_status() {
        let ok = RawReply { http_ok: true, body: "<html>sent</html>".to_string() };
        assert_eq!(interpret(&ok), Outcome::Sent);
        let bad = RawReply { http_ok: false, body: "oops".to_string() };
        assert_eq!(interpret(&bad), Outcome::TransportError);
    }

    #[test]
    fn stale_expiry_keeps_newer_message() {
        let mut state = FormState::default();
        state.apply(FormAction::Finish(Outcome::Failed));
        let first = state.generation;
        state.apply(FormAction::Finish(Outcome::Sent));

        state.apply(FormAction::Expire(first));
        assert_eq!(state.status.as_deref(), Some(SENT));
    }

    #[test]
    fn fields_from_lookup_default_to_empty() {
        let fields = ContactFields::from_lookup(|key| (key == "email").then(|| "x@y.z".to_string()));
        assert_eq!(fields.email, "x@y.z");
        assert_eq!(fields.name, "");
        assert!(!fields.is_spam());
    }

    #[test]
    fn json_reply_without_ok_shows_its_error() {
        let raw = RawReply {
            http_ok: true,
            body: r#"{"error":"Invalid method"}"#.to_string(),
        };
        assert_eq!(interpret(&raw), Outcome::Refused("Invalid method".to_string()));
        assert_eq!(interpret(&raw).message(), "Invalid method");
    }

    #[test]
    fn json_reply_of_unexpected_shape_is_a_failure() {
        for body in ["null", "[]", "{}", r#"{"ok":"yes"}"#] {
            let raw = RawReply { http_ok: true, body: body.to_string() };
            assert_eq!(interpret(&raw), Outcome::Failed, "body {}", body);
        }
    }

    #[test]
    fn form_action_wins_over_fallback_endpoint() {
        assert_eq!(submit_target(Some("/mail/send.php"), "/send.php"), "/mail/send.php");
        assert_eq!(submit_target(Some("  "), "/send.php"), "/send.php");
        assert_eq!(submit_target(None, "/send.php"), "/send.php");
    }
}
