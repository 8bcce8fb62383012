//! Transient form status message.
//!
//! At most one message is displayed per form. Every message gets a fresh
//! generation; the removal timer of a superseded generation must not remove
//! the message that replaced it.

use crate::contact::{ContactEnquiry, SUCCESS_MESSAGE, ValidationError};

pub const MESSAGE_CLASS: &str = "form-message";

const BASE_STYLE: &str =
    "padding: 1rem; margin-bottom: 1rem; border-radius: 0.5rem; font-weight: 500;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    fn modifier(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }

    pub fn class_name(self) -> String {
        format!("{MESSAGE_CLASS} {MESSAGE_CLASS}--{}", self.modifier())
    }

    pub fn inline_style(self) -> String {
        let palette = match self {
            StatusKind::Success => {
                "background-color: #d1fae5; color: #065f46; border: 1px solid #6ee7b7;"
            }
            StatusKind::Error => {
                "background-color: #fee2e2; color: #991b1b; border: 1px solid #fca5a5;"
            }
        };
        format!("{BASE_STYLE} {palette}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn for_outcome(outcome: &Result<ContactEnquiry, ValidationError>) -> Self {
        match outcome {
            Ok(_) => Self {
                kind: StatusKind::Success,
                text: SUCCESS_MESSAGE.to_owned(),
            },
            Err(err) => Self {
                kind: StatusKind::Error,
                text: err.to_string(),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shown {
    pub generation: u64,
    /// Generation of the message this one replaced, if one was still displayed.
    pub superseded: Option<u64>,
}

#[derive(Debug, Default)]
pub struct StatusSlot {
    current: Option<u64>,
    next: u64,
}

impl StatusSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new message, displacing any displayed one.
    pub fn show(&mut self) -> Shown {
        let generation = self.next;
        self.next += 1;
        let superseded = self.current.replace(generation);
        Shown {
            generation,
            superseded,
        }
    }

    /// Called when a removal timer fires. Returns whether the message of this
    /// generation is still displayed and should now be removed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.current == Some(generation) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn current(&self) -> Option<u64> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_by_kind() {
        assert_eq!(StatusKind::Success.class_name(), "form-message form-message--success");
        assert_eq!(StatusKind::Error.class_name(), "form-message form-message--error");
        assert!(StatusKind::Success.inline_style().contains("#d1fae5"));
        assert!(StatusKind::Error.inline_style().contains("#fee2e2"));
        assert!(StatusKind::Error.inline_style().starts_with("padding: 1rem;"));
    }

    #[test]
    fn message_follows_outcome() {
        let err = StatusMessage::for_outcome(&Err(ValidationError::InvalidEmail));
        assert_eq!(err.kind, StatusKind::Error);
        assert_eq!(err.text, "Please enter a valid email address.");

        let ok = StatusMessage::for_outcome(&Ok(ContactEnquiry {
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            phone: "123".to_owned(),
        }));
        assert_eq!(ok.kind, StatusKind::Success);
        assert_eq!(ok.text, SUCCESS_MESSAGE);
    }

    #[test]
    fn rapid_submissions_keep_a_single_message() {
        let mut slot = StatusSlot::new();
        let first = slot.show();
        let second = slot.show();
        let third = slot.show();

        assert_eq!(first.superseded, None);
        assert_eq!(second.superseded, Some(first.generation));
        assert_eq!(third.superseded, Some(second.generation));
        assert_eq!(slot.current(), Some(third.generation));
    }

    #[test]
    fn stale_timer_does_not_remove_replacement() {
        let mut slot = StatusSlot::new();
        let first = slot.show();
        let second = slot.show();

        assert!(!slot.expire(first.generation));
        assert_eq!(slot.current(), Some(second.generation));

        assert!(slot.expire(second.generation));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn expiry_is_one_shot() {
        let mut slot = StatusSlot::new();
        let shown = slot.show();
        assert!(slot.expire(shown.generation));
        assert!(!slot.expire(shown.generation));
    }
}
