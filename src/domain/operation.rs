//! Outcome of a mutating service call

use serde::Serialize;

use super::events::EventMessages;

/// A result together with whether the attempt succeeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt<T> {
    success: bool,
    result: T,
}

impl<T> Attempt<T> {
    pub fn succeed(result: T) -> Self {
        Self {
            success: true,
            result,
        }
    }

    pub fn fail(result: T) -> Self {
        Self {
            success: false,
            result,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn result(&self) -> &T {
        &self.result
    }

    pub fn into_result(self) -> T {
        self.result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperationStatusType {
    Success,
    /// A before-event observer cancelled the operation
    Cancelled,
}

impl std::fmt::Display for OperationStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationStatus {
    pub status_type: OperationStatusType,
    pub messages: EventMessages,
}

impl OperationStatus {
    pub fn success(messages: EventMessages) -> Attempt<OperationStatus> {
        Attempt::succeed(Self {
            status_type: OperationStatusType::Success,
            messages,
        })
    }

    pub fn cancelled(messages: EventMessages) -> Attempt<OperationStatus> {
        Attempt::fail(Self {
            status_type: OperationStatusType::Cancelled,
            messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::{EventMessage, EventMessageType};

    #[test]
    fn success_attempt() {
        let attempt = OperationStatus::success(EventMessages::new());
        assert!(attempt.success());
        assert_eq!(attempt.result().status_type, OperationStatusType::Success);
    }

    #[test]
    fn cancelled_attempt_keeps_messages() {
        let mut messages = EventMessages::new();
        messages.add(EventMessage::new("Domains", "Blocked", EventMessageType::Error));

        let attempt = OperationStatus::cancelled(messages);
        assert!(!attempt.success());

        let status = attempt.into_result();
        assert_eq!(status.status_type, OperationStatusType::Cancelled);
        assert_eq!(status.messages.len(), 1);
    }

    #[test]
    fn status_type_display() {
        assert_eq!(OperationStatusType::Success.to_string(), "Success");
        assert_eq!(OperationStatusType::Cancelled.to_string(), "Cancelled");
    }
}
