//! Event messages collected while an operation runs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventMessageType {
    #[default]
    Default,
    Info,
    Error,
    Success,
    Warning,
}

/// A message an observer or repository leaves for the caller's UI/log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMessage {
    pub category: String,
    pub message: String,
    pub message_type: EventMessageType,
}

impl EventMessage {
    pub fn new(
        category: impl Into<String>,
        message: impl Into<String>,
        message_type: EventMessageType,
    ) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
            message_type,
        }
    }
}

/// Per-call message bag, created fresh for every mutating operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMessages {
    messages: Vec<EventMessage>,
}

impl EventMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: EventMessage) {
        self.messages.push(message);
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventMessages {
    type Item = &'a EventMessage;
    type IntoIter = std::slice::Iter<'a, EventMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
