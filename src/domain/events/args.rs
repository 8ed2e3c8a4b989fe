//! Arguments handed to domain event observers

use super::messages::{EventMessage, EventMessages};
use crate::domain::domains::Domain;

/// Arguments for after-events (`saved`, `deleted`).
///
/// Observers may still append messages; there is nothing left to cancel.
#[derive(Debug, Clone)]
pub struct EventArgs {
    entity: Domain,
    messages: EventMessages,
}

impl EventArgs {
    pub fn new(entity: Domain, messages: EventMessages) -> Self {
        Self { entity, messages }
    }

    pub fn entity(&self) -> &Domain {
        &self.entity
    }

    pub fn messages(&self) -> &EventMessages {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut EventMessages {
        &mut self.messages
    }

    pub fn into_messages(self) -> EventMessages {
        self.messages
    }
}

/// Arguments for before-events (`saving`, `deleting`).
///
/// The cancel flag is a decision folded over every observer in turn: once set
/// it stays set, and later observers see it.
#[derive(Debug, Clone)]
pub struct CancellableEventArgs {
    args: EventArgs,
    cancel: bool,
}

impl CancellableEventArgs {
    pub fn new(entity: Domain, messages: EventMessages) -> Self {
        Self {
            args: EventArgs::new(entity, messages),
            cancel: false,
        }
    }

    pub fn entity(&self) -> &Domain {
        self.args.entity()
    }

    pub fn messages(&self) -> &EventMessages {
        self.args.messages()
    }

    pub fn messages_mut(&mut self) -> &mut EventMessages {
        self.args.messages_mut()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
    }

    pub fn cancel(&mut self) {
        self.cancel = true;
    }

    /// Cancel and tell the caller why
    pub fn cancel_operation(&mut self, message: EventMessage) {
        self.cancel = true;
        self.args.messages_mut().add(message);
    }

    pub fn into_messages(self) -> EventMessages {
        self.args.into_messages()
    }
}
