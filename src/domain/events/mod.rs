//! Domain events
//!
//! - observer arguments and cancellation (`args`)
//! - per-call event messages (`messages`)
//! - observer registration and dispatch (`handlers`)

pub mod args;
pub mod handlers;
pub mod messages;

pub use args::{CancellableEventArgs, EventArgs};
pub use handlers::{DomainEvents, EventHandlers, SubscriptionId};
pub use messages::{EventMessage, EventMessageType, EventMessages};
